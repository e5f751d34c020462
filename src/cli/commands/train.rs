//! Train command - Train a Bayesian agent on the corridor environment

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    app::AgentConfig,
    cli::{
        config::ModelFormat,
        output::{format_number, print_kv, print_section},
    },
    environments::{Corridor, GoalReward},
    pipeline::{ProgressObserver, Trainer, TrainingConfig, TrainingResult},
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile<'a> {
    training: &'a TrainingResult,
    agent: &'a AgentConfig,
    corridor_length: usize,
    step_penalty: f64,
    states_learned: usize,
    entries_learned: usize,
}

/// Arguments for the train command
#[derive(Parser, Debug)]
pub struct TrainArgs {
    /// Number of cells in the corridor
    #[arg(long, short = 'l', default_value_t = 8)]
    pub length: usize,

    /// Number of training episodes
    #[arg(long, short = 'e', default_value_t = 200)]
    pub episodes: usize,

    /// Step budget per episode
    #[arg(long, default_value_t = 100)]
    pub max_steps: usize,

    /// Learning rate (alpha)
    #[arg(long, default_value_t = 0.5)]
    pub learning_rate: f64,

    /// Discount factor (gamma)
    #[arg(long, default_value_t = 0.9)]
    pub discount_factor: f64,

    /// Prior weight of the Bayesian average
    #[arg(long, default_value_t = 10)]
    pub priming_threshold: u32,

    /// Random seed for tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reward for every non-goal step
    #[arg(long, default_value_t = -0.01, allow_hyphen_values = true)]
    pub step_penalty: f64,

    /// Output path for the trained model
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Model format (inferred from the output extension by default)
    #[arg(long, value_enum)]
    pub format: Option<ModelFormat>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Write a JSON training summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Trailing separator or no file name means a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

/// Execute the train command
pub fn execute(args: TrainArgs) -> Result<()> {
    let corridor = Corridor::at(args.length.max(2), 0)?;
    let mut agent_config = AgentConfig::new(
        args.learning_rate,
        args.discount_factor,
        args.priming_threshold,
    );
    if let Some(seed) = args.seed {
        agent_config = agent_config.with_seed(seed);
    }

    let format = args
        .output
        .as_deref()
        .map(|path| ModelFormat::resolve(args.format, path))
        .unwrap_or(ModelFormat::Msgpack);
    let app = format.app(None);
    let mut agent = app.create_agent(agent_config.clone())?;

    let rewarder = GoalReward {
        step_penalty: args.step_penalty,
        ..GoalReward::default()
    };
    let mut trainer = Trainer::new(
        TrainingConfig {
            episodes: args.episodes,
            max_steps: args.max_steps,
        },
        rewarder,
    );
    if !args.no_progress {
        trainer = trainer.with_observer(ProgressObserver::new());
    }

    print_section("Training");
    print_kv("Corridor length", &corridor.length().to_string());
    print_kv("Episodes", &format_number(args.episodes));
    print_kv("Learning rate", &args.learning_rate.to_string());
    print_kv("Discount factor", &args.discount_factor.to_string());
    print_kv("Priming threshold", &args.priming_threshold.to_string());
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    let result = trainer.train(&mut agent, &corridor)?;

    print_section("Results");
    print_kv(
        "Reached goal",
        &format!(
            "{}/{}",
            format_number(result.terminal_episodes),
            format_number(result.episodes)
        ),
    );
    print_kv("Mean steps", &format!("{:.2}", result.mean_steps));
    print_kv("Mean reward", &format!("{:.4}", result.mean_reward));
    print_kv("States learned", &format_number(agent.q_table().state_count()));

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        app.save_agent(&agent, path)?;
        println!("\nModel saved to {}", path.display());
    }

    if let Some(raw) = &args.summary {
        let summary_path = sanitize_summary_path(raw);
        if summary_path != *raw {
            println!("\nNormalizing summary path to {}", summary_path.display());
        }
        if let Some(parent) = summary_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let summary = TrainingSummaryFile {
            training: &result,
            agent: &agent_config,
            corridor_length: corridor.length(),
            step_penalty: args.step_penalty,
            states_learned: agent.q_table().state_count(),
            entries_learned: agent.q_table().size(),
        };
        let file = File::create(&summary_path)
            .with_context(|| format!("creating {}", summary_path.display()))?;
        to_writer_pretty(file, &summary)?;
        println!("Summary written to {}", summary_path.display());
    }

    Ok(())
}
