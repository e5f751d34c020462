//! Inspect command - Show the value table of a saved model

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::{
        config::ModelFormat,
        output::{format_number, print_kv, print_section, print_state},
    },
    identifiers::StateId,
};

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the saved model
    pub model: PathBuf,

    /// Model format (inferred from the extension by default)
    #[arg(long, value_enum)]
    pub format: Option<ModelFormat>,

    /// Only show this state
    #[arg(long, short = 's')]
    pub state: Option<String>,

    /// Print the agent context as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    let app = ModelFormat::resolve(args.format, &args.model).app(None);
    let agent = app.load_agent(&args.model)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&agent.context())?);
        return Ok(());
    }

    print_section(&format!("Model: {}", args.model.display()));
    print_kv("Learning rate", &agent.learning_rate().to_string());
    print_kv("Discount factor", &agent.discount_factor().to_string());
    print_kv("Priming threshold", &agent.priming_threshold().to_string());
    if let Some(seed) = agent.seed() {
        print_kv("Seed", &seed.to_string());
    }
    print_kv("States", &format_number(agent.q_table().state_count()));
    print_kv("Entries", &format_number(agent.q_table().size()));

    match args.state {
        Some(state) => {
            let state = StateId::new(state);
            let Some(actions) = agent.q_table().actions(&state) else {
                bail!("state '{state}' not found in model");
            };
            print_state(&state, actions);
        }
        None => {
            for (state, actions) in agent.q_table().iter() {
                print_state(state, actions);
            }
        }
    }

    Ok(())
}
