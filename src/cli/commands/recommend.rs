//! Recommend command - Ask a saved model for the next corridor step

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::ModelFormat,
        output::{print_kv, print_section},
    },
    environments::Corridor,
    ports::{Action, State},
};

/// Arguments for the recommend command
#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Path to the saved model
    pub model: PathBuf,

    /// Corridor length the model was trained on
    #[arg(long, short = 'l', default_value_t = 8)]
    pub length: usize,

    /// Current position in the corridor
    #[arg(long, short = 'p', default_value_t = 0)]
    pub position: usize,

    /// Model format (inferred from the extension by default)
    #[arg(long, value_enum)]
    pub format: Option<ModelFormat>,

    /// Seed for tie-breaking (overrides the saved seed)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the recommend command
pub fn execute(args: RecommendArgs) -> Result<()> {
    let app = ModelFormat::resolve(args.format, &args.model).app(None);
    let mut agent = app.load_agent(&args.model)?;
    if let Some(seed) = args.seed {
        agent = agent.with_seed(seed);
    }

    let state = Corridor::at(args.length, args.position)?;
    let action = agent.recommend_action(&state)?;
    let state_id = state.id();

    print_section("Recommendation");
    print_kv("State", state_id.as_str());
    print_kv("Action", action.id().as_str());
    for candidate in state.possible_actions() {
        let id = candidate.id();
        print_kv(
            &format!("  q({id})"),
            &format!("{:.6}", agent.q_value(&state_id, &id)),
        );
    }

    Ok(())
}
