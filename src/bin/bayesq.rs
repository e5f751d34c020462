//! bayesq CLI - Train and query Bayesian Q-learning agents

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bayesq")]
#[command(version, about = "Bayesian Q-learning toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train an agent on the corridor environment
    Train(bayesq::cli::commands::train::TrainArgs),

    /// Show the value table of a saved model
    Inspect(bayesq::cli::commands::inspect::InspectArgs),

    /// Ask a saved model for the next step
    Recommend(bayesq::cli::commands::recommend::RecommendArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "bayesq=debug"
    } else {
        "bayesq=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Train(args) => bayesq::cli::commands::train::execute(args),
        Commands::Inspect(args) => bayesq::cli::commands::inspect::execute(args),
        Commands::Recommend(args) => bayesq::cli::commands::recommend::execute(args),
    }
}
