mod compare;
mod config;
mod play;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "baduk", about = "9x9 Go in the terminal, against a search engine")]
struct Cli {
    /// Path to a JSON config file (depth, engine kinds, human color, ...).
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively against the configured engine.
    Play,
    /// Pit the two configured engines against each other.
    Compare {
        /// Number of games to play.
        #[arg(long, default_value_t = 10)]
        games: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "baduk_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => play::run(&config),
        Command::Compare { games } => compare::run(&config, games),
    }
}
