use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "routinely", version, about = "Routinely CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Routine templates and live runs
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
    /// Emotion check-ins and connections
    Emotion {
        #[command(subcommand)]
        action: commands::emotion::EmotionAction,
    },
    /// Upcoming deadlines
    Deadline {
        #[command(subcommand)]
        action: commands::deadline::DeadlineAction,
    },
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Routine { action } => commands::routine::run(action),
        Commands::Emotion { action } => commands::emotion::run(action),
        Commands::Deadline { action } => commands::deadline::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
