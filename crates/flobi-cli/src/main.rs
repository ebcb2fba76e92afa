use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "flobi-cli", version, about = "Flobi CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the level and growth stage for an xp value
    Progression {
        /// Accumulated experience points
        #[arg(long)]
        xp: u32,
    },
    /// Mission content generation
    Mission {
        #[command(subcommand)]
        action: commands::mission::MissionAction,
    },
    /// Fixed content catalogs
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Interactive in-memory garden session (state is not saved)
    Play {
        /// Start from a mid-game demo state instead of a fresh seed
        #[arg(long)]
        demo: bool,
        /// Use the offline static provider even if an API key is set
        #[arg(long)]
        offline: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Progression { xp } => commands::progression::run(xp),
        Commands::Mission { action } => commands::mission::run(action),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Play { demo, offline } => commands::play::run(demo, offline),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
