use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitquest-cli", version, about = "Habitquest CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile lifecycle (register, show, reset)
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Daily missions
    Mission {
        #[command(subcommand)]
        action: commands::mission::MissionAction,
    },
    /// Plans and upgrades
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Daily progress
    Summary {
        #[command(subcommand)]
        action: commands::summary::SummaryAction,
    },
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Mission { action } => commands::mission::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Summary { action } => commands::summary::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
