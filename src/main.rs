use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "goalquest")]
#[command(about = "Habit tracker that levels you up: streaks, XP, ranks and heatmaps")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.goalquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the state file (overrides the config)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track a new goal
    Add {
        /// Name of the goal (e.g., pushups)
        name: String,

        /// Unit label shown next to quantities (e.g., reps, pages, minutes)
        #[arg(short, long, default_value = "times")]
        unit: String,

        /// Attribute the goal trains: STR, AGI, INT, VIT or PER
        #[arg(short, long, default_value = "STR")]
        attr: String,
    },

    /// Log progress: +N/-N adds to the day, a bare N sets it
    Log {
        /// Name of the goal
        name: String,

        /// Amount to log (e.g., 5, +1, -2)
        #[arg(default_value = "+1", allow_hyphen_values = true)]
        amount: String,

        /// Day to log for, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show heatmaps and streaks for one goal, or every active goal
    Show {
        /// Name of the goal
        name: Option<String>,

        /// Show a single heatmap combining all active goals
        #[arg(long, conflicts_with = "name")]
        overall: bool,
    },

    /// Show level, rank, attributes and badges
    Profile {
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all goals
    List,

    /// Pause a goal (history is kept)
    Archive {
        /// Name of the goal
        name: String,
    },

    /// Resume an archived goal
    Restore {
        /// Name of the goal
        name: String,
    },

    /// Generate a demo goal with a year of random history
    Seed,

    /// Write a default ~/.goalquest/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; command output goes to stdout, logs to stderr
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let Cli {
        config,
        data,
        command,
        ..
    } = cli;
    let context = || cli::Context::load(config.as_deref(), data.clone());

    match command {
        Commands::Init { force } => cli::init::init_command(config.clone(), force),
        Commands::Add { name, unit, attr } => {
            cli::goals::add_command(&context()?, &name, &unit, &attr)
        }
        Commands::Log { name, amount, date } => {
            cli::log::log_command(&context()?, &name, &amount, date.as_deref())
        }
        Commands::Show { name, overall } => {
            cli::show::show_command(&context()?, name.as_deref(), overall)
        }
        Commands::Profile { json } => cli::profile::profile_command(&context()?, json),
        Commands::List => cli::goals::list_command(&context()?),
        Commands::Archive { name } => cli::goals::archive_command(&context()?, &name),
        Commands::Restore { name } => cli::goals::restore_command(&context()?, &name),
        Commands::Seed => cli::seed::seed_command(&context()?),
    }
}
