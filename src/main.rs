use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stillpoint::cli::{dashboard, log, prefs, quote, streak};
use stillpoint::config::Config;
use stillpoint::session::SqliteSessionStore;
use stillpoint::state::StateStore;

#[derive(Parser)]
#[command(name = "stillpoint")]
#[command(about = "Wellness dashboard statistics and local state tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "stillpoint.yaml")]
    config: String,

    /// Override the configured user id
    #[arg(short, long)]
    user: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the aggregated activity dashboard
    Dashboard,

    /// Print an inspirational quote
    Quote {
        /// Number of consecutive distinct quotes to print
        #[arg(long, default_value_t = 1)]
        count: usize,
    },

    /// Streak cache management
    Streak {
        #[command(subcommand)]
        command: StreakCommands,
    },

    /// Preferences management
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },

    /// Record a completed activity session
    Log {
        /// Activity type (meditation, music, sounds, ...)
        activity: String,

        /// Session length in minutes
        #[arg(short, long)]
        minutes: Option<f64>,
    },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Show cached preferences
    Show,
    /// Update preference fields
    Set {
        /// Display name used in the dashboard greeting
        #[arg(long)]
        name: Option<String>,

        /// Hour of day (0-23) for the practice reminder
        #[arg(long)]
        reminder_hour: Option<i64>,
    },
}

#[derive(Subcommand)]
enum StreakCommands {
    /// Show the locally cached streak record
    Show,
    /// Pull remote streak counters into the local cache
    Sync,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config).unwrap_or_default();
    let user_id = cli.user.unwrap_or_else(|| config.user.id.clone());

    // Initialize stores
    let state = StateStore::open(&config.state_path())?;
    let sessions = SqliteSessionStore::open(&config.sessions_path())?;

    match cli.command {
        Commands::Dashboard => {
            dashboard::run(&state, &sessions, &user_id)?;
        }
        Commands::Quote { count } => {
            quote::run(count)?;
        }
        Commands::Streak { command } => match command {
            StreakCommands::Show => {
                streak::show(&state)?;
            }
            StreakCommands::Sync => {
                streak::sync(&state, &sessions, &user_id)?;
            }
        },
        Commands::Prefs { command } => match command {
            PrefsCommands::Show => {
                prefs::show(&state)?;
            }
            PrefsCommands::Set {
                name,
                reminder_hour,
            } => {
                prefs::set(&state, name, reminder_hour)?;
            }
        },
        Commands::Log { activity, minutes } => {
            log::run(&state, &sessions, &user_id, &activity, minutes)?;
        }
    }

    Ok(())
}
