pub mod cli;
pub mod config;
pub mod quote;
pub mod session;
pub mod state;
pub mod stats;

pub use config::Config;
pub use quote::{Quote, QuoteSelector, QUOTES};
pub use session::{SessionStore, SqliteSessionStore};
pub use state::{StateStore, StreakRecord, Validate, DEFAULT_STREAK};
pub use stats::{aggregate, ActivityKind, ActivitySession, DashboardStats, StreakSummary};
