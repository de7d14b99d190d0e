pub mod dashboard;
pub mod log;
pub mod prefs;
pub mod quote;
pub mod streak;
