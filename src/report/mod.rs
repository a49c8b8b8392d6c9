pub mod generator;
pub mod stats;

pub use generator::generate_report;
pub use stats::{overview, weekly_completions, DayCount, Overview};
