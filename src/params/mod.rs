//! Projection parameters and withdrawal schedule loading

mod data;
pub mod loader;

pub use data::{check_period_count, percent_to_rate, uniform_withdrawals, ProjectionParams, MAX_PERIODS};
pub use loader::{load_withdrawals, load_withdrawals_from_reader};
