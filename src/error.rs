//! Error types for projection inputs, schedules and exports

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("withdrawal schedule is empty: at least one period is required")]
    EmptySchedule,

    #[error("period count mismatch: expected {expected} withdrawals, got {actual}")]
    PeriodCountMismatch { expected: usize, actual: usize },

    #[error("too many periods: {actual} requested, at most {max} supported")]
    TooManyPeriods { max: usize, actual: usize },

    #[error("invalid input for {field}: {value} (must be finite and non-negative)")]
    InvalidInput { field: String, value: f64 },

    #[error("invalid withdrawal schedule: {0}")]
    Schedule(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
