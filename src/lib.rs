//! ROI Projection - monthly return, delayed support income and reinvestment
//!
//! This library provides:
//! - The projection engine: ROI, support income, reinvested capital,
//!   total earnings and cumulative withdrawals per period
//! - Parameter sets and CSV withdrawal schedules
//! - A presentation adapter (2-decimal rounding, table, chart series, totals)
//! - Parallel scenario runs over rate grids

pub mod error;
pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use params::ProjectionParams;
pub use projection::{project, PeriodRecord, ProjectionEngine, ProjectionResult, ProjectionSummary};
pub use report::{Report, ReportConfig};
pub use scenario::ScenarioRunner;
