//! Projection engine for monthly ROI, support income and reinvestment

mod state;
mod engine;
mod cashflows;

pub use state::{ProjectionState, SUPPORT_SETTLEMENT_LAG_PERIODS};
pub use engine::{project, ProjectionEngine};
pub use cashflows::{PeriodRecord, ProjectionResult, ProjectionSummary};
