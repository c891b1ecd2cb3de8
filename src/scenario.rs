//! Scenario runner for batch projections
//!
//! Holds one withdrawal schedule and evaluates it under many rate
//! combinations. Runs are independent, so batches fan out over rayon.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::params::ProjectionParams;
use crate::projection::{project, ProjectionEngine, ProjectionResult, ProjectionSummary};

/// Outcome of one scenario in a rate grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub roi_rate: f64,
    pub support_rate: f64,
    pub summary: ProjectionSummary,
}

/// Runner bound to a shared withdrawal schedule
///
/// # Example
/// ```
/// use roi_projection::ScenarioRunner;
///
/// let runner = ScenarioRunner::new(10_000.0, vec![0.0; 24]);
/// let grid = runner.run_grid(&[0.01, 0.02], &[0.005]).unwrap();
/// assert_eq!(grid.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    initial_investment: f64,
    withdrawals: Vec<f64>,
}

impl ScenarioRunner {
    pub fn new(initial_investment: f64, withdrawals: Vec<f64>) -> Self {
        Self {
            initial_investment,
            withdrawals,
        }
    }

    /// Run a single projection at the given rates
    pub fn run(&self, roi_rate: f64, support_rate: f64) -> Result<ProjectionResult> {
        project(self.initial_investment, &self.withdrawals, roi_rate, support_rate)
    }

    /// Evaluate every (ROI, support) combination, ROI-major order
    pub fn run_grid(&self, roi_rates: &[f64], support_rates: &[f64]) -> Result<Vec<ScenarioOutcome>> {
        let combos: Vec<(f64, f64)> = roi_rates
            .iter()
            .flat_map(|&roi| support_rates.iter().map(move |&support| (roi, support)))
            .collect();

        log::info!(
            "Running {} scenarios over {} periods",
            combos.len(),
            self.withdrawals.len()
        );

        combos
            .par_iter()
            .map(|&(roi_rate, support_rate)| {
                let result = self.run(roi_rate, support_rate)?;
                Ok(ScenarioOutcome {
                    roi_rate,
                    support_rate,
                    summary: result.summary(),
                })
            })
            .collect()
    }
}

/// Run independent parameter sets in parallel
pub fn run_batch(params: &[ProjectionParams]) -> Result<Vec<ProjectionResult>> {
    params
        .par_iter()
        .map(|p| ProjectionEngine::new(p.clone()).run())
        .collect()
}
