//! Parameter set for a single projection run

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Longest supported horizon: 100 years of monthly periods
pub const MAX_PERIODS: usize = 1_200;

/// Complete, ordered input for one projection
///
/// Built once per invocation and handed to the engine whole. Withdrawals are
/// indexed by period: `withdrawals[i]` is taken out in period `i`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParams {
    /// Capital placed in period 0
    pub initial_investment: f64,

    /// Fractional monthly return (0.015 = 1.5%)
    pub roi_rate: f64,

    /// Fractional monthly support income
    pub support_rate: f64,

    /// One withdrawal per period
    pub withdrawals: Vec<f64>,
}

impl ProjectionParams {
    pub fn new(initial_investment: f64, roi_rate: f64, support_rate: f64, withdrawals: Vec<f64>) -> Self {
        Self {
            initial_investment,
            roi_rate,
            support_rate,
            withdrawals,
        }
    }

    /// Build parameters for an explicit period count
    ///
    /// The withdrawal list must have exactly `periods` entries.
    pub fn with_periods(
        periods: usize,
        initial_investment: f64,
        roi_rate: f64,
        support_rate: f64,
        withdrawals: Vec<f64>,
    ) -> Result<Self> {
        check_period_count(periods)?;
        if withdrawals.len() != periods {
            return Err(ProjectionError::PeriodCountMismatch {
                expected: periods,
                actual: withdrawals.len(),
            });
        }
        Ok(Self::new(initial_investment, roi_rate, support_rate, withdrawals))
    }

    /// Build parameters from rates given as percentages (1.5 = 1.5%)
    pub fn from_percentages(
        initial_investment: f64,
        roi_pct: f64,
        support_pct: f64,
        withdrawals: Vec<f64>,
    ) -> Self {
        Self::new(
            initial_investment,
            percent_to_rate(roi_pct),
            percent_to_rate(support_pct),
            withdrawals,
        )
    }

    /// Number of periods in the schedule
    pub fn periods(&self) -> usize {
        self.withdrawals.len()
    }

    /// Caller-side input check: every number finite and non-negative
    ///
    /// The engine does not call this; adapters run it before projecting.
    pub fn validate_inputs(&self) -> Result<()> {
        check_period_count(self.withdrawals.len())?;

        check_non_negative("initial_investment", self.initial_investment)?;
        check_non_negative("roi_rate", self.roi_rate)?;
        check_non_negative("support_rate", self.support_rate)?;

        for (period, &amount) in self.withdrawals.iter().enumerate() {
            check_non_negative(&format!("withdrawals[{}]", period), amount)?;
        }

        Ok(())
    }
}

/// Reject an empty horizon or one longer than `MAX_PERIODS`
pub fn check_period_count(periods: usize) -> Result<()> {
    if periods == 0 {
        return Err(ProjectionError::EmptySchedule);
    }
    if periods > MAX_PERIODS {
        return Err(ProjectionError::TooManyPeriods {
            max: MAX_PERIODS,
            actual: periods,
        });
    }
    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput {
            field: field.to_string(),
            value,
        })
    }
}

/// Convert a percentage into a fractional rate
pub fn percent_to_rate(pct: f64) -> f64 {
    pct / 100.0
}

/// Constant withdrawal schedule
///
/// The period count is checked before anything is allocated.
pub fn uniform_withdrawals(periods: usize, amount: f64) -> Result<Vec<f64>> {
    check_period_count(periods)?;
    Ok(vec![amount; periods])
}
