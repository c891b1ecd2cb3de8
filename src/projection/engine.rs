//! Core projection engine for monthly ROI, support and reinvestment

use crate::error::{ProjectionError, Result};
use crate::params::ProjectionParams;
use super::cashflows::{PeriodRecord, ProjectionResult};
use super::state::ProjectionState;

/// Project ROI, support income and reinvestment over the withdrawal schedule
///
/// One period per withdrawal. Each period's capital base is the previous
/// period's reinvested amount (the initial investment for period 0). Support
/// income only becomes reinvestable `SUPPORT_SETTLEMENT_LAG_PERIODS` after it
/// is earned. Results are full precision; negative capital is not floored.
pub fn project(
    initial_investment: f64,
    withdrawals: &[f64],
    roi_rate: f64,
    support_rate: f64,
) -> Result<ProjectionResult> {
    if withdrawals.is_empty() {
        return Err(ProjectionError::EmptySchedule);
    }

    let mut result = ProjectionResult::with_capacity(withdrawals.len());
    let mut state = ProjectionState::new(initial_investment, withdrawals.len());

    for &withdrawal in withdrawals {
        if state.base < 0.0 && !state.negative_base_seen {
            log::warn!(
                "Capital base went negative in period {}: {:.2}",
                state.period,
                state.base
            );
            state.negative_base_seen = true;
        }

        let record = calculate_period(&state, withdrawal, roi_rate, support_rate);
        state.advance(record.support, record.reinvested, record.cumulative_withdrawn);
        result.add_record(record);
    }

    log::debug!(
        "Projected {} periods, final reinvested {:.2}",
        result.len(),
        state.base
    );

    Ok(result)
}

/// Calculate one period from the state at its start
fn calculate_period(
    state: &ProjectionState,
    withdrawal: f64,
    roi_rate: f64,
    support_rate: f64,
) -> PeriodRecord {
    let base = state.base;
    let roi = base * roi_rate;
    let support = base * support_rate;

    let reinvested = match state.settled_support() {
        Some(settled) => roi + settled - withdrawal,
        // Support earned so far is still settling
        None => roi - withdrawal,
    };

    PeriodRecord {
        period: state.period,
        base,
        withdrawal,
        roi,
        support,
        reinvested,
        total_earnings: roi + support,
        cumulative_withdrawn: state.cumulative_withdrawn + withdrawal,
    }
}

/// Projection engine bound to one parameter set
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ProjectionParams,
}

impl ProjectionEngine {
    pub fn new(params: ProjectionParams) -> Self {
        Self { params }
    }

    /// Run the projection for the held parameters
    pub fn run(&self) -> Result<ProjectionResult> {
        project(
            self.params.initial_investment,
            &self.params.withdrawals,
            self.params.roi_rate,
            self.params.support_rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::SUPPORT_SETTLEMENT_LAG_PERIODS;
    use approx::assert_relative_eq;
    use proptest::collection::vec as vec_of;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn test_empty_schedule_rejected() {
        let err = project(1000.0, &[], 0.1, 0.05).unwrap_err();
        assert!(matches!(err, ProjectionError::EmptySchedule));
    }

    #[test]
    fn test_first_two_periods_compound() {
        let result = project(100_000.0, &[0.0; 12], 1.5, 0.6).unwrap();
        assert_eq!(result.len(), 12);

        let p0 = &result.records[0];
        assert_relative_eq!(p0.roi, 150_000.0);
        assert_relative_eq!(p0.support, 60_000.0);
        assert_relative_eq!(p0.reinvested, 150_000.0);
        assert_relative_eq!(p0.total_earnings, 210_000.0);

        let p1 = &result.records[1];
        assert_relative_eq!(p1.roi, 225_000.0);
        assert_relative_eq!(p1.support, 90_000.0);
    }

    #[test]
    fn test_zero_investment_single_period() {
        let result = project(0.0, &[0.0], 0.37, 0.12).unwrap();
        assert_eq!(result.len(), 1);

        let p0 = &result.records[0];
        assert_eq!(p0.roi, 0.0);
        assert_eq!(p0.support, 0.0);
        assert_eq!(p0.reinvested, 0.0);
        assert_eq!(p0.total_earnings, 0.0);
        assert_eq!(p0.cumulative_withdrawn, 0.0);
    }

    #[test]
    fn test_support_settles_after_lag() {
        let withdrawals = [0.0, 0.0, 0.0, 0.0, 500.0];
        let result = project(1000.0, &withdrawals, 0.1, 0.05).unwrap();
        let r = &result.records;

        // Periods 0-3: ROI less withdrawal only
        assert_relative_eq!(r[0].reinvested, 100.0);
        assert_relative_eq!(r[1].reinvested, 10.0);
        assert_relative_eq!(r[2].reinvested, 1.0);
        assert_relative_eq!(r[3].reinvested, 0.1, epsilon = 1e-12);

        // Period 4 picks up the 50.0 of support earned in period 0
        assert_relative_eq!(r[0].support, 50.0);
        assert_relative_eq!(r[4].roi, 0.01, epsilon = 1e-12);
        assert_eq!(r[4].reinvested, r[4].roi + r[0].support - 500.0);
        assert_relative_eq!(r[4].reinvested, -449.99, epsilon = 1e-9);
        assert_relative_eq!(r[4].cumulative_withdrawn, 500.0);
    }

    #[test]
    fn test_negative_reinvestment_propagates() {
        let result = project(1000.0, &[0.0, 200.0, 0.0], 0.1, 0.05).unwrap();
        let r = &result.records;

        assert_relative_eq!(r[1].reinvested, -190.0);
        assert_eq!(r[2].base, -190.0);
        assert_relative_eq!(r[2].roi, -19.0);
        assert_relative_eq!(r[2].support, -9.5);
        assert_relative_eq!(r[2].reinvested, -19.0);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let withdrawals = [10.0, 0.0, 25.5, 3.25, 0.0, 100.0, 7.0];
        let first = project(5000.0, &withdrawals, 0.017, 0.006).unwrap();
        let second = project(5000.0, &withdrawals, 0.017, 0.006).unwrap();

        for (a, b) in first.records.iter().zip(&second.records) {
            assert_eq!(a.roi.to_bits(), b.roi.to_bits());
            assert_eq!(a.support.to_bits(), b.support.to_bits());
            assert_eq!(a.reinvested.to_bits(), b.reinvested.to_bits());
            assert_eq!(a.total_earnings.to_bits(), b.total_earnings.to_bits());
            assert_eq!(a.cumulative_withdrawn.to_bits(), b.cumulative_withdrawn.to_bits());
        }
    }

    #[test]
    fn test_engine_matches_free_function() {
        let params = ProjectionParams::new(2500.0, 0.02, 0.01, vec![0.0, 50.0, 0.0, 0.0, 0.0, 10.0]);
        let engine = ProjectionEngine::new(params.clone());
        let via_engine = engine.run().unwrap();
        let direct = project(2500.0, &params.withdrawals, 0.02, 0.01).unwrap();
        assert_eq!(via_engine, direct);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_recurrence_holds(
            initial in 0.0f64..1_000_000.0,
            roi_rate in 0.0f64..0.5,
            support_rate in 0.0f64..0.5,
            withdrawals in vec_of(0.0f64..50_000.0, 1..48)
        ) {
            let result = project(initial, &withdrawals, roi_rate, support_rate).unwrap();
            let r = &result.records;
            prop_assert_eq!(r.len(), withdrawals.len());

            let mut prev_cumulative = 0.0;
            for i in 0..r.len() {
                let base = if i == 0 { initial } else { r[i - 1].reinvested };
                prop_assert_eq!(r[i].period, i);
                prop_assert_eq!(r[i].base, base);
                prop_assert_eq!(r[i].roi, base * roi_rate);
                prop_assert_eq!(r[i].support, base * support_rate);
                prop_assert_eq!(r[i].total_earnings, r[i].roi + r[i].support);

                let expected_reinvested = if i < SUPPORT_SETTLEMENT_LAG_PERIODS {
                    r[i].roi - withdrawals[i]
                } else {
                    r[i].roi + r[i - SUPPORT_SETTLEMENT_LAG_PERIODS].support - withdrawals[i]
                };
                prop_assert_eq!(r[i].reinvested, expected_reinvested);

                prop_assert_eq!(r[i].cumulative_withdrawn, prev_cumulative + withdrawals[i]);
                prop_assert!(r[i].cumulative_withdrawn >= prev_cumulative);
                prev_cumulative = r[i].cumulative_withdrawn;
            }
        }
    }
}
