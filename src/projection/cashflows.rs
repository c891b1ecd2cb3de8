//! Per-period output structures for projections

use serde::{Deserialize, Serialize};

/// A single period of projection output, at full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    /// Period index (0-indexed)
    pub period: usize,

    /// Capital base the period's earnings were computed from
    pub base: f64,

    /// Withdrawal taken this period
    pub withdrawal: f64,

    pub roi: f64,
    pub support: f64,

    /// Capital carried into the next period
    pub reinvested: f64,

    /// ROI plus support recognized this period
    pub total_earnings: f64,

    pub cumulative_withdrawn: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub records: Vec<PeriodRecord>,
}

impl ProjectionResult {
    pub fn with_capacity(periods: usize) -> Self {
        Self {
            records: Vec::with_capacity(periods),
        }
    }

    /// Add a period record
    pub fn add_record(&mut self, record: PeriodRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn roi_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.roi).collect()
    }

    pub fn support_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.support).collect()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_roi: f64 = self.records.iter().map(|r| r.roi).sum();
        let total_support: f64 = self.records.iter().map(|r| r.support).sum();
        let total_earnings: f64 = self.records.iter().map(|r| r.total_earnings).sum();

        let final_reinvested = self.records.last().map(|r| r.reinvested).unwrap_or(0.0);
        let final_cumulative_withdrawn = self
            .records
            .last()
            .map(|r| r.cumulative_withdrawn)
            .unwrap_or(0.0);

        ProjectionSummary {
            total_periods: self.records.len(),
            total_roi,
            total_support,
            total_earnings,
            final_reinvested,
            final_cumulative_withdrawn,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_periods: usize,
    pub total_roi: f64,
    pub total_support: f64,
    pub total_earnings: f64,
    pub final_reinvested: f64,
    pub final_cumulative_withdrawn: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(period: usize, roi: f64, support: f64, withdrawal: f64, cumulative: f64) -> PeriodRecord {
        PeriodRecord {
            period,
            base: 0.0,
            withdrawal,
            roi,
            support,
            reinvested: roi - withdrawal,
            total_earnings: roi + support,
            cumulative_withdrawn: cumulative,
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut result = ProjectionResult::with_capacity(2);
        result.add_record(record(0, 10.0, 5.0, 1.0, 1.0));
        result.add_record(record(1, 20.0, 7.0, 2.0, 3.0));

        let summary = result.summary();
        assert_eq!(summary.total_periods, 2);
        assert_eq!(summary.total_roi, 30.0);
        assert_eq!(summary.total_support, 12.0);
        assert_eq!(summary.total_earnings, 42.0);
        assert_eq!(summary.final_reinvested, 18.0);
        assert_eq!(summary.final_cumulative_withdrawn, 3.0);
    }

    #[test]
    fn test_series_follow_period_order() {
        let mut result = ProjectionResult::with_capacity(2);
        result.add_record(record(0, 10.0, 5.0, 1.0, 1.0));
        result.add_record(record(1, 20.0, 7.0, 2.0, 3.0));

        assert_eq!(result.roi_series(), vec![10.0, 20.0]);
        assert_eq!(result.support_series(), vec![5.0, 7.0]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ProjectionResult::with_capacity(0).summary();
        assert_eq!(summary.total_periods, 0);
        assert_eq!(summary.final_cumulative_withdrawn, 0.0);
    }
}
