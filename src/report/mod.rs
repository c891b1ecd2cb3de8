//! Presentation boundary: rounding, table rows, chart series and exports
//!
//! The engine works at full precision. Everything here rounds to 2 decimal
//! places exactly once, on the way out.

mod format;

pub use format::{render_table, write_csv, CSV_HEADER};

use chrono::{Months, NaiveDate};
use serde::Serialize;

use crate::error::Result;
use crate::projection::ProjectionResult;

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid printing "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Presentation options
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Calendar month of period 0; labels become `YYYY-MM` when set
    pub start_month: Option<NaiveDate>,
}

impl ReportConfig {
    pub fn with_start_month(start_month: NaiveDate) -> Self {
        Self {
            start_month: Some(start_month),
        }
    }

    /// Display labels for `periods` consecutive periods
    ///
    /// Calendar labels are used only when every period has one, so a report
    /// never mixes `YYYY-MM` and `Month n` labels.
    pub fn period_labels(&self, periods: usize) -> Vec<String> {
        let start = self.start_month.filter(|&start| {
            let last = periods.saturating_sub(1);
            let fits = calendar_month(start, last).is_some();
            if !fits {
                log::warn!(
                    "Start month {} cannot label {} periods, using ordinal labels",
                    start.format("%Y-%m"),
                    periods
                );
            }
            fits
        });

        (0..periods)
            .map(|period| match start.and_then(|s| calendar_month(s, period)) {
                Some(date) => date.format("%Y-%m").to_string(),
                None => format!("Month {}", period + 1),
            })
            .collect()
    }
}

fn calendar_month(start: NaiveDate, period: usize) -> Option<NaiveDate> {
    u32::try_from(period)
        .ok()
        .and_then(|offset| start.checked_add_months(Months::new(offset)))
}

/// Parse a `YYYY-MM` month into the first day of that month
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").ok()
}

/// One rounded table row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub period: usize,
    pub label: String,
    pub roi: f64,
    pub support: f64,
    pub reinvested: f64,
    pub total_earnings: f64,
    pub cumulative_withdrawn: f64,
}

/// Grouped bar chart data: ROI vs support income per period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub roi: Vec<f64>,
    pub support: Vec<f64>,
}

/// Summary totals shown under the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub total_roi: f64,
    pub total_support: f64,
    pub final_cumulative_withdrawn: f64,
}

/// Display-ready projection report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub rows: Vec<TableRow>,
    pub chart: ChartSeries,
    pub totals: ReportTotals,
}

impl Report {
    pub fn build(result: &ProjectionResult, config: &ReportConfig) -> Self {
        let labels = config.period_labels(result.len());

        let rows: Vec<TableRow> = result
            .records
            .iter()
            .zip(&labels)
            .map(|(r, label)| TableRow {
                period: r.period,
                label: label.clone(),
                roi: round2(r.roi),
                support: round2(r.support),
                reinvested: round2(r.reinvested),
                total_earnings: round2(r.total_earnings),
                cumulative_withdrawn: round2(r.cumulative_withdrawn),
            })
            .collect();

        let chart = ChartSeries {
            labels,
            roi: result.roi_series().into_iter().map(round2).collect(),
            support: result.support_series().into_iter().map(round2).collect(),
        };

        // Totals come from full-precision sums, rounded once
        let summary = result.summary();
        let totals = ReportTotals {
            total_roi: round2(summary.total_roi),
            total_support: round2(summary.total_support),
            final_cumulative_withdrawn: round2(summary.final_cumulative_withdrawn),
        };

        Self { rows, chart, totals }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
