//! CSV and console renderings of a report

use std::fmt::Write as _;
use std::io::Write;

use super::Report;
use crate::error::Result;

pub const CSV_HEADER: [&str; 7] = [
    "Period",
    "Label",
    "ROI",
    "Support",
    "Reinvested",
    "TotalEarnings",
    "CumulativeWithdrawn",
];

/// Write the report rows as CSV with 2-decimal values
pub fn write_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for row in &report.rows {
        csv_writer.write_record([
            row.period.to_string(),
            row.label.clone(),
            format!("{:.2}", row.roi),
            format!("{:.2}", row.support),
            format!("{:.2}", row.reinvested),
            format!("{:.2}", row.total_earnings),
            format!("{:.2}", row.cumulative_withdrawn),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Fixed-width console table followed by the summary totals
pub fn render_table(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>10} {:>16} {:>16} {:>16} {:>16} {:>16}",
        "Period", "ROI", "Support", "Reinvested", "TotalEarnings", "CumWithdrawn"
    );
    let _ = writeln!(out, "{}", "-".repeat(95));

    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:>10} {:>16.2} {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
            row.label,
            row.roi,
            row.support,
            row.reinvested,
            row.total_earnings,
            row.cumulative_withdrawn,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total ROI:                  {:.2}", report.totals.total_roi);
    let _ = writeln!(out, "Total Support Income:       {:.2}", report.totals.total_support);
    let _ = writeln!(
        out,
        "Total Cumulative Withdrawn: {:.2}",
        report.totals.final_cumulative_withdrawn
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::report::ReportConfig;

    fn sample_report() -> Report {
        let result = project(100_000.0, &[0.0, 1000.0], 1.5, 0.6).unwrap();
        Report::build(&result, &ReportConfig::default())
    }

    #[test]
    fn test_csv_output() {
        let mut buf = Vec::new();
        write_csv(&sample_report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Period,Label,ROI,Support,Reinvested,TotalEarnings,CumulativeWithdrawn");
        assert_eq!(lines[1], "0,Month 1,150000.00,60000.00,150000.00,210000.00,0.00");
        assert_eq!(lines[2], "1,Month 2,225000.00,90000.00,224000.00,315000.00,1000.00");
    }

    #[test]
    fn test_table_includes_totals() {
        let table = render_table(&sample_report());
        assert!(table.contains("Month 1"));
        assert!(table.contains("Total ROI:                  375000.00"));
        assert!(table.contains("Total Support Income:       150000.00"));
        assert!(table.contains("Total Cumulative Withdrawn: 1000.00"));
    }
}
