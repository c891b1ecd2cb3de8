//! Load withdrawal schedules from CSV
//!
//! Expected columns: `period,withdrawal`, with periods numbered from 0.

use csv::Reader;
use std::path::Path;

use crate::error::{ProjectionError, Result};

/// Raw CSV row of a withdrawal schedule
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    period: usize,
    withdrawal: f64,
}

/// Load a withdrawal schedule from a CSV file
pub fn load_withdrawals<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let reader = Reader::from_path(path)?;
    collect_schedule(reader)
}

/// Load a withdrawal schedule from any reader (e.g., string buffer, request body)
pub fn load_withdrawals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<f64>> {
    collect_schedule(Reader::from_reader(reader))
}

fn collect_schedule<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<f64>> {
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ProjectionError::EmptySchedule);
    }

    rows.sort_by_key(|r| r.period);

    // Periods must cover 0..N exactly once each
    for (expected, row) in rows.iter().enumerate() {
        if row.period != expected {
            return Err(ProjectionError::Schedule(if row.period < expected {
                format!("duplicate period {}", row.period)
            } else {
                format!("missing period {}", expected)
            }));
        }
    }

    log::debug!("Loaded withdrawal schedule with {} periods", rows.len());

    Ok(rows.into_iter().map(|r| r.withdrawal).collect())
}
