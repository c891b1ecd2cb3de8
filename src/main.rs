//! ROI Projection CLI
//!
//! Runs a projection from command-line parameters and prints the table,
//! or the JSON report with `--json`. Log verbosity follows `RUST_LOG`.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use roi_projection::params::{load_withdrawals, percent_to_rate, uniform_withdrawals};
use roi_projection::report::{parse_month, render_table, write_csv};
use roi_projection::{ProjectionEngine, ProjectionParams, Report, ReportConfig};

const DEFAULT_PERIODS: usize = 12;

#[derive(Debug, Parser)]
#[command(name = "roi-projection", version, about = "Monthly ROI, support income and reinvestment projection")]
struct Cli {
    /// Capital placed in period 0.
    #[arg(long, default_value_t = 100_000.0)]
    initial_investment: f64,

    /// Monthly ROI rate, in percent.
    #[arg(long, default_value_t = 1.5)]
    roi_pct: f64,

    /// Monthly support rate, in percent.
    #[arg(long, default_value_t = 0.6)]
    support_pct: f64,

    /// Number of periods (months) to project [default: 12, or the schedule length].
    #[arg(long)]
    periods: Option<usize>,

    /// Uniform withdrawal taken every period (ignored with --schedule).
    #[arg(long, default_value_t = 0.0)]
    withdrawal: f64,

    /// CSV withdrawal schedule with columns `period,withdrawal`.
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Calendar month of period 0, as YYYY-MM.
    #[arg(long)]
    start_month: Option<String>,

    /// Write the rounded table to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the JSON report instead of the console table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let withdrawals = match &cli.schedule {
        Some(path) => load_withdrawals(path)
            .with_context(|| format!("failed to load withdrawal schedule '{}'", path.display()))?,
        None => uniform_withdrawals(cli.periods.unwrap_or(DEFAULT_PERIODS), cli.withdrawal)?,
    };
    let periods = cli.periods.unwrap_or(withdrawals.len());

    let params = ProjectionParams::with_periods(
        periods,
        cli.initial_investment,
        percent_to_rate(cli.roi_pct),
        percent_to_rate(cli.support_pct),
        withdrawals,
    )?;
    params.validate_inputs()?;

    let config = match cli.start_month.as_deref() {
        Some(raw) => match parse_month(raw) {
            Some(month) => ReportConfig::with_start_month(month),
            None => bail!("invalid --start-month '{}': expected YYYY-MM", raw),
        },
        None => ReportConfig::default(),
    };

    log::info!(
        "Projecting {} periods from {:.2} (roi {}%, support {}%)",
        params.periods(),
        params.initial_investment,
        cli.roi_pct,
        cli.support_pct
    );

    let result = ProjectionEngine::new(params).run()?;
    let report = Report::build(&result, &config);

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_table(&report));
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create CSV file '{}'", path.display()))?;
        write_csv(&report, file)?;
        log::info!("Full results written to {}", path.display());
    }

    Ok(())
}
