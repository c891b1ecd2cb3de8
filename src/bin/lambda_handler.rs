//! AWS Lambda handler for running projections
//!
//! Accepts projection parameters as JSON and returns the rounded table,
//! chart series and summary totals.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

use roi_projection::params::{percent_to_rate, uniform_withdrawals};
use roi_projection::projection::ProjectionSummary;
use roi_projection::report::{parse_month, ChartSeries, ReportTotals, TableRow};
use roi_projection::{ProjectionEngine, ProjectionParams, Report, ReportConfig};

/// Input parameters for the projection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    /// Capital placed in period 0 (default: 0)
    #[serde(default)]
    pub initial_investment: f64,

    /// Monthly ROI rate in percent (default: 1.5%)
    #[serde(default = "default_roi_pct")]
    pub roi_pct: f64,

    /// Monthly support rate in percent (default: 0.6%)
    #[serde(default = "default_support_pct")]
    pub support_pct: f64,

    /// Explicit per-period withdrawals
    #[serde(default)]
    pub withdrawals: Option<Vec<f64>>,

    /// Period count; must match `withdrawals` when both are given
    #[serde(default)]
    pub periods: Option<usize>,

    /// Uniform withdrawal used when `withdrawals` is absent
    #[serde(default)]
    pub withdrawal: f64,

    /// Calendar month of period 0, as YYYY-MM
    #[serde(default)]
    pub start_month: Option<String>,
}

fn default_roi_pct() -> f64 { 1.5 }
fn default_support_pct() -> f64 { 0.6 }
fn default_periods() -> usize { 12 }

/// Output from the projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub periods: usize,
    pub rows: Vec<TableRow>,
    pub chart: ChartSeries,
    pub totals: ReportTotals,
    pub summary: ProjectionSummary,
    pub execution_time_ms: u64,
}

/// Validate the request, run the engine and shape the response
fn build_response(request: ProjectionRequest) -> Result<ProjectionResponse, String> {
    let start = std::time::Instant::now();

    let withdrawals = match request.withdrawals {
        Some(w) => w,
        None => uniform_withdrawals(request.periods.unwrap_or_else(default_periods), request.withdrawal)
            .map_err(|e| e.to_string())?,
    };
    let periods = request.periods.unwrap_or(withdrawals.len());

    let params = ProjectionParams::with_periods(
        periods,
        request.initial_investment,
        percent_to_rate(request.roi_pct),
        percent_to_rate(request.support_pct),
        withdrawals,
    )
    .map_err(|e| e.to_string())?;
    params.validate_inputs().map_err(|e| e.to_string())?;

    let config = match request.start_month.as_deref() {
        Some(raw) => match parse_month(raw) {
            Some(month) => ReportConfig::with_start_month(month),
            None => return Err(format!("Invalid startMonth '{}': expected YYYY-MM", raw)),
        },
        None => ReportConfig::default(),
    };

    let result = ProjectionEngine::new(params).run().map_err(|e| e.to_string())?;
    let report = Report::build(&result, &config);

    Ok(ProjectionResponse {
        periods: result.len(),
        rows: report.rows,
        chart: report.chart,
        totals: report.totals,
        summary: result.summary(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message });
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body.to_string()))?)
}

fn json_response(body: &ProjectionResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    match build_response(request) {
        Ok(response) => {
            log::info!(
                "Projected {} periods in {} ms",
                response.periods,
                response.execution_time_ms
            );
            json_response(&response)
        }
        Err(message) => {
            log::warn!("Rejected projection request: {}", message);
            error_response(400, &message)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
