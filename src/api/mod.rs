use std::fmt::Write as _;
use std::net::SocketAddr;

use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::core::{SimulationParams, SimulationResult, examples, simulate};

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Year-by-year retirement savings projection under the 2024 Japanese payroll tax model"
)]
struct Cli {
    #[arg(long)]
    current_age: u32,
    #[arg(long)]
    retirement_age: u32,
    #[arg(long, help = "Gross annual income in yen")]
    annual_income: i64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Annual pay rise in percent, e.g. 2"
    )]
    income_growth_rate: f64,
    #[arg(long, default_value_t = 0, help = "Savings already accumulated, in yen")]
    current_savings: i64,
    #[arg(long, help = "Share of net income saved each year in percent, e.g. 20")]
    savings_rate: f64,
    #[arg(long, help = "Include the full per-year ledger")]
    verbose: bool,
    #[arg(long, help = "Emit params and result as JSON instead of the report")]
    json: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    annual_income: Option<i64>,
    income_growth_rate: Option<f64>,
    current_savings: Option<i64>,
    savings_rate: Option<f64>,
    include_yearly: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    params: SimulationParams,
    result: SimulationResult,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn build_params(cli: &Cli) -> Result<SimulationParams, String> {
    if cli.retirement_age < cli.current_age {
        return Err("--retirement-age must be >= --current-age".to_string());
    }

    if cli.annual_income < 0 {
        return Err("--annual-income must be >= 0".to_string());
    }

    if cli.current_savings < 0 {
        return Err("--current-savings must be >= 0".to_string());
    }

    if !(0.0..=100.0).contains(&cli.savings_rate) {
        return Err("--savings-rate must be between 0 and 100".to_string());
    }

    if !cli.income_growth_rate.is_finite() || cli.income_growth_rate <= -100.0 {
        return Err("--income-growth-rate must be > -100".to_string());
    }

    Ok(SimulationParams {
        current_age: cli.current_age,
        retirement_age: cli.retirement_age,
        current_annual_income: cli.annual_income,
        income_growth_rate: cli.income_growth_rate / 100.0,
        current_savings: cli.current_savings,
        savings_rate: cli.savings_rate / 100.0,
    })
}

fn params_from_payload(payload: &SimulatePayload) -> Result<(SimulationParams, bool), String> {
    let current_age = payload
        .current_age
        .ok_or_else(|| "currentAge is required".to_string())?;
    let retirement_age = payload
        .retirement_age
        .ok_or_else(|| "retirementAge is required".to_string())?;
    let annual_income = payload
        .annual_income
        .ok_or_else(|| "annualIncome is required".to_string())?;
    let savings_rate = payload
        .savings_rate
        .ok_or_else(|| "savingsRate is required".to_string())?;

    let cli = Cli {
        current_age,
        retirement_age,
        annual_income,
        income_growth_rate: payload.income_growth_rate.unwrap_or(0.0),
        current_savings: payload.current_savings.unwrap_or(0),
        savings_rate,
        verbose: false,
        json: false,
    };

    Ok((build_params(&cli)?, payload.include_yearly.unwrap_or(false)))
}

#[cfg(test)]
fn params_from_json(json: &str) -> Result<(SimulationParams, bool), String> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    params_from_payload(&payload)
}

/// Runs the seven example scenarios with full tracing and prints one report
/// per scenario, followed by a one-line-per-scenario summary.
pub fn print_example_reports() {
    let mut summary = String::new();

    for scenario in examples() {
        let result = simulate(&scenario.params, true);
        let title = format!("{}: {}", scenario.id, scenario.description);
        println!("{}", render_report(&title, &scenario.params, &result));
        let _ = writeln!(
            summary,
            "  {}: {} yen",
            scenario.id,
            group_digits(result.final_total_assets)
        );
    }

    println!("{}", "=".repeat(70));
    println!("Final assets per scenario");
    println!("{}", "=".repeat(70));
    print!("{summary}");
}

/// `simulate` subcommand: one user-supplied parameter set, rendered as the
/// plain-text report or, with `--json`, as the params + result document.
pub fn run_simulate_cli(args: &[String]) -> Result<(), String> {
    let cli = Cli::parse_from(args);
    let params = build_params(&cli)?;
    let result = simulate(&params, cli.verbose);

    if cli.json {
        let response = SimulateResponse { params, result };
        let body = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
        println!("{body}");
    } else {
        println!("{}", render_report("retirement projection", &params, &result));
    }

    Ok(())
}

/// Renders the multi-section report: inputs, outputs, and the first three
/// ledger years when a trace is present.
pub fn render_report(title: &str, params: &SimulationParams, result: &SimulationResult) -> String {
    let rule = "=".repeat(70);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Inputs:");
    let _ = writeln!(out, "  current age:       {}", params.current_age);
    let _ = writeln!(out, "  retirement age:    {}", params.retirement_age);
    let _ = writeln!(
        out,
        "  annual income:     {} yen",
        group_digits(params.current_annual_income)
    );
    let _ = writeln!(out, "  income growth:     {:.1}%", params.income_growth_rate * 100.0);
    let _ = writeln!(
        out,
        "  current savings:   {} yen",
        group_digits(params.current_savings)
    );
    let _ = writeln!(out, "  savings rate:      {:.1}%", params.savings_rate * 100.0);
    let _ = writeln!(out);
    let _ = writeln!(out, "Outputs:");
    let _ = writeln!(out, "  final age:          {}", result.final_age);
    let _ = writeln!(out, "  years simulated:    {}", result.total_years);
    let _ = writeln!(
        out,
        "  final total assets: {} yen",
        group_digits(result.final_total_assets)
    );
    let _ = writeln!(
        out,
        "  lifetime tax paid:  {} yen",
        group_digits(result.total_tax_paid)
    );

    if let Some(records) = result.yearly_records.as_deref() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Yearly detail (first 3 years):");
        for (index, record) in records.iter().take(3).enumerate() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  age {} (year {})", record.age, index + 1);
            let _ = writeln!(out, "    gross income:     {} yen", group_digits(record.annual_income));
            let _ = writeln!(
                out,
                "    salary deduction: {} yen",
                group_digits(record.salary_deduction)
            );
            let _ = writeln!(
                out,
                "    social insurance: {} yen",
                group_digits(record.social_insurance)
            );
            let _ = writeln!(
                out,
                "    taxable income:   {} yen",
                group_digits(record.taxable_income)
            );
            let _ = writeln!(out, "    income tax:       {} yen", group_digits(record.income_tax));
            let _ = writeln!(out, "    resident tax:     {} yen", group_digits(record.resident_tax));
            let _ = writeln!(out, "    total tax:        {} yen", group_digits(record.total_tax));
            let _ = writeln!(out, "    net income:       {} yen", group_digits(record.net_income));
            let _ = writeln!(
                out,
                "    annual savings:   {} yen",
                group_digits(record.annual_savings)
            );
            let _ = writeln!(out, "    total assets:     {} yen", group_digits(record.total_assets));
        }
    }

    out
}

fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/examples", get(examples_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("nestegg HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/api/health");

    axum::serve(listener, app).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn examples_handler() -> Response {
    json_response(StatusCode::OK, examples())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_get_handler(Query(payload): Query<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_post_handler(Json(payload): Json<SimulatePayload>) -> Response {
    simulate_handler_impl(payload).await
}

async fn simulate_handler_impl(payload: SimulatePayload) -> Response {
    let (params, include_yearly) = match params_from_payload(&payload) {
        Ok(parsed) => parsed,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };

    let result = simulate(&params, include_yearly);
    json_response(StatusCode::OK, SimulateResponse { params, result })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
