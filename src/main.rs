//! Host harness for the `comfort-index` engine.
//!
//! Stands in for the dashboard's web layer: reads one JSON
//! [`AssessmentRequest`] from stdin, scores it, and writes the JSON
//! [`ComfortReport`] to stdout. The startup sequence is:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing (to stderr)
//! - Checking the configured default profile against the profile table
//! - Reading, scoring and printing the request
//!
//! # Environment Variables
//! - `HCI_DEFAULT_PROFILE` (optional) – profile used when a request names none
//! - `HCI_FORECAST_MAX_DEVIATION` (optional) – forecast clamp distance (default: 15)
//! - `HCI_MAX_FORECAST_DAYS` (optional) – forecast days scored (default: 3)
//! - `HCI_LOG_LEVEL` (optional) – log verbosity (default: `info`)
//! - `HCI_SPAN_EVENTS` (optional) – span event mode for tracing
use std::{env, io};

use anyhow::{Context, Result};
use dotenvy::dotenv;
use is_terminal::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use comfort_index::{assess, config, AssessmentRequest, ComfortReport, ProfileTable};

// ---

/// Values accepted by `HCI_LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn main() -> Result<()> {
    // ---
    dotenv().ok();
    init_tracing();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let table = ProfileTable::builtin();
    table
        .get(&cfg.default_profile)
        .with_context(|| {
            format!(
                "HCI_DEFAULT_PROFILE '{}' is not a known profile",
                cfg.default_profile
            )
        })?;

    let request: AssessmentRequest = serde_json::from_reader(io::stdin().lock())
        .context("Failed to parse request from stdin")?;
    tracing::debug!("Request: {:?}", request);

    let report: ComfortReport = assess(&request, &table, &cfg);
    tracing::info!(
        "Scored profile '{}' with {} forecast days",
        report.profile,
        report.forecast.len()
    );

    serde_json::to_writer_pretty(io::stdout().lock(), &report)
        .context("Failed to write report")?;
    println!();

    Ok(())
}

// ---

/// Install the global tracing subscriber for the harness.
///
/// Stdout is reserved for the JSON report, so every log line goes to stderr.
/// Knobs:
/// - `RUST_LOG` takes precedence; otherwise `HCI_LOG_LEVEL` picks one of
///   `trace|debug|info|warn|error`, defaulting to `info`
/// - `HCI_SPAN_EVENTS`: `full` logs span enter, exit and close; `enter_exit`
///   logs enter and exit only; anything else logs close only
/// - `FORCE_COLOR` overrides the stderr TTY check for ANSI colors
///
/// Call once, before the first log macro.
fn init_tracing() {
    // ---
    let span_events = match env::var("HCI_SPAN_EVENTS").as_deref() {
        Ok("full") => FmtSpan::FULL,
        Ok("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    };

    let use_color = match env::var("FORCE_COLOR").as_deref() {
        Ok("1") | Ok("true") | Ok("yes") => true,
        Ok("0") | Ok("false") | Ok("no") => false,
        _ => io::stderr().is_terminal(),
    };

    // Use RUST_LOG if available, otherwise fall back to HCI_LOG_LEVEL
    let env_filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(log_level(env::var("HCI_LOG_LEVEL").ok().as_deref()))
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events)
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}

/// Level named by `HCI_LOG_LEVEL`, or `info` for unset and unknown values.
fn log_level(value: Option<&str>) -> &'static str {
    // ---
    value
        .map(|v| v.trim().to_lowercase())
        .and_then(|v| LOG_LEVELS.into_iter().find(|level| *level == v))
        .unwrap_or("info")
}
