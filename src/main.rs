//! Quadratic Plot - Main binary
//!
//! Plots y = ax² + bx + c in the terminal and marks its vertex and real roots.
//!
//! # Architecture
//!
//! One linear pipeline, rerun on every parameter change:
//!
//! ```text
//! ┌──────────────┐  PlotParams  ┌──────────────┐   Analysis   ┌──────────────┐
//! │  CLI / keys  │ ───────────► │   analyze    │ ───────────► │  TUI / text  │
//! └──────────────┘              └──────────────┘              └──────────────┘
//! ```
//!
//! # Headless Mode
//!
//! Run `--headless` to skip the TUI and print the result once, as text or
//! JSON (`--format json`). Useful for scripting and CI.

mod config;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use quadratic::{Report, analyze};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui::PlotApp;
use types::{Analysis, MAX_POINTS, MIN_POINTS, PlotParams};

pub use config::PlotConfig;

/// Output format for headless mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Function label plus vertex and roots lines
    Text,
    /// Parameters and full analysis (including the curve) as JSON
    Json,
}

/// Quadratic Plot - y = ax² + bx + c with vertex and real roots
#[derive(Parser, Debug)]
#[command(name = "quadratic-plot")]
#[command(about = "Plot y = ax² + bx + c in the terminal, marking its vertex and real roots")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Coefficient of x² (0 makes the function linear)
    #[arg(short, env = "PLOT_A")]
    a: Option<f64>,

    /// Coefficient of x
    #[arg(short, env = "PLOT_B")]
    b: Option<f64>,

    /// Constant term
    #[arg(short, env = "PLOT_C")]
    c: Option<f64>,

    /// Left edge of the plotted range
    #[arg(long, env = "PLOT_X_MIN")]
    x_min: Option<f64>,

    /// Right edge of the plotted range
    #[arg(long, env = "PLOT_X_MAX")]
    x_max: Option<f64>,

    /// Number of curve samples
    #[arg(
        long,
        env = "PLOT_POINTS",
        value_parser = clap::value_parser!(u64).range(MIN_POINTS as u64..=MAX_POINTS as u64)
    )]
    points: Option<u64>,

    /// Do not mark the vertex
    #[arg(long, env = "PLOT_HIDE_VERTEX")]
    hide_vertex: bool,

    /// Do not mark the real roots
    #[arg(long, env = "PLOT_HIDE_ROOTS")]
    hide_roots: bool,

    /// Do not draw grid lines
    #[arg(long, env = "PLOT_NO_GRID")]
    no_grid: bool,

    /// Print the result once instead of opening the TUI
    #[arg(long, env = "PLOT_HEADLESS")]
    headless: bool,

    /// Headless output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "PLOT_FORMAT")]
    format: OutputFormat,
}

/// JSON document printed by `--headless --format json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    params: &'a PlotParams,
    analysis: &'a Analysis,
}

/// Apply command-line overrides on top of the defaults.
fn build_config(args: &Args) -> PlotConfig {
    let mut config = PlotConfig::default();

    if let Some(a) = args.a {
        config = config.a(a);
    }
    if let Some(b) = args.b {
        config = config.b(b);
    }
    if let Some(c) = args.c {
        config = config.c(c);
    }
    if let Some(x_min) = args.x_min {
        config = config.x_min(x_min);
    }
    if let Some(x_max) = args.x_max {
        config = config.x_max(x_max);
    }
    if let Some(points) = args.points {
        config = config.points(points as usize);
    }

    config
        .show_vertex(!args.hide_vertex)
        .show_roots(!args.hide_roots)
        .show_grid(!args.no_grid)
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_logging(headless: bool) {
    // The TUI owns the screen, so keep it quiet unless asked
    let default_level = if headless { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Analyze once and print the report to stdout.
fn run_headless(params: &PlotParams, format: OutputFormat) -> Result<()> {
    let analysis = analyze(params)?;

    match format {
        OutputFormat::Text => print!("{}", Report::new(&analysis, params.display)),
        OutputFormat::Json => {
            let report = JsonReport {
                params,
                analysis: &analysis,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    info!(
        roots = analysis.roots.len(),
        points = analysis.curve.len(),
        "headless report written"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.headless);

    let config = build_config(&args);
    let params = config.params();
    info!(?params, headless = args.headless, "starting quadratic plot");

    if args.headless {
        run_headless(&params, args.format)
    } else {
        PlotApp::new(params).run()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = build_config(&parse(&["quadratic-plot"]));
        assert_eq!(config, PlotConfig::default());
    }

    #[test]
    fn test_negative_coefficients() {
        let args = parse(&["quadratic-plot", "-a", "0", "-b", "2", "-c", "-4", "--x-min", "-5"]);
        let params = build_config(&args).params();
        assert_eq!(params.coefficients.c, -4.0);
        assert_eq!(params.range.x_min, -5.0);
        assert!(params.coefficients.is_linear());
    }

    #[test]
    fn test_points_out_of_range_rejected() {
        assert!(Args::try_parse_from(["quadratic-plot", "--points", "50"]).is_err());
        assert!(Args::try_parse_from(["quadratic-plot", "--points", "6000"]).is_err());
        let config = build_config(&parse(&["quadratic-plot", "--points", "1000"]));
        assert_eq!(config.points, 1000);
    }

    #[test]
    fn test_display_flags() {
        let args = parse(&["quadratic-plot", "--hide-vertex", "--no-grid"]);
        let display = build_config(&args).params().display;
        assert!(!display.show_vertex);
        assert!(display.show_roots);
        assert!(!display.show_grid);
    }

    #[test]
    fn test_headless_rejects_reversed_range() {
        let params = PlotConfig::new().x_min(5.0).x_max(-5.0).params();
        let err = run_headless(&params, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("x_min must be less than x_max"));
    }

    #[test]
    fn test_json_report_shape() {
        let params = PlotConfig::new().coefficients(1.0, -3.0, 2.0).params();
        let analysis = analyze(&params).unwrap();
        let report = JsonReport {
            params: &params,
            analysis: &analysis,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["analysis"]["roots"].as_array().unwrap().len(), 2);
        assert_eq!(value["analysis"]["vertex"]["x"], 1.5);
        assert_eq!(value["params"]["range"]["points"], 400);
    }
}
