//! TUI crate: Terminal User Interface for the quadratic plotter.
//!
//! This crate provides the interactive shell around the analyzer:
//! - Parameter form (coefficients, range, sample count, toggles)
//! - Function chart with reference axes, grid, vertex and root markers
//! - Text restatement of the vertex and roots
//!
//! # Architecture
//!
//! Single-threaded and input-driven:
//!
//! ```text
//! key press ──► new PlotParams ──► quadratic::analyze ──► draw frame
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use tui::PlotApp;
//! use types::PlotParams;
//!
//! PlotApp::new(PlotParams::default()).run()?;
//! ```

mod app;
mod form;
mod widgets;

pub use app::PlotApp;
pub use form::{ParamField, clamp_points};
pub use widgets::{FunctionChart, ParamsPanel, ResultsPanel};
