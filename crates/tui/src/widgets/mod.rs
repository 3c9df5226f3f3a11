//! TUI widgets for displaying the plot and its inputs.
//!
//! Each widget has a single responsibility:
//! - `FunctionChart`: Renders the sampled curve with axes, grid and markers
//! - `ParamsPanel`: Renders the editable parameter form
//! - `ResultsPanel`: Renders the vertex/roots text or the range error

mod function_chart;
mod params_panel;
mod results_panel;

pub use function_chart::FunctionChart;
pub use params_panel::ParamsPanel;
pub use results_panel::ResultsPanel;
