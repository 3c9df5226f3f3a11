//! Central configuration for the quadratic plotter.
//!
//! All start-up parameters are defined here; command-line flags are applied
//! on top of the defaults through the builder setters.

use types::{
    Coefficients, DEFAULT_A, DEFAULT_B, DEFAULT_C, DEFAULT_POINTS, DEFAULT_X_MAX, DEFAULT_X_MIN,
    DisplayOptions, PlotParams, SampleRange,
};

/// Master configuration for one run of the plotter.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Function
    // ─────────────────────────────────────────────────────────────────────────
    /// Coefficient of x².
    pub a: f64,
    /// Coefficient of x.
    pub b: f64,
    /// Constant term.
    pub c: f64,

    // ─────────────────────────────────────────────────────────────────────────
    // Sampling Range
    // ─────────────────────────────────────────────────────────────────────────
    /// Left edge of the plot.
    pub x_min: f64,
    /// Right edge of the plot.
    pub x_max: f64,
    /// Number of curve samples.
    pub points: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────
    /// Mark the vertex.
    pub show_vertex: bool,
    /// Mark the real roots.
    pub show_roots: bool,
    /// Draw grid lines.
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let display = DisplayOptions::default();
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            c: DEFAULT_C,

            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            points: DEFAULT_POINTS,

            show_vertex: display.show_vertex,
            show_roots: display.show_roots,
            show_grid: display.show_grid,
        }
    }
}

impl PlotConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder-style setters for fluent configuration
    // ─────────────────────────────────────────────────────────────────────────

    /// Set all three coefficients.
    pub fn coefficients(mut self, a: f64, b: f64, c: f64) -> Self {
        self.a = a;
        self.b = b;
        self.c = c;
        self
    }

    /// Set the coefficient of x².
    pub fn a(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    /// Set the coefficient of x.
    pub fn b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    /// Set the constant term.
    pub fn c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Set the left edge of the plot.
    pub fn x_min(mut self, x_min: f64) -> Self {
        self.x_min = x_min;
        self
    }

    /// Set the right edge of the plot.
    pub fn x_max(mut self, x_max: f64) -> Self {
        self.x_max = x_max;
        self
    }

    /// Set the number of curve samples (clamped to the accepted range).
    pub fn points(mut self, points: usize) -> Self {
        self.points = tui::clamp_points(points);
        self
    }

    /// Show or hide the vertex marker.
    pub fn show_vertex(mut self, show: bool) -> Self {
        self.show_vertex = show;
        self
    }

    /// Show or hide the root markers.
    pub fn show_roots(mut self, show: bool) -> Self {
        self.show_roots = show;
        self
    }

    /// Show or hide the grid.
    pub fn show_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Computed Properties
    // ─────────────────────────────────────────────────────────────────────────

    /// Parameters for the first compute cycle.
    pub fn params(&self) -> PlotParams {
        PlotParams::new(
            Coefficients::new(self.a, self.b, self.c),
            SampleRange::new(self.x_min, self.x_max, self.points),
        )
        .with_display(DisplayOptions {
            show_vertex: self.show_vertex,
            show_roots: self.show_roots,
            show_grid: self.show_grid,
        })
    }
}
