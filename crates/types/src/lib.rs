//! Core types for the quadratic plotter.
//!
//! This crate provides the shared data model used across the workspace:
//! the per-cycle input (`PlotParams`) and the per-cycle output (`Analysis`).
//! Every value here is immutable once built and recomputed from scratch on
//! each parameter change.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Default coefficient of x².
pub const DEFAULT_A: f64 = 1.0;
/// Default coefficient of x.
pub const DEFAULT_B: f64 = 0.0;
/// Default constant term.
pub const DEFAULT_C: f64 = 0.0;

/// Default lower bound of the plotted range.
pub const DEFAULT_X_MIN: f64 = -10.0;
/// Default upper bound of the plotted range.
pub const DEFAULT_X_MAX: f64 = 10.0;

/// Default number of curve samples.
pub const DEFAULT_POINTS: usize = 400;
/// Fewest samples the shell accepts.
pub const MIN_POINTS: usize = 100;
/// Most samples the shell accepts.
pub const MAX_POINTS: usize = 5000;
/// Increment for the sample count control.
pub const POINTS_STEP: usize = 100;

/// Step for the a, b and c controls.
pub const COEFFICIENT_STEP: f64 = 0.1;
/// Step for the x_min and x_max controls.
pub const RANGE_STEP: f64 = 1.0;

/// Tolerance used when deciding whether a root lies inside the plotted range.
pub const ROOT_RANGE_EPSILON: f64 = 1e-8;

// =============================================================================
// Input Types
// =============================================================================

/// Coefficients of y = ax² + bx + c.
///
/// `a == 0.0` is valid and means the function is linear (or constant).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// True when the x² term vanishes (exact comparison).
    pub fn is_linear(&self) -> bool {
        self.a == 0.0
    }

    /// Evaluate the function at `x`.
    ///
    /// The linear branch skips the x² term entirely.
    pub fn evaluate(&self, x: f64) -> f64 {
        if self.is_linear() {
            self.b * x + self.c
        } else {
            self.a * x * x + self.b * x + self.c
        }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::new(DEFAULT_A, DEFAULT_B, DEFAULT_C)
    }
}

/// The x-interval to plot and how many samples to take across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub x_min: f64,
    pub x_max: f64,
    pub points: usize,
}

impl SampleRange {
    pub fn new(x_min: f64, x_max: f64, points: usize) -> Self {
        Self {
            x_min,
            x_max,
            points,
        }
    }

    /// Whether the bounds form a non-empty interval.
    ///
    /// NaN bounds fail this test along with `x_min >= x_max`.
    pub fn is_valid(&self) -> bool {
        self.x_min < self.x_max
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Whether `x` falls inside the range, allowing `ROOT_RANGE_EPSILON` slack.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.x_min - ROOT_RANGE_EPSILON && x <= self.x_max + ROOT_RANGE_EPSILON
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::new(DEFAULT_X_MIN, DEFAULT_X_MAX, DEFAULT_POINTS)
    }
}

/// Which annotations the renderer should draw.
///
/// These only gate presentation; the analysis is always computed in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub show_vertex: bool,
    pub show_roots: bool,
    pub show_grid: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_vertex: true,
            show_roots: true,
            show_grid: true,
        }
    }
}

/// Everything one compute-and-render cycle needs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotParams {
    pub coefficients: Coefficients,
    pub range: SampleRange,
    pub display: DisplayOptions,
}

impl PlotParams {
    pub fn new(coefficients: Coefficients, range: SampleRange) -> Self {
        Self {
            coefficients,
            range,
            display: DisplayOptions::default(),
        }
    }

    /// Replace the display options.
    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }
}

// =============================================================================
// Output Types
// =============================================================================

/// A point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A real root together with f(root) and whether it lies in the plotted range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Root {
    pub x: f64,
    /// f(x); zero up to floating-point error.
    pub y: f64,
    pub in_range: bool,
}

/// Result of one analysis cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Human-readable form of the function, e.g. `y = 1.000x² + 0.000x + 0.000`.
    pub label: String,
    /// Sampled (x, y) pairs, ordered by x.
    pub curve: Vec<Point>,
    /// Extremum of the parabola; `None` for linear functions.
    pub vertex: Option<Point>,
    /// Zero, one or two real roots in solver order.
    pub roots: Vec<Root>,
}

impl Analysis {
    /// Roots that fall inside the plotted range.
    pub fn roots_in_range(&self) -> impl Iterator<Item = &Root> {
        self.roots.iter().filter(|r| r.in_range)
    }

    /// Curve as `(x, y)` tuples for chart datasets.
    pub fn curve_data(&self) -> Vec<(f64, f64)> {
        self.curve.iter().map(|&p| p.into()).collect()
    }
}
