//! Quadratic analysis crate for the quadratic plotter.
//!
//! Given y = ax² + bx + c and a sampling range, this crate produces
//! everything the chart needs: the sampled curve, the vertex, the real roots
//! and a display label. All functions are pure; nothing here touches I/O.
//!
//! # Modules
//!
//! - [`roots`] - Discriminant classification and real roots
//! - [`curve`] - Evenly spaced sampling of the function
//! - [`vertex`] - Extremum of the parabola
//! - [`label`] - Human-readable function label
//! - [`report`] - Plain-text restatements of the results
//! - [`analysis`] - One full compute cycle from `PlotParams`
//!
//! # Example
//!
//! ```
//! use quadratic::analyze;
//! use types::{Coefficients, PlotParams, SampleRange};
//!
//! let params = PlotParams::new(
//!     Coefficients::new(1.0, -3.0, 2.0),
//!     SampleRange::new(-10.0, 10.0, 400),
//! );
//! let analysis = analyze(&params).unwrap();
//! assert_eq!(analysis.roots.len(), 2);
//! ```
//!
//! # Design Notes
//!
//! - Equality checks on a, b and the discriminant are exact float comparisons
//! - No cancellation-resistant root formula is used

pub mod analysis;
pub mod curve;
pub mod error;
pub mod label;
pub mod report;
pub mod roots;
pub mod vertex;

pub use analysis::analyze;
pub use curve::{linspace, sample_curve};
pub use error::{AnalysisError, Result};
pub use label::function_label;
pub use report::{Report, roots_line, vertex_line};
pub use roots::{RootCase, classify, compute_roots, discriminant};
pub use vertex::vertex;
