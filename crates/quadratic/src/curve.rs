//! Sampling the function across the plotted range.

use types::{Coefficients, Point, SampleRange};

use crate::error::{AnalysisError, Result};

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// With `n == 1` the single value is `start`; `n == 0` yields nothing.
/// Each value blends the endpoints directly rather than accumulating a step,
/// so both endpoints are exact and `stop - start` is never formed (it
/// overflows to infinity for ranges near `f64::MAX`).
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let t = i as f64 / last;
                    start * (1.0 - t) + stop * t
                })
                .collect()
        }
    }
}

/// Sample y = f(x) at `range.points` evenly spaced x values.
///
/// Fails with [`AnalysisError::InvalidRange`] unless `x_min < x_max`.
pub fn sample_curve(coefficients: &Coefficients, range: &SampleRange) -> Result<Vec<Point>> {
    if !range.is_valid() {
        return Err(AnalysisError::InvalidRange {
            x_min: range.x_min,
            x_max: range.x_max,
        });
    }

    Ok(linspace(range.x_min, range.x_max, range.points)
        .into_iter()
        .map(|x| Point::new(x, coefficients.evaluate(x)))
        .collect())
}
