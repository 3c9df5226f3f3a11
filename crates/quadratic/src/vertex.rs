//! Vertex of the parabola.

use types::{Coefficients, Point};

/// The extremum at x = -b / 2a, or `None` when a = 0.
pub fn vertex(coefficients: &Coefficients) -> Option<Point> {
    if coefficients.is_linear() {
        return None;
    }
    let x = -coefficients.b / (2.0 * coefficients.a);
    Some(Point::new(x, coefficients.evaluate(x)))
}
