//! Real roots of y = ax² + bx + c.
//!
//! The solver first classifies the coefficients into one of five cases and
//! then applies the closed-form solution for that case. All zero checks are
//! exact float comparisons, so a = 1e-300 is still treated as quadratic.

use std::fmt;

use types::Coefficients;

/// Which solution branch a set of coefficients falls into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootCase {
    /// a = 0 and b = 0: constant function, reported as having no roots.
    DegenerateConstant,
    /// a = 0, b ≠ 0: a single root at -c / b.
    Linear,
    /// a ≠ 0 and D < 0.
    NoRealRoots { discriminant: f64 },
    /// a ≠ 0 and D = 0: one root at -b / 2a.
    Repeated,
    /// a ≠ 0 and D > 0.
    TwoDistinct { discriminant: f64 },
}

impl RootCase {
    /// Number of roots this case produces.
    pub fn root_count(&self) -> usize {
        match self {
            RootCase::DegenerateConstant | RootCase::NoRealRoots { .. } => 0,
            RootCase::Linear | RootCase::Repeated => 1,
            RootCase::TwoDistinct { .. } => 2,
        }
    }
}

impl fmt::Display for RootCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootCase::DegenerateConstant => write!(f, "constant function"),
            RootCase::Linear => write!(f, "linear function, one root"),
            RootCase::NoRealRoots { discriminant } => {
                write!(f, "no real roots (D = {:.3})", discriminant)
            }
            RootCase::Repeated => write!(f, "repeated root (D = 0)"),
            RootCase::TwoDistinct { discriminant } => {
                write!(f, "two distinct real roots (D = {:.3})", discriminant)
            }
        }
    }
}

/// Discriminant b² - 4ac.
pub fn discriminant(coefficients: &Coefficients) -> f64 {
    let Coefficients { a, b, c } = *coefficients;
    b * b - 4.0 * a * c
}

/// Classify the coefficients into a solution branch.
pub fn classify(coefficients: &Coefficients) -> RootCase {
    if coefficients.a == 0.0 {
        return if coefficients.b == 0.0 {
            RootCase::DegenerateConstant
        } else {
            RootCase::Linear
        };
    }

    let d = discriminant(coefficients);
    if d < 0.0 {
        RootCase::NoRealRoots { discriminant: d }
    } else if d == 0.0 {
        RootCase::Repeated
    } else {
        RootCase::TwoDistinct { discriminant: d }
    }
}

/// Compute the real roots.
///
/// Two roots are returned as `(-b - √D) / 2a` then `(-b + √D) / 2a`, which is
/// ascending when a > 0.
pub fn compute_roots(coefficients: &Coefficients) -> Vec<f64> {
    let Coefficients { a, b, c } = *coefficients;
    match classify(coefficients) {
        RootCase::DegenerateConstant | RootCase::NoRealRoots { .. } => vec![],
        RootCase::Linear => vec![-c / b],
        RootCase::Repeated => vec![-b / (2.0 * a)],
        RootCase::TwoDistinct { discriminant } => {
            let sqrt_d = discriminant.sqrt();
            vec![(-b - sqrt_d) / (2.0 * a), (-b + sqrt_d) / (2.0 * a)]
        }
    }
}
