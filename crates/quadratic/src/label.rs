//! Display label for the function.

use types::Coefficients;

/// `y = {a}x² + {b}x + {c}`, or `y = {b}x + {c}` when a = 0.
///
/// Coefficients are printed with three decimals and signs are kept as-is,
/// so negative terms read `+ -4.000`.
pub fn function_label(coefficients: &Coefficients) -> String {
    let Coefficients { a, b, c } = *coefficients;
    if coefficients.is_linear() {
        format!("y = {:.3}x + {:.3}", b, c)
    } else {
        format!("y = {:.3}x² + {:.3}x + {:.3}", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_label() {
        assert_eq!(
            function_label(&Coefficients::new(1.0, 0.0, 0.0)),
            "y = 1.000x² + 0.000x + 0.000"
        );
        assert_eq!(
            function_label(&Coefficients::new(1.0, -3.0, 2.0)),
            "y = 1.000x² + -3.000x + 2.000"
        );
    }

    #[test]
    fn test_linear_label() {
        assert_eq!(
            function_label(&Coefficients::new(0.0, 2.0, -4.0)),
            "y = 2.000x + -4.000"
        );
    }

    #[test]
    fn test_label_rounds_to_three_decimals() {
        assert_eq!(
            function_label(&Coefficients::new(0.12345, 1.0, 0.0)),
            "y = 0.123x² + 1.000x + 0.000"
        );
    }
}
