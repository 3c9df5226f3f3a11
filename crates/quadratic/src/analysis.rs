//! One full compute cycle.

use tracing::debug;
use types::{Analysis, PlotParams, Root};

use crate::curve::sample_curve;
use crate::error::Result;
use crate::label::function_label;
use crate::roots::compute_roots;
use crate::vertex::vertex;

/// Analyze the function described by `params`.
///
/// The range is validated before anything else is computed. Display toggles
/// are ignored here; the renderer decides what to show.
pub fn analyze(params: &PlotParams) -> Result<Analysis> {
    let coefficients = &params.coefficients;
    let range = &params.range;

    let curve = sample_curve(coefficients, range)?;

    let roots: Vec<Root> = compute_roots(coefficients)
        .into_iter()
        .map(|x| Root {
            x,
            y: coefficients.evaluate(x),
            in_range: range.contains(x),
        })
        .collect();

    let analysis = Analysis {
        label: function_label(coefficients),
        curve,
        vertex: vertex(coefficients),
        roots,
    };

    debug!(
        a = coefficients.a,
        b = coefficients.b,
        c = coefficients.c,
        points = analysis.curve.len(),
        roots = analysis.roots.len(),
        has_vertex = analysis.vertex.is_some(),
        "analysis computed"
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{Coefficients, SampleRange};

    #[test]
    fn test_analyze_marks_roots_out_of_range() {
        // Roots at 1 and 2; only 1 lies inside [-5, 1.5].
        let params = PlotParams::new(
            Coefficients::new(1.0, -3.0, 2.0),
            SampleRange::new(-5.0, 1.5, 100),
        );
        let analysis = analyze(&params).unwrap();
        let flags: Vec<bool> = analysis.roots.iter().map(|r| r.in_range).collect();
        assert_eq!(flags, vec![true, false]);
        assert_eq!(analysis.roots_in_range().count(), 1);
    }

    #[test]
    fn test_analyze_root_y_is_near_zero() {
        let params = PlotParams::new(
            Coefficients::new(2.0, 3.0, -7.0),
            SampleRange::default(),
        );
        let analysis = analyze(&params).unwrap();
        assert_eq!(analysis.roots.len(), 2);
        for root in &analysis.roots {
            assert!(root.y.abs() < 1e-9);
        }
    }

    #[test]
    fn test_analyze_ignores_display_toggles() {
        let mut params = PlotParams::default();
        params.display.show_vertex = false;
        params.display.show_roots = false;
        let analysis = analyze(&params).unwrap();
        assert!(analysis.vertex.is_some());
        assert_eq!(analysis.roots.len(), 1);
    }
}
