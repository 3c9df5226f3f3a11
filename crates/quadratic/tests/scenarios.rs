//! Integration tests for the quadratic analyzer.
//!
//! Covers the concrete parameter sets a user is likely to try first, plus
//! property checks over a grid of coefficients.

use quadratic::{AnalysisError, analyze, compute_roots, discriminant, roots_line, vertex_line};
use types::{Coefficients, PlotParams, SampleRange};

const TOLERANCE: f64 = 1e-9;

fn params(a: f64, b: f64, c: f64) -> PlotParams {
    PlotParams::new(Coefficients::new(a, b, c), SampleRange::default())
}

/// Coefficients spanning every sign combination plus zeros.
fn coefficient_grid() -> Vec<Coefficients> {
    let values = [-3.0, -1.5, -0.5, 0.0, 0.5, 1.0, 2.5];
    let mut grid = Vec::new();
    for &a in &values {
        for &b in &values {
            for &c in &values {
                grid.push(Coefficients::new(a, b, c));
            }
        }
    }
    grid
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn test_unit_parabola() {
    let analysis = analyze(&params(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(analysis.roots.len(), 1);
    assert_eq!(analysis.roots[0].x, 0.0);
    let v = analysis.vertex.unwrap();
    assert_eq!((v.x, v.y), (0.0, 0.0));
    assert_eq!(analysis.label, "y = 1.000x² + 0.000x + 0.000");
}

#[test]
fn test_two_integer_roots() {
    let p = params(1.0, -3.0, 2.0);
    assert_eq!(discriminant(&p.coefficients), 1.0);

    let analysis = analyze(&p).unwrap();
    let xs: Vec<f64> = analysis.roots.iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![1.0, 2.0]);
    let v = analysis.vertex.unwrap();
    assert!((v.x - 1.5).abs() < TOLERANCE);
    assert!((v.y + 0.25).abs() < TOLERANCE);
    assert_eq!(roots_line(&analysis.roots), "Roots: 1.000, 2.000");
}

#[test]
fn test_no_real_roots() {
    let p = params(1.0, 0.0, 1.0);
    assert_eq!(discriminant(&p.coefficients), -4.0);

    let analysis = analyze(&p).unwrap();
    assert!(analysis.roots.is_empty());
    assert_eq!(roots_line(&analysis.roots), "Roots: none");
    let v = analysis.vertex.unwrap();
    assert_eq!((v.x, v.y), (0.0, 1.0));
}

#[test]
fn test_linear_function() {
    let analysis = analyze(&params(0.0, 2.0, -4.0)).unwrap();
    let xs: Vec<f64> = analysis.roots.iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![2.0]);
    assert!(analysis.vertex.is_none());
    assert_eq!(vertex_line(analysis.vertex), "Vertex: none");
    assert_eq!(analysis.label, "y = 2.000x + -4.000");
}

#[test]
fn test_constant_function() {
    let analysis = analyze(&params(0.0, 0.0, 5.0)).unwrap();
    assert!(analysis.roots.is_empty());
    assert!(analysis.vertex.is_none());
    assert!(analysis.curve.iter().all(|p| p.y == 5.0));
}

#[test]
fn test_reversed_range_blocks_computation() {
    let p = PlotParams::new(Coefficients::default(), SampleRange::new(5.0, -5.0, 400));
    let err = analyze(&p).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::InvalidRange {
            x_min: 5.0,
            x_max: -5.0
        }
    );
}

#[test]
fn test_equal_bounds_block_computation() {
    let p = PlotParams::new(Coefficients::default(), SampleRange::new(3.0, 3.0, 400));
    assert!(analyze(&p).is_err());
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_constant_never_has_roots() {
    for c in [-10.0, -1.0, 0.0, 1.0, 10.0] {
        assert!(compute_roots(&Coefficients::new(0.0, 0.0, c)).is_empty());
    }
}

#[test]
fn test_linear_root_satisfies_equation() {
    for coeffs in coefficient_grid()
        .into_iter()
        .filter(|k| k.a == 0.0 && k.b != 0.0)
    {
        let roots = compute_roots(&coeffs);
        assert_eq!(roots, vec![-coeffs.c / coeffs.b]);
        assert!((coeffs.b * roots[0] + coeffs.c).abs() < TOLERANCE);
    }
}

#[test]
fn test_quadratic_root_count_follows_discriminant() {
    for coeffs in coefficient_grid().into_iter().filter(|k| k.a != 0.0) {
        let d = discriminant(&coeffs);
        let roots = compute_roots(&coeffs);

        if d < 0.0 {
            assert!(roots.is_empty(), "{:?}", coeffs);
        } else if d == 0.0 {
            assert_eq!(roots, vec![-coeffs.b / (2.0 * coeffs.a)], "{:?}", coeffs);
        } else {
            assert_eq!(roots.len(), 2, "{:?}", coeffs);
            assert_ne!(roots[0], roots[1]);
            for &r in &roots {
                assert!(coeffs.evaluate(r).abs() < 1e-6, "{:?} at {}", coeffs, r);
            }
            if coeffs.a > 0.0 {
                assert!(roots[0] < roots[1]);
            }
        }
    }
}

#[test]
fn test_vertex_is_extremum() {
    for coeffs in coefficient_grid().into_iter().filter(|k| k.a != 0.0) {
        let analysis = analyze(&PlotParams::new(coeffs, SampleRange::default())).unwrap();
        let v = analysis.vertex.unwrap();
        for p in &analysis.curve {
            if coeffs.a > 0.0 {
                assert!(v.y <= p.y + TOLERANCE, "{:?}", coeffs);
            } else {
                assert!(v.y >= p.y - TOLERANCE, "{:?}", coeffs);
            }
        }
    }
}

#[test]
fn test_curve_sampling_shape() {
    for points in [100, 400, 1000, 5000] {
        let range = SampleRange::new(-3.5, 7.25, points);
        let analysis = analyze(&PlotParams::new(Coefficients::default(), range)).unwrap();
        let curve = &analysis.curve;

        assert_eq!(curve.len(), points);
        assert!((curve[0].x - range.x_min).abs() < TOLERANCE);
        assert!((curve[points - 1].x - range.x_max).abs() < TOLERANCE);

        let step = range.span() / (points - 1) as f64;
        for w in curve.windows(2) {
            assert!((w[1].x - w[0].x - step).abs() < 1e-9);
        }
    }
}

#[test]
fn test_boundary_root_counts_as_in_range() {
    // Root exactly at x_max, and one just past it within epsilon.
    let at_edge = PlotParams::new(
        Coefficients::new(0.0, 1.0, -10.0),
        SampleRange::default(),
    );
    assert!(analyze(&at_edge).unwrap().roots[0].in_range);

    let past_edge = PlotParams::new(
        Coefficients::new(0.0, 1.0, -(10.0 + 1e-9)),
        SampleRange::default(),
    );
    assert!(analyze(&past_edge).unwrap().roots[0].in_range);

    let outside = PlotParams::new(
        Coefficients::new(0.0, 1.0, -11.0),
        SampleRange::default(),
    );
    assert!(!analyze(&outside).unwrap().roots[0].in_range);
}
