//! Metric axiom test helpers.
//!
//! These functions verify that a [`Metric`] implementation behaves as a
//! distance over a set of sample points. Reused across the Euclidean,
//! periodic and norm-derived test modules.

use crate::metric::Metric;
use crate::periodic::PeriodicDomain;
use toroid_core::{Bounds, Point};

const EPS: f64 = 1e-12;

fn measure(metric: &dyn Metric, a: Point, b: Point) -> f64 {
    metric
        .distance(a, b)
        .expect("sample point should be admissible")
}

/// Evenly spaced `n x n` lattice of points inside the half-open `bounds`.
pub fn lattice_points(bounds: &Bounds, n: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            out.push(Point::new(
                bounds.x0() + bounds.width() * i as f64 / n as f64,
                bounds.y0() + bounds.height() * j as f64 / n as f64,
            ));
        }
    }
    out
}

/// Assert that `distance(a, a) == 0.0` for all points.
pub fn assert_distance_reflexive(metric: &dyn Metric, points: &[Point]) {
    for &a in points {
        let d = measure(metric, a, a);
        assert!(d.abs() < EPS, "distance({a}, {a}) = {d}, expected 0.0");
    }
}

/// Assert that distances are finite and non-negative.
pub fn assert_distance_non_negative(metric: &dyn Metric, points: &[Point]) {
    for &a in points {
        for &b in points {
            let d = measure(metric, a, b);
            assert!(d.is_finite() && d >= 0.0, "distance({a}, {b}) = {d}");
        }
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all point pairs.
pub fn assert_distance_symmetric(metric: &dyn Metric, points: &[Point]) {
    for &a in points {
        for &b in points {
            let dab = measure(metric, a, b);
            let dba = measure(metric, b, a);
            assert!(
                (dab - dba).abs() < EPS,
                "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}"
            );
        }
    }
}

/// Assert triangle inequality: `d(a, c) <= d(a, b) + d(b, c)` for all triples.
pub fn assert_distance_triangle_inequality(metric: &dyn Metric, points: &[Point]) {
    for &a in points {
        for &b in points {
            for &c in points {
                let dac = measure(metric, a, c);
                let dab = measure(metric, a, b);
                let dbc = measure(metric, b, c);
                assert!(
                    dac <= dab + dbc + EPS,
                    "triangle inequality: {dac} > {dab} + {dbc} for {a}, {b}, {c}"
                );
            }
        }
    }
}

/// Assert that no periodic distance exceeds half the domain diagonal.
pub fn assert_distance_bounded_by_half_diagonal(domain: &PeriodicDomain, points: &[Point]) {
    let b = domain.bounds();
    let limit = 0.5 * b.width().hypot(b.height());
    for &a in points {
        for &c in points {
            let d = measure(domain, a, c);
            assert!(d <= limit + EPS, "distance({a}, {c}) = {d} > half diagonal {limit}");
        }
    }
}

/// Run the four metric-axiom checks on a metric.
pub fn run_full_compliance(metric: &dyn Metric, points: &[Point]) {
    assert_distance_reflexive(metric, points);
    assert_distance_non_negative(metric, points);
    assert_distance_symmetric(metric, points);
    assert_distance_triangle_inequality(metric, points);
}
