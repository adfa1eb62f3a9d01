//! The `Metric` trait and the plain Euclidean metric.

use toroid_core::{GeometryError, Point};

/// A distance function between two points.
///
/// Implemented by [`Euclidean`], by [`PeriodicDomain`](crate::PeriodicDomain),
/// and by any closure `Fn(Point, Point) -> Result<f64, GeometryError>`, so a
/// caller can pass an ad-hoc metric wherever a strategy is expected.
///
/// Distances are fallible because a domain-restricted metric may reject
/// its inputs (see [`BoundaryPolicy::Strict`](crate::BoundaryPolicy::Strict)).
///
/// # Examples
///
/// ```
/// use toroid_core::{GeometryError, Point, Vec2};
/// use toroid_metric::Metric;
///
/// let manhattan = |a: Point, b: Point| -> Result<f64, GeometryError> {
///     Ok((a.x - b.x).abs() + (a.y - b.y).abs())
/// };
/// let d = manhattan.distance(Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0)).unwrap();
/// assert_eq!(d, 3.0);
/// ```
pub trait Metric {
    /// Distance between `a` and `b`.
    fn distance(&self, a: Point, b: Point) -> Result<f64, GeometryError>;
}

impl<F> Metric for F
where
    F: Fn(Point, Point) -> Result<f64, GeometryError>,
{
    fn distance(&self, a: Point, b: Point) -> Result<f64, GeometryError> {
        self(a, b)
    }
}

/// Ordinary Euclidean distance and length on the unbounded plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(&self, a: Point, b: Point) -> Result<f64, GeometryError> {
        Ok((a - b).length())
    }
}
