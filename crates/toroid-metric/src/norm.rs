//! Norms induced by a metric: `‖v‖ := d(v, 0)`.

use crate::metric::{Euclidean, Metric};
use crate::periodic::PeriodicDomain;
use toroid_core::{GeometryError, Vec2, Vector};

/// A length function on vectors.
///
/// Implemented by [`Euclidean`], by [`MetricNorm`] (the norm induced by
/// any [`Metric`]), and by any closure `Fn(Vector) -> Result<f64, GeometryError>`.
pub trait Norm {
    /// Length of `v`.
    fn norm(&self, v: Vector) -> Result<f64, GeometryError>;
}

impl<F> Norm for F
where
    F: Fn(Vector) -> Result<f64, GeometryError>,
{
    fn norm(&self, v: Vector) -> Result<f64, GeometryError> {
        self(v)
    }
}

impl Norm for Euclidean {
    fn norm(&self, v: Vector) -> Result<f64, GeometryError> {
        Ok(v.length())
    }
}

/// The norm induced by a metric, measuring each vector's distance to the
/// origin.
///
/// The default is induced by the folding unit torus, so a displacement
/// such as `(-0.9, 0.0)` has length `0.1`.
///
/// # Examples
///
/// ```
/// use toroid_core::Vec2;
/// use toroid_metric::{MetricNorm, Norm};
///
/// let n = MetricNorm::default();
/// let len = n.norm(Vec2::new(-0.9, 0.0)).unwrap();
/// assert!((len - 0.1).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricNorm<M> {
    metric: M,
}

impl<M: Metric> MetricNorm<M> {
    /// Wrap `metric` as a norm.
    pub fn new(metric: M) -> Self {
        Self { metric }
    }

    /// The underlying metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }
}

impl Default for MetricNorm<PeriodicDomain> {
    fn default() -> Self {
        Self::new(PeriodicDomain::unit_wrapping())
    }
}

impl<M: Metric> Norm for MetricNorm<M> {
    fn norm(&self, v: Vector) -> Result<f64, GeometryError> {
        customnorm(v, &self.metric)
    }
}

/// Length of `v` under `distance`: `distance(v, 0)`.
pub fn customnorm(v: Vector, distance: &impl Metric) -> Result<f64, GeometryError> {
    distance.distance(v, Vec2::ZERO)
}

/// The norm used for point-to-line distance when the caller has no
/// preference: periodic length on the folding unit torus.
pub fn default_norm() -> MetricNorm<PeriodicDomain> {
    MetricNorm::default()
}
