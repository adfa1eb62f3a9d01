//! Domain-membership contract for periodic operations.

/// How a periodic domain treats points that lie outside its rectangle.
///
/// The two contracts are mutually exclusive and are chosen once, at the
/// point where a [`PeriodicDomain`](crate::PeriodicDomain) (or a cell grid)
/// is configured.
///
/// # Examples
///
/// ```
/// use toroid_core::{Bounds, Vec2};
/// use toroid_metric::{distance_periodic, BoundaryPolicy};
///
/// let a = Vec2::new(1.25, 0.5); // outside [0, 1)
/// let b = Vec2::new(0.25, 0.5);
///
/// // Strict: the caller must pre-wrap.
/// assert!(distance_periodic(a, b, &Bounds::UNIT, BoundaryPolicy::Strict).is_err());
///
/// // Wrap: 1.25 folds to 0.25, so the points coincide.
/// let d = distance_periodic(a, b, &Bounds::UNIT, BoundaryPolicy::Wrap).unwrap();
/// assert!(d.abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// A point outside `[x0, x1) x [y0, y1)` is an error.
    #[default]
    Strict,
    /// Out-of-range coordinates fold back by whole periods (torus).
    Wrap,
}
