//! Periodic (toroidal) rectangle: folding, periodic images and distance.

use crate::metric::Metric;
use crate::policy::BoundaryPolicy;
use smallvec::SmallVec;
use toroid_core::{Bounds, GeometryError, Point};

/// A rectangular domain with opposite edges identified.
///
/// Coordinates are identified modulo `width = x1 - x0` and
/// `height = y1 - y0`. The [`BoundaryPolicy`] decides whether points
/// outside `[x0, x1) x [y0, y1)` are rejected or folded.
///
/// # Examples
///
/// ```
/// use toroid_core::Vec2;
/// use toroid_metric::{Metric, PeriodicDomain};
///
/// let torus = PeriodicDomain::unit();
/// let a = Vec2::new(0.05, 0.5);
/// let b = Vec2::new(0.95, 0.5);
///
/// // Across the seam the points are 0.1 apart, not 0.9.
/// let d = torus.distance(a, b).unwrap();
/// assert!((d - 0.1).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PeriodicDomain {
    bounds: Bounds,
    policy: BoundaryPolicy,
}

impl PeriodicDomain {
    /// Create a domain from validated bounds and a policy.
    pub fn new(bounds: Bounds, policy: BoundaryPolicy) -> Self {
        Self { bounds, policy }
    }

    /// Create a domain from raw bounds.
    ///
    /// Returns `Err(GeometryError::InvalidDomain)` unless `x0 < x1` and
    /// `y0 < y1`.
    pub fn from_bounds(
        x0: f64,
        x1: f64,
        y0: f64,
        y1: f64,
        policy: BoundaryPolicy,
    ) -> Result<Self, GeometryError> {
        Ok(Self::new(Bounds::new(x0, x1, y0, y1)?, policy))
    }

    /// The strict unit square `[0, 1) x [0, 1)`.
    pub fn unit() -> Self {
        Self::new(Bounds::UNIT, BoundaryPolicy::Strict)
    }

    /// The folding unit square `[0, 1) x [0, 1)`.
    pub fn unit_wrapping() -> Self {
        Self::new(Bounds::UNIT, BoundaryPolicy::Wrap)
    }

    /// Domain rectangle.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Membership policy.
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Fold `p` into this domain regardless of policy.
    pub fn fold(&self, p: Point) -> Point {
        fold(p, &self.bounds)
    }

    /// Bring `p` into the domain according to the policy.
    ///
    /// Under [`BoundaryPolicy::Strict`] a point outside the half-open
    /// rectangle is rejected. Under [`BoundaryPolicy::Wrap`] it is folded;
    /// only non-finite coordinates are rejected.
    pub fn admit(&self, p: Point) -> Result<Point, GeometryError> {
        match self.policy {
            BoundaryPolicy::Strict => {
                if self.bounds.contains_half_open(p) {
                    Ok(p)
                } else {
                    Err(self.out_of_domain(p))
                }
            }
            BoundaryPolicy::Wrap => {
                if p.is_finite() {
                    Ok(self.fold(p))
                } else {
                    Err(self.out_of_domain(p))
                }
            }
        }
    }

    /// The 3x3 lattice translations of `p` by `{-w, 0, +w} x {-h, 0, +h}`.
    ///
    /// Ordered x-offset major, y-offset minor. The untranslated point is at
    /// index 4.
    pub fn images(&self, p: Point) -> SmallVec<[Point; 9]> {
        let w = self.bounds.width();
        let h = self.bounds.height();
        let mut out = SmallVec::new();
        for ox in [-w, 0.0, w] {
            for oy in [-h, 0.0, h] {
                out.push(Point::new(p.x + ox, p.y + oy));
            }
        }
        out
    }

    fn out_of_domain(&self, p: Point) -> GeometryError {
        GeometryError::OutOfDomain {
            point: p,
            bounds: self.bounds.describe_half_open(),
        }
    }
}

impl Metric for PeriodicDomain {
    /// Minimum Euclidean distance between `b` and the periodic images of `a`.
    ///
    /// Both points are admitted under the domain's policy first. Once both
    /// lie inside one period, no image beyond the first ring can be closer,
    /// so the nine-way enumeration is exact.
    fn distance(&self, a: Point, b: Point) -> Result<f64, GeometryError> {
        let a = self.admit(a)?;
        let b = self.admit(b)?;
        Ok(self
            .images(a)
            .iter()
            .map(|img| (*img - b).length())
            .fold(f64::INFINITY, f64::min))
    }
}

/// Periodic distance between `point0` and `point1` on `bounds`.
///
/// Convenience wrapper over [`PeriodicDomain::distance`]. Use
/// [`Bounds::new`] to build the rectangle; it reports inverted bounds as
/// [`GeometryError::InvalidDomain`].
pub fn distance_periodic(
    point0: Point,
    point1: Point,
    bounds: &Bounds,
    policy: BoundaryPolicy,
) -> Result<f64, GeometryError> {
    PeriodicDomain::new(*bounds, policy).distance(point0, point1)
}

/// Fold `p` into `[x0, x1) x [y0, y1)` by whole periods.
///
/// Returns a new point; each axis is folded against its own bounds and
/// period. Non-finite coordinates are returned unchanged.
pub fn fold(p: Point, bounds: &Bounds) -> Point {
    let folded = Point::new(
        fold_axis(p.x, bounds.x0(), bounds.x1()),
        fold_axis(p.y, bounds.y0(), bounds.y1()),
    );
    if folded != p {
        tracing::trace!(from = %p, to = %folded, "folded point into periodic domain");
    }
    folded
}

fn fold_axis(v: f64, lo: f64, hi: f64) -> f64 {
    let period = hi - lo;
    let out = if v < lo {
        v + ((lo - v) / period).ceil() * period
    } else if v >= hi {
        v - (((v - hi) / period).floor() + 1.0) * period
    } else {
        return v;
    };
    if (lo..hi).contains(&out) {
        return out;
    }
    // Rounding pushed the result just past an edge.
    let out = lo + (v - lo).rem_euclid(period);
    if out >= hi { lo } else { out }
}
