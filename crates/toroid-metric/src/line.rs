//! Point-to-line distance under an arbitrary norm.

use crate::norm::Norm;
use toroid_core::{GeometryError, Point, Vector};

/// An infinite line through `anchor` along `direction`.
///
/// `direction` need not be unit length, but it must be non-zero. A zero
/// direction produces NaN results rather than an error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// A point the line passes through.
    pub anchor: Point,
    /// Direction of the line.
    pub direction: Vector,
}

/// Result of projecting a point onto a [`Line`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineProjection {
    /// Minimal distance between the point and the line.
    pub distance: f64,
    /// Arc length from the anchor to the foot of the perpendicular,
    /// measured in the same norm as `distance`. Always non-negative.
    pub s: f64,
}

impl From<LineProjection> for (f64, f64) {
    fn from(p: LineProjection) -> Self {
        (p.distance, p.s)
    }
}

impl Line {
    /// Create a line.
    pub fn new(anchor: Point, direction: Vector) -> Self {
        Self { anchor, direction }
    }

    /// Project `point` onto this line.
    ///
    /// With `u` the unit direction and `r = anchor - point`, the distance is
    /// `norm(r - u (r . u))` and `s` follows from
    /// `s^2 = norm(r)^2 - distance^2`. Both use the supplied norm, so a
    /// periodic norm yields a periodic arc length. Neither value changes
    /// when `direction` is scaled by a positive constant.
    ///
    /// # Examples
    ///
    /// ```
    /// use toroid_core::Vec2;
    /// use toroid_metric::{default_norm, Line};
    ///
    /// let line = Line::new(Vec2::new(0.5, 0.5), Vec2::new(0.0, 1.0));
    /// let proj = line.project(Vec2::new(0.5, 0.0), &default_norm()).unwrap();
    /// assert!(proj.distance.abs() < 1e-12);
    /// assert!((proj.s - 0.5).abs() < 1e-12);
    /// ```
    pub fn project(&self, point: Point, norm: &impl Norm) -> Result<LineProjection, GeometryError> {
        let unit = self.direction / self.direction.length();
        let r = self.anchor - point;
        let residual = r - unit * r.dot(unit);
        let distance = norm.norm(residual)?;
        let reach = norm.norm(r)?;
        // Rounding can make the difference slightly negative on the line.
        let s = (reach * reach - distance * distance).max(0.0).sqrt();
        Ok(LineProjection { distance, s })
    }
}

/// Distance from `point` to the line through `linepoint` along
/// `linedirection`, returned as `(distance, s)`.
///
/// See [`Line::project`]. Pass [`default_norm()`](crate::default_norm) for
/// the periodic unit-torus norm or [`Euclidean`](crate::Euclidean) for the
/// flat plane.
pub fn distance_pointline(
    linepoint: Point,
    linedirection: Vector,
    point: Point,
    norm: &impl Norm,
) -> Result<(f64, f64), GeometryError> {
    Line::new(linepoint, linedirection)
        .project(point, norm)
        .map(Into::into)
}
