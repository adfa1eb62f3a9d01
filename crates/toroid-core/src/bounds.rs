//! Axis-aligned rectangle used for both periodic domains and grid cells.

use crate::error::GeometryError;
use crate::vec2::Point;
use std::fmt;

/// An axis-aligned rectangle `x0 < x1`, `y0 < y1`.
///
/// Whether the upper edges are included depends on the caller:
/// periodic domains use the half-open `[x0, x1) x [y0, y1)`, cells use
/// the closed `[x0, x1] x [y0, y1]`.
///
/// # Examples
///
/// ```
/// use toroid_core::{Bounds, Vec2};
///
/// let b = Bounds::new(5.0, 10.0, 5.0, 10.0).unwrap();
/// assert_eq!(b.width(), 5.0);
/// assert!(b.contains_half_open(Vec2::new(5.0, 9.9)));
/// assert!(!b.contains_half_open(Vec2::new(10.0, 7.0)));
/// assert!(b.contains_closed(Vec2::new(10.0, 7.0)));
///
/// assert!(Bounds::new(1.0, 0.0, 0.0, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
}

impl Bounds {
    /// The unit square `[0, 1] x [0, 1]`.
    pub const UNIT: Self = Self {
        x0: 0.0,
        x1: 1.0,
        y0: 0.0,
        y1: 1.0,
    };

    /// Create bounds, rejecting `x0 >= x1`, `y0 >= y1` and non-finite values
    /// with [`GeometryError::InvalidDomain`].
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Result<Self, GeometryError> {
        let finite = x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite();
        if !finite || x0 >= x1 || y0 >= y1 {
            return Err(GeometryError::InvalidDomain { x0, x1, y0, y1 });
        }
        Ok(Self { x0, x1, y0, y1 })
    }

    /// Lower x bound.
    pub fn x0(&self) -> f64 {
        self.x0
    }

    /// Upper x bound.
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Lower y bound.
    pub fn y0(&self) -> f64 {
        self.y0
    }

    /// Upper y bound.
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// `x1 - x0`, the horizontal period.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// `y1 - y0`, the vertical period.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Membership in `[x0, x1) x [y0, y1)`.
    pub fn contains_half_open(&self, p: Point) -> bool {
        self.x0 <= p.x && p.x < self.x1 && self.y0 <= p.y && p.y < self.y1
    }

    /// Membership in `[x0, x1] x [y0, y1]`.
    pub fn contains_closed(&self, p: Point) -> bool {
        self.x0 <= p.x && p.x <= self.x1 && self.y0 <= p.y && p.y <= self.y1
    }

    /// Clamp `p` into the closed rectangle.
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(self.x0, self.x1), p.y.clamp(self.y0, self.y1))
    }

    /// Human-readable half-open range, used in error messages.
    pub fn describe_half_open(&self) -> String {
        format!("[{}, {}) x [{}, {})", self.x0, self.x1, self.y0, self.y1)
    }

    /// Human-readable closed range, used in error messages.
    pub fn describe_closed(&self) -> String {
        format!("[{}, {}] x [{}, {}]", self.x0, self.x1, self.y0, self.y1)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_closed())
    }
}
