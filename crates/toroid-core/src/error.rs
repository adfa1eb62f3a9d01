//! Error types for geometric operations.

use crate::vec2::Vec2;
use std::error::Error;
use std::fmt;

/// Errors arising from domain construction, distance queries or cell
/// traversal.
///
/// Every variant carries the offending values so the message is useful
/// without a debugger. None of these are retried internally.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Domain bounds are inverted, degenerate or non-finite
    /// (`x0 >= x1` or `y0 >= y1`).
    InvalidDomain {
        /// Lower x bound.
        x0: f64,
        /// Upper x bound.
        x1: f64,
        /// Lower y bound.
        y0: f64,
        /// Upper y bound.
        y1: f64,
    },
    /// A point lies outside the domain it was checked against.
    OutOfDomain {
        /// The offending point.
        point: Vec2,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A velocity is indistinguishable from zero.
    ZeroVelocity {
        /// The offending velocity.
        velocity: Vec2,
    },
    /// A tolerance has a negative or non-finite component.
    InvalidTolerance {
        /// Absolute tolerance.
        abs: f64,
        /// Relative tolerance.
        rel: f64,
    },
    /// A cell grid was configured with unusable dimensions.
    InvalidGrid {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { x0, x1, y0, y1 } => write!(
                f,
                "invalid domain: need x0<x1 and y0<y1 but got x0={x0}, x1={x1}, y0={y0}, y1={y1}"
            ),
            Self::OutOfDomain { point, bounds } => {
                write!(f, "point {point} is not inside {bounds}")
            }
            Self::ZeroVelocity { velocity } => {
                write!(f, "velocity {velocity} is indistinguishable from zero")
            }
            Self::InvalidTolerance { abs, rel } => write!(
                f,
                "invalid tolerance: abs={abs}, rel={rel} (both must be finite and >= 0)"
            ),
            Self::InvalidGrid { reason } => write!(f, "invalid cell grid: {reason}"),
        }
    }
}

impl Error for GeometryError {}
