//! Floating-point closeness tolerance.

use crate::error::GeometryError;

/// Absolute and relative tolerance for closeness tests.
///
/// `is_close(a, b)` holds when `a == b`, or when both are finite and
/// `|a - b| <= abs + rel * max(|a|, |b|)`. The defaults (`abs = 1e-8`,
/// `rel = 1e-5`) match the conventional `isclose` defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance. Default: 1e-8.
    pub abs: f64,
    /// Relative tolerance. Default: 1e-5.
    pub rel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: 1e-8,
            rel: 1e-5,
        }
    }
}

impl Tolerance {
    /// Exact comparison: only bitwise-equal values are close.
    pub const EXACT: Self = Self { abs: 0.0, rel: 0.0 };

    /// Create a validated tolerance.
    pub fn new(abs: f64, rel: f64) -> Result<Self, GeometryError> {
        let tol = Self { abs, rel };
        tol.validate()?;
        Ok(tol)
    }

    /// Check that both components are finite and non-negative.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.abs) && ok(self.rel) {
            Ok(())
        } else {
            Err(GeometryError::InvalidTolerance {
                abs: self.abs,
                rel: self.rel,
            })
        }
    }

    /// Whether `a` and `b` are equal within this tolerance.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        (a - b).abs() <= self.abs + self.rel * a.abs().max(b.abs())
    }
}
