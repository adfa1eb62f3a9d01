//! Uniform grid of rectangular cells.

use crate::walk::CellWalk;
use toroid_core::{Bounds, GeometryError, Point, Tolerance, Vec2, Vector};
use toroid_metric::{fold, BoundaryPolicy};

/// An `nx x ny` tiling of a rectangle with equal cells.
///
/// Cell `(i, j)` spans column `i` (left to right) and row `j` (bottom to
/// top). The [`BoundaryPolicy`] decides what happens at the outer edge:
/// under [`Strict`](BoundaryPolicy::Strict) the grid simply ends, under
/// [`Wrap`](BoundaryPolicy::Wrap) the outer edges are identified and cell
/// indices wrap around.
///
/// # Examples
///
/// ```
/// use toroid_core::{Bounds, Vec2};
/// use toroid_metric::BoundaryPolicy;
/// use toroid_traverse::CellGrid;
///
/// let grid = CellGrid::new(Bounds::UNIT, 4, 2, BoundaryPolicy::Wrap).unwrap();
/// assert_eq!(grid.cell_of(Vec2::new(0.3, 0.7)), Some((1, 1)));
/// assert_eq!(grid.cell_of(Vec2::new(1.3, -0.3)), Some((1, 1)));
/// assert_eq!(grid.neighbour((3, 1), 1, 1), Some((0, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGrid {
    bounds: Bounds,
    nx: u32,
    ny: u32,
    policy: BoundaryPolicy,
    tolerance: Tolerance,
}

impl CellGrid {
    /// Create a grid of `nx * ny` cells over `bounds`.
    ///
    /// Returns `Err(GeometryError::InvalidGrid)` if either count is zero.
    pub fn new(
        bounds: Bounds,
        nx: u32,
        ny: u32,
        policy: BoundaryPolicy,
    ) -> Result<Self, GeometryError> {
        if nx == 0 || ny == 0 {
            return Err(GeometryError::InvalidGrid {
                reason: format!("grid must have at least one cell per axis, got {nx} x {ny}"),
            });
        }
        Ok(Self {
            bounds,
            nx,
            ny,
            policy,
            tolerance: Tolerance::default(),
        })
    }

    /// Replace the tolerance used by the exit test.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Result<Self, GeometryError> {
        tolerance.validate()?;
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Outer rectangle.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Number of columns.
    pub fn nx(&self) -> u32 {
        self.nx
    }

    /// Number of rows.
    pub fn ny(&self) -> u32 {
        self.ny
    }

    /// Edge policy.
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Exit-test tolerance.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Width of one cell.
    pub fn cell_width(&self) -> f64 {
        self.bounds.width() / self.nx as f64
    }

    /// Height of one cell.
    pub fn cell_height(&self) -> f64 {
        self.bounds.height() / self.ny as f64
    }

    /// The cell containing `p`.
    ///
    /// Under `Wrap` the point is folded into the grid first. Under `Strict`
    /// points outside the closed rectangle give `None`. Points on an
    /// interior face belong to the cell above / to the right; points on
    /// the outer upper edges belong to the last cell.
    pub fn cell_of(&self, p: Point) -> Option<(i64, i64)> {
        if !p.is_finite() {
            return None;
        }
        let p = match self.policy {
            BoundaryPolicy::Wrap => fold(p, &self.bounds),
            BoundaryPolicy::Strict => {
                if !self.bounds.contains_closed(p) {
                    return None;
                }
                p
            }
        };
        let i = axis_index(p.x - self.bounds.x0(), self.cell_width(), self.nx);
        let j = axis_index(p.y - self.bounds.y0(), self.cell_height(), self.ny);
        Some((i, j))
    }

    /// Closed rectangle of cell `(i, j)`.
    ///
    /// Returns `Err(GeometryError::InvalidGrid)` for indices outside the grid.
    pub fn cell_bounds(&self, (i, j): (i64, i64)) -> Result<Bounds, GeometryError> {
        if !(0..self.nx as i64).contains(&i) || !(0..self.ny as i64).contains(&j) {
            return Err(GeometryError::InvalidGrid {
                reason: format!(
                    "cell ({i}, {j}) outside [0, {}) x [0, {})",
                    self.nx, self.ny
                ),
            });
        }
        let (x0, x1) = axis_span(self.bounds.x0(), self.bounds.x1(), self.nx, i);
        let (y0, y1) = axis_span(self.bounds.y0(), self.bounds.y1(), self.ny, j);
        Bounds::new(x0, x1, y0, y1)
    }

    /// The cell at offset `(di, dj)` from `cell`, or `None` past a strict edge.
    pub fn neighbour(&self, cell: (i64, i64), di: i8, dj: i8) -> Option<(i64, i64)> {
        self.step(cell, di, dj).map(|(next, _)| next)
    }

    /// Begin walking a particle from `start` with `velocity` until it has
    /// travelled `budget` (in units of the velocity parameter, so path
    /// length for a unit-speed velocity).
    ///
    /// Returns `Err(GeometryError::ZeroVelocity)` for a zero velocity,
    /// `Err(GeometryError::OutOfDomain)` if `start` is outside a strict
    /// grid (or non-finite), and `Err(GeometryError::InvalidGrid)` for a
    /// negative or non-finite budget.
    pub fn walk(
        &self,
        start: Point,
        velocity: Vector,
        budget: f64,
    ) -> Result<CellWalk, GeometryError> {
        if velocity.is_zero(self.tolerance) {
            return Err(GeometryError::ZeroVelocity { velocity });
        }
        if !budget.is_finite() || budget < 0.0 {
            return Err(GeometryError::InvalidGrid {
                reason: format!("walk budget must be finite and non-negative, got {budget}"),
            });
        }
        let cell = self.cell_of(start).ok_or_else(|| self.outside(start))?;
        let start = match self.policy {
            BoundaryPolicy::Wrap => fold(start, &self.bounds),
            BoundaryPolicy::Strict => start,
        };
        Ok(CellWalk::new(*self, cell, start, velocity, budget))
    }

    /// Offset `cell` by `(di, dj)`.
    ///
    /// Also returns the shift to apply to a position so it is expressed
    /// relative to the new cell: zero unless the step wrapped.
    pub(crate) fn step(&self, cell: (i64, i64), di: i8, dj: i8) -> Option<((i64, i64), Vector)> {
        let (i, j) = cell;
        let (ni, sx) = wrap_index(i + di as i64, self.nx, self.bounds.width(), self.policy)?;
        let (nj, sy) = wrap_index(j + dj as i64, self.ny, self.bounds.height(), self.policy)?;
        if sx != 0.0 || sy != 0.0 {
            tracing::debug!(from = ?(i, j), to = ?(ni, nj), "cell walk wrapped around grid edge");
        }
        Some(((ni, nj), Vec2::new(sx, sy)))
    }

    fn outside(&self, p: Point) -> GeometryError {
        GeometryError::OutOfDomain {
            point: p,
            bounds: self.bounds.describe_closed(),
        }
    }
}

fn axis_index(offset: f64, size: f64, n: u32) -> i64 {
    ((offset / size).floor() as i64).clamp(0, n as i64 - 1)
}

fn axis_span(lo: f64, hi: f64, n: u32, k: i64) -> (f64, f64) {
    let size = (hi - lo) / n as f64;
    let start = lo + size * k as f64;
    let end = if k == n as i64 - 1 {
        hi
    } else {
        lo + size * (k + 1) as f64
    };
    (start, end)
}

fn wrap_index(k: i64, n: u32, period: f64, policy: BoundaryPolicy) -> Option<(i64, f64)> {
    let n = n as i64;
    if (0..n).contains(&k) {
        return Some((k, 0.0));
    }
    match policy {
        BoundaryPolicy::Strict => None,
        BoundaryPolicy::Wrap if k < 0 => Some((k + n, period)),
        BoundaryPolicy::Wrap => Some((k - n, -period)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(policy: BoundaryPolicy) -> CellGrid {
        CellGrid::new(Bounds::UNIT, 4, 2, policy).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn zero_cells_rejected() {
        assert!(matches!(
            CellGrid::new(Bounds::UNIT, 0, 3, BoundaryPolicy::Strict),
            Err(GeometryError::InvalidGrid { .. })
        ));
        assert!(CellGrid::new(Bounds::UNIT, 3, 0, BoundaryPolicy::Wrap).is_err());
    }

    #[test]
    fn bad_tolerance_rejected() {
        let g = grid(BoundaryPolicy::Strict);
        let negative = Tolerance {
            abs: -1.0,
            rel: 0.0,
        };
        assert!(matches!(
            g.with_tolerance(negative),
            Err(GeometryError::InvalidTolerance { .. })
        ));
        let exact = g.with_tolerance(Tolerance::EXACT).unwrap();
        assert_eq!(exact.tolerance(), Tolerance::EXACT);
    }

    #[test]
    fn cell_sizes() {
        let g = grid(BoundaryPolicy::Strict);
        assert_eq!(g.cell_width(), 0.25);
        assert_eq!(g.cell_height(), 0.5);
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn cell_of_interior_and_faces() {
        let g = grid(BoundaryPolicy::Strict);
        assert_eq!(g.cell_of(Vec2::new(0.1, 0.1)), Some((0, 0)));
        assert_eq!(g.cell_of(Vec2::new(0.25, 0.5)), Some((1, 1)));
        assert_eq!(g.cell_of(Vec2::new(1.0, 1.0)), Some((3, 1)));
        assert_eq!(g.cell_of(Vec2::new(1.1, 0.5)), None);
        assert_eq!(g.cell_of(Vec2::new(f64::NAN, 0.5)), None);
    }

    #[test]
    fn cell_of_wraps_under_wrap_policy() {
        let g = grid(BoundaryPolicy::Wrap);
        assert_eq!(g.cell_of(Vec2::new(1.1, 0.5)), Some((0, 1)));
        assert_eq!(g.cell_of(Vec2::new(-0.1, -0.1)), Some((3, 1)));
    }

    #[test]
    fn cell_bounds_tile_the_grid() {
        let g = grid(BoundaryPolicy::Strict);
        let b = g.cell_bounds((2, 1)).unwrap();
        assert_eq!((b.x0(), b.x1(), b.y0(), b.y1()), (0.5, 0.75, 0.5, 1.0));
        let last = g.cell_bounds((3, 1)).unwrap();
        assert_eq!(last.x1(), 1.0);
        let left = g.cell_bounds((1, 0)).unwrap();
        let right = g.cell_bounds((2, 0)).unwrap();
        assert_eq!(left.x1(), right.x0());
    }

    #[test]
    fn cell_bounds_out_of_range() {
        let g = grid(BoundaryPolicy::Wrap);
        assert!(matches!(
            g.cell_bounds((4, 0)),
            Err(GeometryError::InvalidGrid { .. })
        ));
        assert!(g.cell_bounds((0, -1)).is_err());
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn neighbour_strict_stops_at_edge() {
        let g = grid(BoundaryPolicy::Strict);
        assert_eq!(g.neighbour((1, 0), 1, 1), Some((2, 1)));
        assert_eq!(g.neighbour((3, 0), 1, 0), None);
        assert_eq!(g.neighbour((0, 0), 0, -1), None);
    }

    #[test]
    fn neighbour_wrap_and_shift() {
        let g = grid(BoundaryPolicy::Wrap);
        let back = Vec2::new(-1.0, 0.0);
        assert_eq!(g.step((3, 0), 1, 0), Some(((0, 0), back)));
        let forward = Vec2::new(1.0, 1.0);
        assert_eq!(g.step((0, 0), -1, -1), Some(((3, 1), forward)));
        assert_eq!(g.step((1, 1), 1, 0), Some(((2, 1), Vec2::ZERO)));
    }

    // ── Walk validation ─────────────────────────────────────────

    #[test]
    fn walk_rejects_bad_inputs() {
        let g = grid(BoundaryPolicy::Strict);
        let at = Vec2::new(0.5, 0.5);
        assert!(matches!(
            g.walk(at, Vec2::ZERO, 1.0),
            Err(GeometryError::ZeroVelocity { .. })
        ));
        assert!(matches!(
            g.walk(Vec2::new(2.0, 0.5), Vec2::new(1.0, 0.0), 1.0),
            Err(GeometryError::OutOfDomain { .. })
        ));
        assert!(matches!(
            g.walk(at, Vec2::new(1.0, 0.0), -1.0),
            Err(GeometryError::InvalidGrid { .. })
        ));
        assert!(g.walk(at, Vec2::new(1.0, 0.0), f64::INFINITY).is_err());
    }
}
