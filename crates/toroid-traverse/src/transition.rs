//! The single-cell exit test.

use toroid_core::{Bounds, GeometryError, Point, Tolerance, Vector};

/// Which neighbouring cell a particle enters, and after how much travel.
///
/// `di` and `dj` are in `{-1, 0, +1}`: `(0, 1)` is the cell above, `(1, 1)`
/// the cell diagonally up and to the right (an exact corner hit).
/// `distance` is the travel parameter `t` at which the particle reaches the
/// exit boundary, i.e. the exit point is `pos + velocity * t`. For a
/// unit-speed velocity it is the path length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellTransition {
    /// Horizontal cell offset.
    pub di: i8,
    /// Vertical cell offset.
    pub dj: i8,
    /// Travel parameter to the exit boundary. Never negative.
    pub distance: f64,
}

impl CellTransition {
    /// `true` if the particle leaves through a corner.
    pub fn is_corner(&self) -> bool {
        self.di != 0 && self.dj != 0
    }

    /// Where the particle leaves the cell.
    pub fn exit_point(&self, pos: Point, velocity: Vector) -> Point {
        pos + velocity * self.distance
    }
}

impl From<CellTransition> for (i8, i8, f64) {
    fn from(t: CellTransition) -> Self {
        (t.di, t.dj, t.distance)
    }
}

/// Exit test with the default [`Tolerance`].
///
/// # Examples
///
/// ```
/// use toroid_core::{Bounds, Vec2};
/// use toroid_traverse::nextcell;
///
/// let centre = Vec2::new(0.5, 0.5);
///
/// let up = nextcell(centre, Vec2::new(0.0, 1.0), &Bounds::UNIT).unwrap();
/// assert_eq!((up.di, up.dj), (0, 1));
/// assert!((up.distance - 0.5).abs() < 1e-12);
///
/// let diag = Vec2::new(1.0, 1.0) / 2f64.sqrt();
/// let corner = nextcell(centre, diag, &Bounds::UNIT).unwrap();
/// assert_eq!((corner.di, corner.dj), (1, 1));
/// assert!((corner.distance - 1.0 / 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn nextcell(
    pos: Point,
    velocity: Vector,
    cell: &Bounds,
) -> Result<CellTransition, GeometryError> {
    nextcell_with(pos, velocity, cell, Tolerance::default())
}

/// Determine the exit face (or corner) of `cell` for a particle at `pos`
/// moving with `velocity`.
///
/// `pos` must lie in the closed cell `[x0, x1] x [y0, y1]`, and `velocity`
/// must not be zero under `tol`. A velocity component that is zero under
/// `tol` never limits travel along its axis, so a velocity whose components
/// are both zero under `tol` is rejected as well. Arrival times that agree
/// within `tol` are reported as a corner hit.
pub fn nextcell_with(
    pos: Point,
    velocity: Vector,
    cell: &Bounds,
    tol: Tolerance,
) -> Result<CellTransition, GeometryError> {
    if !cell.contains_closed(pos) {
        return Err(GeometryError::OutOfDomain {
            point: pos,
            bounds: cell.describe_closed(),
        });
    }
    if velocity.is_zero(tol) {
        return Err(GeometryError::ZeroVelocity { velocity });
    }

    let xdirection: i8 = if velocity.x >= 0.0 { 1 } else { -1 };
    let ydirection: i8 = if velocity.y >= 0.0 { 1 } else { -1 };

    let face_x = if xdirection == 1 {
        cell.x1()
    } else {
        cell.x0()
    };
    let face_y = if ydirection == 1 {
        cell.y1()
    } else {
        cell.y0()
    };

    let distx = axis_time(face_x - pos.x, velocity.x, tol);
    let disty = axis_time(face_y - pos.y, velocity.y, tol);
    if distx.is_infinite() && disty.is_infinite() {
        // Neither face is ever reached.
        return Err(GeometryError::ZeroVelocity { velocity });
    }

    let transition = if tol.is_close(distx, disty) {
        tracing::debug!(%pos, %velocity, distance = distx, "exact corner exit");
        CellTransition {
            di: xdirection,
            dj: ydirection,
            distance: distx,
        }
    } else if disty < distx {
        CellTransition {
            di: 0,
            dj: ydirection,
            distance: disty,
        }
    } else {
        CellTransition {
            di: xdirection,
            dj: 0,
            distance: distx,
        }
    };
    Ok(transition)
}

fn axis_time(gap: f64, speed: f64, tol: Tolerance) -> f64 {
    if tol.is_close(speed, 0.0) {
        f64::INFINITY
    } else {
        (gap / speed).abs()
    }
}
