//! Cell-by-cell walk of a single particle across a [`CellGrid`].

use crate::grid::CellGrid;
use crate::transition::{nextcell_with, CellTransition};
use std::iter::FusedIterator;
use toroid_core::{GeometryError, Point, Vector};

/// One cell visited by a [`CellWalk`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellStep {
    /// The cell traversed during this step.
    pub cell: (i64, i64),
    /// Exit offset and travel within `cell`. The final step of a walk that
    /// runs out of budget inside a cell has `di == dj == 0` and the
    /// remaining budget as its distance.
    pub transition: CellTransition,
    /// Where the particle was when the step began.
    pub entry: Point,
    /// Where the particle was when the step ended. On the crossed face the
    /// coordinate is exact.
    pub exit: Point,
}

/// Iterator over the cells a particle passes through.
///
/// Created by [`CellGrid::walk`]. Each item is one exit test; the walk ends
/// when the budget is spent or, on a strict grid, when the particle leaves
/// the grid. The iterator is fused after its last step or an error.
///
/// # Examples
///
/// ```
/// use toroid_core::{Bounds, Vec2};
/// use toroid_metric::BoundaryPolicy;
/// use toroid_traverse::CellGrid;
///
/// let grid = CellGrid::new(Bounds::UNIT, 4, 4, BoundaryPolicy::Wrap).unwrap();
/// let walk = grid.walk(Vec2::new(0.125, 0.125), Vec2::new(1.0, 0.0), 1.0).unwrap();
/// let cells: Vec<_> = walk.map(|s| s.unwrap().cell).collect();
/// assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (3, 0), (0, 0)]);
/// ```
#[derive(Clone, Debug)]
pub struct CellWalk {
    grid: CellGrid,
    cell: (i64, i64),
    pos: Point,
    velocity: Vector,
    remaining: f64,
    travelled: f64,
    done: bool,
}

impl CellWalk {
    pub(crate) fn new(
        grid: CellGrid,
        cell: (i64, i64),
        pos: Point,
        velocity: Vector,
        budget: f64,
    ) -> Self {
        Self {
            grid,
            cell,
            pos,
            velocity,
            remaining: budget,
            travelled: 0.0,
            done: false,
        }
    }

    /// Travel accumulated by the steps yielded so far.
    pub fn travelled(&self) -> f64 {
        self.travelled
    }

    /// Budget not yet spent.
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// The current cell, i.e. the one the next step will traverse.
    pub fn cell(&self) -> (i64, i64) {
        self.cell
    }

    fn advance(&mut self) -> Result<CellStep, GeometryError> {
        let bounds = self.grid.cell_bounds(self.cell)?;
        // Absorb rounding drift from the previous exit point.
        let entry = bounds.clamp(self.pos);
        let transition = nextcell_with(entry, self.velocity, &bounds, self.grid.tolerance())?;

        if transition.distance >= self.remaining {
            let distance = self.remaining;
            self.done = true;
            self.travelled += distance;
            self.remaining = 0.0;
            tracing::debug!(
                cell = ?self.cell,
                travelled = self.travelled,
                "cell walk budget spent"
            );
            return Ok(CellStep {
                cell: self.cell,
                transition: CellTransition {
                    di: 0,
                    dj: 0,
                    distance,
                },
                entry,
                exit: bounds.clamp(entry + self.velocity * distance),
            });
        }

        let mut exit = transition.exit_point(entry, self.velocity);
        match transition.di {
            1 => exit.x = bounds.x1(),
            -1 => exit.x = bounds.x0(),
            _ => {}
        }
        match transition.dj {
            1 => exit.y = bounds.y1(),
            -1 => exit.y = bounds.y0(),
            _ => {}
        }
        let exit = bounds.clamp(exit);

        self.remaining -= transition.distance;
        self.travelled += transition.distance;
        let step = CellStep {
            cell: self.cell,
            transition,
            entry,
            exit,
        };

        match self.grid.step(self.cell, transition.di, transition.dj) {
            Some((next, shift)) => {
                self.cell = next;
                self.pos = exit + shift;
            }
            None => {
                self.done = true;
                tracing::debug!(
                    cell = ?self.cell,
                    travelled = self.travelled,
                    "cell walk left grid"
                );
            }
        }
        Ok(step)
    }
}

impl Iterator for CellWalk {
    type Item = Result<CellStep, GeometryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = self.advance();
        if step.is_err() {
            self.done = true;
        }
        Some(step)
    }
}

impl FusedIterator for CellWalk {}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use proptest::prelude::*;
    use toroid_core::{Bounds, Tolerance, Vec2};
    use toroid_metric::BoundaryPolicy;
    use toroid_test_utils::{arb_direction, arb_point_in};

    fn steps(walk: CellWalk) -> Vec<CellStep> {
        walk.map(|s| s.unwrap()).collect()
    }

    fn unit_grid(n: u32, policy: BoundaryPolicy) -> CellGrid {
        CellGrid::new(Bounds::UNIT, n, n, policy).unwrap()
    }

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── Straight walks ──────────────────────────────────────────

    #[test]
    fn wrap_walk_returns_to_start_cell() {
        let g = unit_grid(4, BoundaryPolicy::Wrap);
        let s = steps(g.walk(v(0.125, 0.125), v(1.0, 0.0), 1.0).unwrap());
        let distances: Vec<f64> = s.iter().map(|st| st.transition.distance).collect();
        assert_eq!(distances, vec![0.125, 0.25, 0.25, 0.25, 0.125]);
        let last = s.last().unwrap();
        assert_eq!(last.cell, (0, 0));
        assert_eq!((last.transition.di, last.transition.dj), (0, 0));
        assert_eq!(last.exit, v(0.125, 0.125));
    }

    #[test]
    fn strict_walk_stops_at_grid_edge() {
        let g = unit_grid(4, BoundaryPolicy::Strict);
        let mut walk = g.walk(v(0.125, 0.125), v(1.0, 0.0), 10.0).unwrap();
        let s: Vec<CellStep> = walk.by_ref().map(|s| s.unwrap()).collect();
        assert_eq!(s.len(), 4);
        assert_eq!(s[3].cell, (3, 0));
        assert_eq!((s[3].transition.di, s[3].transition.dj), (1, 0));
        assert_eq!(s[3].exit, v(1.0, 0.125));
        assert_eq!(walk.travelled(), 0.875);
        assert_eq!(walk.remaining(), 9.125);
        assert!(walk.next().is_none());
    }

    #[test]
    fn zero_budget_yields_single_empty_step() {
        let g = unit_grid(2, BoundaryPolicy::Strict);
        let s = steps(g.walk(v(0.25, 0.25), v(0.0, 1.0), 0.0).unwrap());
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].transition.distance, 0.0);
        assert_eq!(s[0].entry, s[0].exit);
    }

    #[test]
    fn visited_cells_are_ordered_and_distinct() {
        let strip = Bounds::new(0.0, 8.0, 0.0, 1.0).unwrap();
        let g = CellGrid::new(strip, 8, 1, BoundaryPolicy::Strict).unwrap();
        let cells: IndexSet<(i64, i64)> = g
            .walk(v(0.5, 0.5), v(1.0, 0.0), 100.0)
            .unwrap()
            .map(|s| s.unwrap().cell)
            .collect();
        assert_eq!(cells.len(), 8);
        for (k, cell) in cells.iter().enumerate() {
            assert_eq!(*cell, (k as i64, 0));
        }
    }

    // ── Corners ─────────────────────────────────────────────────

    #[test]
    fn diagonal_walk_crosses_corners() {
        let g = unit_grid(2, BoundaryPolicy::Wrap);
        let r = 1.0 / 2f64.sqrt();
        let budget = 0.25 * 2f64.sqrt() + 0.5 * 2f64.sqrt() + 0.1;
        let s = steps(g.walk(v(0.25, 0.25), v(r, r), budget).unwrap());
        assert_eq!(s.len(), 3);
        assert!(s[0].transition.is_corner());
        assert_eq!(s[0].exit, v(0.5, 0.5));
        assert_eq!(s[1].cell, (1, 1));
        assert!(s[1].transition.is_corner());
        assert_eq!(s[1].exit, v(1.0, 1.0));
        assert_eq!(s[2].cell, (0, 0));
        assert_eq!(s[2].entry, v(0.0, 0.0));
    }

    #[test]
    fn walk_from_folded_start() {
        let g = unit_grid(2, BoundaryPolicy::Wrap);
        let mut walk = g.walk(v(-0.75, 2.25), v(0.0, -1.0), 0.1).unwrap();
        assert_eq!(walk.cell(), (0, 0));
        let step = walk.next().unwrap().unwrap();
        assert_eq!(step.entry, v(0.25, 0.25));
        assert!((step.exit.y - 0.15).abs() < 1e-12);
    }

    #[test]
    fn loose_tolerance_stall_is_reported_once() {
        let loose = Tolerance::new(1.0, 0.0).unwrap();
        let g = unit_grid(2, BoundaryPolicy::Wrap);
        let g = g.with_tolerance(loose).unwrap();
        let mut walk = g.walk(v(0.25, 0.25), v(0.9, 0.9), 1.0).unwrap();
        let err = walk.next().unwrap().unwrap_err();
        assert!(matches!(err, GeometryError::ZeroVelocity { .. }));
        assert!(walk.next().is_none());
    }

    proptest! {
        #[test]
        fn wrap_walk_spends_whole_budget_through_adjacent_cells(
            start in arb_point_in(Bounds::UNIT),
            vel in arb_direction(),
            budget in 0.0f64..5.0,
        ) {
            let g = CellGrid::new(Bounds::UNIT, 4, 3, BoundaryPolicy::Wrap).unwrap();
            let walk = g.walk(start, vel, budget).unwrap();
            let s: Vec<CellStep> = walk.take(100_000).map(|s| s.unwrap()).collect();
            prop_assert!(!s.is_empty());

            let total: f64 = s.iter().map(|st| st.transition.distance).sum();
            prop_assert!((total - budget).abs() < 1e-9 * (1.0 + budget), "{total} vs {budget}");

            for pair in s.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let expected = g.neighbour(a.cell, a.transition.di, a.transition.dj);
                prop_assert_eq!(expected, Some(b.cell));
            }
            for st in &s {
                let cb = g.cell_bounds(st.cell).unwrap();
                prop_assert!(cb.contains_closed(st.entry) && cb.contains_closed(st.exit));
                prop_assert!(st.transition.distance >= 0.0);
            }
        }
    }
}
