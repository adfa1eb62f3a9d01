//! Benchmark workloads for the toroid geometry workspace.
//!
//! Provides deterministic input sets shared by the criterion benches:
//!
//! - [`point_pairs`]: seeded point pairs inside a domain
//! - [`boundary_starts`]: seeded (position, unit velocity) pairs on a cell boundary
//! - [`reference_grid`]: a 64x64 periodic grid over the unit square

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use toroid_core::{Bounds, GeometryError, Point, Vector};
use toroid_metric::BoundaryPolicy;
use toroid_test_utils::PointSampler;
use toroid_traverse::CellGrid;

/// `n` deterministic point pairs uniformly distributed in `bounds`.
pub fn point_pairs(bounds: &Bounds, n: usize, seed: u64) -> Vec<(Point, Point)> {
    let mut sampler = PointSampler::new(seed);
    (0..n)
        .map(|_| (sampler.point_in(bounds), sampler.point_in(bounds)))
        .collect()
}

/// `n` deterministic particle states starting on the boundary of `cell`.
pub fn boundary_starts(cell: &Bounds, n: usize, seed: u64) -> Vec<(Point, Vector)> {
    let mut sampler = PointSampler::new(seed);
    (0..n)
        .map(|_| {
            let pos = sampler.point_on_boundary(cell);
            (pos, sampler.unit_velocity())
        })
        .collect()
}

/// A 64x64 periodic grid over the unit square.
pub fn reference_grid() -> Result<CellGrid, GeometryError> {
    CellGrid::new(Bounds::UNIT, 64, 64, BoundaryPolicy::Wrap)
}
