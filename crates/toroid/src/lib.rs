//! Toroid: geometry on a periodic plane and cell traversal for particle tracking.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the toroid sub-crates. For most users, adding `toroid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use toroid::prelude::*;
//!
//! // Distance across the seam of the unit torus.
//! let d = distance_periodic(
//!     Vec2::new(0.95, 0.5),
//!     Vec2::new(0.05, 0.5),
//!     &Bounds::UNIT,
//!     BoundaryPolicy::Strict,
//! )
//! .unwrap();
//! assert!((d - 0.1).abs() < 1e-12);
//!
//! // Perpendicular distance to a vertical line under the periodic norm.
//! let (dist, s) = distance_pointline(
//!     Vec2::new(0.5, 0.5),
//!     Vec2::new(0.0, 1.0),
//!     Vec2::new(0.5, 0.0),
//!     &default_norm(),
//! )
//! .unwrap();
//! assert!(dist.abs() < 1e-12 && (s - 0.5).abs() < 1e-12);
//!
//! // Which neighbour does a particle at the cell centre move into?
//! let step = nextcell(Vec2::new(0.5, 0.5), Vec2::new(0.0, 1.0), &Bounds::UNIT).unwrap();
//! assert_eq!(<(i8, i8, f64)>::from(step), (0, 1, 0.5));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `toroid-core` | `Vec2`, `Bounds`, `Tolerance`, `GeometryError` |
//! | [`metric`] | `toroid-metric` | Periodic distance, norms, point-to-line distance |
//! | [`traverse`] | `toroid-traverse` | Cell exit test, cell grids and walks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Vector, bounds, tolerance and error types (`toroid-core`).
pub use toroid_core as types;

/// Periodic distance, norms and point-to-line distance (`toroid-metric`).
///
/// The [`metric::Metric`] and [`metric::Norm`] traits are the strategy
/// seams; [`metric::PeriodicDomain`] is the torus itself.
pub use toroid_metric as metric;

/// Cell exit test and cell-by-cell walks (`toroid-traverse`).
pub use toroid_traverse as traverse;

/// Common imports for typical toroid usage.
///
/// ```rust
/// use toroid::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use toroid_core::{Bounds, GeometryError, Point, Tolerance, Vec2, Vector};

    // Metric
    pub use toroid_metric::{
        customnorm, default_norm, distance_periodic, distance_pointline, fold, BoundaryPolicy,
        Euclidean, Line, LineProjection, Metric, MetricNorm, Norm, PeriodicDomain,
    };

    // Traversal
    pub use toroid_traverse::{
        nextcell, nextcell_with, CellGrid, CellStep, CellTransition, CellWalk,
    };
}
