//! Cell traversal for particles moving across a grid of rectangles.
//!
//! The core operation is [`nextcell`]: given a position inside (or on the
//! boundary of) an axis-aligned cell and a velocity, it reports which of
//! the eight neighbouring cells the particle enters and how far along the
//! velocity it travels first. It is the per-cell exit test of a DDA grid walk.
//!
//! [`CellGrid`] tiles a rectangle with equal cells and [`CellGrid::walk`]
//! chains `nextcell` calls into a [`CellWalk`] iterator for one particle.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod transition;
pub mod walk;

pub use grid::CellGrid;
pub use transition::{nextcell, nextcell_with, CellTransition};
pub use walk::{CellStep, CellWalk};
