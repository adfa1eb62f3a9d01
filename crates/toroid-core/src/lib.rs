//! Core types for the toroid geometry workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the metric and traversal crates: the [`Vec2`]
//! point/vector type, the rectangular [`Bounds`] of a domain or cell, the
//! floating-point [`Tolerance`] used for closeness tests, and the
//! [`GeometryError`] returned by every fallible operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod tolerance;
pub mod vec2;

pub use bounds::Bounds;
pub use error::GeometryError;
pub use tolerance::Tolerance;
pub use vec2::{Point, Vec2, Vector};
