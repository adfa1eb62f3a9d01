//! Distance on a periodic (toroidal) rectangle.
//!
//! This crate defines the [`Metric`] and [`Norm`] traits, the seams through
//! which every distance-like computation flows, along with the periodic
//! metric itself and the norm and point-to-line distance derived from it.
//!
//! # Domain contracts
//!
//! A [`PeriodicDomain`] pairs rectangular [`Bounds`](toroid_core::Bounds)
//! with a [`BoundaryPolicy`]:
//!
//! - [`BoundaryPolicy::Strict`]: points must already lie in `[x0,x1) x [y0,y1)`
//! - [`BoundaryPolicy::Wrap`]: points are folded into the domain first
//!
//! # Operations
//!
//! - [`distance_periodic`]: minimum distance over the 3x3 periodic images
//! - [`customnorm`]: `d(v, 0)` for any [`Metric`]
//! - [`distance_pointline`]: perpendicular distance to a line under any [`Norm`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod line;
pub mod metric;
pub mod norm;
pub mod periodic;
pub mod policy;

#[cfg(test)]
pub(crate) mod compliance;

pub use line::{distance_pointline, Line, LineProjection};
pub use metric::{Euclidean, Metric};
pub use norm::{customnorm, default_norm, MetricNorm, Norm};
pub use periodic::{distance_periodic, fold, PeriodicDomain};
pub use policy::BoundaryPolicy;
