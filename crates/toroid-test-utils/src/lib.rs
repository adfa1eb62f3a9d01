//! Test utilities for toroid development.
//!
//! Provides a deterministic [`PointSampler`] (seeded ChaCha8) for
//! fixture-style tests and benchmarks, plus proptest strategies
//! ([`arb_point_in`], [`arb_direction`], [`arb_bounds`]) for property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use toroid_core::{Bounds, Point, Vec2, Vector};

/// Deterministic sampler for points and velocities.
///
/// Two samplers built from the same seed produce the same sequence.
pub struct PointSampler {
    rng: ChaCha8Rng,
}

impl PointSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A point uniformly distributed in the half-open `bounds`.
    pub fn point_in(&mut self, bounds: &Bounds) -> Point {
        Vec2::new(
            self.rng.random_range(bounds.x0()..bounds.x1()),
            self.rng.random_range(bounds.y0()..bounds.y1()),
        )
    }

    /// `n` points uniformly distributed in the half-open `bounds`.
    pub fn points_in(&mut self, bounds: &Bounds, n: usize) -> Vec<Point> {
        (0..n).map(|_| self.point_in(bounds)).collect()
    }

    /// A point on the closed boundary of `bounds`, one edge chosen uniformly.
    pub fn point_on_boundary(&mut self, bounds: &Bounds) -> Point {
        let t: f64 = self.rng.random_range(0.0..1.0);
        match self.rng.random_range(0..4u8) {
            0 => Vec2::new(bounds.x0(), bounds.y0() + t * bounds.height()),
            1 => Vec2::new(bounds.x1(), bounds.y0() + t * bounds.height()),
            2 => Vec2::new(bounds.x0() + t * bounds.width(), bounds.y0()),
            _ => Vec2::new(bounds.x0() + t * bounds.width(), bounds.y1()),
        }
    }

    /// A unit-speed velocity with uniformly distributed heading.
    pub fn unit_velocity(&mut self) -> Vector {
        let theta: f64 = self.rng.random_range(0.0..std::f64::consts::TAU);
        Vec2::new(theta.cos(), theta.sin())
    }
}

/// Strategy for points in the half-open `bounds`.
pub fn arb_point_in(bounds: Bounds) -> impl Strategy<Value = Point> {
    (bounds.x0()..bounds.x1(), bounds.y0()..bounds.y1()).prop_map(|(x, y)| Vec2::new(x, y))
}

/// Strategy for points in the closed `bounds`, edges and corners included.
pub fn arb_point_in_closed(bounds: Bounds) -> impl Strategy<Value = Point> {
    let x = prop_oneof![
        Just(bounds.x0()),
        Just(bounds.x1()),
        bounds.x0()..bounds.x1(),
    ];
    let y = prop_oneof![
        Just(bounds.y0()),
        Just(bounds.y1()),
        bounds.y0()..bounds.y1(),
    ];
    (x, y).prop_map(|(x, y)| Vec2::new(x, y))
}

/// Strategy for non-zero direction vectors with length in `[0.1, 10)`.
pub fn arb_direction() -> impl Strategy<Value = Vector> {
    (0.0..std::f64::consts::TAU, 0.1f64..10.0)
        .prop_map(|(theta, len)| Vec2::new(theta.cos() * len, theta.sin() * len))
}

/// Strategy for valid rectangles with corners in `[-10, 10)` and sides in
/// `[0.5, 5)`.
pub fn arb_bounds() -> impl Strategy<Value = Bounds> {
    (-10.0f64..10.0, 0.5f64..5.0, -10.0f64..10.0, 0.5f64..5.0).prop_map(|(x0, w, y0, h)| {
        Bounds::new(x0, x0 + w, y0, y0 + h).expect("positive sides give valid bounds")
    })
}
