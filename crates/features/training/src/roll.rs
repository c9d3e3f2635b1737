//! Obedience rolls.
//!
//! A dog succeeds at a trick when a uniform draw from `[0, 1)` lands below
//! `obedience / 5`. The draw comes from a [`RollSource`] so callers can swap
//! the thread RNG for a seeded or constant source.

use kennel_domain::constants::MAX_OBEDIENCE;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;

/// Source of uniform draws in `[0, 1)`.
pub trait RollSource: Debug + Send + Sync {
    fn draw(&self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRoll;

impl RollSource for ThreadRoll {
    fn draw(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Reproducible draws from a seeded [`StdRng`].
#[derive(Debug)]
pub struct SeededRoll {
    rng: Mutex<StdRng>,
}

impl SeededRoll {
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl RollSource for SeededRoll {
    fn draw(&self) -> f64 {
        self.rng.lock().random::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRoll(pub f64);

impl FixedRoll {
    /// A draw that passes every gate except obedience `0`.
    pub const ALWAYS: Self = Self(0.0);
    /// A draw that fails every gate, including full obedience.
    pub const NEVER: Self = Self(1.0);
}

impl RollSource for FixedRoll {
    fn draw(&self) -> f64 {
        self.0
    }
}

/// Success threshold for an obedience level, in `[0, 1]`.
pub fn threshold(obedience: u8) -> f64 {
    f64::from(obedience.min(MAX_OBEDIENCE)) / f64::from(MAX_OBEDIENCE)
}

/// Rolls once against `obedience`; `true` means the dog complies.
pub fn success_or_fail(source: &dyn RollSource, obedience: u8) -> bool {
    let draw = source.draw();
    let limit = threshold(obedience);
    tracing::trace!(draw, limit, "obedience roll");
    draw < limit
}
