//! Injectable randomness for the topology builder.
//!
//! The diagonal edges of the Graph are decided by random draws, which would
//! make topology irreproducible if the generator were an implicit global.
//! [`build_graph`](crate::build_graph) therefore takes the source as an
//! explicit parameter: production code passes a [`WyRandSource`], tests pass
//! either a seeded one or a plain closure.

use nanorand::{Rng, WyRand};

/// A source of uniform draws in `[0, 1)`.
///
/// [`build_graph`](crate::build_graph) takes one draw per candidate diagonal
/// edge. Any `FnMut() -> f64` closure is a valid source, which is the easiest
/// way to pin topology down in tests: `|| 1.0` disables diagonals outright,
/// `|| 0.0` forces every candidate.
pub trait RandomSource {
    /// Returns the next draw, uniform in `[0, 1)`.
    fn roll(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn roll(&mut self) -> f64 {
        self()
    }
}

/// The default [`RandomSource`], backed by [`WyRand`].
#[derive(Clone)]
pub struct WyRandSource {
    rng: WyRand,
}

impl std::fmt::Debug for WyRandSource {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("WyRandSource").finish_non_exhaustive()
    }
}

impl WyRandSource {
    /// Creates a source seeded from system entropy.
    pub fn new() -> WyRandSource {
        WyRandSource { rng: WyRand::new() }
    }

    /// Creates a source with a fixed seed, for reproducible topology.
    pub fn seeded(seed: u64) -> WyRandSource {
        WyRandSource {
            rng: WyRand::new_seed(seed),
        }
    }
}

impl Default for WyRandSource {
    fn default() -> WyRandSource {
        WyRandSource::new()
    }
}

impl RandomSource for WyRandSource {
    fn roll(&mut self) -> f64 {
        // 53 high bits of a u64, the usual uniform-in-[0,1) construction
        (self.rng.generate::<u64>() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}
