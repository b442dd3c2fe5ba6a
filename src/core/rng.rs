//! core::rng
//!
//! The shared process-scoped random source.
//!
//! # Design
//!
//! One [`SharedRng`] is created at startup (seeded once from OS entropy)
//! and handed to every generator in the process. This keeps the source's
//! lifecycle explicit - there is no hidden static singleton - and avoids
//! correlated candidate sequences from generators constructed in rapid
//! succession, each reseeding its own source.
//!
//! The handle is cheap to clone and safe to use from multiple threads.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Pin, MAX_PIN_VALUE};

/// A cloneable, thread-safe handle to one process-scoped random source.
///
/// # Example
///
/// ```
/// use pingen::core::rng::SharedRng;
///
/// let rng = SharedRng::from_entropy();
/// let pin = rng.draw_pin();
/// assert!(pin.value() <= 9999);
/// ```
#[derive(Debug, Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl SharedRng {
    /// Create a source seeded once from OS entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a deterministic source from a fixed seed.
    ///
    /// Candidate sequences become reproducible; intended for tests.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Draw a uniformly random PIN candidate from the full PIN space.
    pub fn draw_pin(&self) -> Pin {
        // The rng guards no invariant of its own, so a lock poisoned by a
        // panicked thread is still usable.
        let value = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..=MAX_PIN_VALUE);
        Pin::from_draw(value)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let rng = SharedRng::from_entropy();
        for _ in 0..1000 {
            assert!(rng.draw_pin().value() <= MAX_PIN_VALUE);
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let a = SharedRng::from_seed(7);
        let b = SharedRng::from_seed(7);
        let from_a: Vec<_> = (0..32).map(|_| a.draw_pin()).collect();
        let from_b: Vec<_> = (0..32).map(|_| b.draw_pin()).collect();
        assert_eq!(from_a, from_b);
    }

    #[test]
    fn clones_share_one_sequence() {
        let a = SharedRng::from_seed(7);
        let b = a.clone();
        let reference = SharedRng::from_seed(7);

        // Interleaved draws from the clones consume one shared stream
        let interleaved: Vec<_> = (0..16)
            .map(|i| if i % 2 == 0 { a.draw_pin() } else { b.draw_pin() })
            .collect();
        let expected: Vec<_> = (0..16).map(|_| reference.draw_pin()).collect();
        assert_eq!(interleaved, expected);
    }
}
