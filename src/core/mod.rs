//! core
//!
//! Domain layer: the PIN type, the deny-list, the shared random source,
//! configuration, and the generator itself.

pub mod barred;
pub mod config;
pub mod generator;
pub mod rng;
pub mod types;

pub use barred::BarredSet;
pub use generator::{GeneratorError, GeneratorSnapshot, PinGenerator};
pub use rng::SharedRng;
pub use types::{Pin, TypeError, MAX_PIN_VALUE, PIN_LENGTH, PIN_SPACE};
