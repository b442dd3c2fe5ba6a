//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Pin`] - Validated 4-digit zero-padded PIN
//!
//! # Validation
//!
//! [`Pin`] enforces validity at construction time. Invalid values cannot
//! be represented, so a PIN that leaves this module is always exactly four
//! decimal digits.
//!
//! # Examples
//!
//! ```
//! use pingen::core::types::Pin;
//!
//! // Valid constructions
//! let pin = Pin::new("0042").unwrap();
//! assert_eq!(pin.to_string(), "0042");
//! assert_eq!(pin.value(), 42);
//!
//! // Invalid constructions fail at creation time
//! assert!(Pin::new("42").is_err());
//! assert!(Pin::new("12a4").is_err());
//! assert!(Pin::new("12345").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of characters in a PIN.
pub const PIN_LENGTH: usize = 4;

/// Largest value representable as a PIN.
pub const MAX_PIN_VALUE: u16 = 9999;

/// Total number of distinct PINs ("0000" through "9999").
pub const PIN_SPACE: usize = MAX_PIN_VALUE as usize + 1;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid pin: {0}")]
    InvalidPin(String),
}

/// A validated 4-digit PIN.
///
/// A PIN is exactly four decimal digits, zero-padded, representing a value
/// in `0..=9999`. The value is stored numerically; [`std::fmt::Display`]
/// and serde render it as the zero-padded string (e.g. `7` -> `"0007"`).
///
/// # Example
///
/// ```
/// use pingen::core::types::Pin;
///
/// let pin = Pin::new("0007").unwrap();
/// assert_eq!(pin.value(), 7);
/// assert_eq!(pin.to_string(), "0007");
///
/// // Leading zeros are significant: "7" is not a PIN
/// assert!(Pin::new("7").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pin(u16);

impl Pin {
    /// Create a new validated PIN from its string form.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPin` unless the input is exactly four
    /// ASCII decimal digits.
    pub fn new(pin: impl AsRef<str>) -> Result<Self, TypeError> {
        let pin = pin.as_ref();

        if pin.len() != PIN_LENGTH {
            return Err(TypeError::InvalidPin(format!(
                "'{}' must be exactly {} characters",
                pin, PIN_LENGTH
            )));
        }

        if !pin.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidPin(format!(
                "'{}' must contain only decimal digits",
                pin
            )));
        }

        let value = pin
            .parse::<u16>()
            .map_err(|e| TypeError::InvalidPin(format!("'{}': {}", pin, e)))?;

        Ok(Self(value))
    }

    /// Build a PIN from a value already known to lie within the PIN space.
    ///
    /// Callers must guarantee `value <= MAX_PIN_VALUE`; the random source
    /// draws from that range by construction.
    pub(crate) fn from_draw(value: u16) -> Self {
        debug_assert!(value <= MAX_PIN_VALUE);
        Self(value)
    }

    /// The numeric value of this PIN, in `0..=9999`.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Pin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl TryFrom<String> for Pin {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pin> for String {
    fn from(pin: Pin) -> Self {
        pin.to_string()
    }
}
