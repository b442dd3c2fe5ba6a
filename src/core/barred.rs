//! core::barred
//!
//! The deny-list of PINs that may never be issued.
//!
//! The default set is hard-coded. A deny-list can also be loaded from a
//! store file in the same JSON array-of-strings format as the used-number
//! store (`barred-numbers.json` by default); an absent file falls back to
//! the hard-coded set.

use std::collections::HashSet;

use super::generator::GeneratorError;
use super::types::{Pin, PIN_SPACE};
use crate::store::ListStore;

/// PIN values barred by default: too guessable to hand out.
const DEFAULT_BARRED: [u16; 3] = [1111, 1234, 9999];

/// A fixed set of PINs that must never be issued.
#[derive(Debug, Clone)]
pub struct BarredSet {
    pins: HashSet<Pin>,
}

impl BarredSet {
    /// Build a deny-list from explicit PINs.
    pub fn from_pins(pins: impl IntoIterator<Item = Pin>) -> Self {
        Self {
            pins: pins.into_iter().collect(),
        }
    }

    /// Build a deny-list from stored string entries.
    ///
    /// # Errors
    ///
    /// Returns the offending entry's `TypeError` if any entry is not a
    /// valid PIN.
    pub fn from_entries(
        entries: impl IntoIterator<Item = String>,
    ) -> Result<Self, super::types::TypeError> {
        let pins = entries
            .into_iter()
            .map(Pin::new)
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(Self { pins })
    }

    /// Load a deny-list from a store, falling back to the default set when
    /// the store was never created.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::BarredLoad`] if the store exists but cannot be
    ///   read or parsed
    /// - [`GeneratorError::InvalidBarredEntry`] if an entry is not a PIN
    pub fn load_or_default<S: ListStore>(store: &S) -> Result<Self, GeneratorError> {
        match store.load() {
            Ok(entries) => Self::from_entries(entries).map_err(GeneratorError::InvalidBarredEntry),
            Err(e) if e.is_not_found() => Ok(Self::default()),
            Err(e) => Err(GeneratorError::BarredLoad(e)),
        }
    }

    /// Whether the given PIN is barred.
    pub fn contains(&self, pin: &Pin) -> bool {
        self.pins.contains(pin)
    }

    /// Number of barred PINs.
    pub fn len(&self) -> usize {
        self.pins.len()
    }

    /// Whether the deny-list is empty.
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Whether every PIN in the space is barred, leaving nothing issuable.
    pub fn covers_pin_space(&self) -> bool {
        self.pins.len() >= PIN_SPACE
    }
}

impl Default for BarredSet {
    fn default() -> Self {
        Self::from_pins(DEFAULT_BARRED.into_iter().map(Pin::from_draw))
    }
}
