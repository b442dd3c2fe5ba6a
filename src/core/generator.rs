//! core::generator
//!
//! The PIN generator: draws candidates, enforces the deny-list and the
//! no-repeat rule, and keeps the used-number store durable.
//!
//! # Lifecycle
//!
//! A generator loads previously issued PINs from its store at construction
//! ("store was never created" is recovered as an empty history). Each
//! [`PinGenerator::generate_pin`] call draws candidates until one is
//! neither barred nor already issued, persists the updated history, and
//! returns the PIN. When the retry budget is exhausted - every issuable
//! PIN has been handed out - the store is deleted, the in-memory history
//! cleared, and issuance starts over.
//!
//! # Commit Ordering
//!
//! A PIN counts as issued only once the store write has succeeded. If the
//! save fails, the in-memory append is rolled back and the error returned,
//! so the durable record stays authoritative across crashes.
//!
//! # Concurrency
//!
//! One generator may be shared across threads. The whole
//! check-membership -> append -> persist sequence runs under a single
//! mutex, so two concurrent calls can neither accept the same candidate
//! nor lose an update. Multiple OS processes pointing at one store file
//! are not coordinated; the last writer wins.
//!
//! # Example
//!
//! ```no_run
//! use pingen::core::generator::PinGenerator;
//!
//! let generator = PinGenerator::open("used-numbers.json")?;
//! let pin = generator.generate_pin()?;
//! println!("{pin}");
//! # Ok::<(), pingen::core::generator::GeneratorError>(())
//! ```

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use super::barred::BarredSet;
use super::rng::SharedRng;
use super::types::{Pin, TypeError, MAX_PIN_VALUE, PIN_SPACE};
use crate::store::{JsonFileStore, ListStore, StoreError};
use crate::ui::output;
use crate::ui::Verbosity;

/// Retry budget per call before the PIN space is considered exhausted.
const MAX_RETRIES: u32 = MAX_PIN_VALUE as u32;

/// Errors from generator construction and PIN issuance.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The used-number store exists but could not be read or parsed.
    #[error("failed to load used-number store: {0}")]
    Load(#[source] StoreError),

    /// The used-number store holds an entry that is not a valid PIN.
    #[error("used-number store holds an invalid entry: {0}")]
    InvalidUsedEntry(#[source] TypeError),

    /// The barred-number store exists but could not be read or parsed.
    #[error("failed to load barred-number store: {0}")]
    BarredLoad(#[source] StoreError),

    /// The barred-number store holds an entry that is not a valid PIN.
    #[error("barred-number store holds an invalid entry: {0}")]
    InvalidBarredEntry(#[source] TypeError),

    /// The deny-list covers the entire PIN space.
    #[error("every pin in the space is barred; nothing can be issued")]
    AllPinsBarred,

    /// Persisting the updated used-number state failed. The PIN involved
    /// does not count as issued.
    #[error("failed to persist used-number store: {0}")]
    Persist(#[source] StoreError),

    /// The generator state lock was poisoned by a panicked thread.
    #[error("generator state lock poisoned by a panicked thread")]
    Poisoned,
}

/// Point-in-time counters describing a generator's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorSnapshot {
    /// PINs issued and durably recorded
    pub issued: usize,
    /// PINs on the deny-list
    pub barred: usize,
    /// PINs still issuable before the next exhaustion reset
    pub remaining: usize,
    /// Exhaustion resets performed over this generator's lifetime
    pub resets: u64,
}

/// Mutable generator state, guarded by one mutex per instance.
struct UsedState {
    /// Issuance order, mirrored to the store on every accept
    issued: Vec<Pin>,
    /// Membership index over `issued`
    index: HashSet<Pin>,
    /// Exhaustion resets performed so far
    resets: u64,
}

impl UsedState {
    fn from_pins(issued: Vec<Pin>) -> Self {
        let index = issued.iter().copied().collect();
        Self {
            issued,
            index,
            resets: 0,
        }
    }
}

/// Issues 4-digit PINs that are never barred and never repeated until the
/// PIN space is exhausted.
pub struct PinGenerator<S: ListStore = JsonFileStore> {
    store: S,
    barred: BarredSet,
    rng: SharedRng,
    verbosity: Verbosity,
    state: Mutex<UsedState>,
}

impl PinGenerator<JsonFileStore> {
    /// Open a generator over a JSON file store at the given path, with the
    /// default deny-list and a fresh entropy-seeded random source.
    ///
    /// An absent store is the expected first-run condition and yields an
    /// empty history.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Load`] when the store exists but cannot
    /// be read or parsed, or [`GeneratorError::InvalidUsedEntry`] when it
    /// parses but holds something that is not a PIN.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GeneratorError> {
        Self::with_store(
            JsonFileStore::new(path),
            BarredSet::default(),
            SharedRng::from_entropy(),
        )
    }
}

impl<S: ListStore> PinGenerator<S> {
    /// Construct a generator from its collaborators.
    ///
    /// The `rng` handle should be the process-scoped source, shared with
    /// any other generators in the process.
    ///
    /// # Errors
    ///
    /// Same load failures as [`PinGenerator::open`], plus
    /// [`GeneratorError::AllPinsBarred`] when the deny-list covers the
    /// whole PIN space.
    pub fn with_store(
        store: S,
        barred: BarredSet,
        rng: SharedRng,
    ) -> Result<Self, GeneratorError> {
        if barred.covers_pin_space() {
            return Err(GeneratorError::AllPinsBarred);
        }

        let issued = match store.load() {
            Ok(entries) => entries
                .into_iter()
                .map(Pin::new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(GeneratorError::InvalidUsedEntry)?,
            Err(e) if e.is_not_found() => Vec::new(),
            Err(e) => return Err(GeneratorError::Load(e)),
        };

        Ok(Self {
            store,
            barred,
            rng,
            verbosity: Verbosity::Quiet,
            state: Mutex::new(UsedState::from_pins(issued)),
        })
    }

    /// Set the verbosity for diagnostic output (discarded candidates,
    /// exhaustion resets). Defaults to quiet for library use.
    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// The backing used-number store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate one PIN.
    ///
    /// The returned PIN is not on the deny-list, has not been issued
    /// before by this store (unless the space was exhausted and reset),
    /// and is durably recorded before this method returns.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Persist`] when the store write fails; the
    /// candidate then does not count as issued and a later call may return
    /// it again.
    pub fn generate_pin(&self) -> Result<Pin, GeneratorError> {
        let mut state = self.state.lock().map_err(|_| GeneratorError::Poisoned)?;
        let mut retries: u32 = 0;

        loop {
            let candidate = self.rng.draw_pin();

            if !self.barred.contains(&candidate) && !state.index.contains(&candidate) {
                return self.commit(&mut state, candidate);
            }

            if self.verbosity == Verbosity::Debug {
                output::debug(
                    format!("discarding candidate {candidate}: barred or already issued"),
                    self.verbosity,
                );
            }

            retries += 1;
            if retries > MAX_RETRIES {
                self.reset_used(&mut state)?;
                retries = 0;
            }
        }
    }

    /// Current counters: issued, barred, remaining, resets.
    pub fn snapshot(&self) -> Result<GeneratorSnapshot, GeneratorError> {
        let state = self.state.lock().map_err(|_| GeneratorError::Poisoned)?;

        // A hand-edited store may list barred PINs as used; count them only
        // once so `remaining` stays within the PIN space.
        let issued_issuable = state
            .index
            .iter()
            .filter(|pin| !self.barred.contains(pin))
            .count();

        Ok(GeneratorSnapshot {
            issued: state.issued.len(),
            barred: self.barred.len(),
            remaining: PIN_SPACE - self.barred.len() - issued_issuable,
            resets: state.resets,
        })
    }

    /// Record the accepted PIN in memory and persist the full history.
    /// The append is rolled back if the save fails.
    fn commit(&self, state: &mut UsedState, pin: Pin) -> Result<Pin, GeneratorError> {
        state.issued.push(pin);
        state.index.insert(pin);

        let snapshot: Vec<String> = state.issued.iter().map(Pin::to_string).collect();
        if let Err(e) = self.store.save(&snapshot) {
            state.issued.pop();
            state.index.remove(&pin);
            return Err(GeneratorError::Persist(e));
        }

        Ok(pin)
    }

    /// Every issuable PIN has been handed out: delete the store and clear
    /// the in-memory history so issuance starts over.
    fn reset_used(&self, state: &mut UsedState) -> Result<(), GeneratorError> {
        self.store.delete().map_err(GeneratorError::Persist)?;
        state.issued.clear();
        state.index.clear();
        state.resets += 1;
        output::debug(
            "pin space exhausted; cleared the used-number store",
            self.verbosity,
        );
        Ok(())
    }
}
