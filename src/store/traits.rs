//! store::traits
//!
//! Storage trait definition for ordered string lists.
//!
//! # Design
//!
//! A store holds exactly one ordered list of strings at a fixed location.
//! Saves are full overwrites; the list is small and bounded (at most the
//! PIN space), so incremental appends are not worth the complexity.
//!
//! # Error Contract
//!
//! `load` distinguishes two failure conditions callers treat differently:
//!
//! - [`StoreError::NotFound`] - the store was never created. Callers are
//!   expected to treat this as "no prior data", not a hard error.
//! - [`StoreError::Corrupt`] - the store exists but does not parse. This
//!   indicates manual intervention is needed and must not be swallowed.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from list storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has not been created yet.
    #[error("store not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The store exists but its content does not parse as a JSON array
    /// of strings.
    #[error("store {} is corrupt: {}", .path.display(), .reason)]
    Corrupt {
        /// Path of the offending store file
        path: PathBuf,
        /// Parser diagnostic
        reason: String,
    },

    /// Failed to serialize the list for writing.
    #[error("failed to serialize store contents: {0}")]
    Serialize(String),

    /// I/O failure reading, writing, or deleting the store.
    #[error("store i/o failure on {}: {}", .path.display(), .source)]
    Io {
        /// Path of the store file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Whether this error is the recoverable "store was never created"
    /// condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Trait for ordered-string-list stores.
///
/// Implementations must be thread-safe (`Send + Sync`). A single store
/// value maps to a single backing location; concurrent access from
/// multiple OS processes is not coordinated (last writer wins).
pub trait ListStore: Send + Sync {
    /// Persist the full list, replacing any prior content.
    ///
    /// The write must be atomic enough that a crash mid-save cannot leave
    /// a partially written store that later loads as valid-but-wrong data.
    fn save(&self, items: &[String]) -> Result<(), StoreError>;

    /// Load the persisted list.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the store was never created
    /// - [`StoreError::Corrupt`] if it exists but does not parse
    fn load(&self) -> Result<Vec<String>, StoreError>;

    /// Remove the backing store. Succeeds silently if already absent.
    fn delete(&self) -> Result<(), StoreError>;

    /// Whether the backing store currently exists. No side effects.
    fn exists(&self) -> bool;
}
