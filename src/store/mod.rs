//! store
//!
//! Durable ordered-string-list persistence.
//!
//! # Design
//!
//! The [`ListStore`] trait is deliberately narrow (save/load/delete/exists
//! over one ordered list of strings) so the file-backed implementation
//! could later be swapped for an embedded key-value store without touching
//! generation logic.

pub mod json_file;
pub mod traits;

pub use json_file::JsonFileStore;
pub use traits::{ListStore, StoreError};
