//! Pingen - unique 4-digit PIN issuance with a durable used-number store
//!
//! Pingen issues random 4-digit numeric PINs while honoring a deny-list and
//! never repeating a PIN that was issued before. Issued PINs are persisted
//! to a local JSON store so uniqueness survives process restarts.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to core)
//! - [`core`] - Domain types, the generator, and configuration
//! - [`store`] - Durable ordered-string-list persistence
//! - [`ui`] - Output and diagnostics utilities
//!
//! # Correctness Invariants
//!
//! Pingen maintains the following invariants:
//!
//! 1. An issued PIN is never in the deny-list and never a repeat, until the
//!    PIN space is exhausted and the used-number store is reset
//! 2. A PIN counts as issued only once the store write has succeeded
//! 3. All check-then-issue sequences run under one lock per generator, so
//!    concurrent callers cannot race on the used-number state

pub mod cli;
pub mod core;
pub mod store;
pub mod ui;
