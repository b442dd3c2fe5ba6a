//! cli
//!
//! Command-line interface layer for pingen.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and resolve effective store paths
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, resolves the
//! flag > config file > default precedence once, and dispatches to the
//! command handlers. All PIN issuance flows through [`crate::core`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::core::config::{
    Config, DEFAULT_BARRED_STORE, DEFAULT_CONFIG_FILENAME, DEFAULT_GENERATE_COUNT,
    DEFAULT_USED_STORE,
};
use crate::ui::output;
use crate::ui::Verbosity;

/// Resolved settings shared by all command handlers.
pub struct Context {
    /// Effective used-number store path
    pub used_store: PathBuf,
    /// Effective barred-number store path
    pub barred_store: PathBuf,
    /// Default PIN count when `generate` gets no `--count`
    pub default_count: u64,
    /// Output verbosity from `--quiet` / `--debug`
    pub verbosity: Verbosity,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    // An explicitly named config file that is missing deserves a warning;
    // the default location missing is the ordinary case.
    let config = match &cli.config {
        Some(path) => match Config::load(path).context("loading config")? {
            Some(config) => config,
            None => {
                output::warn(
                    format!("config file {} not found; using defaults", path.display()),
                    verbosity,
                );
                Config::default()
            }
        },
        None => Config::load(Path::new(DEFAULT_CONFIG_FILENAME))
            .context("loading config")?
            .unwrap_or_default(),
    };

    // Precedence: CLI flag, then config file, then built-in default.
    let used_store = cli
        .store
        .clone()
        .or_else(|| config.used_store().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_USED_STORE));
    let barred_store = cli
        .barred_store
        .clone()
        .or_else(|| config.barred_store().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BARRED_STORE));

    let ctx = Context {
        used_store,
        barred_store,
        default_count: config.count.unwrap_or(DEFAULT_GENERATE_COUNT),
        verbosity,
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}
