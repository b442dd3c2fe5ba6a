//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--store <path>`: Used-number store path
//! - `--barred-store <path>`: Barred-number store path
//! - `--config <path>`: Config file path
//! - `--debug`: Enable debug diagnostics
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pingen - unique 4-digit PIN issuance with a durable used-number store
#[derive(Parser, Debug)]
#[command(name = "pingen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the used-number store (default: used-numbers.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Path to the barred-number store (default: barred-numbers.json)
    ///
    /// When the file is absent, a built-in deny-list applies.
    #[arg(long, global = true, value_name = "PATH")]
    pub barred_store: Option<PathBuf>,

    /// Path to the config file (default: pingen.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate PINs and print them comma-separated to stdout
    #[command(
        name = "generate",
        long_about = "Generate PINs and print them comma-separated to stdout.\n\n\
            Each generated PIN is recorded in the used-number store before it is \
            printed, so no PIN repeats across runs until every issuable PIN has \
            been handed out. At that point the store is cleared automatically and \
            issuance starts over."
    )]
    Generate {
        /// Number of PINs to generate
        #[arg(long, value_name = "N")]
        count: Option<u64>,
    },

    /// Show store state without generating anything
    #[command(
        name = "status",
        long_about = "Show store state without generating anything.\n\n\
            Reports the used-number store path and whether it exists, how many \
            PINs have been issued, how many are barred, and how many remain \
            issuable before the next automatic reset."
    )]
    Status,

    /// Clear the used-number store so issuance starts over
    #[command(
        name = "reset",
        long_about = "Clear the used-number store so issuance starts over.\n\n\
            Deletes the store file. Safe to run when the store does not exist. \
            Previously issued PINs become issuable again - do not reset while \
            issued PINs are still live somewhere."
    )]
    Reset,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
