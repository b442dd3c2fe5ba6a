//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds its collaborators from the resolved [`Context`]
//! 2. Calls into [`crate::core`] / [`crate::store`]
//! 3. Formats and displays output
//!
//! Handlers do NOT touch store files directly; all mutations flow through
//! the generator or the store abstraction.

mod completion;
mod generate;
mod reset;
mod status;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use generate::generate;
pub use reset::reset;
pub use status::status;

use anyhow::Result;

use super::args::Command;
use super::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Generate { count } => generate(ctx, count.unwrap_or(ctx.default_count)),
        Command::Status => status(ctx),
        Command::Reset => reset(ctx),
        Command::Completion { shell } => completion(shell),
    }
}
