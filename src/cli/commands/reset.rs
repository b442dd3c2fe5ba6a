//! reset command - Clear the used-number store

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::store::{JsonFileStore, ListStore};
use crate::ui::output;

/// Delete the used-number store so issuance starts over.
///
/// Idempotent: succeeds whether or not the store exists.
pub fn reset(ctx: &Context) -> Result<()> {
    let store = JsonFileStore::new(&ctx.used_store);
    store.delete().context("deleting used-number store")?;

    output::print(
        format!("cleared used-number store at {}", ctx.used_store.display()),
        ctx.verbosity,
    );

    Ok(())
}
