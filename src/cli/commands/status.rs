//! status command - Report store state without generating

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::barred::BarredSet;
use crate::core::generator::PinGenerator;
use crate::core::rng::SharedRng;
use crate::store::{JsonFileStore, ListStore};
use crate::ui::output;

/// Show the used-number store's location, existence, and counters.
pub fn status(ctx: &Context) -> Result<()> {
    let store = JsonFileStore::new(&ctx.used_store);
    let present = store.exists();

    let barred = BarredSet::load_or_default(&JsonFileStore::new(&ctx.barred_store))
        .context("loading barred-number store")?;
    let generator = PinGenerator::with_store(store, barred, SharedRng::from_entropy())
        .context("opening used-number store")?;
    let snapshot = generator.snapshot().context("reading generator state")?;

    output::print(
        format!(
            "store: {} ({})",
            ctx.used_store.display(),
            if present { "present" } else { "absent" }
        ),
        ctx.verbosity,
    );
    output::print(format!("issued: {}", snapshot.issued), ctx.verbosity);
    output::print(format!("barred: {}", snapshot.barred), ctx.verbosity);
    output::print(format!("remaining: {}", snapshot.remaining), ctx.verbosity);

    Ok(())
}
