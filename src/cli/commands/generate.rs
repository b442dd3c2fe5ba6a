//! generate command - Issue PINs and print them to stdout

use std::io::Write;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::barred::BarredSet;
use crate::core::generator::PinGenerator;
use crate::core::rng::SharedRng;
use crate::store::JsonFileStore;

/// Generate `count` PINs, writing them comma-separated to stdout.
///
/// PINs are product output and are printed regardless of `--quiet`.
pub fn generate(ctx: &Context, count: u64) -> Result<()> {
    let barred_store = JsonFileStore::new(&ctx.barred_store);
    let barred =
        BarredSet::load_or_default(&barred_store).context("loading barred-number store")?;

    let rng = SharedRng::from_entropy();
    let mut generator = PinGenerator::with_store(JsonFileStore::new(&ctx.used_store), barred, rng)
        .context("opening used-number store")?;
    generator.set_verbosity(ctx.verbosity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for i in 0..count {
        let pin = generator.generate_pin().context("generating pin")?;
        if i > 0 {
            write!(out, ", ").context("writing output")?;
        }
        write!(out, "{pin}").context("writing output")?;
    }
    if count > 0 {
        writeln!(out).context("writing output")?;
    }

    Ok(())
}
