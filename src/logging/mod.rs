use crate::Result;
use anyhow::{anyhow, Context};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

const DEFAULT_LEVEL: &str = "warn";

/// Initialize console logging for the process.
///
/// Filters come from `RUST_LOG` when set; `verbose` lowers the default floor to
/// `debug`. Diagnostics go to stderr so the stdout contract (`Updated ...` /
/// `Saved ...` lines) stays machine-greppable. Errors when invoked more than
/// once per process unless tests explicitly reset the guard.
pub fn init(verbose: bool) -> Result<()> {
    if LOGGER_INITIALIZED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(anyhow!("logging already initialized"));
    }

    let default_level = if verbose { "debug" } else { DEFAULT_LEVEL };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("failed to configure tracing level")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter)
        .init();

    Ok(())
}

#[cfg(test)]
/// Reset the initialization guard so tests can reconfigure logging.
pub fn reset_for_tests() {
    LOGGER_INITIALIZED.store(false, Ordering::SeqCst);
}
