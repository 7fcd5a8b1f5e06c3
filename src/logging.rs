//! Tracing setup. The terminal belongs to the UI, so events only go to a
//! file, and only when one is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `path`. The filter comes from
/// `RUST_LOG`, defaulting to `info`.
pub fn init_log_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be installed (tests); keep that one.
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
    {
        tracing::warn!(error = %err, path = %path.display(), "log file not attached");
    }
    Ok(())
}
