use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `APIDOC_TRYIT_LOG=debug`
pub const LOG_ENV: &str = "APIDOC_TRYIT_LOG";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("apidoc-tryit.log")
}

/// Install the global subscriber. Output goes to a file since the terminal
/// belongs to the TUI.
pub fn init_tracing() -> Result<PathBuf> {
    let path = log_path();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(path)
}
