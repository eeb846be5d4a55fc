//! Tracing setup for the binary.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
///
/// A successful run stays silent at this level.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Stdout is left to the usage text. Colour codes are only emitted when
/// stderr is a terminal. Must be called once, from `main`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
