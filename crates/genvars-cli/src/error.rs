//! CLI error type and exit-code mapping.

use genvars_core::GenerateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Unsupported arguments were passed.
    #[error("Invalid arguments: {0}")]
    Usage(String),

    /// The generation pipeline failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl CliError {
    /// Exit codes:
    /// - 0: success or help requested
    /// - 1: invalid arguments
    /// - 2: fatal generation failure (template, repository query, write)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::Generate(_) => 2,
        }
    }
}

/// Exit code for an error bubbled up to `main`.
///
/// Errors that are not a [`CliError`] are treated as fatal.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>()
        .map_or(2, CliError::exit_code)
}
