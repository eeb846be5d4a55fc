//! Generation handler.
//!
//! Reads the environment once, then hands an explicit config to the core
//! generator with whichever repository root resolver the caller provides.

use std::path::PathBuf;

use anyhow::Result;
use genvars_core::{GenerationConfig, Generator, RepoRootResolver};
use tracing::debug;

use crate::error::CliError;

/// Generate `runtime_vars.go` using `PROG_DATA_DIR` from the environment.
pub fn execute<R: RepoRootResolver>(resolver: R) -> Result<PathBuf> {
    execute_with_config(resolver, &GenerationConfig::from_env())
}

/// Generate `runtime_vars.go` from an explicit config.
pub fn execute_with_config<R: RepoRootResolver>(
    resolver: R,
    config: &GenerationConfig,
) -> Result<PathBuf> {
    debug!(provided = config.prog_data_dir.is_some(), "Loaded generation config");

    let path = Generator::new(resolver)
        .generate(config)
        .map_err(CliError::from)?;
    Ok(path)
}
