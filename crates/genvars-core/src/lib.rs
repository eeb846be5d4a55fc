//! Core of the `genruntime_vars` generator.
//!
//! Everything here is free of subprocess handling: the repository root is
//! obtained through the [`RepoRootResolver`] port, which adapters implement.
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod output;
pub mod ports;
pub mod services;
pub mod template;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types for convenience
pub use config::{
    DEFAULT_PROG_DATA_DIR, DEFAULT_TARGET_PACKAGE, GenerationConfig, PROG_DATA_DIR_ENV,
};
pub use output::{FileMode, OUTPUT_FILE_NAME, OUTPUT_MODE, WriteError, output_path, write_output};
pub use ports::{RepoRootError, RepoRootResolver, StaticRepoRoot};
pub use services::{GenerateError, Generator};
pub use template::{RUNTIME_VARS_TEMPLATE, RenderedOutput, TemplateError, render};
