//! The generation pipeline: render, locate, write.
//!
//! Any failure aborts the run. Rendering happens before the repository
//! root is queried, and nothing touches the filesystem until both have
//! succeeded, so a failed run never creates or modifies the output file.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::GenerationConfig;
use crate::output::{OUTPUT_MODE, WriteError, output_path, write_output};
use crate::ports::{RepoRootError, RepoRootResolver};
use crate::template::{RUNTIME_VARS_TEMPLATE, TemplateError, render_template};

/// Everything that can stop a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Cannot locate repository root: {0}")]
    RepoRoot(#[from] RepoRootError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Renders `runtime_vars.go` and writes it at the repository root.
#[derive(Debug, Clone)]
pub struct Generator<R> {
    resolver: R,
    template: &'static str,
}

impl<R: RepoRootResolver> Generator<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            template: RUNTIME_VARS_TEMPLATE,
        }
    }

    /// Run the pipeline once and return the path that was written.
    pub fn generate(&self, config: &GenerationConfig) -> Result<PathBuf, GenerateError> {
        debug!(
            prog_data_dir = config.resolved_prog_data_dir(),
            target_package = %config.target_package,
            "Rendering runtime variables"
        );
        let rendered = render_template(self.template, config)?;

        let repo_root = self.resolver.repo_root()?;
        let path = output_path(&repo_root);
        debug!(path = %path.display(), "Resolved output path");

        write_output(&path, rendered.as_bytes(), OUTPUT_MODE)?;
        info!(
            path = %path.display(),
            bytes = rendered.as_bytes().len(),
            mode = %OUTPUT_MODE,
            "Wrote runtime variables"
        );

        Ok(path)
    }
}
