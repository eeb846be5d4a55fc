//! Repository root port.
//!
//! The generator writes its output at the top level of the enclosing
//! version-control working tree. How that directory is discovered is
//! left to the implementation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while locating the repository root.
#[derive(Debug, Error)]
pub enum RepoRootError {
    /// The version-control executable could not be started.
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// The query ran but reported failure (e.g. not inside a repository).
    #[error("Repository root query failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    /// The query printed something that is not a usable path.
    #[error("Repository root query returned invalid output: {0}")]
    InvalidOutput(String),

    /// The query succeeded but printed nothing.
    #[error("Repository root query returned an empty path")]
    Empty,
}

/// Port for locating the top-level directory of the enclosing repository.
pub trait RepoRootResolver {
    /// Return the absolute path of the repository's top-level directory.
    fn repo_root(&self) -> Result<PathBuf, RepoRootError>;
}

impl<R: RepoRootResolver + ?Sized> RepoRootResolver for &R {
    fn repo_root(&self) -> Result<PathBuf, RepoRootError> {
        (**self).repo_root()
    }
}

/// Resolver that always answers with a fixed directory.
///
/// Useful when the caller already knows where output belongs, and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRepoRoot(PathBuf);

impl StaticRepoRoot {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self(root.as_ref().to_path_buf())
    }
}

impl RepoRootResolver for StaticRepoRoot {
    fn repo_root(&self) -> Result<PathBuf, RepoRootError> {
        if self.0.as_os_str().is_empty() {
            return Err(RepoRootError::Empty);
        }
        Ok(self.0.clone())
    }
}
