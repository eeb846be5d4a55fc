//! Repository root lookup via `git rev-parse --show-toplevel`.

use std::path::{Path, PathBuf};
use std::process::Command;

use genvars_core::{RepoRootError, RepoRootResolver};
use tracing::debug;

const GIT: &str = "git";

/// Resolves the repository root by asking git.
///
/// Runs in the process working directory unless [`Self::in_dir`] is used.
#[derive(Debug, Clone)]
pub struct GitRepoRootResolver {
    program: PathBuf,
    working_dir: Option<PathBuf>,
}

impl GitRepoRootResolver {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(GIT),
            working_dir: None,
        }
    }

    /// Query the repository containing `dir` instead of the current directory.
    #[must_use]
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Use a different git executable.
    #[must_use]
    pub fn with_program(mut self, program: impl AsRef<Path>) -> Self {
        self.program = program.as_ref().to_path_buf();
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["rev-parse", "--show-toplevel"]);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Default for GitRepoRootResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoRootResolver for GitRepoRootResolver {
    fn repo_root(&self) -> Result<PathBuf, RepoRootError> {
        debug!(program = %self.program.display(), "Querying repository root");

        let output = self
            .command()
            .output()
            .map_err(|e| RepoRootError::Spawn {
                program: self.program.display().to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(RepoRootError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| RepoRootError::InvalidOutput(e.to_string()))?;
        let root = parse_toplevel(&stdout)?;
        debug!(root = %root.display(), "Repository root resolved");
        Ok(root)
    }
}

/// Strip the single trailing line ending git prints after the path.
fn parse_toplevel(stdout: &str) -> Result<PathBuf, RepoRootError> {
    let line = stdout.strip_suffix('\n').unwrap_or(stdout);
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Err(RepoRootError::Empty);
    }
    Ok(PathBuf::from(line))
}
