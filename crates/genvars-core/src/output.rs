//! Output location and file writing.
//!
//! The generated file always lands at `<repo-root>/runtime_vars.go` and is
//! written with mode `0644`, replacing whatever was there before.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the generated file at the repository root.
pub const OUTPUT_FILE_NAME: &str = "runtime_vars.go";

/// Unix permission bits, composed per class (owner, group, other).
///
/// Each class holds a read, write and execute bit; the class constants
/// shift those into place. Only the combinations the generator needs are
/// exposed, and they compose in `const` context through [`FileMode::union`].
///
/// # Example
///
/// ```
/// use genvars_core::FileMode;
///
/// let mode = FileMode::OWNER_RW.union(FileMode::GROUP_R);
/// assert_eq!(mode.bits(), 0o640);
/// assert_eq!(mode.to_string(), "rw-r-----");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    const READ: u32 = 0o4;
    const WRITE: u32 = 0o2;
    const EXEC: u32 = 0o1;

    const OWNER_SHIFT: u32 = 6;
    const GROUP_SHIFT: u32 = 3;
    const OTHER_SHIFT: u32 = 0;

    pub const OWNER_R: Self = Self(Self::READ << Self::OWNER_SHIFT);
    pub const OWNER_W: Self = Self(Self::WRITE << Self::OWNER_SHIFT);
    pub const OWNER_RW: Self = Self::OWNER_R.union(Self::OWNER_W);
    pub const GROUP_R: Self = Self(Self::READ << Self::GROUP_SHIFT);
    pub const OTHER_R: Self = Self(Self::READ << Self::OTHER_SHIFT);

    /// Raw permission bits, suitable for `chmod`.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Bits set in either mode.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// `ls -l` style rendering, e.g. `rw-r--r--`.
impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for shift in [Self::OWNER_SHIFT, Self::GROUP_SHIFT, Self::OTHER_SHIFT] {
            let class = (self.0 >> shift) & 0o7;
            let r = if class & Self::READ != 0 { 'r' } else { '-' };
            let w = if class & Self::WRITE != 0 { 'w' } else { '-' };
            let x = if class & Self::EXEC != 0 { 'x' } else { '-' };
            write!(f, "{r}{w}{x}")?;
        }
        Ok(())
    }
}

/// Mode of the generated file: `rw-r--r--`.
pub const OUTPUT_MODE: FileMode = FileMode::OWNER_RW
    .union(FileMode::GROUP_R)
    .union(FileMode::OTHER_R);

/// Failure writing the generated file.
///
/// Covers every step of [`write_output`]: opening (missing directory,
/// permission denied), writing (disk full) and applying the mode. The
/// underlying I/O error is kept as text in `reason`.
#[derive(Debug, Error)]
#[error("Failed to write {path}: {reason}")]
pub struct WriteError {
    pub path: PathBuf,
    pub reason: String,
}

impl WriteError {
    fn new(path: &Path, err: &std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

/// Where the generated file goes for a given repository root.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
///
/// let path = genvars_core::output_path(Path::new("/work/repo"));
/// assert_eq!(path, PathBuf::from("/work/repo/runtime_vars.go"));
/// ```
pub fn output_path(repo_root: &Path) -> PathBuf {
    repo_root.join(OUTPUT_FILE_NAME)
}

/// Create or truncate `path`, write `contents`, and set `mode`.
///
/// The write is not atomic: a crash part way through can leave a truncated
/// file behind. Permissions are applied after writing so that a
/// pre-existing file, or a restrictive umask, still ends up at `mode`. On
/// non-unix targets `mode` is ignored.
///
/// # Errors
///
/// Returns [`WriteError`] naming `path` if the file cannot be opened,
/// written or chmodded.
pub fn write_output(path: &Path, contents: &[u8], mode: FileMode) -> Result<(), WriteError> {
    let mut options = OpenOptions::new();
    options.create(true).write(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode.bits());
    }

    let mut file = options.open(path).map_err(|e| WriteError::new(path, &e))?;
    file.write_all(contents)
        .map_err(|e| WriteError::new(path, &e))?;
    drop(file);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode.bits()))
            .map_err(|e| WriteError::new(path, &e))?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}
