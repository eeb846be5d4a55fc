//! Generation configuration.
//!
//! The environment is read in exactly one place, [`GenerationConfig::from_env`].
//! Everything downstream receives the config explicitly.

use std::env;

/// Environment variable holding the runtime data directory to embed.
pub const PROG_DATA_DIR_ENV: &str = "PROG_DATA_DIR";

/// Data directory embedded when `PROG_DATA_DIR` is unset or empty.
pub const DEFAULT_PROG_DATA_DIR: &str = "/usr/local/share/debcomprt";

/// Package clause of the generated file.
pub const DEFAULT_TARGET_PACKAGE: &str = "main";

/// Values substituted into the runtime variables template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Data directory supplied by the environment, `None` when unset or empty.
    pub prog_data_dir: Option<String>,
    /// Package name emitted in the generated file.
    pub target_package: String,
}

impl GenerationConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// An empty value is treated the same as a missing one.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let prog_data_dir = lookup(PROG_DATA_DIR_ENV).filter(|value| !value.is_empty());

        Self {
            prog_data_dir,
            target_package: DEFAULT_TARGET_PACKAGE.to_string(),
        }
    }

    /// Config with an explicit data directory, mainly for callers that
    /// already hold the value.
    pub fn with_prog_data_dir(prog_data_dir: impl Into<String>) -> Self {
        let value = prog_data_dir.into();
        Self {
            prog_data_dir: (!value.is_empty()).then_some(value),
            target_package: DEFAULT_TARGET_PACKAGE.to_string(),
        }
    }

    /// The data directory that ends up in the generated initializer.
    pub fn resolved_prog_data_dir(&self) -> &str {
        self.prog_data_dir
            .as_deref()
            .unwrap_or(DEFAULT_PROG_DATA_DIR)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            prog_data_dir: None,
            target_package: DEFAULT_TARGET_PACKAGE.to_string(),
        }
    }
}
