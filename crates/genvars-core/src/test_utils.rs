//! Test utilities for tests that need environment variable isolation.
//!
//! `GenerationConfig::from_env` reads `PROG_DATA_DIR` from the process
//! environment, which is shared by every test thread. Tests that set or
//! remove it go through the helpers here so they neither race each other
//! nor leak state into later tests.

use std::env;
use std::sync::Mutex;

/// Shared lock to serialize tests that depend on environment variables.
///
/// Every test that reads or writes `PROG_DATA_DIR` must hold this lock for
/// its whole body. Without it, one test's `set` can land between another
/// test's `set` and its read, making results depend on scheduling.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
///
/// The previous value (or its absence) is captured when the guard is
/// created. Hold [`ENV_LOCK`] for at least as long as the guard.
///
/// # Example
///
/// ```ignore
/// let _guard = ENV_LOCK.lock().unwrap();
/// let _env = EnvVarGuard::set("PROG_DATA_DIR", "/tmp/test");
/// // ... code that calls GenerationConfig::from_env() ...
/// // Original value restored when _env is dropped
/// ```
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    /// Set `key` to `value` and return a guard that will restore it.
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }

    /// Remove `key` and return a guard that will restore it.
    ///
    /// Use this to exercise the "unset" path even when the developer's
    /// shell exports the variable.
    #[allow(unsafe_code)]
    pub fn unset(key: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}
