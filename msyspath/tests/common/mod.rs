//! Common test utilities for integration tests.
//!
//! This module provides environment guards and fixture helpers for testing
//! the msyspath library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Every environment variable the library reads.
#[allow(dead_code)]
pub const MSYSPATH_ENV_VARS: [&str; 4] = [
    "MSYSPATH_SHELL",
    "BAZEL_SH",
    "MSYSPATH_MSYS_TRANSLATION",
    "MSYSPATH_LOG_MODE",
];

/// RAII guard for setting and restoring environment variables.
///
/// Tests using environment variables must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Set `key` to `value` until the guard drops.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Remove `key` until the guard drops.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear all msyspath environment variables for the duration of a test.
#[allow(dead_code)]
pub fn clear_msyspath_env_vars() -> Vec<EnvGuard> {
    MSYSPATH_ENV_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Write `content` to `dir/filename` and return the path.
#[allow(dead_code)]
pub fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// Returns `path` as a `&str`; temp paths are always UTF-8 in these tests.
#[allow(dead_code)]
pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
