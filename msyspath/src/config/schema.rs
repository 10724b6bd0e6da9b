//! Configuration schema definitions.
//!
//! This module defines the configuration structure shared by the YAML files,
//! the environment overrides, and programmatic callers.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Complete configuration structure.
///
/// Every field is optional so that layers can be merged; an unset field
/// falls back to the built-in default at the point of use.
///
/// # Examples
///
/// ```
/// use msyspath::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "shell_path: c:\\msys64\\usr\\bin\\bash.exe\nmsys_translation: true\n",
/// )
/// .unwrap();
/// assert_eq!(config.msys_translation, Some(true));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path of the MSYS shell executable, e.g. `c:\msys64\usr\bin\bash.exe`.
    pub shell_path: Option<String>,

    /// Translate MSYS-style paths before existence checks.
    ///
    /// Defaults to `true` on Windows hosts and `false` elsewhere.
    pub msys_translation: Option<bool>,

    /// Log verbosity.
    pub log_mode: Option<LogLevel>,
}

impl Config {
    /// Returns the effective log level.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_mode.unwrap_or_default()
    }
}
