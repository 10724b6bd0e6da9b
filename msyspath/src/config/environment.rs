//! Environment variable handling for configuration overrides.
//!
//! This module reads the `MSYSPATH_*` variables, plus the `BAZEL_SH`
//! variable MSYS-aware build tools already set, and layers them over the
//! file-based configuration.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV_VAR};
use crate::path::translate::{LEGACY_SHELL_ENV_VAR, SHELL_ENV_VAR};

/// Environment variable toggling MSYS translation in existence checks.
pub const MSYS_TRANSLATION_ENV_VAR: &str = "MSYSPATH_MSYS_TRANSLATION";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use msyspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// `MSYSPATH_SHELL` wins over `BAZEL_SH`; empty values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unrecognized boolean or log level).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(shell) = Self::non_empty_var(SHELL_ENV_VAR)
            .or_else(|| Self::non_empty_var(LEGACY_SHELL_ENV_VAR))
        {
            config.shell_path = Some(shell);
        }

        if let Some(val) = Self::non_empty_var(MSYS_TRANSLATION_ENV_VAR) {
            config.msys_translation = Some(Self::parse_bool(MSYS_TRANSLATION_ENV_VAR, &val)?);
        }

        if let Some(val) = Self::non_empty_var(LOG_MODE_ENV_VAR) {
            config.log_mode = Some(LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV_VAR.into(),
                message,
            })?);
        }

        Ok(())
    }

    fn non_empty_var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 4] = [
        SHELL_ENV_VAR,
        LEGACY_SHELL_ENV_VAR,
        MSYS_TRANSLATION_ENV_VAR,
        LOG_MODE_ENV_VAR,
    ];

    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let saved: Vec<_> = KEYS.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }

        f();

        for (key, value) in saved {
            match value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for value in ["true", "TRUE", "1", "yes", "YES", "on", "ON"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for value in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let result = EnvironmentConfig::parse_bool("test", "maybe");
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_no_variables_leaves_config_alone() {
        with_env(&[], || {
            let mut config = Config {
                shell_path: Some("c:\\msys\\bash.exe".to_string()),
                ..Default::default()
            };
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config.shell_path.as_deref(), Some("c:\\msys\\bash.exe"));
            assert!(config.msys_translation.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_legacy_shell_variable() {
        with_env(&[(LEGACY_SHELL_ENV_VAR, "c:\\msys64\\usr\\bin\\bash.exe")], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(
                config.shell_path.as_deref(),
                Some("c:\\msys64\\usr\\bin\\bash.exe")
            );
        });
    }

    #[test]
    #[serial]
    fn test_shell_variable_beats_legacy() {
        with_env(
            &[
                (SHELL_ENV_VAR, "d:\\msys2\\bash.exe"),
                (LEGACY_SHELL_ENV_VAR, "c:\\msys64\\bash.exe"),
            ],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.shell_path.as_deref(), Some("d:\\msys2\\bash.exe"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_empty_shell_variable_is_unset() {
        with_env(
            &[(SHELL_ENV_VAR, ""), (LEGACY_SHELL_ENV_VAR, "c:\\msys\\bash.exe")],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.shell_path.as_deref(), Some("c:\\msys\\bash.exe"));
            },
        );
    }

    #[test]
    #[serial]
    fn test_translation_and_log_mode() {
        with_env(
            &[(MSYS_TRANSLATION_ENV_VAR, "on"), (LOG_MODE_ENV_VAR, "Verbose")],
            || {
                let mut config = Config::default();
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.msys_translation, Some(true));
                assert_eq!(config.log_mode, Some(LogLevel::Verbose));
            },
        );
    }

    #[test]
    #[serial]
    fn test_invalid_values_rejected() {
        with_env(&[(MSYS_TRANSLATION_ENV_VAR, "sometimes")], || {
            let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
            assert!(matches!(err, Error::Validation { ref field, .. } if field == MSYS_TRANSLATION_ENV_VAR));
        });

        with_env(&[(LOG_MODE_ENV_VAR, "chatty")], || {
            let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
            assert!(matches!(err, Error::Validation { ref field, .. } if field == LOG_MODE_ENV_VAR));
        });
    }
}
