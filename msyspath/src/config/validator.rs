//! Configuration validation.
//!
//! This module checks configuration values before they reach the translator,
//! so that a bad file or environment value fails at load time.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use msyspath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let blank = Config { shell_path: Some("  ".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&blank).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `shell_path` is present but blank or
    /// contains a NUL character.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref shell_path) = config.shell_path {
            Self::validate_shell_path(shell_path)?;
        }
        Ok(())
    }

    /// Validate a shell executable path.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the path is blank or contains NUL.
    pub fn validate_shell_path(shell_path: &str) -> Result<()> {
        if shell_path.trim().is_empty() {
            return Err(Error::Validation {
                field: "shell_path".into(),
                message: "cannot be empty".into(),
            });
        }

        if shell_path.contains('\0') {
            return Err(Error::Validation {
                field: "shell_path".into(),
                message: "cannot contain NUL characters".into(),
            });
        }

        Ok(())
    }
}
