//! Error types for the msyspath library.
//!
//! Classification and existence queries answer with plain values; only
//! translation, configuration, and the fallible probe surface these errors.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an msyspath error.
///
/// # Examples
///
/// ```
/// use msyspath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("c:\\msys64"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the msyspath library.
#[derive(Debug, Error)]
pub enum Error {
    /// No shell executable path is configured, so the MSYS root is unknown.
    #[error("cannot resolve MSYS root: no shell path configured (set MSYSPATH_SHELL or BAZEL_SH)")]
    ShellPathNotConfigured,

    /// The configured shell path has no `msys`-like directory segment.
    #[error("cannot resolve MSYS root: no msys directory in shell path '{shell_path}'")]
    MsysRootNotFound {
        /// The configured shell executable path.
        shell_path: String,
    },

    /// An invalid path was provided.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The invalid path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use msyspath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Check if error comes from MSYS root resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use msyspath::Error;
    ///
    /// assert!(Error::ShellPathNotConfigured.is_msys_root_error());
    /// ```
    #[must_use]
    pub fn is_msys_root_error(&self) -> bool {
        matches!(
            self,
            Self::ShellPathNotConfigured | Self::MsysRootNotFound { .. }
        )
    }
}
