//! Existence checks that see through reparse points.
//!
//! A junction or symlink whose target is gone still has a directory entry,
//! but it does not exist for the purposes of this module: existence means the
//! path resolves all the way to a present target.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::translate::{is_msys_path, MsysTranslator};

/// Filesystem capability used to probe a native path.
#[cfg_attr(test, mockall::automock)]
pub trait FileProbe {
    /// Returns `Ok(true)` if `path` resolves to a present target, following
    /// junctions and symlinks; `Ok(false)` if it or its target is missing.
    ///
    /// # Errors
    ///
    /// Returns any other I/O failure, such as permission denied.
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Probe backed by [`std::fs::metadata`].
///
/// `metadata` follows symlinks and junctions and fails with `NotFound` when
/// the final target is missing. On platforms without reparse points it is a
/// plain stat.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdProbe;

impl FileProbe for StdProbe {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

/// Answers "does this path exist" for native and MSYS-style paths.
///
/// MSYS-style input is translated first when translation is enabled, which
/// is the default on Windows hosts. Elsewhere a `/...` path is already
/// native and is probed as given.
///
/// # Examples
///
/// ```
/// use msyspath::{ExistenceChecker, MsysTranslator};
///
/// let translator = MsysTranslator::from_env();
/// let checker = ExistenceChecker::new(&translator);
///
/// assert!(checker.path_exists("."));
/// assert!(!checker.path_exists(""));
/// assert!(!checker.path_exists("non.existent"));
/// ```
#[derive(Debug)]
pub struct ExistenceChecker<'a, P = StdProbe> {
    translator: &'a MsysTranslator,
    probe: P,
    translate_msys: bool,
}

impl<'a> ExistenceChecker<'a, StdProbe> {
    /// Create a checker using the standard filesystem probe.
    #[must_use]
    pub fn new(translator: &'a MsysTranslator) -> Self {
        Self {
            translator,
            probe: StdProbe,
            translate_msys: cfg!(windows),
        }
    }

    /// Create a checker honoring `config.msys_translation`.
    #[must_use]
    pub fn from_config(translator: &'a MsysTranslator, config: &Config) -> Self {
        let checker = Self::new(translator);
        match config.msys_translation {
            Some(enabled) => checker.with_msys_translation(enabled),
            None => checker,
        }
    }
}

impl<'a, P: FileProbe> ExistenceChecker<'a, P> {
    /// Replace the filesystem probe.
    #[must_use]
    pub fn with_probe<Q: FileProbe>(self, probe: Q) -> ExistenceChecker<'a, Q> {
        ExistenceChecker {
            translator: self.translator,
            probe,
            translate_msys: self.translate_msys,
        }
    }

    /// Enable or disable translation of MSYS-style paths before probing.
    #[must_use]
    pub fn with_msys_translation(mut self, enabled: bool) -> Self {
        self.translate_msys = enabled;
        self
    }

    /// Returns whether MSYS-style paths are translated before probing.
    #[must_use]
    pub fn translates_msys_paths(&self) -> bool {
        self.translate_msys
    }

    /// Returns the native path that would be probed for `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is MSYS-style, translation is enabled, and
    /// the MSYS root cannot be resolved.
    pub fn native_path(&self, path: &str) -> Result<String> {
        if self.translate_msys && is_msys_path(path) {
            self.translator.as_windows_path(path)
        } else {
            Ok(path.to_string())
        }
    }

    /// Check whether `path` exists, surfacing failures other than absence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The MSYS root is needed and cannot be resolved
    /// - Permission to probe the path is denied (`PermissionDenied`)
    /// - Any other I/O error occurs
    pub fn try_path_exists(&self, path: &str) -> Result<bool> {
        if path.is_empty() {
            return Ok(false);
        }

        let native = self.native_path(path)?;
        self.probe
            .exists(Path::new(&native))
            .map_err(|e| match e.kind() {
                ErrorKind::PermissionDenied => Error::PermissionDenied {
                    path: native.clone().into(),
                },
                _ => Error::Io(e),
            })
    }

    /// Check whether `path` exists.
    ///
    /// Empty input, untranslatable MSYS paths, dangling links, and probe
    /// failures all answer `false`.
    #[must_use]
    pub fn path_exists(&self, path: &str) -> bool {
        match self.try_path_exists(path) {
            Ok(exists) => exists,
            Err(e) => {
                log::debug!("Treating {path} as missing: {e}");
                false
            }
        }
    }
}
