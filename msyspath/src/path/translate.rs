//! Translation of MSYS-emulated paths into native Windows paths.
//!
//! MSYS and Cygwin tools hand out POSIX-looking absolute paths. A path whose
//! first segment is a single letter (`/c/foo`) names a drive; any other
//! absolute path (`/usr/bin`) lives under the MSYS installation directory,
//! which is derived from the configured shell executable and cached by the
//! [`MsysTranslator`] until [`MsysTranslator::reset`] is called.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::path::classify::{
    basename, dirname, is_drive_absolute, is_long_path_unc, is_root_directory, is_separator,
    LONG_PATH_PREFIX,
};
use crate::path::normalize::resolve_segments;

/// Environment variable naming the shell executable.
pub const SHELL_ENV_VAR: &str = "MSYSPATH_SHELL";

/// Fallback environment variable naming the shell executable.
pub const LEGACY_SHELL_ENV_VAR: &str = "BAZEL_SH";

/// Where a translator reads the shell executable path from.
///
/// The value is only consulted when the MSYS root is resolved, never on the
/// fast paths that need no root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellSource {
    /// A value captured up front, usually from [`Config::shell_path`].
    Fixed(Option<String>),

    /// `MSYSPATH_SHELL`, falling back to `BAZEL_SH`, read at resolution time.
    Environment,
}

impl ShellSource {
    /// Returns the configured shell path, treating empty values as unset.
    #[must_use]
    pub fn shell_path(&self) -> Option<String> {
        let value = match self {
            Self::Fixed(value) => value.clone(),
            Self::Environment => env::var(SHELL_ENV_VAR)
                .ok()
                .filter(|v| !v.is_empty())
                .or_else(|| env::var(LEGACY_SHELL_ENV_VAR).ok()),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Why the MSYS root could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootFailure {
    /// No shell path is configured.
    NotConfigured,
    /// The shell path has no `msys`-like directory segment.
    NoMsysSegment {
        /// The configured shell executable path.
        shell_path: String,
    },
}

impl From<RootFailure> for Error {
    fn from(failure: RootFailure) -> Self {
        match failure {
            RootFailure::NotConfigured => Self::ShellPathNotConfigured,
            RootFailure::NoMsysSegment { shell_path } => Self::MsysRootNotFound { shell_path },
        }
    }
}

/// Snapshot of a translator's cached MSYS root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootState {
    /// Nothing resolved since construction or the last reset.
    Unresolved,
    /// The root was found.
    Resolved(String),
    /// Resolution failed; the failure stays cached until reset.
    Failed(RootFailure),
}

type CachedRoot = Option<std::result::Result<String, RootFailure>>;

/// Converts MSYS-style paths to native Windows paths.
///
/// One translator is meant to be built per process and shared by reference;
/// the MSYS root is resolved lazily on first need and guarded by a mutex so
/// concurrent first use initializes it exactly once.
///
/// # Examples
///
/// ```
/// use msyspath::MsysTranslator;
///
/// let translator = MsysTranslator::with_shell_path("c:\\msys64\\usr\\bin\\bash.exe");
///
/// assert_eq!(translator.as_windows_path("/c/foo/bar").unwrap(), "c:\\foo\\bar");
/// assert_eq!(translator.as_windows_path("/usr/bin").unwrap(), "c:\\msys64\\usr\\bin");
/// assert_eq!(translator.as_windows_path("foo/bar").unwrap(), "foo\\bar");
/// ```
#[derive(Debug)]
pub struct MsysTranslator {
    source: ShellSource,
    root: Mutex<CachedRoot>,
}

impl Default for MsysTranslator {
    fn default() -> Self {
        Self::new(ShellSource::Environment)
    }
}

impl MsysTranslator {
    /// Create a translator reading the shell path from `source`.
    #[must_use]
    pub fn new(source: ShellSource) -> Self {
        Self {
            source,
            root: Mutex::new(None),
        }
    }

    /// Create a translator that reads `MSYSPATH_SHELL` or `BAZEL_SH`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ShellSource::Environment)
    }

    /// Create a translator with a fixed shell executable path.
    #[must_use]
    pub fn with_shell_path(shell_path: impl Into<String>) -> Self {
        Self::new(ShellSource::Fixed(Some(shell_path.into())))
    }

    /// Create a translator from a built configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use msyspath::{Config, MsysTranslator};
    ///
    /// let config = Config {
    ///     shell_path: Some("c:\\msys\\bash.exe".to_string()),
    ///     ..Default::default()
    /// };
    /// let translator = MsysTranslator::from_config(&config);
    /// assert_eq!(translator.msys_root().unwrap(), "c:\\msys");
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(ShellSource::Fixed(config.shell_path.clone()))
    }

    /// Returns where this translator reads the shell path from.
    #[must_use]
    pub fn shell_source(&self) -> &ShellSource {
        &self.source
    }

    fn lock_root(&self) -> MutexGuard<'_, CachedRoot> {
        self.root.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Forget the cached MSYS root so the next use resolves it again.
    ///
    /// Safe to call any number of times, including before any resolution.
    pub fn reset(&self) {
        *self.lock_root() = None;
    }

    /// Returns a snapshot of the cached MSYS root.
    #[must_use]
    pub fn root_state(&self) -> RootState {
        match &*self.lock_root() {
            None => RootState::Unresolved,
            Some(Ok(root)) => RootState::Resolved(root.clone()),
            Some(Err(failure)) => RootState::Failed(failure.clone()),
        }
    }

    /// Resolve the MSYS root, reusing the cached result when there is one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShellPathNotConfigured`] or [`Error::MsysRootNotFound`]
    /// when the root cannot be derived. Failures are cached like successes.
    pub fn msys_root(&self) -> Result<String> {
        let mut cached = self.lock_root();
        let root = cached.get_or_insert_with(|| self.resolve_root());
        root.clone().map_err(Error::from)
    }

    fn resolve_root(&self) -> std::result::Result<String, RootFailure> {
        let Some(shell_path) = self.source.shell_path() else {
            log::warn!("Cannot resolve MSYS root: no shell path configured");
            return Err(RootFailure::NotConfigured);
        };

        match msys_root_from_shell_path(&shell_path) {
            Some(root) => {
                log::debug!("Resolved MSYS root {root} from shell path {shell_path}");
                Ok(root)
            }
            None => {
                log::warn!("Cannot resolve MSYS root: no msys directory in {shell_path}");
                Err(RootFailure::NoMsysSegment { shell_path })
            }
        }
    }

    /// Convert `path` into a native Windows path.
    ///
    /// - Empty input stays empty.
    /// - Paths that are not MSYS-style only get `/` rewritten to `\`.
    /// - `/x` and `/x/...` become `x:\...`.
    /// - Any other `/...` is placed under the MSYS root.
    ///
    /// # Errors
    ///
    /// Returns an error only when the MSYS root is needed and cannot be
    /// resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use msyspath::MsysTranslator;
    ///
    /// let translator = MsysTranslator::with_shell_path("c:\\qux.exe");
    ///
    /// assert_eq!(translator.as_windows_path("/c").unwrap(), "c:\\");
    /// assert_eq!(translator.as_windows_path("/d/progra~1").unwrap(), "d:\\progra~1");
    /// assert!(translator.as_windows_path("/blah").is_err());
    /// ```
    pub fn as_windows_path(&self, path: &str) -> Result<String> {
        if !is_msys_path(path) {
            return Ok(to_native_separators(path));
        }

        if let Some((drive, rest)) = split_msys_drive(path) {
            let mut native = String::with_capacity(rest.len() + 3);
            native.push(drive);
            native.push_str(":\\");
            native.push_str(&to_native_separators(rest));
            return Ok(native);
        }

        let root = self.msys_root()?;
        let rest = &path[1..];
        if rest.is_empty() {
            return Ok(root);
        }
        Ok(format!("{root}\\{}", to_native_separators(rest)))
    }

    /// Convert `path` into an absolute, `\\?\`-prefixed native path.
    ///
    /// Relative results are joined onto `cwd`, paths rooted without a drive
    /// take the drive of `cwd`, and `.`/`..` segments are resolved before
    /// the prefix is added. Input that already carries the prefix is only
    /// separator-converted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` is empty
    /// - Translation fails (see [`MsysTranslator::as_windows_path`])
    /// - `path` is a `\\server\share` path
    /// - `path` is drive-relative, such as `c:foo`
    /// - `cwd` has no drive
    /// - `..` segments escape the root
    ///
    /// # Examples
    ///
    /// ```
    /// use msyspath::MsysTranslator;
    ///
    /// let translator = MsysTranslator::with_shell_path("c:\\msys64\\bash.exe");
    ///
    /// assert_eq!(
    ///     translator.as_absolute_windows_path("foo/../bar", "d:\\work").unwrap(),
    ///     "\\\\?\\d:\\work\\bar"
    /// );
    /// assert_eq!(
    ///     translator.as_absolute_windows_path("/tmp", "d:\\work").unwrap(),
    ///     "\\\\?\\c:\\msys64\\tmp"
    /// );
    /// ```
    pub fn as_absolute_windows_path(&self, path: &str, cwd: &str) -> Result<String> {
        if path.is_empty() {
            return Err(Error::InvalidPath {
                path: String::new(),
                reason: "Empty path has no absolute form".to_string(),
            });
        }

        let native = self.as_windows_path(path)?;
        if native.starts_with(LONG_PATH_PREFIX) {
            return Ok(native);
        }

        let absolute = if is_drive_absolute(&native) {
            native
        } else if native.starts_with("\\\\") {
            return Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "UNC share paths are not supported".to_string(),
            });
        } else if is_drive_relative(&native) {
            return Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "Drive-relative paths are not supported".to_string(),
            });
        } else {
            let cwd = native_working_dir(cwd)?;
            if native.starts_with('\\') {
                format!("{}{native}", &cwd[..2])
            } else {
                format!("{cwd}\\{native}")
            }
        };

        Ok(format!("{LONG_PATH_PREFIX}{}", resolve_segments(&absolute)?))
    }

    /// Like [`MsysTranslator::as_absolute_windows_path`], using the process
    /// working directory (itself translated) as `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or is not
    /// valid UTF-8, or for any reason listed on
    /// [`MsysTranslator::as_absolute_windows_path`].
    pub fn as_absolute_windows_path_from_cwd(&self, path: &str) -> Result<String> {
        let cwd = env::current_dir()?;
        let cwd = cwd.to_str().ok_or_else(|| Error::InvalidPath {
            path: cwd.display().to_string(),
            reason: "Working directory contains invalid UTF-8".to_string(),
        })?;
        let cwd = self.as_windows_path(cwd)?;
        self.as_absolute_windows_path(path, &cwd)
    }
}

// `c:` or `c:foo`: a drive with no root separator.
fn is_drive_relative(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && !is_drive_absolute(path)
}

fn native_working_dir(cwd: &str) -> Result<String> {
    let cwd = to_native_separators(cwd);
    let cwd = if is_long_path_unc(&cwd) {
        cwd[LONG_PATH_PREFIX.len()..].to_string()
    } else {
        cwd
    };

    if !is_drive_absolute(&cwd) {
        return Err(Error::InvalidPath {
            path: cwd,
            reason: "Working directory must start with a drive letter".to_string(),
        });
    }
    Ok(cwd.trim_end_matches('\\').to_string())
}

/// Returns `true` if `path` is a POSIX-style absolute path an MSYS tool
/// would emit: a single leading `/`, not the `//` of a share path.
///
/// # Examples
///
/// ```
/// use msyspath::path::translate::is_msys_path;
///
/// assert!(is_msys_path("/c/foo"));
/// assert!(is_msys_path("/usr/bin"));
/// assert!(!is_msys_path("//server/share"));
/// assert!(!is_msys_path("\\foo"));
/// assert!(!is_msys_path("c:/foo"));
/// ```
#[must_use]
pub fn is_msys_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

/// Split `/x` or `/x/rest` into the drive letter and `rest`.
///
/// # Examples
///
/// ```
/// use msyspath::path::translate::split_msys_drive;
///
/// assert_eq!(split_msys_drive("/c"), Some(('c', "")));
/// assert_eq!(split_msys_drive("/c/"), Some(('c', "")));
/// assert_eq!(split_msys_drive("/D/foo/bar"), Some(('D', "foo/bar")));
/// assert_eq!(split_msys_drive("/foo"), None);
/// ```
#[must_use]
pub fn split_msys_drive(path: &str) -> Option<(char, &str)> {
    let bytes = path.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'/' || !bytes[1].is_ascii_alphabetic() {
        return None;
    }

    match bytes.get(2) {
        None => Some((char::from(bytes[1]), "")),
        Some(&c) if is_separator(c) => Some((char::from(bytes[1]), &path[3..])),
        Some(_) => None,
    }
}

/// Rewrite every `/` as `\`, leaving all other characters untouched.
#[must_use]
pub fn to_native_separators(path: &str) -> String {
    path.replace('/', "\\")
}

fn is_msys_segment(segment: &str) -> bool {
    segment
        .strip_prefix("msys")
        .is_some_and(|suffix| suffix.bytes().all(|b| b.is_ascii_digit()))
}

/// Derive the MSYS root from a shell executable path.
///
/// An MSYS drive path such as `/c/msys64/usr/bin/bash.exe` is first mapped
/// to its drive. Then this walks up from the executable's directory to the
/// nearest segment named `msys` or `msys` plus digits (case-insensitively).
/// The result is lowercased and uses `\` separators.
///
/// # Examples
///
/// ```
/// use msyspath::path::translate::msys_root_from_shell_path;
///
/// assert_eq!(
///     msys_root_from_shell_path("c:/foo/MSYS64/usr/bin/bash.exe").as_deref(),
///     Some("c:\\foo\\msys64")
/// );
/// assert_eq!(
///     msys_root_from_shell_path("/c/msys64/usr/bin/bash.exe").as_deref(),
///     Some("c:\\msys64")
/// );
/// assert_eq!(msys_root_from_shell_path("c:\\qux.exe"), None);
/// ```
#[must_use]
pub fn msys_root_from_shell_path(shell_path: &str) -> Option<String> {
    let lowered = shell_path.to_ascii_lowercase();
    let lowered = split_msys_drive(&lowered)
        .map(|(drive, rest)| format!("{drive}:\\{rest}"))
        .unwrap_or(lowered);
    let mut current = dirname(&lowered);

    while !current.is_empty() {
        if is_msys_segment(basename(current)) {
            return Some(to_native_separators(current));
        }
        if is_root_directory(current) {
            break;
        }
        current = dirname(current);
    }
    None
}
