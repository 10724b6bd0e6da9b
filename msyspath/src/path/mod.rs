//! Path classification, MSYS translation, and existence checking.
//!
//! Paths arrive either in native Windows form (`c:\foo`, `\\?\c:\foo`,
//! `foo/bar`) or in the POSIX-looking form MSYS tools print (`/c/foo`,
//! `/usr/bin`). Nothing tags a string with its convention; every function
//! here re-derives it from the characters.
//!
//! # Components
//!
//! ## Classification
//!
//! [`classify`] splits and inspects path strings without touching the
//! filesystem. Both `/` and `\` count as separators, and three root shapes
//! are recognized: `/` or `\`, `c:/` or `c:\`, and `\\?\c:\`.
//!
//! ## Translation
//!
//! [`MsysTranslator`] turns MSYS paths into native ones. Drive paths (`/c/x`)
//! map directly; everything else under `/` is placed below the MSYS root,
//! which is derived from the configured shell executable and cached.
//!
//! ## Existence
//!
//! [`ExistenceChecker`] translates when needed and then probes the native
//! path, following junctions and symlinks so that dangling links report
//! `false`.
//!
//! # Examples
//!
//! ```
//! use msyspath::path::classify::{basename, dirname, is_absolute};
//! use msyspath::MsysTranslator;
//!
//! assert_eq!(dirname("c:\\foo\\bar"), "c:\\foo");
//! assert_eq!(basename("/c/foo/bar"), "bar");
//! assert!(!is_absolute("c:"));
//!
//! let translator = MsysTranslator::with_shell_path("c:\\msys64\\usr\\bin\\bash.exe");
//! assert_eq!(translator.as_windows_path("/etc/profile").unwrap(), "c:\\msys64\\etc\\profile");
//! ```

pub mod classify;
pub mod exists;
pub mod normalize;
pub mod translate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use exists::{ExistenceChecker, FileProbe, StdProbe};
pub use translate::{MsysTranslator, RootFailure, RootState, ShellSource};
