#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # msyspath
//!
//! A library for working with Windows paths written in either native or
//! MSYS form.
//!
//! Build tools that run under an MSYS shell see paths like `/c/src/app` and
//! `/usr/bin`, while the Windows APIs they call want `c:\src\app` and
//! `c:\msys64\usr\bin`. This library classifies both forms, translates MSYS
//! paths to native ones, and checks whether a path exists, following
//! junctions and symlinks.
//!
//! ## Core Types
//!
//! - [`path::classify`]: String-level dirname, basename, and root tests
//! - [`MsysTranslator`]: MSYS to native path translation with a cached root
//! - [`ExistenceChecker`]: Existence checks over a [`FileProbe`]
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use msyspath::path::classify::{dirname, is_root_directory};
//! use msyspath::{ExistenceChecker, MsysTranslator};
//!
//! assert_eq!(dirname("c:\\foo\\bar"), "c:\\foo");
//! assert!(is_root_directory("\\\\?\\c:\\"));
//!
//! let translator = MsysTranslator::with_shell_path("c:\\msys64\\usr\\bin\\bash.exe");
//! assert_eq!(translator.as_windows_path("/c/foo").unwrap(), "c:\\foo");
//! assert_eq!(translator.as_windows_path("/etc").unwrap(), "c:\\msys64\\etc");
//!
//! let checker = ExistenceChecker::new(&translator);
//! assert!(!checker.path_exists(""));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    ExistenceChecker, FileProbe, MsysTranslator, RootFailure, RootState, ShellSource, StdProbe,
};
