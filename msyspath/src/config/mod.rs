//! Configuration system for msyspath.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `msyspath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`MSYSPATH_*`, then `BAZEL_SH`)
//! 3. Explicit files (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `msyspath.yaml`)
//! 5. User config (`~/.msyspath/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use msyspath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use msyspath::config::{Config, ConfigBuilder};
//! use msyspath::MsysTranslator;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         shell_path: Some("c:\\tools\\msys64\\usr\\bin\\bash.exe".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let translator = MsysTranslator::from_config(&config);
//! assert_eq!(translator.msys_root().unwrap(), "c:\\tools\\msys64");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
