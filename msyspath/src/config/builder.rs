//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builder for the effective configuration.
///
/// Layers are applied from lowest to highest precedence: built-in defaults,
/// user config, project config, environment variables, and finally the
/// programmatic override passed to [`ConfigBuilder::with_config`].
///
/// # Examples
///
/// ```
/// use msyspath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         shell_path: Some("c:\\msys64\\usr\\bin\\bash.exe".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.shell_path.as_deref(), Some("c:\\msys64\\usr\\bin\\bash.exe"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    config_files: Vec<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that loads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start the project config search from.
    ///
    /// Defaults to the process working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml`, replacing `~/.msyspath`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Add an explicit configuration file.
    ///
    /// Explicit files sit above the discovered files and below the
    /// environment, in the order they were added.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_files.push(path.to_path_buf());
        self
    }

    /// Skip discovered user and project files. Explicit files still load.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip environment variable overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides applied last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable holds an invalid value, or the merged result
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources: Vec<ConfigSource> = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?);
        }

        for path in &self.config_files {
            sources.push(ConfigSource {
                config: ConfigLoader::load_file(path)?,
                path: path.clone(),
                precedence: 3,
            });
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        log::debug!("Effective configuration: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::PROJECT_CONFIG_FILE;
    use crate::error::Error;
    use crate::logging::LogLevel;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_file_layers() {
        let data_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        fs::write(
            data_dir.path().join("config.yaml"),
            "shell_path: c:/msys/usr/bin/bash.exe\nlog_mode: quiet\n",
        )
        .unwrap();
        fs::write(
            project_dir.path().join(PROJECT_CONFIG_FILE),
            "log_mode: verbose\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(data_dir.path())
            .with_working_dir(project_dir.path())
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.shell_path.as_deref(), Some("c:/msys/usr/bin/bash.exe"));
        assert_eq!(config.log_mode, Some(LogLevel::Verbose));
    }

    #[test]
    fn test_explicit_file_over_discovered() {
        let data_dir = TempDir::new().unwrap();
        let explicit_dir = TempDir::new().unwrap();
        fs::write(data_dir.path().join("config.yaml"), "msys_translation: false\n").unwrap();
        let explicit = explicit_dir.path().join("custom.yaml");
        fs::write(&explicit, "msys_translation: true\n").unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(data_dir.path())
            .with_working_dir(data_dir.path())
            .with_config_file(&explicit)
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.msys_translation, Some(true));
    }

    #[test]
    fn test_explicit_file_loads_with_skip_files() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.yaml");
        fs::write(&explicit, "shell_path: d:/msys64/bash.exe\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config_file(&explicit)
            .build()
            .unwrap();

        assert_eq!(config.shell_path.as_deref(), Some("d:/msys64/bash.exe"));
    }

    #[test]
    fn test_programmatic_override_wins() {
        let dir = TempDir::new().unwrap();
        let explicit = dir.path().join("custom.yaml");
        fs::write(&explicit, "shell_path: d:/msys64/bash.exe\nlog_mode: quiet\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config_file(&explicit)
            .with_config(Config {
                shell_path: Some("c:/msys2/bash.exe".to_string()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.shell_path.as_deref(), Some("c:/msys2/bash.exe"));
        assert_eq!(config.log_mode, Some(LogLevel::Quiet));
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                shell_path: Some(String::new()),
                ..Default::default()
            })
            .build();

        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config_file(&dir.path().join("missing.yaml"))
            .build();

        assert!(result.unwrap_err().is_not_found());
    }
}
