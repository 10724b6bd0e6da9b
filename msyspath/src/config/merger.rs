//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use msyspath::config::{Config, ConfigMerger};
///
/// let low = Config { shell_path: Some("c:/msys/bash.exe".to_string()), ..Default::default() };
/// let high = Config { shell_path: Some("d:/msys64/bash.exe".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.shell_path.as_deref(), Some("d:/msys64/bash.exe"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.shell_path.is_some() {
            target.shell_path.clone_from(&source.shell_path);
        }

        if source.msys_translation.is_some() {
            target.msys_translation = source.msys_translation;
        }

        if source.log_mode.is_some() {
            target.log_mode = source.log_mode;
        }
    }
}
