//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use libris::config::{Config, ConfigMerger};
///
/// let low = Config { default_user: Some("low".to_string()), ..Default::default() };
/// let high = Config { default_user: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_user, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources, lowest precedence first, on top of
    /// the built-in defaults.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::defaults();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target if Some).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.database_file.is_some() {
            target.database_file.clone_from(&source.database_file);
        }

        if source.log_file.is_some() {
            target.log_file.clone_from(&source.log_file);
        }

        if source.log_level.is_some() {
            target.log_level = source.log_level;
        }

        if source.default_user.is_some() {
            target.default_user.clone_from(&source.default_user);
        }

        if source.busy_timeout_seconds.is_some() {
            target.busy_timeout_seconds = source.busy_timeout_seconds;
        }
    }
}
