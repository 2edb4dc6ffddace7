use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_PATH: &str = "data/items.json";

/// Location of the catalog document and how its derived caches are refreshed.
#[derive(Clone, Debug)]
pub struct DataConfig {
    pub path: PathBuf,
    /// Poll interval for the stats watcher. `None` disables the watcher.
    pub stats_watch_interval: Option<Duration>,
}

impl DataConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            stats_watch_interval: None,
        }
    }
}

impl FromEnv for DataConfig {
    /// - DATA_PATH: defaults to `data/items.json`
    /// - STATS_WATCH_INTERVAL_MS: unset or 0 disables the watcher
    fn from_env() -> Result<Self, ConfigError> {
        let path = PathBuf::from(env_or_default("DATA_PATH", DEFAULT_DATA_PATH));
        let stats_watch_interval = env_parse::<u64>("STATS_WATCH_INTERVAL_MS")?
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Ok(Self {
            path,
            stats_watch_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_config_defaults() {
        temp_env::with_vars(
            [
                ("DATA_PATH", None::<&str>),
                ("STATS_WATCH_INTERVAL_MS", None::<&str>),
            ],
            || {
                let config = DataConfig::from_env().unwrap();
                assert_eq!(config.path, PathBuf::from(DEFAULT_DATA_PATH));
                assert_eq!(config.stats_watch_interval, None);
            },
        );
    }

    #[test]
    fn test_data_config_custom_values() {
        temp_env::with_vars(
            [
                ("DATA_PATH", Some("/srv/catalog/items.json")),
                ("STATS_WATCH_INTERVAL_MS", Some("1500")),
            ],
            || {
                let config = DataConfig::from_env().unwrap();
                assert_eq!(config.path, PathBuf::from("/srv/catalog/items.json"));
                assert_eq!(config.stats_watch_interval, Some(Duration::from_millis(1500)));
            },
        );
    }

    #[test]
    fn test_zero_interval_disables_watcher() {
        temp_env::with_var("STATS_WATCH_INTERVAL_MS", Some("0"), || {
            let config = DataConfig::from_env().unwrap();
            assert_eq!(config.stats_watch_interval, None);
        });
    }

    #[test]
    fn test_invalid_interval_is_error() {
        temp_env::with_var("STATS_WATCH_INTERVAL_MS", Some("fast"), || {
            let err = DataConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("STATS_WATCH_INTERVAL_MS"));
        });
    }
}
