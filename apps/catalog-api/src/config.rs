use core_config::{AppInfo, FromEnv, app_info, data::DataConfig, server::ServerConfig};

pub use core_config::Environment;

/// Application configuration, composed from the shared `core_config` pieces.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub data: DataConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let data = DataConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            data,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("APP_ENV", Some("production")),
                ("PORT", Some("3001")),
                ("DATA_PATH", Some("/srv/catalog/items.json")),
                ("STATS_WATCH_INTERVAL_MS", Some("500")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_production());
                assert_eq!(config.server.port, 3001);
                assert_eq!(
                    config.data.path.to_str(),
                    Some("/srv/catalog/items.json")
                );
                assert!(config.data.stats_watch_interval.is_some());
                assert_eq!(config.app.name, "catalog_api");
            },
        );
    }

    #[test]
    fn test_bad_port_is_reported() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
