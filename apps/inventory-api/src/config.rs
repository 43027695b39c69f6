//! Configuration for Inventory API

use core_config::{app_info, server::ServerConfig, storage::StorageConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let storage = StorageConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            storage,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars_unset(["HOST", "PORT", "PRODUCTS_FILE", "APP_ENV"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.server.port, 5000);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.storage.products_file, PathBuf::from("data/products.json"));
            assert!(config.environment.is_development());
            assert_eq!(config.app.name, "inventory_api");
        });
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
