use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::sql::SqlConfig;

pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: SqlConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = SqlConfig::from_env()?; // Defaults to a local SQLite file
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(["APP_ENV", "DATABASE_URL", "HOST", "PORT"], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.app.name, "catalog_api");
            assert_eq!(config.environment, Environment::Development);
            assert!(config.database.is_sqlite());
            assert_eq!(config.server.port, 8080);
        });
    }

    #[test]
    fn test_config_rejects_bad_port() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
