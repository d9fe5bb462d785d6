use std::time::Duration;

use serde::Deserialize;

use crate::infrastructure::catalog::DEFAULT_OMDB_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Movie catalog (OMDb) connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Pre-seed users "1".."6" so new users start at "7"
    pub seed_demo_users: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            seed_demo_users: true,
        }
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` environment variables.
    ///
    /// A value that fails to parse is an error; nothing falls back to defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(config::Environment::with_prefix("APP"))
    }

    fn load_with_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(env.separator("__").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.catalog.base_url, "http://www.omdbapi.com");
        assert_eq!(config.catalog.timeout(), Duration::from_secs(10));
        assert!(config.directory.seed_demo_users);
    }

    #[test]
    fn test_partial_sources_fill_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("catalog.api_key", "abc123")
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .set_override("directory.seed_demo_users", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.catalog.api_key, "abc123");
        assert_eq!(config.catalog.base_url, "http://www.omdbapi.com");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert!(!config.directory.seed_demo_users);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix("APP").source(Some(map))
    }

    #[test]
    fn test_load_reads_prefixed_env() {
        let config = AppConfig::load_with_env(env(&[
            ("APP__CATALOG__API_KEY", "secret"),
            ("APP__SERVER__PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.catalog.api_key, "secret");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_load_rejects_unparseable_value() {
        let err = AppConfig::load_with_env(env(&[
            ("APP__CATALOG__API_KEY", "secret"),
            ("APP__SERVER__PORT", "abc"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("server.port"));
    }
}
