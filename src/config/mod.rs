//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CatalogConfig, DirectoryConfig, LogFormat, LoggingConfig, ServerConfig,
};
