//! Configuration management for the API server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::transport::HttpConfig;

/// Main configuration structure for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server, used in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "sample-resource-api".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `API_`.
    /// For example: `API_SERVER_NAME`, `API_LOG_LEVEL`, `API_HTTP_PORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("API_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("API_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("API_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        config.http = HttpConfig::from_env();
        info!("HTTP listener configured on {}", config.http.address());

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "API_SERVER_NAME",
        "API_LOG_LEVEL",
        "API_LOG_TIMESTAMPS",
        "API_HTTP_HOST",
        "API_HTTP_PORT",
        "API_HTTP_CORS",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_defaults_without_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.server.name, "sample-resource-api");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.with_timestamps);
        assert_eq!(config.http, HttpConfig::default());
    }

    #[test]
    fn test_values_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("API_SERVER_NAME", "project-b");
            std::env::set_var("API_LOG_LEVEL", "debug");
            std::env::set_var("API_LOG_TIMESTAMPS", "false");
            std::env::set_var("API_HTTP_HOST", "0.0.0.0");
            std::env::set_var("API_HTTP_PORT", "8081");
            std::env::set_var("API_HTTP_CORS", "false");
        }

        let config = Config::from_env();
        assert_eq!(config.server.name, "project-b");
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.with_timestamps);
        assert_eq!(config.http.address(), "0.0.0.0:8081");
        assert!(!config.http.enable_cors);

        clear_env();
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("API_HTTP_PORT", "not-a-port");
        }

        let config = Config::from_env();
        assert_eq!(config.http.port, 3000);

        clear_env();
    }
}
