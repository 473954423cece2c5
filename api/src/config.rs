/// Server configuration module
/// Reads listen port and CORS origins from the environment

use std::env;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("CONTACT_API_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidConfig(format!("Invalid port: {}", e)))?;

        let cors_allowed_origins: Vec<String> = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        if cors_allowed_origins.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "CORS_ALLOWED_ORIGINS must list at least one origin".to_string(),
            ));
        }

        info!(
            "Server configuration loaded: port={}, cors_origins={}",
            port,
            cors_allowed_origins.join(", ")
        );

        Ok(ApiConfig {
            port,
            cors_allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        env::remove_var("CONTACT_API_PORT");
        env::remove_var("CORS_ALLOWED_ORIGINS");

        let config = ApiConfig::from_env().expect("Should load with defaults");
        assert_eq!(config.port, 3001);
        assert_eq!(config.cors_allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_origin_list_is_split_and_trimmed() {
        env::set_var(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000, https://merotech.example.com",
        );

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:3000", "https://merotech.example.com"]
        );

        env::remove_var("CORS_ALLOWED_ORIGINS");
    }
}
