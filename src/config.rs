use crate::error::{AppError, AppResult};
use axum::http::HeaderValue;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_host")]
    pub server_host: String,
    #[serde(default = "default_port")]
    pub server_port: u16,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_cors_origins() -> Vec<String> {
    // Vite dev server, where the frontend runs during development
    vec!["http://localhost:5173".to_string()]
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "plain".to_string()
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.server_port == 0 {
            return Err(AppError::Config("SERVER_PORT must be > 0".to_string()));
        }

        if self.cors_origins.is_empty() {
            return Err(AppError::Config(
                "CORS_ORIGINS must list at least one origin or \"*\"".to_string(),
            ));
        }

        for origin in &self.cors_origins {
            if origin != "*" && origin.parse::<HeaderValue>().is_err() {
                return Err(AppError::Config(format!(
                    "CORS_ORIGINS entry is not a valid origin: {origin:?}"
                )));
            }
        }

        Ok(())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn allow_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            server_host: default_host(),
            server_port: default_port(),
            cors_origins: default_cors_origins(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = base_config();
        config.server_port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_cors_origins() {
        let mut config = base_config();
        config.cors_origins = vec![];
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_malformed_cors_origin() {
        let mut config = base_config();
        config.cors_origins = vec!["http://localhost:5173\n".to_string()];
        assert!(config.validate().is_err());

        config.cors_origins = vec!["*".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn wildcard_enables_any_origin() {
        let mut config = base_config();
        assert!(!config.allow_any_origin());
        config.cors_origins = vec!["*".to_string()];
        assert!(config.allow_any_origin());
    }

    #[test]
    fn server_address_joins_host_and_port() {
        let config = base_config();
        assert_eq!(config.server_address(), "127.0.0.1:8000");
    }
}
