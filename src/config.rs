//! Configuration module

use std::env;
use std::net::{IpAddr, Ipv4Addr};

/// Default predictor artifact location
pub const DEFAULT_MODEL_PATH: &str = "model/predictor_02.json";

/// Default allowed CORS origins (web frontend + API gateway)
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:5001";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address
    pub host: IpAddr,

    /// Server port
    pub port: u16,

    /// Path of the trained predictor artifact
    pub model_path: String,

    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<String>,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            model_path: DEFAULT_MODEL_PATH.to_string(),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.host),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            model_path: env::var("MODEL_PATH")
                .unwrap_or(defaults.model_path),

            cors_origins: env::var("CORS_ORIGINS")
                .map(|o| parse_origins(&o))
                .unwrap_or(defaults.cors_origins),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.model_path, DEFAULT_MODEL_PATH);
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
