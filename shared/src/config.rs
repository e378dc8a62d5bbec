use std::env;
use std::path::PathBuf;

use crate::errors::{Result, ServiceError};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|e| ServiceError::Internal(format!("Invalid PORT: {}", e)))?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Known weakness: fixed fallback secret. Set JWT_SECRET for
            // anything beyond local use.
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "SECRET_KEY".to_string()),
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .map_err(|e| ServiceError::Internal(format!("Invalid TOKEN_TTL_SECS: {}", e)))?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub file: PathBuf,
}

impl BoardConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            file: env::var("LEADERBOARD_FILE")
                .unwrap_or_else(|_| "leaderboard.json".to_string())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These assume the variables are not set in the test environment; the
    // tests never mutate it.

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::from_env().unwrap();
        assert_eq!(config.jwt_secret, "SECRET_KEY");
        assert_eq!(config.token_ttl_secs, 3600);
    }

    #[test]
    fn test_board_config_defaults() {
        let config = BoardConfig::from_env().unwrap();
        assert_eq!(config.file, PathBuf::from("leaderboard.json"));
    }
}
