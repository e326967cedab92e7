use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub manifest: ManifestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Executable used to resolve the current commit
    pub git_program: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            git_program: "git".to_string(),
        }
    }
}

impl ManifestConfig {
    /// Load the manifest settings alone; the web server settings are not read
    pub fn from_env() -> Self {
        Self {
            git_program: std::env::var("GIT_PROGRAM").unwrap_or_else(|_| "git".to_string()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.git_program.trim().is_empty() {
            return Err(Error::Config("GIT_PROGRAM cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Read an environment variable, falling back to `default`, and parse it
fn env_or<T: std::str::FromStr>(name: &str, default: &str) -> Result<T> {
    std::env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {name} value")))
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:./data/codemarks.db".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env_or("PORT", "8000")?;
        let max_request_body_size = env_or("MAX_REQUEST_BODY_SIZE", "65536")?;

        let max_connections = env_or("DATABASE_MAX_CONNECTIONS", "5")?;
        let min_connections = env_or("DATABASE_MIN_CONNECTIONS", "1")?;
        let connection_timeout_seconds = env_or("DATABASE_CONNECTION_TIMEOUT", "30")?;
        let idle_timeout_seconds = env_or("DATABASE_IDLE_TIMEOUT", "600")?;

        Ok(Settings {
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                min_connections,
                connection_timeout_seconds,
                idle_timeout_seconds,
            },
            server: ServerConfig {
                host,
                port,
                max_request_body_size,
            },
            manifest: ManifestConfig::from_env(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.database.max_connections == 0 {
            return Err(Error::Config(
                "Database max connections must be non-zero".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(Error::Config(
                "Database min connections cannot exceed max connections".to_string(),
            ));
        }

        self.manifest.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 5,
                min_connections: 1,
                connection_timeout_seconds: 30,
                idle_timeout_seconds: 600,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                max_request_body_size: 65536,
            },
            manifest: ManifestConfig::default(),
        }
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = test_settings();
        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validation_connections() {
        let mut settings = test_settings();
        settings.database.min_connections = 10;
        assert!(settings.validate().is_err());

        settings.database.min_connections = 0;
        settings.database.max_connections = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validation_git_program() {
        let mut settings = test_settings();
        settings.manifest.git_program = "  ".to_string();
        assert!(settings.validate().is_err());
    }
}
