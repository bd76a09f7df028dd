//! Configuration module for the jobs backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Password the original portal shipped with.
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared admin password; `None` disables the admin gate
    pub admin_password: Option<String>,
    /// Path to SQLite database file backing the key-value store
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Database path selecting the in-memory store instead of SQLite.
pub const IN_MEMORY_DB_PATH: &str = ":memory:";

impl Config {
    /// Whether listings should live only in process memory.
    pub fn in_memory(&self) -> bool {
        self.db_path.as_os_str() == IN_MEMORY_DB_PATH
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let admin_password = match env::var("JOBS_ADMIN_PASSWORD") {
            Ok(value) if value.is_empty() => None,
            Ok(value) => Some(value),
            Err(_) => Some(DEFAULT_ADMIN_PASSWORD.to_string()),
        };

        let db_path = env::var("JOBS_DB_PATH")
            .unwrap_or_else(|_| "./data/jobs.sqlite".to_string())
            .into();

        let raw_addr = env::var("JOBS_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = raw_addr.parse().map_err(|e| {
            AppError::Config(format!("Invalid JOBS_BIND_ADDR '{}': {}", raw_addr, e))
        })?;

        let log_level = env::var("JOBS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            admin_password,
            db_path,
            bind_addr,
            log_level,
        })
    }
}
