use std::env;

use anyhow::Context;
use dotenvy::dotenv;
use strum_macros::{Display, EnumString};

/// Where records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    Mysql,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,
    pub storage_backend: StorageBackend,
    pub api_prefix: String,

    // Frontend bundle served for every unmatched GET
    pub static_dir: String,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:3000".to_string(),
            database_url: "mysql://root@127.0.0.1:3306/payrollDB".to_string(),
            storage_backend: StorageBackend::Mysql,
            api_prefix: "/api".to_string(),
            static_dir: "frontend".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        let defaults = Self::default();

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("STORAGE_BACKEND must be mysql or memory, got {raw:?}"))?,
            Err(_) => defaults.storage_backend,
        };

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            storage_backend,
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_backend_parses_case_insensitively() {
        assert_eq!("memory".parse::<StorageBackend>().ok(), Some(StorageBackend::Memory));
        assert_eq!("MySQL".parse::<StorageBackend>().ok(), Some(StorageBackend::Mysql));
        assert!("mongo".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn defaults_match_the_fixed_local_setup() {
        let config = Config::default();
        assert_eq!(config.server_addr, "127.0.0.1:3000");
        assert_eq!(config.api_prefix, "/api");
        assert_eq!(config.storage_backend.to_string(), "mysql");
    }
}
