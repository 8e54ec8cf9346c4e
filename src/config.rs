// src/config.rs
use std::env;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_API_URL: &str = "http://localhost:3000/";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:4200";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Brak wymaganej zmiennej środowiskowej {0}")]
    Missing(&'static str),

    #[error("Nieprawidłowa wartość zmiennej {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Źródło danych katalogu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CatalogStore {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: CatalogStore,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub api_url: String,
    pub cors_allowed_origins: Vec<String>,
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Wczytuje konfigurację przez podaną funkcję odczytu zmiennych.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("CATALOG_STORE") {
            Some(value) => CatalogStore::from_str(value.trim()).map_err(|_| ConfigError::Invalid {
                name: "CATALOG_STORE",
                value,
            })?,
            None => CatalogStore::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store == CatalogStore::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let port = parse_var(&lookup, "PORT", DEFAULT_PORT)?;
        let database_max_connections =
            parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(AppConfig {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            store,
            database_url,
            database_max_connections,
            api_url: lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            cors_allowed_origins,
        })
    }
}
