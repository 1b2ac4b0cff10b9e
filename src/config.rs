//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is required when STORE=postgres")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// - `STORE`: `postgres` (default) or `memory`
    /// - `DATABASE_URL`: required for `postgres`
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first missing or malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first missing or malformed variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = parse_store(lookup("STORE").as_deref())?;

        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing { var: "DATABASE_URL" });
        }

        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), || DEFAULT_BIND_ADDR)?;
        let port = parse_or("PORT", lookup("PORT"), || DEFAULT_PORT)?;
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), || DEFAULT_DB_MAX_CONNECTIONS)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", value: "0".into() });
        }

        Ok(Self { store, database_url, bind_addr, port, db_max_connections })
    }
}

fn parse_store(raw: Option<&str>) -> Result<StoreKind, ConfigError> {
    match raw.map(str::trim).unwrap_or("postgres") {
        "" | "postgres" => Ok(StoreKind::Postgres),
        "memory" => Ok(StoreKind::Memory),
        other => Err(ConfigError::Invalid { var: "STORE", value: other.to_owned() }),
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: impl FnOnce() -> T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default()),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
