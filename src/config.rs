// src/config.rs
use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub database_connect_timeout: Duration,
    pub timeouts: StoreTimeouts,
}

/// Per-operation deadlines for store calls made while serving a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub create: Duration,
    pub get: Duration,
    pub list: Duration,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self {
            create: Duration::from_secs(5),
            get: Duration::from_secs(5),
            list: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = StoreTimeouts::default();

        Self {
            bind_addr: try_load("BIND_ADDR", "0.0.0.0".to_string()),
            port: try_load("PORT", 8080),
            database_url: var("DATABASE_URL"),
            database_max_connections: try_load("DATABASE_MAX_CONNECTIONS", 5),
            database_connect_timeout: secs("DATABASE_CONNECT_TIMEOUT_SECS", Duration::from_secs(10)),
            timeouts: StoreTimeouts {
                create: secs("CREATE_TIMEOUT_SECS", defaults.create),
                get: secs("GET_TIMEOUT_SECS", defaults.get),
                list: secs("LIST_TIMEOUT_SECS", defaults.list),
            },
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    parse_or(key, &raw, default)
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn secs(key: &str, default: Duration) -> Duration {
    Duration::from_secs(try_load(key, default.as_secs()))
}
