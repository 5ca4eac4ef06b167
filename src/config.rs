//! Environment-backed configuration.
//!
//! Every setting has a documented default; a missing or unparseable
//! variable falls back instead of failing startup.

use std::env;
use std::str::FromStr;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

#[derive(Debug, Clone)]
pub struct Config {
    /// `HOST` — listen address (default `0.0.0.0`).
    pub host: String,
    /// `PORT` — listen port (default `3000`).
    pub port: u16,
    /// `DB_HOST` — MySQL host (default `localhost`).
    pub db_host: String,
    /// `DB_PORT` — MySQL port (default `3306`).
    pub db_port: u16,
    /// `DB_USER` — MySQL user (default `root`).
    pub db_user: String,
    /// `DB_PASSWORD` — MySQL password (default empty).
    pub db_password: String,
    /// `DB_NAME` — database name (default `api_productos`).
    pub db_name: String,
    /// `DB_CONNECTION_LIMIT` — max pooled connections (default `10`).
    pub db_connection_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            db_host: "localhost".to_string(),
            db_port: 3306,
            db_user: "root".to_string(),
            db_password: String::new(),
            db_name: "api_productos".to_string(),
            db_connection_limit: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            host: var_or("HOST", defaults.host),
            port: parse_or(env::var("PORT").ok(), defaults.port),
            db_host: var_or("DB_HOST", defaults.db_host),
            db_port: parse_or(env::var("DB_PORT").ok(), defaults.db_port),
            db_user: var_or("DB_USER", defaults.db_user),
            db_password: var_or("DB_PASSWORD", defaults.db_password),
            db_name: var_or("DB_NAME", defaults.db_name),
            db_connection_limit: parse_or(
                env::var("DB_CONNECTION_LIMIT").ok(),
                defaults.db_connection_limit,
            ),
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }

    /// Build the connection pool. Connections are opened lazily on first
    /// use, so startup does not depend on store availability.
    pub fn pool(&self) -> MySqlPool {
        MySqlPoolOptions::new()
            .max_connections(self.db_connection_limit)
            .connect_lazy_with(self.connect_options())
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|raw| raw.parse().ok()).unwrap_or(default)
}
