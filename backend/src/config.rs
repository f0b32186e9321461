//! Runtime settings read from the environment (and an optional `.env` file).

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::{Any, CorsLayer};

const DEFAULT_DATABASE_URL: &str = "sqlite:app.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// SQLite URL, `DB_URI`
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Single allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset and empty values take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = match get("HOST") {
            Some(host) => host
                .trim()
                .parse()
                .with_context(|| format!("HOST must be an IP address, got {:?}", host))?,
            None => DEFAULT_HOST.parse()?,
        };

        let port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a number between 0 and 65535, got {:?}", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DB_URI").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host,
            port,
            cors_origin: get("CORS_ORIGIN"),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// CORS layer for browser clients
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        match &self.cors_origin {
            Some(origin) => {
                let origin = origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("CORS_ORIGIN is not a valid header value: {:?}", origin))?;
                Ok(layer.allow_origin(origin))
            }
            None => Ok(layer.allow_origin(Any)),
        }
    }
}
