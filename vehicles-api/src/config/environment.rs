//! Environment configuration

use std::env;

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub port: u16,
    pub host: String,
    /// When unset the service runs on the in-memory store.
    pub database_url: Option<String>,
    pub pricing_url: String,
    /// When unset the maps client synthesizes fallback addresses.
    pub maps_url: Option<String>,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            database_url: env::var("DATABASE_URL").ok(),
            pricing_url: env::var("PRICING_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            maps_url: env::var("MAPS_URL").ok(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
