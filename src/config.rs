//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

/// Runtime configuration, read from the environment with sensible defaults.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address the HTTP server binds to (`CONTACTD_ADDR`).
    pub bind_addr: SocketAddr,
    /// SQLite database file (`CONTACTD_DB`).
    pub db_path: PathBuf,
    /// Comma-separated relationship names to seed at startup
    /// (`CONTACTD_SEED`). Relationships are otherwise administered out of
    /// band; the HTTP API never writes them.
    pub seed_relationships: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
            db_path: PathBuf::from("contacts.sqlite"),
            seed_relationships: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("CONTACTD_ADDR") {
            match addr.parse() {
                Ok(parsed) => config.bind_addr = parsed,
                Err(_) => warn!("ignoring unparseable CONTACTD_ADDR {:?}", addr),
            }
        }
        if let Ok(path) = std::env::var("CONTACTD_DB") {
            config.db_path = PathBuf::from(path);
        }
        if let Ok(seed) = std::env::var("CONTACTD_SEED") {
            config.seed_relationships = seed
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        config
    }
}
