use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::SeedError;
use crate::models::Registry;
use crate::store::seed;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    /// Reads HOST, PORT, STATIC_DIR and ACTIVITIES_SEED_FILE. Call after
    /// `dotenvy::dotenv()` so `.env` values are visible.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let seed_file = lookup("ACTIVITIES_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            static_dir,
            seed_file,
        }
    }

    /// `host:port`, or `None` when HOST isn't an IP literal.
    pub fn socket_addr(&self, port: u16) -> Option<SocketAddr> {
        format!("{}:{}", self.host, port).parse().ok()
    }

    /// The registry to start with: the seed file when configured, otherwise
    /// the built-in activities.
    pub fn initial_registry(&self) -> Result<Registry, SeedError> {
        match &self.seed_file {
            Some(path) => seed::load_registry(path),
            None => Ok(seed::default_registry()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
