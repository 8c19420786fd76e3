use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::storage::MemoryStorage;

const DEFAULT_PORT: u16 = 3333;
const DEFAULT_SEED_KEY: &str = "data1";
const DEFAULT_SEED_VALUE: &str = "value1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed: Option<(String, String)>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed: Some((DEFAULT_SEED_KEY.to_owned(), DEFAULT_SEED_VALUE.to_owned())),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> ServerConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServerConfig {
        let defaults = ServerConfig::default();

        let host = lookup("HOST").and_then(|v| v.parse().ok()).unwrap_or(defaults.host);
        let port = lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(defaults.port);

        let seed_key = lookup("SEED_KEY").unwrap_or(DEFAULT_SEED_KEY.to_owned());
        let seed = if seed_key.is_empty() {
            None
        } else {
            let seed_value = lookup("SEED_VALUE").unwrap_or(DEFAULT_SEED_VALUE.to_owned());
            Some((seed_key, seed_value))
        };

        ServerConfig { host, port, seed }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn storage(&self) -> MemoryStorage {
        match &self.seed {
            Some((key, value)) => MemoryStorage::with_seed(key, value),
            None => MemoryStorage::new(),
        }
    }
}
