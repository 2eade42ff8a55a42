use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = match env_map.get("HOST") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), format!("not an IP address: {}", raw))
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("5000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| "database.db".to_string());
        if database_path.is_empty() {
            return Err(ConfigError::InvalidValue(
                "DATABASE_PATH".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Config {
            host,
            port,
            database_path,
        })
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
