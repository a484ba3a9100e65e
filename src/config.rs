use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Reads `DATABASE_URL`, `APP_HOST`, `APP_PORT` and `DATABASE_MAX_CONNECTIONS`.
    /// Only `DATABASE_URL` is required.
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let host = match std::env::var("APP_HOST") {
            Ok(host) => host
                .parse::<IpAddr>()
                .with_context(|| format!("APP_HOST `{host}` is not an IP address"))?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match std::env::var("APP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("APP_PORT `{port}` is not a valid port"))?,
            Err(_) => DEFAULT_PORT,
        };
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(max) => max
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS `{max}` is not a number"))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
