use crate::error::ServerError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DIST: &str = "dist";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory holding the built bundle and its `index.html` shell.
    pub dist: PathBuf,
}

impl ServerConfig {
    /// Reads `SITE_ADDR` and `SITE_DIST`.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let raw_addr = lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into());
        let addr = raw_addr
            .parse()
            .map_err(|_| ServerError::InvalidAddr(raw_addr.clone()))?;
        let dist = lookup("SITE_DIST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DIST.into());
        Ok(Self {
            addr,
            dist: PathBuf::from(dist),
        })
    }
}
