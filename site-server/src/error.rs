use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ServerError {
    #[error("invalid SITE_ADDR '{0}'")]
    InvalidAddr(String),

    #[error("app shell not readable at {path}: {source}")]
    MissingShell {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
