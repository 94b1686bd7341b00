pub mod config;
pub mod error;
pub mod router;

pub use config::ServerConfig;
pub use error::ServerError;
pub use router::site_router;
