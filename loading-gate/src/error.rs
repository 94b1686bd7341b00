use thiserror::Error;

/// Errors raised while loading a [`crate::GateConfig`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid gate config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("minLoadingTime ({floor_ms}ms) exceeds initialLoadDuration ({ceiling_ms}ms)")]
    FloorExceedsCeiling { floor_ms: u64, ceiling_ms: u64 },
}
