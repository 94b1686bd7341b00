//! Placeholder gating for first paint and in-app navigation.
//!
//! [`LoadingGate`] is a pure state machine; hosts feed it asset, timer and
//! navigation events and run the timers it asks for through [`TimerHost`].
//! The `runtime` feature adds a tokio driver.

pub mod config;
pub mod error;
pub mod machine;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod state;

pub use config::GateConfig;
pub use error::ConfigError;
pub use machine::LoadingGate;
pub use state::{Directive, LoadingState, Step, Timer, TimerHost};
