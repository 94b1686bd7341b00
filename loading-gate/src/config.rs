use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_INITIAL_LOAD: Duration = Duration::from_millis(1200);
pub const DEFAULT_ROUTE_TRANSITION: Duration = Duration::from_millis(800);
pub const DEFAULT_MIN_LOADING: Duration = Duration::from_millis(500);

/// Timing knobs for a gate session. Durations travel as integer milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GateConfig {
    /// Hard ceiling on the first-load placeholder.
    #[serde(with = "millis")]
    pub initial_load_duration: Duration,
    /// Window shown after every navigation once the first load is done.
    #[serde(with = "millis")]
    pub route_transition_duration: Duration,
    /// Floor on the first-load placeholder, even when assets are instant.
    #[serde(with = "millis")]
    pub min_loading_time: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            initial_load_duration: DEFAULT_INITIAL_LOAD,
            route_transition_duration: DEFAULT_ROUTE_TRANSITION,
            min_loading_time: DEFAULT_MIN_LOADING,
        }
    }
}

impl GateConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: GateConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_loading_time > self.initial_load_duration {
            return Err(ConfigError::FloorExceedsCeiling {
                floor_ms: as_millis(self.min_loading_time),
                ceiling_ms: as_millis(self.initial_load_duration),
            });
        }
        Ok(())
    }

    /// Floor pulled down to the ceiling so the ceiling bound always holds.
    pub fn clamped(self) -> Self {
        if self.min_loading_time <= self.initial_load_duration {
            return self;
        }
        tracing::warn!(
            floor_ms = as_millis(self.min_loading_time),
            ceiling_ms = as_millis(self.initial_load_duration),
            "min loading time exceeds initial load ceiling; clamping"
        );
        Self {
            min_loading_time: self.initial_load_duration,
            ..self
        }
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
pub(crate) fn as_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(super::as_millis(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
