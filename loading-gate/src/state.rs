use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Snapshot of the gate flags read by the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingState {
    #[serde(rename = "isInitialLoading")]
    pub initial_loading: bool,
    #[serde(rename = "isRouteLoading")]
    pub route_loading: bool,
    #[serde(rename = "hasInitiallyLoaded")]
    pub initially_loaded: bool,
}

impl LoadingState {
    pub const BOOTING: Self = Self {
        initial_loading: true,
        route_loading: false,
        initially_loaded: false,
    };

    pub fn is_loading(&self) -> bool {
        self.initial_loading || self.route_loading
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::BOOTING
    }
}

/// Timers a gate asks its host to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Timer {
    /// Minimum placeholder time, measured from session start.
    Floor,
    /// Maximum placeholder time, measured from session start.
    Ceiling,
    /// Route-loading window for the navigation with this generation.
    Route(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    ArmTimer { timer: Timer, after: Duration },
    CancelTimer(Timer),
}

/// Side effects produced by one gate input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    pub directives: Vec<Directive>,
    /// New state, present only when it differs from the previous one.
    pub changed: Option<LoadingState>,
}

impl Step {
    pub fn apply<H: TimerHost + ?Sized>(&self, host: &mut H) {
        for directive in &self.directives {
            match *directive {
                Directive::ArmTimer { timer, after } => host.arm(timer, after),
                Directive::CancelTimer(timer) => host.cancel(timer),
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.changed.is_none()
    }
}

/// Timer primitive supplied by the hosting environment.
///
/// `arm` schedules a callback that must eventually feed
/// [`crate::LoadingGate::timer_fired`]; `cancel` must guarantee that it never
/// does.
pub trait TimerHost {
    fn arm(&mut self, timer: Timer, after: Duration);
    fn cancel(&mut self, timer: Timer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl TimerHost for Recorder {
        fn arm(&mut self, timer: Timer, after: Duration) {
            self.calls.push(format!("arm {timer:?} {}ms", after.as_millis()));
        }

        fn cancel(&mut self, timer: Timer) {
            self.calls.push(format!("cancel {timer:?}"));
        }
    }

    #[test]
    fn apply_preserves_directive_order() {
        let step = Step {
            directives: vec![
                Directive::CancelTimer(Timer::Route(1)),
                Directive::ArmTimer {
                    timer: Timer::Route(2),
                    after: Duration::from_millis(300),
                },
            ],
            changed: None,
        };
        let mut host = Recorder::default();
        step.apply(&mut host);
        assert_eq!(host.calls, vec!["cancel Route(1)", "arm Route(2) 300ms"]);
    }

    #[test]
    fn state_serializes_with_flag_names() {
        let json = serde_json::to_value(LoadingState::BOOTING).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "isInitialLoading": true,
                "isRouteLoading": false,
                "hasInitiallyLoaded": false
            })
        );
    }

    #[test]
    fn loading_is_either_flag() {
        assert!(LoadingState::BOOTING.is_loading());
        let ready = LoadingState {
            initial_loading: false,
            route_loading: false,
            initially_loaded: true,
        };
        assert!(!ready.is_loading());
        assert!(LoadingState {
            route_loading: true,
            ..ready
        }
        .is_loading());
    }
}
