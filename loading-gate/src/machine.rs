use crate::config::{as_millis, GateConfig};
use crate::state::{Directive, LoadingState, Step, Timer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Boot {
    started: bool,
    assets_ready: bool,
    ceiling_reached: bool,
    floor_elapsed: bool,
}

impl Boot {
    fn can_finish(&self) -> bool {
        (self.assets_ready || self.ceiling_reached) && self.floor_elapsed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Booting(Boot),
    Ready,
    Disposed,
}

/// First-load and route-transition gate for one session.
///
/// The gate never touches a clock. Every input returns a [`Step`] describing
/// which timers to arm or cancel; the host runs them and reports back through
/// [`LoadingGate::timer_fired`].
#[derive(Clone, Debug)]
pub struct LoadingGate {
    config: GateConfig,
    phase: Phase,
    state: LoadingState,
    path: Option<String>,
    generation: u64,
}

impl LoadingGate {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config: config.clamped(),
            phase: Phase::Booting(Boot::default()),
            state: LoadingState::BOOTING,
            path: None,
            generation: 0,
        }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn state(&self) -> LoadingState {
        self.state
    }

    pub fn current_path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == Phase::Disposed
    }

    /// Starts the session clock. Calling it again is a no-op.
    pub fn start(&mut self) -> Step {
        let Phase::Booting(boot) = &mut self.phase else {
            return Step::default();
        };
        if boot.started {
            return Step::default();
        }
        boot.started = true;
        tracing::debug!(
            floor_ms = as_millis(self.config.min_loading_time),
            ceiling_ms = as_millis(self.config.initial_load_duration),
            "loading gate session started"
        );

        let mut step = Step::default();
        step.directives.push(Directive::ArmTimer {
            timer: Timer::Floor,
            after: self.config.min_loading_time,
        });
        step.directives.push(Directive::ArmTimer {
            timer: Timer::Ceiling,
            after: self.config.initial_load_duration,
        });
        step
    }

    /// Fonts and every gating image have loaded or errored.
    pub fn assets_ready(&mut self) -> Step {
        let Phase::Booting(boot) = &mut self.phase else {
            return Step::default();
        };
        boot.assets_ready = true;
        self.try_finish()
    }

    pub fn timer_fired(&mut self, timer: Timer) -> Step {
        match timer {
            Timer::Floor | Timer::Ceiling => {
                let Phase::Booting(boot) = &mut self.phase else {
                    return Step::default();
                };
                if !boot.started {
                    return Step::default();
                }
                if timer == Timer::Floor {
                    boot.floor_elapsed = true;
                } else {
                    boot.ceiling_reached = true;
                }
                self.try_finish()
            }
            Timer::Route(generation) if self.phase == Phase::Ready => {
                self.close_route_window(generation)
            }
            Timer::Route(_) => Step::default(),
        }
    }

    /// Reports the active path. Only a change of path after the first load
    /// opens a route-loading window.
    pub fn navigate(&mut self, path: &str) -> Step {
        if self.phase == Phase::Disposed {
            return Step::default();
        }
        if self.path.as_deref() == Some(path) {
            return Step::default();
        }
        let previous = self.path.replace(path.to_string());
        if self.phase != Phase::Ready {
            return Step::default();
        }
        // First path reported after the latch has nothing to transition from.
        if previous.is_none() {
            return Step::default();
        }

        let mut step = Step::default();
        if self.state.route_loading {
            step.directives
                .push(Directive::CancelTimer(Timer::Route(self.generation)));
        }
        self.generation += 1;
        step.directives.push(Directive::ArmTimer {
            timer: Timer::Route(self.generation),
            after: self.config.route_transition_duration,
        });
        tracing::debug!(path, generation = self.generation, "route loading window opened");
        self.set_state(
            LoadingState {
                route_loading: true,
                ..self.state
            },
            &mut step,
        );
        step
    }

    /// Tears the session down: cancels everything still pending and ignores
    /// any later input.
    pub fn dispose(&mut self) -> Step {
        let mut step = Step::default();
        match self.phase {
            Phase::Disposed => return step,
            Phase::Booting(boot) if boot.started => {
                if !boot.floor_elapsed {
                    step.directives.push(Directive::CancelTimer(Timer::Floor));
                }
                if !boot.ceiling_reached {
                    step.directives.push(Directive::CancelTimer(Timer::Ceiling));
                }
            }
            Phase::Booting(_) => {}
            Phase::Ready => {
                if self.state.route_loading {
                    step.directives
                        .push(Directive::CancelTimer(Timer::Route(self.generation)));
                }
            }
        }
        self.phase = Phase::Disposed;
        tracing::debug!("loading gate disposed");
        step
    }

    fn try_finish(&mut self) -> Step {
        let Phase::Booting(boot) = self.phase else {
            return Step::default();
        };
        if !boot.can_finish() {
            return Step::default();
        }
        let trigger = if boot.assets_ready { "assets" } else { "ceiling" };

        let mut step = Step::default();
        if !boot.ceiling_reached {
            step.directives.push(Directive::CancelTimer(Timer::Ceiling));
        }
        self.phase = Phase::Ready;
        tracing::info!(trigger, "initial load complete");
        self.set_state(
            LoadingState {
                initial_loading: false,
                route_loading: false,
                initially_loaded: true,
            },
            &mut step,
        );
        step
    }

    fn close_route_window(&mut self, generation: u64) -> Step {
        let mut step = Step::default();
        if generation != self.generation || !self.state.route_loading {
            tracing::trace!(generation, current = self.generation, "stale route timer ignored");
            return step;
        }
        tracing::debug!(generation, "route loading window closed");
        self.set_state(
            LoadingState {
                route_loading: false,
                ..self.state
            },
            &mut step,
        );
        step
    }

    fn set_state(&mut self, next: LoadingState, step: &mut Step) {
        if next != self.state {
            self.state = next;
            step.changed = Some(next);
        }
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}
