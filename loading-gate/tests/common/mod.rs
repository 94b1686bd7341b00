use loading_gate::{GateConfig, LoadingGate, LoadingState, Step, Timer, TimerHost};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Default)]
struct VirtualTimers {
    now: u64,
    seq: u64,
    pending: BTreeMap<(u64, u64), Timer>,
}

impl TimerHost for VirtualTimers {
    fn arm(&mut self, timer: Timer, after: Duration) {
        let due = self.now + after.as_millis() as u64;
        self.pending.insert((due, self.seq), timer);
        self.seq += 1;
    }

    fn cancel(&mut self, timer: Timer) {
        self.pending.retain(|_, t| *t != timer);
    }
}

/// Deterministic millisecond clock driving a gate the way a host would.
pub struct Sim {
    pub gate: LoadingGate,
    now: u64,
    timers: VirtualTimers,
    pub history: Vec<(u64, LoadingState)>,
}

#[allow(dead_code)]
impl Sim {
    pub fn new(config: GateConfig) -> Self {
        Self {
            gate: LoadingGate::new(config),
            now: 0,
            timers: VirtualTimers::default(),
            history: vec![(0, LoadingState::BOOTING)],
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn state(&self) -> LoadingState {
        self.gate.state()
    }

    pub fn start(&mut self) {
        let step = self.gate.start();
        self.apply(step);
    }

    pub fn assets_ready(&mut self) {
        let step = self.gate.assets_ready();
        self.apply(step);
    }

    pub fn navigate(&mut self, path: &str) {
        let step = self.gate.navigate(path);
        self.apply(step);
    }

    pub fn dispose(&mut self) {
        let step = self.gate.dispose();
        self.apply(step);
    }

    pub fn pending(&self) -> Vec<Timer> {
        self.timers.pending.values().copied().collect()
    }

    /// Fires every timer due at or before `t`, in order, then parks the clock at `t`.
    pub fn advance_to(&mut self, t: u64) {
        assert!(t >= self.now, "time runs forward");
        loop {
            let Some((&key, &timer)) = self.timers.pending.iter().next() else {
                break;
            };
            if key.0 > t {
                break;
            }
            self.timers.pending.remove(&key);
            self.now = key.0;
            let step = self.gate.timer_fired(timer);
            self.apply(step);
        }
        self.now = t;
    }

    /// Time at which the latch flipped, if it has.
    pub fn ready_at(&self) -> Option<u64> {
        self.history
            .iter()
            .find(|(_, s)| s.initially_loaded)
            .map(|(t, _)| *t)
    }

    fn apply(&mut self, step: Step) {
        self.timers.now = self.now;
        step.apply(&mut self.timers);
        if let Some(next) = step.changed {
            self.history.push((self.now, next));
        }
    }
}

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

pub fn scenario_config() -> GateConfig {
    GateConfig {
        initial_load_duration: ms(1000),
        route_transition_duration: ms(300),
        min_loading_time: ms(400),
    }
}
