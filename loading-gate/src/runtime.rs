use crate::config::GateConfig;
use crate::machine::LoadingGate;
use crate::state::{LoadingState, Step, Timer, TimerHost};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

enum Control {
    Navigate(String),
    Dispose,
}

/// Owner of a gate session running on a tokio task.
///
/// Dropping the handle disposes the session.
pub struct GateHandle {
    control: mpsc::UnboundedSender<Control>,
    state: watch::Receiver<LoadingState>,
    task: JoinHandle<()>,
}

impl GateHandle {
    pub fn state(&self) -> LoadingState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.state.clone()
    }

    pub fn navigate(&self, path: impl Into<String>) {
        let _ = self.control.send(Control::Navigate(path.into()));
    }

    /// Cancels outstanding timers and waits for the session task to exit.
    pub async fn dispose(self) {
        let _ = self.control.send(Control::Dispose);
        let _ = self.task.await;
    }
}

/// Starts a session. `assets` resolves once fonts and every gating image have
/// loaded or errored; it may never resolve.
pub fn spawn<F>(config: GateConfig, initial_path: impl Into<String>, assets: F) -> GateHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    let (control_tx, control_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(LoadingState::BOOTING);
    let initial_path: String = initial_path.into();
    let mut gate = LoadingGate::new(config);
    gate.navigate(&initial_path);

    let task = tokio::spawn(run(gate, control_rx, state_tx, assets));
    GateHandle {
        control: control_tx,
        state: state_rx,
        task,
    }
}

struct TokioTimers {
    fired: mpsc::UnboundedSender<Timer>,
    pending: HashMap<Timer, JoinHandle<()>>,
}

impl TimerHost for TokioTimers {
    fn arm(&mut self, timer: Timer, after: Duration) {
        let fired = self.fired.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = fired.send(timer);
        });
        if let Some(previous) = self.pending.insert(timer, handle) {
            previous.abort();
        }
    }

    fn cancel(&mut self, timer: Timer) {
        if let Some(handle) = self.pending.remove(&timer) {
            handle.abort();
        }
    }
}

impl TokioTimers {
    fn abort_all(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

async fn run<F>(
    mut gate: LoadingGate,
    mut control: mpsc::UnboundedReceiver<Control>,
    state: watch::Sender<LoadingState>,
    assets: F,
) where
    F: Future<Output = ()> + Send + 'static,
{
    let (fired_tx, mut fired_rx) = mpsc::unbounded_channel();
    let mut timers = TokioTimers {
        fired: fired_tx,
        pending: HashMap::new(),
    };
    let publish = |step: &Step| {
        if let Some(next) = step.changed {
            let _ = state.send(next);
        }
    };

    let step = gate.start();
    step.apply(&mut timers);
    publish(&step);

    tokio::pin!(assets);
    let mut assets_done = false;

    loop {
        let step = tokio::select! {
            biased;
            msg = control.recv() => match msg {
                Some(Control::Navigate(path)) => gate.navigate(&path),
                Some(Control::Dispose) | None => break,
            },
            Some(timer) = fired_rx.recv() => {
                timers.pending.remove(&timer);
                gate.timer_fired(timer)
            }
            _ = &mut assets, if !assets_done => {
                assets_done = true;
                gate.assets_ready()
            }
        };
        step.apply(&mut timers);
        publish(&step);
    }

    let step = gate.dispose();
    step.apply(&mut timers);
    timers.abort_all();
}
