use crate::assets;
use leptos::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos_router::use_location;
use loading_gate::{GateConfig, LoadingGate, LoadingState, Step, Timer, TimerHost};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// Browser-side owner of one gate session.
struct BrowserGate {
    gate: RefCell<LoadingGate>,
    timers: RefCell<HashMap<Timer, TimeoutHandle>>,
    state: RwSignal<LoadingState>,
}

fn dispatch(host: &Rc<BrowserGate>, input: impl FnOnce(&mut LoadingGate) -> Step) {
    let step = input(&mut host.gate.borrow_mut());
    let mut timers = BrowserTimers(Rc::clone(host));
    step.apply(&mut timers);
    if let Some(next) = step.changed {
        host.state.set(next);
    }
}

struct BrowserTimers(Rc<BrowserGate>);

impl TimerHost for BrowserTimers {
    fn arm(&mut self, timer: Timer, after: Duration) {
        let weak = Rc::downgrade(&self.0);
        let armed = set_timeout_with_handle(
            move || {
                let Some(host) = weak.upgrade() else {
                    return;
                };
                host.timers.borrow_mut().remove(&timer);
                dispatch(&host, |gate| gate.timer_fired(timer));
            },
            after,
        );
        match armed {
            Ok(handle) => {
                if let Some(previous) = self.0.timers.borrow_mut().insert(timer, handle) {
                    previous.clear();
                }
            }
            Err(err) => tracing::warn!(?timer, ?err, "failed to arm gate timer"),
        }
    }

    fn cancel(&mut self, timer: Timer) {
        if let Some(handle) = self.0.timers.borrow_mut().remove(&timer) {
            handle.clear();
        }
    }
}

/// Runs a gate session for the lifetime of the calling component.
///
/// Must be called under a `<Router>`: every pathname change is reported to the
/// gate. Timers and asset listeners are released on cleanup.
pub fn use_loading_gate(config: GateConfig) -> ReadSignal<LoadingState> {
    let state = create_rw_signal(LoadingState::BOOTING);
    let host = Rc::new(BrowserGate {
        gate: RefCell::new(LoadingGate::new(config)),
        timers: RefCell::default(),
        state,
    });

    let location = use_location();
    let nav_host = Rc::clone(&host);
    create_effect(move |_| {
        let path = location.pathname.get();
        dispatch(&nav_host, |gate| gate.navigate(&path));
    });

    dispatch(&host, LoadingGate::start);

    let (watch, ready) = assets::watch(&site_content::critical_images());
    let weak = Rc::downgrade(&host);
    spawn_local(async move {
        ready.await;
        if let Some(host) = weak.upgrade() {
            dispatch(&host, LoadingGate::assets_ready);
        }
    });

    on_cleanup(move || {
        drop(watch);
        dispatch(&host, LoadingGate::dispose);
    });

    state.read_only()
}
