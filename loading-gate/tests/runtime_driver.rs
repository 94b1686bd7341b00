#![cfg(feature = "runtime")]

mod common;

use common::{ms, scenario_config};
use loading_gate::runtime;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};

async fn at(start: Instant, t: u64) {
    sleep_until(start + Duration::from_millis(t)).await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn end_to_end_navigation_scenario() {
    let start = Instant::now();
    let gate = runtime::spawn(scenario_config(), "/", std::future::ready(()));

    assert!(gate.state().initial_loading);
    at(start, 399).await;
    assert!(gate.state().initial_loading);
    at(start, 401).await;
    assert!(!gate.state().initial_loading);
    assert!(gate.state().initially_loaded);

    at(start, 500).await;
    gate.navigate("/projects");
    at(start, 501).await;
    assert!(gate.state().route_loading);

    at(start, 750).await;
    gate.navigate("/projects/x");
    at(start, 801).await;
    assert!(gate.state().route_loading, "superseded timer must not clear the newer window");
    at(start, 1049).await;
    assert!(gate.state().route_loading);
    at(start, 1051).await;
    assert!(!gate.state().route_loading);

    gate.dispose().await;
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ceiling_releases_gate_when_assets_hang() {
    let start = Instant::now();
    let gate = runtime::spawn(scenario_config(), "/", std::future::pending::<()>());

    at(start, 999).await;
    assert!(gate.state().initial_loading);
    at(start, 1001).await;
    assert!(!gate.state().initial_loading);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn slow_assets_finish_between_floor_and_ceiling() {
    let start = Instant::now();
    let gate = runtime::spawn(scenario_config(), "/", tokio::time::sleep(ms(700)));

    at(start, 699).await;
    assert!(gate.state().initial_loading);
    at(start, 701).await;
    assert!(!gate.state().initial_loading);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn navigation_before_ready_is_ignored() {
    let start = Instant::now();
    let gate = runtime::spawn(scenario_config(), "/", std::future::ready(()));
    let mut updates = gate.subscribe();

    at(start, 100).await;
    gate.navigate("/services");
    at(start, 200).await;
    assert!(!gate.state().route_loading);

    updates.changed().await.expect("ready update");
    let ready = *updates.borrow_and_update();
    assert!(ready.initially_loaded);
    assert!(!ready.route_loading);
    assert!(Instant::now() >= start + ms(400));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn dropping_handle_stops_session() {
    let start = Instant::now();
    let gate = runtime::spawn(scenario_config(), "/", std::future::ready(()));
    let updates = gate.subscribe();
    drop(gate);

    at(start, 2000).await;
    assert!(updates.borrow().initial_loading, "disposed session never publishes");
    assert!(updates.has_changed().is_err(), "session task released its sender");
}
