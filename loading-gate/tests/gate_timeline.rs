mod common;

use common::{Sim, scenario_config};
use loading_gate::{LoadingState, Timer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn ceiling_bounds_first_load_when_assets_never_resolve() {
    let mut sim = Sim::new(scenario_config());
    sim.start();
    sim.advance_to(999);
    assert!(sim.state().initial_loading);
    sim.advance_to(1000);
    assert!(!sim.state().initial_loading);
    assert_eq!(sim.ready_at(), Some(1000));
}

#[test]
fn floor_holds_placeholder_when_assets_are_instant() {
    let mut sim = Sim::new(scenario_config());
    sim.start();
    sim.assets_ready();
    sim.advance_to(399);
    assert!(sim.state().initial_loading);
    sim.advance_to(400);
    assert!(!sim.state().initial_loading);
    assert!(sim.pending().is_empty(), "ceiling must be cancelled once ready");
}

#[test]
fn assets_between_floor_and_ceiling_finish_on_arrival() {
    let mut sim = Sim::new(scenario_config());
    sim.start();
    sim.advance_to(650);
    assert!(sim.state().initial_loading);
    sim.assets_ready();
    assert_eq!(sim.ready_at(), Some(650));
    assert!(sim.pending().is_empty());
}

#[test]
fn end_to_end_navigation_scenario() {
    let mut sim = Sim::new(scenario_config());
    sim.navigate("/");
    sim.start();
    sim.assets_ready();

    assert!(sim.state().initial_loading);
    sim.advance_to(399);
    assert!(sim.state().initial_loading);
    sim.advance_to(401);
    assert!(!sim.state().initial_loading);

    sim.advance_to(500);
    sim.navigate("/projects");
    sim.advance_to(501);
    assert!(sim.state().route_loading);

    sim.advance_to(750);
    sim.navigate("/projects/x");
    sim.advance_to(801);
    assert!(sim.state().route_loading, "window restarted by second navigation");
    sim.advance_to(1049);
    assert!(sim.state().route_loading);
    sim.advance_to(1051);
    assert!(!sim.state().route_loading);
}

#[test]
fn single_route_window_closes_after_its_duration() {
    let mut sim = Sim::new(scenario_config());
    sim.navigate("/");
    sim.start();
    sim.assets_ready();
    sim.advance_to(500);
    sim.navigate("/projects");
    sim.advance_to(799);
    assert!(sim.state().route_loading);
    sim.advance_to(801);
    assert!(!sim.state().route_loading);
}

#[test]
fn redispatching_current_path_does_not_reopen_window() {
    let mut sim = Sim::new(scenario_config());
    sim.navigate("/");
    sim.start();
    sim.assets_ready();
    sim.advance_to(500);
    sim.navigate("/projects");
    sim.advance_to(900);
    assert!(!sim.state().route_loading);

    sim.navigate("/projects");
    assert!(!sim.state().route_loading);
    assert!(sim.pending().is_empty());
}

#[test]
fn navigations_during_boot_never_set_route_loading() {
    let mut sim = Sim::new(scenario_config());
    sim.start();
    for (t, path) in [(10, "/"), (120, "/services"), (380, "/projects/bridge")] {
        sim.advance_to(t);
        sim.navigate(path);
        assert!(!sim.state().route_loading);
    }
    sim.advance_to(2000);
    assert!(!sim.state().route_loading);
    assert_eq!(sim.gate.current_path(), Some("/projects/bridge"));
}

#[test]
fn dispose_leaves_no_timers_behind() {
    let mut sim = Sim::new(scenario_config());
    sim.navigate("/");
    sim.start();
    sim.assets_ready();
    sim.advance_to(450);
    sim.navigate("/blog");
    assert_eq!(sim.pending(), vec![Timer::Route(1)]);

    sim.dispose();
    assert!(sim.pending().is_empty());
    let frozen = sim.state();
    sim.navigate("/contact");
    sim.advance_to(5000);
    assert_eq!(sim.state(), frozen);
}

#[derive(Clone, Debug)]
enum Event {
    Wait(u64),
    Assets,
    Navigate(u8),
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (1u64..400).prop_map(Event::Wait),
        Just(Event::Assets),
        (0u8..4).prop_map(Event::Navigate),
    ]
}

proptest! {
    #[test]
    fn gate_invariants_hold_for_any_event_order(
        events in proptest::collection::vec(event(), 0..40),
        floor in 0u64..600,
        ceiling_extra in 0u64..800,
        route in 1u64..500,
    ) {
        let config = loading_gate::GateConfig {
            initial_load_duration: common::ms(floor + ceiling_extra),
            route_transition_duration: common::ms(route),
            min_loading_time: common::ms(floor),
        };
        let ceiling = floor + ceiling_extra;
        let mut sim = Sim::new(config);
        sim.navigate("/");
        sim.start();

        let mut assets_at = None;
        for ev in events {
            match ev {
                Event::Wait(d) => sim.advance_to(sim.now() + d),
                Event::Assets => {
                    assets_at.get_or_insert(sim.now());
                    sim.assets_ready();
                }
                Event::Navigate(n) => sim.navigate(&format!("/p/{n}")),
            }
        }
        sim.advance_to(sim.now() + ceiling + route + 1);

        let flips = sim
            .history
            .windows(2)
            .filter(|w| !w[0].1.initially_loaded && w[1].1.initially_loaded)
            .count();
        prop_assert_eq!(flips, 1);

        let ready_at = sim.ready_at().expect("gate always becomes ready");
        prop_assert!(ready_at <= ceiling);
        prop_assert!(ready_at >= floor);
        if let Some(t) = assets_at {
            prop_assert_eq!(ready_at, floor.max(t.min(ceiling)));
        } else {
            prop_assert_eq!(ready_at, ceiling);
        }

        for (_, state) in &sim.history {
            prop_assert!(!(state.route_loading && !state.initially_loaded));
            prop_assert!(state.initial_loading != state.initially_loaded);
        }
        prop_assert_eq!(
            sim.state(),
            LoadingState { initial_loading: false, route_loading: false, initially_loaded: true }
        );
    }
}
