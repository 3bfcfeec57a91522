//! Integration tests for animated transitions and re-targeting.

use std::sync::Arc;
use std::time::{Duration, Instant};

use lattice_menu_icon::animation::{DEFAULT_DURATION, Easing, MenuTransition, TransitionSpec};
use lattice_menu_icon::geometry::Channel;
use lattice_menu_icon::{AnimatedMenuIcon, Dp, MenuIconConfig, MenuState, MenuToggle, resolve};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn linear() -> TransitionSpec {
    TransitionSpec::default().with_easing(Easing::Linear)
}

#[test]
fn test_default_duration_is_300ms() {
    assert_eq!(DEFAULT_DURATION, ms(300));
    assert_eq!(MenuIconConfig::default().transition.duration, ms(300));
}

#[test]
fn test_retarget_continues_from_in_flight_value() {
    let start = Instant::now();
    let mut transition = MenuTransition::new(192.0, MenuState::Closed, linear());
    transition.set_target(MenuState::Open, start);

    let flip = start + ms(150);
    let before = transition.frame_at(flip);
    assert!(before.running);

    assert!(transition.set_target(MenuState::Closed, flip));
    let after = transition.frame_at(flip);

    // No jump at the instant of interruption.
    assert_eq!(after.layout, before.layout);
    assert_eq!(after.target, MenuState::Closed);

    // The new run starts from the mid-flight value, not the closed rest value.
    let tween = transition.tween(Channel::MiddleOpacity);
    assert!((tween.start_value() - 0.5).abs() < 1e-3);
    assert_eq!(tween.target(), 1.0);

    let outer = transition.tween(Channel::OuterStartX);
    assert!((outer.start_value() - 44.0).abs() < 1e-3);

    // Halfway back: midway between 44 and 32.
    let midway = transition.frame_at(flip + ms(150));
    assert!((midway.layout.top().start_x - 38.0).abs() < 1e-3);
    assert!((midway.layout.middle().opacity - 0.75).abs() < 1e-3);

    // The reverse run takes a full duration from the interruption.
    assert!(transition.is_running(flip + ms(299)));
    let done = transition.frame_at(flip + ms(300));
    assert!(!done.running);
    assert_eq!(done.layout, resolve(MenuState::Closed, 192.0));
}

#[test]
fn test_changing_timing_mid_flight_keeps_position() {
    let start = Instant::now();
    let mut transition = MenuTransition::new(192.0, MenuState::Closed, linear());
    transition.set_target(MenuState::Open, start);

    let change = start + ms(150);
    let before = transition.frame_at(change);
    transition.set_spec(linear().with_duration(ms(600)), change);
    let after = transition.frame_at(change);

    assert_eq!(after.layout, before.layout);
    assert!((after.layout.top().start_x - 44.0).abs() < 1e-3);

    // The remaining 12px of the outer start x take the new 600ms.
    let midway = transition.frame_at(change + ms(300));
    assert!((midway.layout.top().start_x - 50.0).abs() < 1e-3);
    assert!(transition.is_running(change + ms(599)));
    let done = transition.frame_at(change + ms(600));
    assert!(!done.running);
    assert_eq!(done.layout, resolve(MenuState::Open, 192.0));
}

#[test]
fn test_widget_timing_change_mid_flight_keeps_position() {
    let config = MenuIconConfig::new()
        .with_size(Dp(192.0))
        .with_transition(linear());
    let mut icon = AnimatedMenuIcon::new(config);

    let start = Instant::now();
    icon.toggle(start);
    let change = start + ms(150);
    let before = icon.frame(change);
    icon.set_transition_spec(linear().with_duration(ms(600)), change);

    assert_eq!(icon.frame(change).layout, before.layout);
    assert_eq!(icon.transition_spec().duration, ms(600));
}

#[test]
fn test_eased_retarget_has_no_discontinuity() {
    let start = Instant::now();
    let mut transition = MenuTransition::new(96.0, MenuState::Open, TransitionSpec::default());
    transition.set_target(MenuState::Closed, start);

    for flip_ms in [1, 40, 120, 250, 299] {
        let flip = start + ms(flip_ms);
        let mut interrupted = transition.clone();
        let before = interrupted.frame_at(flip);
        interrupted.set_target(MenuState::Open, flip);
        let after = interrupted.frame_at(flip);
        assert_eq!(before.layout, after.layout, "jump when interrupted at {flip_ms}ms");
    }
}

#[test]
fn test_every_frame_stays_between_endpoints() {
    let start = Instant::now();
    let mut transition = MenuTransition::new(48.0, MenuState::Closed, TransitionSpec::default());
    transition.set_target(MenuState::Open, start);

    let closed = resolve(false, 48.0);
    let open = resolve(true, 48.0);
    for step in 0..=20 {
        let frame = transition.frame_at(start + ms(step * 15));
        let opacity = frame.layout.middle().opacity;
        assert!((0.0..=1.0).contains(&opacity));

        let x = frame.layout.top().start_x;
        let (lo, hi) = (closed.top().start_x, open.top().start_x);
        assert!(x >= lo - 1e-4 && x <= hi + 1e-4, "x {x} outside [{lo}, {hi}]");
    }
}

#[test]
fn test_icon_follows_host_toggle_mid_flight() {
    let toggle = Arc::new(MenuToggle::new(MenuState::Closed));
    let config = MenuIconConfig::new()
        .with_size(Dp(192.0))
        .with_transition(linear());
    let mut icon = AnimatedMenuIcon::with_toggle(config, toggle.clone());

    let start = Instant::now();
    toggle.set_open(true);
    let first = icon.frame(start);
    assert_eq!(first.layout, resolve(false, 192.0));
    assert!(first.running);

    toggle.set_open(false);
    let mid = icon.frame(start + ms(150));
    assert_eq!(mid.target, MenuState::Closed);
    assert!((mid.layout.middle().opacity - 0.5).abs() < 1e-3);

    let end = icon.frame(start + ms(450));
    assert!(!end.running);
    assert_eq!(end.layout, resolve(false, 192.0));
}

#[test]
fn test_instant_spec_never_animates() {
    let now = Instant::now();
    let mut transition = MenuTransition::new(24.0, MenuState::Closed, TransitionSpec::instant());
    transition.set_target(MenuState::Open, now);

    let frame = transition.frame_at(now);
    assert!(!frame.running);
    assert_eq!(frame.layout, resolve(true, 24.0));
}
