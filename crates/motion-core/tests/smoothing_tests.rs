use glam::Vec2;
use motion_core::*;

fn entity(tau: f32, at: Vec2) -> AnimatedEntity {
    AnimatedEntity::new(TauSchedule::constant(tau).unwrap(), at)
}

#[test]
fn smoothing_factor_matches_reference_scenario() {
    let k = smoothing_factor(0.1, 0.14);
    assert!((k - 0.5105).abs() < 1e-3, "k = {k}");

    let mut e = entity(0.14, Vec2::ZERO);
    e.set_target(Vec2::new(100.0, 100.0));
    e.integrate(0.1, 0.0, SETTLE);
    let c = e.current();
    assert!((c.x - 51.05).abs() < 0.1, "x = {}", c.x);
    assert!((c.y - 51.05).abs() < 0.1, "y = {}", c.y);
}

const SETTLE: f32 = 0.05;

#[test]
fn zero_dt_leaves_current_unchanged() {
    assert_eq!(smoothing_factor(0.0, 0.14), 0.0);
    assert_eq!(smoothing_factor(-0.5, 0.14), 0.0);
    assert_eq!(smoothing_factor(f32::NAN, 0.14), 0.0);

    let mut e = entity(0.14, Vec2::new(3.0, 4.0));
    e.set_target(Vec2::new(100.0, -20.0));
    e.integrate(0.0, 0.0, SETTLE);
    assert_eq!(e.current(), Vec2::new(3.0, 4.0));
    assert!(e.current().x.is_finite() && e.current().y.is_finite());
}

#[test]
fn converges_monotonically_without_overshoot() {
    for &tau in &[0.01_f32, 0.14, 0.6, 2.5] {
        let target = Vec2::new(250.0, -80.0);
        let mut e = entity(tau, Vec2::ZERO);
        e.set_target(target);
        let mut prev_gap = e.distance_to_target();
        for _ in 0..2000 {
            e.integrate(1.0 / 60.0, 0.0, 0.0);
            let gap = e.distance_to_target();
            assert!(gap <= prev_gap + 1e-4, "gap grew at tau {tau}");
            assert!(e.current().x <= target.x + 1e-3, "x overshot at tau {tau}");
            assert!(e.current().y >= target.y - 1e-3, "y overshot at tau {tau}");
            prev_gap = gap;
        }
        assert!(prev_gap < 0.5, "tau {tau} did not converge: {prev_gap}");
    }
}

#[test]
fn integration_is_frame_rate_independent() {
    let target = Vec2::new(100.0, 0.0);
    let mut coarse = entity(0.14, Vec2::ZERO);
    let mut fine = entity(0.14, Vec2::ZERO);
    coarse.set_target(target);
    fine.set_target(target);
    for _ in 0..6 {
        coarse.integrate(0.05, 0.0, SETTLE);
    }
    for _ in 0..18 {
        fine.integrate(0.05 / 3.0, 0.0, SETTLE);
    }
    assert!((coarse.current().x - fine.current().x).abs() < 1e-2);
}

#[test]
fn schedule_switches_regime_by_elapsed_time() {
    let s = TauSchedule::new(0.6, 0.14, 1200.0).unwrap();
    assert_eq!(s.tau_at(0.0), 0.6);
    assert_eq!(s.tau_at(1199.9), 0.6);
    assert_eq!(s.tau_at(1200.0), 0.14);
    assert_eq!(s.tau_at(50_000.0), 0.14);
}

#[test]
fn initial_regime_glides_slower() {
    let s = TauSchedule::new(0.6, 0.14, 1200.0).unwrap();
    let target = Vec2::new(100.0, 0.0);
    let mut early = AnimatedEntity::new(s, Vec2::ZERO);
    let mut late = AnimatedEntity::new(s, Vec2::ZERO);
    early.set_target(target);
    late.set_target(target);
    early.integrate(0.016, 100.0, SETTLE);
    late.integrate(0.016, 1500.0, SETTLE);
    assert!(early.current().x < late.current().x);
}

#[test]
fn non_positive_tau_is_a_configuration_error() {
    assert!(matches!(
        TauSchedule::constant(0.0),
        Err(ConfigError::InvalidTimeConstant { .. })
    ));
    assert!(TauSchedule::constant(-1.0).is_err());
    assert!(TauSchedule::new(0.6, f32::NAN, 10.0).is_err());
    assert!(TauSchedule::new(f32::INFINITY, 0.14, 10.0).is_err());
}

#[test]
fn frame_clock_yields_zero_on_first_tick_of_a_run() {
    let mut clock = FrameClock::default();
    assert_eq!(clock.tick(1000.0), 0.0);
    assert!((clock.tick(1016.0) - 0.016).abs() < 1e-6);
    clock.reset();
    assert_eq!(clock.tick(5000.0), 0.0);
    // Out-of-order timestamps never produce negative time.
    assert_eq!(clock.tick(4990.0), 0.0);
}

#[test]
fn settled_flag_tracks_target_assignment() {
    let mut e = entity(0.05, Vec2::ZERO);
    assert!(e.is_settled());
    e.set_target(Vec2::new(10.0, 0.0));
    assert!(!e.is_settled());
    for _ in 0..200 {
        if e.integrate(1.0 / 60.0, 0.0, SETTLE) {
            break;
        }
    }
    assert!(e.is_settled());
    e.set_target(Vec2::new(10.0, 0.0));
    assert!(!e.is_settled(), "any new target resumes motion");
}

#[test]
fn zero_epsilon_still_comes_to_rest_on_the_target() {
    for &tau in &[0.14_f32, 2.5] {
        let target = Vec2::new(250.0, -80.0);
        let mut e = entity(tau, Vec2::ZERO);
        e.set_target(target);
        let settled_after = (0..20_000).find(|_| e.integrate(1.0 / 60.0, 0.0, 0.0));
        assert!(settled_after.is_some(), "tau {tau} never settled");
        assert_eq!(e.current(), target);
        assert!(e.is_settled());
    }
}

#[test]
fn settling_lands_exactly_on_the_target() {
    let mut e = entity(0.14, Vec2::ZERO);
    e.set_target(Vec2::new(10.0, 10.0));
    while !e.integrate(1.0 / 60.0, 0.0, SETTLE) {}
    assert_eq!(e.current(), Vec2::new(10.0, 10.0));
    assert_eq!(e.distance_to_target(), 0.0);
}
