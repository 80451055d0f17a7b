mod common;

use common::{count, Call, FakeHost};
use glam::Vec2;
use motion_core::*;

#[test]
fn lead_stays_ahead_of_followers_until_settled() {
    // One lead plus three followers, progressively slower.
    let mut trail = TrailCoordinator::new([0.03, 0.1, 0.2, 0.4], Vec2::ZERO, 0.05).unwrap();
    trail.set_target(Vec2::new(200.0, 0.0));

    let mut ts = 0.0;
    assert!(trail.frame(ts));
    for _ in 0..600 {
        ts += 16.0;
        let moving = trail.frame(ts);
        let e = trail.entities();
        let lead = e[0].distance_to_target();
        let slowest = e[3].distance_to_target();
        if lead > 0.0 || slowest > 0.0 {
            assert!(lead <= slowest, "lead {lead} behind slowest {slowest} at {ts}");
        }
        if !e[3].is_settled() && !e[0].is_settled() {
            assert!(lead < slowest);
        }
        if !moving {
            break;
        }
    }
    assert!(trail.entities().iter().all(|e| e.is_settled()));
}

#[test]
fn one_fast_frame_moves_lead_but_not_slowest_follower() {
    let mut trail = TrailCoordinator::new([0.01, 1.0, 1.0, 1.0], Vec2::ZERO, 0.05).unwrap();
    trail.set_target(Vec2::new(200.0, 0.0));
    trail.frame(0.0);
    trail.frame(80.0);
    let e = trail.entities();
    assert!(e[0].distance_to_target() < 1.0, "lead near target");
    assert!(e[3].distance_to_target() > 180.0, "follower still near start");
}

#[test]
fn every_entity_receives_the_same_target() {
    let mut trail = TrailCoordinator::new([0.03, 0.16, 0.16], Vec2::ZERO, 0.05).unwrap();
    trail.set_target(Vec2::new(5.0, 5.0));
    trail.set_target(Vec2::new(40.0, -3.0));
    assert!(trail
        .entities()
        .iter()
        .all(|e| e.target() == Vec2::new(40.0, -3.0)));
}

#[test]
fn config_time_constants_default_to_fast_lead_slow_followers() {
    let config = TrailConfig::default();
    assert_eq!(config.time_constant(0), config.fast_tau);
    assert_eq!(config.time_constant(1), config.slow_tau);
    assert_eq!(config.time_constant(2), config.slow_tau);

    let custom = TrailConfig {
        time_constants: vec![0.02, 0.1, 0.3],
        ..TrailConfig::default()
    };
    assert_eq!(custom.time_constant(2), 0.3);
}

#[test]
fn cursor_trail_runs_only_while_moving() {
    let (host, log) = FakeHost::new();
    let mut surface = Surface::new(CursorTrail::new(TrailConfig::default()).unwrap());
    surface
        .attach(host, Rect::new(0.0, 0.0, 1280.0, 720.0), 0.0)
        .unwrap();
    assert!(!surface.has_pending_frame(), "idle trail schedules nothing");

    surface.handle_input(
        InputEvent::PointerMove {
            client: Vec2::new(300.0, 200.0),
            ts: 1.0,
        },
        None,
    );
    assert!(surface.has_pending_frame());

    let mut ts = 10.0;
    let mut last = None;
    while surface.has_pending_frame() {
        last = surface.on_frame(ts);
        ts += 16.0;
        assert!(ts < 10_000.0, "trail never settled");
    }
    let out = last.expect("frames produced output");
    assert_eq!(out.blobs.len(), 3);
    for blob in &out.blobs {
        assert!(blob.position.distance(Vec2::new(300.0, 200.0)) < 0.2);
    }
    assert_eq!(out.blobs[2].size, 18.0);
    assert_eq!(out.blobs[2].inner_offset(), 3.0);
    assert!(count(&log, |c| matches!(c, Call::RequestFrame(_))) > 1);
}

#[test]
fn mismatched_trail_arrays_are_rejected() {
    let config = TrailConfig {
        count: 0,
        ..TrailConfig::default()
    };
    assert!(matches!(
        CursorTrail::new(config),
        Err(ConfigError::TrailLengthMismatch { field: "sizes", .. })
    ));

    let config = TrailConfig {
        opacities: vec![0.5, 0.5],
        ..TrailConfig::default()
    };
    assert!(CursorTrail::new(config).is_err());

    let config = TrailConfig {
        slow_tau: 0.0,
        ..TrailConfig::default()
    };
    assert!(matches!(
        CursorTrail::new(config),
        Err(ConfigError::InvalidTimeConstant { .. })
    ));
}

#[test]
fn zero_settle_epsilon_trail_goes_idle() {
    let mut trail = TrailCoordinator::new([0.03, 0.16, 0.16], Vec2::ZERO, 0.0).unwrap();
    trail.set_target(Vec2::new(640.0, 360.0));
    let mut ts = 0.0;
    let mut frames = 0;
    while trail.frame(ts) {
        ts += 16.0;
        frames += 1;
        assert!(frames < 5000, "trail kept animating");
    }
    assert!(trail
        .entities()
        .iter()
        .all(|e| e.current() == Vec2::new(640.0, 360.0)));
}

#[test]
fn zero_settle_epsilon_is_rejected_in_config() {
    let config = TrailConfig {
        settle_epsilon: 0.0,
        ..TrailConfig::default()
    };
    assert!(matches!(
        CursorTrail::new(config),
        Err(ConfigError::OutOfRange {
            name: "settleEpsilon",
            ..
        })
    ));
}
