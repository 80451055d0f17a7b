use glam::Vec2;
use motion_core::*;

fn orientation_on() -> OrientationConfig {
    OrientationConfig {
        enabled: true,
        ..OrientationConfig::default()
    }
}

#[test]
fn pointer_events_map_into_surface_space() {
    let adapter = InputAdapter::new(&OrientationConfig::default());
    let surface = Rect::new(100.0, 50.0, 300.0, 400.0);
    let ev = InputEvent::PointerMove {
        client: Vec2::new(160.0, 90.0),
        ts: 0.0,
    };
    assert_eq!(
        adapter.target_for(&ev, &surface),
        Some(TargetUpdate::Track(Vec2::new(60.0, 40.0)))
    );
    let enter = InputEvent::PointerEnter {
        client: Vec2::new(100.0, 50.0),
        ts: 0.0,
    };
    assert_eq!(
        adapter.target_for(&enter, &surface),
        Some(TargetUpdate::Track(Vec2::ZERO))
    );
}

#[test]
fn pointer_leave_recentres() {
    let adapter = InputAdapter::new(&OrientationConfig::default());
    let surface = Rect::new(100.0, 50.0, 300.0, 400.0);
    assert_eq!(
        adapter.target_for(&InputEvent::PointerLeave { ts: 0.0 }, &surface),
        Some(TargetUpdate::Recentre(Vec2::new(150.0, 200.0)))
    );
}

#[test]
fn orientation_maps_with_beta_offset_and_clamps() {
    let surface = Rect::new(0.0, 0.0, 300.0, 400.0);
    // Resting tilt lands on the centre.
    assert_eq!(
        orientation_target(20.0, 0.0, &surface, 5.0, 20.0),
        Some(Vec2::new(150.0, 200.0))
    );
    assert_eq!(
        orientation_target(30.0, -10.0, &surface, 5.0, 20.0),
        Some(Vec2::new(100.0, 250.0))
    );
    assert_eq!(
        orientation_target(90.0, 90.0, &surface, 5.0, 20.0),
        Some(Vec2::new(300.0, 400.0))
    );
    assert_eq!(
        orientation_target(-90.0, -90.0, &surface, 5.0, 20.0),
        Some(Vec2::ZERO)
    );
    assert_eq!(
        orientation_target(20.0, 0.0, &Rect::default(), 5.0, 20.0),
        None
    );
}

#[test]
fn gate_requires_a_gesture_and_asks_once() {
    let mut gate = OrientationGate::new(&orientation_on());
    assert_eq!(gate.state(), OrientationState::Idle);
    assert!(!gate.accepts_samples());
    assert!(gate.on_user_gesture(true));
    assert!(!gate.on_user_gesture(true), "second tap while pending");
    assert!(gate.resolve(PermissionOutcome::Granted));
    assert!(gate.accepts_samples());
    assert!(!gate.on_user_gesture(true));
}

#[test]
fn gate_stays_off_without_secure_context() {
    let mut gate = OrientationGate::new(&orientation_on());
    assert!(!gate.on_user_gesture(false));
    assert_eq!(gate.state(), OrientationState::Idle);

    let mut lax = OrientationGate::new(&OrientationConfig {
        require_secure_context: false,
        ..orientation_on()
    });
    assert!(lax.on_user_gesture(false));
}

#[test]
fn disabled_feature_never_requests() {
    let mut gate = OrientationGate::new(&OrientationConfig::default());
    assert_eq!(gate.state(), OrientationState::Off);
    assert!(!gate.on_user_gesture(true));
    assert!(!gate.resolve(PermissionOutcome::Granted));
    gate.reset();
    assert_eq!(gate.state(), OrientationState::Off);
}

#[test]
fn denial_and_absence_degrade_silently() {
    for outcome in [PermissionOutcome::Denied, PermissionOutcome::Unavailable] {
        let mut gate = OrientationGate::new(&orientation_on());
        assert!(gate.on_user_gesture(true));
        assert!(!gate.resolve(outcome));
        assert_eq!(gate.state(), OrientationState::Disabled);
        assert!(!gate.on_user_gesture(true));
        gate.reset();
        assert_eq!(gate.state(), OrientationState::Idle);
    }
}

#[test]
fn unsolicited_permission_result_is_ignored() {
    let mut gate = OrientationGate::new(&orientation_on());
    assert!(!gate.resolve(PermissionOutcome::Granted));
    assert!(!gate.accepts_samples());
}

#[test]
fn orientation_samples_only_flow_once_granted() {
    let surface = Rect::new(0.0, 0.0, 300.0, 400.0);
    let sample = InputEvent::OrientationSample {
        beta: Some(30.0),
        gamma: Some(-10.0),
        ts: 0.0,
    };
    let mut adapter = InputAdapter::new(&orientation_on());
    assert_eq!(adapter.target_for(&sample, &surface), None);

    adapter.gate_mut().on_user_gesture(true);
    adapter.gate_mut().resolve(PermissionOutcome::Granted);
    assert_eq!(
        adapter.target_for(&sample, &surface),
        Some(TargetUpdate::Track(Vec2::new(100.0, 250.0)))
    );

    let partial = InputEvent::OrientationSample {
        beta: None,
        gamma: Some(3.0),
        ts: 0.0,
    };
    assert_eq!(adapter.target_for(&partial, &surface), None);
}

#[test]
fn rect_emptiness() {
    assert!(Rect::default().is_empty());
    assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
    assert!(!Rect::new(-5.0, -5.0, 1.0, 1.0).is_empty());
}
