// Host-side tests for the cached lifecycle state behind `isAttached`.

#![allow(dead_code)]
mod status {
    include!("../src/status.rs");
}

use motion_core::LifecycleState;
use status::StateCache;

#[test]
fn live_state_wins_and_is_remembered() {
    let cache = StateCache::default();
    assert_eq!(cache.resolve(None), LifecycleState::Detached);
    assert_eq!(
        cache.resolve(Some(LifecycleState::Attached)),
        LifecycleState::Attached
    );
    assert_eq!(cache.resolve(None), LifecycleState::Attached);
}

#[test]
fn busy_surface_reports_its_last_recorded_state() {
    let cache = StateCache::default();
    cache.record(LifecycleState::Attached);
    cache.record(LifecycleState::Detached);
    assert_eq!(cache.resolve(None), LifecycleState::Detached);
}

#[test]
fn deferred_detach_is_not_reported_as_attached() {
    let cache = StateCache::default();
    cache.record(LifecycleState::Attached);
    cache.defer_detach();
    assert_eq!(cache.resolve(None), LifecycleState::Detaching);

    cache.record(LifecycleState::Detached);
    assert_eq!(cache.resolve(None), LifecycleState::Detached);
}
