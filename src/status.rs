use motion_core::LifecycleState;
use std::cell::Cell;

/// Lifecycle state as last read from a surface, for queries that arrive
/// while the surface is borrowed by one of its own callbacks.
#[derive(Debug)]
pub struct StateCache {
    last: Cell<LifecycleState>,
    detach_deferred: Cell<bool>,
}

impl Default for StateCache {
    fn default() -> Self {
        Self {
            last: Cell::new(LifecycleState::Detached),
            detach_deferred: Cell::new(false),
        }
    }
}

impl StateCache {
    pub fn record(&self, state: LifecycleState) {
        self.last.set(state);
        if state == LifecycleState::Detached {
            self.detach_deferred.set(false);
        }
    }

    pub fn defer_detach(&self) {
        self.detach_deferred.set(true);
    }

    /// `live` is `None` when the surface could not be borrowed.
    pub fn resolve(&self, live: Option<LifecycleState>) -> LifecycleState {
        match live {
            Some(state) => {
                self.record(state);
                state
            }
            None if self.detach_deferred.get() => LifecycleState::Detaching,
            None => self.last.get(),
        }
    }
}
