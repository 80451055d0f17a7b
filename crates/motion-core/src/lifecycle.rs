//! Per-surface lifecycle: `Detached -> Attaching -> Attached -> Detaching -> Detached`.

use crate::error::LifecycleError;
use crate::input::{InputEvent, PermissionOutcome, Rect};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Detached,
    Attaching,
    Attached,
    Detaching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken(pub i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Clears the card's `entering` flag.
    EnterTransition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    pub wake: bool,
    pub timer: Option<TimerRequest>,
    pub request_permission: bool,
    pub subscribe_orientation: bool,
}

impl Reaction {
    pub fn wake() -> Self {
        Self {
            wake: true,
            ..Self::default()
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

pub trait Effect {
    type Output;

    /// Create entities at their off-target start and begin the settle window.
    fn attach(&mut self, surface: &Rect, now_ms: f64) -> Reaction;

    fn input(&mut self, ev: &InputEvent, surface: &Rect) -> Reaction;

    /// Surface size changed. `measured` holds anchor centres when the host
    /// could measure them; empty means lay out from config.
    fn resize(&mut self, _surface: &Rect, _measured: &[Option<Vec2>]) -> Reaction {
        Reaction::none()
    }

    fn user_gesture(&mut self, _secure_context: bool) -> Reaction {
        Reaction::none()
    }

    fn permission(&mut self, _outcome: PermissionOutcome) -> Reaction {
        Reaction::none()
    }

    fn timer(&mut self, _kind: TimerKind) -> Reaction {
        Reaction::none()
    }

    /// Integrate one frame. Returns whether another frame is needed.
    fn frame(&mut self, ts_ms: f64, surface: &Rect) -> bool;

    fn output(&self) -> Self::Output;

    /// Destroy entities and transient state.
    fn detach(&mut self);
}

/// Platform resources owned by one attached surface.
pub trait Host {
    fn listen_input(&mut self);
    fn observe_resize(&mut self);
    fn request_frame(&mut self) -> Option<FrameToken>;
    fn cancel_frame(&mut self, token: FrameToken);
    fn set_timer(&mut self, timer: TimerRequest);
    /// Start the platform permission handshake; the answer comes back through
    /// [`Surface::permission_resolved`].
    fn request_orientation_permission(&mut self);
    fn subscribe_orientation(&mut self);
    fn unlisten(&mut self);
    fn clear_timers(&mut self);
    fn release(&mut self);
}

pub struct Surface<E: Effect, H: Host> {
    effect: E,
    host: Option<H>,
    state: LifecycleState,
    geometry: Rect,
    pending_frame: Option<FrameToken>,
}

impl<E: Effect, H: Host> Surface<E, H> {
    pub fn new(effect: E) -> Self {
        Self {
            effect,
            host: None,
            state: LifecycleState::Detached,
            geometry: Rect::default(),
            pending_frame: None,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.state == LifecycleState::Attached
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn attach(&mut self, host: H, geometry: Rect, now_ms: f64) -> Result<(), LifecycleError> {
        if self.state != LifecycleState::Detached {
            return Err(LifecycleError::NotDetached(self.state));
        }
        self.state = LifecycleState::Attaching;
        log::debug!("[surface] attaching {:?}", geometry);
        self.geometry = geometry;
        let host = self.host.insert(host);
        host.listen_input();
        let reaction = self.effect.attach(&geometry, now_ms);
        if let Some(host) = self.host.as_mut() {
            host.observe_resize();
        }
        self.state = LifecycleState::Attached;
        self.apply(reaction);
        Ok(())
    }

    /// Feed one input event. `geometry` is a fresh measurement when the host
    /// took one for this event.
    pub fn handle_input(&mut self, ev: InputEvent, geometry: Option<Rect>) {
        if !self.is_attached() {
            return;
        }
        if let Some(g) = geometry {
            self.geometry = g;
        }
        let reaction = self.effect.input(&ev, &self.geometry);
        self.apply(reaction);
    }

    pub fn user_gesture(&mut self, secure_context: bool) {
        if !self.is_attached() {
            return;
        }
        let reaction = self.effect.user_gesture(secure_context);
        self.apply(reaction);
    }

    pub fn permission_resolved(&mut self, outcome: PermissionOutcome) {
        if !self.is_attached() {
            return;
        }
        let reaction = self.effect.permission(outcome);
        self.apply(reaction);
    }

    pub fn on_resize(&mut self, geometry: Rect, measured: &[Option<Vec2>]) {
        if !self.is_attached() {
            return;
        }
        self.geometry = geometry;
        let reaction = self.effect.resize(&geometry, measured);
        self.apply(reaction);
    }

    pub fn on_timer(&mut self, kind: TimerKind) {
        if !self.is_attached() {
            return;
        }
        let reaction = self.effect.timer(kind);
        self.apply(reaction);
    }

    /// Animation-frame callback. `None` once detached, even for a callback
    /// that was scheduled before teardown.
    pub fn on_frame(&mut self, ts_ms: f64) -> Option<E::Output> {
        if !self.is_attached() {
            return None;
        }
        self.pending_frame = None;
        let keep_running = self.effect.frame(ts_ms, &self.geometry);
        let output = self.effect.output();
        if keep_running {
            self.request_frame();
        }
        Some(output)
    }

    /// Tear down. Idempotent and safe to call from inside a frame.
    pub fn detach(&mut self) {
        if self.state != LifecycleState::Attached && self.state != LifecycleState::Attaching {
            return;
        }
        self.state = LifecycleState::Detaching;
        if let Some(mut host) = self.host.take() {
            if let Some(token) = self.pending_frame.take() {
                host.cancel_frame(token);
            }
            host.unlisten();
            host.clear_timers();
            host.release();
        }
        self.pending_frame = None;
        self.effect.detach();
        self.state = LifecycleState::Detached;
        log::debug!("[surface] detached");
    }

    fn request_frame(&mut self) {
        if self.pending_frame.is_some() {
            return;
        }
        if let Some(host) = self.host.as_mut() {
            self.pending_frame = host.request_frame();
        }
    }

    fn apply(&mut self, reaction: Reaction) {
        if reaction.wake {
            self.request_frame();
        }
        let Some(host) = self.host.as_mut() else {
            return;
        };
        if let Some(timer) = reaction.timer {
            host.set_timer(timer);
        }
        if reaction.request_permission {
            host.request_orientation_permission();
        }
        if reaction.subscribe_orientation {
            host.subscribe_orientation();
        }
    }
}

impl<E: Effect, H: Host> Drop for Surface<E, H> {
    fn drop(&mut self) {
        self.detach();
    }
}
