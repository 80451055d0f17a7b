use crate::config::CardConfig;
use crate::constants::{BACKGROUND_RANGE, ROTATE_X_DIVISOR, ROTATE_Y_DIVISOR};
use crate::error::ConfigError;
use crate::input::{InputAdapter, InputEvent, PermissionOutcome, Rect, TargetUpdate};
use crate::lifecycle::{Effect, Reaction, TimerKind, TimerRequest};
use crate::proximity::ProximityField;
use crate::smoothing::{AnimatedEntity, FrameClock, TauSchedule};
use glam::Vec2;

#[inline]
pub fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}

/// Linear remap of `v` from `[from_min, from_max]` to `[to_min, to_max]`, rounded.
#[inline]
pub fn adjust(v: f32, from_min: f32, from_max: f32, to_min: f32, to_max: f32) -> f32 {
    round3(to_min + (to_max - to_min) * (v - from_min) / (from_max - from_min))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltVars {
    pub pointer_x: f32,
    pub pointer_y: f32,
    pub background_x: f32,
    pub background_y: f32,
    pub pointer_from_center: f32,
    pub pointer_from_top: f32,
    pub pointer_from_left: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl TiltVars {
    /// `p` is surface-local; a zero dimension is treated as 1px.
    pub fn from_point(p: Vec2, size: Vec2) -> Self {
        let w = if size.x > 0.0 { size.x } else { 1.0 };
        let h = if size.y > 0.0 { size.y } else { 1.0 };
        let px = (100.0 / w * p.x).clamp(0.0, 100.0);
        let py = (100.0 / h * p.y).clamp(0.0, 100.0);
        let cx = px - 50.0;
        let cy = py - 50.0;
        let (lo, hi) = BACKGROUND_RANGE;
        Self {
            pointer_x: px,
            pointer_y: py,
            background_x: adjust(px, 0.0, 100.0, lo, hi),
            background_y: adjust(py, 0.0, 100.0, lo, hi),
            pointer_from_center: (cy.hypot(cx) / 50.0).clamp(0.0, 1.0),
            pointer_from_top: py / 100.0,
            pointer_from_left: px / 100.0,
            rotate_x: round3(-(cx / ROTATE_X_DIVISOR)),
            rotate_y: round3(cy / ROTATE_Y_DIVISOR),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardOutput {
    pub vars: TiltVars,
    /// One weight per bracket, in anchor order.
    pub weights: Vec<f32>,
    pub active: bool,
    pub entering: bool,
}

pub struct TiltCard {
    config: CardConfig,
    schedule: TauSchedule,
    entity: Option<AnimatedEntity>,
    clock: FrameClock,
    attached_at: f64,
    adapter: InputAdapter,
    proximity: ProximityField,
    size: Vec2,
    hovering: bool,
    active: bool,
    entering: bool,
    leave_pending: bool,
}

impl TiltCard {
    pub fn new(config: CardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tilt = &config.tilt;
        let schedule =
            TauSchedule::new(tilt.initial_tau, tilt.steady_tau, tilt.initial_duration_ms)?;
        let proximity = ProximityField::new(&config.proximity)?;
        let adapter = InputAdapter::new(&tilt.orientation);
        Ok(Self {
            config,
            schedule,
            entity: None,
            clock: FrameClock::default(),
            attached_at: 0.0,
            adapter,
            proximity,
            size: Vec2::ZERO,
            hovering: false,
            active: false,
            entering: false,
            leave_pending: false,
        })
    }

    pub fn entity(&self) -> Option<&AnimatedEntity> {
        self.entity.as_ref()
    }

    pub fn proximity(&self) -> &ProximityField {
        &self.proximity
    }

    pub fn adapter(&self) -> &InputAdapter {
        &self.adapter
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_entering(&self) -> bool {
        self.entering
    }

    fn retarget(&mut self, update: TargetUpdate) -> Reaction {
        match self.entity.as_mut() {
            Some(e) => {
                e.set_target(update.point());
                Reaction::wake()
            }
            None => Reaction::none(),
        }
    }

    fn rest_point(&self) -> Vec2 {
        self.size * 0.5
    }
}

impl Effect for TiltCard {
    type Output = CardOutput;

    fn attach(&mut self, surface: &Rect, now_ms: f64) -> Reaction {
        self.size = surface.size();
        self.attached_at = now_ms;
        self.clock.reset();
        self.adapter.gate_mut().reset();
        self.proximity.reset();
        self.proximity.relayout_from_percent(self.size);
        self.proximity.evaluate(surface.local_center(), surface);
        if !self.config.tilt.enabled {
            // One frame to paint the static state.
            return Reaction::wake();
        }
        let [dx, dy] = self.config.tilt.initial_offset;
        let mut entity = AnimatedEntity::new(self.schedule, Vec2::ZERO);
        entity.snap_to(Vec2::new(surface.width - dx, dy));
        entity.set_target(surface.local_center());
        self.entity = Some(entity);
        Reaction::wake()
    }

    fn input(&mut self, ev: &InputEvent, surface: &Rect) -> Reaction {
        if self.entity.is_none() {
            return Reaction::none();
        }
        self.size = surface.size();
        let Some(update) = self.adapter.target_for(ev, surface) else {
            return Reaction::none();
        };
        let mut reaction = self.retarget(update);
        match ev {
            InputEvent::PointerEnter { .. } => {
                self.hovering = true;
                self.active = true;
                self.entering = true;
                self.leave_pending = false;
                reaction.timer = Some(TimerRequest {
                    kind: TimerKind::EnterTransition,
                    delay_ms: self.config.tilt.enter_transition_ms,
                });
            }
            InputEvent::PointerMove { .. } => {
                self.hovering = true;
                self.leave_pending = false;
            }
            InputEvent::PointerLeave { .. } => {
                self.hovering = false;
                self.leave_pending = true;
            }
            InputEvent::OrientationSample { .. } => {}
        }
        reaction
    }

    fn resize(&mut self, surface: &Rect, measured: &[Option<Vec2>]) -> Reaction {
        self.size = surface.size();
        if measured.is_empty() {
            self.proximity.relayout_from_percent(self.size);
        } else {
            self.proximity.relayout_measured(measured, self.size);
        }
        Reaction::wake()
    }

    fn user_gesture(&mut self, secure_context: bool) -> Reaction {
        Reaction {
            request_permission: self.adapter.gate_mut().on_user_gesture(secure_context),
            ..Reaction::none()
        }
    }

    fn permission(&mut self, outcome: PermissionOutcome) -> Reaction {
        Reaction {
            subscribe_orientation: self.adapter.gate_mut().resolve(outcome),
            ..Reaction::none()
        }
    }

    fn timer(&mut self, kind: TimerKind) -> Reaction {
        match kind {
            TimerKind::EnterTransition => {
                self.entering = false;
                Reaction::wake()
            }
        }
    }

    fn frame(&mut self, ts_ms: f64, surface: &Rect) -> bool {
        self.size = surface.size();
        let dt = self.clock.tick(ts_ms);
        let Some(entity) = self.entity.as_mut() else {
            // Static card: a single repaint after attach/resize is enough.
            self.proximity.evaluate(surface.local_center(), surface);
            return false;
        };
        let settled = entity.integrate(
            dt,
            ts_ms - self.attached_at,
            self.config.tilt.settle_epsilon,
        );
        let current = entity.current();
        if self.leave_pending
            && entity.distance_to_target() < self.config.tilt.leave_settle_epsilon
        {
            self.active = false;
            self.leave_pending = false;
        }
        self.proximity.evaluate(current, surface);
        let keep_running = !settled || self.hovering || self.leave_pending;
        if !keep_running {
            self.clock.reset();
        }
        keep_running
    }

    fn output(&self) -> CardOutput {
        let p = self
            .entity
            .as_ref()
            .map(|e| e.current())
            .unwrap_or_else(|| self.rest_point());
        CardOutput {
            vars: TiltVars::from_point(p, self.size),
            weights: self.proximity.weights().collect(),
            active: self.active,
            entering: self.entering,
        }
    }

    fn detach(&mut self) {
        self.entity = None;
        self.clock.reset();
        self.hovering = false;
        self.active = false;
        self.entering = false;
        self.leave_pending = false;
        self.adapter.gate_mut().reset();
    }
}
