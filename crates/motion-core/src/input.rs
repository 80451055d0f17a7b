use crate::config::OrientationConfig;
use glam::Vec2;

/// Surface geometry in viewport (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn local_center(&self) -> Vec2 {
        self.size() * 0.5
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.origin()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { client: Vec2, ts: f64 },
    PointerEnter { client: Vec2, ts: f64 },
    PointerLeave { ts: f64 },
    /// `beta` is front-back tilt, `gamma` left-right, both in degrees.
    OrientationSample {
        beta: Option<f32>,
        gamma: Option<f32>,
        ts: f64,
    },
}

/// Map tilt angles onto the surface, clamped to its bounds.
#[inline]
pub fn orientation_target(
    beta: f32,
    gamma: f32,
    surface: &Rect,
    sensitivity: f32,
    beta_offset: f32,
) -> Option<Vec2> {
    if surface.is_empty() {
        return None;
    }
    let c = surface.local_center();
    let x = (c.x + gamma * sensitivity).clamp(0.0, surface.width);
    let y = (c.y + (beta - beta_offset) * sensitivity).clamp(0.0, surface.height);
    Some(Vec2::new(x, y))
}

/// Result of the platform's motion-sensor permission handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationState {
    Off,
    Idle,
    Requesting,
    Enabled,
    /// Denied or unavailable; stays off until the next attach.
    Disabled,
}

/// Permission gate for orientation input. Requests only ever start from a
/// user gesture and at most once per attach.
#[derive(Clone, Copy, Debug)]
pub struct OrientationGate {
    state: OrientationState,
    require_secure_context: bool,
}

impl OrientationGate {
    pub fn new(config: &OrientationConfig) -> Self {
        Self {
            state: if config.enabled {
                OrientationState::Idle
            } else {
                OrientationState::Off
            },
            require_secure_context: config.require_secure_context,
        }
    }

    pub fn state(&self) -> OrientationState {
        self.state
    }

    /// A direct click/tap landed on the surface. Returns true when the caller
    /// should issue the permission request now.
    pub fn on_user_gesture(&mut self, secure_context: bool) -> bool {
        if self.state != OrientationState::Idle {
            return false;
        }
        if self.require_secure_context && !secure_context {
            return false;
        }
        self.state = OrientationState::Requesting;
        true
    }

    /// Returns true when orientation samples should be subscribed to.
    pub fn resolve(&mut self, outcome: PermissionOutcome) -> bool {
        if self.state != OrientationState::Requesting {
            return false;
        }
        match outcome {
            PermissionOutcome::Granted => {
                log::info!("[orientation] permission granted");
                self.state = OrientationState::Enabled;
                true
            }
            PermissionOutcome::Denied | PermissionOutcome::Unavailable => {
                log::debug!("[orientation] {:?}; tilt stays pointer-only", outcome);
                self.state = OrientationState::Disabled;
                false
            }
        }
    }

    #[inline]
    pub fn accepts_samples(&self) -> bool {
        self.state == OrientationState::Enabled
    }

    pub fn reset(&mut self) {
        if self.state != OrientationState::Off {
            self.state = OrientationState::Idle;
        }
    }
}

/// Where a single event sends the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetUpdate {
    Track(Vec2),
    Recentre(Vec2),
}

impl TargetUpdate {
    pub fn point(&self) -> Vec2 {
        match *self {
            TargetUpdate::Track(p) | TargetUpdate::Recentre(p) => p,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InputAdapter {
    gate: OrientationGate,
    sensitivity: f32,
    beta_offset: f32,
}

impl InputAdapter {
    pub fn new(config: &OrientationConfig) -> Self {
        Self {
            gate: OrientationGate::new(config),
            sensitivity: config.sensitivity,
            beta_offset: config.beta_offset,
        }
    }

    pub fn gate(&self) -> &OrientationGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut OrientationGate {
        &mut self.gate
    }

    /// Map one event to a target. `None` means the event leaves the target alone.
    pub fn target_for(&self, ev: &InputEvent, surface: &Rect) -> Option<TargetUpdate> {
        match *ev {
            InputEvent::PointerMove { client, .. } | InputEvent::PointerEnter { client, .. } => {
                Some(TargetUpdate::Track(surface.to_local(client)))
            }
            InputEvent::PointerLeave { .. } => Some(TargetUpdate::Recentre(surface.local_center())),
            InputEvent::OrientationSample { beta, gamma, .. } => {
                if !self.gate.accepts_samples() {
                    return None;
                }
                let (beta, gamma) = (beta?, gamma?);
                orientation_target(beta, gamma, surface, self.sensitivity, self.beta_offset)
                    .map(TargetUpdate::Track)
            }
        }
    }
}
