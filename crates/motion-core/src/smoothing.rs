//! Exponential smoothing shared by every effect.

use crate::config::check_tau;
use crate::error::ConfigError;
use glam::Vec2;

/// Fraction of the remaining gap to close after `dt_sec`.
///
/// A zero, negative or non-finite `dt` means no integration this frame.
#[inline]
pub fn smoothing_factor(dt_sec: f32, tau_sec: f32) -> f32 {
    if dt_sec <= 0.0 || !dt_sec.is_finite() {
        return 0.0;
    }
    1.0 - (-dt_sec / tau_sec).exp()
}

/// Slow glide-in for a fixed window after attach, steady tracking afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TauSchedule {
    initial_tau: f32,
    steady_tau: f32,
    initial_duration_ms: f64,
}

impl TauSchedule {
    pub fn new(
        initial_tau: f32,
        steady_tau: f32,
        initial_duration_ms: f64,
    ) -> Result<Self, ConfigError> {
        check_tau("initialTau", initial_tau)?;
        check_tau("steadyTau", steady_tau)?;
        Ok(Self {
            initial_tau,
            steady_tau,
            initial_duration_ms: initial_duration_ms.max(0.0),
        })
    }

    pub fn constant(tau: f32) -> Result<Self, ConfigError> {
        Self::new(tau, tau, 0.0)
    }

    #[inline]
    pub fn tau_at(&self, elapsed_ms: f64) -> f32 {
        if elapsed_ms < self.initial_duration_ms {
            self.initial_tau
        } else {
            self.steady_tau
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ts: Option<f64>,
}

impl FrameClock {
    /// Seconds since the previous tick of this run; 0 on the first tick.
    pub fn tick(&mut self, ts_ms: f64) -> f32 {
        let dt = match self.last_ts {
            Some(prev) => ((ts_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ts = Some(ts_ms);
        dt
    }

    pub fn reset(&mut self) {
        self.last_ts = None;
    }
}

#[derive(Clone, Debug)]
pub struct AnimatedEntity {
    current: Vec2,
    target: Vec2,
    schedule: TauSchedule,
    settled: bool,
}

impl AnimatedEntity {
    pub fn new(schedule: TauSchedule, at: Vec2) -> Self {
        Self {
            current: at,
            target: at,
            schedule,
            settled: true,
        }
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
        self.settled = false;
    }

    /// Place the entity without animation. Only used while attaching.
    pub fn snap_to(&mut self, at: Vec2) {
        self.current = at;
        self.settled = false;
    }

    /// Advance one frame. Returns true once the entity has settled; a settled
    /// entity sits exactly on its target.
    pub fn integrate(&mut self, dt_sec: f32, elapsed_ms: f64, settle_epsilon: f32) -> bool {
        let k = smoothing_factor(dt_sec, self.schedule.tau_at(elapsed_ms));
        let before = self.current;
        if k > 0.0 {
            self.current += (self.target - self.current) * k;
        }
        let d = self.distance_to_target();
        // A step below half an f32 ulp leaves `current` where it was.
        let stalled = k > 0.0 && self.current == before;
        self.settled = d < settle_epsilon || d == 0.0 || stalled;
        if self.settled {
            self.current = self.target;
        }
        self.settled
    }

    #[inline]
    pub fn distance_to_target(&self) -> f32 {
        self.current.distance(self.target)
    }
}
