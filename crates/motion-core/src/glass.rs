use crate::config::GlassConfig;
use crate::constants::{GLASS_EDGE_GAIN, GLASS_HIGHLIGHT_GAIN};
use crate::error::ConfigError;
use crate::input::{InputEvent, Rect};
use crate::lifecycle::{Effect, Reaction};
use crate::smoothing::{AnimatedEntity, FrameClock, TauSchedule};
use glam::Vec2;

const REST_PERCENT: Vec2 = Vec2::new(50.0, 50.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassOutput {
    /// Gradient centre, percent of the panel.
    pub center: Vec2,
    pub highlight_alpha: f32,
    pub edge_alpha: f32,
    pub blur: f32,
}

pub struct GlassHighlight {
    config: GlassConfig,
    schedule: TauSchedule,
    entity: Option<AnimatedEntity>,
    clock: FrameClock,
}

impl GlassHighlight {
    pub fn new(config: GlassConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let schedule = TauSchedule::constant(config.tau)?;
        Ok(Self {
            config,
            schedule,
            entity: None,
            clock: FrameClock::default(),
        })
    }

    pub fn entity(&self) -> Option<&AnimatedEntity> {
        self.entity.as_ref()
    }
}

impl Effect for GlassHighlight {
    type Output = GlassOutput;

    fn attach(&mut self, _surface: &Rect, _now_ms: f64) -> Reaction {
        self.entity = Some(AnimatedEntity::new(self.schedule, REST_PERCENT));
        self.clock.reset();
        Reaction::wake()
    }

    fn input(&mut self, ev: &InputEvent, surface: &Rect) -> Reaction {
        let (InputEvent::PointerMove { client, .. } | InputEvent::PointerEnter { client, .. }) =
            *ev
        else {
            return Reaction::none();
        };
        if surface.is_empty() {
            return Reaction::none();
        }
        let Some(entity) = self.entity.as_mut() else {
            return Reaction::none();
        };
        entity.set_target(surface.to_local(client) / surface.size() * 100.0);
        Reaction::wake()
    }

    fn frame(&mut self, ts_ms: f64, _surface: &Rect) -> bool {
        let dt = self.clock.tick(ts_ms);
        let Some(entity) = self.entity.as_mut() else {
            return false;
        };
        let settled = entity.integrate(dt, f64::INFINITY, self.config.settle_epsilon);
        if settled {
            self.clock.reset();
        }
        !settled
    }

    fn output(&self) -> GlassOutput {
        GlassOutput {
            center: self.entity.as_ref().map_or(REST_PERCENT, |e| e.current()),
            highlight_alpha: self.config.opacity * GLASS_HIGHLIGHT_GAIN,
            edge_alpha: self.config.opacity * GLASS_EDGE_GAIN,
            blur: self.config.blur,
        }
    }

    fn detach(&mut self) {
        self.entity = None;
        self.clock.reset();
    }
}
