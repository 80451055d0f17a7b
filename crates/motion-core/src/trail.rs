use crate::config::{TrailConfig, TrailVisual};
use crate::error::ConfigError;
use crate::input::{InputEvent, Rect};
use crate::lifecycle::{Effect, Reaction};
use crate::smoothing::{AnimatedEntity, FrameClock, TauSchedule};
use glam::Vec2;
use smallvec::SmallVec;

pub type Followers = SmallVec<[AnimatedEntity; 4]>;

#[derive(Clone, Debug)]
pub struct TrailCoordinator {
    entities: Followers,
    clock: FrameClock,
    settle_epsilon: f32,
}

impl TrailCoordinator {
    pub fn new(
        time_constants: impl IntoIterator<Item = f32>,
        at: Vec2,
        settle_epsilon: f32,
    ) -> Result<Self, ConfigError> {
        let entities = time_constants
            .into_iter()
            .map(|tau| TauSchedule::constant(tau).map(|s| AnimatedEntity::new(s, at)))
            .collect::<Result<Followers, _>>()?;
        Ok(Self {
            entities,
            clock: FrameClock::default(),
            settle_epsilon,
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[AnimatedEntity] {
        &self.entities
    }

    pub fn set_target(&mut self, target: Vec2) {
        for e in &mut self.entities {
            e.set_target(target);
        }
    }

    /// Integrate every entity against the same frame. Returns true while any
    /// entity is still moving; the clock restarts once all have settled.
    pub fn frame(&mut self, ts_ms: f64) -> bool {
        let dt = self.clock.tick(ts_ms);
        let mut moving = false;
        for e in &mut self.entities {
            // Trail entities have no glide-in window, so elapsed time is irrelevant.
            if !e.integrate(dt, f64::INFINITY, self.settle_epsilon) {
                moving = true;
            }
        }
        if !moving {
            self.clock.reset();
        }
        moving
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.entities.iter().map(|e| e.current())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobOutput {
    pub position: Vec2,
    pub size: f32,
    pub inner_size: f32,
    pub opacity: f32,
}

impl BlobOutput {
    /// Offset of the inner dot inside its blob.
    pub fn inner_offset(&self) -> f32 {
        (self.size - self.inner_size) / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailOutput {
    pub blobs: SmallVec<[BlobOutput; 4]>,
}

pub struct CursorTrail {
    config: TrailConfig,
    trail: TrailCoordinator,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let trail = Self::build(&config)?;
        Ok(Self { config, trail })
    }

    fn build(config: &TrailConfig) -> Result<TrailCoordinator, ConfigError> {
        TrailCoordinator::new(
            (0..config.count).map(|i| config.time_constant(i)),
            Vec2::ZERO,
            config.settle_epsilon,
        )
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn visual(&self) -> &TrailVisual {
        &self.config.visual
    }

    pub fn coordinator(&self) -> &TrailCoordinator {
        &self.trail
    }
}

impl Effect for CursorTrail {
    type Output = TrailOutput;

    fn attach(&mut self, _surface: &Rect, _now_ms: f64) -> Reaction {
        // Rebuild from the validated config; it cannot fail a second time.
        if let Ok(trail) = Self::build(&self.config) {
            self.trail = trail;
        }
        Reaction::none()
    }

    fn input(&mut self, ev: &InputEvent, surface: &Rect) -> Reaction {
        match *ev {
            InputEvent::PointerMove { client, .. } | InputEvent::PointerEnter { client, .. } => {
                self.trail.set_target(surface.to_local(client));
                Reaction::wake()
            }
            // The trail keeps its last position when the pointer leaves the page.
            InputEvent::PointerLeave { .. } | InputEvent::OrientationSample { .. } => {
                Reaction::none()
            }
        }
    }

    fn frame(&mut self, ts_ms: f64, _surface: &Rect) -> bool {
        self.trail.frame(ts_ms)
    }

    fn output(&self) -> TrailOutput {
        let c = &self.config;
        TrailOutput {
            blobs: self
                .trail
                .positions()
                .enumerate()
                .map(|(i, position)| BlobOutput {
                    position,
                    size: c.sizes[i],
                    inner_size: c.inner_sizes[i],
                    opacity: c.opacities[i],
                })
                .collect(),
        }
    }

    fn detach(&mut self) {
        self.trail.clock.reset();
        self.trail.entities.clear();
    }
}
