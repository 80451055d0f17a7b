use crate::config::{AnchorLayout, ProximityConfig};
use crate::error::ConfigError;
use crate::input::Rect;
use glam::Vec2;

/// Softer-than-linear ease used by the falloff; `ease(0) = 0`, `ease(1) = 1`.
#[inline]
pub fn ease(t: f32) -> f32 {
    t * t
}

/// Weight of one anchor at distance `d` from the reference point.
#[inline]
pub fn falloff_weight(d: f32, radius: f32, base: f32) -> f32 {
    if radius <= 0.0 {
        return base;
    }
    let t = (1.0 - d / radius).clamp(0.0, 1.0);
    base + ease(t) * (1.0 - base)
}

#[derive(Clone, Debug)]
pub struct Anchor {
    pub layout: AnchorLayout,
    pub center: Vec2,
    pub weight: f32,
}

#[derive(Clone, Debug)]
pub struct ProximityField {
    anchors: Vec<Anchor>,
    radius_factor: f32,
    base: f32,
    initial_weight: f32,
    radius: f32,
}

impl ProximityField {
    pub fn new(config: &ProximityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let anchors = config
            .anchors
            .iter()
            .map(|layout| Anchor {
                layout: *layout,
                center: Vec2::ZERO,
                weight: config.initial_weight,
            })
            .collect();
        Ok(Self {
            anchors,
            radius_factor: config.radius_factor,
            base: config.base_lower_bound,
            initial_weight: config.initial_weight,
            radius: 0.0,
        })
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn weights(&self) -> impl Iterator<Item = f32> + '_ {
        self.anchors.iter().map(|a| a.weight)
    }

    pub fn relayout_from_percent(&mut self, size: Vec2) {
        for a in &mut self.anchors {
            a.center = a.layout.center_in(size);
        }
        self.update_radius(size);
    }

    /// One slot per anchor, in anchor order. `None` or a missing slot falls
    /// back to the percent layout.
    pub fn relayout_measured(&mut self, centers: &[Option<Vec2>], size: Vec2) {
        for (i, a) in self.anchors.iter_mut().enumerate() {
            a.center = centers
                .get(i)
                .copied()
                .flatten()
                .unwrap_or_else(|| a.layout.center_in(size));
        }
        self.update_radius(size);
    }

    fn update_radius(&mut self, size: Vec2) {
        self.radius = self.radius_factor * size.x.min(size.y).max(0.0);
    }

    /// Recompute every weight from `p`. Returns false (and leaves weights alone)
    /// when the surface has not been laid out yet.
    pub fn evaluate(&mut self, p: Vec2, surface: &Rect) -> bool {
        if surface.is_empty() {
            return false;
        }
        self.update_radius(surface.size());
        for a in &mut self.anchors {
            a.weight = falloff_weight(p.distance(a.center), self.radius, self.base);
        }
        true
    }

    /// Back to the pre-evaluation weights, as on a fresh attach.
    pub fn reset(&mut self) {
        for a in &mut self.anchors {
            a.weight = self.initial_weight;
        }
    }
}
