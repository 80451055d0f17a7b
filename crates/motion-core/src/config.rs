//! Effect configuration.

use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlobShape {
    Circle,
    Square,
}

/// SVG goo filter applied to the trail container. Pass-through only.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub id: String,
    pub std_deviation: f32,
    pub color_matrix_values: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            id: "blob".to_string(),
            std_deviation: 2.0,
            color_matrix_values: "1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 35 -10".to_string(),
        }
    }
}

/// Colours and decoration of the trail blobs. None of it affects motion.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailVisual {
    pub shape: BlobShape,
    pub fill_color: String,
    pub inner_color: String,
    pub shadow_color: String,
    pub shadow_blur: f32,
    pub shadow_offset: [f32; 2],
    pub filter: Option<FilterConfig>,
    pub z_index: i32,
}

impl Default for TrailVisual {
    fn default() -> Self {
        Self {
            shape: BlobShape::Circle,
            fill_color: "#32C5FF".to_string(),
            inner_color: "rgba(255,255,255,0.8)".to_string(),
            shadow_color: "rgba(0,0,0,0.75)".to_string(),
            shadow_blur: 2.0,
            shadow_offset: [2.0, 2.0],
            filter: Some(FilterConfig::default()),
            z_index: 9999,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailConfig {
    pub count: usize,
    pub sizes: Vec<f32>,
    pub inner_sizes: Vec<f32>,
    pub opacities: Vec<f32>,
    pub fast_tau: f32,
    pub slow_tau: f32,
    /// Explicit per-index time-constants. Empty means fast lead, slow followers.
    pub time_constants: Vec<f32>,
    pub settle_epsilon: f32,
    pub visual: TrailVisual,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            count: TRAIL_COUNT,
            sizes: TRAIL_SIZES.to_vec(),
            inner_sizes: TRAIL_INNER_SIZES.to_vec(),
            opacities: TRAIL_OPACITIES.to_vec(),
            fast_tau: TRAIL_FAST_TAU_SEC,
            slow_tau: TRAIL_SLOW_TAU_SEC,
            time_constants: Vec::new(),
            settle_epsilon: TRAIL_SETTLE_EPSILON,
            visual: TrailVisual::default(),
        }
    }
}

impl TrailConfig {
    pub fn time_constant(&self, index: usize) -> f32 {
        if let Some(tau) = self.time_constants.get(index) {
            return *tau;
        }
        if index == 0 {
            self.fast_tau
        } else {
            self.slow_tau
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let lists: [(&'static str, usize); 3] = [
            ("sizes", self.sizes.len()),
            ("innerSizes", self.inner_sizes.len()),
            ("opacities", self.opacities.len()),
        ];
        for (field, len) in lists {
            if len != self.count {
                return Err(ConfigError::TrailLengthMismatch {
                    field,
                    count: self.count,
                    len,
                });
            }
        }
        if !self.time_constants.is_empty() && self.time_constants.len() != self.count {
            return Err(ConfigError::TrailLengthMismatch {
                field: "timeConstants",
                count: self.count,
                len: self.time_constants.len(),
            });
        }
        check_tau("fastTau", self.fast_tau)?;
        check_tau("slowTau", self.slow_tau)?;
        for tau in &self.time_constants {
            check_tau("timeConstants", *tau)?;
        }
        for opacity in &self.opacities {
            check_range("opacities", *opacity, 0.0, 1.0)?;
        }
        check_positive("settleEpsilon", self.settle_epsilon)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrientationConfig {
    /// Off by default; a page opts in to gyroscope tilt.
    pub enabled: bool,
    pub sensitivity: f32,
    pub beta_offset: f32,
    /// Only offer the permission prompt on secure (https) pages.
    pub require_secure_context: bool,
}

impl Default for OrientationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sensitivity: MOBILE_TILT_SENSITIVITY,
            beta_offset: DEVICE_BETA_OFFSET_DEG,
            require_secure_context: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TiltConfig {
    pub enabled: bool,
    pub steady_tau: f32,
    pub initial_tau: f32,
    pub initial_duration_ms: f64,
    /// Attach position as `(offset from right edge, offset from top edge)`.
    pub initial_offset: [f32; 2],
    pub settle_epsilon: f32,
    pub leave_settle_epsilon: f32,
    pub enter_transition_ms: u32,
    pub orientation: OrientationConfig,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            steady_tau: TILT_STEADY_TAU_SEC,
            initial_tau: TILT_INITIAL_TAU_SEC,
            initial_duration_ms: TILT_INITIAL_DURATION_MS,
            initial_offset: [TILT_INITIAL_X_OFFSET, TILT_INITIAL_Y_OFFSET],
            settle_epsilon: SETTLE_EPSILON,
            leave_settle_epsilon: LEAVE_SETTLE_EPSILON,
            enter_transition_ms: ENTER_TRANSITION_MS,
            orientation: OrientationConfig::default(),
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_tau("steadyTau", self.steady_tau)?;
        check_tau("initialTau", self.initial_tau)?;
        check_range(
            "initialDurationMs",
            self.initial_duration_ms as f32,
            0.0,
            f32::MAX,
        )?;
        check_positive("settleEpsilon", self.settle_epsilon)?;
        check_positive("leaveSettleEpsilon", self.leave_settle_epsilon)?;
        check_positive("orientation.sensitivity", self.orientation.sensitivity)?;
        Ok(())
    }
}

/// One decorative anchor, positioned in percent of the surface.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorLayout {
    pub top: f32,
    pub left: f32,
    #[serde(default = "unit_scale")]
    pub scale: f32,
    /// Static opacity of the glyph; the weight multiplies on top of it.
    #[serde(default = "unit_scale")]
    pub base_opacity: f32,
}

impl AnchorLayout {
    #[inline]
    pub fn center_in(&self, size: Vec2) -> Vec2 {
        Vec2::new(self.left / 100.0 * size.x, self.top / 100.0 * size.y)
    }
}

fn unit_scale() -> f32 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProximityConfig {
    pub radius_factor: f32,
    pub base_lower_bound: f32,
    pub initial_weight: f32,
    pub anchors: Vec<AnchorLayout>,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            radius_factor: PROXIMITY_RADIUS_FACTOR,
            base_lower_bound: PROXIMITY_BASE_LOWER_BOUND,
            initial_weight: PROXIMITY_INITIAL_WEIGHT,
            anchors: DEFAULT_BRACKETS
                .iter()
                .map(|&(top, left, scale, base_opacity)| AnchorLayout {
                    top,
                    left,
                    scale,
                    base_opacity,
                })
                .collect(),
        }
    }
}

impl ProximityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("radiusFactor", self.radius_factor, 0.0, f32::MAX)?;
        check_range("baseLowerBound", self.base_lower_bound, 0.0, 1.0)?;
        check_range("initialWeight", self.initial_weight, 0.0, 1.0)?;
        for anchor in &self.anchors {
            check_range("anchors.baseOpacity", anchor.base_opacity, 0.0, 1.0)?;
        }
        Ok(())
    }
}

/// Hover card: tilt entity plus the bracket overlay.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardConfig {
    pub tilt: TiltConfig,
    pub proximity: ProximityConfig,
}

impl CardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tilt.validate()?;
        self.proximity.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlassConfig {
    pub tau: f32,
    pub blur: f32,
    pub opacity: f32,
    pub settle_epsilon: f32,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            tau: GLASS_TAU_SEC,
            blur: GLASS_BLUR_PX,
            opacity: GLASS_OPACITY,
            settle_epsilon: SETTLE_EPSILON,
        }
    }
}

impl GlassConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_tau("tau", self.tau)?;
        check_range("blur", self.blur, 0.0, f32::MAX)?;
        check_range("opacity", self.opacity, 0.0, 1.0)?;
        check_positive("settleEpsilon", self.settle_epsilon)?;
        Ok(())
    }
}

#[inline]
pub(crate) fn check_tau(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidTimeConstant { name, value })
    }
}

#[inline]
fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

#[inline]
fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    check_range(name, value, f32::MIN_POSITIVE, f32::MAX)
}
