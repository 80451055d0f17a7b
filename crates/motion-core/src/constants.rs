// Tuning defaults shared by every effect. Times are seconds unless the name
// says otherwise; distances are surface-local pixels.

// Tilt card smoothing
pub const TILT_STEADY_TAU_SEC: f32 = 0.14;
pub const TILT_INITIAL_TAU_SEC: f32 = 0.6;
pub const TILT_INITIAL_DURATION_MS: f64 = 1200.0;
pub const TILT_INITIAL_X_OFFSET: f32 = 70.0; // from the right edge
pub const TILT_INITIAL_Y_OFFSET: f32 = 60.0; // from the top edge
pub const ENTER_TRANSITION_MS: u32 = 180;

// Settling thresholds
pub const SETTLE_EPSILON: f32 = 0.05;
pub const LEAVE_SETTLE_EPSILON: f32 = 0.6; // card drops `active` inside this radius

// Device orientation mapping
pub const MOBILE_TILT_SENSITIVITY: f32 = 5.0;
pub const DEVICE_BETA_OFFSET_DEG: f32 = 20.0; // typical resting front-back tilt

// Proximity falloff
pub const PROXIMITY_RADIUS_FACTOR: f32 = 0.58;
pub const PROXIMITY_BASE_LOWER_BOUND: f32 = 0.08;
pub const PROXIMITY_INITIAL_WEIGHT: f32 = 0.12;

// Tilt output mapping
pub const BACKGROUND_RANGE: (f32, f32) = (35.0, 65.0);
pub const ROTATE_X_DIVISOR: f32 = 5.0;
pub const ROTATE_Y_DIVISOR: f32 = 4.0;

// Cursor trail. Tween durations are treated as three time-constants (~95% settled).
pub const TRAIL_FAST_TAU_SEC: f32 = 0.1 / 3.0;
pub const TRAIL_SLOW_TAU_SEC: f32 = 0.5 / 3.0;
pub const TRAIL_COUNT: usize = 3;
pub const TRAIL_SIZES: [f32; 3] = [14.0, 16.0, 18.0];
pub const TRAIL_INNER_SIZES: [f32; 3] = [8.0, 10.0, 12.0];
pub const TRAIL_OPACITIES: [f32; 3] = [0.6, 0.6, 0.6];
pub const TRAIL_SETTLE_EPSILON: f32 = 0.1;

// Glass highlight
pub const GLASS_TAU_SEC: f32 = 0.3 / 3.0;
pub const GLASS_BLUR_PX: f32 = 20.0;
pub const GLASS_OPACITY: f32 = 0.1;
pub const GLASS_HIGHLIGHT_GAIN: f32 = 1.5;
pub const GLASS_EDGE_GAIN: f32 = 0.3;

/// Bracket glyph layout of the profile card: `(top %, left %, scale, base opacity)`.
pub const DEFAULT_BRACKETS: [(f32, f32, f32, f32); 8] = [
    (10.0, 12.0, 1.0, 0.55),
    (14.0, 62.0, 0.9, 0.6),
    (28.0, 78.0, 1.15, 0.75),
    (34.0, 18.0, 1.1, 0.55),
    (46.0, 44.0, 0.95, 0.7),
    (62.0, 10.0, 1.25, 0.7),
    (66.0, 74.0, 1.2, 0.75),
    (82.0, 46.0, 1.05, 0.65),
];
