use thiserror::Error;

/// Rejected configuration. Raised once, when an effect is built, never per frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time constant `{name}` must be positive and finite, got {value}")]
    InvalidTimeConstant { name: &'static str, value: f32 },

    #[error("trail has {count} entities but `{field}` lists {len} values")]
    TrailLengthMismatch {
        field: &'static str,
        count: usize,
        len: usize,
    },

    #[error("`{name}` = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("surface is already {0:?}; detach before attaching again")]
    NotDetached(crate::lifecycle::LifecycleState),
}
