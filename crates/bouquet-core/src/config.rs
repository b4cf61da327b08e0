//! Tunable ranges and timings for the bouquet builder.

use serde::{Deserialize, Serialize};

/// Default delay between opening the reveal overlay and making it visible.
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 100;

/// Largest accepted rotation, in degrees either way.
pub const MAX_ROTATION_DEGREES: f64 = 180.0;

/// Largest accepted spawn offset, in canvas percent.
pub const MAX_POSITION_JITTER: f64 = 100.0;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Invalid range for {field}: {reason}")]
    InvalidRange { field: &'static str, reason: String },
}

/// Ranges used to randomize the pose of a newly placed flower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PoseRanges {
    /// Center of the spawn area, in canvas percent (both axes).
    pub center: f64,
    /// Maximum offset from `center` on each axis, in canvas percent.
    pub position_jitter: f64,
    /// Maximum absolute rotation in degrees.
    pub max_rotation: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for PoseRanges {
    fn default() -> Self {
        Self {
            center: 50.0,
            position_jitter: 10.0,
            max_rotation: 30.0,
            min_scale: 0.8,
            max_scale: 1.2,
        }
    }
}

impl PoseRanges {
    /// Checks that every field is finite and every range is well ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("center", self.center),
            ("position_jitter", self.position_jitter),
            ("max_rotation", self.max_rotation),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::InvalidRange {
                    field,
                    reason: format!("{value} is not finite"),
                });
            }
        }
        if !(0.0..=MAX_POSITION_JITTER).contains(&self.position_jitter) {
            return Err(ConfigError::InvalidRange {
                field: "position_jitter",
                reason: format!("expected 0..={MAX_POSITION_JITTER}"),
            });
        }
        if !(0.0..=MAX_ROTATION_DEGREES).contains(&self.max_rotation) {
            return Err(ConfigError::InvalidRange {
                field: "max_rotation",
                reason: format!("expected 0..={MAX_ROTATION_DEGREES}"),
            });
        }
        if self.min_scale <= 0.0 || self.min_scale > self.max_scale {
            return Err(ConfigError::InvalidRange {
                field: "scale",
                reason: format!("expected 0 < min ({}) <= max ({})", self.min_scale, self.max_scale),
            });
        }
        Ok(())
    }

    /// Returns ranges that are always safe to sample from.
    ///
    /// Valid ranges come back unchanged. Otherwise non-finite fields fall back
    /// to their defaults, negative spreads are mirrored, spreads are capped and
    /// inverted scale bounds are swapped.
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };

        let low = finite_or(self.min_scale, defaults.min_scale).abs();
        let high = finite_or(self.max_scale, defaults.max_scale).abs();
        Self {
            center: finite_or(self.center, defaults.center),
            position_jitter: finite_or(self.position_jitter, defaults.position_jitter)
                .abs()
                .min(MAX_POSITION_JITTER),
            max_rotation: finite_or(self.max_rotation, defaults.max_rotation)
                .abs()
                .min(MAX_ROTATION_DEGREES),
            min_scale: low.min(high),
            max_scale: low.max(high),
        }
    }
}

/// Application configuration. Every field has a default, so a partial JSON
/// document only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BouquetConfig {
    pub pose: PoseRanges,
    pub reveal_delay_ms: u32,
    pub log_filter: String,
}

impl Default for BouquetConfig {
    fn default() -> Self {
        Self {
            pose: PoseRanges::default(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BouquetConfig {
    /// Parses and validates a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.pose.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
