//! Camera configuration.
//!
//! Every field has a default, so a JSON document only needs the values it
//! overrides. Vectors are stored as `[x, y]` arrays.

use std::path::Path;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::mode::AxisMode;

/// Damage dealt each tick the subject spends behind the chase camera's left edge.
pub const DEFAULT_FALL_DAMAGE: f32 = 100.0;

/// Minimum per-tick subject displacement that counts as advancing.
pub const DEFAULT_MOVEMENT_THRESHOLD: f32 = 0.01;

/// Width of the chase center band, as a fraction of the camera half-width.
pub const DEFAULT_CENTER_ZONE_FRACTION: f32 = 0.1;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse camera config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read camera config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Visible area of an orthographic camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Vertical half-extent in world units.
    pub half_height: f32,
    /// Width divided by height.
    pub aspect: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            half_height: 5.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl ViewportConfig {
    pub fn half_width(&self) -> f32 {
        self.half_height * self.aspect
    }
}

/// Moving-mode scroll tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseConfig {
    /// Autonomous scroll speed in world units per second.
    pub speed: f32,
    pub movement_threshold: f32,
    pub center_zone_fraction: f32,
    pub fall_damage: f32,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
            center_zone_fraction: DEFAULT_CENTER_ZONE_FRACTION,
            fall_damage: DEFAULT_FALL_DAMAGE,
        }
    }
}

/// Full camera controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub x_mode: AxisMode,
    pub y_mode: AxisMode,
    /// Base offset from the subject in `Follow` mode.
    pub follow_offset: [f32; 2],
    /// Fraction of the follow-offset gap closed per second while retargeting.
    pub follow_offset_blend_rate: f32,
    /// Look-ahead distance applied on X in the subject's facing direction.
    pub directional_offset: f32,
    /// Fraction of the look-ahead gap closed per second.
    pub directional_blend_rate: f32,
    /// Smoothing time (seconds) of the damped approach outside transitions.
    pub follow_smoothing: f32,
    /// Length (seconds) of the blend window opened by a mode change.
    pub transition_duration: f32,
    /// Coordinates held by axes in `Static` mode.
    pub static_position: [f32; 2],
    /// Coordinates tracked by axes in `Moving` mode (Y only; X scrolls).
    pub moving_target: [f32; 2],
    /// Distance under which an offset blend snaps onto its target.
    pub offset_epsilon: f32,
    pub chase: ChaseConfig,
    pub viewport: ViewportConfig,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            x_mode: AxisMode::Follow,
            y_mode: AxisMode::Follow,
            follow_offset: [0.0, 1.5],
            follow_offset_blend_rate: 2.0,
            directional_offset: 2.0,
            directional_blend_rate: 2.0,
            follow_smoothing: 0.3,
            transition_duration: 1.0,
            static_position: [0.0, 0.0],
            moving_target: [0.0, 0.0],
            offset_epsilon: 0.01,
            chase: ChaseConfig::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl CameraConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn follow_offset(&self) -> Vec2 {
        Vec2::from_array(self.follow_offset)
    }

    pub fn static_position(&self) -> Vec2 {
        Vec2::from_array(self.static_position)
    }

    pub fn moving_target(&self) -> Vec2 {
        Vec2::from_array(self.moving_target)
    }
}
