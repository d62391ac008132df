//! Startup settings
//!
//! Read once from the canvas element's `data-settings` attribute (JSON).
//! Missing fields take their defaults; nothing is ever written back.

use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_HEX, BALL_RADIUS, CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS};
use crate::error::SettingsError;
use crate::hex_to_rgba;

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background colour as a hex string
    pub background: String,
    /// Radius of every spawned ball
    pub ball_radius: f32,
    /// Fixed RNG seed (page clock when unset)
    pub seed: Option<u64>,
    /// Oldest balls are evicted beyond this count (unbounded when unset)
    pub max_balls: Option<usize>,
    /// Triangle fan segments per circle
    pub circle_segments: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: BACKGROUND_HEX.to_string(),
            ball_radius: BALL_RADIUS,
            seed: None,
            max_balls: None,
            circle_segments: CIRCLE_SEGMENTS,
        }
    }
}

impl Settings {
    /// Attribute on the canvas element holding the settings JSON
    pub const ATTRIBUTE: &'static str = "data-settings";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        if self.max_balls == Some(0) {
            return Err(SettingsError::Invalid("max_balls must be at least 1".into()));
        }
        if !(3..=MAX_CIRCLE_SEGMENTS).contains(&self.circle_segments) {
            return Err(SettingsError::Invalid(format!(
                "circle_segments must be between 3 and {}, got {}",
                MAX_CIRCLE_SEGMENTS, self.circle_segments
            )));
        }
        if hex_to_rgba(&self.background).is_none() {
            return Err(SettingsError::Invalid(format!(
                "background '{}' is not a hex colour",
                self.background
            )));
        }
        Ok(())
    }

    /// Background as RGBA
    pub fn background_rgba(&self) -> [f32; 4] {
        hex_to_rgba(&self.background)
            .or_else(|| hex_to_rgba(BACKGROUND_HEX))
            .unwrap_or([0.2, 0.2, 0.2, 1.0])
    }

    /// Parse settings from an optional attribute value, falling back to defaults
    pub fn from_attribute(value: Option<&str>) -> Self {
        let Some(json) = value else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::ATTRIBUTE);
                settings
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
