//! Display preferences
//!
//! Decoded once at startup from the canvas `data-settings` attribute.
//! Physics is not configurable here; these only shape the presentation.

use serde::{Deserialize, Serialize};

use crate::sim::Speed;

/// Display settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Advance rate at startup
    pub speed: Speed,
    /// Whether the force diagram starts visible
    pub show_diagram: bool,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: Speed::Normal,
            show_diagram: true,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Decode settings from the host page, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Ignoring malformed settings: {err}");
                Self::default()
            }
        }
    }
}
