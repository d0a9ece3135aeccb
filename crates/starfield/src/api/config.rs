use serde::Deserialize;

use crate::components::depth::Depth;

/// Configuration for the starfield, provided by the page bootstrap.
/// Every field falls back to its default when missing from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Total particle budget, split 1/2 far, 1/3 mid, 1/6 near (default: 60).
    pub count: u32,
    /// Radial speed multiplier per depth layer.
    pub speeds: LayerSpeeds,
    /// Delay before requesting an animation frame, in ms (default: 25).
    pub frame_delay_ms: u32,
    /// Delay used when no animation-frame primitive exists, in ms (default: 50).
    pub fallback_delay_ms: u32,
    /// DOM id of the container node (default: "stars").
    pub container_id: String,
    /// Class assigned to every star node for external styling (default: "star").
    pub star_class: String,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 60,
            speeds: LayerSpeeds::default(),
            frame_delay_ms: 25,
            fallback_delay_ms: 50,
            container_id: "stars".to_string(),
            star_class: "star".to_string(),
        }
    }
}

impl StarfieldConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Speed multiplier for one layer.
    pub fn speed(&self, depth: Depth) -> f32 {
        match depth {
            Depth::Far => self.speeds.far,
            Depth::Mid => self.speeds.mid,
            Depth::Near => self.speeds.near,
        }
    }
}

/// Per-layer speed multipliers. Must satisfy `1 < far < mid < near`
/// for the parallax to read correctly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayerSpeeds {
    pub far: f32,
    pub mid: f32,
    pub near: f32,
}

impl Default for LayerSpeeds {
    fn default() -> Self {
        Self {
            far: Depth::Far.speed(),
            mid: Depth::Mid.speed(),
            near: Depth::Near.speed(),
        }
    }
}
