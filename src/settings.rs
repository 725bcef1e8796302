//! Game settings and tuning
//!
//! Loaded from a JSON file by the native driver. Every field has a default,
//! so a partial file only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::CameraMode;

/// Player movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Horizontal speed while a direction is held (px/frame)
    pub speed: i32,
    /// Upward velocity applied on jump (px/frame)
    pub jump_speed: i32,
    /// Added to dy each frame
    pub gravity: i32,
    /// Cap on dy
    pub max_fall_speed: i32,
    /// dx multiplier after each move, truncated toward zero
    pub damping: f64,
    /// Seconds that must pass between jumps
    pub jump_cooldown_secs: f64,
    /// Sound slots a jump picks from
    pub jump_sounds: Vec<u8>,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            damping: HORIZONTAL_DAMPING,
            jump_cooldown_secs: JUMP_COOLDOWN_SECS,
            jump_sounds: PLAYER_JUMP_SOUNDS.to_vec(),
        }
    }
}

/// Camera behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub mode: CameraMode,
    pub viewport_width: i32,
    pub left_border: i32,
    pub right_border: i32,
    /// Rightmost scroll offset; derived from the stage width when unset
    pub max_scroll_x: Option<i32>,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            mode: CameraMode::SideScroll,
            viewport_width: WINDOW_WIDTH,
            left_border: SCROLL_BORDER_LEFT,
            right_border: SCROLL_BORDER_X,
            max_scroll_x: None,
        }
    }
}

/// Audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerTuning,
    pub camera: CameraSettings,
    pub audio: AudioSettings,
    /// Seed for the jump sound RNG
    pub rng_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player: PlayerTuning::default(),
            camera: CameraSettings::default(),
            audio: AudioSettings::default(),
            rng_seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
