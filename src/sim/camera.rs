//! Horizontal scrolling camera

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::settings::CameraSettings;

/// How the camera follows the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Keep the player in the middle of the viewport
    Centered,
    /// Only scroll when the player crosses a border (dead zone in between)
    #[default]
    SideScroll,
}

/// Viewport offset owned by the game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub mode: CameraMode,
    /// Left edge of the viewport in world pixels
    pub scroll_x: i32,
    pub viewport_width: i32,
    /// Player x strictly left of `scroll_x + left_border` drags the view left
    pub left_border: i32,
    /// Player x right of `scroll_x + right_border` drags the view right
    pub right_border: i32,
    /// Rightmost scroll offset
    pub max_scroll_x: i32,
}

impl Camera {
    /// Build a camera for a stage `stage_width` pixels wide
    pub fn new(settings: &CameraSettings, stage_width: i32) -> Self {
        let max_scroll_x = settings
            .max_scroll_x
            .unwrap_or_else(|| (stage_width - settings.viewport_width).max(0));
        Self {
            mode: settings.mode,
            scroll_x: 0,
            viewport_width: settings.viewport_width,
            left_border: settings.left_border,
            right_border: settings.right_border,
            max_scroll_x,
        }
    }

    /// Follow the player after it moved this frame
    pub fn update(&mut self, player_pos: IVec2) {
        let x = player_pos.x;
        match self.mode {
            CameraMode::Centered => {
                self.scroll_x = x - self.viewport_width / 2;
            }
            CameraMode::SideScroll => {
                if x - self.left_border < self.scroll_x {
                    self.scroll_x = x - self.left_border;
                }
                if x > self.scroll_x + self.right_border {
                    self.scroll_x = (x - self.right_border).min(self.max_scroll_x);
                }
            }
        }
    }

    /// Viewport offset for the renderer. Vertical scroll is always 0.
    #[inline]
    pub fn offset(&self) -> IVec2 {
        IVec2::new(self.scroll_x, 0)
    }
}
