//! Tile Platformer - a side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tiles, collision, player, camera, tick)
//! - `input`: Held-button sampling with edge-triggered jump/quit
//! - `audio`: Fire-and-forget sound requests routed to a pluggable sink
//! - `settings`: Data-driven tuning loaded from JSON

pub mod audio;
pub mod input;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundRequest};
pub use input::{ButtonsHeld, Controls};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz, one update per rendered frame)
    pub const SIM_DT: f64 = 1.0 / 30.0;

    /// Viewport dimensions in pixels
    pub const WINDOW_WIDTH: i32 = 148;
    pub const WINDOW_HEIGHT: i32 = 144;

    /// Edge length of one tile, in pixels
    pub const TILE_SIZE: i32 = 8;

    /// Player box (top-left anchored)
    pub const PLAYER_WIDTH: i32 = 8;
    pub const PLAYER_HEIGHT: i32 = 8;
    pub const STARTING_PLAYER_X: i32 = 16;
    pub const STARTING_PLAYER_Y: i32 = 112;

    /// Horizontal speed refreshed every frame while a direction is held
    pub const PLAYER_SPEED: i32 = 2;
    /// One-shot upward velocity applied on jump
    pub const PLAYER_JUMP_SPEED: i32 = 6;
    /// Added to dy every frame
    pub const GRAVITY: i32 = 1;
    /// Terminal downward velocity
    pub const MAX_FALL_SPEED: i32 = 3;
    /// Horizontal velocity multiplier applied after each move (truncated)
    pub const HORIZONTAL_DAMPING: f64 = 0.8;
    /// Minimum seconds between accepted jumps
    pub const JUMP_COOLDOWN_SECS: f64 = 0.3;

    /// Sound slots picked at random when jumping
    pub const PLAYER_JUMP_SOUNDS: [u8; 3] = [0, 1, 2];
    pub const JUMP_SOUND_CHANNEL: u8 = 0;

    /// Side-scroll borders, measured from the left edge of the viewport
    pub const SCROLL_BORDER_LEFT: i32 = 40;
    pub const SCROLL_BORDER_X: i32 = 80;
}

/// Floor division of a pixel coordinate into a tile index
#[inline]
pub fn pixel_to_tile(px: i32) -> i32 {
    px.div_euclid(consts::TILE_SIZE)
}
