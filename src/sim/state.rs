//! Game state and core simulation types

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::player::{MotionState, Player};
use super::tile::TileGrid;
use crate::SoundRequest;
use crate::settings::{PlayerTuning, Settings};

/// Current phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Portal reached; end screen until the player quits
    Won,
}

/// Things the host should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump was accepted; play this sound
    Jumped(SoundRequest),
    /// The player touched the goal (fired once)
    Won,
    /// Quit pressed on the end screen
    QuitRequested,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    pub frame: u64,
    pub phase: GamePhase,
    /// Top-left of the player sprite, world pixels
    pub player: IVec2,
    pub direction: i32,
    pub motion: MotionState,
    /// Viewport offset (x scroll, y always 0)
    pub scroll: IVec2,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Read-only stage
    pub(super) grid: TileGrid,
    pub player: Player,
    pub camera: Camera,
    pub phase: GamePhase,
    /// Updates run so far
    pub frame: u64,
    pub tuning: PlayerTuning,
    /// Jump sound choice
    pub rng: Pcg32,
}

impl GameState {
    /// Start a new game on `grid`
    pub fn new(grid: TileGrid, settings: &Settings) -> Self {
        let camera = Camera::new(&settings.camera, grid.pixel_size().x);
        Self {
            grid,
            player: Player::default(),
            camera,
            phase: GamePhase::Playing,
            frame: 0,
            tuning: settings.player.clone(),
            rng: Pcg32::seed_from_u64(settings.rng_seed),
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Snapshot for the renderer
    pub fn render_state(&self) -> RenderState {
        RenderState {
            frame: self.frame,
            phase: self.phase,
            player: self.player.pos,
            direction: self.player.direction,
            motion: self.player.state,
            scroll: self.camera.offset(),
        }
    }
}
