//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clock readings come in from the host
//! - Seeded RNG only
//! - The tile grid never changes during play
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;
pub mod tile;

pub use camera::{Camera, CameraMode};
pub use collision::{Resolved, is_colliding, resolve_move};
pub use level::{DEMO_LEVEL, LevelError, demo_level, parse_ascii};
pub use player::{MotionState, Player, PlayerUpdate};
pub use state::{GameEvent, GamePhase, GameState, RenderState};
pub use tick::{TickInput, TickOutput, tick};
pub use tile::{TileClasses, TileGrid, TileKind};
