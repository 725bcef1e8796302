//! Tile collision and push-back resolution
//!
//! The player is an axis-aligned box moving a few pixels per frame through a
//! grid of 8x8 tiles. Movement is resolved one axis at a time, one pixel at a
//! time, stopping just before the first pixel that would overlap a blocking
//! tile. At the speeds involved (at most 6 px/frame) this can never tunnel
//! through a one-tile wall.

use glam::IVec2;

use super::tile::{TileClasses, TileGrid};
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH, TILE_SIZE};
use crate::pixel_to_tile;

/// Result of a push-back resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Furthest reachable position
    pub pos: IVec2,
    /// The requested velocity, untouched
    pub vel: IVec2,
}

/// Check whether the player box at (x, y) overlaps any tile in `classes`.
///
/// While moving down (`dy > 0`) with `y mod 8 == 1`, the row below the box's
/// top row is probed as well.
pub fn is_colliding(grid: &TileGrid, x: i32, y: i32, dy: i32, classes: TileClasses) -> bool {
    let x1 = pixel_to_tile(x);
    let y1 = pixel_to_tile(y);
    let x2 = pixel_to_tile(x + PLAYER_WIDTH - 1);
    let y2 = pixel_to_tile(y + PLAYER_HEIGHT - 1);

    let hit = |column: i32, row: i32| classes.contains(grid.tile_at(column, row));

    for row in y1..=y2 {
        for column in x1..=x2 {
            if hit(column, row) {
                return true;
            }
        }
    }

    if dy > 0 && y.rem_euclid(TILE_SIZE) == 1 {
        return (x1..=x2).any(|column| hit(column, y1 + 1));
    }

    false
}

/// Step along one axis pixel by pixel, stopping before the first collision
fn step_axis(grid: &TileGrid, mut pos: IVec2, axis: IVec2, delta: i32, dy: i32) -> IVec2 {
    let step = axis * delta.signum();
    for _ in 0..delta.unsigned_abs() {
        let next = pos + step;
        if is_colliding(grid, next.x, next.y, dy, TileClasses::BLOCKING) {
            break;
        }
        pos = next;
    }
    pos
}

/// Move the player box by `vel`, pushing it back out of blocking tiles.
///
/// The axis with the larger magnitude is resolved first; vertical goes first
/// on ties. Velocity is returned unchanged, damping is the caller's job.
pub fn resolve_move(grid: &TileGrid, pos: IVec2, vel: IVec2) -> Resolved {
    let dy = vel.y;
    let resolved = if vel.x.abs() > vel.y.abs() {
        let pos = step_axis(grid, pos, IVec2::X, vel.x, dy);
        step_axis(grid, pos, IVec2::Y, vel.y, dy)
    } else {
        let pos = step_axis(grid, pos, IVec2::Y, vel.y, dy);
        step_axis(grid, pos, IVec2::X, vel.x, dy)
    };

    Resolved { pos: resolved, vel }
}
