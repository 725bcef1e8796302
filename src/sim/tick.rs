//! Per-frame simulation step
//!
//! The host calls [`tick`] once per frame with the sampled input and a
//! monotonic clock reading, then draws the returned [`RenderState`].

use super::collision::is_colliding;
use super::state::{GameEvent, GamePhase, GameState, RenderState};
use super::tile::TileClasses;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left held (keyboard or d-pad)
    pub left: bool,
    /// Right held (keyboard or d-pad)
    pub right: bool,
    /// Jump held
    pub jump_held: bool,
    /// Jump went from released to pressed this frame
    pub jump_pressed: bool,
    /// Quit went from released to pressed this frame
    pub quit_pressed: bool,
}

/// What one tick produced
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub render: RenderState,
    pub events: Vec<GameEvent>,
}

/// Advance the game by one frame. `now` is the clock in seconds.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> TickOutput {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Playing => {
            state.frame += 1;

            let GameState {
                grid,
                player,
                tuning,
                rng,
                ..
            } = state;
            let update = player.update(grid, input, now, tuning, rng);
            if let Some(sound) = update.jump_sound {
                events.push(GameEvent::Jumped(sound));
            }

            state.camera.update(state.player.pos);

            let p = &state.player;
            if is_colliding(state.grid(), p.pos.x, p.pos.y, p.vel.y, TileClasses::GOAL) {
                log::info!(
                    "Goal reached at ({}, {}) on frame {}",
                    p.pos.x,
                    p.pos.y,
                    state.frame
                );
                state.phase = GamePhase::Won;
                events.push(GameEvent::Won);
            }
        }
        GamePhase::Won => {
            if input.quit_pressed {
                log::info!("Quit requested");
                events.push(GameEvent::QuitRequested);
            }
        }
    }

    TickOutput {
        render: state.render_state(),
        events,
    }
}
