//! Player movement: input, gravity, jumping and push-back
//!
//! Velocities are integer pixels per frame. Horizontal input refreshes `dx`
//! to full speed rather than accelerating; releasing the keys lets damping
//! bring it back to zero over a couple of frames.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::resolve_move;
use super::tick::TickInput;
use super::tile::TileGrid;
use crate::SoundRequest;
use crate::consts::*;
use crate::settings::PlayerTuning;

/// Vertical motion observed over the last update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionState {
    /// No vertical movement this frame. This covers standing on the ground
    /// and the single apex frame of a jump, so it does not imply support.
    #[default]
    Grounded,
    /// Moved up, or pushing up into a ceiling
    Rising,
    /// Moved down
    Falling,
}

impl MotionState {
    fn observe(previous_y: i32, y: i32, dy: i32) -> Self {
        if y > previous_y {
            MotionState::Falling
        } else if y < previous_y || dy < 0 {
            MotionState::Rising
        } else {
            MotionState::Grounded
        }
    }
}

/// What happened during one player update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerUpdate {
    /// Sound to play for a jump accepted this frame
    pub jump_sound: Option<SoundRequest>,
}

/// The player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the box, in pixels
    pub pos: IVec2,
    /// Pixels per frame
    pub vel: IVec2,
    /// Facing: -1 left, 1 right
    pub direction: i32,
    pub state: MotionState,
    /// Clock reading of the last accepted jump
    pub last_jumped: Option<f64>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(IVec2::new(STARTING_PLAYER_X, STARTING_PLAYER_Y))
    }
}

impl Player {
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            vel: IVec2::ZERO,
            direction: 1,
            state: MotionState::Grounded,
            last_jumped: None,
        }
    }

    /// True only if the player moved down during the last update
    #[inline]
    pub fn is_falling(&self) -> bool {
        self.state == MotionState::Falling
    }

    /// Whether a fresh jump press at `now` would be accepted
    pub fn can_jump(&self, now: f64, cooldown: f64) -> bool {
        let rested = self.last_jumped.is_none_or(|t| now - t > cooldown);
        rested && !self.is_falling()
    }

    /// Advance the player by one frame
    pub fn update(
        &mut self,
        grid: &TileGrid,
        input: &TickInput,
        now: f64,
        tuning: &PlayerTuning,
        rng: &mut Pcg32,
    ) -> PlayerUpdate {
        let mut out = PlayerUpdate::default();
        let last_y = self.pos.y;

        if input.left {
            self.vel.x = -tuning.speed;
            self.direction = -1;
        }
        if input.right {
            self.vel.x = tuning.speed;
            self.direction = 1;
        }

        self.vel.y = (self.vel.y + tuning.gravity).min(tuning.max_fall_speed);

        if input.jump_pressed && self.can_jump(now, tuning.jump_cooldown_secs) {
            self.vel.y = -tuning.jump_speed;
            self.last_jumped = Some(now);
            if !tuning.jump_sounds.is_empty() {
                let sound = tuning.jump_sounds[rng.random_range(0..tuning.jump_sounds.len())];
                out.jump_sound = Some(SoundRequest {
                    channel: JUMP_SOUND_CHANNEL,
                    sound,
                });
            }
            log::debug!("Jump at ({}, {}) t={:.3}", self.pos.x, self.pos.y, now);
        }

        self.pos = resolve_move(grid, self.pos, self.vel).pos;
        // Keep the box on the stage horizontally; vertically only the top is bounded
        let max_x = grid.pixel_size().x - PLAYER_WIDTH;
        self.pos.x = self.pos.x.min(max_x).max(0);
        self.pos.y = self.pos.y.max(0);
        self.vel.x = (self.vel.x as f64 * tuning.damping) as i32;
        self.state = MotionState::observe(last_y, self.pos.y, self.vel.y);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::parse_ascii;
    use rand::SeedableRng;

    /// Flat floor at row 15 under a 32-tile wide, 18-row stage
    fn flat_stage() -> TileGrid {
        let mut text = String::new();
        for row in 0..18 {
            let ch = if row >= 15 { '#' } else { '.' };
            text.extend(std::iter::repeat_n(ch, 32));
            text.push('\n');
        }
        parse_ascii(&text).unwrap()
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn jump() -> TickInput {
        TickInput {
            jump_pressed: true,
            jump_held: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_rests_on_floor() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::default();

        for frame in 0..10 {
            player.update(&grid, &TickInput::default(), frame as f64 * SIM_DT, &tuning, &mut rng);
            assert_eq!(player.pos, IVec2::new(16, 112));
            assert_eq!(player.state, MotionState::Grounded);
        }
        // Gravity keeps accumulating up to the cap while grounded
        assert_eq!(player.vel.y, MAX_FALL_SPEED);
    }

    #[test]
    fn test_jump_arc_returns_to_rest() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::default();
        let t0 = 10.0;

        let update = player.update(&grid, &jump(), t0, &tuning, &mut rng);
        assert_eq!(player.vel.y, -PLAYER_JUMP_SPEED);
        assert_eq!(player.last_jumped, Some(t0));
        let sound = update.jump_sound.unwrap();
        assert_eq!(sound.channel, JUMP_SOUND_CHANNEL);
        assert!(PLAYER_JUMP_SOUNDS.contains(&sound.sound));

        let mut ys = vec![player.pos.y];
        let mut falling = vec![player.is_falling()];
        for frame in 1..16 {
            let now = t0 + frame as f64 * SIM_DT;
            player.update(&grid, &TickInput::default(), now, &tuning, &mut rng);
            ys.push(player.pos.y);
            falling.push(player.is_falling());
        }

        assert_eq!(
            ys,
            vec![106, 101, 97, 94, 92, 91, 91, 92, 94, 97, 100, 103, 106, 109, 112, 112]
        );
        let expected_falling: Vec<bool> = (0..16).map(|i| (7..15).contains(&i)).collect();
        assert_eq!(falling, expected_falling);
        assert_eq!(player.state, MotionState::Grounded);
    }

    #[test]
    fn test_jump_gating() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();

        // Within the cooldown: dy only sees gravity
        let mut player = Player::default();
        player.vel.y = 0;
        player.last_jumped = Some(5.0);
        let update = player.update(&grid, &jump(), 5.0 + JUMP_COOLDOWN_SECS, &tuning, &mut rng);
        assert_eq!(player.vel.y, 1);
        assert!(update.jump_sound.is_none());

        // Past the cooldown: exact jump speed
        let mut player = Player::default();
        player.last_jumped = Some(5.0);
        player.update(&grid, &jump(), 5.31, &tuning, &mut rng);
        assert_eq!(player.vel.y, -PLAYER_JUMP_SPEED);

        // Falling blocks the jump even when rested
        let mut player = Player::new(IVec2::new(16, 40));
        player.state = MotionState::Falling;
        player.update(&grid, &jump(), 100.0, &tuning, &mut rng);
        assert_eq!(player.vel.y, 1);
        assert_eq!(player.last_jumped, None);

        // Holding without a fresh press does nothing
        let mut player = Player::default();
        let held = TickInput {
            jump_held: true,
            ..Default::default()
        };
        player.update(&grid, &held, 100.0, &tuning, &mut rng);
        assert_eq!(player.vel.y, 1);
    }

    #[test]
    fn test_cooldown_blocks_immediate_rejump() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::default();

        player.update(&grid, &jump(), 1.0, &tuning, &mut rng);
        // Rising, not falling, but still inside the cooldown
        player.update(&grid, &jump(), 1.0 + SIM_DT, &tuning, &mut rng);
        assert_eq!(player.state, MotionState::Rising);
        assert_eq!(player.last_jumped, Some(1.0));
        assert_eq!(player.vel.y, -PLAYER_JUMP_SPEED + 1);
    }

    #[test]
    fn test_horizontal_damping() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::default();

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(&grid, &right, 0.0, &tuning, &mut rng);
        assert_eq!(player.pos.x, 18);
        assert_eq!(player.direction, 1);
        // floor(2 * 0.8) = 1
        assert_eq!(player.vel.x, 1);

        player.update(&grid, &TickInput::default(), SIM_DT, &tuning, &mut rng);
        assert_eq!(player.pos.x, 19);
        assert_eq!(player.vel.x, 0);

        for i in 2..9 {
            player.update(&grid, &TickInput::default(), i as f64 * SIM_DT, &tuning, &mut rng);
            assert_eq!(player.vel.x, 0);
        }
        assert_eq!(player.pos.x, 19);
        // Facing is kept after stopping
        assert_eq!(player.direction, 1);
    }

    #[test]
    fn test_damping_truncates_toward_zero() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::default();

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        player.update(&grid, &left, 0.0, &tuning, &mut rng);
        assert_eq!(player.direction, -1);
        assert_eq!(player.pos.x, 14);
        // -1.6 truncates to -1
        assert_eq!(player.vel.x, -1);
    }

    #[test]
    fn test_right_wins_when_both_held() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::default();

        let both = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        player.update(&grid, &both, 0.0, &tuning, &mut rng);
        assert_eq!(player.direction, 1);
        assert_eq!(player.pos.x, 18);
    }

    #[test]
    fn test_ceiling_clamp() {
        // Empty stage: nothing stops the player going above y = 0
        let grid = parse_ascii("....\n....\n").unwrap();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::new(IVec2::new(0, 2));

        player.update(&grid, &jump(), 0.0, &tuning, &mut rng);
        assert_eq!(player.pos.y, 0);
        assert_eq!(player.state, MotionState::Rising);
    }

    #[test]
    fn test_stage_edges_hold_the_player() {
        // Open on both sides above the floor
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        let right = TickInput {
            right: true,
            ..Default::default()
        };

        let mut player = Player::default();
        for frame in 0..50 {
            player.update(&grid, &left, frame as f64 * SIM_DT, &tuning, &mut rng);
            assert!(player.pos.x >= 0);
        }
        assert_eq!(player.pos, IVec2::new(0, 112));

        let mut player = Player::default();
        for frame in 0..200 {
            player.update(&grid, &right, frame as f64 * SIM_DT, &tuning, &mut rng);
        }
        assert_eq!(player.pos, IVec2::new(32 * TILE_SIZE - PLAYER_WIDTH, 112));
    }

    #[test]
    fn test_apex_frame_reads_grounded() {
        let grid = flat_stage();
        let tuning = PlayerTuning::default();
        let mut rng = rng();
        let mut player = Player::default();

        player.update(&grid, &jump(), 0.0, &tuning, &mut rng);
        let mut states = Vec::new();
        for frame in 1..8 {
            player.update(&grid, &TickInput::default(), frame as f64 * SIM_DT, &tuning, &mut rng);
            states.push(player.state);
        }
        // 101, 97, 94, 92, 91 rising; 91 again at the apex; then 92 falling
        assert_eq!(states[4], MotionState::Rising);
        assert_eq!(states[5], MotionState::Grounded);
        assert_eq!(states[6], MotionState::Falling);
        assert!(player.pos.y < 112);
    }

    #[test]
    fn test_no_sounds_configured() {
        let grid = flat_stage();
        let tuning = PlayerTuning {
            jump_sounds: Vec::new(),
            ..Default::default()
        };
        let mut rng = rng();
        let mut player = Player::default();

        let update = player.update(&grid, &jump(), 0.0, &tuning, &mut rng);
        assert_eq!(player.vel.y, -PLAYER_JUMP_SPEED);
        assert!(update.jump_sound.is_none());
    }
}
