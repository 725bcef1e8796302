//! Host button state to per-tick input
//!
//! Hosts report which buttons are held each frame. Jump and quit are
//! edge-triggered, so [`Controls`] remembers the previous frame to detect
//! the not-pressed to pressed transition.

use crate::sim::TickInput;

/// Raw held state reported by the host for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonsHeld {
    pub left: bool,
    pub right: bool,
    /// Up arrow
    pub up: bool,
    pub dpad_left: bool,
    pub dpad_right: bool,
    /// Gamepad A
    pub a: bool,
    pub quit: bool,
}

impl ButtonsHeld {
    fn jump(&self) -> bool {
        self.up || self.a
    }
}

/// Edge detector for jump/quit
#[derive(Debug, Clone, Default)]
pub struct Controls {
    jump_was_held: bool,
    quit_was_held: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn this frame's held buttons into a tick input
    pub fn sample(&mut self, held: ButtonsHeld) -> TickInput {
        let jump = held.jump();
        let input = TickInput {
            left: held.left || held.dpad_left,
            right: held.right || held.dpad_right,
            jump_held: jump,
            jump_pressed: jump && !self.jump_was_held,
            quit_pressed: held.quit && !self.quit_was_held,
        };
        self.jump_was_held = jump;
        self.quit_was_held = held.quit;
        input
    }
}
