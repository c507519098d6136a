//! Input collaborator
//!
//! Holds the current boolean key state and produces per-tick input for the
//! update engine. Reset is a one-shot: it is cleared once sampled so a held
//! key restarts at most one session.

use crate::sim::TickInput;

/// Current held state of the five game keys
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub reset: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every key
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sample the state for one tick, consuming the one-shot reset
    pub fn sample(&mut self) -> TickInput {
        let tick = TickInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            reset: self.reset,
        };
        self.reset = false;
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_passes_held_directions() {
        let mut input = InputState {
            up: true,
            right: true,
            ..Default::default()
        };

        let t = input.sample();
        assert!(t.up && t.right && !t.down && !t.left);

        // Held keys persist across samples
        let t = input.sample();
        assert!(t.up && t.right);
    }

    #[test]
    fn test_reset_is_one_shot() {
        let mut input = InputState {
            reset: true,
            ..Default::default()
        };

        assert!(input.sample().reset);
        assert!(!input.sample().reset);
    }
}
