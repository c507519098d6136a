//! Read-only view of a session for the render collaborator
//!
//! The renderer gets borrowed slices plus the few derived scalars it needs
//! (remaining seconds, fade factors); it must not mutate simulation state.

use glam::Vec2;

use super::state::{
    Bird, GameState, Player, PowerUp, PowerUpKind, SessionPhase, Sparkle, TRAIL_LENGTH,
};

/// Immutable snapshot handed to render/audio collaborators each frame
#[derive(Debug)]
pub struct SessionSnapshot<'a> {
    pub player: &'a Player,
    pub birds: &'a [Bird],
    pub sparkles: &'a [Sparkle],
    /// Trail points, oldest first; fade with [`Self::trail_fade`]
    pub trail: &'a [Vec2],
    pub power_ups: &'a [PowerUp],
    pub active_power_up: Option<PowerUpKind>,
    pub score: u32,
    /// Whole seconds left on the match clock
    pub remaining_secs: u32,
    pub phase: SessionPhase,
}

impl<'a> SessionSnapshot<'a> {
    /// Birds still on the field (captured birds are not drawn)
    pub fn uncaptured_birds(&self) -> impl Iterator<Item = &'a Bird> {
        self.birds.iter().filter(|b| !b.captured)
    }

    /// Fade factor for a trail point by queue index: oldest entries approach
    /// zero, the newest approaches one
    pub fn trail_fade(&self, index: usize) -> f32 {
        index as f32 / TRAIL_LENGTH as f32
    }
}

impl GameState {
    /// Capture a read-only snapshot at the given wall-clock time
    pub fn snapshot(&self, now_ms: f64) -> SessionSnapshot<'_> {
        SessionSnapshot {
            player: &self.player,
            birds: &self.birds,
            sparkles: &self.sparkles,
            trail: &self.trail,
            power_ups: &self.power_ups,
            active_power_up: self.active_power_up.map(|p| p.kind),
            score: self.score,
            remaining_secs: self.clock.remaining_secs(now_ms) as u32,
            phase: self.phase,
        }
    }
}
