//! Domain events emitted by the update engine
//!
//! The tick never calls into presentation code; it returns events and the
//! render/audio collaborators react to them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{BirdColor, Evolution, PowerUpKind};

/// A discrete occurrence within one tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A bird was captured and scored
    BirdCaptured {
        pos: Vec2,
        color: BirdColor,
        total_captured: usize,
        score: u32,
    },

    /// The player advanced to a new evolution stage
    Evolved { from: Evolution, to: Evolution },

    /// A power-up appeared on the field
    PowerUpSpawned { kind: PowerUpKind, pos: Vec2 },

    /// The player picked up a power-up
    PowerUpCollected { kind: PowerUpKind },

    /// The active power-up ran out
    PowerUpExpired { kind: PowerUpKind },

    /// All birds captured before the clock ran out
    Won { score: u32 },

    /// The clock ran out with birds remaining
    Lost { score: u32 },

    /// The session was reset to a fresh layout
    SessionReset,
}
