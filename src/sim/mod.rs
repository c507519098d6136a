//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (60 Hz)
//! - Seeded RNG only
//! - Wall-clock time enters solely through the `now_ms` tick argument
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, player_reaches};
pub use events::GameEvent;
pub use snapshot::SessionSnapshot;
pub use state::{
    ActivePowerUp, Bird, BirdColor, Evolution, GameState, MatchClock, Player, PowerUp,
    PowerUpKind, SessionPhase, Sparkle, MAX_SPARKLES, TRAIL_LENGTH,
};
pub use tick::{TickInput, tick};
