//! Bird Catcher - a single-screen catch-the-birds arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `audio`: Fire-and-forget sound cue interface
//! - `input`: Held-key input collaborator
//! - `settings`: Player preferences

pub mod audio;
pub mod input;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulation tick rate
    pub const TICK_HZ: u32 = 60;

    /// Play field dimensions (the HUD strip below the field is a render concern)
    pub const FIELD_WIDTH: f32 = 700.0;
    pub const PLAY_HEIGHT: f32 = 600.0;
    /// Birds and power-ups spawn at least this far from the field edges
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const PLAYER_BASE_SPEED: f32 = 5.0;

    /// Bird defaults
    pub const BIRD_WIDTH: f32 = 40.0;
    pub const BIRD_HEIGHT: f32 = 30.0;
    pub const FLOCK_SIZE: usize = 6;
    /// Wing animation: 2 frames, advanced every 10 ticks
    pub const BIRD_ANIM_FRAMES: u8 = 2;
    pub const BIRD_ANIM_PERIOD_TICKS: u8 = 10;
    /// Horizontal drift per tick, oscillating within the offset limit
    pub const BIRD_DRIFT_STEP: f32 = 0.5;
    pub const BIRD_DRIFT_LIMIT: f32 = 20.0;

    /// Sparkle burst size on capture
    pub const SPARKLE_BURST: usize = 20;
    /// Sparkle lifetime range in ticks
    pub const SPARKLE_MIN_LIFE: i32 = 10;
    pub const SPARKLE_MAX_LIFE: i32 = 30;

    /// Power-up defaults
    pub const POWERUP_RADIUS: f32 = 15.0;
    /// Spawn probability per tick while no power-up exists or is active
    pub const POWERUP_SPAWN_CHANCE: f32 = 0.005;
    pub const POWERUP_DURATION_MS: f64 = 5000.0;

    /// Match clock
    pub const MATCH_DURATION_SECS: f32 = 60.0;

    /// Score per captured bird
    pub const CAPTURE_SCORE: u32 = 50;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Clamp a circle's center so the circle stays inside the play field
#[inline]
pub fn clamp_to_field(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, consts::FIELD_WIDTH - radius),
        pos.y.clamp(radius, consts::PLAY_HEIGHT - radius),
    )
}
