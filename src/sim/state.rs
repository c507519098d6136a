//! Game state and core simulation types
//!
//! The whole session lives in one owned `GameState`; the update engine in
//! `tick` is its only writer.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Session-level state machine
///
/// `Playing -> Won` when the whole flock is captured, `Playing -> Lost` when
/// the match clock runs out first. Both are terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Playing,
    Won,
    Lost,
}

impl SessionPhase {
    /// True once the session has reached a terminal phase
    pub fn is_over(self) -> bool {
        !matches!(self, SessionPhase::Playing)
    }
}

/// The player's visual form, advanced at capture milestones
///
/// Monotonically non-decreasing within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Evolution {
    #[default]
    Base,
    Stage1,
    Stage2,
    Stage3,
}

impl Evolution {
    /// Movement speed granted by this stage (pixels per tick)
    pub fn base_speed(self) -> f32 {
        match self {
            Evolution::Base => 5.0,
            Evolution::Stage1 => 6.0,
            Evolution::Stage2 => 7.0,
            Evolution::Stage3 => 8.0,
        }
    }

    /// The stage unlocked at a given total capture count, if any
    pub fn unlocked_at(captured: usize) -> Option<Self> {
        match captured {
            2 => Some(Evolution::Stage1),
            4 => Some(Evolution::Stage2),
            6 => Some(Evolution::Stage3),
            _ => None,
        }
    }
}

/// Fixed bird palette, assigned cyclically by spawn index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdColor {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

impl BirdColor {
    pub const PALETTE: [BirdColor; 6] = [
        BirdColor::Red,
        BirdColor::Green,
        BirdColor::Blue,
        BirdColor::Yellow,
        BirdColor::Magenta,
        BirdColor::Cyan,
    ];

    /// Color for the nth spawned bird
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// RGB triple for rendering
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            BirdColor::Red => (255, 0, 0),
            BirdColor::Green => (0, 255, 0),
            BirdColor::Blue => (0, 0, 255),
            BirdColor::Yellow => (255, 255, 0),
            BirdColor::Magenta => (255, 0, 255),
            BirdColor::Cyan => (0, 255, 255),
        }
    }
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub stage: Evolution,
    /// Current speed in pixels per tick. Derived from stage, doubled while a
    /// Speed power-up is active.
    pub speed: f32,
    pub radius: f32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(FIELD_WIDTH / 2.0, PLAY_HEIGHT / 2.0),
            stage: Evolution::Base,
            speed: PLAYER_BASE_SPEED,
            radius: PLAYER_RADIUS,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A bird on the field
///
/// Birds drift horizontally in a bounded oscillation and never move once
/// captured. `captured` is one-way false -> true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub color: BirdColor,
    pub captured: bool,
    /// Wing animation frame (0 or 1)
    pub frame: u8,
    frame_counter: u8,
    /// Which way the bird faces, -1.0 or 1.0
    pub facing: f32,
    /// Oscillation offset, bounded to [-BIRD_DRIFT_LIMIT, BIRD_DRIFT_LIMIT]
    pub offset: f32,
    pub offset_dir: f32,
}

impl Bird {
    /// Spawn a bird at a random field position with a random drift direction
    pub fn spawn(rng: &mut Pcg32, index: usize) -> Self {
        Self {
            pos: random_field_point(rng),
            color: BirdColor::for_index(index),
            captured: false,
            frame: 0,
            frame_counter: 0,
            facing: random_sign(rng),
            offset: 0.0,
            offset_dir: random_sign(rng),
        }
    }

    /// Advance animation and drift by one tick
    ///
    /// Direction flips when the offset exceeds its limit or the bird reaches
    /// the field's side margins. The x step uses the possibly-flipped
    /// direction, so a bird at the limit immediately drifts back.
    pub fn step(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter >= BIRD_ANIM_PERIOD_TICKS {
            self.frame = (self.frame + 1) % BIRD_ANIM_FRAMES;
            self.frame_counter = 0;
        }

        self.offset += BIRD_DRIFT_STEP * self.offset_dir;
        if self.offset.abs() > BIRD_DRIFT_LIMIT {
            self.offset_dir = -self.offset_dir;
        }

        self.pos.x += BIRD_DRIFT_STEP * self.offset_dir;
        if self.pos.x < SPAWN_MARGIN {
            self.pos.x = SPAWN_MARGIN;
            self.offset_dir = -self.offset_dir;
        } else if self.pos.x > FIELD_WIDTH - SPAWN_MARGIN {
            self.pos.x = FIELD_WIDTH - SPAWN_MARGIN;
            self.offset_dir = -self.offset_dir;
        }
    }

    /// Capture radius around the bird's center
    pub fn capture_radius(&self) -> f32 {
        BIRD_WIDTH / 2.0
    }
}

/// An ephemeral capture particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sparkle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: BirdColor,
    /// Remaining lifetime in ticks, strictly decreasing; removed at 0
    pub lifetime: i32,
}

impl Sparkle {
    /// Step position by velocity and decay lifetime
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.lifetime -= 1;
    }

    /// Render alpha, fading to zero as the sparkle dies
    pub fn alpha(&self) -> u8 {
        let a = 255.0 * self.lifetime.max(0) as f32 / SPARKLE_MAX_LIFE as f32;
        a.clamp(0.0, 255.0) as u8
    }
}

/// Maximum sparkles kept alive at once; oldest are dropped past this
pub const MAX_SPARKLES: usize = 256;

/// Power-up varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    /// Occupies the active slot but has no mechanical effect (intentionally
    /// cosmetic)
    Invincibility,
}

/// A power-up waiting on the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub radius: f32,
}

impl PowerUp {
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let kind = if rng.random_bool(0.5) {
            PowerUpKind::Speed
        } else {
            PowerUpKind::Invincibility
        };
        Self {
            pos: random_field_point(rng),
            kind,
            radius: POWERUP_RADIUS,
        }
    }
}

/// The single active power-up slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    /// Wall-clock expiry in milliseconds
    pub ends_at_ms: f64,
}

/// Maximum trail length for the Stage3 flame trail
pub const TRAIL_LENGTH: usize = 20;

/// Match countdown against wall-clock time
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchClock {
    pub started_at_ms: f64,
    pub duration_secs: f32,
}

impl MatchClock {
    pub fn start(now_ms: f64) -> Self {
        Self {
            started_at_ms: now_ms,
            duration_secs: MATCH_DURATION_SECS,
        }
    }

    pub fn elapsed_secs(&self, now_ms: f64) -> f32 {
        ((now_ms - self.started_at_ms) / 1000.0).max(0.0) as f32
    }

    /// Seconds left, clamped at zero
    pub fn remaining_secs(&self, now_ms: f64) -> f32 {
        (self.duration_secs - self.elapsed_secs(now_ms)).max(0.0)
    }
}

/// Complete session state (deterministic given seed, input and clock)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: SessionPhase,
    pub player: Player,
    pub birds: Vec<Bird>,
    pub sparkles: Vec<Sparkle>,
    /// Power-ups on the field (at most one given the spawn gate)
    pub power_ups: Vec<PowerUp>,
    pub active_power_up: Option<ActivePowerUp>,
    /// Stage3-only trail of recent player positions, oldest first
    pub trail: Vec<Vec2>,
    pub clock: MatchClock,
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh session with the given seed, starting the clock at
    /// `now_ms`
    pub fn new(seed: u64, now_ms: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let birds = spawn_flock(&mut rng);
        Self {
            seed,
            rng,
            phase: SessionPhase::Playing,
            player: Player::new(),
            birds,
            sparkles: Vec::new(),
            power_ups: Vec::new(),
            active_power_up: None,
            trail: Vec::with_capacity(TRAIL_LENGTH),
            clock: MatchClock::start(now_ms),
            score: 0,
            time_ticks: 0,
        }
    }

    /// Number of birds captured so far
    pub fn captured_count(&self) -> usize {
        self.birds.iter().filter(|b| b.captured).count()
    }

    /// Win condition: the whole flock is captured
    pub fn all_captured(&self) -> bool {
        self.birds.iter().all(|b| b.captured)
    }

    /// Return every entity and session field to initial values with a fresh
    /// random flock layout. High scores are not kept (nothing is persisted).
    pub fn reset(&mut self, now_ms: f64) {
        self.player = Player::new();
        self.birds = spawn_flock(&mut self.rng);
        self.sparkles.clear();
        self.power_ups.clear();
        self.active_power_up = None;
        self.trail.clear();
        self.clock = MatchClock::start(now_ms);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = SessionPhase::Playing;
    }

    /// Record the player's position to the Stage3 trail
    pub(crate) fn record_trail(&mut self) {
        self.trail.push(self.player.pos);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.remove(0);
        }
    }
}

/// Random point within the field's spawn margins
pub fn random_field_point(rng: &mut Pcg32) -> Vec2 {
    Vec2::new(
        rng.random_range(SPAWN_MARGIN..=FIELD_WIDTH - SPAWN_MARGIN),
        rng.random_range(SPAWN_MARGIN..=PLAY_HEIGHT - SPAWN_MARGIN),
    )
}

fn random_sign(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

fn spawn_flock(rng: &mut Pcg32) -> Vec<Bird> {
    (0..FLOCK_SIZE).map(|i| Bird::spawn(rng, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_flock() {
        let state = GameState::new(42, 0.0);
        assert_eq!(state.birds.len(), FLOCK_SIZE);
        assert_eq!(state.captured_count(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, SessionPhase::Playing);

        for (i, bird) in state.birds.iter().enumerate() {
            assert!(!bird.captured);
            assert_eq!(bird.color, BirdColor::for_index(i));
            assert!(bird.pos.x >= SPAWN_MARGIN && bird.pos.x <= FIELD_WIDTH - SPAWN_MARGIN);
            assert!(bird.pos.y >= SPAWN_MARGIN && bird.pos.y <= PLAY_HEIGHT - SPAWN_MARGIN);
            assert!(bird.facing == 1.0 || bird.facing == -1.0);
        }
    }

    #[test]
    fn test_same_seed_same_flock() {
        let a = GameState::new(7, 0.0);
        let b = GameState::new(7, 0.0);
        for (x, y) in a.birds.iter().zip(b.birds.iter()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.offset_dir, y.offset_dir);
        }
    }

    #[test]
    fn test_evolution_speeds() {
        assert_eq!(Evolution::Base.base_speed(), 5.0);
        assert_eq!(Evolution::Stage1.base_speed(), 6.0);
        assert_eq!(Evolution::Stage2.base_speed(), 7.0);
        assert_eq!(Evolution::Stage3.base_speed(), 8.0);
        assert!(Evolution::Base < Evolution::Stage3);
    }

    #[test]
    fn test_evolution_thresholds() {
        assert_eq!(Evolution::unlocked_at(1), None);
        assert_eq!(Evolution::unlocked_at(2), Some(Evolution::Stage1));
        assert_eq!(Evolution::unlocked_at(3), None);
        assert_eq!(Evolution::unlocked_at(4), Some(Evolution::Stage2));
        assert_eq!(Evolution::unlocked_at(6), Some(Evolution::Stage3));
    }

    #[test]
    fn test_bird_drift_flips_at_limit() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut bird = Bird::spawn(&mut rng, 0);
        bird.pos.x = FIELD_WIDTH / 2.0;
        bird.offset = 0.0;
        bird.offset_dir = 1.0;

        // 41 steps of 0.5 pushes the offset past the 20.0 limit
        for _ in 0..41 {
            bird.step();
        }
        assert_eq!(bird.offset_dir, -1.0);
        assert!(bird.offset.abs() <= BIRD_DRIFT_LIMIT + BIRD_DRIFT_STEP);
    }

    #[test]
    fn test_bird_stays_in_side_margins() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut bird = Bird::spawn(&mut rng, 0);
        bird.pos.x = SPAWN_MARGIN + 1.0;
        bird.offset_dir = -1.0;

        for _ in 0..100 {
            bird.step();
            assert!(bird.pos.x >= SPAWN_MARGIN);
            assert!(bird.pos.x <= FIELD_WIDTH - SPAWN_MARGIN);
        }
    }

    #[test]
    fn test_sparkle_alpha_fades() {
        let mut sparkle = Sparkle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
            size: 3.0,
            color: BirdColor::Cyan,
            lifetime: SPARKLE_MAX_LIFE,
        };
        assert_eq!(sparkle.alpha(), 255);
        sparkle.step();
        assert!(sparkle.alpha() < 255);
        assert_eq!(sparkle.pos, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_clock_remaining() {
        let clock = MatchClock::start(1000.0);
        assert_eq!(clock.remaining_secs(1000.0), MATCH_DURATION_SECS);
        assert_eq!(clock.remaining_secs(31_000.0), 30.0);
        assert_eq!(clock.remaining_secs(61_000.0), 0.0);
        // Clamped, never negative
        assert_eq!(clock.remaining_secs(120_000.0), 0.0);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(9, 0.0);
        state.score = 300;
        state.player.stage = Evolution::Stage2;
        state.player.speed = 14.0;
        state.phase = SessionPhase::Won;
        for bird in &mut state.birds {
            bird.captured = true;
        }
        state.trail.push(Vec2::ZERO);

        state.reset(5000.0);

        assert_eq!(state.score, 0);
        assert_eq!(state.player.stage, Evolution::Base);
        assert_eq!(state.player.speed, PLAYER_BASE_SPEED);
        assert_eq!(state.phase, SessionPhase::Playing);
        assert_eq!(state.captured_count(), 0);
        assert!(state.trail.is_empty());
        assert_eq!(state.clock.started_at_ms, 5000.0);
        for bird in &state.birds {
            assert!(bird.pos.x >= SPAWN_MARGIN && bird.pos.x <= FIELD_WIDTH - SPAWN_MARGIN);
        }
    }
}
