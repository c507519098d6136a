//! Fixed timestep update engine
//!
//! One call to [`tick`] advances the whole simulation by a single 60 Hz step:
//! input, bird drift, power-up lifecycle, capture resolution and session
//! transitions, in that order. The tick owns all mutation; collaborators see
//! only the returned events and read-only snapshots.

use glam::Vec2;
use rand::Rng;

use super::collision::player_reaches;
use super::events::GameEvent;
use super::state::{
    ActivePowerUp, BirdColor, Evolution, GameState, PowerUp, PowerUpKind, SessionPhase, Sparkle,
    MAX_SPARKLES,
};
use crate::clamp_to_field;
use crate::consts::*;

/// Held input state for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Restart request, honored only once the session is over
    pub reset: bool,
}

/// Advance the session by one fixed timestep at wall-clock time `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase.is_over() {
        if input.reset {
            state.reset(now_ms);
            log::info!("session reset, new flock laid out");
            events.push(GameEvent::SessionReset);
            return events;
        }
        // Sparkles keep animating over the end screen
        step_sparkles(state);
        return events;
    }

    // The clock can expire between ticks; no gameplay runs on the tick that
    // transitions to Lost.
    if state.clock.remaining_secs(now_ms) <= 0.0 {
        state.phase = SessionPhase::Lost;
        log::info!("time up, final score {}", state.score);
        events.push(GameEvent::Lost { score: state.score });
        step_sparkles(state);
        return events;
    }

    state.time_ticks += 1;

    expire_power_up(state, now_ms, &mut events);
    apply_movement(state, input);

    if state.player.stage == Evolution::Stage3 {
        state.record_trail();
    }

    for bird in state.birds.iter_mut().filter(|b| !b.captured) {
        bird.step();
    }

    collect_power_ups(state, now_ms, &mut events);
    resolve_captures(state, &mut events);
    step_sparkles(state);

    if state.all_captured() {
        state.phase = SessionPhase::Won;
        log::info!("flock complete, final score {}", state.score);
        events.push(GameEvent::Won { score: state.score });
        return events;
    }

    maybe_spawn_power_up(state, &mut events);

    events
}

/// Discrete 4-directional movement, each axis clamped independently
fn apply_movement(state: &mut GameState, input: &TickInput) {
    let speed = state.player.speed;
    let mut pos = state.player.pos;

    if input.left {
        pos.x -= speed;
    }
    if input.right {
        pos.x += speed;
    }
    if input.up {
        pos.y -= speed;
    }
    if input.down {
        pos.y += speed;
    }

    state.player.pos = clamp_to_field(pos, state.player.radius);
}

/// Clear the active power-up once the wall clock passes its expiry
fn expire_power_up(state: &mut GameState, now_ms: f64, events: &mut Vec<GameEvent>) {
    let Some(active) = state.active_power_up else {
        return;
    };
    if now_ms > active.ends_at_ms {
        if active.kind == PowerUpKind::Speed {
            state.player.speed = state.player.stage.base_speed();
        }
        state.active_power_up = None;
        log::debug!("power-up expired: {:?}", active.kind);
        events.push(GameEvent::PowerUpExpired { kind: active.kind });
    }
}

/// Pick up any field power-up the player overlaps
fn collect_power_ups(state: &mut GameState, now_ms: f64, events: &mut Vec<GameEvent>) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    let mut i = 0;
    while i < state.power_ups.len() {
        let p = &state.power_ups[i];
        if player_reaches(player_pos, player_radius, p.pos, p.radius) {
            let kind = p.kind;
            state.power_ups.remove(i);
            state.active_power_up = Some(ActivePowerUp {
                kind,
                ends_at_ms: now_ms + POWERUP_DURATION_MS,
            });
            if kind == PowerUpKind::Speed {
                state.player.speed *= 2.0;
            }
            log::debug!("power-up collected: {kind:?}");
            events.push(GameEvent::PowerUpCollected { kind });
        } else {
            i += 1;
        }
    }
}

/// Mark overlapped birds captured, score them, and check evolution after
/// each capture
fn resolve_captures(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player_pos = state.player.pos;
    let player_radius = state.player.radius;

    for i in 0..state.birds.len() {
        if state.birds[i].captured {
            continue;
        }
        let (pos, capture_radius, color) = {
            let b = &state.birds[i];
            (b.pos, b.capture_radius(), b.color)
        };
        if !player_reaches(player_pos, player_radius, pos, capture_radius) {
            continue;
        }

        state.birds[i].captured = true;
        state.score += CAPTURE_SCORE;
        spawn_sparkle_burst(state, pos, color);

        let captured = state.captured_count();
        log::debug!("bird {i} captured ({captured} total), score {}", state.score);

        // Each threshold fires at most once; stages never go backward
        if let Some(next) = Evolution::unlocked_at(captured)
            && state.player.stage < next
        {
            let from = state.player.stage;
            state.player.stage = next;
            state.player.speed = next.base_speed();
            log::info!("evolved {from:?} -> {next:?}");
            events.push(GameEvent::Evolved { from, to: next });
        }

        events.push(GameEvent::BirdCaptured {
            pos,
            color,
            total_captured: captured,
            score: state.score,
        });
    }
}

/// Burst of sparkles around a capture point, inheriting the bird's color
fn spawn_sparkle_burst(state: &mut GameState, pos: Vec2, color: BirdColor) {
    for _ in 0..SPARKLE_BURST {
        if state.sparkles.len() >= MAX_SPARKLES {
            state.sparkles.remove(0);
        }
        let angle = state.rng.random_range(0.0f32..std::f32::consts::TAU);
        let speed = state.rng.random_range(1.0f32..5.0);
        let size = state.rng.random_range(2..=5) as f32;
        let lifetime = state.rng.random_range(SPARKLE_MIN_LIFE..=SPARKLE_MAX_LIFE);
        state.sparkles.push(Sparkle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size,
            color,
            lifetime,
        });
    }
}

/// Decay sparkles and drop the dead ones
fn step_sparkles(state: &mut GameState) {
    for sparkle in state.sparkles.iter_mut() {
        sparkle.step();
    }
    state.sparkles.retain(|s| s.lifetime > 0);
}

/// Low-probability spawn roll, gated so at most one power-up exists and none
/// while one is active
fn maybe_spawn_power_up(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if !state.power_ups.is_empty() || state.active_power_up.is_some() {
        return;
    }
    if state.rng.random::<f32>() < POWERUP_SPAWN_CHANCE {
        let power_up = PowerUp::spawn(&mut state.rng);
        log::debug!("power-up spawned: {:?} at {}", power_up.kind, power_up.pos);
        events.push(GameEvent::PowerUpSpawned {
            kind: power_up.kind,
            pos: power_up.pos,
        });
        state.power_ups.push(power_up);
    }
}
