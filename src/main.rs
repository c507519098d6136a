//! Bird Catcher entry point
//!
//! Headless demo runner: a simple chase AI plays one session at the fixed
//! tick rate, with events forwarded to the logging audio player. A real
//! frontend would swap in its own input and render/audio collaborators.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use glam::Vec2;

use bird_catcher::audio::{AudioCue, LogAudio, NullAudio, SoundPlayer, play_events};
use bird_catcher::consts::SIM_DT;
use bird_catcher::input::InputState;
use bird_catcher::sim::{GameState, SessionPhase, tick};
use bird_catcher::Settings;

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
        * 1000.0
}

/// Steer toward the nearest power-up, or failing that the nearest
/// uncaptured bird
fn demo_input(state: &GameState, input: &mut InputState) {
    let player = state.player.pos;

    let target = state
        .power_ups
        .first()
        .map(|p| p.pos)
        .or_else(|| nearest_bird(state, player));

    input.clear();
    let Some(target) = target else { return };

    // Dead zone of one step keeps the avatar from jittering on arrival
    let step = state.player.speed;
    input.left = target.x < player.x - step;
    input.right = target.x > player.x + step;
    input.up = target.y < player.y - step;
    input.down = target.y > player.y + step;
}

fn nearest_bird(state: &GameState, from: Vec2) -> Option<Vec2> {
    state
        .birds
        .iter()
        .filter(|b| !b.captured)
        .map(|b| b.pos)
        .min_by(|a, b| {
            from.distance(*a)
                .partial_cmp(&from.distance(*b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    let audio: Box<dyn SoundPlayer> = if settings.effective_sfx_volume() > 0.0 {
        Box::new(LogAudio)
    } else {
        Box::new(NullAudio)
    };

    let seed = now_ms() as u64;
    let mut state = GameState::new(seed, now_ms());
    let mut input = InputState::new();

    log::info!("starting session with seed {seed}");
    audio.play(AudioCue::Background);

    let frame = Duration::from_secs_f32(SIM_DT);
    loop {
        demo_input(&state, &mut input);
        let events = tick(&mut state, &input.sample(), now_ms());
        play_events(audio.as_ref(), &events);

        if state.phase.is_over() {
            let snap = state.snapshot(now_ms());
            let outcome = match snap.phase {
                SessionPhase::Won => "victory",
                SessionPhase::Lost => "time up",
                SessionPhase::Playing => unreachable!(),
            };
            log::info!(
                "{outcome}: score {}, {} birds caught",
                snap.score,
                state.captured_count()
            );
            break;
        }

        thread::sleep(frame);
    }
}
