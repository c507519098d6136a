//! Best-effort audio cues
//!
//! The simulation never touches sound directly; it emits events and a
//! `SoundPlayer` reacts to the mapped cues. Playback failures must never
//! propagate - the game stays fully playable silent.

use crate::sim::GameEvent;

/// Named sound cues for discrete game events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Bird captured
    Capture,
    /// Evolution stage reached
    Evolve,
    /// All birds captured
    Victory,
    /// Clock ran out
    GameOver,
    /// Power-up collected
    PowerUp,
    /// Looping background track
    Background,
}

/// Fire-and-forget sound capability
///
/// Implementations swallow their own failures; callers never observe them.
pub trait SoundPlayer {
    fn play(&self, cue: AudioCue);
}

/// Silent player for headless runs and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl SoundPlayer for NullAudio {
    fn play(&self, _cue: AudioCue) {}
}

/// Player that logs each cue instead of producing sound
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl SoundPlayer for LogAudio {
    fn play(&self, cue: AudioCue) {
        log::debug!("audio cue: {cue:?}");
    }
}

/// Map a tick's events onto their cues, in event order
///
/// Spawn and expiry events are silent; the background loop restarts after a
/// session reset.
pub fn play_events(player: &dyn SoundPlayer, events: &[GameEvent]) {
    for event in events {
        let cue = match event {
            GameEvent::BirdCaptured { .. } => Some(AudioCue::Capture),
            GameEvent::Evolved { .. } => Some(AudioCue::Evolve),
            GameEvent::PowerUpCollected { .. } => Some(AudioCue::PowerUp),
            GameEvent::Won { .. } => Some(AudioCue::Victory),
            GameEvent::Lost { .. } => Some(AudioCue::GameOver),
            GameEvent::SessionReset => Some(AudioCue::Background),
            GameEvent::PowerUpSpawned { .. } | GameEvent::PowerUpExpired { .. } => None,
        };
        if let Some(cue) = cue {
            player.play(cue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records cues for assertions
    #[derive(Default)]
    struct Recorder {
        cues: RefCell<Vec<AudioCue>>,
    }

    impl SoundPlayer for Recorder {
        fn play(&self, cue: AudioCue) {
            self.cues.borrow_mut().push(cue);
        }
    }

    #[test]
    fn test_event_cue_mapping() {
        use crate::sim::{BirdColor, Evolution, PowerUpKind};
        use glam::Vec2;

        let recorder = Recorder::default();
        let events = vec![
            GameEvent::Evolved {
                from: Evolution::Base,
                to: Evolution::Stage1,
            },
            GameEvent::BirdCaptured {
                pos: Vec2::ZERO,
                color: BirdColor::Red,
                total_captured: 2,
                score: 100,
            },
            GameEvent::PowerUpExpired {
                kind: PowerUpKind::Speed,
            },
            GameEvent::Won { score: 300 },
        ];

        play_events(&recorder, &events);

        assert_eq!(
            *recorder.cues.borrow(),
            vec![AudioCue::Evolve, AudioCue::Capture, AudioCue::Victory]
        );
    }

    #[test]
    fn test_null_audio_is_silent() {
        // Merely exercises the no-op path
        play_events(&NullAudio, &[GameEvent::SessionReset]);
    }
}
