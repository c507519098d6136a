//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the executable's working
//! directory. Missing or corrupt files fall back to defaults - settings are
//! never a fatal concern.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute everything
    pub muted: bool,

    // === Visual effects ===
    /// Capture sparkle bursts
    pub sparkles: bool,
    /// Stage3 flame trail
    pub trail: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            sparkles: true,
            trail: true,
        }
    }
}

impl Settings {
    /// Settings file name
    const FILE_NAME: &'static str = "bird_catcher_settings.json";

    /// Effective sound effect volume, respecting mute
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective music volume, respecting mute
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings from the working directory, defaulting on any failure
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings file: {err}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged and swallowed
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE_NAME));
    }

    fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("failed to save settings: {err}");
                }
            }
            Err(err) => log::warn!("failed to serialize settings: {err}"),
        }
    }
}
