//! Player settings and preferences
//!
//! Persisted separately from progression in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::persistence;
use crate::theme::{Theme, TimeOfDay};

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Pin the sky to one time of day instead of following the clock
    #[serde(default)]
    pub time_of_day_override: Option<TimeOfDay>,

    // === Visual Effects ===
    /// Draw the floating sparkles' glow and twinkle
    pub sparkle_effects: bool,

    // === Accessibility ===
    /// Reduced motion (no boost pulsing, dimmer glow)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_of_day_override: None,
            sparkle_effects: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "skyworld_settings";

    /// Time of day to show for the given local hour
    pub fn effective_time_of_day(&self, hour: u32) -> TimeOfDay {
        self.time_of_day_override
            .unwrap_or_else(|| TimeOfDay::from_hour(hour))
    }

    /// Theme to hand to the session for the given local hour
    pub fn effective_theme(&self, hour: u32) -> Theme {
        let mut theme = self.effective_time_of_day(hour).theme();
        if !self.sparkle_effects {
            theme.sparkle_opacity = 0.0;
        }
        if self.reduced_motion {
            theme.glow_intensity = theme.glow_intensity.min(1.0);
        }
        theme
    }

    /// Effective boost pulsing (respects reduced_motion)
    pub fn effective_boost_pulse(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from LocalStorage (defaults when missing or corrupt)
    pub fn load() -> Self {
        match persistence::load(Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to LocalStorage
    pub fn save(&self) {
        persistence::save(Self::STORAGE_KEY, self);
        log::info!("Settings saved");
    }
}
