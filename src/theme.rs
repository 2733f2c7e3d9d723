//! Time-of-day themes
//!
//! The sky changes with the player's local clock. Only the sparkle opacity
//! and glow intensity reach the session (as render hints).

use serde::{Deserialize, Serialize};

/// Part of the day a theme belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    #[default]
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket a local hour (0-23)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            18..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "morning" => Some(TimeOfDay::Morning),
            "afternoon" => Some(TimeOfDay::Afternoon),
            "evening" => Some(TimeOfDay::Evening),
            "night" => Some(TimeOfDay::Night),
            _ => None,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            TimeOfDay::Morning => Theme::morning(),
            TimeOfDay::Afternoon => Theme::afternoon(),
            TimeOfDay::Evening => Theme::evening(),
            TimeOfDay::Night => Theme::night(),
        }
    }
}

/// Visual palette for one time of day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Theme {
    pub time_of_day: TimeOfDay,
    /// Top-to-bottom sky colours
    pub sky_gradient: [&'static str; 3],
    pub cloud_tint: &'static str,
    pub sparkle_opacity: f32,
    pub glow_intensity: f32,
}

impl Default for Theme {
    fn default() -> Self {
        TimeOfDay::default().theme()
    }
}

impl Theme {
    pub fn morning() -> Self {
        Self {
            time_of_day: TimeOfDay::Morning,
            sky_gradient: ["#87CEEB", "#FFE4B5", "#FFF8DC"],
            cloud_tint: "#FFFFFF",
            sparkle_opacity: 0.6,
            glow_intensity: 0.8,
        }
    }

    pub fn afternoon() -> Self {
        Self {
            time_of_day: TimeOfDay::Afternoon,
            sky_gradient: ["#87CEEB", "#FFDAB9", "#FFE4B5"],
            cloud_tint: "#FFF5EE",
            sparkle_opacity: 0.8,
            glow_intensity: 1.0,
        }
    }

    pub fn evening() -> Self {
        Self {
            time_of_day: TimeOfDay::Evening,
            sky_gradient: ["#FF6B6B", "#FFB347", "#FFF8DC"],
            cloud_tint: "#FFE4E1",
            sparkle_opacity: 0.9,
            glow_intensity: 1.2,
        }
    }

    pub fn night() -> Self {
        Self {
            time_of_day: TimeOfDay::Night,
            sky_gradient: ["#191970", "#4B0082", "#2F4F4F"],
            cloud_tint: "#E6E6FA",
            sparkle_opacity: 1.0,
            glow_intensity: 1.5,
        }
    }
}
