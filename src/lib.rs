//! Qudo Skyworld - a relaxing cloud-drifting mini-game
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (movement, spawns, captures, rewards)
//! - `driver`: Frame driver that owns a session and hands results to collaborators
//! - `progression`: Local streaks, quests and experience
//! - `rewards`: Reward recording seam for the remote backend
//! - `theme`: Time-of-day themes
//! - `platform`: Browser/native clock abstraction
//! - `persistence`: LocalStorage JSON helpers

pub mod driver;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod progression;
pub mod rewards;
pub mod settings;
pub mod sim;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::{FrameDriver, FrameOutcome};
pub use error::{RecordError, SessionError};
pub use progression::Progression;
pub use rewards::{RewardLog, RewardRecord, RewardRecorder};
pub use settings::Settings;
pub use theme::{Theme, TimeOfDay};

/// Game configuration constants
pub mod consts {
    /// Session length in seconds
    pub const SESSION_DURATION: f32 = 120.0;

    /// Playfield dimensions (canvas units)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Fraction of the remaining distance the cloud covers each advance
    pub const AVATAR_SMOOTHING: f32 = 0.1;

    /// Flower defaults
    pub const FLOWER_SPAWN_CHANCE: f64 = 0.02;
    pub const FLOWER_FALL_SPEED: f32 = 50.0;
    /// Flowers enter this far above the top edge
    pub const FLOWER_SPAWN_Y: f32 = -50.0;
    /// Flowers are culled once they fall this far past the bottom edge
    pub const FLOWER_CULL_MARGIN: f32 = 50.0;
    pub const FLOWER_VARIANTS: u8 = 16;

    /// Sparkle defaults
    pub const SPARKLE_COUNT: usize = 20;
    pub const SPARKLE_FRAMES: u8 = 16;
    pub const SPARKLE_MIN_OPACITY: f32 = 0.5;

    /// Capture radius for flowers and sparkles
    pub const CAPTURE_RADIUS: f32 = 50.0;

    /// Qudo boost defaults
    pub const BOOST_SPAWN_CHANCE: f64 = 0.01;
    pub const BOOST_CAPTURE_RADIUS: f32 = 60.0;
    /// Minimum distance between a boost and any playfield edge
    pub const BOOST_EDGE_MARGIN: f32 = 50.0;

    /// Reward tuning
    pub const FLOWER_REWARD: u64 = 10;
    pub const SPARKLE_REWARD: u64 = 5;
    pub const INTERACTION_BONUS_CAP: u64 = 100;
    pub const BOOST_MULTIPLIER: u64 = 2;
    pub const FLOWERS_PER_DECORATION: u32 = 5;

    /// Largest frame delta the driver will simulate (hitch guard)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Clamp a frame delta to a usable value (NaN and negatives become zero)
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_nan() || dt < 0.0 { 0.0 } else { dt }
}
