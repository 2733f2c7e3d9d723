//! Session state and core simulation types
//!
//! A `Session` is owned by the frame driver for one play round and is never
//! persisted mid-flight. It serializes only so the renderer and the web shell
//! can read a snapshot.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Collectible;
use super::spawn::spawn_sparkle_set;
use crate::consts::*;
use crate::theme::Theme;

/// Number of frames in the cloud avatar sprite sheet
pub const AVATAR_FRAMES: u32 = 8;
/// Cloud animation rate (frames per second)
pub const AVATAR_FPS: f32 = 8.0;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Clock running, cloud drifting
    Active,
    /// Time is up (absorbing)
    Ended,
}

/// Pointer sample for a single frame, in playfield coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Where the cloud should drift toward
    pub pointer: Vec2,
    /// Pointer/touch held down this frame
    pub pressed: bool,
}

impl FrameInput {
    pub fn new(x: f32, y: f32, pressed: bool) -> Self {
        Self {
            pointer: Vec2::new(x, y),
            pressed,
        }
    }
}

/// A falling flower
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub pos: Vec2,
    /// Sprite variant in [0, 16)
    pub variant: u8,
    pub collected: bool,
}

impl Flower {
    /// Move down by the fall speed for `dt` seconds
    pub fn fall(&mut self, dt: f32) {
        self.pos.y += FLOWER_FALL_SPEED * dt;
    }

    /// True once the flower has dropped past the bottom cull line
    pub fn is_offscreen(&self) -> bool {
        self.pos.y >= PLAYFIELD_HEIGHT + FLOWER_CULL_MARGIN
    }
}

impl Collectible for Flower {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn is_collected(&self) -> bool {
        self.collected
    }
    fn mark_collected(&mut self) {
        self.collected = true;
    }
}

/// A floating sparkle (static for the whole session)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkle {
    pub pos: Vec2,
    /// Base opacity in [0.5, 1.0)
    pub opacity_base: f32,
    /// Sprite frame in [0, 16)
    pub frame: u8,
    pub collected: bool,
}

impl Sparkle {
    /// Opacity after the theme's sparkle scaling
    pub fn display_opacity(&self, hints: &RenderHints) -> f32 {
        self.opacity_base * hints.sparkle_opacity
    }
}

impl Collectible for Sparkle {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn is_collected(&self) -> bool {
        self.collected
    }
    fn mark_collected(&mut self) {
        self.collected = true;
    }
}

/// The rare Qudo bonus pickup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QudoBoost {
    pub pos: Vec2,
    /// False once captured
    pub active: bool,
}

/// Theme-derived values the renderer needs; never read by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderHints {
    pub sparkle_opacity: f32,
    pub glow_intensity: f32,
}

impl Default for RenderHints {
    fn default() -> Self {
        Self {
            sparkle_opacity: 1.0,
            glow_intensity: 1.0,
        }
    }
}

impl RenderHints {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            sparkle_opacity: theme.sparkle_opacity,
            glow_intensity: theme.glow_intensity,
        }
    }
}

/// Complete state of one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Current phase
    pub phase: SessionPhase,
    /// Seconds since start (clamped to `duration` once ended)
    pub elapsed: f32,
    /// Session length in seconds
    pub duration: f32,
    /// Cloud avatar centre
    pub avatar: Vec2,
    /// Falling flowers (spawn order)
    pub flowers: Vec<Flower>,
    /// Sparkles placed at start
    pub sparkles: Vec<Sparkle>,
    /// At most one boost, active or spent
    pub boost: Option<QudoBoost>,
    pub flowers_collected: u32,
    pub sparkles_collected: u32,
    pub boost_collected: bool,
    /// Frames with the pointer held down
    pub interactions: u32,
    /// Flowers ever spawned this session
    pub flowers_spawned: u32,
    pub render_hints: RenderHints,
}

impl Session {
    /// Start a new session, scattering the sparkle set with `rng`
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            phase: SessionPhase::Active,
            elapsed: 0.0,
            duration: SESSION_DURATION,
            avatar: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            flowers: Vec::new(),
            sparkles: spawn_sparkle_set(rng, SPARKLE_COUNT),
            boost: None,
            flowers_collected: 0,
            sparkles_collected: 0,
            boost_collected: false,
            interactions: 0,
            flowers_spawned: 0,
            render_hints: RenderHints::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Seconds left on the clock (HUD)
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// The live boost, if one is waiting to be caught
    pub fn active_boost(&self) -> Option<&QudoBoost> {
        self.boost.as_ref().filter(|b| b.active)
    }

    /// Cloud sprite frame for the current time
    pub fn avatar_frame(&self) -> u32 {
        (self.elapsed * AVATAR_FPS).floor() as u32 % AVATAR_FRAMES
    }

    /// Pulsing alpha for the boost icon
    pub fn boost_alpha(&self) -> f32 {
        0.8 + (self.elapsed * 3.0).sin() * 0.2
    }

    /// Advance by value (see [`super::tick::advance`])
    pub fn advanced<R: Rng + ?Sized>(
        mut self,
        dt: f32,
        input: &FrameInput,
        theme: &Theme,
        rng: &mut R,
    ) -> Self {
        super::tick::advance(&mut self, dt, input, theme, rng);
        self
    }
}
