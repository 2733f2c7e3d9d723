//! Deterministic session simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Randomness only through the injected RNG
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod reward;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Collectible, collect_within, within_radius};
pub use reward::{SessionSummary, end_session};
pub use spawn::{spawn_boost_candidate, spawn_flower, spawn_sparkle_set};
pub use state::{Flower, FrameInput, QudoBoost, RenderHints, Session, SessionPhase, Sparkle};
pub use tick::advance;
