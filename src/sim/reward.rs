//! End-of-session reward resolution
//!
//! Pure derivation of the summary shown to the player and reported to the
//! progression tracker and reward service.

use serde::{Deserialize, Serialize};

use super::state::{Session, SessionPhase};
use crate::consts::*;
use crate::error::SessionError;

/// Immutable result of a finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub flowers_collected: u32,
    pub sparkles_collected: u32,
    pub boost_collected: bool,
    pub total_reward: u64,
    /// Seconds actually played
    pub duration: f32,
    pub decorations_unlocked: u32,
}

/// Resolve the reward for an ended session
///
/// Fails with [`SessionError::InvalidState`] while the session is still active.
pub fn end_session(session: &Session) -> Result<SessionSummary, SessionError> {
    if session.phase != SessionPhase::Ended {
        return Err(SessionError::InvalidState {
            phase: session.phase,
        });
    }

    let base = u64::from(session.flowers_collected) * FLOWER_REWARD
        + u64::from(session.sparkles_collected) * SPARKLE_REWARD;
    let multiplier = if session.boost_collected { BOOST_MULTIPLIER } else { 1 };
    let interaction_bonus = u64::from(session.interactions).min(INTERACTION_BONUS_CAP);

    Ok(SessionSummary {
        flowers_collected: session.flowers_collected,
        sparkles_collected: session.sparkles_collected,
        boost_collected: session.boost_collected,
        total_reward: (base + interaction_bonus) * multiplier,
        duration: session.elapsed,
        decorations_unlocked: session.flowers_collected / FLOWERS_PER_DECORATION,
    })
}
