//! Entity spawners
//!
//! Pure generators: each takes the injected RNG and returns a fresh entity.
//! Nothing here touches a `Session`.

use glam::Vec2;
use rand::Rng;

use super::state::{Flower, QudoBoost, Sparkle};
use crate::consts::*;

/// A new flower at a random column just above the top edge
pub fn spawn_flower<R: Rng + ?Sized>(rng: &mut R) -> Flower {
    Flower {
        pos: Vec2::new(rng.random_range(0.0..PLAYFIELD_WIDTH), FLOWER_SPAWN_Y),
        variant: rng.random_range(0..FLOWER_VARIANTS),
        collected: false,
    }
}

/// `count` sparkles scattered uniformly over the playfield
pub fn spawn_sparkle_set<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    (0..count)
        .map(|_| Sparkle {
            pos: Vec2::new(
                rng.random_range(0.0..PLAYFIELD_WIDTH),
                rng.random_range(0.0..PLAYFIELD_HEIGHT),
            ),
            opacity_base: rng.random_range(SPARKLE_MIN_OPACITY..1.0),
            frame: rng.random_range(0..SPARKLE_FRAMES),
            collected: false,
        })
        .collect()
}

/// An active boost kept clear of the playfield edges
pub fn spawn_boost_candidate<R: Rng + ?Sized>(rng: &mut R) -> QudoBoost {
    QudoBoost {
        pos: Vec2::new(
            rng.random_range(BOOST_EDGE_MARGIN..PLAYFIELD_WIDTH - BOOST_EDGE_MARGIN),
            rng.random_range(BOOST_EDGE_MARGIN..PLAYFIELD_HEIGHT - BOOST_EDGE_MARGIN),
        ),
        active: true,
    }
}
