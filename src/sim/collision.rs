//! Proximity capture checks
//!
//! Skyworld has no physics: every pickup is captured when its centre comes
//! within a fixed radius of the cloud's centre. Captures are one-shot, so each
//! pickup carries its own collected flag.

use glam::Vec2;

/// Anything the cloud can pick up exactly once
pub trait Collectible {
    fn pos(&self) -> Vec2;
    fn is_collected(&self) -> bool;
    fn mark_collected(&mut self);
}

/// Strict proximity test (distance < radius)
#[inline]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Mark every uncollected item within `radius` of `center` as collected.
///
/// Returns how many items were newly captured. Items already collected are
/// skipped, so an item contributes at most once no matter how many frames
/// it stays in range.
pub fn collect_within<T: Collectible>(items: &mut [T], center: Vec2, radius: f32) -> u32 {
    let mut captured = 0;
    for item in items.iter_mut() {
        if !item.is_collected() && within_radius(item.pos(), center, radius) {
            item.mark_collected();
            captured += 1;
        }
    }
    captured
}
