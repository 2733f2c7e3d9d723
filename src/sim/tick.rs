//! Per-frame session advance
//!
//! Core loop that moves the session forward by one host frame. The order of
//! effects is fixed; changing it changes when pickups are captured.

use rand::Rng;

use super::collision::{collect_within, within_radius};
use super::spawn::{spawn_boost_candidate, spawn_flower};
use super::state::{FrameInput, RenderHints, Session, SessionPhase};
use crate::consts::*;
use crate::sanitize_dt;
use crate::theme::Theme;

/// Advance the session by one frame of `dt` seconds
///
/// Ended sessions are left untouched. A NaN or negative `dt` is treated as
/// zero. The theme only refreshes the render hints.
pub fn advance<R: Rng + ?Sized>(
    session: &mut Session,
    dt: f32,
    input: &FrameInput,
    theme: &Theme,
    rng: &mut R,
) {
    if session.phase == SessionPhase::Ended {
        return;
    }

    let dt = sanitize_dt(dt);
    session.render_hints = RenderHints::from_theme(theme);

    // Clock
    session.elapsed += dt;
    if session.elapsed >= session.duration {
        session.phase = SessionPhase::Ended;
        session.elapsed = session.duration;
        log::debug!(
            "Session ended: {} flowers, {} sparkles, boost={}",
            session.flowers_collected,
            session.sparkles_collected,
            session.boost_collected
        );
        return;
    }

    // Cloud drifts toward the pointer
    session.avatar += (input.pointer - session.avatar) * AVATAR_SMOOTHING;

    if input.pressed {
        session.interactions += 1;
    }

    if rng.random_bool(FLOWER_SPAWN_CHANCE) {
        session.flowers.push(spawn_flower(rng));
        session.flowers_spawned += 1;
    }

    for flower in &mut session.flowers {
        flower.fall(dt);
    }
    session.flowers.retain(|f| !f.is_offscreen());

    let avatar = session.avatar;
    session.flowers_collected += collect_within(&mut session.flowers, avatar, CAPTURE_RADIUS);
    session.sparkles_collected += collect_within(&mut session.sparkles, avatar, CAPTURE_RADIUS);

    // A spent boost can be replaced; a live one cannot
    if session.active_boost().is_none() && rng.random_bool(BOOST_SPAWN_CHANCE) {
        let boost = spawn_boost_candidate(rng);
        log::trace!("Qudo boost spawned at ({:.0}, {:.0})", boost.pos.x, boost.pos.y);
        session.boost = Some(boost);
    }

    if let Some(boost) = session.boost.as_mut().filter(|b| b.active) {
        if within_radius(boost.pos, avatar, BOOST_CAPTURE_RADIUS) {
            boost.active = false;
            session.boost_collected = true;
            log::info!("Qudo boost captured at {:.1}s", session.elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::spawn::testing::{AlwaysSpawn, NeverSpawn};
    use crate::sim::state::{Flower, QudoBoost};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fresh_session() -> Session {
        Session::new(&mut Pcg32::seed_from_u64(12345))
    }

    /// Session with the sparkles moved out of reach so only the test's
    /// entities matter
    fn quiet_session() -> Session {
        let mut session = fresh_session();
        for sparkle in &mut session.sparkles {
            sparkle.pos = Vec2::new(-1000.0, -1000.0);
        }
        session
    }

    fn centre_input(pressed: bool) -> FrameInput {
        FrameInput::new(400.0, 300.0, pressed)
    }

    #[test]
    fn test_one_second_without_spawns() {
        let mut session = quiet_session();
        let theme = Theme::default();

        advance(&mut session, 1.0, &centre_input(false), &theme, &mut NeverSpawn);

        assert_eq!(session.phase, SessionPhase::Active);
        assert_eq!(session.elapsed, 1.0);
        assert_eq!(session.flowers_collected, 0);
        assert_eq!(session.avatar, Vec2::new(400.0, 300.0));
        assert!(session.flowers.is_empty());
        assert!(session.boost.is_none());
    }

    #[test]
    fn test_avatar_smoothing() {
        let mut session = quiet_session();
        let input = FrameInput::new(500.0, 300.0, false);
        advance(&mut session, 0.016, &input, &Theme::default(), &mut NeverSpawn);
        assert!((session.avatar.x - 410.0).abs() < 1e-4);
        advance(&mut session, 0.016, &input, &Theme::default(), &mut NeverSpawn);
        assert!((session.avatar.x - 419.0).abs() < 1e-4);
        // Never overshoots
        for _ in 0..500 {
            advance(&mut session, 0.016, &input, &Theme::default(), &mut NeverSpawn);
            assert!(session.avatar.x <= 500.0);
        }
    }

    #[test]
    fn test_pressed_frames_count_interactions() {
        let mut session = quiet_session();
        for i in 0..10 {
            advance(&mut session, 0.1, &centre_input(i % 2 == 0), &Theme::default(), &mut NeverSpawn);
        }
        assert_eq!(session.interactions, 5);
    }

    #[test]
    fn test_termination_clamps_elapsed() {
        let mut session = fresh_session();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut total = 0.0;
        while session.is_active() {
            advance(&mut session, 0.7, &centre_input(false), &Theme::default(), &mut rng);
            total += 0.7;
            assert!(total < 200.0, "session never ended");
        }
        assert_eq!(session.phase, SessionPhase::Ended);
        assert_eq!(session.elapsed, 120.0);
    }

    #[test]
    fn test_ending_frame_does_not_mutate() {
        let mut session = quiet_session();
        session.elapsed = 119.5;
        session.flowers.push(Flower {
            pos: Vec2::new(400.0, 300.0),
            variant: 0,
            collected: false,
        });

        advance(&mut session, 1.0, &FrameInput::new(0.0, 0.0, true), &Theme::default(), &mut AlwaysSpawn);

        assert_eq!(session.phase, SessionPhase::Ended);
        assert_eq!(session.elapsed, 120.0);
        assert_eq!(session.avatar, Vec2::new(400.0, 300.0));
        assert_eq!(session.interactions, 0);
        assert_eq!(session.flowers_collected, 0);
        assert_eq!(session.flowers.len(), 1);
    }

    #[test]
    fn test_ended_is_absorbing() {
        let mut session = fresh_session();
        advance(&mut session, 500.0, &centre_input(false), &Theme::default(), &mut NeverSpawn);
        assert_eq!(session.phase, SessionPhase::Ended);

        let snapshot = session.clone();
        let mut rng = Pcg32::seed_from_u64(8);
        for _ in 0..20 {
            advance(&mut session, 1.0, &centre_input(true), &Theme::night(), &mut rng);
        }
        assert_eq!(session, snapshot);
    }

    #[test]
    fn test_bad_dt_is_clamped() {
        let mut session = quiet_session();
        advance(&mut session, f32::NAN, &centre_input(false), &Theme::default(), &mut NeverSpawn);
        assert_eq!(session.elapsed, 0.0);
        advance(&mut session, -3.0, &centre_input(false), &Theme::default(), &mut NeverSpawn);
        assert_eq!(session.elapsed, 0.0);
        assert_eq!(session.phase, SessionPhase::Active);
    }

    #[test]
    fn test_flower_spawn_fall_and_cull() {
        let mut session = quiet_session();
        // Pointer far away so the new flower is not caught
        let input = FrameInput::new(790.0, 590.0, false);
        session.avatar = input.pointer;

        advance(&mut session, 0.1, &input, &Theme::default(), &mut AlwaysSpawn);
        assert_eq!(session.flowers.len(), 1);
        assert_eq!(session.flowers_spawned, 1);
        let flower = &session.flowers[0];
        assert_eq!(flower.pos.x, 0.0);
        // Spawned at -50 then fell 5 units in the same frame
        assert!((flower.pos.y - -45.0).abs() < 1e-4);

        session.flowers[0].pos.y = 645.0;
        advance(&mut session, 0.2, &input, &Theme::default(), &mut NeverSpawn);
        assert!(session.flowers.is_empty());
    }

    #[test]
    fn test_flower_collected_once() {
        let mut session = quiet_session();
        session.flowers.push(Flower {
            pos: Vec2::new(400.0, 280.0),
            variant: 4,
            collected: false,
        });
        session.flowers_spawned = 1;

        for _ in 0..30 {
            advance(&mut session, 0.01, &centre_input(false), &Theme::default(), &mut NeverSpawn);
        }
        assert_eq!(session.flowers_collected, 1);
        assert!(session.flowers[0].collected);
    }

    #[test]
    fn test_sparkle_collected_once() {
        let mut session = quiet_session();
        session.sparkles[0].pos = Vec2::new(420.0, 300.0);
        session.sparkles[1].pos = Vec2::new(400.0, 349.0);

        for _ in 0..60 {
            advance(&mut session, 0.016, &centre_input(false), &Theme::default(), &mut NeverSpawn);
        }
        assert_eq!(session.sparkles_collected, 2);
        assert_eq!(session.sparkles.len(), 20);
    }

    #[test]
    fn test_boost_capture_and_respawn_exclusivity() {
        let mut session = quiet_session();
        session.boost = Some(QudoBoost {
            pos: Vec2::new(450.0, 300.0),
            active: true,
        });

        // Caught from 50 units away (capture radius is 60)
        advance(&mut session, 0.01, &FrameInput::new(400.0, 300.0, false), &Theme::default(), &mut NeverSpawn);
        assert!(session.boost_collected);
        assert!(!session.boost.as_ref().is_some_and(|b| b.active));

        // Spent boost may be replaced by a fresh one at (50, 50); cloud stays far away
        session.avatar = Vec2::new(700.0, 500.0);
        let far = FrameInput::new(700.0, 500.0, false);
        advance(&mut session, 0.01, &far, &Theme::default(), &mut AlwaysSpawn);
        let boost = session.boost.as_ref().expect("boost respawned");
        assert!(boost.active);
        assert_eq!(boost.pos, Vec2::new(50.0, 50.0));

        // Flag stays set
        assert!(session.boost_collected);
    }

    #[test]
    fn test_live_boost_is_not_replaced() {
        let mut session = quiet_session();
        session.avatar = Vec2::new(700.0, 500.0);
        let far = FrameInput::new(700.0, 500.0, false);
        session.boost = Some(QudoBoost {
            pos: Vec2::new(300.0, 200.0),
            active: true,
        });
        advance(&mut session, 0.01, &far, &Theme::default(), &mut AlwaysSpawn);
        assert_eq!(session.boost.as_ref().map(|b| b.pos), Some(Vec2::new(300.0, 200.0)));
    }

    #[test]
    fn test_theme_only_touches_render_hints() {
        let mut a = fresh_session();
        let mut b = a.clone();
        let mut rng_a = Pcg32::seed_from_u64(77);
        let mut rng_b = Pcg32::seed_from_u64(77);
        let input = FrameInput::new(120.0, 80.0, true);

        for _ in 0..300 {
            advance(&mut a, 0.05, &input, &Theme::morning(), &mut rng_a);
            advance(&mut b, 0.05, &input, &Theme::night(), &mut rng_b);
        }

        assert_eq!(a.render_hints.sparkle_opacity, 0.6);
        assert_eq!(b.render_hints.sparkle_opacity, 1.0);
        b.render_hints = a.render_hints;
        assert_eq!(a, b);
    }

    #[test]
    fn test_determinism() {
        // Same seed and inputs produce identical sessions
        let run = || {
            let mut rng = Pcg32::seed_from_u64(99999);
            let mut session = Session::new(&mut rng);
            for i in 0..2000 {
                let t = i as f32 * 0.05;
                let input = FrameInput::new(400.0 + t.sin() * 300.0, 300.0 + t.cos() * 250.0, i % 3 == 0);
                session = session.advanced(1.0 / 60.0, &input, &Theme::default(), &mut rng);
            }
            session
        };
        assert_eq!(run(), run());
    }

    proptest! {
        #[test]
        fn prop_counters_monotonic(
            seed in any::<u64>(),
            frames in proptest::collection::vec((0.0f32..0.5, 0.0f32..800.0, 0.0f32..600.0, any::<bool>()), 1..400),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut session = Session::new(&mut rng);

            for (dt, x, y, pressed) in frames {
                let before = session.clone();
                advance(&mut session, dt, &FrameInput::new(x, y, pressed), &Theme::default(), &mut rng);

                prop_assert!(session.elapsed >= before.elapsed);
                prop_assert!(session.elapsed <= session.duration);
                prop_assert!(session.flowers_collected >= before.flowers_collected);
                prop_assert!(session.sparkles_collected >= before.sparkles_collected);
                prop_assert!(session.interactions >= before.interactions);
                if before.phase == SessionPhase::Ended {
                    prop_assert_eq!(session.phase, SessionPhase::Ended);
                }
                if before.boost_collected {
                    prop_assert!(session.boost_collected);
                }
            }
        }

        #[test]
        fn prop_no_double_counting(
            seed in any::<u64>(),
            frames in proptest::collection::vec((0.0f32..0.2, 0.0f32..800.0, 0.0f32..600.0), 1..600),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut session = Session::new(&mut rng);

            for (dt, x, y) in frames {
                advance(&mut session, dt, &FrameInput::new(x, y, false), &Theme::default(), &mut rng);

                let collected_sparkles = session.sparkles.iter().filter(|s| s.collected).count() as u32;
                prop_assert_eq!(session.sparkles_collected, collected_sparkles);
                prop_assert!(session.flowers_collected <= session.flowers_spawned);
                prop_assert!(session.sparkles_collected <= session.sparkles.len() as u32);
                let live_boosts = session.boost.iter().filter(|b| b.active).count();
                prop_assert!(live_boosts <= 1);
            }
        }
    }
}
