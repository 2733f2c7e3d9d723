//! Qudo Skyworld entry point
//!
//! The web build is driven from JavaScript through `qudo_skyworld::web`.
//! Natively this runs one headless session with an autopilot cloud and prints
//! the summary.

#[cfg(not(target_arch = "wasm32"))]
use qudo_skyworld::sim::{FrameInput, Session};

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use qudo_skyworld::{FrameDriver, FrameOutcome, Progression, RewardLog, Settings, platform};

    env_logger::init();
    log::info!("Qudo Skyworld (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| platform::now_ms() as u64);

    let settings = Settings::load();
    let mut driver = FrameDriver::new();
    driver.set_theme(settings.effective_theme(platform::local_hour()));
    driver.start(seed);

    // Simulated 60 Hz host clock
    let frame_dt = 1.0 / 60.0;
    let mut now = 0.0;
    let summary = loop {
        let input = driver
            .session()
            .map(autopilot)
            .unwrap_or_default();
        match driver.frame(now, &input) {
            FrameOutcome::Ended(summary) => break summary,
            FrameOutcome::Idle => {
                log::error!("Session vanished before it ended");
                return;
            }
            FrameOutcome::Paused | FrameOutcome::Running => {}
        }
        now += frame_dt;
    };

    let mut progression = Progression::load();
    let mut rewards = RewardLog::new();
    let levelled_up = driver.finish(
        &summary,
        &mut progression,
        &mut rewards,
        platform::today(),
        platform::timestamp_nanos(),
    );

    println!("\nSession summary (seed {})", seed);
    println!("  Drifted for      {:.0}s", summary.duration);
    println!("  Flowers          {}", summary.flowers_collected);
    println!("  Sparkles         {}", summary.sparkles_collected);
    println!("  Qudo boost       {}", if summary.boost_collected { "yes" } else { "no" });
    println!("  Reward           {}", summary.total_reward);
    println!("  Decorations      {}", summary.decorations_unlocked);
    let stats = progression.stats();
    println!(
        "  Level            {} ({}/{} xp){}",
        stats.level,
        stats.experience,
        stats.xp_for_next_level,
        if levelled_up { " - level up!" } else { "" }
    );
    println!("  Rewards recorded {}", rewards.balance());
}

/// Steer toward the live boost, else the nearest uncollected flower, else the
/// nearest uncollected sparkle. Holds the pointer down every other second.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(session: &Session) -> FrameInput {
    let avatar = session.avatar;
    let nearest = |points: &mut dyn Iterator<Item = glam::Vec2>| {
        points.min_by(|a, b| {
            a.distance_squared(avatar)
                .partial_cmp(&b.distance_squared(avatar))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    };

    let target = session
        .active_boost()
        .map(|b| b.pos)
        .or_else(|| {
            nearest(
                &mut session
                    .flowers
                    .iter()
                    .filter(|f| !f.collected && f.pos.y > 0.0)
                    .map(|f| f.pos),
            )
        })
        .or_else(|| nearest(&mut session.sparkles.iter().filter(|s| !s.collected).map(|s| s.pos)))
        .unwrap_or(avatar);

    FrameInput {
        pointer: target,
        pressed: (session.elapsed as u32) % 2 == 0,
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is qudo_skyworld::web::wasm_start, this is just to satisfy the compiler
}
