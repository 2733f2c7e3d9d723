//! Browser bindings
//!
//! The mini-app shell (JavaScript) owns the canvas and the
//! `requestAnimationFrame` loop. Each frame it calls [`SkyworldGame::frame`]
//! and draws from [`SkyworldGame::snapshot_json`]. Reward records are queued
//! here and drained by the shell, which talks to the backend.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::driver::{FrameDriver, FrameOutcome};
use crate::platform;
use crate::progression::Progression;
use crate::rewards::RewardLog;
use crate::settings::Settings;
use crate::sim::{FrameInput, Session, SessionSummary};
use crate::theme::{Theme, TimeOfDay};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Qudo Skyworld engine loaded");
}

/// What the renderer reads each frame
#[derive(Serialize)]
struct Snapshot<'a> {
    session: &'a Session,
    theme: &'a Theme,
    remaining: f32,
    avatar_frame: u32,
    boost_alpha: f32,
    paused: bool,
}

/// Game instance handed to the JavaScript shell
#[wasm_bindgen]
pub struct SkyworldGame {
    driver: FrameDriver,
    settings: Settings,
    progression: Progression,
    pending_rewards: RewardLog,
    last_summary: Option<SessionSummary>,
}

impl Default for SkyworldGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SkyworldGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> SkyworldGame {
        let settings = Settings::load();
        let mut driver = FrameDriver::new();
        driver.set_theme(settings.effective_theme(platform::local_hour()));
        Self {
            driver,
            settings,
            progression: Progression::load(),
            pending_rewards: RewardLog::new(),
            last_summary: None,
        }
    }

    /// Start a new session; without a seed one is taken from the clock
    pub fn start(&mut self, seed: Option<u64>) {
        self.last_summary = None;
        self.driver
            .start(seed.unwrap_or_else(|| platform::now_ms() as u64));
    }

    /// Seed of the current or last session, for replays
    pub fn seed(&self) -> u64 {
        self.driver.seed()
    }

    /// Advance one animation frame; returns true when the session just ended
    pub fn frame(&mut self, now_ms: f64, x: f32, y: f32, pressed: bool) -> bool {
        let input = FrameInput::new(x, y, pressed);
        match self.driver.frame(now_ms / 1000.0, &input) {
            FrameOutcome::Ended(summary) => {
                self.driver.finish(
                    &summary,
                    &mut self.progression,
                    &mut self.pending_rewards,
                    platform::today(),
                    platform::timestamp_nanos(),
                );
                self.progression.save();
                self.last_summary = Some(summary);
                true
            }
            FrameOutcome::Idle | FrameOutcome::Paused | FrameOutcome::Running => false,
        }
    }

    pub fn pause(&mut self) {
        self.driver.pause();
    }

    pub fn resume(&mut self) {
        self.driver.resume();
    }

    pub fn is_paused(&self) -> bool {
        self.driver.is_paused()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Re-read the local clock (the shell calls this once a minute)
    pub fn refresh_theme(&mut self) {
        self.set_hour(platform::local_hour());
    }

    /// Theme the sky for a local hour (0-23)
    pub fn set_hour(&mut self, hour: u32) {
        self.driver.set_theme(self.settings.effective_theme(hour));
    }

    /// Pin the sky to "morning"/"afternoon"/"evening"/"night", or follow the
    /// clock again with `None`
    pub fn set_time_of_day_override(&mut self, name: Option<String>) {
        self.settings.time_of_day_override = name.as_deref().and_then(TimeOfDay::from_str);
        self.settings.save();
        self.refresh_theme();
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.settings.reduced_motion = enabled;
        self.settings.save();
        self.refresh_theme();
    }

    pub fn set_sparkle_effects(&mut self, enabled: bool) {
        self.settings.sparkle_effects = enabled;
        self.settings.save();
        self.refresh_theme();
    }

    /// Renderer snapshot of the running session
    pub fn snapshot_json(&self) -> Option<String> {
        let session = self.driver.session()?;
        let snapshot = Snapshot {
            session,
            theme: self.driver.theme(),
            remaining: session.remaining(),
            avatar_frame: session.avatar_frame(),
            boost_alpha: if self.settings.effective_boost_pulse() {
                session.boost_alpha()
            } else {
                1.0
            },
            paused: self.driver.is_paused(),
        };
        to_json(&snapshot)
    }

    /// Summary of the most recently finished session
    pub fn summary_json(&self) -> Option<String> {
        self.last_summary.as_ref().and_then(to_json)
    }

    pub fn progression_json(&self) -> Option<String> {
        to_json(&self.progression.stats())
    }

    /// Reward records waiting for the backend; clears the queue
    pub fn take_pending_rewards_json(&mut self) -> Option<String> {
        let json = to_json(&self.pending_rewards.entries)?;
        self.pending_rewards.entries.clear();
        Some(json)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Failed to serialize for the shell: {}", e);
            None
        }
    }
}
