//! Frame driver
//!
//! Owns the live session between frames: turns host timestamps into frame
//! deltas, withholds ticks while paused and resolves the summary exactly once
//! when the clock runs out.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::MAX_FRAME_DT;
use crate::progression::Progression;
use crate::rewards::{RewardRecord, RewardRecorder};
use crate::sanitize_dt;
use crate::sim::{FrameInput, Session, SessionSummary, advance, end_session};
use crate::theme::Theme;

/// What happened on a driver frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// No session running
    Idle,
    /// Session exists but ticks are withheld
    Paused,
    /// Session advanced and is still active
    Running,
    /// Session finished this frame (the driver no longer holds it)
    Ended(SessionSummary),
}

/// Host-side owner of a play session
pub struct FrameDriver {
    session: Option<Session>,
    rng: Pcg32,
    seed: u64,
    theme: Theme,
    /// Timestamp (seconds) of the previous simulated frame
    last_time: Option<f64>,
    paused: bool,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            session: None,
            rng: Pcg32::seed_from_u64(0),
            seed: 0,
            theme: Theme::default(),
            last_time: None,
            paused: false,
        }
    }

    /// Start a fresh session, discarding any running one
    pub fn start(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.session = Some(Session::new(&mut self.rng));
        self.last_time = None;
        self.paused = false;
        log::info!("Started new session with seed: {}", seed);
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if self.session.is_some() && !self.paused {
            self.paused = true;
            log::info!("Session paused");
        }
    }

    /// Resume ticking; paused wall time is not simulated
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.last_time = None;
            log::info!("Session resumed");
        }
    }

    /// Run one host frame at timestamp `now` (seconds)
    pub fn frame(&mut self, now: f64, input: &FrameInput) -> FrameOutcome {
        let Some(session) = self.session.as_mut() else {
            return FrameOutcome::Idle;
        };
        if self.paused {
            return FrameOutcome::Paused;
        }

        let dt = match self.last_time {
            Some(last) => sanitize_dt((now - last) as f32).min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_time = Some(now);

        advance(session, dt, input, &self.theme, &mut self.rng);
        if session.is_active() {
            return FrameOutcome::Running;
        }

        let finished = self.session.take();
        self.last_time = None;
        match finished.as_ref().map(end_session) {
            Some(Ok(summary)) => {
                log::info!(
                    "Session complete: reward {}, {} decorations",
                    summary.total_reward,
                    summary.decorations_unlocked
                );
                FrameOutcome::Ended(summary)
            }
            Some(Err(e)) => {
                log::error!("Failed to resolve session: {}", e);
                FrameOutcome::Idle
            }
            None => FrameOutcome::Idle,
        }
    }

    /// Hand a finished session to the collaborators
    ///
    /// Progression is always updated; the reward is recorded only when the
    /// session earned something. Recorder failures are logged, not returned.
    /// Returns true if the player levelled up.
    pub fn finish<R: RewardRecorder + ?Sized>(
        &self,
        summary: &SessionSummary,
        progression: &mut Progression,
        recorder: &mut R,
        today: u32,
        timestamp_nanos: u64,
    ) -> bool {
        let levelled_up = progression.record_session(summary, today);

        if let Some(record) = RewardRecord::from_summary(summary, timestamp_nanos) {
            if let Err(e) = recorder.record(record) {
                log::warn!("Reward for session {} not recorded: {}", self.seed, e);
            }
        }

        levelled_up
    }
}
