//! Local progression tracker
//!
//! Persisted to LocalStorage. Tracks lifetime collections, the daily play
//! streak, daily quests and experience/level, fed by session summaries.

use serde::{Deserialize, Serialize};

use crate::persistence;
use crate::sim::SessionSummary;

/// Experience needed per level (scaled by the current level)
pub const XP_PER_LEVEL: u64 = 1000;

/// What a quest counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    CollectFlowers,
    CollectSparkles,
    PlaySessions,
}

impl QuestKind {
    pub fn id(&self) -> &'static str {
        match self {
            QuestKind::CollectFlowers => "collect_flowers",
            QuestKind::CollectSparkles => "collect_sparkles",
            QuestKind::PlaySessions => "play_sessions",
        }
    }

    /// Progress a single session contributes
    fn progress_from(&self, summary: &SessionSummary) -> u32 {
        match self {
            QuestKind::CollectFlowers => summary.flowers_collected,
            QuestKind::CollectSparkles => summary.sparkles_collected,
            QuestKind::PlaySessions => 1,
        }
    }
}

/// A daily quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub kind: QuestKind,
    pub title: String,
    pub description: String,
    pub progress: u32,
    pub target: u32,
    pub reward: u64,
    pub completed: bool,
}

impl Quest {
    fn new(kind: QuestKind, title: &str, description: &str, target: u32, reward: u64) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            progress: 0,
            target,
            reward,
            completed: false,
        }
    }

    /// The standard daily quest set
    pub fn daily() -> Vec<Quest> {
        vec![
            Quest::new(
                QuestKind::CollectFlowers,
                "Flower Collector",
                "Collect 20 flowers",
                20,
                100,
            ),
            Quest::new(
                QuestKind::CollectSparkles,
                "Sparkle Hunter",
                "Collect 30 sparkles",
                30,
                150,
            ),
            Quest::new(
                QuestKind::PlaySessions,
                "Sky Explorer",
                "Complete 3 sessions",
                3,
                200,
            ),
        ]
    }
}

/// Lifetime collection totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    pub flowers: u64,
    pub sparkles: u64,
    pub boosts: u64,
}

/// Read-only overview for the rewards page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionStats {
    pub total_flowers: u64,
    pub total_sparkles: u64,
    pub total_boosts: u64,
    pub daily_streak: u32,
    pub level: u32,
    pub experience: u64,
    pub xp_for_next_level: u64,
    pub completed_quests: usize,
    pub total_quests: usize,
}

/// Player progression across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub collections: Collections,
    pub daily_streak: u32,
    /// Day number of the last finished session
    pub last_play_day: Option<u32>,
    pub quests: Vec<Quest>,
    pub level: u32,
    pub experience: u64,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}

impl Progression {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "skyworld_progression";

    /// Fresh progression at level 1
    pub fn new() -> Self {
        Self {
            collections: Collections::default(),
            daily_streak: 0,
            last_play_day: None,
            quests: Quest::daily(),
            level: 1,
            experience: 0,
        }
    }

    /// Experience required to leave the current level
    pub fn xp_for_next_level(&self) -> u64 {
        u64::from(self.level) * XP_PER_LEVEL
    }

    /// Fold a finished session into progression
    ///
    /// `today` is the local day number (see [`crate::platform::today`]).
    /// Returns true if the player levelled up.
    pub fn record_session(&mut self, summary: &SessionSummary, today: u32) -> bool {
        self.collections.flowers += u64::from(summary.flowers_collected);
        self.collections.sparkles += u64::from(summary.sparkles_collected);
        if summary.boost_collected {
            self.collections.boosts += 1;
        }

        self.update_streak(today);

        for quest in self.quests.iter_mut().filter(|q| !q.completed) {
            quest.progress += quest.kind.progress_from(summary);
            quest.completed = quest.progress >= quest.target;
            if quest.completed {
                log::info!("Quest completed: {} ({})", quest.title, quest.kind.id());
            }
        }

        self.experience += summary.total_reward;
        let needed = self.xp_for_next_level();
        if self.experience >= needed {
            self.level += 1;
            self.experience -= needed;
            log::info!("Level up! Now level {}", self.level);
            return true;
        }
        false
    }

    fn update_streak(&mut self, today: u32) {
        match self.last_play_day {
            Some(day) if day == today => {}
            Some(day) if day.checked_add(1) == Some(today) => {
                self.daily_streak = self.daily_streak.saturating_add(1)
            }
            _ => self.daily_streak = 1,
        }
        self.last_play_day = Some(today);
    }

    pub fn stats(&self) -> ProgressionStats {
        ProgressionStats {
            total_flowers: self.collections.flowers,
            total_sparkles: self.collections.sparkles,
            total_boosts: self.collections.boosts,
            daily_streak: self.daily_streak,
            level: self.level,
            experience: self.experience,
            xp_for_next_level: self.xp_for_next_level(),
            completed_quests: self.quests.iter().filter(|q| q.completed).count(),
            total_quests: self.quests.len(),
        }
    }

    /// Load progression from LocalStorage
    pub fn load() -> Self {
        match persistence::load::<Self>(Self::STORAGE_KEY) {
            Some(progression) => {
                log::info!("Loaded progression (level {})", progression.level);
                progression
            }
            None => {
                log::info!("No progression found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save progression to LocalStorage
    pub fn save(&self) {
        persistence::save(Self::STORAGE_KEY, self);
        log::info!("Progression saved (level {}, {} xp)", self.level, self.experience);
    }
}
