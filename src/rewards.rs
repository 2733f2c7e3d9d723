//! Reward recording seam
//!
//! The remote backend stores currency earned per session. The engine only
//! builds the record; delivering it is the recorder's job.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::sim::SessionSummary;

/// One reward entry as the backend expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecord {
    pub amount: u64,
    pub description: String,
    pub timestamp_nanos: u64,
}

impl RewardRecord {
    /// Build the record for a finished session; empty sessions earn nothing
    /// and produce no record
    pub fn from_summary(summary: &SessionSummary, timestamp_nanos: u64) -> Option<Self> {
        if summary.total_reward == 0 {
            return None;
        }
        Some(Self {
            amount: summary.total_reward,
            description: format!(
                "Session completed: {} flowers, {} sparkles",
                summary.flowers_collected, summary.sparkles_collected
            ),
            timestamp_nanos,
        })
    }
}

/// Destination for reward records (remote service, local log, ...)
pub trait RewardRecorder {
    fn record(&mut self, record: RewardRecord) -> Result<(), RecordError>;
}

/// In-memory recorder for the headless host and tests
#[derive(Debug, Clone, Default)]
pub struct RewardLog {
    pub entries: Vec<RewardRecord>,
}

impl RewardLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all recorded amounts
    pub fn balance(&self) -> u64 {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

impl RewardRecorder for RewardLog {
    fn record(&mut self, record: RewardRecord) -> Result<(), RecordError> {
        log::debug!("Recorded reward {} ({})", record.amount, record.description);
        self.entries.push(record);
        Ok(())
    }
}
