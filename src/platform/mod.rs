//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time (frame timestamps, reward timestamps)
//! - Calendar days (daily streaks)
//! - Local hour (time-of-day theme)

pub mod time;

pub use time::{day_number, local_hour, now_ms, timestamp_nanos, today};
