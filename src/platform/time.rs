//! Clock helpers
//!
//! On the web these read the browser clock in the player's local time zone.
//! Native builds have no time zone database and use UTC.

const MS_PER_DAY: f64 = 86_400_000.0;

/// Whole days since the Unix epoch for a millisecond timestamp
pub fn day_number(ms: f64) -> u32 {
    (ms / MS_PER_DAY).floor().max(0.0) as u32
}

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Local calendar day number (see [`day_number`])
#[cfg(target_arch = "wasm32")]
pub fn today() -> u32 {
    let date = js_sys::Date::new_0();
    // getTimezoneOffset is UTC minus local, in minutes
    let local_ms = date.get_time() - date.get_timezone_offset() * 60_000.0;
    day_number(local_ms)
}

/// Local hour of day (0-23)
#[cfg(target_arch = "wasm32")]
pub fn local_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> u32 {
    day_number(now_ms())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_hour() -> u32 {
    ((now_ms() / 3_600_000.0).floor() as u64 % 24) as u32
}

/// Nanoseconds since the Unix epoch (reward service timestamps)
pub fn timestamp_nanos() -> u64 {
    (now_ms() * 1_000_000.0) as u64
}
