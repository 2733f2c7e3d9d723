//! LocalStorage persistence for player-side data
//!
//! Features:
//! - Versioned JSON envelope
//! - Corruption detection (unparseable or wrong-version data falls back to defaults)
//!
//! Native builds have no storage; loads return `None` and saves are no-ops.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Current envelope format version
pub const ENVELOPE_VERSION: u32 = 1;

/// Wrapper stored under each key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub version: u32,
    pub data: T,
}

/// Wrap a value for storage
pub fn encode<T: Serialize>(value: &T) -> Option<String> {
    let envelope = Envelope {
        version: ENVELOPE_VERSION,
        data: value,
    };
    match serde_json::to_string(&envelope) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Failed to encode save data: {}", e);
            None
        }
    }
}

/// Unwrap stored JSON, rejecting corrupt or outdated envelopes
pub fn decode<T: DeserializeOwned>(json: &str) -> Option<T> {
    match serde_json::from_str::<Envelope<T>>(json) {
        Ok(envelope) if envelope.version == ENVELOPE_VERSION => Some(envelope.data),
        Ok(envelope) => {
            log::warn!(
                "Discarding save data with version {} (expected {})",
                envelope.version,
                ENVELOPE_VERSION
            );
            None
        }
        Err(e) => {
            log::warn!("Discarding corrupt save data: {}", e);
            None
        }
    }
}

/// Load a value from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()?;

    match storage.get_item(key) {
        Ok(Some(json)) => decode(&json),
        _ => None,
    }
}

/// Save a value to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save<T: Serialize>(key: &str, value: &T) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let (Some(storage), Some(json)) = (storage, encode(value)) {
        if storage.set_item(key, &json).is_err() {
            log::warn!("LocalStorage rejected write for {}", key);
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load<T: DeserializeOwned>(_key: &str) -> Option<T> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save<T: Serialize>(_key: &str, _value: &T) {
    // No-op for native
}
