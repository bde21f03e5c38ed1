//! Persisted Settings for Kart Racer
//!
//! This module provides the small key-value store the menu reads its
//! persisted player name from:
//! - JSON-based settings file (human-readable, debuggable)
//! - A `SettingsStore` trait so components take the store as an injected
//!   capability instead of touching global state
//! - Graceful degradation: a missing file or key is not an error
//!
//! # Architecture
//!
//! - `types`: settings data structures and error types
//! - `store`: the SettingsStore trait and file-backed implementation
//!
//! # Example Usage
//!
//! ```ignore
//! // Open (or start empty if the file doesn't exist)
//! let mut store = FileSettingsStore::open("~/.kart_racer/settings.json");
//!
//! // Read the persisted racer name, if any
//! let name = store.get(PLAYER_NAME_KEY);
//!
//! // Persist after the player confirms a race
//! store.set(PLAYER_NAME_KEY, "Alice");
//! store.flush()?;
//! ```

pub mod store;
pub mod types;

// Re-export commonly used types
pub use store::{FileSettingsStore, SettingsStore};
pub use types::*;

/// Key under which the player's display name is persisted
pub const PLAYER_NAME_KEY: &str = "KartRacer.PlayerName";

/// Key under which the last race-launch timestamp is persisted
pub const LAST_PLAYED_KEY: &str = "KartRacer.LastPlayed";
