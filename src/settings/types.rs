//! Settings data types for Kart Racer
//!
//! This module defines the on-disk settings structure and the error type for
//! settings operations. It uses Serde for serialization/deserialization to
//! JSON format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The root settings file structure
///
/// A flat string-to-string map plus a version field. BTreeMap keeps the
/// serialized file in a stable key order across saves.
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsFile {
    pub version: u32,
    pub values: BTreeMap<String, String>,
}

impl Default for SettingsFile {
    fn default() -> Self {
        SettingsFile {
            version: CURRENT_SETTINGS_VERSION,
            values: BTreeMap::new(),
        }
    }
}

/// Error types for settings operations
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            SettingsError::InvalidVersion(v) => write!(f, "Invalid settings version: {}", v),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::SerializationError(err)
    }
}

/// Current settings file version
pub const CURRENT_SETTINGS_VERSION: u32 = 1;
