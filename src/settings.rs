//! Driver settings
//!
//! Stored as JSON next to the binary, or wherever the first CLI argument
//! points. Missing fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Headless driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display frames to run before exiting
    pub frames: u32,
    /// Simulated wall-clock time per display frame (seconds)
    pub frame_seconds: f32,

    // === Demo input ===
    /// Seed for the demo input generator
    pub seed: u64,
    /// Drive both paddles with seeded random key presses
    pub demo_input: bool,

    // === Output ===
    /// Print the final state as JSON on exit
    pub dump_state: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_seconds: 1.0 / 60.0,

            seed: 42,
            demo_input: true,

            dump_state: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path.map(Self::load) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }
}
