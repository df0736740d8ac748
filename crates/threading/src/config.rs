//! Threading options and their loading
//!
//! Options are resolved in this order:
//! 1. `threading.json` in the shared fwdmail config directory
//! 2. Built-in defaults
//!
//! Missing fields in the JSON file fall back to their defaults, so a file
//! containing only `{"timeWindowHours": 48}` is valid.

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options filename in the fwdmail config directory
const OPTIONS_FILE: &str = "threading.json";

/// Smallest accepted subject-match window, in hours
pub const MIN_TIME_WINDOW_HOURS: u32 = 1;
/// Largest accepted subject-match window (one week), in hours
pub const MAX_TIME_WINDOW_HOURS: u32 = 168;

/// Switches for the signals the matcher is allowed to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadingOptions {
    /// Compare subjects after stripping one Re:/Fwd: layer (default: true)
    pub subject_normalization: bool,
    /// Match on In-Reply-To/References headers (default: true)
    pub references_tracking: bool,
    /// Require shared participants and a time window for subject matches (default: true)
    pub participant_grouping: bool,
    /// Maximum gap between subject-matched messages, 1..=168 (default: 24)
    pub time_window_hours: u32,
}

impl Default for ThreadingOptions {
    fn default() -> Self {
        Self {
            subject_normalization: true,
            references_tracking: true,
            participant_grouping: true,
            time_window_hours: 24,
        }
    }
}

impl ThreadingOptions {
    /// Load options from the config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        if config::config_exists(OPTIONS_FILE) {
            let options: Self = config::load_json(OPTIONS_FILE)?;
            options.validate()?;
            log::debug!("loaded threading options from {}", OPTIONS_FILE);
            return Ok(options);
        }

        Ok(Self::default())
    }

    /// Load options from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let options: Self = config::load_json_file(path)?;
        options
            .validate()
            .with_context(|| format!("Invalid threading options in {}", path.display()))?;
        Ok(options)
    }

    /// Parse options from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).context("Failed to parse threading options JSON")?;
        options.validate()?;
        Ok(options)
    }

    /// Persist options to the config directory, returning the written path
    pub fn save(&self) -> Result<PathBuf> {
        self.validate()?;
        config::save_json(OPTIONS_FILE, self)
    }

    /// Write options to a specific JSON file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        config::save_json_file(path, self)
    }

    /// Check that the time window is within the accepted range
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_TIME_WINDOW_HOURS..=MAX_TIME_WINDOW_HOURS).contains(&self.time_window_hours),
            "timeWindowHours must be between {} and {}, got {}",
            MIN_TIME_WINDOW_HOURS,
            MAX_TIME_WINDOW_HOURS,
            self.time_window_hours
        );
        Ok(())
    }

    /// Get the default options file path (~/.config/fwdmail/threading.json)
    pub fn default_options_path() -> Option<PathBuf> {
        config::config_path(OPTIONS_FILE)
    }
}
