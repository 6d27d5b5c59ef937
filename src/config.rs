//! Engine configuration.
//!
//! Defaults reproduce the standard behaviour; a TOML file can override any
//! subset of fields.
//!
//! ```
//! use u_fixture::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     season_holiday_window_days = 5
//!     spare_week_notes = "Bye Week"
//! "#).unwrap();
//!
//! assert_eq!(config.season_holiday_window_days, 5);
//! assert_eq!(config.single_date_holiday_window_days, 10);
//! assert_eq!(config.spare_week_notes, "Bye Week");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Notes written on spare weeks left after the last round.
pub const DEFAULT_SPARE_WEEK_NOTES: &str = "Free Week";

/// Tunable engine behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Holiday proximity window (± days) for season-wide annotation.
    pub season_holiday_window_days: u32,
    /// Holiday proximity window (± days) for single-date checks.
    pub single_date_holiday_window_days: u32,
    /// Notes on spare free rows.
    pub spare_week_notes: String,
    /// Append balance warnings to the response message.
    pub append_balance_warnings: bool,
    /// Shuffle the roster with this seed before pairing.
    /// `None` keeps the caller's order.
    pub shuffle_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            season_holiday_window_days: 7,
            single_date_holiday_window_days: 10,
            spare_week_notes: DEFAULT_SPARE_WEEK_NOTES.to_string(),
            append_balance_warnings: true,
            shuffle_seed: None,
        }
    }
}

impl EngineConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the season-wide holiday window.
    pub fn with_season_holiday_window(mut self, days: u32) -> Self {
        self.season_holiday_window_days = days;
        self
    }

    /// Sets the single-date holiday window.
    pub fn with_single_date_holiday_window(mut self, days: u32) -> Self {
        self.single_date_holiday_window_days = days;
        self
    }

    /// Sets the notes for spare weeks.
    pub fn with_spare_week_notes(mut self, notes: impl Into<String>) -> Self {
        self.spare_week_notes = notes.into();
        self
    }

    /// Enables or disables appending balance warnings to the message.
    pub fn with_balance_warnings(mut self, append: bool) -> Self {
        self.append_balance_warnings = append;
        self
    }

    /// Shuffles the roster with a fixed seed before pairing.
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }
}
