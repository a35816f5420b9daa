// src/config.rs
//! Optional `salescope.toml` settings. CLI flags take precedence.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const CONFIG_FILE: &str = "salescope.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Reject empty input collections.
    pub strict: bool,
    /// Name of the revenue strategy: `discounted` or `margin`.
    pub revenue_strategy: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            strict: false,
            revenue_strategy: "discounted".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `salescope.toml` from the working directory, falling back to
    /// defaults when the file is absent or unreadable.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        if let Ok(content) = fs::read_to_string(Path::new(CONFIG_FILE)) {
            config.parse_toml(&content);
        }
        config
    }

    /// Merges settings from TOML text. Malformed content is ignored and the
    /// current settings kept.
    pub fn parse_toml(&mut self, content: &str) {
        if let Ok(parsed) = toml::from_str::<Config>(content) {
            self.preferences = parsed.preferences;
        }
    }
}
