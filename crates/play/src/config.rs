//! Play settings, read from an optional TOML file

use anyhow::{bail, Context, Result};
use chess_core::Color;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings for a session. Every field has a default, so a settings file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayConfig {
    /// Side the human plays; the random opponent takes the other
    pub human: Color,
    /// Pause before the opponent replies, in milliseconds
    pub opponent_delay_ms: u64,
    /// Seed for the opponent (None = fresh entropy every run)
    pub seed: Option<u64>,
    /// Draw pieces as Unicode glyphs instead of letters
    pub unicode: bool,
    /// Ring the terminal bell when a move is made
    pub bell: bool,
    /// Self-play stops after this many plies
    pub max_plies: u32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: Color::White,
            opponent_delay_ms: 600,
            seed: None,
            unicode: true,
            bell: true,
            max_plies: 200,
        }
    }
}

impl PlayConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_plies == 0 {
            bail!("max_plies must be at least 1");
        }
        Ok(())
    }

    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    pub fn opponent(&self) -> Color {
        self.human.other()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
