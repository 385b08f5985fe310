//! # Configuration Management Module
//!
//! Optional TOML configuration for Castle Escape. Every field has a default,
//! so a missing file, an empty file, or a file naming only a few keys all
//! produce a usable [`Config`].
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - Turn-based events and RNG seed
//! - [`FatigueConfig`] - Optional health drain for slow players
//! - [`LoggingConfig`] - Log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use castle_escape::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("castle.toml")?;
//!     println!("Ambient events every {} turns", config.game.ambient_interval);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! ambient_interval = 10
//! seed = 42
//!
//! [game.fatigue]
//! enabled = true
//! after_turns = 50
//! damage = 5
//!
//! [logging]
//! level = "info"
//! file = "castle.log"
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Print an atmospheric message every this many turns (0 disables).
    #[serde(default = "default_ambient_interval")]
    pub ambient_interval: u32,
    #[serde(default)]
    pub fatigue: FatigueConfig,
    /// Seed for ambient message selection. Random when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_ambient_interval() -> u32 {
    10
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ambient_interval: default_ambient_interval(),
            fatigue: FatigueConfig::default(),
            seed: None,
        }
    }
}

/// Once `after_turns` have passed, every further turn costs `damage` health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_fatigue_after_turns")]
    pub after_turns: u32,
    #[serde(default = "default_fatigue_damage")]
    pub damage: u8,
}

fn default_fatigue_after_turns() -> u32 {
    50
}

fn default_fatigue_damage() -> u8 {
    5
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            after_turns: default_fatigue_after_turns(),
            damage: default_fatigue_damage(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level, falling back to `warn` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise use defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let fatigue = &self.game.fatigue;
        if fatigue.enabled && fatigue.damage == 0 {
            return Err(anyhow!(
                "game.fatigue.damage must be at least 1 when fatigue is enabled"
            ));
        }
        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.game.ambient_interval, 10);
        assert!(!config.game.fatigue.enabled);
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn partial_fatigue_table_keeps_other_defaults() {
        let config: Config = toml::from_str("[game.fatigue]\nenabled = true\n").unwrap();
        assert!(config.game.fatigue.enabled);
        assert_eq!(config.game.fatigue.after_turns, 50);
        assert_eq!(config.game.fatigue.damage, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_damage_fatigue_is_rejected() {
        let config: Config =
            toml::from_str("[game.fatigue]\nenabled = true\ndamage = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        let logging = LoggingConfig {
            level: "chatty".to_string(),
            file: None,
        };
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = Config::default().to_toml().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Config::default());
    }
}
