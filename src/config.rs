// Configuration module for reading Snake.toml
// This module provides OOP-style configuration management for the Battlesnake bot

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::random::{RandomSource, SeededRandom, ThreadRandom};

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub identity: IdentityConfig,
    pub taunts: TauntConfig,
    pub strategy: StrategyConfig,
    #[serde(default)]
    pub random: RandomConfig,
    pub debug: DebugConfig,
}

/// Appearance returned when a game starts
#[derive(Debug, Deserialize, Clone)]
pub struct IdentityConfig {
    pub name: String,
    pub color: String,
    pub head_url: String,
    pub head_type: String,
    pub tail_type: String,
    pub start_taunt: String,
}

/// Per-turn taunt texts
#[derive(Debug, Deserialize, Clone)]
pub struct TauntConfig {
    /// Sent with the fallback move when nothing is safe
    pub forced: String,
    /// Sent when exactly one opponent is on the board; `{name}` is replaced by its name
    pub named: String,
    pub generic: String,
}

impl TauntConfig {
    pub fn render_named(&self, name: &str) -> String {
        self.named.replace("{name}", name)
    }
}

/// Which heuristic gates the final move
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// Always prefer the nearest food
    Food,
    /// Prefer a shorter opponent's head when one exists, food otherwise
    Attack,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StrategyConfig {
    pub gate: Gate,
}

/// Tie-break randomness. A seed makes every run reproducible.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl RandomConfig {
    pub fn build_source(&self) -> Arc<dyn RandomSource> {
        match self.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        }
    }
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the Snake.toml configuration file
    ///
    /// # Returns
    /// * `Result<Config, String>` - Parsed configuration or error message
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            identity: IdentityConfig {
                name: "NANO SNAKE".to_string(),
                color: "#FF0000".to_string(),
                head_url: "http://vignette1.wikia.nocookie.net/nintendo/images/6/61/Bowser_Icon.png/revision/latest?cb=20120820000805&path-prefix=en".to_string(),
                head_type: "fang".to_string(),
                tail_type: "curled".to_string(),
                start_taunt: "Yay!".to_string(),
            },
            taunts: TauntConfig {
                forced: "Nooooooo!".to_string(),
                named: "{name}'s mother was a garden hose!".to_string(),
                generic: "Boo!".to_string(),
            },
            strategy: StrategyConfig { gate: Gate::Food },
            random: RandomConfig { seed: None },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "battlesnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            log::warn!("Could not load Snake.toml ({}), using hardcoded defaults", e);
            Self::default_hardcoded()
        })
    }
}
