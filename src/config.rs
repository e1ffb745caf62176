use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ai::StrategyKind;
use crate::error::ConfigError;
use crate::rules::Rule;
use crate::types::CELL_COUNT;

/// Match setup, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub rule: Rule,
    pub hand_size: usize,
    pub seed: Option<u64>,
    pub own: StrategyKind,
    pub opponent: StrategyKind,
    pub cards: PathBuf,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            rule: Rule::default(),
            hand_size: 5,
            seed: None,
            own: StrategyKind::Tactical,
            opponent: StrategyKind::Tactical,
            cards: PathBuf::from("data/cards.json"),
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 || self.hand_size > CELL_COUNT {
            return Err(ConfigError::Validation(format!(
                "hand_size must be in 1..={CELL_COUNT}, got {}",
                self.hand_size
            )));
        }
        Ok(())
    }
}
