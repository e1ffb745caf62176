use std::path::PathBuf;

/// Errors raised while loading a card deck from JSON.
#[derive(Debug, thiserror::Error)]
pub enum CardsError {
    #[error("failed to read cards file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse cards JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no cards in JSON")]
    Empty,

    #[error("card id {id} '{name}' has invalid rank values (must be 1..=10)")]
    InvalidRanks { id: u16, name: String },

    #[error("duplicate card id {id} ('{first}' and '{second}')")]
    DuplicateId {
        id: u16,
        first: String,
        second: String,
    },

    #[error("duplicate card name '{name}' for ids {first} and {second}")]
    DuplicateName { name: String, first: u16, second: u16 },
}

/// Errors raised while loading a match configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors raised by the match orchestrator. The board and hands themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell index {0} out of range")]
    CellOutOfRange(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("card index {index} out of range (hand holds {count})")]
    CardOutOfRange { index: usize, count: usize },

    #[error("deck holds {available} cards, {needed} needed to deal")]
    NotEnoughCards { needed: usize, available: usize },

    #[error("match is already over")]
    MatchOver,
}
