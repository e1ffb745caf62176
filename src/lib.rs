#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::must_use_candidate, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

pub mod types;
pub mod rules;
pub mod cards;
pub mod board;
pub mod hand;
pub mod state;
pub mod rng;
pub mod config;
pub mod error;
pub mod ai;

pub mod engine {
    pub mod capture;
    pub mod score;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::ai::{build_strategy, AiMove, RandomAi, Strategy, StrategyKind, TacticalAi};
pub use crate::board::{Board, Cell};
pub use crate::cards::{load_cards_from_json, Card, CardsDb, Ranks};
pub use crate::config::MatchConfig;
pub use crate::engine::capture::{CaptureResult, Combo};
pub use crate::engine::score::{score, Score};
pub use crate::error::{CardsError, ConfigError, GameError};
pub use crate::hand::Hand;
pub use crate::rng::rng_for_match;
pub use crate::rules::Rule;
pub use crate::state::{GameState, Outcome};
pub use crate::types::{Element, Player, Side};
