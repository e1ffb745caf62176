mod random;
mod strategy;
mod tactical;

use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::types::Player;

pub use random::RandomAi;
pub use strategy::{AiMove, Strategy};
pub use tactical::TacticalAi;

/// Selectable computer players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Random,
    #[default]
    Tactical,
}

/// Build a strategy acting for `player`, drawing randomness from `rng`.
pub fn build_strategy(kind: StrategyKind, player: Player, rng: Pcg64) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Random => Box::new(RandomAi::from_rng(rng)),
        StrategyKind::Tactical => Box::new(TacticalAi::from_rng(player, rng)),
    }
}
