use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use super::strategy::{AiMove, Strategy};
use crate::board::Board;
use crate::hand::Hand;

/// Plays a uniformly random card into a uniformly random empty cell.
pub struct RandomAi {
    rng: Pcg64,
}

impl RandomAi {
    pub fn new() -> Self {
        Self::from_rng(Pcg64::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Pcg64::seed_from_u64(seed))
    }

    pub fn from_rng(rng: Pcg64) -> Self {
        RandomAi { rng }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomAi {
    fn calculate(&mut self, board: &Board, hand: &Hand) -> Option<AiMove> {
        let empty = board.empty_cells();
        if empty.is_empty() || hand.is_empty() {
            return None;
        }
        // Cell and card are drawn independently.
        let target_cell_index = empty[self.rng.gen_range(0..empty.len())];
        let selected_card_index = self.rng.gen_range(0..hand.count_cards());
        Some(AiMove {
            target_cell_index,
            selected_card_index,
        })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
