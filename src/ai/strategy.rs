use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::hand::Hand;

/// A move chosen by a strategy: which empty cell to play into and which hand card to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiMove {
    pub target_cell_index: usize,
    pub selected_card_index: usize,
}

/// Universal interface for computer players.
///
/// Strategies only read the board and hand. The caller draws the card and places it.
pub trait Strategy {
    /// Pick a move, or None when there is nothing to play (full board or empty hand).
    /// None means "skip / end of match", never an error.
    fn calculate(&mut self, board: &Board, hand: &Hand) -> Option<AiMove>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}
