use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::types::Player;

/// Cards held by each side: cells owned on the board plus cards still in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "SELF")]
    pub myself: u8,
    #[serde(rename = "OPPONENT")]
    pub opponent: u8,
}

impl Score {
    #[inline]
    pub fn of(&self, player: Player) -> u8 {
        match player {
            Player::Myself => self.myself,
            Player::Opponent => self.opponent,
        }
    }

    /// SELF minus OPPONENT.
    #[inline]
    pub fn margin(&self) -> i8 {
        self.myself as i8 - self.opponent as i8
    }
}

pub fn score(state: &GameState) -> Score {
    let mut s = Score {
        myself: state.hand(Player::Myself).count_cards() as u8,
        opponent: state.hand(Player::Opponent).count_cards() as u8,
    };
    for cell in state.board.cells() {
        match cell.owner {
            Some(Player::Myself) => s.myself += 1,
            Some(Player::Opponent) => s.opponent += 1,
            None => {}
        }
    }
    s
}
