use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ai::{AiMove, Strategy};
use crate::board::Board;
use crate::cards::Card;
use crate::engine::capture::CaptureResult;
use crate::engine::score::{score, Score};
use crate::error::GameError;
use crate::hand::Hand;
use crate::rules::Rule;
use crate::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn from_score(s: Score) -> Self {
        match s.myself.cmp(&s.opponent) {
            std::cmp::Ordering::Greater => Outcome::Win(Player::Myself),
            std::cmp::Ordering::Less => Outcome::Win(Player::Opponent),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// One match in progress: the board, both hands and whose turn it is.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub hand_self: Hand,
    pub hand_opponent: Hand,
    pub next: Player,
    pub turn: u8,
}

impl GameState {
    #[inline]
    pub fn new(board: Board, hand_self: Hand, hand_opponent: Hand, first: Player) -> Self {
        Self {
            board,
            hand_self,
            hand_opponent,
            next: first,
            turn: 0,
        }
    }

    /// Shuffle a copy of `deck`, deal `hand_size` cards to each side (SELF first),
    /// lay out the board and pick who opens, all from `rng`.
    pub fn deal<R: Rng + ?Sized>(
        rule: Rule,
        deck: &[Card],
        hand_size: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let needed = hand_size * 2;
        if deck.len() < needed {
            return Err(GameError::NotEnoughCards {
                needed,
                available: deck.len(),
            });
        }

        let mut shuffled = deck.to_vec();
        shuffled.shuffle(rng);
        shuffled.truncate(needed);
        let opponent = shuffled.split_off(hand_size);

        let board = Board::with_rng(rule, rng);
        let first = if rng.gen_range(1..=10) % 2 == 0 {
            Player::Myself
        } else {
            Player::Opponent
        };
        log::debug!("dealt {hand_size} cards each, {first:?} opens");

        Ok(Self::new(
            board,
            Hand::new(shuffled),
            Hand::new(opponent),
            first,
        ))
    }

    #[inline]
    pub fn hand(&self, player: Player) -> &Hand {
        match player {
            Player::Myself => &self.hand_self,
            Player::Opponent => &self.hand_opponent,
        }
    }

    #[inline]
    pub fn hand_mut(&mut self, player: Player) -> &mut Hand {
        match player {
            Player::Myself => &mut self.hand_self,
            Player::Opponent => &mut self.hand_opponent,
        }
    }

    #[inline]
    pub fn current_hand(&self) -> &Hand {
        self.hand(self.next)
    }

    /// The match ends when the board is full or the side to move has nothing left to play.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.is_fully_occupied() || self.current_hand().is_empty()
    }

    /// Play a move for the side to move.
    /// Validates: match not over, cell in range and empty, card index in range.
    pub fn apply(&mut self, mv: AiMove) -> Result<Vec<CaptureResult>, GameError> {
        if self.is_over() {
            return Err(GameError::MatchOver);
        }
        let cell = mv.target_cell_index;
        match self.board.cell(cell) {
            None => return Err(GameError::CellOutOfRange(cell)),
            Some(c) if c.is_occupied() => return Err(GameError::CellOccupied(cell)),
            Some(_) => {}
        }

        let player = self.next;
        let hand = self.hand_mut(player);
        let count = hand.count_cards();
        let card = hand
            .draw(mv.selected_card_index)
            .ok_or(GameError::CardOutOfRange {
                index: mv.selected_card_index,
                count,
            })?;

        let results = self.board.put(cell, card, player);
        self.next = player.other();
        self.turn += 1;
        Ok(results)
    }

    /// Ask `strategy` for a move for the side to move and play it.
    /// Returns None once the match is over or the strategy has no move.
    pub fn step(
        &mut self,
        strategy: &mut dyn Strategy,
    ) -> Result<Option<Vec<CaptureResult>>, GameError> {
        if self.is_over() {
            return Ok(None);
        }
        let Some(mv) = strategy.calculate(&self.board, self.current_hand()) else {
            log::debug!("{} has no move for {:?}", strategy.name(), self.next);
            return Ok(None);
        };
        self.apply(mv).map(Some)
    }

    /// Alternate the two strategies until neither can continue, then report the result.
    pub fn play_out(
        &mut self,
        own: &mut dyn Strategy,
        opponent: &mut dyn Strategy,
    ) -> Result<Outcome, GameError> {
        loop {
            let strategy: &mut dyn Strategy = match self.next {
                Player::Myself => &mut *own,
                Player::Opponent => &mut *opponent,
            };
            if self.step(strategy)?.is_none() {
                break;
            }
        }
        let outcome = Outcome::from_score(self.score());
        log::debug!("match finished after {} turns: {outcome:?}", self.turn);
        Ok(outcome)
    }

    #[inline]
    pub fn score(&self) -> Score {
        score(self)
    }

    /// Result of the match, once it is over.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over().then(|| Outcome::from_score(self.score()))
    }
}
