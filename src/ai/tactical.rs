use rand_pcg::Pcg64;

use super::random::RandomAi;
use super::strategy::{AiMove, Strategy};
use crate::board::Board;
use crate::hand::Hand;
use crate::types::{Player, Side};

/// Corner cells with the two sides they leave open to attack, in preference order.
const CORNERS: [(usize, [Side; 2]); 4] = [
    (8, [Side::Top, Side::Left]),
    (6, [Side::Top, Side::Right]),
    (2, [Side::Bottom, Side::Left]),
    (0, [Side::Bottom, Side::Right]),
];

/// Stands in for a side that cannot be attacked after placement.
const UNEXPOSED_RANK: u16 = 10;

/// A capture the acting hand can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Threat {
    target_cell: usize,
    attack_cell: usize,
    attack_card: usize,
    /// Sum of the attacking card's ranks on the sides it leaves exposed.
    exposed_defense: u16,
}

#[derive(Debug, Clone, Copy)]
struct CornerCandidate {
    cell: usize,
    sum: u16,
    card: usize,
}

/// Heuristic player: takes the safest capture available, otherwise secures a corner,
/// otherwise plays at random.
pub struct TacticalAi {
    player: Player,
    fallback: RandomAi,
}

impl TacticalAi {
    /// Tactical player acting for `player`. Captures target the other side's cards.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            fallback: RandomAi::new(),
        }
    }

    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            fallback: RandomAi::with_seed(seed),
        }
    }

    pub fn from_rng(player: Player, rng: Pcg64) -> Self {
        Self {
            player,
            fallback: RandomAi::from_rng(rng),
        }
    }

    #[inline]
    pub fn player(&self) -> Player {
        self.player
    }

    fn capturing_move(&self, board: &Board, hand: &Hand) -> Option<AiMove> {
        let mut threats = self.find_threats(board, hand);
        // Stable: equal scores keep board scan order.
        threats.sort_by(|a, b| b.exposed_defense.cmp(&a.exposed_defense));
        let best = threats.first()?;
        log::trace!(
            "capture cell {} from cell {} with card {} (defense {})",
            best.target_cell,
            best.attack_cell,
            best.attack_card,
            best.exposed_defense
        );
        Some(AiMove {
            target_cell_index: best.attack_cell,
            selected_card_index: best.attack_card,
        })
    }

    fn find_threats(&self, board: &Board, hand: &Hand) -> Vec<Threat> {
        let target = self.player.other();
        let mut threats = Vec::new();

        for (i, cell) in board.cells().iter().enumerate() {
            let Some(card) = cell.card.as_ref() else { continue };
            if cell.owner != Some(target) {
                continue;
            }

            for (side, attack_cell) in board.exposed_sides(i) {
                let target_rank = card.rank(side);
                let facing = side.opposite();
                let capable: Vec<usize> = hand
                    .cards()
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.rank(facing) > target_rank)
                    .map(|(j, _)| j)
                    .collect();
                let exposed: Vec<Side> = board
                    .exposed_sides(attack_cell)
                    .into_iter()
                    .map(|(s, _)| s)
                    .collect();
                if capable.is_empty() || exposed.is_empty() {
                    continue;
                }

                let defense = |j: usize| -> u16 {
                    let c = &hand.cards()[j];
                    u16::from(c.rank(exposed[0]))
                        + exposed.get(1).map_or(UNEXPOSED_RANK, |&s| u16::from(c.rank(s)))
                };
                let mut attack_card = capable[0];
                let mut exposed_defense = defense(attack_card);
                for &j in &capable[1..] {
                    let d = defense(j);
                    if d > exposed_defense {
                        attack_card = j;
                        exposed_defense = d;
                    }
                }

                threats.push(Threat {
                    target_cell: i,
                    attack_cell,
                    attack_card,
                    exposed_defense,
                });
            }
        }

        threats
    }

    fn defensive_corner_move(board: &Board, hand: &Hand) -> Option<AiMove> {
        let available = available_corners(board);
        let candidates: Vec<CornerCandidate> = CORNERS
            .iter()
            .map(|&(cell, sides)| {
                let (sum, card) = max_sum_from_hand(hand, sides);
                CornerCandidate { cell, sum, card }
            })
            .filter(|c| available.contains(&c.cell))
            .collect();

        let sums: Vec<u16> = candidates.iter().map(|c| c.sum).collect();
        let best = candidates[max_index(&sums)?];
        log::trace!("corner {} with card {} (sum {})", best.cell, best.card, best.sum);
        Some(AiMove {
            target_cell_index: best.cell,
            selected_card_index: best.card,
        })
    }
}

impl Strategy for TacticalAi {
    fn calculate(&mut self, board: &Board, hand: &Hand) -> Option<AiMove> {
        if hand.is_empty() || board.is_fully_occupied() {
            return None;
        }
        if board.is_empty() {
            return Self::defensive_corner_move(board, hand);
        }
        self.capturing_move(board, hand)
            .or_else(|| Self::defensive_corner_move(board, hand))
            .or_else(|| {
                log::trace!("no capture or corner, falling back to random");
                self.fallback.calculate(board, hand)
            })
    }

    fn name(&self) -> &str {
        "Tactical"
    }
}

fn available_corners(board: &Board) -> Vec<usize> {
    [0, 2, 6, 8]
        .into_iter()
        .filter(|&i| board.is_cell_empty(i))
        .collect()
}

/// Hand card with the largest rank sum over `sides`. Ties keep the earlier card.
fn max_sum_from_hand(hand: &Hand, sides: [Side; 2]) -> (u16, usize) {
    let mut best = (0u16, 0usize);
    for (i, card) in hand.cards().iter().enumerate() {
        let sum: u16 = sides.iter().map(|&s| u16::from(card.rank(s))).sum();
        if sum > best.0 {
            best = (sum, i);
        }
    }
    best
}

/// Position of the largest value; the first one wins ties.
fn max_index(values: &[u16]) -> Option<usize> {
    let (&first, rest) = values.split_first()?;
    let mut max = first;
    let mut max_idx = 0;
    for (i, &v) in rest.iter().enumerate() {
        if v > max {
            max = v;
            max_idx = i + 1;
        }
    }
    Some(max_idx)
}
