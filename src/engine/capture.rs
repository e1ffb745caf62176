use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{neighbor, Player, Side};

/// How a capture event came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Combo {
    Same,
    Plus,
    /// Triggered by a card that was itself just captured.
    Combo,
}

/// One capture event: the cells that changed hands together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    pub captured_cell_indices: Vec<usize>,
    pub new_owner: Player,
    pub combo: Option<Combo>,
}

/// Rank of the card at `idx` on `side`, shifted by the cell element when the
/// elemental rule is on: +1 when the card's element matches the cell's, -1 when
/// the cell has an element the card does not share. Not clamped.
pub fn effective_rank(board: &Board, idx: usize, side: Side) -> Option<i16> {
    let cell = board.cell(idx)?;
    let card = cell.card.as_ref()?;
    let base = i16::from(card.rank(side));
    if !board.rule().elemental {
        return Some(base);
    }
    let delta = match cell.element {
        None => 0,
        Some(e) if card.element == Some(e) => 1,
        Some(_) => -1,
    };
    Some(base + delta)
}

struct Contest {
    defender: usize,
    attacker_rank: i16,
    defender_rank: i16,
}

/// Resolve captures made by the card at `idx`.
///
/// A chained call only applies the basic rule; Same/Plus grouping happens at
/// the top level only. Every chained event is tagged `Combo::Combo`.
pub(crate) fn capture_adjacent(board: &mut Board, idx: usize, chained: bool) -> Vec<CaptureResult> {
    let Some(owner) = board.cell(idx).and_then(|c| c.owner) else {
        return Vec::new();
    };

    let mut captured: Vec<usize> = Vec::new();
    let mut contests: Vec<Contest> = Vec::new();

    for side in Side::all() {
        let Some(nidx) = neighbor(idx, side) else { continue };
        let Some(defender_owner) = board.cell(nidx).and_then(|c| c.owner) else {
            continue;
        };
        if defender_owner == owner {
            continue;
        }
        let (Some(attacker_rank), Some(defender_rank)) = (
            effective_rank(board, idx, side),
            effective_rank(board, nidx, side.opposite()),
        ) else {
            continue;
        };

        if attacker_rank > defender_rank {
            board.set_owner(nidx, owner);
            captured.push(nidx);
        }
        if !chained {
            contests.push(Contest {
                defender: nidx,
                attacker_rank,
                defender_rank,
            });
        }
    }

    // Same/Plus: neighbors whose rank sums coincide are taken together.
    let mut by_sum: BTreeMap<i16, Vec<Contest>> = BTreeMap::new();
    for c in contests {
        by_sum.entry(c.attacker_rank + c.defender_rank).or_default().push(c);
    }

    let mut results = Vec::new();
    for group in by_sum.into_values().filter(|g| g.len() > 1) {
        // First contest of the group decides between Same and Plus.
        let combo = if group[0].attacker_rank == group[0].defender_rank {
            Combo::Same
        } else {
            Combo::Plus
        };
        let indices: Vec<usize> = group.iter().map(|c| c.defender).collect();
        results.push(CaptureResult {
            captured_cell_indices: indices.clone(),
            new_owner: owner,
            combo: Some(combo),
        });
        for nidx in indices {
            captured.retain(|&c| c != nidx);
            board.set_owner(nidx, owner);
            results.extend(capture_adjacent(board, nidx, true));
        }
    }

    if !captured.is_empty() {
        results.push(CaptureResult {
            captured_cell_indices: captured.clone(),
            new_owner: owner,
            combo: chained.then_some(Combo::Combo),
        });
        if chained {
            for nidx in captured {
                results.extend(capture_adjacent(board, nidx, true));
            }
        }
    }

    results
}
