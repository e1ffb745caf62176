use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::capture::{capture_adjacent, CaptureResult};
use crate::rules::Rule;
use crate::types::{neighbor, Element, Player, Side, CELL_COUNT};

/// One grid slot. `element` is fixed at board construction; `card` is set once,
/// after which only `owner` may change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub card: Option<Card>,
    pub owner: Option<Player>,
    pub element: Option<Element>,
}

impl Cell {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.card.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    // Cells 0..=8 laid out row-major (r*3 + c)
    cells: [Cell; CELL_COUNT],
    rule: Rule,
}

impl Board {
    /// New board using the thread RNG for elemental cells.
    pub fn new(rule: Rule) -> Self {
        Self::with_rng(rule, &mut rand::thread_rng())
    }

    /// New board drawing elemental cells from `rng`. With `rule.elemental` each cell
    /// independently has a 1 in 5 chance of receiving a uniformly chosen element.
    pub fn with_rng<R: Rng + ?Sized>(rule: Rule, rng: &mut R) -> Self {
        let mut elements = [None; CELL_COUNT];
        if rule.elemental {
            for slot in &mut elements {
                if rng.gen_range(1..=10) % 4 == 0 {
                    *slot = Some(Element::ALL[rng.gen_range(0..Element::ALL.len())]);
                }
            }
        }
        Self::from_elements(rule, elements)
    }

    #[inline]
    pub fn from_elements(rule: Rule, cell_elements: [Option<Element>; CELL_COUNT]) -> Self {
        Self {
            cells: cell_elements.map(|element| Cell {
                element,
                ..Cell::default()
            }),
            rule,
        }
    }

    /// Place `card` for `owner` and resolve every capture it triggers.
    ///
    /// Returns the capture events in emission order. Placing into an occupied
    /// or out-of-range cell changes nothing and returns an empty list.
    pub fn put(&mut self, idx: usize, card: Card, owner: Player) -> Vec<CaptureResult> {
        let Some(cell) = self.cells.get_mut(idx) else {
            return Vec::new();
        };
        if cell.is_occupied() {
            return Vec::new();
        }
        log::debug!("put '{}' at cell {idx} for {owner:?}", card.name);
        cell.card = Some(card);
        cell.owner = Some(owner);

        let results = capture_adjacent(self, idx, false);
        for r in &results {
            log::debug!(
                "captured {:?} -> {:?} ({:?})",
                r.captured_cell_indices,
                r.new_owner,
                r.combo
            );
        }
        results
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    #[inline]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    #[inline]
    pub fn is_cell_empty(&self, idx: usize) -> bool {
        self.cells.get(idx).is_some_and(|c| !c.is_occupied())
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    #[inline]
    pub fn is_fully_occupied(&self) -> bool {
        self.cells.iter().all(Cell::is_occupied)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(Cell::is_occupied)
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_cell_empty(i)).collect()
    }

    /// Neighbor indices for a cell in [Top, Left, Right, Bottom] order.
    /// None means the side faces the edge of the grid.
    #[inline]
    pub fn neighbors(&self, idx: usize) -> [Option<usize>; 4] {
        Side::all().map(|side| neighbor(idx, side))
    }

    /// Sides of `idx` that touch an in-bounds, still empty cell, paired with that cell.
    pub fn exposed_sides(&self, idx: usize) -> Vec<(Side, usize)> {
        Side::all()
            .into_iter()
            .filter_map(|side| neighbor(idx, side).map(|n| (side, n)))
            .filter(|&(_, n)| self.is_cell_empty(n))
            .collect()
    }

    #[inline]
    pub(crate) fn set_owner(&mut self, idx: usize, owner: Player) {
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.owner = Some(owner);
        }
    }
}
