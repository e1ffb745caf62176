use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Element {
    Earth,
    Fire,
    Water,
    Poison,
    Holy,
    Thunder,
    Wind,
    Ice,
}

impl Element {
    pub const ALL: [Element; 8] = [
        Element::Earth,
        Element::Fire,
        Element::Water,
        Element::Poison,
        Element::Holy,
        Element::Thunder,
        Element::Wind,
        Element::Ice,
    ];
}

/// Side of the table. Used both for card ownership and for whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "SELF")]
    Myself,
    #[serde(rename = "OPPONENT")]
    Opponent,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::Myself => Player::Opponent,
            Player::Opponent => Player::Myself,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Left,
    Right,
    Bottom,
}

impl Side {
    /// Scan order used everywhere a cell looks at its neighbors.
    #[inline]
    pub fn all() -> [Side; 4] {
        [Side::Top, Side::Left, Side::Right, Side::Bottom]
    }

    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
        }
    }
}

pub const CELL_COUNT: usize = 9;

/// Board indexing helpers (3x3 board, row-major)
#[inline]
pub fn idx_to_rc(idx: usize) -> (usize, usize) {
    debug_assert!(idx < CELL_COUNT);
    (idx / 3, idx % 3)
}

#[inline]
pub fn rc_to_idx(r: usize, c: usize) -> Option<usize> {
    if r < 3 && c < 3 {
        Some(r * 3 + c)
    } else {
        None
    }
}

/// Index of the cell touching `idx` on `side`, or None when that side faces the edge of the grid.
#[inline]
pub fn neighbor(idx: usize, side: Side) -> Option<usize> {
    if idx >= CELL_COUNT {
        return None;
    }
    let (r, c) = idx_to_rc(idx);
    match side {
        Side::Top => r.checked_sub(1).and_then(|r| rc_to_idx(r, c)),
        Side::Left => c.checked_sub(1).and_then(|c| rc_to_idx(r, c)),
        Side::Right => rc_to_idx(r, c + 1),
        Side::Bottom => rc_to_idx(r + 1, c),
    }
}
