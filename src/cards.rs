use crate::error::CardsError;
use crate::types::{Element, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Directional strength values of a card. 10 is the maximal "A" rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ranks {
    pub top: u8,
    pub left: u8,
    pub right: u8,
    pub bottom: u8,
}

impl Ranks {
    #[inline]
    pub const fn new(top: u8, left: u8, right: u8, bottom: u8) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u16,
    pub name: String,
    pub level: u8,
    #[serde(flatten)]
    pub ranks: Ranks,
    #[serde(default)]
    pub element: Option<Element>,
}

impl Card {
    pub fn new(id: u16, name: impl Into<String>, level: u8, ranks: Ranks) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            ranks,
            element: None,
        }
    }

    #[inline]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    #[inline]
    pub fn rank(&self, side: Side) -> u8 {
        self.ranks.get(side)
    }
}

#[derive(Debug, Default)]
pub struct CardsDb {
    by_id: Vec<Option<Card>>,         // index by id (len = max_id + 1)
    name_to_id: HashMap<String, u16>, // case-sensitive names as in data
    max_id: u16,
    count: usize,
}

impl CardsDb {
    #[inline]
    pub fn get(&self, id: u16) -> Option<&Card> {
        self.by_id.get(id as usize).and_then(|c| c.as_ref())
    }

    #[inline]
    pub fn id_by_name(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }

    #[inline]
    pub fn max_id(&self) -> u16 {
        self.max_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.by_id.iter().filter_map(|o| o.as_ref())
    }

    /// Every card in ascending id order, ready to be shuffled and dealt.
    pub fn deck(&self) -> Vec<Card> {
        self.iter().cloned().collect()
    }
}

fn validate_card(card: &Card) -> Result<(), CardsError> {
    let within = |v: u8| (1..=10).contains(&v);
    if !Side::all().into_iter().all(|s| within(card.rank(s))) {
        return Err(CardsError::InvalidRanks {
            id: card.id,
            name: card.name.clone(),
        });
    }
    Ok(())
}

/// Load cards from a JSON file (runtime), building a dense id index and name lookup.
pub fn load_cards_from_json<P: AsRef<Path>>(path: P) -> Result<CardsDb, CardsError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| CardsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: Vec<Card> = serde_json::from_str(&data)?;

    if raw.is_empty() {
        return Err(CardsError::Empty);
    }

    let mut max_id: u16 = 0;
    for c in &raw {
        validate_card(c)?;
        max_id = max_id.max(c.id);
    }

    let mut by_id: Vec<Option<Card>> = vec![None; (max_id as usize) + 1];
    let mut name_to_id: HashMap<String, u16> = HashMap::with_capacity(raw.len());

    for c in raw {
        let id = c.id;

        if let Some(existing) = by_id[id as usize].as_ref() {
            return Err(CardsError::DuplicateId {
                id,
                first: existing.name.clone(),
                second: c.name,
            });
        }
        if let Some(prev) = name_to_id.insert(c.name.clone(), id) {
            return Err(CardsError::DuplicateName {
                name: c.name,
                first: prev,
                second: id,
            });
        }
        by_id[id as usize] = Some(c);
    }

    let count = by_id.iter().filter(|c| c.is_some()).count();
    log::debug!("loaded {count} cards from {} (max id {max_id})", path.display());

    Ok(CardsDb {
        by_id,
        name_to_id,
        max_id,
        count,
    })
}
