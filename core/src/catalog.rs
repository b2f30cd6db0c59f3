use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Index of a treasure kind inside its [`TreasureCatalog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreasureId(pub u8);

impl TreasureId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One kind of treasure: what it is worth and how many get buried.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureSpec {
    pub name: String,
    pub points: u32,
    pub count: CellCount,
    /// Glyph shown once the cell is revealed.
    pub symbol: char,
}

impl TreasureSpec {
    pub fn new(name: impl Into<String>, points: u32, count: CellCount, symbol: char) -> Self {
        Self {
            name: name.into(),
            points,
            count,
            symbol,
        }
    }
}

/// Ordered list of treasure kinds. Placement happens in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreasureCatalog {
    specs: Vec<TreasureSpec>,
}

impl TreasureCatalog {
    pub const MAX_KINDS: usize = u8::MAX as usize + 1;

    pub fn new(specs: Vec<TreasureSpec>) -> Result<Self> {
        let catalog = Self { specs };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn validate(&self) -> Result<()> {
        if self.specs.len() > Self::MAX_KINDS {
            Err(GameError::TooManyTreasureKinds)
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, id: TreasureId) -> Option<&TreasureSpec> {
        self.specs.get(id.index())
    }

    /// Points awarded for finding `id`, zero for kinds this catalog does not know.
    pub fn points(&self, id: TreasureId) -> u32 {
        self.get(id).map_or(0, |spec| spec.points)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TreasureId, &TreasureSpec)> {
        // validate() caps the catalog at 256 kinds, so the index always fits
        self.specs
            .iter()
            .enumerate()
            .map(|(index, spec)| (TreasureId(index as u8), spec))
    }

    pub fn total_count(&self) -> CellCount {
        self.specs
            .iter()
            .fold(0, |total: CellCount, spec| total.saturating_add(spec.count))
    }
}

impl Default for TreasureCatalog {
    fn default() -> Self {
        Self {
            specs: alloc::vec![
                TreasureSpec::new("gold", 500, 3, '💰'),
                TreasureSpec::new("silver", 250, 4, '🕋'),
                TreasureSpec::new("gem", 1000, 2, '💎'),
                TreasureSpec::new("money", 100, 5, '💵'),
            ],
        }
    }
}
