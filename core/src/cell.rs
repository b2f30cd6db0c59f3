use serde::{Deserialize, Serialize};

use crate::TreasureId;

/// What a board cell holds. Fixed once the board is generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    Treasure(TreasureId),
    /// Count of mines among the up to eight neighbors.
    Numbered(u8),
}

impl CellContent {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_safe(self) -> bool {
        !self.is_mine()
    }
}
