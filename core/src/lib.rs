#![no_std]

//! Treasure-hunting minesweeper engine.
//!
//! A [`Session`] owns one generated [`Board`], the player's [`RevealState`] and the score, lives and
//! [`GameStatus`]. Presentation layers drive it through [`Session::reveal_cell`] and render
//! [`Session::snapshot`].

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use catalog::*;
pub use cell::*;
pub use claim::*;
pub use cue::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod catalog;
mod cell;
mod claim;
mod cue;
mod engine;
mod error;
mod generator;
mod session;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board size as `(rows, cols)`.
    pub size: Coord2,
    pub mines: CellCount,
    pub treasures: TreasureCatalog,
    /// Lives at the start of a session, each mine hit costs one.
    pub lives: u8,
    /// Points for every safe (numbered) cell revealed.
    pub safe_reward: u32,
    /// Points lost on a mine hit, the score never drops below zero.
    pub mine_penalty: u32,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (10, 10);
    pub const DEFAULT_MINES: CellCount = 10;
    pub const DEFAULT_LIVES: u8 = 3;
    pub const DEFAULT_SAFE_REWARD: u32 = 20;
    pub const DEFAULT_MINE_PENALTY: u32 = 1000;

    pub fn new(size: Coord2, mines: CellCount, treasures: TreasureCatalog) -> Self {
        Self {
            size,
            mines,
            treasures,
            ..Default::default()
        }
    }

    pub fn with_lives(mut self, lives: u8) -> Self {
        self.lives = lives;
        self
    }

    pub fn with_scoring(mut self, safe_reward: u32, mine_penalty: u32) -> Self {
        self.safe_reward = safe_reward;
        self.mine_penalty = mine_penalty;
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Mines plus every buried treasure.
    pub fn item_count(&self) -> CellCount {
        self.mines.saturating_add(self.treasures.total_count())
    }

    /// Checks the config can produce a board. Placement needs at least one cell left empty.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        self.treasures.validate()?;

        let requested = self.item_count();
        let capacity = self.total_cells();
        if requested >= capacity {
            return Err(GameError::TooManyItems {
                requested,
                capacity,
            });
        }

        if self.lives == 0 {
            return Err(GameError::InvalidLives);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            mines: Self::DEFAULT_MINES,
            treasures: TreasureCatalog::default(),
            lives: Self::DEFAULT_LIVES,
            safe_reward: Self::DEFAULT_SAFE_REWARD,
            mine_penalty: Self::DEFAULT_MINE_PENALTY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();

        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.item_count(), 24);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_board() {
        let config = GameConfig::new((0, 10), 0, TreasureCatalog::empty());
        assert_eq!(config.validate(), Err(GameError::InvalidSize));
    }

    #[test]
    fn validate_rejects_full_board() {
        let config = GameConfig::new((3, 3), 5, TreasureCatalog::default());

        assert_eq!(
            config.validate(),
            Err(GameError::TooManyItems {
                requested: 19,
                capacity: 9
            })
        );
    }

    #[test]
    fn validate_needs_one_free_cell() {
        let config = GameConfig::new((2, 2), 4, TreasureCatalog::empty());
        assert!(config.validate().is_err());

        let config = GameConfig::new((2, 2), 3, TreasureCatalog::empty());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_lives() {
        let config = GameConfig::default().with_lives(0);
        assert_eq!(config.validate(), Err(GameError::InvalidLives));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"mines": 12, "lives": 5}"#).unwrap();

        assert_eq!(config.mines, 12);
        assert_eq!(config.lives, 5);
        assert_eq!(config.size, (10, 10));
        assert_eq!(config.treasures, TreasureCatalog::default());
    }
}
