use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board>;
}

/// A ready-made board generates itself, as long as it has the configured size and only buries treasures the
/// config knows about.
impl BoardGenerator for Board {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        if self.size() != config.size {
            return Err(GameError::BoardMismatch);
        }
        if self.treasure_kinds() > config.treasures.len() {
            return Err(GameError::UnknownTreasure);
        }
        Ok(self)
    }
}
