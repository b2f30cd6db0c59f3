use ndarray::Array2;
use rand::Rng;

use super::*;
use crate::board::Item;
use crate::types::array_size;

/// Purely random placement: mines first, then each treasure kind in catalog order, each into a uniformly picked
/// empty cell. Reproducible for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &GameConfig) -> Result<Board> {
        use rand::prelude::*;

        // placement loops only terminate when the board keeps a free cell
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut items: Array2<Option<Item>> = Array2::default(config.size.to_nd_index());

        let mut draws = place_items(&mut items, &mut rng, config.mines, Item::Mine);
        for (id, spec) in config.treasures.iter() {
            draws += place_items(&mut items, &mut rng, spec.count, Item::Treasure(id));
        }

        log::debug!(
            "Generated {}x{} board with seed {}: {} mines, {} treasures, {} draws",
            config.size.0,
            config.size.1,
            self.seed,
            config.mines,
            config.treasures.total_count(),
            draws
        );

        Ok(Board::from_items(&items))
    }
}

/// Rejection sampling: draw random cells until `count` empty ones took `item`. Returns the number of draws.
fn place_items<R: Rng>(
    items: &mut Array2<Option<Item>>,
    rng: &mut R,
    count: CellCount,
    item: Item,
) -> u32 {
    let (rows, cols) = array_size(items);
    let mut placed = 0;
    let mut draws = 0;

    while placed < count {
        draws += 1;
        let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
        let slot = &mut items[coords.to_nd_index()];
        if slot.is_none() {
            *slot = Some(item);
            placed += 1;
        }
    }

    draws
}
