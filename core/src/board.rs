use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;
use crate::types::array_size;

/// Fully populated content grid. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<CellContent>,
    mine_count: CellCount,
    treasure_counts: Vec<CellCount>,
}

/// Something buried in a cell before numbers are computed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Item {
    Mine,
    Treasure(TreasureId),
}

impl Board {
    /// Builds a board from explicit mine and treasure positions, numbering every other cell.
    pub fn from_layout(
        size: Coord2,
        mines: &[Coord2],
        treasures: &[(Coord2, TreasureId)],
    ) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }

        let mut items: Array2<Option<Item>> = Array2::default(size.to_nd_index());
        let placements = mines
            .iter()
            .map(|&coords| (coords, Item::Mine))
            .chain(
                treasures
                    .iter()
                    .map(|&(coords, id)| (coords, Item::Treasure(id))),
            );

        for (coords, item) in placements {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            let slot = &mut items[coords.to_nd_index()];
            if slot.is_some() {
                return Err(GameError::CellOccupied);
            }
            *slot = Some(item);
        }

        Ok(Self::from_items(&items))
    }

    /// Turns placed items into final content, counting adjacent mines for every empty cell.
    pub(crate) fn from_items(items: &Array2<Option<Item>>) -> Self {
        let size = array_size(items);
        let mut mine_count: CellCount = 0;
        let mut treasure_counts: Vec<CellCount> = Vec::new();

        let cells = Array2::from_shape_fn(items.dim(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            match items[coords.to_nd_index()] {
                Some(Item::Mine) => {
                    mine_count += 1;
                    CellContent::Mine
                }
                Some(Item::Treasure(id)) => {
                    if treasure_counts.len() <= id.index() {
                        treasure_counts.resize(id.index() + 1, 0);
                    }
                    treasure_counts[id.index()] += 1;
                    CellContent::Treasure(id)
                }
                None => {
                    let adjacent = NeighborIter::new(coords, size)
                        .filter(|&pos| matches!(items[pos.to_nd_index()], Some(Item::Mine)))
                        .count();
                    CellContent::Numbered(adjacent as u8)
                }
            }
        });

        Self {
            cells,
            mine_count,
            treasure_counts,
        }
    }

    /// Board size as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        array_size(&self.cells)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn content(&self, coords: Coord2) -> CellContent {
        self[coords]
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Cells that must be revealed to win: everything but mines, treasures included.
    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn treasure_count(&self, id: TreasureId) -> CellCount {
        self.treasure_counts.get(id.index()).copied().unwrap_or(0)
    }

    /// One past the highest treasure id buried on this board.
    pub(crate) fn treasure_kinds(&self) -> usize {
        self.treasure_counts.len()
    }

    /// Mines around `coords`, recounted from the grid rather than read from the cell.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord2, CellContent)> + '_ {
        iter_coords(self.size()).map(|coords| (coords, self[coords]))
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, content)| content.is_mine())
            .map(|(coords, _)| coords)
    }
}

impl Index<Coord2> for Board {
    type Output = CellContent;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_layout_numbers_cells() {
        let board = Board::from_layout((3, 3), &[(0, 0), (2, 2)], &[((0, 2), TreasureId(1))]).unwrap();

        assert_eq!(board[(0, 0)], CellContent::Mine);
        assert_eq!(board[(1, 1)], CellContent::Numbered(2));
        assert_eq!(board[(0, 1)], CellContent::Numbered(1));
        assert_eq!(board[(2, 0)], CellContent::Numbered(0));
        assert_eq!(board[(0, 2)], CellContent::Treasure(TreasureId(1)));
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 7);
        assert_eq!(board.treasure_count(TreasureId(1)), 1);
        assert_eq!(board.treasure_count(TreasureId(0)), 0);
    }

    #[test]
    fn treasure_does_not_count_as_mine() {
        let board = Board::from_layout((1, 3), &[], &[((0, 1), TreasureId(0))]).unwrap();

        assert_eq!(board[(0, 0)], CellContent::Numbered(0));
        assert_eq!(board[(0, 2)], CellContent::Numbered(0));
    }

    #[test]
    fn from_layout_rejects_out_of_bounds() {
        assert_eq!(
            Board::from_layout((2, 2), &[(2, 0)], &[]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn from_layout_rejects_overlap() {
        assert_eq!(
            Board::from_layout((2, 2), &[(1, 1)], &[((1, 1), TreasureId(0))]),
            Err(GameError::CellOccupied)
        );
    }

    #[test]
    fn from_layout_rejects_empty_size() {
        assert_eq!(
            Board::from_layout((0, 4), &[], &[]),
            Err(GameError::InvalidSize)
        );
    }

    #[test]
    fn validate_coords_checks_both_axes() {
        let board = Board::from_layout((2, 3), &[], &[]).unwrap();

        assert_eq!(board.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(board.validate_coords((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 3)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn mine_coords_lists_every_mine() {
        let board = Board::from_layout((3, 3), &[(2, 1), (0, 2)], &[]).unwrap();
        let mines: Vec<_> = board.mine_coords().collect();

        assert_eq!(mines, [(0, 2), (2, 1)]);
    }
}
