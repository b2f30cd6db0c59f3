use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
use crate::types::array_size;

/// Classification of one cell revealed by a player action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealEvent {
    MineHit { coords: Coord2 },
    TreasureFound { coords: Coord2, id: TreasureId },
    SafeZero { coords: Coord2 },
    SafeNumbered { coords: Coord2, count: u8 },
}

impl RevealEvent {
    pub const fn coords(self) -> Coord2 {
        use RevealEvent::*;
        match self {
            MineHit { coords }
            | TreasureFound { coords, .. }
            | SafeZero { coords }
            | SafeNumbered { coords, .. } => coords,
        }
    }

    /// Whether the event earns the flat safe-cell reward.
    pub const fn is_safe_number(self) -> bool {
        matches!(self, Self::SafeZero { .. } | Self::SafeNumbered { .. })
    }

    fn classify(coords: Coord2, content: CellContent) -> Self {
        match content {
            CellContent::Mine => Self::MineHit { coords },
            CellContent::Treasure(id) => Self::TreasureFound { coords, id },
            CellContent::Numbered(0) => Self::SafeZero { coords },
            CellContent::Numbered(count) => Self::SafeNumbered { coords, count },
        }
    }
}

/// Which cells the player has seen. Cells only ever go from hidden to revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealState {
    revealed: Array2<bool>,
    revealed_count: CellCount,
    revealed_safe: CellCount,
}

impl RevealState {
    pub fn new(size: Coord2) -> Self {
        Self {
            revealed: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            revealed_safe: 0,
        }
    }

    pub fn for_board(board: &Board) -> Self {
        Self::new(board.size())
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    /// All revealed cells, exposed mines included.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    /// Win condition: every cell that is not a mine has been revealed. Never true for a board of another size.
    pub fn all_safe_revealed(&self, board: &Board) -> bool {
        self.matches(board) && self.revealed_safe == board.safe_cell_count()
    }

    fn matches(&self, board: &Board) -> bool {
        array_size(&self.revealed) == board.size()
    }

    fn check_board(&self, board: &Board) -> Result<()> {
        if self.matches(board) {
            Ok(())
        } else {
            Err(GameError::BoardMismatch)
        }
    }

    /// Reveals `start` and floods through zero cells, returning one event per newly revealed cell in reveal
    /// order. Mines, treasures and non-zero numbers stop the flood. Already revealed cells produce nothing.
    pub fn reveal(&mut self, board: &Board, start: Coord2) -> Result<Vec<RevealEvent>> {
        self.check_board(board)?;
        let start = board.validate_coords(start)?;
        let mut events = Vec::new();

        if self.is_revealed(start) {
            return Ok(events);
        }

        let mut to_visit = VecDeque::from([start]);
        while let Some(coords) = to_visit.pop_front() {
            if self.is_revealed(coords) {
                continue;
            }

            let content = board[coords];
            self.mark_revealed(coords, content);

            if content == CellContent::Numbered(0) {
                to_visit.extend(
                    board
                        .iter_neighbors(coords)
                        .filter(|&pos| !self.is_revealed(pos)),
                );
            }

            events.push(RevealEvent::classify(coords, content));
        }

        log::trace!("Revealed {} cells starting at {:?}", events.len(), start);
        Ok(events)
    }

    /// Exposes every still hidden mine, returning their coordinates.
    pub fn reveal_all_mines(&mut self, board: &Board) -> Result<Vec<Coord2>> {
        self.check_board(board)?;
        let hidden_mines: Vec<_> = board
            .mine_coords()
            .filter(|&coords| !self.is_revealed(coords))
            .collect();

        for &coords in &hidden_mines {
            self.mark_revealed(coords, CellContent::Mine);
        }

        Ok(hidden_mines)
    }

    fn mark_revealed(&mut self, coords: Coord2, content: CellContent) {
        self.revealed[coords.to_nd_index()] = true;
        self.revealed_count += 1;
        if content.is_safe() {
            self.revealed_safe += 1;
        }
    }

    pub fn iter_revealed(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.revealed
            .indexed_iter()
            .filter(|&(_, &revealed)| revealed)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(size, mines, &[]).unwrap()
    }

    #[test]
    fn flood_fill_opens_zero_region() {
        let board = board((3, 3), &[(2, 2)]);
        let mut state = RevealState::for_board(&board);

        let events = state.reveal(&board, (0, 0)).unwrap();

        assert_eq!(events.len(), 8);
        assert_eq!(events[0], RevealEvent::SafeZero { coords: (0, 0) });
        assert!(events.contains(&RevealEvent::SafeNumbered {
            coords: (1, 1),
            count: 1
        }));
        assert!(!state.is_revealed((2, 2)));
        assert!(state.all_safe_revealed(&board));
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let board = board((3, 3), &[(0, 0)]);
        let mut state = RevealState::for_board(&board);

        let events = state.reveal(&board, (1, 1)).unwrap();

        assert_eq!(
            events,
            [RevealEvent::SafeNumbered {
                coords: (1, 1),
                count: 1
            }]
        );
        assert_eq!(state.revealed_count(), 1);
    }

    #[test]
    fn mine_does_not_flood() {
        let board = board((3, 3), &[(1, 1)]);
        let mut state = RevealState::for_board(&board);

        let events = state.reveal(&board, (1, 1)).unwrap();

        assert_eq!(events, [RevealEvent::MineHit { coords: (1, 1) }]);
        assert_eq!(state.revealed_count(), 1);
        assert_eq!(state.revealed_safe_count(), 0);
    }

    #[test]
    fn treasure_stops_flood() {
        // column of treasures splits the board, the right side stays hidden
        let treasures = [((0, 1), TreasureId(0)), ((1, 1), TreasureId(0)), ((2, 1), TreasureId(0))];
        let board = Board::from_layout((3, 3), &[], &treasures).unwrap();
        let mut state = RevealState::for_board(&board);

        let events = state.reveal(&board, (0, 0)).unwrap();

        let found = events
            .iter()
            .filter(|event| matches!(event, RevealEvent::TreasureFound { .. }))
            .count();
        assert_eq!(found, 3);
        assert_eq!(events.len(), 6);
        assert!(!state.is_revealed((1, 2)));
    }

    #[test]
    fn treasure_start_reveals_only_itself() {
        let board = Board::from_layout((3, 3), &[], &[((1, 1), TreasureId(2))]).unwrap();
        let mut state = RevealState::for_board(&board);

        let events = state.reveal(&board, (1, 1)).unwrap();

        assert_eq!(
            events,
            [RevealEvent::TreasureFound {
                coords: (1, 1),
                id: TreasureId(2)
            }]
        );
    }

    #[test]
    fn revealed_cell_is_noop() {
        let board = board((3, 3), &[(2, 2)]);
        let mut state = RevealState::for_board(&board);
        state.reveal(&board, (0, 0)).unwrap();
        let before = state.clone();

        assert!(state.reveal(&board, (1, 1)).unwrap().is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn each_cell_visited_once() {
        let board = board((8, 8), &[]);
        let mut state = RevealState::for_board(&board);

        let events = state.reveal(&board, (4, 4)).unwrap();

        assert_eq!(events.len(), 64);
        let mut coords: Vec<_> = events.iter().map(|event| event.coords()).collect();
        coords.sort();
        coords.dedup();
        assert_eq!(coords.len(), 64);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let board = board((3, 3), &[]);
        let mut state = RevealState::for_board(&board);

        assert_eq!(state.reveal(&board, (3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn reveal_all_mines_only_touches_hidden_mines() {
        let board = board((3, 3), &[(0, 0), (2, 2)]);
        let mut state = RevealState::for_board(&board);
        state.reveal(&board, (0, 0)).unwrap();

        let exposed = state.reveal_all_mines(&board).unwrap();

        assert_eq!(exposed, [(2, 2)]);
        assert_eq!(state.revealed_count(), 2);
        assert_eq!(state.revealed_safe_count(), 0);
        let revealed: Vec<_> = state.iter_revealed().collect();
        assert_eq!(revealed, [(0, 0), (2, 2)]);
    }

    #[test]
    fn state_for_another_board_is_rejected() {
        let board = board((4, 4), &[(0, 0)]);
        let mut state = RevealState::new((2, 2));

        assert_eq!(state.reveal(&board, (3, 3)), Err(GameError::BoardMismatch));
        assert_eq!(state.reveal(&board, (1, 1)), Err(GameError::BoardMismatch));
        assert_eq!(state.reveal_all_mines(&board), Err(GameError::BoardMismatch));
        assert!(!state.all_safe_revealed(&board));
        assert_eq!(state.revealed_count(), 0);
    }
}
