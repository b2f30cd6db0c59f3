use std::io::{self, Write};

use lootsweeper_core::{CellContent, GameStatus, Snapshot, TreasureCatalog};

const HIDDEN: char = '#';
const MINE: char = '*';
const EMPTY: char = '.';

/// What the player sees in one cell.
pub fn glyph(content: CellContent, revealed: bool, catalog: &TreasureCatalog) -> char {
    if !revealed {
        return HIDDEN;
    }
    match content {
        CellContent::Mine => MINE,
        CellContent::Treasure(id) => catalog.get(id).map_or('?', |spec| spec.symbol),
        CellContent::Numbered(0) => EMPTY,
        CellContent::Numbered(n) => char::from_digit(n.into(), 10).unwrap_or('?'),
    }
}

pub fn status_line(snapshot: &Snapshot<'_>) -> String {
    let status = match snapshot.status {
        GameStatus::InProgress => "",
        GameStatus::Won => "  You Win!",
        GameStatus::Lost => "  Game Over!",
    };
    format!("Score: {}  Lives: {}{}", snapshot.score, snapshot.lives, status)
}

/// Draws the board with 1-based row and column labels, followed by the status line.
pub fn draw(out: &mut impl Write, snapshot: &Snapshot<'_>, catalog: &TreasureCatalog) -> io::Result<()> {
    let (rows, cols) = snapshot.board.size();

    write!(out, "    ")?;
    for col in 1..=cols {
        write!(out, "{:>3}", col)?;
    }
    writeln!(out)?;

    for row in 0..rows {
        write!(out, "{:>3} ", row + 1)?;
        for col in 0..cols {
            let coords = (row, col);
            let cell = glyph(
                snapshot.board.content(coords),
                snapshot.revealed.is_revealed(coords),
                catalog,
            );
            write!(out, "{:>3}", cell)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", status_line(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootsweeper_core::{Board, GameConfig, Session, TreasureId, TreasureSpec};

    fn session() -> Session {
        let catalog = TreasureCatalog::new(vec![
            TreasureSpec::new("gold", 500, 0, '💰'),
            TreasureSpec::new("silver", 250, 0, '🕋'),
            TreasureSpec::new("gem", 1000, 0, '💎'),
        ])
        .unwrap();
        let board = Board::from_layout((2, 3), &[(0, 0)], &[((1, 2), TreasureId(2))]).unwrap();
        let config = GameConfig::new((2, 3), 1, catalog);
        Session::start(config, board).unwrap()
    }

    #[test]
    fn glyphs() {
        let catalog = TreasureCatalog::default();

        assert_eq!(glyph(CellContent::Mine, false, &catalog), HIDDEN);
        assert_eq!(glyph(CellContent::Mine, true, &catalog), MINE);
        assert_eq!(glyph(CellContent::Numbered(0), true, &catalog), EMPTY);
        assert_eq!(glyph(CellContent::Numbered(3), true, &catalog), '3');
        assert_eq!(glyph(CellContent::Treasure(TreasureId(2)), true, &catalog), '💎');
        assert_eq!(glyph(CellContent::Treasure(TreasureId(9)), true, &catalog), '?');
    }

    #[test]
    fn draws_hidden_board() {
        let session = session();
        let mut out = Vec::new();

        draw(&mut out, &session.snapshot(), &session.config().treasures).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "      1  2  3\n  1   #  #  #\n  2   #  #  #\nScore: 0  Lives: 3\n"
        );
    }

    #[test]
    fn draws_revealed_cells_and_status() {
        let mut session = session();
        session.reveal_cell((1, 2)).unwrap();
        session.reveal_cell((0, 2)).unwrap();
        session.reveal_cell((0, 1)).unwrap();
        session.reveal_cell((1, 0)).unwrap();
        session.reveal_cell((1, 1)).unwrap();
        let mut out = Vec::new();

        draw(&mut out, &session.snapshot(), &session.config().treasures).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  1   #  1  ."));
        assert!(text.ends_with("Score: 1080  Lives: 3  You Win!\n"));
    }
}
