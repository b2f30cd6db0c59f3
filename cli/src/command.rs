use lootsweeper_core::Coord2;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zero-based `(row, col)`.
    Reveal(Coord2),
    Claim,
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("command not found: {0}")]
    Unknown(String),
    #[error("usage: reveal <row> <col>")]
    Usage,
    #[error("could not parse {0:?}, rows and columns start at 1")]
    BadNumber(String),
}

pub const HELP: &str = "\
USAGE:
    r, reveal <row> <col>   Reveal a cell (rows and columns start at 1)
    c, claim                Bank the score of a finished game as XP
    n, new                  Start a new game
    h, help                 Print this help
    q, quit                 Leave";

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    let command = match name {
        "r" | "reveal" => {
            let (Some(row), Some(col), None) = (words.next(), words.next(), words.next()) else {
                return Err(CommandError::Usage);
            };
            Command::Reveal((parse_index(row)?, parse_index(col)?))
        }
        "c" | "claim" => Command::Claim,
        "n" | "new" => Command::New,
        "h" | "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_index(word: &str) -> Result<u8, CommandError> {
    match word.parse::<u8>() {
        Ok(index) if index > 0 => Ok(index - 1),
        _ => Err(CommandError::BadNumber(word.to_string())),
    }
}
