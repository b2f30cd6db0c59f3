use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Read-only view of a session for rendering.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub revealed: &'a RevealState,
    pub score: u32,
    pub lives: u8,
    pub status: GameStatus,
}

/// Everything one reveal action changed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealOutcome<'a> {
    /// One event per newly revealed cell, in reveal order.
    pub events: Vec<RevealEvent>,
    /// Mines exposed by the sweep after the last life was lost.
    pub exposed_mines: Vec<Coord2>,
    pub snapshot: Snapshot<'a>,
}

impl RevealOutcome<'_> {
    pub fn has_update(&self) -> bool {
        !self.events.is_empty()
    }

    /// Whether this action moved the game into a terminal state. A finished game only produces empty outcomes, so
    /// any events next to a terminal status mean this was the finishing move.
    pub fn ended_game(&self) -> bool {
        self.has_update() && self.snapshot.status.is_finished()
    }

    pub fn mine_hits(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, RevealEvent::MineHit { .. }))
            .count()
    }

    pub fn treasures_found(&self) -> impl Iterator<Item = TreasureId> + '_ {
        self.events.iter().filter_map(|event| match *event {
            RevealEvent::TreasureFound { id, .. } => Some(id),
            _ => None,
        })
    }
}

/// One game: the generated board, what the player revealed, and the score, lives and status driven by reveals.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    config: GameConfig,
    board: Board,
    revealed: RevealState,
    score: u32,
    lives: u8,
    status: GameStatus,
    claimed: bool,
}

impl Session {
    /// Validates `config`, generates a board and starts a fresh session on it.
    pub fn start(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        config.validate()?;
        let board = generator.generate(&config)?;
        let revealed = RevealState::for_board(&board);

        log::debug!(
            "New session on {}x{} board, {} mines, {} lives",
            config.size.0,
            config.size.1,
            board.mine_count(),
            config.lives
        );

        Ok(Self {
            lives: config.lives,
            config,
            board,
            revealed,
            score: 0,
            status: GameStatus::InProgress,
            claimed: false,
        })
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::start(config, RandomBoardGenerator::new(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.revealed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            revealed: &self.revealed,
            score: self.score,
            lives: self.lives,
            status: self.status,
        }
    }

    /// The single mutating action. Out-of-bounds coordinates are an error; revealing after the game ended or
    /// on an already revealed cell changes nothing and returns an empty outcome.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome<'_>> {
        let coords = self.board.validate_coords(coords)?;

        let (events, exposed_mines) = if self.status.is_finished() {
            (Vec::new(), Vec::new())
        } else {
            let events = self.revealed.reveal(&self.board, coords)?;
            let exposed_mines = self.apply(&events)?;
            (events, exposed_mines)
        };

        Ok(RevealOutcome {
            events,
            exposed_mines,
            snapshot: self.snapshot(),
        })
    }

    /// Takes the final score once the game is over. Each session can be claimed only once.
    pub fn claim(&mut self) -> Result<Claim> {
        if !self.status.is_finished() {
            return Err(GameError::NotFinished);
        }
        if self.claimed {
            return Err(GameError::AlreadyClaimed);
        }

        self.claimed = true;
        log::debug!("Claimed {} points from {:?} session", self.score, self.status);
        Ok(Claim {
            score: self.score,
            status: self.status,
        })
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Applies one reveal batch: scoring and lives per event in order, then the win check. A batch that costs the
    /// last life ends as lost even when it would also satisfy the win condition.
    fn apply(&mut self, events: &[RevealEvent]) -> Result<Vec<Coord2>> {
        let mut exposed_mines = Vec::new();

        for &event in events {
            match event {
                RevealEvent::MineHit { coords } => {
                    self.score = self.score.saturating_sub(self.config.mine_penalty);
                    self.lives = self.lives.saturating_sub(1);
                    log::debug!("Mine hit at {:?}, {} lives left", coords, self.lives);

                    if self.lives == 0 && self.status.is_in_progress() {
                        self.status = GameStatus::Lost;
                        exposed_mines = self.revealed.reveal_all_mines(&self.board)?;
                    }
                }
                RevealEvent::TreasureFound { id, .. } => {
                    let points = self.config.treasures.points(id);
                    self.score = self.score.saturating_add(points);
                }
                RevealEvent::SafeZero { .. } | RevealEvent::SafeNumbered { .. } => {
                    self.score = self.score.saturating_add(self.config.safe_reward);
                }
            }
        }

        if self.status.is_in_progress() && self.revealed.all_safe_revealed(&self.board) {
            self.status = GameStatus::Won;
        }

        if self.status.is_finished() {
            log::debug!("Game finished: {:?} with score {}", self.status, self.score);
        }

        Ok(exposed_mines)
    }
}
