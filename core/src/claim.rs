use serde::{Deserialize, Serialize};

use crate::GameStatus;

/// Final result of a finished session, taken once through [`Session::claim`](crate::Session::claim).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub score: u32,
    pub status: GameStatus,
}

/// Running totals for one player across sessions. Claimed scores turn into XP.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub xp: u64,
    pub games: u32,
    pub wins: u32,
    pub best_score: u32,
}

impl Profile {
    pub fn credit(&mut self, claim: Claim) {
        self.xp = self.xp.saturating_add(claim.score.into());
        self.games = self.games.saturating_add(1);
        if claim.status == GameStatus::Won {
            self.wins = self.wins.saturating_add(1);
        }
        self.best_score = self.best_score.max(claim.score);
    }
}
