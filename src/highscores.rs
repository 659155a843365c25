//! Session high score
//!
//! Lives only as long as the game instance; nothing is written to storage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    /// Best score of the session
    pub best: u32,
    /// Number of finished games
    pub games_played: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished game
    /// Returns true if the score is a new best (ties are not)
    pub fn record(&mut self, score: u32) -> bool {
        self.games_played += 1;
        if self.qualifies(score) {
            self.best = score;
            return true;
        }
        false
    }
}
