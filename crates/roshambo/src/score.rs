//! Running win counters for the current match.

use crate::types::Winner;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win counters for the player and the computer.
///
/// Counters only grow between resets; a draw changes nothing. The score is
/// ephemeral and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by the player.
    player: u32,
    /// Rounds won by the computer.
    computer: u32,
}

impl Score {
    /// Creates a fresh (0, 0) score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits one win to the given side.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player += 1,
            Winner::Computer => self.computer += 1,
        }
        debug!(player = self.player, computer = self.computer, "Win recorded");
    }

    /// Sets both counters back to zero.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.player = 0;
        self.computer = 0;
    }

    /// Returns the (player, computer) pair for rendering.
    pub fn snapshot(&self) -> (u32, u32) {
        (self.player, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_score_is_zero() {
        assert_eq!(Score::new().snapshot(), (0, 0));
    }

    #[test]
    fn test_record_win_increments_one_side() {
        let mut score = Score::new();
        score.record_win(Winner::Player);
        score.record_win(Winner::Player);
        score.record_win(Winner::Computer);
        assert_eq!(score.snapshot(), (2, 1));
    }

    #[test]
    fn test_reset_zeroes_both_counters() {
        let mut score = Score::new();
        score.record_win(Winner::Computer);
        score.reset();
        assert_eq!(score.snapshot(), (0, 0));
    }
}
