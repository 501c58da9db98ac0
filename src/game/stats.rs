//! Session statistics
//!
//! Kept in memory for the life of the process only.

use super::config::MAX_GUESS_ALLOWANCE;
use super::round::{Round, RoundOutcome};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub best_score: Option<i64>,
    /// Wins indexed by the number of guesses used
    pub guess_distribution: [usize; MAX_GUESS_ALLOWANCE + 1],
}

impl Statistics {
    /// Record an ended round; rounds still in progress are ignored
    pub fn record(&mut self, round: &Round) {
        let Some(score) = round.score() else {
            return;
        };

        self.total_games += 1;
        if round.outcome() == RoundOutcome::Won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(round.guesses().len()) {
                *slot += 1;
            }
        }
        self.best_score = Some(self.best_score.map_or(score, |best| best.max(score)));
    }

    /// Percentage of games won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
