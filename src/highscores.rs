//! Session leaderboard
//!
//! Keeps the best round results of the running process; nothing is written to
//! disk. The session highscore is the top of this board.

use serde::{Deserialize, Serialize};

/// Round results kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// How a finished round ended up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub score: i64,
    /// 1-based round number
    pub round: u32,
    /// Body x when the round ended
    pub distance: f32,
}

/// Best round results, highest score first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    results: Vec<RoundResult>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a finished round on the board
    ///
    /// Returns the 1-based rank it took, or `None` when it did not make the
    /// cut. Non-positive scores are never kept. A score equal to an existing
    /// one ranks below it, so the earlier round keeps its place.
    pub fn record(&mut self, result: RoundResult) -> Option<usize> {
        if result.score <= 0 {
            return None;
        }
        let slot = self.results.partition_point(|kept| kept.score >= result.score);
        if slot >= MAX_HIGH_SCORES {
            return None;
        }
        self.results.insert(slot, result);
        self.results.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    /// Best score so far, 0 before any positive round
    pub fn best(&self) -> i64 {
        self.results.first().map_or(0, |top| top.score)
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: i64, round: u32) -> RoundResult {
        RoundResult {
            score,
            round,
            distance: score as f32 * 10.0,
        }
    }

    #[test]
    fn test_non_positive_scores_are_dropped() {
        let mut board = HighScores::new();
        assert_eq!(board.record(result(0, 1)), None);
        assert_eq!(board.record(result(-12, 2)), None);
        assert!(board.is_empty());
        assert_eq!(board.best(), 0);
    }

    #[test]
    fn test_ranks_and_ordering() {
        let mut board = HighScores::new();
        assert_eq!(board.record(result(50, 1)), Some(1));
        assert_eq!(board.record(result(80, 2)), Some(1));
        assert_eq!(board.record(result(60, 3)), Some(2));
        // Ties rank behind the earlier round
        assert_eq!(board.record(result(80, 4)), Some(2));

        let rounds: Vec<u32> = board.results().iter().map(|r| r.round).collect();
        assert_eq!(rounds, vec![2, 4, 3, 1]);
        assert_eq!(board.best(), 80);
    }

    #[test]
    fn test_board_is_capped() {
        let mut board = HighScores::new();
        for round in 1..=15 {
            board.record(result(round as i64 * 10, round));
        }
        assert_eq!(board.len(), MAX_HIGH_SCORES);
        assert_eq!(board.best(), 150);
        assert_eq!(board.results().last().map(|r| r.score), Some(60));

        assert_eq!(board.record(result(60, 16)), None);
        assert_eq!(board.record(result(61, 17)), Some(MAX_HIGH_SCORES));
        assert_eq!(board.results().last().map(|r| r.round), Some(17));
    }
}
