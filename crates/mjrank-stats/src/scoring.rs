use mjrank_engine::RecentGame;
use serde::{Deserialize, Serialize};

/// Starting stack for every player.
pub const STARTING_POINTS: f64 = 25000.0;

/// Rank-dependent adjustment baked into a game's total point, indexed by
/// placement (1st first).
pub const UMA: [f64; 4] = [45000.0, 5000.0, -15000.0, -35000.0];

/// Scoring constants used to reconstruct a game's raw score from its total.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringRule {
    pub starting_points: f64,
    pub uma: [f64; 4],
}

impl Default for ScoringRule {
    fn default() -> Self {
        Self {
            starting_points: STARTING_POINTS,
            uma: UMA,
        }
    }
}

impl ScoringRule {
    /// Score of a game as if everyone started from a flat stack and no uma
    /// was applied.
    #[must_use]
    pub fn raw_game_score(&self, game: &RecentGame) -> f64 {
        game.total_point - self.uma[game.rank.index()] + self.starting_points
    }

    /// Highest [`raw_game_score`](Self::raw_game_score) over `games`, or `0.0`
    /// when there are none.
    #[must_use]
    pub fn best_game_score(&self, games: &[RecentGame]) -> f64 {
        games
            .iter()
            .map(|game| self.raw_game_score(game))
            .max_by(f64::total_cmp)
            .unwrap_or(0.0)
    }
}
