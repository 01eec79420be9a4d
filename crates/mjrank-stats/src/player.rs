use mjrank_engine::Player;

use crate::{rates::PlacementRates, scoring::ScoringRule};

/// Derived statistics of a single player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub rates: PlacementRates,
    /// Best recent game rescored under the scoring rule, `0.0` with no
    /// recent games.
    pub best_game_score: f64,
}

impl PlayerStats {
    /// Computes the statistics from the player's current state.
    ///
    /// Values are not rounded; rounding belongs to export.
    #[must_use]
    pub fn compute(player: &Player, rule: &ScoringRule) -> Self {
        Self {
            rates: PlacementRates::new(player.rank_counts(), player.total_game_count()),
            best_game_score: rule.best_game_score(player.recent_games()),
        }
    }
}
