use serde::{Deserialize, Serialize};

use crate::{
    Placement, RankCountMismatchError,
    core::{feed::PlayerDetail, team::TeamId},
};

/// A single entry of a player's recent-game window.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RecentGame {
    pub rank: Placement,
    pub total_point: f64,
}

/// Tournament participant and their accumulated record.
///
/// Created once per player-detail record. After construction only team
/// assignment and modifier ledger entries change it.
///
/// # Invariant
///
/// Once every match is ingested and every modifier applied, the rank counts
/// sum to the total game count. [`Player::check_rank_counts`] verifies it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    account_id: u64,
    nickname: String,
    team: Option<TeamId>,
    total_game_count: u32,
    rank_counts: [u32; 4],
    rank_points: f64,
    recent_games: Vec<RecentGame>,
}

impl Player {
    /// Creates a player with no games, no points and no team.
    #[must_use]
    pub fn new(account_id: u64, nickname: impl Into<String>) -> Self {
        Self {
            account_id,
            nickname: nickname.into(),
            team: None,
            total_game_count: 0,
            rank_counts: [0; 4],
            rank_points: 0.0,
            recent_games: vec![],
        }
    }

    /// Replaces the accumulated record.
    #[must_use]
    pub fn with_record(
        mut self,
        total_game_count: u32,
        rank_counts: [u32; 4],
        rank_points: f64,
    ) -> Self {
        self.total_game_count = total_game_count;
        self.rank_counts = rank_counts;
        self.rank_points = rank_points;
        self
    }

    #[must_use]
    pub fn with_recent_games(mut self, recent_games: Vec<RecentGame>) -> Self {
        self.recent_games = recent_games;
        self
    }

    #[must_use]
    pub fn from_detail(detail: PlayerDetail) -> Self {
        let PlayerDetail { player, rank_data } = detail;
        Self::new(player.account_id, player.nickname)
            .with_record(
                player.account_data.total_game_count,
                rank_data.rank_counts(),
                rank_data.accumulate_point,
            )
            .with_recent_games(player.account_data.recent_games)
    }

    #[must_use]
    pub fn account_id(&self) -> u64 {
        self.account_id
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[must_use]
    pub fn team(&self) -> Option<&TeamId> {
        self.team.as_ref()
    }

    pub fn set_team(&mut self, team: Option<TeamId>) {
        self.team = team;
    }

    #[must_use]
    pub fn total_game_count(&self) -> u32 {
        self.total_game_count
    }

    /// Occurrence counts per finishing position, index 0 = 1st place.
    #[must_use]
    pub fn rank_counts(&self) -> &[u32; 4] {
        &self.rank_counts
    }

    #[must_use]
    pub fn rank_count(&self, placement: Placement) -> u32 {
        self.rank_counts[placement.index()]
    }

    /// Accumulated tournament points, in raw score units.
    #[must_use]
    pub fn rank_points(&self) -> f64 {
        self.rank_points
    }

    #[must_use]
    pub fn recent_games(&self) -> &[RecentGame] {
        &self.recent_games
    }

    pub fn check_rank_counts(&self) -> Result<(), RankCountMismatchError> {
        let rank_count_sum = self.rank_counts.iter().sum::<u32>();
        if rank_count_sum == self.total_game_count {
            Ok(())
        } else {
            Err(RankCountMismatchError {
                nickname: self.nickname.clone(),
                rank_count_sum,
                total_game_count: self.total_game_count,
            })
        }
    }

    /// Adds a point correction.
    pub(crate) fn add_rank_points(&mut self, delta: f64) {
        self.rank_points += delta;
    }

    /// Moves one game from `from` to `to`.
    ///
    /// Returns `false` without touching the counts when `from` is already zero.
    pub(crate) fn move_rank_count(&mut self, from: Placement, to: Placement) -> bool {
        let Some(decremented) = self.rank_counts[from.index()].checked_sub(1) else {
            return false;
        };
        self.rank_counts[from.index()] = decremented;
        self.rank_counts[to.index()] += 1;
        true
    }
}
