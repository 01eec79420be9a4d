//! Raw payload shapes delivered by the tournament data collaborator.
//!
//! These mirror the JSON returned by the contest management service. Only the
//! fields the engine reads are declared; everything else in the payload is
//! ignored on deserialization.
//!
//! ```text
//! PlayerDetail
//! ├─ player
//! │   ├─ account_id, nickname
//! │   └─ account_data { total_game_count, recent_games: [{rank, total_point}] }
//! └─ rank_data { accumulate_point, rank_1_count .. rank_4_count }
//!
//! TeamRoster { _id, name, color?, players: [{nickname}] }
//!
//! MatchLog
//! ├─ uuid, start_time, end_time
//! ├─ accounts: [{seat, account_id, nickname}]
//! └─ result { players: [{seat, part_point_1, total_point}] }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::player::RecentGame;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerDetail {
    pub player: PlayerAccount,
    pub rank_data: RankData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerAccount {
    pub account_id: u64,
    pub nickname: String,
    pub account_data: AccountData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountData {
    pub total_game_count: u32,
    /// Truncated window of the player's latest games, newest first.
    #[serde(default)]
    pub recent_games: Vec<RecentGame>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankData {
    /// Accumulated tournament points, in raw score units.
    pub accumulate_point: f64,
    pub rank_1_count: u32,
    pub rank_2_count: u32,
    pub rank_3_count: u32,
    pub rank_4_count: u32,
}

impl RankData {
    #[must_use]
    pub fn rank_counts(&self) -> [u32; 4] {
        [
            self.rank_1_count,
            self.rank_2_count,
            self.rank_3_count,
            self.rank_4_count,
        ]
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamRoster {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Members in roster order. Each entry carries a full player detail in
    /// the source feed; only the nickname is used for membership.
    pub players: Vec<RosterMember>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterMember {
    pub nickname: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchLog {
    pub uuid: String,
    pub start_time: i64,
    pub end_time: i64,
    pub accounts: Vec<LogAccount>,
    pub result: LogResult,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogAccount {
    pub seat: u8,
    pub account_id: u64,
    pub nickname: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogResult {
    pub players: Vec<LogResultEntry>,
}

/// One post-scoring result entry of a match log.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogResultEntry {
    pub seat: u8,
    /// Raw chip delta at match end, before uma.
    pub part_point_1: i64,
    /// Final score after uma and starting-point normalization.
    pub total_point: f64,
}
