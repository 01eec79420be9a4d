//! Entity model and ingestion rules for mahjong tournament standings.
//!
//! - [`core`]: value types ([`Player`], [`Team`], [`MatchRecord`]) and the raw
//!   feed shapes they are built from
//! - [`engine`]: owned collections ([`PlayerPool`], [`Teams`],
//!   [`MatchHistory`]), the tie resolver and the modifier ledger
//!
//! # Example
//!
//! ```
//! use mjrank_engine::{MatchRecord, feed::MatchLog};
//!
//! let log: MatchLog = serde_json::from_str(r#"{
//!     "uuid": "240101-abc",
//!     "start_time": 1704067200,
//!     "end_time": 1704070800,
//!     "accounts": [
//!         {"seat": 0, "account_id": 1, "nickname": "A"},
//!         {"seat": 1, "account_id": 2, "nickname": "B"},
//!         {"seat": 2, "account_id": 3, "nickname": "C"},
//!         {"seat": 3, "account_id": 4, "nickname": "D"}
//!     ],
//!     "result": {"players": [
//!         {"seat": 0, "part_point_1": 1000, "total_point": 35000},
//!         {"seat": 1, "part_point_1": 1000, "total_point": 15000},
//!         {"seat": 2, "part_point_1": -500, "total_point": -5000},
//!         {"seat": 3, "part_point_1": -1500, "total_point": -45000}
//!     ]}
//! }"#).unwrap();
//!
//! let record = MatchRecord::from_log(log).unwrap();
//! assert_eq!(record.seat(0).total_point, 25000.0);
//! assert_eq!(record.seat(1).total_point, 25000.0);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("placement must be between 1 and 4, got {value}")]
pub struct InvalidPlacementError {
    pub value: u8,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("display color must be six hex digits, got {color:?}")]
pub struct InvalidColorError {
    pub color: String,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MatchRecordError {
    #[display("match {uuid}: expected 4 {part} entries, got {count}")]
    EntryCount {
        uuid: String,
        part: &'static str,
        count: usize,
    },
    #[display("match {uuid}: seat {seat} is out of range")]
    SeatOutOfRange { uuid: String, seat: u8 },
    #[display("match {uuid}: seat {seat} appears more than once in {part}")]
    DuplicateSeat {
        uuid: String,
        part: &'static str,
        seat: u8,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TeamAssignmentError {
    #[display("team {team}: roster member {nickname:?} has no player record")]
    UnknownPlayer { nickname: String, team: String },
    #[display("player {nickname:?}: team {team} is not registered")]
    UnknownTeam { nickname: String, team: String },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ModifierError {
    #[display("modifier references unknown player {nickname:?}")]
    UnknownPlayer { nickname: String },
    #[display(
        "modifier #{entry_index} for {nickname:?} would make the {placement} place count negative"
    )]
    NegativeRankCount {
        nickname: String,
        placement: Placement,
        entry_index: usize,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display(
    "player {nickname:?}: rank counts sum to {rank_count_sum} but total game count is {total_game_count}"
)]
pub struct RankCountMismatchError {
    pub nickname: String,
    pub rank_count_sum: u32,
    pub total_game_count: u32,
}
