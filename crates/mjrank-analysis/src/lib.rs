//! Standings and output tables for a mahjong tournament
//!
//! This crate turns the resolved player pool, team list and match history
//! into ranked views and then into typed tables ready to be written out.
//!
//! # Overview
//!
//! 1. **Individual standings** ([`standings::IndividualStandings`]): every
//!    player ranked by rank points, with derived statistics
//! 2. **Team-grouped standings** ([`standings::TeamGroupedStandings`]): the
//!    same rows grouped by team registration order
//! 3. **Team totals** ([`standings::TeamTotalStandings`]): per-team sums,
//!    gap to the previous team and margin to the cutoff line
//!    ([`cutoff::CutoffRule`])
//! 4. **Export** ([`export::StandingsTables`]): all views plus the match log
//!    as [`table::Table`]s, with point scaling and rounding applied
//!
//! # Examples
//!
//! ```
//! use mjrank_analysis::{
//!     cutoff::CutoffRule,
//!     export::{ExportOptions, StandingsTables},
//!     standings::StandingsBuilder,
//!     table::Cell,
//! };
//! use mjrank_engine::{MatchHistory, Player, PlayerPool, Team, Teams};
//!
//! let mut players: PlayerPool = [
//!     Player::new(1, "Alice").with_record(2, [1, 1, 0, 0], 40000.0),
//!     Player::new(2, "Bob").with_record(2, [0, 0, 1, 1], -40000.0),
//! ]
//! .into_iter()
//! .collect();
//! let teams: Teams = [
//!     Team::new("t1", "Red", vec!["Bob".into()], None),
//!     Team::new("t2", "Blue", vec!["Alice".into()], None),
//! ]
//! .into_iter()
//! .collect();
//! players.assign_teams(&teams);
//!
//! let standings = StandingsBuilder::new(&players, &teams)
//!     .build(&CutoffRule::uniform(2))
//!     .unwrap();
//! assert_eq!(standings.rows()[0].team.name(), "Blue");
//! assert_eq!(standings.rows()[0].cutoff_margin, 80000.0);
//!
//! let tables =
//!     StandingsTables::build(&standings, &MatchHistory::new(), &ExportOptions::default())
//!         .unwrap();
//! assert_eq!(tables.individual.cell(0, "Points"), Some(&Cell::Real(40.0)));
//! assert!(tables.match_log.is_empty());
//! ```

pub mod cutoff;
pub mod export;
pub mod standings;
pub mod table;
