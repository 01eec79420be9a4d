//! Derived per-player statistics for tournament standings.
//!
//! Every function here is a pure function of a player's accumulated state.
//!
//! - **Placement rates**: top rate, rentai rate, fourth-avoidance rate and
//!   average placement, all exactly `0.0` for a player with no games
//! - **Best game score**: the best recent game rescored from a flat starting
//!   stack, with uma removed
//! - **Player summary**: both of the above computed together for one player
//!
//! # Modules
//!
//! - [`rates`]: rates and average placement from rank counts
//! - [`scoring`]: the scoring rule (starting points and uma) and best game score
//! - [`player`]: [`player::PlayerStats`], the per-player summary
//!
//! # Examples
//!
//! ## Placement rates
//!
//! ```
//! use mjrank_stats::rates::PlacementRates;
//!
//! let rates = PlacementRates::new(&[3, 2, 1, 0], 6);
//! assert_eq!(rates.top_rate, 0.5);
//! assert_eq!(rates.fourth_avoidance_rate, 1.0);
//!
//! let empty = PlacementRates::new(&[0, 0, 0, 0], 0);
//! assert_eq!(empty.average_placement, 0.0);
//! ```
//!
//! ## Best game score
//!
//! ```
//! use mjrank_engine::{Placement, RecentGame};
//! use mjrank_stats::scoring::ScoringRule;
//!
//! let games = [
//!     RecentGame { rank: Placement::First, total_point: 35000.0 },
//!     RecentGame { rank: Placement::Second, total_point: 5000.0 },
//! ];
//! assert_eq!(ScoringRule::default().best_game_score(&games), 25000.0);
//! ```

pub mod player;
pub mod rates;
pub mod scoring;
