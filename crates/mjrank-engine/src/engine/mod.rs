//! Owned collections and the ingestion rules that run over them.
//!
//! - [`PlayerPool`] - players in input order, with team assignment
//! - [`Teams`] - teams in registration order
//! - [`MatchHistory`] - tie-resolved matches in ingestion order
//! - [`resolve_ties`] - the equal-placement averaging rule
//! - [`ModifierLedger`] - external point/rank-count corrections
//!
//! # Pipeline
//!
//! 1. Build [`Teams`] from the roster feed and [`PlayerPool`] from player details
//! 2. Assign teams with [`PlayerPool::assign_teams`] (nickname match)
//! 3. Build [`MatchHistory`]; each match is tie-resolved once on construction
//! 4. Apply the [`ModifierLedger`] exactly once
//!
//! Standings are derived afterwards from the finished collections and never
//! mutate them.

pub use self::{match_history::*, modifier_ledger::*, player_pool::*, teams::*, tie_resolver::*};

mod match_history;
mod modifier_ledger;
mod player_pool;
mod teams;
mod tie_resolver;
