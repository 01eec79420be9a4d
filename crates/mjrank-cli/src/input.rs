use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use mjrank_engine::{
    MatchHistory, ModifierLedger, PlayerPool, TeamAssignmentError, Teams,
    feed::{MatchLog, PlayerDetail, TeamRoster},
};

use crate::util;

#[derive(Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Path to the team rosters JSON file
    #[arg(long)]
    pub teams: PathBuf,
    /// Path to the player details JSON file
    #[arg(long)]
    pub players: PathBuf,
    /// Path to the match logs JSON file
    #[arg(long)]
    pub logs: PathBuf,
    /// Path to the modifier ledger JSON file
    #[arg(long)]
    pub modifiers: Option<PathBuf>,
}

/// Everything ingested for one run, before modifiers are applied.
#[derive(Debug)]
pub(crate) struct Tournament {
    pub teams: Teams,
    pub players: PlayerPool,
    pub history: MatchHistory,
    pub assignment_errors: Vec<TeamAssignmentError>,
    ledger: Option<ModifierLedger>,
}

impl Tournament {
    pub fn load(arg: &InputArg) -> anyhow::Result<Self> {
        let rosters = util::read_rosters_file(&arg.teams)?;
        let details = util::read_players_file(&arg.players)?;
        let logs = util::read_logs_file(&arg.logs)?;
        let ledger = arg
            .modifiers
            .as_ref()
            .map(util::read_modifiers_file)
            .transpose()?;
        Self::from_parts(rosters, details, logs, ledger)
    }

    pub fn from_parts(
        rosters: Vec<TeamRoster>,
        details: Vec<PlayerDetail>,
        logs: Vec<MatchLog>,
        ledger: Option<ModifierLedger>,
    ) -> anyhow::Result<Self> {
        let teams = Teams::from_rosters(rosters).context("Failed to read team rosters")?;
        let mut players = PlayerPool::from_details(details);
        let assignment_errors = players.assign_teams(&teams);
        let history = MatchHistory::from_logs(logs).context("Failed to ingest match logs")?;

        tracing::info!(
            teams = teams.len(),
            players = players.len(),
            matches = history.len(),
            "loaded tournament data"
        );
        Ok(Self {
            teams,
            players,
            history,
            assignment_errors,
            ledger,
        })
    }

    /// Applies the modifier ledger, if any. A second call does nothing.
    pub fn apply_modifiers(&mut self) -> anyhow::Result<usize> {
        let Some(ledger) = self.ledger.take() else {
            return Ok(0);
        };
        let applied = ledger
            .apply(&mut self.players)
            .context("Failed to apply modifiers")?;
        tracing::info!(applied, "applied modifiers");
        Ok(applied)
    }
}
