//! Data-integrity report
//!
//! Errors make the command fail; warnings are listed but tolerated by
//! `mjrank standings`.

use clap::Args;
use mjrank_engine::{MatchRecord, TeamAssignmentError};

use crate::input::{InputArg, Tournament};

#[derive(Debug, Clone, Args)]
pub(crate) struct CheckArg {
    #[clap(flatten)]
    input: InputArg,
}

#[derive(Debug, Default)]
struct CheckReport {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl CheckReport {
    fn collect(tournament: &mut Tournament) -> Self {
        let mut report = Self::default();

        report.errors.extend(
            tournament
                .assignment_errors
                .iter()
                .filter(|err| matches!(err, TeamAssignmentError::UnknownPlayer { .. }))
                .map(ToString::to_string),
        );
        if let Err(err) = tournament.apply_modifiers() {
            report.errors.push(format!("{err:#}"));
        }
        report.errors.extend(
            tournament
                .players
                .check_rank_counts()
                .iter()
                .map(ToString::to_string),
        );

        report.warnings.extend(
            tournament
                .players
                .unassigned()
                .map(|p| format!("player {:?} is not on any team roster", p.nickname())),
        );
        report
            .warnings
            .extend(tournament.history.partial_ties().map(describe_partial_tie));
        report
    }

    fn print(&self) {
        println!("Errors ({})", self.errors.len());
        for error in &self.errors {
            println!("  {error}");
        }
        println!();
        println!("Warnings ({})", self.warnings.len());
        for warning in &self.warnings {
            println!("  {warning}");
        }
    }
}

fn describe_partial_tie(record: &MatchRecord) -> String {
    let report = record.tie_report();
    let merged = report
        .merged_pairs()
        .iter()
        .map(|(a, b)| format!("{a}-{b}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut message = format!(
        "match {}: tie averaging only partially covers tied seats (merged: [{merged}])",
        record.uuid()
    );
    if report.has_uncovered_tie() {
        message.push_str(", last two places tied but not merged");
    }
    message
}

pub(crate) fn run(arg: &CheckArg) -> anyhow::Result<()> {
    let mut tournament = Tournament::load(&arg.input)?;
    let report = CheckReport::collect(&mut tournament);
    report.print();

    if !report.errors.is_empty() {
        anyhow::bail!("{} integrity error(s) found", report.errors.len());
    }
    Ok(())
}
