use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Args;
use mjrank_analysis::{cutoff::CutoffRule, export::StandingsTables, standings::StandingsBuilder};

use crate::{
    input::{InputArg, Tournament},
    util::{self, Output},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct StandingsArg {
    #[clap(flatten)]
    input: InputArg,
    /// Path to the tournament config JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Measure every team against the team at this rank, overriding the config
    #[arg(long)]
    boundary_rank: Option<usize>,
    /// With --boundary-rank, treat it as the size of the promotion zone
    #[arg(long, requires = "boundary_rank")]
    split_cutoff: bool,
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Output directory (JSON goes to stdout without one)
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl StandingsArg {
    fn cutoff_rule(&self, configured: CutoffRule) -> CutoffRule {
        match self.boundary_rank {
            Some(rank) if self.split_cutoff => CutoffRule::split(rank),
            Some(rank) => CutoffRule::uniform(rank),
            None => configured,
        }
    }
}

pub(crate) fn run(arg: &StandingsArg) -> anyhow::Result<()> {
    let config = util::read_config_file(arg.config.as_deref())?;
    let mut tournament = Tournament::load(&arg.input)?;
    tournament.apply_modifiers()?;

    let cutoff = arg.cutoff_rule(config.cutoff);
    let standings = StandingsBuilder::new(&tournament.players, &tournament.teams)
        .with_scoring_rule(config.scoring)
        .build(&cutoff)
        .context("Failed to build team standings")?;
    let tables = StandingsTables::build(&standings, &tournament.history, &config.export)
        .context("Failed to export standings")?;

    if let Some(dir) = &arg.output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    match arg.format {
        OutputFormat::Json => {
            let path = arg.output_dir.as_ref().map(|dir| dir.join("standings.json"));
            Output::save_json(&tables, path.clone())?;
            if let Some(path) = path {
                tracing::info!(path = %path.display(), "wrote standings");
            }
        }
        OutputFormat::Csv => {
            let Some(dir) = &arg.output_dir else {
                anyhow::bail!("--output-dir is required for CSV output");
            };
            for table in tables.iter() {
                let path = Output::save_csv(table, dir)?;
                tracing::info!(path = %path.display(), rows = table.len(), "wrote table");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[clap(flatten)]
        arg: StandingsArg,
    }

    fn parse(extra: &[&str]) -> StandingsArg {
        let base = ["mjrank", "--teams", "t.json", "--players", "p.json", "--logs", "l.json"];
        Cli::try_parse_from(base.iter().chain(extra)).unwrap().arg
    }

    #[test]
    fn test_defaults() {
        let arg = parse(&[]);
        assert_eq!(arg.format, OutputFormat::Json);
        assert_eq!(arg.cutoff_rule(CutoffRule::split(4)), CutoffRule::split(4));
        assert!(arg.input.modifiers.is_none());
    }

    #[test]
    fn test_boundary_rank_overrides_config() {
        let arg = parse(&["--boundary-rank", "8", "--format", "csv"]);
        assert_eq!(arg.format, OutputFormat::Csv);
        assert_eq!(arg.cutoff_rule(CutoffRule::default()), CutoffRule::uniform(8));

        let arg = parse(&["--boundary-rank", "8", "--split-cutoff"]);
        assert_eq!(arg.cutoff_rule(CutoffRule::default()), CutoffRule::split(8));
    }

    #[test]
    fn test_split_requires_boundary_rank() {
        let base = ["mjrank", "--teams", "t", "--players", "p", "--logs", "l"];
        assert!(Cli::try_parse_from(base.iter().chain(&["--split-cutoff"])).is_err());
    }
}
