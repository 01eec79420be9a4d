use std::path::PathBuf;

use clap::Args;

use crate::{config::TournamentConfig, util::Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct InitConfigArg {
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &InitConfigArg) -> anyhow::Result<()> {
    Output::save_json(&TournamentConfig::default(), arg.output.clone())?;
    if let Some(path) = &arg.output {
        tracing::info!(path = %path.display(), "wrote default config");
    }
    Ok(())
}
