use clap::{Parser, Subcommand};

use self::{check::CheckArg, init_config::InitConfigArg, standings::StandingsArg};

mod check;
mod init_config;
mod standings;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Build individual, team and match log tables
    Standings(#[clap(flatten)] StandingsArg),
    /// Report data-integrity problems in the input files
    Check(#[clap(flatten)] CheckArg),
    /// Write the default configuration file
    InitConfig(#[clap(flatten)] InitConfigArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Standings(arg) => standings::run(&arg)?,
        Mode::Check(arg) => check::run(&arg)?,
        Mode::InitConfig(arg) => init_config::run(&arg)?,
    }
    Ok(())
}
