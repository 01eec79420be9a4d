use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use mjrank_analysis::table::Table;
use mjrank_engine::{
    ModifierLedger,
    feed::{MatchLog, PlayerDetail, TeamRoster},
};

use crate::config::TournamentConfig;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    /// Writes `table` as `<dir>/<table name>.csv` and returns the path.
    pub fn save_csv(table: &Table, dir: &Path) -> anyhow::Result<PathBuf> {
        let path = dir.join(format!("{}.csv", table.name()));
        let mut output = Output::open(path.clone())?;
        table
            .write_csv(&mut output)
            .with_context(|| format!("Failed to write CSV to {}", output.display_path()))?;
        Ok(path)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read team rosters from a JSON array
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_rosters_file<P>(path: P) -> anyhow::Result<Vec<TeamRoster>>
where
    P: AsRef<Path>,
{
    read_json_file("team rosters", path)
}

/// Read player detail records from a JSON array
///
/// Player order in the file is the tiebreak of the individual standings.
pub fn read_players_file<P>(path: P) -> anyhow::Result<Vec<PlayerDetail>>
where
    P: AsRef<Path>,
{
    read_json_file("player details", path)
}

pub fn read_logs_file<P>(path: P) -> anyhow::Result<Vec<MatchLog>>
where
    P: AsRef<Path>,
{
    read_json_file("match logs", path)
}

pub fn read_modifiers_file<P>(path: P) -> anyhow::Result<ModifierLedger>
where
    P: AsRef<Path>,
{
    read_json_file("modifiers", path)
}

/// Read tournament configuration, falling back to defaults without a path
pub fn read_config_file(path: Option<&Path>) -> anyhow::Result<TournamentConfig> {
    match path {
        Some(path) => read_json_file("config", path),
        None => Ok(TournamentConfig::default()),
    }
}
