//! Projection of standings and match history into output tables
//!
//! Values stay unrounded through the standings; rounding and point scaling
//! happen here, once, according to [`ExportOptions`].

use chrono::{DateTime, FixedOffset, format::StrftimeItems};
use mjrank_engine::{MatchHistory, MatchRecord, Placement, Team, Teams};
use serde::{Deserialize, Serialize};

use crate::{
    standings::{IndividualRow, TeamTotalRow, TeamTotalStandings},
    table::{Cell, Column, Table, TableError},
};

pub const DEFAULT_REPLAY_URL_PREFIX: &str = "https://game.maj-soul.com/1/?paipu=";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Point columns are divided by this, so `12300` reads as `12.3`.
    pub point_scale: f64,
    pub rate_decimals: u8,
    pub placement_decimals: u8,
    /// Offset from UTC used to render match times.
    pub utc_offset_minutes: i32,
    /// `strftime`-style pattern for match times.
    pub time_format: String,
    pub replay_url_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            point_scale: 1000.0,
            rate_decimals: 4,
            placement_decimals: 2,
            utc_offset_minutes: 8 * 60,
            time_format: "%Y-%m-%d %H:%M:%S".to_owned(),
            replay_url_prefix: DEFAULT_REPLAY_URL_PREFIX.to_owned(),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ExportError {
    #[display("point scale must be a positive finite number, got {scale}")]
    InvalidPointScale { scale: f64 },
    #[display("UTC offset of {minutes} minutes is out of range")]
    InvalidUtcOffset { minutes: i32 },
    #[display("invalid time format {format:?}")]
    InvalidTimeFormat { format: String },
    #[display("match {uuid}: timestamp {timestamp} is out of range")]
    InvalidTimestamp { uuid: String, timestamp: i64 },
    #[display("{source}")]
    Table { source: TableError },
}

impl From<TableError> for ExportError {
    fn from(source: TableError) -> Self {
        Self::Table { source }
    }
}

impl ExportOptions {
    pub fn validate(&self) -> Result<(), ExportError> {
        if !(self.point_scale.is_finite() && self.point_scale > 0.0) {
            return Err(ExportError::InvalidPointScale {
                scale: self.point_scale,
            });
        }
        self.utc_offset()?;
        if StrftimeItems::new(&self.time_format)
            .any(|item| matches!(item, chrono::format::Item::Error))
        {
            return Err(ExportError::InvalidTimeFormat {
                format: self.time_format.clone(),
            });
        }
        Ok(())
    }

    pub fn utc_offset(&self) -> Result<FixedOffset, ExportError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ExportError::InvalidUtcOffset {
                minutes: self.utc_offset_minutes,
            })
    }

    fn points(&self, raw: f64) -> Cell {
        Cell::Real(raw / self.point_scale)
    }

    fn rate(&self, value: f64) -> Cell {
        Cell::Real(round_to(value, self.rate_decimals))
    }

    fn format_time(&self, record: &MatchRecord, timestamp: i64) -> Result<Cell, ExportError> {
        let time = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            ExportError::InvalidTimestamp {
                uuid: record.uuid().to_owned(),
                timestamp,
            }
        })?;
        let local = time.with_timezone(&self.utc_offset()?);
        Ok(Cell::Text(local.format(&self.time_format).to_string()))
    }
}

fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10_f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}

fn player_columns() -> Vec<Column> {
    let mut columns = vec![
        Column::integer("Rank"),
        Column::text("Team"),
        Column::text("Player"),
        Column::real("Points"),
        Column::integer("Games"),
        Column::real("Avg Placement"),
    ];
    columns.extend(Placement::ALL.map(|p| Column::integer(p.to_string())));
    columns.extend([
        Column::real("Top Rate"),
        Column::real("Rentai Rate"),
        Column::real("4th Avoidance Rate"),
        Column::real("Best Score"),
    ]);
    columns
}

fn player_cells(row: &IndividualRow<'_>, options: &ExportOptions) -> Vec<Cell> {
    let player = row.player;
    let rates = &row.stats.rates;
    let mut cells = vec![
        row.rank.into(),
        row.team.map_or(Cell::Empty, |t| t.name().into()),
        player.nickname().into(),
        options.points(player.rank_points()),
        player.total_game_count().into(),
        Cell::Real(round_to(rates.average_placement, options.placement_decimals)),
    ];
    cells.extend(player.rank_counts().map(Cell::from));
    cells.extend([
        options.rate(rates.top_rate),
        options.rate(rates.rentai_rate),
        options.rate(rates.fourth_avoidance_rate),
        Cell::Real(row.stats.best_game_score),
    ]);
    cells
}

fn player_table<'r, 'a: 'r>(
    name: &str,
    rows: impl IntoIterator<Item = &'r IndividualRow<'a>>,
    options: &ExportOptions,
) -> Result<Table, ExportError> {
    let mut table = Table::new(name, player_columns());
    for row in rows {
        table.push_row(player_cells(row, options))?;
    }
    Ok(table)
}

/// Players in individual ranking order.
pub fn individual_table(
    standings: &TeamTotalStandings<'_>,
    options: &ExportOptions,
) -> Result<Table, ExportError> {
    options.validate()?;
    player_table("individual", standings.individual().rows(), options)
}

/// Players grouped by team, each row keeping its individual rank.
pub fn team_grouped_table(
    standings: &TeamTotalStandings<'_>,
    options: &ExportOptions,
) -> Result<Table, ExportError> {
    options.validate()?;
    player_table("team_grouped", standings.team_grouped().rows(), options)
}

fn team_cells(row: &TeamTotalRow<'_>, options: &ExportOptions) -> Vec<Cell> {
    let mut cells = vec![
        row.rank.into(),
        row.team.name().into(),
        options.points(row.rank_points),
        row.gap_to_previous.map_or(Cell::Empty, |gap| options.points(gap)),
        options.points(row.cutoff_margin),
        row.total_game_count.into(),
    ];
    cells.extend(row.rank_counts.map(Cell::from));
    cells
}

/// Teams in team ranking order, with gap and cutoff margin.
pub fn team_table(
    standings: &TeamTotalStandings<'_>,
    options: &ExportOptions,
) -> Result<Table, ExportError> {
    options.validate()?;

    let mut columns = vec![
        Column::integer("Rank"),
        Column::text("Team"),
        Column::real("Points"),
        Column::real("Gap"),
        Column::real("Cutoff Margin"),
        Column::integer("Games"),
    ];
    columns.extend(Placement::ALL.map(|p| Column::integer(p.to_string())));

    let mut table = Table::new("teams", columns);
    for row in standings.rows() {
        table.push_row(team_cells(row, options))?;
    }
    Ok(table)
}

/// One row per match, seats listed by finishing position.
///
/// The team of each seat is looked up by nickname in the rosters, so players
/// without a team get an empty cell.
pub fn match_log_table(
    history: &MatchHistory,
    teams: &Teams,
    options: &ExportOptions,
) -> Result<Table, ExportError> {
    options.validate()?;

    let mut columns = vec![Column::text("Start"), Column::text("End")];
    for placement in Placement::ALL {
        columns.extend([
            Column::text(format!("{placement} Player")),
            Column::text(format!("{placement} Team")),
            Column::integer(format!("{placement} Score")),
            Column::real(format!("{placement} Final Points")),
        ]);
    }
    columns.push(Column::text("Replay URL"));

    let mut table = Table::new("match_log", columns);
    for record in history {
        let mut cells = vec![
            options.format_time(record, record.start_time())?,
            options.format_time(record, record.end_time())?,
        ];
        for seat in record.finishing_order() {
            let team = teams.player_team(&seat.nickname).map(Team::name);
            cells.extend([
                seat.nickname.as_str().into(),
                team.map_or(Cell::Empty, Cell::from),
                seat.placement_point.into(),
                options.points(seat.total_point),
            ]);
        }
        cells.push(format!("{}{}", options.replay_url_prefix, record.uuid()).into());
        table.push_row(cells)?;
    }
    Ok(table)
}

/// Every output table of a run.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsTables {
    pub individual: Table,
    pub team_grouped: Table,
    pub teams: Table,
    pub match_log: Table,
}

impl StandingsTables {
    pub fn build(
        standings: &TeamTotalStandings<'_>,
        history: &MatchHistory,
        options: &ExportOptions,
    ) -> Result<Self, ExportError> {
        Ok(Self {
            individual: individual_table(standings, options)?,
            team_grouped: team_grouped_table(standings, options)?,
            teams: team_table(standings, options)?,
            match_log: match_log_table(history, standings.individual().teams(), options)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        [
            &self.individual,
            &self.team_grouped,
            &self.teams,
            &self.match_log,
        ]
        .into_iter()
    }
}
