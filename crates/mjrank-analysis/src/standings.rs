//! Individual, team-grouped and team-total standings
//!
//! The three views are built in sequence, each stage consuming the previous
//! one and keeping it available:
//!
//! ```text
//! StandingsBuilder -> IndividualStandings -> TeamGroupedStandings -> TeamTotalStandings
//! ```
//!
//! All views borrow the player pool and team list; nothing is mutated.

use std::cmp::Ordering;

use mjrank_engine::{Player, PlayerPool, Team, Teams};
use mjrank_stats::{player::PlayerStats, scoring::ScoringRule};

use crate::cutoff::{CutoffRule, StandingsError};

fn by_points_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[derive(Debug, Clone)]
pub struct StandingsBuilder<'a> {
    players: &'a PlayerPool,
    teams: &'a Teams,
    scoring: ScoringRule,
}

impl<'a> StandingsBuilder<'a> {
    #[must_use]
    pub fn new(players: &'a PlayerPool, teams: &'a Teams) -> Self {
        Self {
            players,
            teams,
            scoring: ScoringRule::default(),
        }
    }

    #[must_use]
    pub fn with_scoring_rule(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Ranks every player by rank points, highest first.
    ///
    /// Players with equal points keep their pool order.
    #[must_use]
    pub fn individual(self) -> IndividualStandings<'a> {
        let mut players = self.players.iter().collect::<Vec<_>>();
        players.sort_by(|a, b| by_points_desc(a.rank_points(), b.rank_points()));

        let rows = players
            .into_iter()
            .enumerate()
            .map(|(i, player)| {
                let team = player.team();
                IndividualRow {
                    rank: i + 1,
                    player,
                    team: team.and_then(|id| self.teams.get(id)),
                    team_position: team.and_then(|id| self.teams.position(id)),
                    stats: PlayerStats::compute(player, &self.scoring),
                }
            })
            .collect();

        IndividualStandings {
            teams: self.teams,
            rows,
        }
    }

    /// Runs every stage in one go.
    pub fn build(self, cutoff: &CutoffRule) -> Result<TeamTotalStandings<'a>, StandingsError> {
        self.individual().group_by_team().team_totals(cutoff)
    }
}

/// One player's line in the individual table.
#[derive(Debug, Clone)]
pub struct IndividualRow<'a> {
    /// 1-based position in the individual ranking.
    pub rank: usize,
    pub player: &'a Player,
    pub team: Option<&'a Team>,
    team_position: Option<usize>,
    pub stats: PlayerStats,
}

#[derive(Debug, Clone)]
pub struct IndividualStandings<'a> {
    teams: &'a Teams,
    rows: Vec<IndividualRow<'a>>,
}

impl<'a> IndividualStandings<'a> {
    #[must_use]
    pub fn teams(&self) -> &'a Teams {
        self.teams
    }

    #[must_use]
    pub fn rows(&self) -> &[IndividualRow<'a>] {
        &self.rows
    }

    #[must_use]
    pub fn get(&self, nickname: &str) -> Option<&IndividualRow<'a>> {
        self.rows.iter().find(|row| row.player.nickname() == nickname)
    }

    /// Reorders the individual rows by team registration order.
    ///
    /// Within a team the individual ranking order is kept. Players without a
    /// team come after every team.
    #[must_use]
    pub fn group_by_team(self) -> TeamGroupedStandings<'a> {
        let mut rows = self.rows.clone();
        rows.sort_by_key(|row| row.team_position.unwrap_or(usize::MAX));
        TeamGroupedStandings {
            individual: self,
            rows,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamGroupedStandings<'a> {
    individual: IndividualStandings<'a>,
    rows: Vec<IndividualRow<'a>>,
}

impl<'a> TeamGroupedStandings<'a> {
    #[must_use]
    pub fn individual(&self) -> &IndividualStandings<'a> {
        &self.individual
    }

    #[must_use]
    pub fn rows(&self) -> &[IndividualRow<'a>] {
        &self.rows
    }

    /// Rows of one team, in individual ranking order.
    pub fn team_rows<'s>(
        &'s self,
        team: &'s Team,
    ) -> impl Iterator<Item = &'s IndividualRow<'a>> {
        self.rows
            .iter()
            .filter(move |row| row.team.is_some_and(|t| t.id() == team.id()))
    }

    /// Sums each team's members and ranks the teams.
    ///
    /// Teams with no assigned player get no row and no rank. Fails when
    /// `cutoff` references a rank no ranked team holds; with no ranked teams
    /// the rule is not checked.
    pub fn team_totals(
        self,
        cutoff: &CutoffRule,
    ) -> Result<TeamTotalStandings<'a>, StandingsError> {
        let teams = self.individual.teams;
        let mut rows = teams
            .iter()
            .map(|team| {
                let mut row = TeamTotalRow::empty(team);
                for member in self.team_rows(team) {
                    row.add_player(member.player);
                }
                row
            })
            .filter(|row| {
                if row.member_count == 0 {
                    tracing::warn!(team = row.team.name(), "team has no assigned players");
                }
                row.member_count > 0
            })
            .collect::<Vec<_>>();
        if !rows.is_empty() {
            cutoff.validate(rows.len())?;
        }
        rows.sort_by(|a, b| by_points_desc(a.rank_points, b.rank_points));

        let totals = rows.iter().map(|row| row.rank_points).collect::<Vec<_>>();
        for (i, row) in rows.iter_mut().enumerate() {
            row.rank = i + 1;
            row.gap_to_previous = i.checked_sub(1).map(|prev| totals[i] - totals[prev]);
            row.cutoff_margin = totals[i] - totals[cutoff.reference_rank(row.rank) - 1];
        }

        tracing::debug!(teams = rows.len(), ?cutoff, "built team standings");
        Ok(TeamTotalStandings {
            team_grouped: self,
            cutoff: *cutoff,
            rows,
        })
    }
}

/// One team's line in the team table.
#[derive(Debug, Clone)]
pub struct TeamTotalRow<'a> {
    /// 1-based position in the team ranking.
    pub rank: usize,
    pub team: &'a Team,
    pub member_count: usize,
    pub rank_points: f64,
    pub total_game_count: u32,
    pub rank_counts: [u32; 4],
    /// This total minus the previous row's total; `None` for the leader.
    pub gap_to_previous: Option<f64>,
    /// This total minus the cutoff reference team's total.
    pub cutoff_margin: f64,
}

impl<'a> TeamTotalRow<'a> {
    fn empty(team: &'a Team) -> Self {
        Self {
            rank: 0,
            team,
            member_count: 0,
            rank_points: 0.0,
            total_game_count: 0,
            rank_counts: [0; 4],
            gap_to_previous: None,
            cutoff_margin: 0.0,
        }
    }

    fn add_player(&mut self, player: &Player) {
        self.member_count += 1;
        self.rank_points += player.rank_points();
        self.total_game_count += player.total_game_count();
        for (total, count) in self.rank_counts.iter_mut().zip(player.rank_counts()) {
            *total += count;
        }
    }
}

#[derive(Debug, Clone)]
pub struct TeamTotalStandings<'a> {
    team_grouped: TeamGroupedStandings<'a>,
    cutoff: CutoffRule,
    rows: Vec<TeamTotalRow<'a>>,
}

impl<'a> TeamTotalStandings<'a> {
    #[must_use]
    pub fn individual(&self) -> &IndividualStandings<'a> {
        self.team_grouped.individual()
    }

    #[must_use]
    pub fn team_grouped(&self) -> &TeamGroupedStandings<'a> {
        &self.team_grouped
    }

    #[must_use]
    pub fn cutoff(&self) -> &CutoffRule {
        &self.cutoff
    }

    #[must_use]
    pub fn rows(&self) -> &[TeamTotalRow<'a>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use mjrank_engine::{Placement, RecentGame, TeamId};

    use super::*;

    fn fixture() -> (PlayerPool, Teams) {
        let mut pool: PlayerPool = [
            Player::new(1, "A").with_record(4, [2, 1, 1, 0], 30000.0),
            Player::new(2, "B").with_record(4, [0, 1, 1, 2], -20000.0),
            Player::new(3, "C").with_record(4, [1, 1, 1, 1], 30000.0),
            Player::new(4, "D").with_record(4, [1, 1, 2, 0], 10000.0),
            Player::new(5, "E").with_record(0, [0, 0, 0, 0], 0.0),
            Player::new(6, "F").with_record(4, [0, 0, 0, 4], -50000.0),
        ]
        .into_iter()
        .collect();
        let teams: Teams = [
            Team::new("t1", "Red", vec!["B".into(), "C".into()], None),
            Team::new("t2", "Blue", vec!["A".into(), "D".into()], None),
            Team::new("t3", "Green", vec!["F".into()], None),
            Team::new("t4", "Empty", vec![], None),
        ]
        .into_iter()
        .collect();
        assert!(pool.assign_teams(&teams).is_empty());
        (pool, teams)
    }

    fn nicknames<'a>(rows: &'a [IndividualRow<'_>]) -> Vec<&'a str> {
        rows.iter().map(|row| row.player.nickname()).collect()
    }

    #[test]
    fn test_individual_is_stable_sort_by_points() {
        let (pool, teams) = fixture();
        let individual = StandingsBuilder::new(&pool, &teams).individual();

        assert_eq!(nicknames(individual.rows()), ["A", "C", "D", "E", "B", "F"]);
        assert_eq!(
            individual.rows().iter().map(|r| r.rank).collect::<Vec<_>>(),
            [1, 2, 3, 4, 5, 6]
        );
        assert_eq!(individual.get("C").map(|r| r.team.map(Team::name)), Some(Some("Red")));
        assert!(individual.get("E").is_some_and(|r| r.team.is_none()));
    }

    #[test]
    fn test_individual_rows_carry_stats() {
        let (mut pool, teams) = fixture();
        pool.push(
            Player::new(7, "G")
                .with_record(1, [1, 0, 0, 0], 0.0)
                .with_recent_games(vec![RecentGame {
                    rank: Placement::First,
                    total_point: 35000.0,
                }]),
        );
        let individual = StandingsBuilder::new(&pool, &teams).individual();

        let g = individual.get("G").unwrap();
        assert_eq!(g.stats.rates.top_rate, 1.0);
        assert_eq!(g.stats.best_game_score, 15000.0);
        let e = individual.get("E").unwrap();
        assert_eq!(e.stats.rates.average_placement, 0.0);
    }

    #[test]
    fn test_team_grouped_order() {
        let (pool, teams) = fixture();
        let grouped = StandingsBuilder::new(&pool, &teams)
            .individual()
            .group_by_team();

        assert_eq!(nicknames(grouped.rows()), ["C", "B", "A", "D", "F", "E"]);
        assert_eq!(
            grouped.rows().iter().map(|r| r.rank).collect::<Vec<_>>(),
            [2, 5, 1, 3, 6, 4]
        );
        assert_eq!(nicknames(grouped.individual().rows())[0], "A");
    }

    #[test]
    fn test_team_totals() {
        let (pool, teams) = fixture();
        let standings = StandingsBuilder::new(&pool, &teams)
            .build(&CutoffRule::uniform(2))
            .unwrap();
        let rows = standings.rows();

        let ids = rows.iter().map(|r| r.team.id().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, ["t2", "t1", "t3"]);

        let blue = &rows[0];
        assert_eq!(blue.rank, 1);
        assert_eq!(blue.member_count, 2);
        assert_eq!(blue.rank_points, 40000.0);
        assert_eq!(blue.total_game_count, 8);
        assert_eq!(blue.rank_counts, [3, 2, 3, 0]);
        assert_eq!(blue.gap_to_previous, None);
        assert_eq!(blue.cutoff_margin, 30000.0);

        let red = &rows[1];
        assert_eq!(red.rank_points, 10000.0);
        assert_eq!(red.gap_to_previous, Some(-30000.0));
        assert_eq!(red.cutoff_margin, 0.0);

        let green = &rows[2];
        assert_eq!(green.rank, 3);
        assert_eq!(green.gap_to_previous, Some(-60000.0));
        assert_eq!(green.cutoff_margin, -60000.0);
        for row in &rows[1..] {
            assert!(row.gap_to_previous.is_some_and(|gap| gap <= 0.0));
        }
    }

    #[test]
    fn test_team_without_members_is_not_ranked() {
        let mut pool: PlayerPool = [
            Player::new(1, "A").with_record(1, [1, 0, 0, 0], 30000.0),
            Player::new(2, "B").with_record(1, [0, 0, 1, 0], -10000.0),
            Player::new(3, "C").with_record(1, [0, 0, 0, 1], -20000.0),
        ]
        .into_iter()
        .collect();
        let teams: Teams = [
            Team::new("t1", "Red", vec!["A".into()], None),
            Team::new("t2", "Ghosts", vec!["Renamed".into()], None),
            Team::new("t3", "Blue", vec!["B".into()], None),
            Team::new("t4", "Green", vec!["C".into()], None),
        ]
        .into_iter()
        .collect();
        assert_eq!(pool.assign_teams(&teams).len(), 1);

        let standings = StandingsBuilder::new(&pool, &teams)
            .build(&CutoffRule::uniform(3))
            .unwrap();
        let ranked = standings
            .rows()
            .iter()
            .map(|r| (r.rank, r.team.name(), r.cutoff_margin))
            .collect::<Vec<_>>();
        assert_eq!(
            ranked,
            [(1, "Red", 50000.0), (2, "Blue", 10000.0), (3, "Green", 0.0)]
        );
        assert!(!standings.rows().iter().any(|r| r.team.id() == &TeamId::from("t2")));

        let err = StandingsBuilder::new(&pool, &teams)
            .build(&CutoffRule::uniform(4))
            .unwrap_err();
        assert!(matches!(
            err,
            StandingsError::RankOutOfRange {
                rank: 4,
                team_count: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_team_totals_are_member_sums() {
        let (pool, teams) = fixture();
        let standings = StandingsBuilder::new(&pool, &teams)
            .build(&CutoffRule::uniform(1))
            .unwrap();
        for row in standings.rows() {
            let members = pool
                .iter()
                .filter(|p| p.team() == Some(row.team.id()))
                .collect::<Vec<_>>();
            assert_eq!(row.member_count, members.len());
            assert_eq!(
                row.rank_points,
                members.iter().map(|p| p.rank_points()).sum::<f64>()
            );
            assert_eq!(
                row.total_game_count,
                members.iter().map(|p| p.total_game_count()).sum::<u32>()
            );
        }
    }

    #[test]
    fn test_split_cutoff() {
        let (pool, teams) = fixture();
        let standings = StandingsBuilder::new(&pool, &teams)
            .build(&CutoffRule::split(2))
            .unwrap();
        let margins = standings
            .rows()
            .iter()
            .map(|r| r.cutoff_margin)
            .collect::<Vec<_>>();
        // inside the zone: against 3rd (-50000); outside: against 2nd (10000)
        assert_eq!(margins, [90000.0, 60000.0, -60000.0]);
    }

    #[test]
    fn test_cutoff_out_of_range() {
        let (pool, teams) = fixture();
        let err = StandingsBuilder::new(&pool, &teams)
            .build(&CutoffRule::default())
            .unwrap_err();
        assert!(matches!(
            err,
            StandingsError::RankOutOfRange {
                rank: 6,
                team_count: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_no_teams() {
        let pool: PlayerPool = [Player::new(1, "A")].into_iter().collect();
        let teams = Teams::new();
        let standings = StandingsBuilder::new(&pool, &teams)
            .build(&CutoffRule::default())
            .unwrap();
        assert!(standings.rows().is_empty());
        assert_eq!(standings.team_grouped().rows().len(), 1);
    }
}
