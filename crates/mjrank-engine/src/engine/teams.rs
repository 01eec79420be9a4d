use crate::{
    InvalidColorError,
    core::{Team, TeamId, feed::TeamRoster},
};

/// Registered teams, in roster order.
///
/// Roster order is significant: the team-grouped standings list teams in
/// this order.
#[derive(Debug, Clone, Default)]
pub struct Teams {
    teams: Vec<Team>,
}

impl Teams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rosters<I>(rosters: I) -> Result<Self, InvalidColorError>
    where
        I: IntoIterator<Item = TeamRoster>,
    {
        let teams = rosters
            .into_iter()
            .map(Team::from_roster)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { teams })
    }

    pub fn push(&mut self, team: Team) {
        self.teams.push(team);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    #[must_use]
    pub fn get(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == id)
    }

    /// Registration index of a team.
    #[must_use]
    pub fn position(&self, id: &TeamId) -> Option<usize> {
        self.teams.iter().position(|t| t.id() == id)
    }

    /// First registered team listing `nickname` as a member.
    #[must_use]
    pub fn player_team(&self, nickname: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.has_member(nickname))
    }
}

impl<'a> IntoIterator for &'a Teams {
    type Item = &'a Team;
    type IntoIter = std::slice::Iter<'a, Team>;

    fn into_iter(self) -> Self::IntoIter {
        self.teams.iter()
    }
}

impl FromIterator<Team> for Teams {
    fn from_iter<T: IntoIterator<Item = Team>>(iter: T) -> Self {
        Self {
            teams: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Teams {
        [
            Team::new("t1", "Red", vec!["Alice".into(), "Bob".into()], None),
            Team::new("t2", "Blue", vec!["Carol".into(), "Bob".into()], None),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_player_team_first_match_wins() {
        let teams = teams();
        assert_eq!(teams.player_team("Bob").map(Team::name), Some("Red"));
        assert_eq!(teams.player_team("Carol").map(Team::name), Some("Blue"));
        assert!(teams.player_team("Dave").is_none());
    }

    #[test]
    fn test_lookup_by_id() {
        let teams = teams();
        let blue = TeamId::from("t2");
        assert_eq!(teams.get(&blue).map(Team::name), Some("Blue"));
        assert_eq!(teams.position(&blue), Some(1));
        assert_eq!(teams.position(&TeamId::from("t9")), None);
    }
}
