use crate::{
    RankCountMismatchError, TeamAssignmentError,
    core::{Player, TeamId, feed::PlayerDetail},
    engine::Teams,
};

/// All players of a contest, in input order.
///
/// Input order is the tiebreak of the individual standings, so it is never
/// rearranged.
#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_details<I>(details: I) -> Self
    where
        I: IntoIterator<Item = PlayerDetail>,
    {
        details.into_iter().map(Player::from_detail).collect()
    }

    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn get(&self, nickname: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.nickname() == nickname)
    }

    pub(crate) fn get_mut(&mut self, nickname: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.nickname() == nickname)
    }

    /// Assigns a single player to a registered team.
    pub fn assign_team(
        &mut self,
        nickname: &str,
        team: &TeamId,
        teams: &Teams,
    ) -> Result<(), TeamAssignmentError> {
        if teams.get(team).is_none() {
            return Err(TeamAssignmentError::UnknownTeam {
                nickname: nickname.to_owned(),
                team: team.to_string(),
            });
        }
        let player = self
            .get_mut(nickname)
            .ok_or_else(|| TeamAssignmentError::UnknownPlayer {
                nickname: nickname.to_owned(),
                team: team.to_string(),
            })?;
        player.set_team(Some(team.clone()));
        Ok(())
    }

    /// Assigns every player to the first team whose roster lists their
    /// nickname.
    ///
    /// Roster members with no player record are skipped and returned as
    /// errors; the assignment itself never fails.
    pub fn assign_teams(&mut self, teams: &Teams) -> Vec<TeamAssignmentError> {
        for player in &mut self.players {
            let team = teams.player_team(player.nickname()).map(|t| t.id().clone());
            player.set_team(team);
        }

        let mut errors = vec![];
        for team in teams {
            for nickname in team.member_nicknames() {
                if self.get(nickname).is_none() {
                    tracing::warn!(
                        team = team.name(),
                        nickname = %nickname,
                        "roster member has no player record"
                    );
                    errors.push(TeamAssignmentError::UnknownPlayer {
                        nickname: nickname.clone(),
                        team: team.id().to_string(),
                    });
                }
            }
        }
        errors
    }

    /// Players no registered team claims.
    pub fn unassigned(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.team().is_none())
    }

    /// Players whose rank counts do not add up to their game count.
    #[must_use]
    pub fn check_rank_counts(&self) -> Vec<RankCountMismatchError> {
        self.players
            .iter()
            .filter_map(|p| p.check_rank_counts().err())
            .collect()
    }
}

impl<'a> IntoIterator for &'a PlayerPool {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

impl FromIterator<Player> for PlayerPool {
    fn from_iter<T: IntoIterator<Item = Player>>(iter: T) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}
