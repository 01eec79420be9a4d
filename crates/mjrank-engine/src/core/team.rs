use serde::{Deserialize, Serialize};

use crate::{InvalidColorError, core::feed::TeamRoster};

/// External team identifier from the roster feed.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TeamId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TeamId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Six hex digit display color, without a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayColor(String);

impl DisplayColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DisplayColor {
    type Error = InvalidColorError;

    fn try_from(color: String) -> Result<Self, Self::Error> {
        if color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(color))
        } else {
            Err(InvalidColorError { color })
        }
    }
}

impl From<DisplayColor> for String {
    fn from(color: DisplayColor) -> Self {
        color.0
    }
}

/// A registered team.
///
/// Membership is decided by nickname, not by account id: a player whose
/// nickname changes between roster load and match ingestion is no longer
/// recognized as a member.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: TeamId,
    name: String,
    member_nicknames: Vec<String>,
    display_color: Option<DisplayColor>,
}

impl Team {
    #[must_use]
    pub fn new(
        id: impl Into<TeamId>,
        name: impl Into<String>,
        member_nicknames: Vec<String>,
        display_color: Option<DisplayColor>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            member_nicknames,
            display_color,
        }
    }

    pub fn from_roster(roster: TeamRoster) -> Result<Self, InvalidColorError> {
        let TeamRoster {
            id,
            name,
            color,
            players,
        } = roster;
        let display_color = color
            .filter(|c| !c.is_empty())
            .map(DisplayColor::try_from)
            .transpose()?;
        let member_nicknames = players.into_iter().map(|m| m.nickname).collect();
        Ok(Self::new(id, name, member_nicknames, display_color))
    }

    #[must_use]
    pub fn id(&self) -> &TeamId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn member_nicknames(&self) -> &[String] {
        &self.member_nicknames
    }

    #[must_use]
    pub fn display_color(&self) -> Option<&DisplayColor> {
        self.display_color.as_ref()
    }

    #[must_use]
    pub fn has_member(&self, nickname: &str) -> bool {
        self.member_nicknames.iter().any(|m| m == nickname)
    }
}
