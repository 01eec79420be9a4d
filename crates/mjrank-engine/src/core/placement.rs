use serde::{Deserialize, Serialize};

use crate::InvalidPlacementError;

/// Finishing position in a four-player match.
///
/// Serialized as the integer `1..=4`; any other value fails to deserialize.
///
/// ```
/// use mjrank_engine::Placement;
///
/// let placement = Placement::try_from(2).unwrap();
/// assert_eq!(placement, Placement::Second);
/// assert_eq!(placement.index(), 1);
/// assert!(Placement::try_from(5).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Placement {
    #[display("1st")]
    First,
    #[display("2nd")]
    Second,
    #[display("3rd")]
    Third,
    #[display("4th")]
    Fourth,
}

impl Placement {
    pub const ALL: [Self; 4] = [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Zero-based index into per-placement arrays such as rank counts and uma.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            3 => Some(Self::Fourth),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Placement {
    type Error = InvalidPlacementError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|index| Self::from_index(usize::from(index)))
            .ok_or(InvalidPlacementError { value })
    }
}

impl From<Placement> for u8 {
    fn from(placement: Placement) -> Self {
        placement.number()
    }
}
