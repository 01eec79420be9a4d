use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ModifierError, core::Placement, engine::PlayerPool};

/// Moves one game from one finishing position to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RankCountDelta {
    pub from: Placement,
    pub to: Placement,
}

/// A single external correction, usually a cross-game tie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ModifierEntry {
    pub point_delta: f64,
    pub rank_count_delta: RankCountDelta,
}

/// Point and rank-count corrections keyed by player nickname.
///
/// Applying a ledger is not idempotent, so [`ModifierLedger::apply`] consumes
/// it.
///
/// ```
/// use mjrank_engine::{ModifierEntry, ModifierLedger, Placement, Player, PlayerPool, RankCountDelta};
///
/// let mut pool: PlayerPool = [Player::new(1, "Alice").with_record(2, [0, 2, 0, 0], 10000.0)]
///     .into_iter()
///     .collect();
///
/// let mut ledger = ModifierLedger::new();
/// ledger.push("Alice", ModifierEntry {
///     point_delta: 20000.0,
///     rank_count_delta: RankCountDelta { from: Placement::Second, to: Placement::First },
/// });
///
/// assert_eq!(ledger.apply(&mut pool).unwrap(), 1);
/// let alice = pool.get("Alice").unwrap();
/// assert_eq!(alice.rank_points(), 30000.0);
/// assert_eq!(alice.rank_counts(), &[1, 1, 0, 0]);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ModifierLedger {
    entries: BTreeMap<String, Vec<ModifierEntry>>,
}

impl ModifierLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry after any existing entries for the same player.
    pub fn push(&mut self, nickname: impl Into<String>, entry: ModifierEntry) {
        self.entries.entry(nickname.into()).or_default().push(entry);
    }

    /// Total number of entries across all players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies every entry in order and returns how many were applied.
    ///
    /// Stops at the first entry naming an unknown player or moving a game out
    /// of an empty rank count. The failing entry leaves its player untouched;
    /// entries applied before it are kept.
    pub fn apply(self, pool: &mut PlayerPool) -> Result<usize, ModifierError> {
        let mut applied = 0;
        for (nickname, entries) in self.entries {
            let Some(player) = pool.get_mut(&nickname) else {
                return Err(ModifierError::UnknownPlayer { nickname });
            };
            for (entry_index, entry) in entries.into_iter().enumerate() {
                let RankCountDelta { from, to } = entry.rank_count_delta;
                if !player.move_rank_count(from, to) {
                    return Err(ModifierError::NegativeRankCount {
                        nickname,
                        placement: from,
                        entry_index,
                    });
                }
                player.add_rank_points(entry.point_delta);
                applied += 1;
            }
            tracing::debug!(nickname = %nickname, "applied modifiers");
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    fn entry(point_delta: f64, from: u8, to: u8) -> ModifierEntry {
        ModifierEntry {
            point_delta,
            rank_count_delta: RankCountDelta {
                from: Placement::try_from(from).unwrap(),
                to: Placement::try_from(to).unwrap(),
            },
        }
    }

    fn pool() -> PlayerPool {
        [
            Player::new(1, "Alice").with_record(4, [1, 1, 1, 1], 5000.0),
            Player::new(2, "Bob").with_record(2, [0, 0, 1, 1], -30000.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_apply_in_order_preserves_game_count() {
        let mut pool = pool();
        let mut ledger = ModifierLedger::new();
        ledger.push("Bob", entry(10000.0, 4, 3));
        ledger.push("Bob", entry(10000.0, 3, 2));
        ledger.push("Alice", entry(-10000.0, 2, 3));
        assert_eq!(ledger.len(), 3);

        assert_eq!(ledger.apply(&mut pool).unwrap(), 3);

        let alice = pool.get("Alice").unwrap();
        assert_eq!(alice.rank_points(), -5000.0);
        assert_eq!(alice.rank_counts(), &[1, 0, 2, 1]);

        let bob = pool.get("Bob").unwrap();
        assert_eq!(bob.rank_points(), -10000.0);
        assert_eq!(bob.rank_counts(), &[0, 1, 1, 0]);

        assert!(pool.check_rank_counts().is_empty());
    }

    #[test]
    fn test_unknown_player() {
        let mut pool = pool();
        let mut ledger = ModifierLedger::new();
        ledger.push("Zed", entry(1000.0, 1, 2));

        let err = ledger.apply(&mut pool).unwrap_err();
        assert!(matches!(err, ModifierError::UnknownPlayer { nickname } if nickname == "Zed"));
    }

    #[test]
    fn test_negative_rank_count_leaves_player_untouched() {
        let mut pool = pool();
        let mut ledger = ModifierLedger::new();
        ledger.push("Bob", entry(5000.0, 1, 2));

        let err = ledger.apply(&mut pool).unwrap_err();
        assert!(matches!(
            err,
            ModifierError::NegativeRankCount {
                placement: Placement::First,
                entry_index: 0,
                ..
            }
        ));

        let bob = pool.get("Bob").unwrap();
        assert_eq!(bob.rank_points(), -30000.0);
        assert_eq!(bob.rank_counts(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_deserialize_feed() {
        let ledger: ModifierLedger = serde_json::from_value(serde_json::json!({
            "Alice": [
                {"point_delta": 2500, "rank_count_delta": {"from": 2, "to": 1}},
                {"point_delta": -2500, "rank_count_delta": {"from": 1, "to": 2}}
            ]
        }))
        .unwrap();
        assert_eq!(ledger.len(), 2);

        let invalid = serde_json::from_value::<ModifierLedger>(serde_json::json!({
            "Alice": [{"point_delta": 0, "rank_count_delta": {"from": 5, "to": 1}}]
        }));
        assert!(invalid.is_err());
    }
}
