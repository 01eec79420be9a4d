use crate::{
    MatchRecordError,
    core::{MatchRecord, feed::MatchLog},
};

/// Every ingested match, in ingestion order.
#[derive(Debug, Clone, Default)]
pub struct MatchHistory {
    matches: Vec<MatchRecord>,
}

impl MatchHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests raw logs, resolving ties once per match.
    pub fn from_logs<I>(logs: I) -> Result<Self, MatchRecordError>
    where
        I: IntoIterator<Item = MatchLog>,
    {
        let mut history = Self::new();
        for log in logs {
            history.add_log(log)?;
        }
        Ok(history)
    }

    pub fn add_log(&mut self, log: MatchLog) -> Result<&MatchRecord, MatchRecordError> {
        let record = MatchRecord::from_log(log)?;
        self.matches.push(record);
        Ok(&self.matches[self.matches.len() - 1])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRecord> {
        self.matches.iter()
    }

    #[must_use]
    pub fn get(&self, uuid: &str) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.uuid() == uuid)
    }

    pub fn player_matches<'a>(
        &'a self,
        nickname: &'a str,
    ) -> impl Iterator<Item = &'a MatchRecord> + 'a {
        self.matches.iter().filter(move |m| m.has_played(nickname))
    }

    /// Matches where the pairwise tie rule left tied seats unequal.
    pub fn partial_ties(&self) -> impl Iterator<Item = &MatchRecord> {
        self.matches.iter().filter(|m| m.tie_report().is_partial())
    }
}

impl<'a> IntoIterator for &'a MatchHistory {
    type Item = &'a MatchRecord;
    type IntoIter = std::slice::Iter<'a, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(uuid: &str, nicknames: [&str; 4], part_points: [i64; 4]) -> MatchLog {
        let accounts = (0..4)
            .map(|seat| {
                serde_json::json!({
                    "seat": seat,
                    "account_id": seat + 1,
                    "nickname": nicknames[seat],
                })
            })
            .collect::<Vec<_>>();
        let totals = [45000, 5000, -15000, -35000];
        let results = (0..4)
            .map(|seat| {
                serde_json::json!({
                    "seat": seat,
                    "part_point_1": part_points[seat],
                    "total_point": totals[seat],
                })
            })
            .collect::<Vec<_>>();
        serde_json::from_value(serde_json::json!({
            "uuid": uuid,
            "start_time": 0,
            "end_time": 3600,
            "accounts": accounts,
            "result": {"players": results},
        }))
        .unwrap()
    }

    #[test]
    fn test_lookup_and_player_matches() {
        let history = MatchHistory::from_logs([
            log("m1", ["A", "B", "C", "D"], [40000, 30000, 20000, 10000]),
            log("m2", ["A", "E", "F", "G"], [40000, 30000, 20000, 10000]),
            log("m3", ["H", "B", "C", "D"], [25000, 25000, 25000, 25000]),
        ])
        .unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(history.get("m2").map(MatchRecord::uuid), Some("m2"));
        assert!(history.get("m9").is_none());

        let played = history
            .player_matches("A")
            .map(MatchRecord::uuid)
            .collect::<Vec<_>>();
        assert_eq!(played, ["m1", "m2"]);

        let partial = history
            .partial_ties()
            .map(MatchRecord::uuid)
            .collect::<Vec<_>>();
        assert_eq!(partial, ["m3"]);
    }

    #[test]
    fn test_invalid_log_stops_ingestion() {
        let mut bad = log("m2", ["A", "B", "C", "D"], [40000, 30000, 20000, 10000]);
        bad.accounts.pop();

        let result = MatchHistory::from_logs([
            log("m1", ["A", "B", "C", "D"], [40000, 30000, 20000, 10000]),
            bad,
        ]);
        assert!(matches!(
            result,
            Err(MatchRecordError::EntryCount { count: 3, .. })
        ));
    }
}
