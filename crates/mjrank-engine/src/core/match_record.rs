use serde::Serialize;

use crate::{
    MatchRecordError,
    core::feed::{LogAccount, LogResultEntry, MatchLog},
    engine::{TieReport, resolve_ties},
};

/// One seat's outcome in a tie-resolved match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatResult {
    pub seat: u8,
    pub account_id: u64,
    pub nickname: String,
    /// Raw chip delta at match end, before uma.
    pub placement_point: i64,
    /// Final score after uma, with equal-placement ties averaged.
    pub total_point: f64,
}

impl SeatResult {
    fn new(account: LogAccount, result: LogResultEntry) -> Self {
        debug_assert_eq!(account.seat, result.seat);
        Self {
            seat: account.seat,
            account_id: account.account_id,
            nickname: account.nickname,
            placement_point: result.part_point_1,
            total_point: result.total_point,
        }
    }
}

/// A single ingested match.
///
/// Ties are resolved exactly once, in [`MatchRecord::from_log`]; the record is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    uuid: String,
    start_time: i64,
    end_time: i64,
    seats: [SeatResult; 4],
    tie_report: TieReport,
}

impl MatchRecord {
    /// Validates a raw match log, resolves ties and merges results by seat.
    ///
    /// Both the account list and the result block must contain exactly one
    /// entry for each seat `0..=3`.
    pub fn from_log(log: MatchLog) -> Result<Self, MatchRecordError> {
        let MatchLog {
            uuid,
            start_time,
            end_time,
            accounts,
            result,
        } = log;

        let count = result.players.len();
        let mut entries: [LogResultEntry; 4] =
            result.players.try_into().map_err(|_| MatchRecordError::EntryCount {
                uuid: uuid.clone(),
                part: "result",
                count,
            })?;
        // seats must be valid before the resolver mutates anything
        by_seat(&uuid, "result", entries.to_vec(), |e| e.seat)?;
        let tie_report = resolve_ties(&mut entries);
        if tie_report.has_ties() {
            tracing::debug!(
                uuid = %uuid,
                merged = ?tie_report.merged_pairs(),
                uncovered = tie_report.has_uncovered_tie(),
                "resolved equal-placement tie"
            );
        }

        let [a0, a1, a2, a3] = by_seat(&uuid, "account", accounts, |a| a.seat)?;
        let [r0, r1, r2, r3] = by_seat(&uuid, "result", Vec::from(entries), |e| e.seat)?;
        let seats = [
            SeatResult::new(a0, r0),
            SeatResult::new(a1, r1),
            SeatResult::new(a2, r2),
            SeatResult::new(a3, r3),
        ];

        Ok(Self {
            uuid,
            start_time,
            end_time,
            seats,
            tie_report,
        })
    }

    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Match start, in epoch seconds.
    #[must_use]
    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    /// Match end, in epoch seconds.
    #[must_use]
    pub fn end_time(&self) -> i64 {
        self.end_time
    }

    /// Seat results ordered by seat index.
    #[must_use]
    pub fn seats(&self) -> &[SeatResult; 4] {
        &self.seats
    }

    /// # Panics
    ///
    /// Panics if `seat` is not in `0..4`.
    #[must_use]
    pub fn seat(&self, seat: usize) -> &SeatResult {
        &self.seats[seat]
    }

    #[must_use]
    pub fn tie_report(&self) -> &TieReport {
        &self.tie_report
    }

    #[must_use]
    pub fn has_played(&self, nickname: &str) -> bool {
        self.player_result(nickname).is_some()
    }

    #[must_use]
    pub fn player_result(&self, nickname: &str) -> Option<&SeatResult> {
        self.seats.iter().find(|s| s.nickname == nickname)
    }

    /// Seats ordered by total point descending; equal totals keep seat order.
    #[must_use]
    pub fn finishing_order(&self) -> [&SeatResult; 4] {
        let mut order = self.seats.each_ref();
        order.sort_by(|a, b| b.total_point.total_cmp(&a.total_point));
        order
    }

    #[must_use]
    pub fn total_point_sum(&self) -> f64 {
        self.seats.iter().map(|s| s.total_point).sum()
    }
}

/// Places four items into seat order, rejecting gaps and duplicates.
fn by_seat<T>(
    uuid: &str,
    part: &'static str,
    items: Vec<T>,
    seat_of: impl Fn(&T) -> u8,
) -> Result<[T; 4], MatchRecordError> {
    let count_error = |count| MatchRecordError::EntryCount {
        uuid: uuid.to_owned(),
        part,
        count,
    };
    if items.len() != 4 {
        return Err(count_error(items.len()));
    }

    let mut slots: [Option<T>; 4] = [None, None, None, None];
    for item in items {
        let seat = seat_of(&item);
        let slot = slots
            .get_mut(usize::from(seat))
            .ok_or_else(|| MatchRecordError::SeatOutOfRange {
                uuid: uuid.to_owned(),
                seat,
            })?;
        if slot.is_some() {
            return Err(MatchRecordError::DuplicateSeat {
                uuid: uuid.to_owned(),
                part,
                seat,
            });
        }
        *slot = Some(item);
    }

    let filled = slots.iter().flatten().count();
    let [Some(s0), Some(s1), Some(s2), Some(s3)] = slots else {
        return Err(count_error(filled));
    };
    Ok([s0, s1, s2, s3])
}
