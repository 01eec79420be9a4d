use arrayvec::ArrayVec;

use crate::core::feed::LogResultEntry;

/// Result-block positions compared for equal placement points.
///
/// The last pair `(2, 3)` is deliberately not covered; a tie there is only
/// reported through [`TieReport::has_uncovered_tie`].
pub const TIE_CHECK_PAIRS: [(usize, usize); 2] = [(0, 1), (1, 2)];

/// What the tie resolver did to one match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TieReport {
    merged_pairs: ArrayVec<(usize, usize), 2>,
    uncovered_tie: bool,
}

impl TieReport {
    /// Result-block position pairs whose totals were replaced by their mean.
    #[must_use]
    pub fn merged_pairs(&self) -> &[(usize, usize)] {
        &self.merged_pairs
    }

    /// Whether positions 2 and 3 had equal placement points (left unmerged).
    #[must_use]
    pub fn has_uncovered_tie(&self) -> bool {
        self.uncovered_tie
    }

    #[must_use]
    pub fn has_ties(&self) -> bool {
        !self.merged_pairs.is_empty() || self.uncovered_tie
    }

    /// Whether more than one adjacent pair was tied, merged or not.
    #[must_use]
    pub fn has_multiple_ties(&self) -> bool {
        self.merged_pairs.len() + usize::from(self.uncovered_tie) > 1
    }

    /// Whether the pairwise rule left tied seats with different totals.
    ///
    /// True for overlapping merges (three-way ties) and for any uncovered tie.
    /// An overlapping merge does not preserve the sum of the four totals: it
    /// moves by half the difference between the first two original totals.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.merged_pairs.len() > 1 || self.uncovered_tie
    }
}

/// Applies the equal-placement averaging rule to a raw result block.
///
/// For each pair in [`TIE_CHECK_PAIRS`] whose `part_point_1` values are equal,
/// both `total_point` values become the mean of the two original totals.
/// Means are always taken from the totals as they were before this call, and
/// pairs are applied in order, so in a three-way tie position 1 ends up with
/// the `(1, 2)` mean.
///
/// ```
/// use mjrank_engine::{feed::LogResultEntry, resolve_ties};
///
/// let entry = |seat, part_point_1, total_point| LogResultEntry { seat, part_point_1, total_point };
/// let mut entries = [
///     entry(0, 1000, 35000.0),
///     entry(1, 1000, 15000.0),
///     entry(2, -500, -5000.0),
///     entry(3, -1500, -45000.0),
/// ];
///
/// let report = resolve_ties(&mut entries);
/// assert_eq!(report.merged_pairs(), &[(0, 1)]);
/// assert_eq!(entries[0].total_point, 25000.0);
/// assert_eq!(entries[1].total_point, 25000.0);
/// ```
pub fn resolve_ties(entries: &mut [LogResultEntry; 4]) -> TieReport {
    let original_totals: [f64; 4] = std::array::from_fn(|i| entries[i].total_point);
    let mut report = TieReport::default();

    for (a, b) in TIE_CHECK_PAIRS {
        if entries[a].part_point_1 == entries[b].part_point_1 {
            let shared = f64::midpoint(original_totals[a], original_totals[b]);
            entries[a].total_point = shared;
            entries[b].total_point = shared;
            report.merged_pairs.push((a, b));
        }
    }
    report.uncovered_tie = entries[2].part_point_1 == entries[3].part_point_1;

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(points: [(i64, f64); 4]) -> [LogResultEntry; 4] {
        let mut seat = 0;
        points.map(|(part_point_1, total_point)| {
            let entry = LogResultEntry {
                seat,
                part_point_1,
                total_point,
            };
            seat += 1;
            entry
        })
    }

    fn totals(entries: &[LogResultEntry; 4]) -> [f64; 4] {
        std::array::from_fn(|i| entries[i].total_point)
    }

    #[test]
    fn test_no_ties() {
        let mut e = entries([
            (32000, 52000.0),
            (28000, 8000.0),
            (22000, -18000.0),
            (18000, -42000.0),
        ]);
        let report = resolve_ties(&mut e);

        assert!(!report.has_ties());
        assert!(!report.is_partial());
        assert_eq!(totals(&e), [52000.0, 8000.0, -18000.0, -42000.0]);
    }

    #[test]
    fn test_first_pair_tie() {
        let mut e = entries([
            (1000, 35000.0),
            (1000, 15000.0),
            (-500, -5000.0),
            (-1500, -45000.0),
        ]);
        let report = resolve_ties(&mut e);

        assert_eq!(report.merged_pairs(), &[(0, 1)]);
        assert!(!report.has_multiple_ties());
        assert!(!report.is_partial());
        assert_eq!(totals(&e), [25000.0, 25000.0, -5000.0, -45000.0]);
    }

    #[test]
    fn test_single_merge_preserves_sum() {
        let cases = [
            [(1000, 35000.0), (1000, 15000.0), (-500, -5000.0), (-1500, -45000.0)],
            [(40000, 60000.0), (20000, 0.0), (20000, -20000.0), (20000, -40000.0)],
            [(30000, 50000.0), (25000, 5000.5), (25000, -14999.5), (20000, -40001.0)],
        ];
        for case in cases {
            let mut e = entries(case);
            let before = totals(&e).iter().sum::<f64>();
            let report = resolve_ties(&mut e);
            assert_eq!(report.merged_pairs().len(), 1);
            let after = totals(&e).iter().sum::<f64>();
            assert!((after - before).abs() < 1e-9);
        }
    }

    #[test]
    fn test_second_pair_tie() {
        let mut e = entries([
            (40000, 60000.0),
            (25000, 5000.0),
            (25000, -15000.0),
            (10000, -50000.0),
        ]);
        let report = resolve_ties(&mut e);

        assert_eq!(report.merged_pairs(), &[(1, 2)]);
        assert_eq!(totals(&e), [60000.0, -5000.0, -5000.0, -50000.0]);
    }

    #[test]
    fn test_three_way_tie_uses_original_totals() {
        let mut e = entries([
            (25000, 45000.0),
            (25000, 5000.0),
            (25000, -15000.0),
            (25000, -35000.0),
        ]);
        let report = resolve_ties(&mut e);

        assert_eq!(report.merged_pairs(), &[(0, 1), (1, 2)]);
        assert!(report.has_uncovered_tie());
        assert!(report.has_multiple_ties());
        assert!(report.is_partial());
        // (0, 1) mean from originals, then (1, 2) mean from originals
        assert_eq!(totals(&e), [25000.0, -5000.0, -5000.0, -35000.0]);
    }

    #[test]
    fn test_three_way_tie_shifts_sum() {
        let original = [45000.0, 5000.0, -15000.0, -35000.0];
        let mut e = entries(original.map(|total| (25000, total)));
        let before = totals(&e).iter().sum::<f64>();
        resolve_ties(&mut e);
        let after = totals(&e).iter().sum::<f64>();

        assert_eq!(before, 0.0);
        assert_eq!(after, -20000.0);
        assert_eq!(after - before, (original[1] - original[0]) / 2.0);
    }

    #[test]
    fn test_last_pair_tie_is_reported_not_merged() {
        let mut e = entries([
            (40000, 60000.0),
            (30000, 10000.0),
            (15000, -25000.0),
            (15000, -45000.0),
        ]);
        let report = resolve_ties(&mut e);

        assert!(report.merged_pairs().is_empty());
        assert!(report.has_uncovered_tie());
        assert!(report.is_partial());
        assert!(!report.has_multiple_ties());
        assert_eq!(totals(&e), [60000.0, 10000.0, -25000.0, -45000.0]);
    }
}
