/// Placement-based rates for one player.
///
/// All four values divide by the recorded total game count, not by the sum of
/// the rank counts. With no games every value is exactly `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRates {
    /// Fraction of games finished 1st.
    pub top_rate: f64,
    /// Fraction of games finished 1st or 2nd.
    pub rentai_rate: f64,
    /// Fraction of games not finished last.
    pub fourth_avoidance_rate: f64,
    /// Mean finishing position, `1.0..=4.0` for players with games.
    pub average_placement: f64,
}

impl PlacementRates {
    pub const ZERO: Self = Self {
        top_rate: 0.0,
        rentai_rate: 0.0,
        fourth_avoidance_rate: 0.0,
        average_placement: 0.0,
    };

    /// Computes rates from rank counts (index 0 = 1st place).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mjrank_stats::rates::PlacementRates;
    /// let rates = PlacementRates::new(&[3, 2, 1, 0], 6);
    /// assert!((rates.rentai_rate - 5.0 / 6.0).abs() < 1e-12);
    /// assert!((rates.average_placement - 10.0 / 6.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn new(rank_counts: &[u32; 4], total_game_count: u32) -> Self {
        if total_game_count == 0 {
            return Self::ZERO;
        }
        let total = f64::from(total_game_count);
        let [first, second, third, fourth] = rank_counts.map(f64::from);
        Self {
            top_rate: first / total,
            rentai_rate: (first + second) / total,
            fourth_avoidance_rate: (first + second + third) / total,
            average_placement: (first + 2.0 * second + 3.0 * third + 4.0 * fourth) / total,
        }
    }
}
