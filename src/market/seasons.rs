//! Demand seasonality by calendar month

/// One demand factor per month, January first
pub const SEASON_MULTIPLIERS: [f64; 12] = [
    0.80, // Jan
    0.85, // Feb
    0.95, // Mar
    1.00, // Apr
    1.05, // May
    1.15, // Jun
    1.25, // Jul
    1.25, // Aug
    1.10, // Sep
    1.00, // Oct
    0.90, // Nov
    0.95, // Dec
];

/// Seasonal demand factor for a 1-based month
///
/// Months outside 1..=12 are folded back into range.
pub fn season_multiplier(month: u32) -> f64 {
    let idx = (month.max(1) - 1) % 12;
    SEASON_MULTIPLIERS[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_in_summer() {
        assert!(season_multiplier(7) > season_multiplier(1));
        assert_eq!(season_multiplier(7), 1.25);
    }

    #[test]
    fn test_april_and_october_are_neutral() {
        assert_eq!(season_multiplier(4), 1.0);
        assert_eq!(season_multiplier(10), 1.0);
    }

    #[test]
    fn test_out_of_range_month_folds() {
        assert_eq!(season_multiplier(13), season_multiplier(1));
        assert_eq!(season_multiplier(0), season_multiplier(1));
    }
}
