//! Deterministic pricing and demand
//!
//! Everything in here is a pure function of the turn input. The random guest
//! pass in `guests` is reconciled to the target computed here.

use crate::simulation::events::event_impact;
use crate::simulation::turn::TurnInput;

/// Lowest occupancy the model will ever target, in percent
pub const MIN_TARGET_OCCUPANCY: f64 = 5.0;
/// Highest occupancy the model will ever target, in percent
pub const MAX_TARGET_OCCUPANCY: f64 = 98.0;

/// Occupancy points lost per 10% of overpricing
pub const OVERPRICE_POINTS_PER_10PCT: f64 = 6.0;
/// Occupancy points gained per 10% of underpricing
pub const UNDERPRICE_POINTS_PER_10PCT: f64 = 4.0;

/// Nightly price actually charged this turn
pub fn real_price(input: &TurnInput<'_>) -> f64 {
    input.segment.base_rate()
        * input.region.price_multiplier()
        * input.season_multiplier()
        * input.price_slider
        * (1.0 + input.renovation_level.rate_bonus())
}

/// Occupancy-point shift caused by moving the price slider off 1.0
///
/// Guests punish overpricing harder than they reward discounts: +10% costs
/// 6 points, -10% gains only 4.
pub fn price_elasticity_points(price_slider: f64) -> f64 {
    let deviation_pct = (price_slider - 1.0) * 100.0;
    if deviation_pct > 0.0 {
        -(deviation_pct / 10.0) * OVERPRICE_POINTS_PER_10PCT
    } else {
        -(deviation_pct / 10.0) * UNDERPRICE_POINTS_PER_10PCT
    }
}

/// Combined fractional demand modifier from events, marketing, reputation,
/// staffing and renovation
pub fn demand_modifier(input: &TurnInput<'_>) -> f64 {
    event_impact(input.active_events)
        + input.marketing.demand_bonus()
        + (input.reputation - 50.0) / 500.0
        + input.staffing.demand_impact()
        + input.renovation_level.demand_bonus()
}

/// Occupancy before clamping, in percent
pub fn unclamped_target_occupancy(input: &TurnInput<'_>) -> f64 {
    let base = input.segment.base_occupancy()
        * input.region.demand_multiplier()
        * input.season_multiplier();
    (base + price_elasticity_points(input.price_slider)) * (1.0 + demand_modifier(input))
}

/// Occupancy the hotel should reach this turn, in percent
pub fn compute_target_occupancy(input: &TurnInput<'_>) -> f64 {
    unclamped_target_occupancy(input).clamp(MIN_TARGET_OCCUPANCY, MAX_TARGET_OCCUPANCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::{EventKind, MarketingLevel, Region, Segment, StaffingLevel};
    use crate::simulation::events::ActiveEvent;

    fn neutral() -> TurnInput<'static> {
        TurnInput {
            month: 4,
            ..TurnInput::default()
        }
    }

    #[test]
    fn test_elasticity_is_asymmetric() {
        assert!((price_elasticity_points(1.1) + 6.0).abs() < 1e-9);
        assert!((price_elasticity_points(0.9) - 4.0).abs() < 1e-9);
        assert_eq!(price_elasticity_points(1.0), 0.0);
        assert!((price_elasticity_points(1.5) + 30.0).abs() < 1e-9);
        assert!((price_elasticity_points(0.5) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_input_hits_base_occupancy() {
        let input = neutral();
        assert_eq!(compute_target_occupancy(&input), Segment::Hostel.base_occupancy());
    }

    #[test]
    fn test_real_price_neutral() {
        assert_eq!(real_price(&neutral()), Segment::Hostel.base_rate());
    }

    #[test]
    fn test_real_price_scales_with_region_and_slider() {
        let input = TurnInput {
            region: Region::B,
            price_slider: 1.2,
            ..neutral()
        };
        let expected = Segment::Hostel.base_rate() * 1.35 * 1.2;
        assert!((real_price(&input) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_good_event_raises_demand() {
        let events = [ActiveEvent::start(EventKind::MusicFestival)];
        let input = TurnInput {
            active_events: &events,
            ..neutral()
        };
        assert!(compute_target_occupancy(&input) > compute_target_occupancy(&neutral()));
    }

    #[test]
    fn test_target_is_clamped() {
        let storm = [ActiveEvent::start(EventKind::Storm)];
        let worst = TurnInput {
            segment: Segment::Luxury,
            region: Region::C,
            month: 1,
            price_slider: 1.5,
            reputation: 0.0,
            staffing: StaffingLevel::Minimal,
            active_events: &storm,
            ..neutral()
        };
        assert!(compute_target_occupancy(&worst) >= MIN_TARGET_OCCUPANCY);

        // The clamp still holds for a slider outside the player range
        let overpriced = TurnInput {
            price_slider: 3.0,
            ..worst
        };
        assert!(unclamped_target_occupancy(&overpriced) < MIN_TARGET_OCCUPANCY);
        assert_eq!(compute_target_occupancy(&overpriced), MIN_TARGET_OCCUPANCY);

        let festival = [ActiveEvent::start(EventKind::MusicFestival)];
        let high = TurnInput {
            region: Region::B,
            month: 7,
            price_slider: 0.5,
            reputation: 100.0,
            marketing: MarketingLevel::Aggressive,
            staffing: StaffingLevel::Premium,
            active_events: &festival,
            ..neutral()
        };
        assert_eq!(compute_target_occupancy(&high), MAX_TARGET_OCCUPANCY);
    }
}
