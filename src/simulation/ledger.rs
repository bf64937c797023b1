//! Turn economics: revenue, running costs and reputation drift

use crate::core::types::{Money, Ownership};
use crate::market::{MarketingLevel, Region, RenovationLevel, Segment, StaffingLevel};
use crate::simulation::turn::TurnInput;

/// Share of the lease an owner still pays as upkeep
pub const OWNER_UPKEEP_SHARE: f64 = 0.15;

/// Days a monthly figure is spread across
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Occupancy above which guests talk the hotel up, in percent
pub const BUSY_OCCUPANCY: f64 = 85.0;
/// Occupancy below which the hotel looks deserted, in percent
pub const QUIET_OCCUPANCY: f64 = 30.0;
/// Reputation swing from a busy or deserted night
pub const OCCUPANCY_REPUTATION_SWING: f64 = 0.3;

pub fn revenue(occupied_rooms: u32, real_price: Money) -> Money {
    occupied_rooms as f64 * real_price
}

/// Monthly lease for the whole property spread over one turn
pub fn daily_rent(segment: Segment, region: Region) -> Money {
    segment.room_count() as f64 * segment.rent_per_room() * region.rent_multiplier()
        / DAYS_PER_MONTH
}

/// Property cost for one turn: the lease, or owner upkeep
pub fn property_cost(
    segment: Segment,
    region: Region,
    ownership: Ownership,
    renovation: RenovationLevel,
) -> Money {
    let rent = daily_rent(segment, region);
    match ownership {
        Ownership::Rented => rent,
        Ownership::Owned => rent * OWNER_UPKEEP_SHARE * (1.0 + renovation.maintenance_bonus()),
    }
}

/// Wage bill for one turn
pub fn staffing_cost(segment: Segment, staffing: StaffingLevel) -> Money {
    segment.room_count() as f64 * staffing.cost_per_room() / DAYS_PER_MONTH
}

pub fn marketing_cost(marketing: MarketingLevel) -> Money {
    marketing.cost_per_turn()
}

/// Everything the hotel spends in one operating turn
pub fn expense(input: &TurnInput<'_>) -> Money {
    property_cost(
        input.segment,
        input.region,
        input.ownership,
        input.renovation_level,
    ) + marketing_cost(input.marketing)
        + staffing_cost(input.segment, input.staffing)
}

/// Reputation points earned this turn
pub fn reputation_delta(staffing: StaffingLevel, occupancy_percent: f64) -> f64 {
    let buzz = if occupancy_percent > BUSY_OCCUPANCY {
        OCCUPANCY_REPUTATION_SWING
    } else if occupancy_percent < QUIET_OCCUPANCY {
        -OCCUPANCY_REPUTATION_SWING
    } else {
        0.0
    };
    staffing.reputation_impact() + buzz
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_rent_for_hostel() {
        // 40 rooms * 300 / 30
        assert_eq!(daily_rent(Segment::Hostel, Region::A), 400.0);
    }

    #[test]
    fn test_owning_is_cheaper_than_renting() {
        let rented = property_cost(
            Segment::Midscale,
            Region::B,
            Ownership::Rented,
            RenovationLevel::None,
        );
        let owned = property_cost(
            Segment::Midscale,
            Region::B,
            Ownership::Owned,
            RenovationLevel::None,
        );
        assert!((owned - rented * 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_renovation_raises_owner_upkeep() {
        let plain = property_cost(
            Segment::Hostel,
            Region::A,
            Ownership::Owned,
            RenovationLevel::None,
        );
        let renovated = property_cost(
            Segment::Hostel,
            Region::A,
            Ownership::Owned,
            RenovationLevel::Heavy,
        );
        assert!((renovated - plain * 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_renovation_does_not_change_rent() {
        let plain = property_cost(
            Segment::Hostel,
            Region::A,
            Ownership::Rented,
            RenovationLevel::None,
        );
        let renovated = property_cost(
            Segment::Hostel,
            Region::A,
            Ownership::Rented,
            RenovationLevel::Heavy,
        );
        assert_eq!(plain, renovated);
    }

    #[test]
    fn test_staffing_cost() {
        // 40 rooms * 900 / 30
        assert_eq!(staffing_cost(Segment::Hostel, StaffingLevel::Balanced), 1200.0);
    }

    #[test]
    fn test_reputation_delta_bands() {
        assert_eq!(reputation_delta(StaffingLevel::Balanced, 90.0), 0.3);
        assert_eq!(reputation_delta(StaffingLevel::Balanced, 20.0), -0.3);
        assert_eq!(reputation_delta(StaffingLevel::Balanced, 60.0), 0.0);
        assert_eq!(reputation_delta(StaffingLevel::Balanced, 85.0), 0.0);
        assert!((reputation_delta(StaffingLevel::Premium, 90.0) - 0.5).abs() < 1e-12);
        assert!((reputation_delta(StaffingLevel::Minimal, 20.0) + 0.5).abs() < 1e-12);
    }
}
