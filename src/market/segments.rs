//! Property tier ladder
//!
//! Tiers are ordered from hostel to luxury. A game stores the tier as an
//! index into this ladder and can only ever move up it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Money;
use crate::market::regions::Region;

/// A property tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    Hostel,
    Budget,
    Midscale,
    Upscale,
    Luxury,
}

impl Segment {
    /// Every tier, in ladder order
    pub const ALL: [Segment; 5] = [
        Self::Hostel,
        Self::Budget,
        Self::Midscale,
        Self::Upscale,
        Self::Luxury,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The next tier up the ladder, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Number of rooms the property has
    pub fn room_count(&self) -> u32 {
        match self {
            Self::Hostel => 40,
            Self::Budget => 60,
            Self::Midscale => 80,
            Self::Upscale => 100,
            Self::Luxury => 150,
        }
    }

    /// Nightly rate before region, season, slider and renovation adjustments
    pub fn base_rate(&self) -> Money {
        match self {
            Self::Hostel => 35.0,
            Self::Budget => 60.0,
            Self::Midscale => 110.0,
            Self::Upscale => 180.0,
            Self::Luxury => 320.0,
        }
    }

    /// Baseline occupancy, in percent
    pub fn base_occupancy(&self) -> f64 {
        match self {
            Self::Hostel => 70.0,
            Self::Budget => 68.0,
            Self::Midscale => 65.0,
            Self::Upscale => 62.0,
            Self::Luxury => 58.0,
        }
    }

    /// Monthly lease cost per room
    pub fn rent_per_room(&self) -> Money {
        match self {
            Self::Hostel => 300.0,
            Self::Budget => 450.0,
            Self::Midscale => 700.0,
            Self::Upscale => 1_100.0,
            Self::Luxury => 1_800.0,
        }
    }

    /// Purchase cost per room
    pub fn purchase_per_room(&self) -> Money {
        match self {
            Self::Hostel => 20_000.0,
            Self::Budget => 32_000.0,
            Self::Midscale => 55_000.0,
            Self::Upscale => 95_000.0,
            Self::Luxury => 170_000.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hostel => "hostel",
            Self::Budget => "budget hotel",
            Self::Midscale => "3-star hotel",
            Self::Upscale => "4-star hotel",
            Self::Luxury => "5-star resort",
        }
    }
}

/// Price to buy a property of this tier outright in a region
pub fn purchase_price(segment: Segment, region: Region) -> Money {
    segment.room_count() as f64 * segment.purchase_per_room() * region.purchase_multiplier()
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
