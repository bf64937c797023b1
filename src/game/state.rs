//! World state - the single mutable game record
//!
//! Owned by `GameController`. Serializes to the persisted snapshot layout
//! (camelCase keys, tier stored as `segmentIndex`).

use serde::{Deserialize, Serialize};

use crate::core::calendar::Calendar;
use crate::core::error::{HotelError, Result};
use crate::core::types::{Money, Ownership, REPUTATION_MAX, REPUTATION_MIN};
use crate::market::{purchase_price, MarketingLevel, Region, RenovationLevel, Segment, StaffingLevel};
use crate::simulation::events::ActiveEvent;
use crate::simulation::turn::TurnInput;

/// Player-controlled price multiplier bounds
pub const PRICE_SLIDER_MIN: f64 = 0.5;
pub const PRICE_SLIDER_MAX: f64 = 1.5;

pub const DEFAULT_BALANCE: Money = 1_000_000.0;
pub const DEFAULT_REPUTATION: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldState {
    pub balance: Money,
    #[serde(flatten)]
    pub calendar: Calendar,
    pub region: Region,
    #[serde(rename = "segmentIndex", with = "segment_index")]
    pub segment: Segment,
    pub price_slider: f64,
    pub ownership: Ownership,
    pub renovation_level: RenovationLevel,
    pub renovation_turns_remaining: u32,
    pub marketing: MarketingLevel,
    pub staffing: StaffingLevel,
    pub reputation: f64,
    pub active_events: Vec<ActiveEvent>,
}

impl WorldState {
    /// A fresh game with the given starting cash
    pub fn new(starting_balance: Money) -> Self {
        Self {
            balance: starting_balance,
            calendar: Calendar::new(),
            region: Region::default(),
            segment: Segment::Hostel,
            price_slider: 1.0,
            ownership: Ownership::Rented,
            renovation_level: RenovationLevel::None,
            renovation_turns_remaining: 0,
            marketing: MarketingLevel::None,
            staffing: StaffingLevel::Balanced,
            reputation: DEFAULT_REPUTATION,
            active_events: Vec::new(),
        }
    }

    pub fn current_turn(&self) -> u32 {
        self.calendar.current_turn()
    }

    pub fn current_month(&self) -> u32 {
        self.calendar.current_month()
    }

    pub fn segment_index(&self) -> usize {
        self.segment.index()
    }

    pub fn room_count(&self) -> u32 {
        self.segment.room_count()
    }

    pub fn is_renovating(&self) -> bool {
        self.renovation_turns_remaining > 0
    }

    /// What buying the current property would cost
    pub fn purchase_price(&self) -> Money {
        purchase_price(self.segment, self.region)
    }

    /// What a renovation of `level` would cost
    pub fn renovation_cost(&self, level: RenovationLevel) -> Money {
        self.purchase_price() * level.cost_percent()
    }

    /// What moving to the next tier would cost, if there is one
    pub fn upgrade_cost(&self, cost_fraction: f64) -> Option<Money> {
        self.segment
            .next()
            .map(|next| purchase_price(next, self.region) * cost_fraction)
    }

    /// Model input for the coming turn
    pub fn turn_input(&self, decision_limit: usize) -> TurnInput<'_> {
        TurnInput {
            region: self.region,
            segment: self.segment,
            month: self.current_month(),
            price_slider: self.price_slider,
            ownership: self.ownership,
            renovation_level: self.renovation_level,
            renovation_turns_remaining: self.renovation_turns_remaining,
            marketing: self.marketing,
            staffing: self.staffing,
            active_events: &self.active_events,
            reputation: self.reputation,
            decision_limit,
        }
    }

    /// Check a loaded snapshot for values the game could never produce
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(HotelError::InvalidSnapshot(msg));

        if !self.balance.is_finite() {
            return invalid(format!("balance is not a number: {}", self.balance));
        }
        if !self.calendar.is_valid() {
            return invalid(format!(
                "impossible date: turn {}, month {}",
                self.current_turn(),
                self.current_month()
            ));
        }
        if !(PRICE_SLIDER_MIN..=PRICE_SLIDER_MAX).contains(&self.price_slider) {
            return invalid(format!("price slider {} out of range", self.price_slider));
        }
        if !(REPUTATION_MIN..=REPUTATION_MAX).contains(&self.reputation) {
            return invalid(format!("reputation {} out of range", self.reputation));
        }
        if self.renovation_turns_remaining > self.renovation_level.turns_to_complete() {
            return invalid(format!(
                "{} turns of {:?} renovation left, more than it takes",
                self.renovation_turns_remaining, self.renovation_level
            ));
        }
        if self.active_events.iter().any(|e| e.turns_remaining == 0) {
            return invalid("active event with no turns remaining".into());
        }

        Ok(())
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new(DEFAULT_BALANCE)
    }
}

/// Stores a `Segment` as its ladder index
mod segment_index {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::market::Segment;

    pub fn serialize<S: Serializer>(segment: &Segment, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(segment.index() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Segment, D::Error> {
        let index = u64::deserialize(deserializer)?;
        usize::try_from(index)
            .ok()
            .and_then(Segment::from_index)
            .ok_or_else(|| D::Error::custom(format!("unknown segment index {}", index)))
    }
}
