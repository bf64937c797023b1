//! The per-turn simulation model
//!
//! `compute_turn` turns a snapshot of the player's choices into a
//! `TurnResult`. It never mutates its input; the only randomness is the guest
//! pass, which draws from the generator the caller hands in.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::{Money, Ownership};
use crate::market::{season_multiplier, MarketingLevel, Region, RenovationLevel, Segment, StaffingLevel};
use crate::simulation::events::ActiveEvent;
use crate::simulation::guests::{
    simulate_guest_arrivals, GuestDecision, RejectionContext, DEFAULT_DECISION_LIMIT,
};
use crate::simulation::{ledger, occupancy};

/// Everything the model needs to know about the world for one turn
#[derive(Debug, Clone, Copy)]
pub struct TurnInput<'a> {
    pub region: Region,
    pub segment: Segment,
    pub month: u32,
    pub price_slider: f64,
    pub ownership: Ownership,
    pub renovation_level: RenovationLevel,
    pub renovation_turns_remaining: u32,
    pub marketing: MarketingLevel,
    pub staffing: StaffingLevel,
    pub active_events: &'a [ActiveEvent],
    pub reputation: f64,
    /// Cap on narrated guest decisions
    pub decision_limit: usize,
}

impl TurnInput<'_> {
    pub fn season_multiplier(&self) -> f64 {
        season_multiplier(self.month)
    }

    pub fn is_renovating(&self) -> bool {
        self.renovation_turns_remaining > 0
    }
}

impl Default for TurnInput<'_> {
    fn default() -> Self {
        Self {
            region: Region::default(),
            segment: Segment::Hostel,
            month: 1,
            price_slider: 1.0,
            ownership: Ownership::default(),
            renovation_level: RenovationLevel::default(),
            renovation_turns_remaining: 0,
            marketing: MarketingLevel::default(),
            staffing: StaffingLevel::default(),
            active_events: &[],
            reputation: 50.0,
            decision_limit: DEFAULT_DECISION_LIMIT,
        }
    }
}

/// Outcome of one simulated turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResult {
    pub real_price: Money,
    /// Continuous occupancy the model aimed for, in percent
    pub target_occupancy: f64,
    /// Rooms actually booked as a share of capacity, in percent
    pub occupancy_percent: f64,
    pub revenue: Money,
    pub expense: Money,
    pub occupied_rooms: u32,
    pub is_renovating: bool,
    pub reputation_change: f64,
    pub guest_decisions: Vec<GuestDecision>,
}

impl TurnResult {
    /// The closed-for-works result: no guests, no money moving
    pub fn renovating() -> Self {
        Self {
            real_price: 0.0,
            target_occupancy: 0.0,
            occupancy_percent: 0.0,
            revenue: 0.0,
            expense: 0.0,
            occupied_rooms: 0,
            is_renovating: true,
            reputation_change: 0.0,
            guest_decisions: Vec::new(),
        }
    }

    pub fn profit(&self) -> Money {
        self.revenue - self.expense
    }
}

/// Simulate one turn
pub fn compute_turn<R: Rng + ?Sized>(input: &TurnInput<'_>, rng: &mut R) -> TurnResult {
    if input.is_renovating() {
        return TurnResult::renovating();
    }

    let real_price = occupancy::real_price(input);
    let target_occupancy = occupancy::compute_target_occupancy(input);
    let room_count = input.segment.room_count();

    let arrivals = simulate_guest_arrivals(
        target_occupancy,
        room_count,
        RejectionContext {
            price_slider: input.price_slider,
            reputation: input.reputation,
        },
        input.decision_limit,
        rng,
    );

    let occupancy_percent = arrivals.occupied_rooms as f64 / room_count as f64 * 100.0;

    TurnResult {
        real_price,
        target_occupancy,
        occupancy_percent,
        revenue: ledger::revenue(arrivals.occupied_rooms, real_price),
        expense: ledger::expense(input),
        occupied_rooms: arrivals.occupied_rooms,
        is_renovating: false,
        reputation_change: ledger::reputation_delta(input.staffing, occupancy_percent),
        guest_decisions: arrivals.decisions,
    }
}
