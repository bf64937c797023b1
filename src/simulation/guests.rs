//! Stochastic guest arrivals
//!
//! A narrative layer over the target occupancy: candidate guests turn up and
//! each books with probability `target / 100` until the hotel is full. The
//! accepted count drives revenue; the first few decisions are kept so the
//! front end can tell the story of the night.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Arrivals generated per unit of expected occupancy
pub const ARRIVAL_OVERSHOOT: f64 = 1.2;

/// Default number of decisions kept per turn
pub const DEFAULT_DECISION_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestType {
    Business,
    Tourist,
    Budget,
}

impl GuestType {
    pub const ALL: [GuestType; 3] = [Self::Business, Self::Tourist, Self::Budget];
}

/// Why a guest walked away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    Price,
    Reputation,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDecision {
    pub guest_type: GuestType,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}

/// What the hotel looked like to a guest who said no
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectionContext {
    pub price_slider: f64,
    pub reputation: f64,
}

impl RejectionContext {
    /// Pick the reason a guest of this type most plausibly declined
    pub fn reason_for(&self, guest_type: GuestType) -> RejectionReason {
        match guest_type {
            GuestType::Budget if self.price_slider > 1.0 => RejectionReason::Price,
            GuestType::Business if self.reputation < 50.0 => RejectionReason::Reputation,
            GuestType::Tourist if self.price_slider > 1.2 => RejectionReason::Price,
            GuestType::Tourist if self.reputation < 40.0 => RejectionReason::Reputation,
            _ => RejectionReason::Other,
        }
    }
}

/// Outcome of one night's arrivals
#[derive(Debug, Clone, PartialEq)]
pub struct GuestArrivals {
    pub candidates: u32,
    pub occupied_rooms: u32,
    pub decisions: Vec<GuestDecision>,
}

/// Number of candidate guests for a target occupancy
pub fn candidate_count(target_occupancy: f64, room_count: u32) -> u32 {
    let expected = room_count as f64 * target_occupancy / 100.0 * ARRIVAL_OVERSHOOT;
    expected.round().max(0.0) as u32
}

/// Run the arrival pass against an explicit random source
///
/// Never books more than `room_count` rooms.
pub fn simulate_guest_arrivals<R: Rng + ?Sized>(
    target_occupancy: f64,
    room_count: u32,
    context: RejectionContext,
    decision_limit: usize,
    rng: &mut R,
) -> GuestArrivals {
    let candidates = candidate_count(target_occupancy, room_count);
    let accept_chance = (target_occupancy / 100.0).clamp(0.0, 1.0);

    let mut occupied_rooms = 0;
    let mut decisions = Vec::with_capacity(decision_limit.min(candidates as usize));

    for _ in 0..candidates {
        if occupied_rooms >= room_count {
            break;
        }

        let guest_type = GuestType::ALL[rng.gen_range(0..GuestType::ALL.len())];
        let accepted = rng.gen::<f64>() < accept_chance;
        if accepted {
            occupied_rooms += 1;
        }

        if decisions.len() < decision_limit {
            decisions.push(GuestDecision {
                guest_type,
                accepted,
                reason: (!accepted).then(|| context.reason_for(guest_type)),
            });
        }
    }

    GuestArrivals {
        candidates,
        occupied_rooms,
        decisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CALM: RejectionContext = RejectionContext {
        price_slider: 1.0,
        reputation: 50.0,
    };

    #[test]
    fn test_candidate_count_overshoots_target() {
        // 40 rooms at 70% -> 28 expected guests -> 33.6 candidates
        assert_eq!(candidate_count(70.0, 40), 34);
        assert_eq!(candidate_count(5.0, 40), 2);
    }

    #[test]
    fn test_never_overbooks() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..200 {
            let arrivals = simulate_guest_arrivals(98.0, 40, CALM, 15, &mut rng);
            assert!(arrivals.occupied_rooms <= 40);
        }
    }

    #[test]
    fn test_decision_log_is_capped() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let arrivals = simulate_guest_arrivals(90.0, 150, CALM, 15, &mut rng);
        assert_eq!(arrivals.decisions.len(), 15);
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            simulate_guest_arrivals(65.0, 80, CALM, 15, &mut a),
            simulate_guest_arrivals(65.0, 80, CALM, 15, &mut b),
        );
    }

    #[test]
    fn test_only_rejections_carry_reasons() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let arrivals = simulate_guest_arrivals(50.0, 60, CALM, 15, &mut rng);
        for decision in &arrivals.decisions {
            assert_eq!(decision.accepted, decision.reason.is_none());
        }
    }

    #[test]
    fn test_average_fill_tracks_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let nights = 500;
        let total: u32 = (0..nights)
            .map(|_| simulate_guest_arrivals(50.0, 100, CALM, 0, &mut rng).occupied_rooms)
            .sum();
        let mean = total as f64 / nights as f64;
        // 60 candidates at 50% -> about 30 rooms a night
        assert!((27.0..33.0).contains(&mean), "mean occupancy {}", mean);
    }

    #[test]
    fn test_rejection_reasons() {
        let pricey = RejectionContext {
            price_slider: 1.3,
            reputation: 80.0,
        };
        assert_eq!(pricey.reason_for(GuestType::Budget), RejectionReason::Price);
        assert_eq!(pricey.reason_for(GuestType::Tourist), RejectionReason::Price);
        assert_eq!(pricey.reason_for(GuestType::Business), RejectionReason::Other);

        let shabby = RejectionContext {
            price_slider: 1.0,
            reputation: 30.0,
        };
        assert_eq!(shabby.reason_for(GuestType::Business), RejectionReason::Reputation);
        assert_eq!(shabby.reason_for(GuestType::Tourist), RejectionReason::Reputation);
        assert_eq!(shabby.reason_for(GuestType::Budget), RejectionReason::Other);
    }
}
