//! Active event bookkeeping
//!
//! The turn model reads the active set; the controller ticks it down after
//! the turn's economics are settled and may roll a replacement.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::market::events::EventKind;

/// An event currently affecting demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEvent {
    pub event_id: EventKind,
    pub turns_remaining: u32,
}

impl ActiveEvent {
    /// Start an event with its table duration
    pub fn start(kind: EventKind) -> Self {
        Self {
            event_id: kind,
            turns_remaining: kind.duration(),
        }
    }
}

/// Summed demand impact of every active event
pub fn event_impact(events: &[ActiveEvent]) -> f64 {
    events.iter().map(|e| e.event_id.demand_impact()).sum()
}

/// Count every event down by one turn and drop the finished ones
///
/// Returns the kinds that expired this turn.
pub fn tick_events(events: &mut Vec<ActiveEvent>) -> Vec<EventKind> {
    let mut expired = Vec::new();
    events.retain_mut(|event| {
        event.turns_remaining = event.turns_remaining.saturating_sub(1);
        if event.turns_remaining == 0 {
            expired.push(event.event_id);
            false
        } else {
            true
        }
    });
    expired
}

/// Maybe start a new event, picked uniformly from the event table
pub fn roll_event<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> Option<ActiveEvent> {
    if chance <= 0.0 || rng.gen::<f64>() >= chance {
        return None;
    }
    let kind = EventKind::ALL[rng.gen_range(0..EventKind::ALL.len())];
    Some(ActiveEvent::start(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_event_impact_sums() {
        let events = vec![
            ActiveEvent::start(EventKind::Conference),
            ActiveEvent::start(EventKind::Storm),
        ];
        let expected = EventKind::Conference.demand_impact() + EventKind::Storm.demand_impact();
        assert!((event_impact(&events) - expected).abs() < 1e-12);
        assert_eq!(event_impact(&[]), 0.0);
    }

    #[test]
    fn test_tick_removes_event_when_it_reaches_zero() {
        let mut events = vec![ActiveEvent {
            event_id: EventKind::Storm,
            turns_remaining: 2,
        }];

        assert!(tick_events(&mut events).is_empty());
        assert_eq!(events[0].turns_remaining, 1);

        let expired = tick_events(&mut events);
        assert_eq!(expired, vec![EventKind::Storm]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_roll_never_fires_at_zero_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(roll_event(&mut rng, 0.0).is_none());
        }
    }

    #[test]
    fn test_roll_always_fires_at_full_chance() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let event = roll_event(&mut rng, 1.0).unwrap();
        assert_eq!(event.turns_remaining, event.event_id.duration());
    }

    #[test]
    fn test_roll_rate_is_roughly_five_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let fired = (0..20_000)
            .filter(|_| roll_event(&mut rng, 0.05).is_some())
            .count();
        // 1000 expected; allow a wide band
        assert!((800..1200).contains(&fired), "fired {} times", fired);
    }
}
