//! Hotel simulation model
//!
//! Pure turn computation: pricing and demand (`occupancy`), the random guest
//! pass (`guests`), costs and reputation (`ledger`), and event timers
//! (`events`), tied together by `turn::compute_turn`.

pub mod events;
pub mod guests;
pub mod ledger;
pub mod occupancy;
pub mod turn;

pub use events::{event_impact, roll_event, tick_events, ActiveEvent};
pub use guests::{simulate_guest_arrivals, GuestDecision, GuestType, RejectionReason};
pub use occupancy::{compute_target_occupancy, price_elasticity_points, real_price};
pub use turn::{compute_turn, TurnInput, TurnResult};
