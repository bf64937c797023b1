//! Fixed market data
//!
//! Property tiers, regions, seasonality, service levels, renovation packages
//! and the random event table. Everything here is static data with lookup
//! methods; no module keeps mutable state.

pub mod events;
pub mod regions;
pub mod renovation;
pub mod seasons;
pub mod segments;
pub mod services;

pub use events::EventKind;
pub use regions::Region;
pub use renovation::RenovationLevel;
pub use seasons::season_multiplier;
pub use segments::{purchase_price, Segment};
pub use services::{MarketingLevel, StaffingLevel};
