//! Random market events
//!
//! Events are time-limited demand shocks. Each kind carries its demand impact
//! (a fraction added to the demand multiplier) and how many turns it lasts.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Conference,
    MusicFestival,
    SportsFinal,
    Storm,
    CompetitorOpening,
    RoadWorks,
}

impl EventKind {
    /// The event table events are drawn from
    pub const ALL: [EventKind; 6] = [
        Self::Conference,
        Self::MusicFestival,
        Self::SportsFinal,
        Self::Storm,
        Self::CompetitorOpening,
        Self::RoadWorks,
    ];

    pub fn demand_impact(&self) -> f64 {
        match self {
            Self::Conference => 0.15,
            Self::MusicFestival => 0.25,
            Self::SportsFinal => 0.20,
            Self::Storm => -0.20,
            Self::CompetitorOpening => -0.10,
            Self::RoadWorks => -0.08,
        }
    }

    pub fn duration(&self) -> u32 {
        match self {
            Self::Conference => 5,
            Self::MusicFestival => 3,
            Self::SportsFinal => 2,
            Self::Storm => 2,
            Self::CompetitorOpening => 10,
            Self::RoadWorks => 6,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Conference => "A trade conference is in town",
            Self::MusicFestival => "A music festival fills the streets",
            Self::SportsFinal => "The cup final brings in fans",
            Self::Storm => "A storm keeps travellers away",
            Self::CompetitorOpening => "A competitor opened next door",
            Self::RoadWorks => "Road works block the main access",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
