//! Renovation packages
//!
//! A renovation closes the hotel for a number of turns. Once finished, the
//! chosen level keeps lifting room rates and demand, at the price of slightly
//! higher upkeep for owned properties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenovationLevel {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

impl RenovationLevel {
    pub const ALL: [RenovationLevel; 4] = [Self::None, Self::Light, Self::Medium, Self::Heavy];

    /// Cost as a fraction of the property's purchase price
    pub fn cost_percent(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 0.05,
            Self::Medium => 0.12,
            Self::Heavy => 0.25,
        }
    }

    /// Turns the hotel stays closed
    pub fn turns_to_complete(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::Light => 7,
            Self::Medium => 15,
            Self::Heavy => 30,
        }
    }

    /// Fractional room-rate bonus after completion
    pub fn rate_bonus(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 0.05,
            Self::Medium => 0.12,
            Self::Heavy => 0.25,
        }
    }

    /// Fractional demand bonus after completion
    pub fn demand_bonus(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 0.03,
            Self::Medium => 0.07,
            Self::Heavy => 0.12,
        }
    }

    /// Extra upkeep for owned properties, as a fraction
    pub fn maintenance_bonus(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 0.02,
            Self::Medium => 0.05,
            Self::Heavy => 0.10,
        }
    }
}

impl fmt::Display for RenovationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for RenovationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            other => Err(format!("Unknown renovation level '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_no_effect() {
        let none = RenovationLevel::None;
        assert_eq!(none.turns_to_complete(), 0);
        assert_eq!(none.rate_bonus(), 0.0);
        assert_eq!(none.demand_bonus(), 0.0);
        assert_eq!(none.maintenance_bonus(), 0.0);
    }

    #[test]
    fn test_heavier_work_takes_longer() {
        for pair in RenovationLevel::ALL.windows(2) {
            assert!(pair[1].turns_to_complete() > pair[0].turns_to_complete());
            assert!(pair[1].cost_percent() > pair[0].cost_percent());
        }
    }
}
