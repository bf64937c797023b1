//! Marketing and staffing service levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::types::Money;

/// Advertising spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketingLevel {
    #[default]
    None,
    Basic,
    Standard,
    Aggressive,
}

impl MarketingLevel {
    pub const ALL: [MarketingLevel; 4] = [Self::None, Self::Basic, Self::Standard, Self::Aggressive];

    /// Flat cost charged every turn
    pub fn cost_per_turn(&self) -> Money {
        match self {
            Self::None => 0.0,
            Self::Basic => 150.0,
            Self::Standard => 400.0,
            Self::Aggressive => 900.0,
        }
    }

    /// Fractional boost to demand
    pub fn demand_bonus(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Basic => 0.05,
            Self::Standard => 0.10,
            Self::Aggressive => 0.18,
        }
    }
}

impl fmt::Display for MarketingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for MarketingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "aggressive" => Ok(Self::Aggressive),
            other => Err(format!("Unknown marketing level '{}'", other)),
        }
    }
}

/// Staff-to-room ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StaffingLevel {
    Minimal,
    #[default]
    Balanced,
    Premium,
}

impl StaffingLevel {
    pub const ALL: [StaffingLevel; 3] = [Self::Minimal, Self::Balanced, Self::Premium];

    /// Monthly wage bill per room
    pub fn cost_per_room(&self) -> Money {
        match self {
            Self::Minimal => 600.0,
            Self::Balanced => 900.0,
            Self::Premium => 1_400.0,
        }
    }

    /// Fractional demand impact from service quality
    pub fn demand_impact(&self) -> f64 {
        match self {
            Self::Minimal => -0.05,
            Self::Balanced => 0.0,
            Self::Premium => 0.05,
        }
    }

    /// Reputation points gained or lost every operating turn
    pub fn reputation_impact(&self) -> f64 {
        match self {
            Self::Minimal => -0.2,
            Self::Balanced => 0.0,
            Self::Premium => 0.2,
        }
    }
}

impl fmt::Display for StaffingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for StaffingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "balanced" => Ok(Self::Balanced),
            "premium" => Ok(Self::Premium),
            other => Err(format!("Unknown staffing level '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_neutral() {
        assert_eq!(MarketingLevel::default().demand_bonus(), 0.0);
        assert_eq!(MarketingLevel::default().cost_per_turn(), 0.0);
        assert_eq!(StaffingLevel::default().demand_impact(), 0.0);
        assert_eq!(StaffingLevel::default().reputation_impact(), 0.0);
    }

    #[test]
    fn test_more_marketing_costs_more() {
        for pair in MarketingLevel::ALL.windows(2) {
            assert!(pair[1].cost_per_turn() > pair[0].cost_per_turn());
            assert!(pair[1].demand_bonus() > pair[0].demand_bonus());
        }
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("Aggressive".parse::<MarketingLevel>(), Ok(MarketingLevel::Aggressive));
        assert_eq!("premium".parse::<StaffingLevel>(), Ok(StaffingLevel::Premium));
        assert!("lavish".parse::<StaffingLevel>().is_err());
    }
}
