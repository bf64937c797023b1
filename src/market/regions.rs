//! Market regions
//!
//! Each region scales prices, demand, rent and purchase cost. Region A is the
//! baseline market with every multiplier at 1.0.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the hotel operates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    /// Provincial town, the baseline market
    #[default]
    A,
    /// Capital city: pricier, busier, expensive to lease and buy
    B,
    /// Seaside village: cheap property, softer demand
    C,
}

impl Region {
    pub const ALL: [Region; 3] = [Self::A, Self::B, Self::C];

    /// Room rate multiplier
    pub fn price_multiplier(&self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 1.35,
            Self::C => 0.85,
        }
    }

    /// Occupancy multiplier
    pub fn demand_multiplier(&self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 1.1,
            Self::C => 0.9,
        }
    }

    /// Lease multiplier
    pub fn rent_multiplier(&self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 1.5,
            Self::C => 0.7,
        }
    }

    /// Purchase price multiplier
    pub fn purchase_multiplier(&self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 1.6,
            Self::C => 0.65,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::A => "provincial town",
            Self::B => "capital city",
            Self::C => "seaside village",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            other => Err(format!("Unknown region '{}' (expected a, b or c)", other)),
        }
    }
}
