//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Currency amount. Balances may go negative.
pub type Money = f64;

/// Reputation score bounds
pub const REPUTATION_MIN: f64 = 0.0;
pub const REPUTATION_MAX: f64 = 100.0;

/// Clamp a reputation value into its legal range
pub fn clamp_reputation(value: f64) -> f64 {
    value.clamp(REPUTATION_MIN, REPUTATION_MAX)
}

/// Whether the property is leased or owned outright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ownership {
    #[default]
    Rented,
    Owned,
}

impl Ownership {
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_reputation() {
        assert_eq!(clamp_reputation(-3.0), 0.0);
        assert_eq!(clamp_reputation(104.2), 100.0);
        assert_eq!(clamp_reputation(55.5), 55.5);
    }

    #[test]
    fn test_default_ownership_is_rented() {
        assert_eq!(Ownership::default(), Ownership::Rented);
        assert!(!Ownership::Rented.is_owned());
        assert!(Ownership::Owned.is_owned());
    }
}
