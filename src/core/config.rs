//! Game configuration with documented constants
//!
//! Every tunable the controller and scheduler rely on lives here. The
//! economic tables (tiers, regions, seasons) are fixed data in `market`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::calendar::TURNS_PER_MONTH;
use crate::core::error::{HotelError, Result};

/// Configuration for a game session
///
/// Loaded from TOML; any missing key falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === ECONOMY ===
    /// Cash a brand new game (or a reset) starts with
    pub starting_balance: f64,

    /// Minimum reputation to move into a gated property tier
    pub upgrade_reputation_floor: f64,

    /// Tier index above which upgrades are reputation-gated
    ///
    /// With the default of 2, moving into tier 3 (upscale) or tier 4 (luxury)
    /// needs `upgrade_reputation_floor`.
    pub gated_tier_threshold: usize,

    /// Fraction of the next tier's purchase price charged to upgrade
    pub upgrade_cost_fraction: f64,

    // === TIME ===
    /// Turns per in-game month
    pub turns_per_month: u32,

    /// Wall-clock period between idle-mode ticks, in milliseconds
    pub idle_tick_ms: u64,

    // === EVENTS ===
    /// Chance per turn that a new event starts while none is active
    pub event_chance: f64,

    // === NARRATION ===
    /// Maximum guest decisions kept per turn for display
    pub max_guest_decisions: usize,

    // === SESSION ===
    /// Directory holding the saved game
    pub save_dir: PathBuf,

    /// Fixed RNG seed for reproducible sessions (entropy when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_balance: 1_000_000.0,
            upgrade_reputation_floor: 70.0,
            gated_tier_threshold: 2,
            upgrade_cost_fraction: 0.20,

            turns_per_month: TURNS_PER_MONTH,
            idle_tick_ms: 3000,

            event_chance: 0.05,

            max_guest_decisions: 15,

            save_dir: PathBuf::from("saves"),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn idle_period(&self) -> Duration {
        Duration::from_millis(self.idle_tick_ms)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.event_chance) {
            return Err(HotelError::InvalidConfig(format!(
                "event_chance ({}) must be within [0, 1]",
                self.event_chance
            )));
        }

        if self.turns_per_month == 0 {
            return Err(HotelError::InvalidConfig(
                "turns_per_month must be positive".into(),
            ));
        }

        // A zero period would spin the scheduler
        if self.idle_tick_ms == 0 {
            return Err(HotelError::InvalidConfig(
                "idle_tick_ms must be positive".into(),
            ));
        }

        if !(0.0..=100.0).contains(&self.upgrade_reputation_floor) {
            return Err(HotelError::InvalidConfig(format!(
                "upgrade_reputation_floor ({}) must be within [0, 100]",
                self.upgrade_reputation_floor
            )));
        }

        if self.upgrade_cost_fraction < 0.0 {
            return Err(HotelError::InvalidConfig(
                "upgrade_cost_fraction must not be negative".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("idle_tick_ms = 500\nseed = 7\n").unwrap();
        assert_eq!(config.idle_tick_ms, 500);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.turns_per_month, 30);
        assert_eq!(config.starting_balance, 1_000_000.0);
    }

    #[test]
    fn test_rejects_out_of_range_event_chance() {
        let err = GameConfig::from_toml_str("event_chance = 1.5").unwrap_err();
        assert!(matches!(err, HotelError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_tick_period() {
        let config = GameConfig {
            idle_tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
