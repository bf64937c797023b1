use thiserror::Error;

use crate::market::segments::Segment;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

pub type Result<T> = std::result::Result<T, HotelError>;

/// Why a player command was refused.
///
/// These are expected gameplay outcomes, not faults: a rejected command leaves
/// the world state exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandRejected {
    #[error("Not enough money: need {needed:.0}, have {available:.0}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("The hotel is already owned")]
    AlreadyOwned,

    #[error("No further property tier after {0}")]
    NoNextSegment(Segment),

    #[error("Reputation {current:.1} is below the {required:.0} needed to open a {segment}")]
    ReputationTooLow {
        segment: Segment,
        required: f64,
        current: f64,
    },

    #[error("A renovation is already in progress ({turns_left} turns left)")]
    RenovationInProgress { turns_left: u32 },

    #[error("Choose a renovation level other than None")]
    NoRenovationSelected,

    #[error("Idle mode is running; turn it off to advance manually")]
    IdleModeActive,
}

pub type CommandResult<T = ()> = std::result::Result<T, CommandRejected>;
