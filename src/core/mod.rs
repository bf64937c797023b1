pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::Calendar;
pub use config::GameConfig;
pub use error::{CommandRejected, CommandResult, HotelError, Result};
