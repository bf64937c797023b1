//! Game session layer
//!
//! `GameController` owns the world state and applies commands and turns;
//! `IdleScheduler` advances it on a timer; `persistence` saves snapshots.

pub mod controller;
pub mod history;
pub mod persistence;
pub mod scheduler;
pub mod state;

pub use controller::{GameController, GamePhase, GameView};
pub use history::{TurnHistory, TurnSummary};
pub use persistence::{JsonFileStore, MemoryStore, SnapshotStore, SAVE_KEY};
pub use scheduler::{lock_controller, shared, IdleScheduler, SharedController};
pub use state::WorldState;
