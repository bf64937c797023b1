//! Hotel Tycoon - turn-based hotel management simulation

pub mod core;
pub mod game;
pub mod market;
pub mod simulation;
