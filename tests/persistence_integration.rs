//! Integration tests for saving and resuming games
//!
//! Uses a real save directory (via tempfile) to check that:
//! - Every transition lands on disk and reloads identically
//! - Corrupt saves fall back to a fresh game
//! - Reset wipes the save file

use std::fs;

use tempfile::TempDir;

use hotel_tycoon::core::types::Ownership;
use hotel_tycoon::core::GameConfig;
use hotel_tycoon::game::{GameController, JsonFileStore, SnapshotStore, WorldState};
use hotel_tycoon::market::{EventKind, MarketingLevel, Region, RenovationLevel, Segment};
use hotel_tycoon::simulation::ActiveEvent;

fn config() -> GameConfig {
    GameConfig {
        seed: Some(11),
        event_chance: 0.0,
        ..GameConfig::default()
    }
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("saves"));
    assert!(store.load().unwrap().is_none());

    let state = WorldState {
        balance: -2_500.25,
        region: Region::C,
        segment: Segment::Midscale,
        price_slider: 1.25,
        ownership: Ownership::Owned,
        renovation_level: RenovationLevel::Medium,
        renovation_turns_remaining: 9,
        marketing: MarketingLevel::Aggressive,
        reputation: 81.5,
        active_events: vec![ActiveEvent::start(EventKind::Storm)],
        ..WorldState::default()
    };
    store.save(&state).unwrap();

    assert!(store.path().exists());
    assert_eq!(store.load().unwrap(), Some(state));
}

#[test]
fn test_save_file_is_keyed_json() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.save(&WorldState::default()).unwrap();

    assert_eq!(
        store.path().file_name().unwrap().to_str(),
        Some("hotel_game_state.json")
    );
    let raw = fs::read_to_string(store.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["balance"], 1_000_000.0);
    assert_eq!(json["currentTurn"], 1);
    assert_eq!(json["segmentIndex"], 0);
    assert_eq!(json["staffing"], "Balanced");
}

#[test]
fn test_game_resumes_where_it_stopped() {
    let dir = TempDir::new().unwrap();

    let saved = {
        let mut game = GameController::load(config(), JsonFileStore::new(dir.path()));
        game.set_marketing(MarketingLevel::Basic);
        for _ in 0..12 {
            game.end_turn().unwrap();
        }
        game.state().clone()
    };

    let game = GameController::load(config(), JsonFileStore::new(dir.path()));
    let resumed = game.state();
    assert_eq!(resumed.current_turn(), 13);
    assert_eq!(resumed.current_month(), saved.current_month());
    assert_eq!(resumed.marketing, MarketingLevel::Basic);
    assert!((resumed.balance - saved.balance).abs() < 1e-6);
    assert!((resumed.reputation - saved.reputation).abs() < 1e-9);
    // Results and history are not part of the save
    assert!(game.last_result().is_none());
    assert!(game.history().is_empty());
}

#[test]
fn test_corrupt_save_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    fs::write(store.path(), "{\"balance\": \"lots\"").unwrap();

    let game = GameController::load(config(), store);
    assert_eq!(game.state(), &WorldState::default());
}

#[test]
fn test_mismatched_save_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    let mut json = serde_json::to_value(WorldState::default()).unwrap();
    json["reputation"] = serde_json::json!(250.0);
    fs::write(store.path(), json.to_string()).unwrap();

    let game = GameController::load(config(), store);
    assert_eq!(game.state().reputation, 50.0);
}

#[test]
fn test_reset_removes_save() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    let path = store.path();

    let mut game = GameController::load(config(), store);
    game.buy_hotel().unwrap();
    assert!(path.exists());

    game.reset_game();
    assert!(!path.exists());
    assert_eq!(game.state(), &WorldState::default());

    let fresh = GameController::load(config(), JsonFileStore::new(dir.path()));
    assert_eq!(fresh.state().ownership, Ownership::Rented);
}

#[test]
fn test_no_temp_file_left_behind() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.save(&WorldState::default()).unwrap();
    store.save(&WorldState::default()).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names.len(), 1);
}
