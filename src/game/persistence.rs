//! Snapshot persistence
//!
//! The game is saved as one JSON document under a fixed key. File saves go
//! through a temp file and a rename so a crash mid-write never leaves a
//! truncated save behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::error::Result;
use crate::game::state::WorldState;

/// Key the snapshot is stored under
pub const SAVE_KEY: &str = "hotel_game_state";

/// Key-value storage for the world snapshot
pub trait SnapshotStore: Send {
    /// Read the saved game. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<WorldState>>;

    fn save(&self, state: &WorldState) -> Result<()>;

    /// Forget the saved game
    fn clear(&self) -> Result<()>;
}

/// Decode and sanity-check a saved snapshot
pub fn decode_snapshot(raw: &str) -> Result<WorldState> {
    let state: WorldState = serde_json::from_str(raw.trim_start_matches('\0'))?;
    state.validate()?;
    Ok(state)
}

pub fn encode_snapshot(state: &WorldState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Saves the game as `<dir>/hotel_game_state.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", SAVE_KEY))
    }

    fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<WorldState>> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        decode_snapshot(&raw).map(Some)
    }

    fn save(&self, state: &WorldState) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Self::write_atomic(&self.path(), &encode_snapshot(state)?)
    }

    fn clear(&self) -> Result<()> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-process store, handy for tests and throwaway sessions
///
/// Clones share the same slot, so a test can keep one handle and give the
/// other to a controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw (possibly corrupt) snapshot text
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    /// The snapshot text currently stored
    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<WorldState>> {
        self.raw().map(|raw| decode_snapshot(&raw)).transpose()
    }

    fn save(&self, state: &WorldState) -> Result<()> {
        let encoded = encode_snapshot(state)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
