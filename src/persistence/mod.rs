//! High score persistence
//!
//! Features:
//! - Single namespaced storage key holding the whole record as JSON
//! - Corruption recovery: unreadable or malformed data loads as the default record
//! - Whole-record overwrite on every save

use thiserror::Error;

use crate::highscores::{GameMode, ScoreRecord};
use crate::platform::KeyValueStore;

/// Storage and serialization failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("persistent storage is not available")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("stored score record is malformed: {0}")]
    Parse(serde_json::Error),
    #[error("score record could not be serialized: {0}")]
    Serialize(serde_json::Error),
}

/// Reads and writes the score record under a fixed key
pub struct ScoreStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored record, falling back to the default on any failure
    pub fn load(&self) -> ScoreRecord {
        match self.try_load() {
            Ok(Some(record)) => {
                log::info!("Loaded high scores ({} modes recorded)", record.recorded());
                for mode in GameMode::ALL {
                    log::debug!("  {}: {:?}", mode.key(), record.get(mode));
                }
                record
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                ScoreRecord::default()
            }
            Err(e) => {
                log::error!("Failed to load high scores, using defaults: {}", e);
                ScoreRecord::default()
            }
        }
    }

    /// Load the stored record, `None` if nothing is stored
    pub fn try_load(&self) -> Result<Option<ScoreRecord>, StoreError> {
        let Some(json) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(StoreError::Parse)
    }

    /// Overwrite the stored record
    pub fn save(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record).map_err(StoreError::Serialize)?;
        self.storage.set_item(&self.key, &json)?;
        log::info!("High scores saved ({} modes recorded)", record.recorded());
        Ok(())
    }
}
