//! Best-time record persistence
//!
//! A single duration survives process restarts: the longest run ever
//! dodged. The store boundary is a trait so hosts decide where the
//! value lives (LocalStorage on web, memory in tests and the native
//! demo). Store failures are non-fatal; the in-memory value stays
//! authoritative for display.

use serde::{Deserialize, Serialize};

/// A persisted best-time record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct BestTime {
    /// Best elapsed run in milliseconds (0 when no run has finished)
    pub ms: f64,
}

/// Where the best-time record lives between sessions
pub trait RecordStore {
    /// Read the persisted best time, `None` when absent or unreadable
    fn read_best(&mut self) -> Option<f64>;
    /// Persist a new best time
    fn write_best(&mut self, ms: f64) -> Result<(), RecordError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The backing store rejected the write or is unreachable
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

/// In-process store, used by tests and the native demo run
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: Option<f64>,
}

impl RecordStore for MemoryStore {
    fn read_best(&mut self) -> Option<f64> {
        self.best
    }

    fn write_best(&mut self, ms: f64) -> Result<(), RecordError> {
        self.best = Some(ms);
        Ok(())
    }
}

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "asteroid_dodge_best_time";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl RecordStore for LocalStorageStore {
    fn read_best(&mut self) -> Option<f64> {
        let storage = Self::storage()?;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        match serde_json::from_str::<BestTime>(&json) {
            Ok(record) => {
                log::info!("Loaded best time: {} ms", record.ms);
                Some(record.ms)
            }
            Err(_) => None,
        }
    }

    fn write_best(&mut self, ms: f64) -> Result<(), RecordError> {
        let storage = Self::storage()
            .ok_or_else(|| RecordError::Unavailable("no LocalStorage".into()))?;
        let json = serde_json::to_string(&BestTime { ms })
            .map_err(|e| RecordError::Unavailable(e.to_string()))?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| RecordError::Unavailable("set_item failed".into()))?;
        log::info!("Best time saved: {} ms", ms);
        Ok(())
    }
}
