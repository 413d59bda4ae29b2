// crates/lumen-store/src/memory.rs
//
// In-memory repositories with the same validation behavior as the RocksDB
// backend. Used by tests and light tooling that has no database on disk.

use parking_lot::RwLock;

use lumen_core::error::LumenError;
use lumen_core::params::RewardParams;
use lumen_core::state::ReleaseState;
use lumen_core::traits::{ParamsRepository, StateRepository};

/// In-memory store holding at most one params record and one state record.
#[derive(Debug, Default)]
pub struct MemoryStore {
    params: RwLock<Option<RewardParams>>,
    state: RwLock<Option<ReleaseState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParamsRepository for MemoryStore {
    fn get(&self) -> Result<RewardParams, LumenError> {
        self.params
            .read()
            .clone()
            .ok_or_else(|| LumenError::NotFound("reward params not initialized".to_string()))
    }

    fn set(&self, params: &RewardParams) -> Result<(), LumenError> {
        params.validate()?;
        *self.params.write() = Some(params.clone());
        Ok(())
    }
}

impl StateRepository for MemoryStore {
    fn get(&self) -> Result<ReleaseState, LumenError> {
        self.state
            .read()
            .ok_or_else(|| LumenError::NotFound("release state not initialized".to_string()))
    }

    fn set(&self, state: &ReleaseState) -> Result<(), LumenError> {
        *self.state.write() = Some(*state);
        Ok(())
    }
}
