// crates/lumen-store/src/rocks.rs
//
// RocksDB-backed repositories for reward params and release state.
//
// Key format:
//   - `reward/params` -> JSON-serialized RewardParams
//   - `reward/state`  -> JSON-serialized ReleaseState
//
// Single-record keys, no iteration: the reward module persists exactly two
// values, read and written once per block.

use rocksdb::{DBWithThreadMode, MultiThreaded, Options};
use tracing::debug;

use lumen_core::error::LumenError;
use lumen_core::params::RewardParams;
use lumen_core::state::ReleaseState;
use lumen_core::traits::{ParamsRepository, StateRepository};

use crate::{PARAMS_KEY, STATE_KEY};

/// RocksDB wrapper implementing the reward repositories.
#[derive(Debug)]
pub struct RocksStore {
    db: DBWithThreadMode<MultiThreaded>,
}

impl RocksStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, LumenError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path)
            .map_err(|e| LumenError::Storage(format!("Failed to open RocksDB at {}: {}", path, e)))?;

        Ok(Self { db })
    }

    /// Put raw bytes into RocksDB, mapping errors to LumenError::Storage.
    fn put_raw(&self, key: &[u8], value: &[u8]) -> Result<(), LumenError> {
        self.db
            .put(key, value)
            .map_err(|e| LumenError::Storage(format!("RocksDB put failed: {}", e)))
    }

    /// Get raw bytes from RocksDB, mapping errors to LumenError::Storage.
    fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>, LumenError> {
        self.db
            .get(key)
            .map_err(|e| LumenError::Storage(format!("RocksDB get failed: {}", e)))
    }
}

impl ParamsRepository for RocksStore {
    fn get(&self) -> Result<RewardParams, LumenError> {
        match self.get_raw(PARAMS_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Err(LumenError::NotFound(
                "reward params not initialized".to_string(),
            )),
        }
    }

    fn set(&self, params: &RewardParams) -> Result<(), LumenError> {
        params.validate()?;
        let json = serde_json::to_vec(params)?;
        self.put_raw(PARAMS_KEY, &json)?;
        debug!(rate = %params.release_rate, enabled = params.release_enabled, "stored reward params");
        Ok(())
    }
}

impl StateRepository for RocksStore {
    fn get(&self) -> Result<ReleaseState, LumenError> {
        match self.get_raw(STATE_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Err(LumenError::NotFound(
                "release state not initialized".to_string(),
            )),
        }
    }

    fn set(&self, state: &ReleaseState) -> Result<(), LumenError> {
        let json = serde_json::to_vec(state)?;
        self.put_raw(STATE_KEY, &json)
    }
}
