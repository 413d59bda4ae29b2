// crates/lumen-core/src/state.rs
//
// Release-state tracker: the two timestamps the engine carries between
// blocks. Both are monotonically non-decreasing over the chain's history;
// monotonicity is enforced by the engine, not by this type or its store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamps persisted between blocks by the release engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseState {
    /// Block time of the last invocation that advanced the release clock
    /// (including invocations while releases were disabled).
    pub last_release_timestamp: DateTime<Utc>,

    /// Block time of the last rate halving. Not advanced while releases
    /// are disabled.
    pub last_dilution_timestamp: DateTime<Utc>,
}

impl ReleaseState {
    /// Release state with both timestamps at the given instant.
    /// At genesis both are conventionally set to the genesis time.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            last_release_timestamp: time,
            last_dilution_timestamp: time,
        }
    }
}
