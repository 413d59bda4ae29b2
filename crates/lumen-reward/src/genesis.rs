// crates/lumen-reward/src/genesis.rs
//
// Genesis import/export for the reward module.
//
// The genesis payload is a flat JSON object carrying both the params and
// the release-state timestamps:
//
//   {
//     "release_enabled": true,
//     "release_rate": "0.07",
//     "dilution_period": "365d",
//     "reward_denom": "ulum",
//     "last_release_timestamp": "2024-01-01T00:00:00Z",
//     "last_dilution_timestamp": "2024-01-01T00:00:00Z"
//   }
//
// `init_genesis` writes both stores exactly once at chain start;
// `export_genesis` reads them back unchanged for a state snapshot.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lumen_core::error::LumenError;
use lumen_core::params::RewardParams;
use lumen_core::state::ReleaseState;
use lumen_core::time::duration_string;
use lumen_core::traits::{ParamsRepository, StateRepository};

/// Flat genesis payload for the reward module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisState {
    pub release_enabled: bool,
    pub release_rate: Decimal,
    #[serde(with = "duration_string")]
    pub dilution_period: Duration,
    pub reward_denom: String,
    pub last_release_timestamp: DateTime<Utc>,
    pub last_dilution_timestamp: DateTime<Utc>,
}

impl GenesisState {
    /// Genesis payload with default params and both timestamps at
    /// `genesis_time`, the conventional starting point.
    pub fn at(genesis_time: DateTime<Utc>) -> Self {
        Self::from_parts(RewardParams::default(), ReleaseState::at(genesis_time))
    }

    pub fn from_parts(params: RewardParams, state: ReleaseState) -> Self {
        Self {
            release_enabled: params.release_enabled,
            release_rate: params.release_rate,
            dilution_period: params.dilution_period,
            reward_denom: params.reward_denom,
            last_release_timestamp: state.last_release_timestamp,
            last_dilution_timestamp: state.last_dilution_timestamp,
        }
    }

    pub fn params(&self) -> RewardParams {
        RewardParams {
            release_enabled: self.release_enabled,
            release_rate: self.release_rate,
            dilution_period: self.dilution_period,
            reward_denom: self.reward_denom.clone(),
        }
    }

    pub fn release_state(&self) -> ReleaseState {
        ReleaseState {
            last_release_timestamp: self.last_release_timestamp,
            last_dilution_timestamp: self.last_dilution_timestamp,
        }
    }
}

/// Write params and release state at chain genesis. Params are validated on
/// write; a bad genesis payload surfaces before the first block.
pub fn init_genesis(
    params_repo: &dyn ParamsRepository,
    state_repo: &dyn StateRepository,
    genesis: &GenesisState,
) -> Result<(), LumenError> {
    params_repo.set(&genesis.params())?;
    state_repo.set(&genesis.release_state())
}

/// Read both stores unchanged, for a chain-state snapshot/restart.
pub fn export_genesis(
    params_repo: &dyn ParamsRepository,
    state_repo: &dyn StateRepository,
) -> Result<GenesisState, LumenError> {
    let params = params_repo.get()?;
    let state = state_repo.get()?;
    Ok(GenesisState::from_parts(params, state))
}
