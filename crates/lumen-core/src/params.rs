// crates/lumen-core/src/params.rs
//
// Governed parameters of the reward release engine.
//
// Params are persisted as JSON and replaced wholesale by the administrative
// update path; the engine's dilution step rewrites only the release rate.
// Both paths go through `validate()` before any write.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LumenError;
use crate::rate::RATE_DECIMAL_PLACES;
use crate::time::duration_string;

/// Default annualized release rate: 7%.
pub fn default_release_rate() -> Decimal {
    Decimal::new(7, 2)
}

/// Default dilution period: 365 days.
pub const DEFAULT_DILUTION_PERIOD: Duration = Duration::from_secs(365 * 86_400);

/// Default reward denomination.
pub const DEFAULT_REWARD_DENOM: &str = "ulum";

/// Governed parameters of the release engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardParams {
    /// Whether the per-block release is active. While disabled, no funds
    /// move and only the last-release timestamp advances.
    pub release_enabled: bool,

    /// Annualized fraction of the pool released per year, in [0, 1].
    /// Serialized as a decimal string ("0.07").
    pub release_rate: Decimal,

    /// How often the release rate halves.
    #[serde(with = "duration_string")]
    pub dilution_period: Duration,

    /// Denomination drawn from the reward pool.
    pub reward_denom: String,
}

impl Default for RewardParams {
    fn default() -> Self {
        Self {
            release_enabled: true,
            release_rate: default_release_rate(),
            dilution_period: DEFAULT_DILUTION_PERIOD,
            reward_denom: DEFAULT_REWARD_DENOM.to_string(),
        }
    }
}

impl RewardParams {
    /// Validate the parameter set. Called on every write, both from the
    /// administrative path and from the engine's dilution step.
    pub fn validate(&self) -> Result<(), LumenError> {
        if self.release_rate.is_sign_negative() {
            return Err(LumenError::Validation(format!(
                "release rate {} must not be negative",
                self.release_rate
            )));
        }
        if self.release_rate > Decimal::ONE {
            return Err(LumenError::Validation(format!(
                "release rate {} must not exceed 1",
                self.release_rate
            )));
        }
        if self.release_rate.scale() > RATE_DECIMAL_PLACES {
            return Err(LumenError::Validation(format!(
                "release rate {} exceeds {} decimal places",
                self.release_rate, RATE_DECIMAL_PLACES
            )));
        }
        if self.dilution_period.is_zero() {
            return Err(LumenError::Validation(
                "dilution period must be positive".to_string(),
            ));
        }
        if self.reward_denom.is_empty() {
            return Err(LumenError::Validation(
                "reward denom must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
