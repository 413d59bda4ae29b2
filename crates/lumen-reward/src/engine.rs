// crates/lumen-reward/src/engine.rs
//
// The per-block release engine.
//
// Invoked exactly once per block, strictly ordered with the host's other
// state transitions. The hook never suspends and never retries: any error
// it returns is a consistency fault the host must treat as fatal for the
// whole block. The administrative `update_params` path is the only
// non-fatal surface.
//
// Block algorithm:
//   1. read params + release state
//   2. disabled -> advance last_release_timestamp only
//   3. elapsed = T - last_release_timestamp (negative is fatal)
//   4. release = floor(rate * pool_balance * elapsed / seconds_per_year)
//   5. transfer release from the pool to the distribution account
//   6. halve the rate once if a dilution period has passed
//   7. persist

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use lumen_core::error::LumenError;
use lumen_core::params::RewardParams;
use lumen_core::rate::{halve_rate, release_amount};
use lumen_core::state::ReleaseState;
use lumen_core::traits::{Ledger, ParamsRepository, StateRepository};

/// Explicit engine configuration. Passed into the constructor instead of
/// package-level globals so tests and hosts wire it the same way.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Module-owned account the release is drawn from.
    pub pool_account: String,
    /// Destination account for released tokens.
    pub distribution_account: String,
    /// Only caller allowed to replace params administratively.
    pub authority: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pool_account: "reward_pool".to_string(),
            distribution_account: "fee_collector".to_string(),
            authority: "gov".to_string(),
        }
    }
}

/// The reward release engine.
pub struct ReleaseEngine {
    params_repo: Arc<dyn ParamsRepository>,
    state_repo: Arc<dyn StateRepository>,
    ledger: Arc<dyn Ledger>,
    config: EngineConfig,
}

impl ReleaseEngine {
    pub fn new(
        params_repo: Arc<dyn ParamsRepository>,
        state_repo: Arc<dyn StateRepository>,
        ledger: Arc<dyn Ledger>,
        config: EngineConfig,
    ) -> Self {
        Self {
            params_repo,
            state_repo,
            ledger,
            config,
        }
    }

    /// Per-block hook. `block_time` is the agreed header time of the block
    /// being processed.
    ///
    /// # Errors
    /// Every error returned here is fatal: the host must halt block
    /// processing rather than skip the transition and diverge from peers.
    pub fn begin_block(&self, height: u64, block_time: DateTime<Utc>) -> Result<(), LumenError> {
        let mut params = self.params_repo.get()?;
        let mut state = self.state_repo.get()?;

        if !params.release_enabled {
            // No funds move and the dilution clock does not advance.
            state.last_release_timestamp = block_time;
            self.state_repo.set(&state)?;
            debug!(height, "reward release disabled, timestamp advanced");
            return Ok(());
        }

        let elapsed = block_time
            .signed_duration_since(state.last_release_timestamp)
            .num_seconds();
        if elapsed < 0 {
            return Err(LumenError::Consistency(format!(
                "block time {} precedes last release timestamp {}",
                block_time, state.last_release_timestamp
            )));
        }

        let balance = self
            .ledger
            .balance(&self.config.pool_account, &params.reward_denom)?;
        let amount = release_amount(params.release_rate, balance, elapsed as u64)?;

        if amount > 0 {
            // A transfer failure here means an invariant is already broken;
            // surface it and let the host halt.
            self.ledger.transfer(
                &self.config.pool_account,
                &self.config.distribution_account,
                &params.reward_denom,
                amount,
            )?;
            info!(
                height,
                amount,
                denom = %params.reward_denom,
                rate = %params.release_rate,
                elapsed_secs = elapsed,
                "released rewards"
            );
        }

        state.last_release_timestamp = block_time;

        // Dilution check: one halving per invocation, however much time has
        // passed. A chain halted across several periods resumes with a
        // single halving and a reset dilution clock.
        let since_dilution = block_time
            .signed_duration_since(state.last_dilution_timestamp)
            .num_seconds();
        if since_dilution >= 0 && since_dilution as u64 >= params.dilution_period.as_secs() {
            let halved = halve_rate(params.release_rate);
            info!(height, from = %params.release_rate, to = %halved, "diluted release rate");
            params.release_rate = halved;
            state.last_dilution_timestamp = block_time;
            self.params_repo.set(&params)?;
        }

        self.state_repo.set(&state)
    }

    /// Administrative parameter replacement (governance / module authority).
    ///
    /// Validation failures are reported synchronously to the caller and
    /// leave stored state unchanged. The new params take effect at the next
    /// `begin_block`.
    pub fn update_params(&self, caller: &str, params: RewardParams) -> Result<(), LumenError> {
        if caller != self.config.authority {
            return Err(LumenError::Validation(format!(
                "caller '{}' is not the reward authority '{}'",
                caller, self.config.authority
            )));
        }
        self.params_repo.set(&params)?;
        info!(rate = %params.release_rate, enabled = params.release_enabled, "reward params updated");
        Ok(())
    }

    /// Current params, for query surfaces.
    pub fn params(&self) -> Result<RewardParams, LumenError> {
        self.params_repo.get()
    }

    /// Current release state, for query surfaces.
    pub fn release_state(&self) -> Result<ReleaseState, LumenError> {
        self.state_repo.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use rust_decimal_macros::dec;
    use std::time::Duration;

    use lumen_store::MemoryStore;

    fn genesis_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// Engine over in-memory store and ledger, pool funded with `pool` ulum.
    fn setup(params: RewardParams, pool: u64) -> (ReleaseEngine, Arc<MemoryLedger>) {
        let store = Arc::new(MemoryStore::new());
        ParamsRepository::set(store.as_ref(), &params).unwrap();
        StateRepository::set(store.as_ref(), &ReleaseState::at(genesis_time())).unwrap();

        let ledger = Arc::new(MemoryLedger::new());
        ledger.fund("reward_pool", "ulum", pool);

        let engine = ReleaseEngine::new(
            store.clone(),
            store,
            ledger.clone(),
            EngineConfig::default(),
        );
        (engine, ledger)
    }

    fn day_params() -> RewardParams {
        RewardParams {
            release_enabled: true,
            release_rate: dec!(0.07),
            dilution_period: Duration::from_secs(86_400),
            ..Default::default()
        }
    }

    #[test]
    fn test_release_after_24h_matches_reference() {
        let (engine, ledger) = setup(day_params(), 10_000_000);

        let t = genesis_time() + ChronoDuration::hours(24);
        engine.begin_block(2, t).unwrap();

        // floor(0.07 * 10_000_000 / 365) = 1_917
        assert_eq!(ledger.balance("reward_pool", "ulum").unwrap(), 10_000_000 - 1_917);
        assert_eq!(ledger.balance("fee_collector", "ulum").unwrap(), 1_917);

        let state = engine.release_state().unwrap();
        assert_eq!(state.last_release_timestamp, t);
    }

    #[test]
    fn test_dilution_boundary_halves_rate() {
        let (engine, _ledger) = setup(day_params(), 10_000_000);

        let t = genesis_time() + ChronoDuration::hours(24) + ChronoDuration::seconds(1);
        engine.begin_block(2, t).unwrap();

        let params = engine.params().unwrap();
        assert_eq!(params.release_rate, dec!(0.035));
        assert_eq!(engine.release_state().unwrap().last_dilution_timestamp, t);
    }

    #[test]
    fn test_below_dilution_boundary_keeps_rate() {
        let (engine, _ledger) = setup(day_params(), 10_000_000);

        let t = genesis_time() + ChronoDuration::hours(23);
        engine.begin_block(2, t).unwrap();

        assert_eq!(engine.params().unwrap().release_rate, dec!(0.07));
        assert_eq!(
            engine.release_state().unwrap().last_dilution_timestamp,
            genesis_time()
        );
    }

    #[test]
    fn test_disabled_moves_no_funds_and_keeps_dilution_clock() {
        let params = RewardParams {
            release_enabled: false,
            ..day_params()
        };
        let (engine, ledger) = setup(params, 10_000_000);

        let t = genesis_time() + ChronoDuration::hours(48);
        engine.begin_block(2, t).unwrap();

        assert_eq!(ledger.balance("reward_pool", "ulum").unwrap(), 10_000_000);
        let state = engine.release_state().unwrap();
        assert_eq!(state.last_release_timestamp, t);
        assert_eq!(state.last_dilution_timestamp, genesis_time());
        assert_eq!(engine.params().unwrap().release_rate, dec!(0.07));
    }

    #[test]
    fn test_zero_elapsed_is_idempotent() {
        let (engine, ledger) = setup(day_params(), 10_000_000);

        engine.begin_block(2, genesis_time()).unwrap();
        engine.begin_block(3, genesis_time()).unwrap();

        assert_eq!(ledger.balance("reward_pool", "ulum").unwrap(), 10_000_000);
        assert_eq!(ledger.balance("fee_collector", "ulum").unwrap(), 0);
    }

    #[test]
    fn test_clock_backward_is_fatal() {
        let (engine, _ledger) = setup(day_params(), 10_000_000);

        let t = genesis_time() - ChronoDuration::seconds(1);
        let err = engine.begin_block(2, t).unwrap_err();
        assert!(matches!(err, LumenError::Consistency(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_monotonic_timestamps_over_sequence() {
        let (engine, _ledger) = setup(day_params(), 10_000_000);

        let mut height = 2;
        let mut prev = engine.release_state().unwrap();
        for offset_hours in [0i64, 5, 5, 12, 30, 30, 100] {
            let t = genesis_time() + ChronoDuration::hours(offset_hours);
            engine.begin_block(height, t).unwrap();
            let state = engine.release_state().unwrap();
            assert!(state.last_release_timestamp >= prev.last_release_timestamp);
            assert!(state.last_dilution_timestamp >= prev.last_dilution_timestamp);
            prev = state;
            height += 1;
        }
    }

    #[test]
    fn test_conservation_across_blocks() {
        let (engine, ledger) = setup(day_params(), 10_000_000);

        for (height, hours) in [(2u64, 6i64), (3, 12), (4, 36), (5, 72)] {
            engine.begin_block(height, genesis_time() + ChronoDuration::hours(hours)).unwrap();
            let pool = ledger.balance("reward_pool", "ulum").unwrap();
            let dest = ledger.balance("fee_collector", "ulum").unwrap();
            assert_eq!(pool + dest, 10_000_000);
        }
    }

    #[test]
    fn test_multi_period_halt_halves_once() {
        let (engine, _ledger) = setup(day_params(), 10_000_000);

        // Ten full dilution periods elapse in a single step.
        let t = genesis_time() + ChronoDuration::days(10);
        engine.begin_block(2, t).unwrap();

        assert_eq!(engine.params().unwrap().release_rate, dec!(0.035));
        assert_eq!(engine.release_state().unwrap().last_dilution_timestamp, t);
    }

    #[test]
    fn test_update_params_requires_authority() {
        let (engine, _ledger) = setup(day_params(), 0);

        let err = engine
            .update_params("someone_else", RewardParams::default())
            .unwrap_err();
        assert!(matches!(err, LumenError::Validation(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_update_params_validates_and_applies() {
        let (engine, _ledger) = setup(day_params(), 0);

        let bad = RewardParams {
            reward_denom: String::new(),
            ..Default::default()
        };
        assert!(engine.update_params("gov", bad).is_err());
        assert_eq!(engine.params().unwrap(), day_params());

        let next = RewardParams {
            release_rate: dec!(0.02),
            ..day_params()
        };
        engine.update_params("gov", next.clone()).unwrap();
        assert_eq!(engine.params().unwrap(), next);
    }

    #[test]
    fn test_missing_state_is_fatal() {
        let store = Arc::new(MemoryStore::new());
        let engine = ReleaseEngine::new(
            store.clone(),
            store,
            Arc::new(MemoryLedger::new()),
            EngineConfig::default(),
        );
        let err = engine.begin_block(1, genesis_time()).unwrap_err();
        assert!(matches!(err, LumenError::NotFound(_)));
        assert!(err.is_fatal());
    }
}
