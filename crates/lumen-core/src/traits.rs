// crates/lumen-core/src/traits.rs
//
// Trait seams consumed by the release engine. All methods are synchronous:
// the engine runs inside deterministic per-block state-machine replication
// and must never suspend.

use crate::error::LumenError;
use crate::params::RewardParams;
use crate::state::ReleaseState;
use crate::Amount;

/// Typed repository for the governed reward parameters.
///
/// Implemented by lumen-store (RocksDB and in-memory backends).
pub trait ParamsRepository: Send + Sync {
    /// Read the current params. Missing params is `LumenError::NotFound`,
    /// which is fatal inside block processing.
    fn get(&self) -> Result<RewardParams, LumenError>;

    /// Validate and persist params. Rejects invalid params with
    /// `LumenError::Validation`, leaving stored state unchanged.
    fn set(&self, params: &RewardParams) -> Result<(), LumenError>;
}

/// Typed repository for the release-state timestamps.
///
/// No validation on write; timestamp monotonicity is the engine's
/// responsibility.
pub trait StateRepository: Send + Sync {
    /// Read the current release state, `LumenError::NotFound` if missing.
    fn get(&self) -> Result<ReleaseState, LumenError>;

    /// Persist the release state.
    fn set(&self, state: &ReleaseState) -> Result<(), LumenError>;
}

/// Pool ledger accessor: the external collaborator holding account
/// balances. The engine only reads the pool balance and moves the computed
/// release amount; ledger mechanics live outside this workspace.
pub trait Ledger: Send + Sync {
    /// Balance of `denom` held by `account`.
    fn balance(&self, account: &str, denom: &str) -> Result<Amount, LumenError>;

    /// Atomically move `amount` of `denom` from one account to another.
    ///
    /// # Errors
    /// `LumenError::InsufficientFunds` if the source balance is too small,
    /// `LumenError::Ledger` for any other ledger failure. Amount is
    /// conserved: either both sides change or neither does.
    fn transfer(
        &self,
        from: &str,
        to: &str,
        denom: &str,
        amount: Amount,
    ) -> Result<(), LumenError>;
}
