// crates/lumen-reward/src/ledger.rs
//
// In-memory pool ledger.
//
// The production ledger lives outside this workspace (the host chain's bank
// module); this implementation backs tests and local tooling, where both
// sides of a transfer must be observable to check conservation.

use std::collections::HashMap;

use parking_lot::RwLock;

use lumen_core::error::LumenError;
use lumen_core::traits::Ledger;
use lumen_core::Amount;

/// In-memory account/denom balance table implementing `Ledger`.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: RwLock<HashMap<(String, String), Amount>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` of `denom` to `account`. Test/tooling setup only;
    /// the engine itself never mints.
    pub fn fund(&self, account: &str, denom: &str, amount: Amount) {
        let mut balances = self.balances.write();
        let entry = balances
            .entry((account.to_string(), denom.to_string()))
            .or_insert(0);
        *entry = entry.saturating_add(amount);
    }
}

impl Ledger for MemoryLedger {
    fn balance(&self, account: &str, denom: &str) -> Result<Amount, LumenError> {
        Ok(*self
            .balances
            .read()
            .get(&(account.to_string(), denom.to_string()))
            .unwrap_or(&0))
    }

    fn transfer(
        &self,
        from: &str,
        to: &str,
        denom: &str,
        amount: Amount,
    ) -> Result<(), LumenError> {
        // Single write lock for the whole move keeps the transfer atomic.
        let mut balances = self.balances.write();

        let from_key = (from.to_string(), denom.to_string());
        let available = *balances.get(&from_key).unwrap_or(&0);
        if available < amount {
            return Err(LumenError::InsufficientFunds {
                denom: denom.to_string(),
                requested: amount,
                available,
            });
        }

        balances.insert(from_key, available - amount);
        let to_key = (to.to_string(), denom.to_string());
        let dest = *balances.get(&to_key).unwrap_or(&0);
        balances.insert(to_key, dest + amount);
        Ok(())
    }
}
