// crates/lumen-reward/src/lib.rs
//
// lumen-reward: the block-synchronous reward release engine.
//
// Once per block the host state machine calls `ReleaseEngine::begin_block`
// with the new block's height and header time. The engine prorates the
// annualized release rate over the elapsed time, moves the resulting amount
// out of the reward pool, and halves the rate when a dilution period has
// passed. Everything is exact integer/decimal arithmetic; a fault inside
// the hook is fatal so every replica halts identically instead of
// diverging.

pub mod engine;
pub mod genesis;
pub mod ledger;

// Re-export key types for ergonomic access from downstream crates.
pub use engine::{EngineConfig, ReleaseEngine};
pub use genesis::{export_genesis, init_genesis, GenesisState};
pub use ledger::MemoryLedger;
