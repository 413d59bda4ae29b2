// crates/lumen-store/src/lib.rs
//
// lumen-store: persistent typed repositories for the Lumen reward module.
//
// Two backends implement the same `ParamsRepository`/`StateRepository`
// traits from lumen-core: a RocksDB store for validating nodes and an
// in-memory store for tests and light tooling. Values are JSON under
// stable string keys, so a stored params record is inspectable with plain
// RocksDB tooling.

pub mod memory;
pub mod rocks;

pub use memory::MemoryStore;
pub use rocks::RocksStore;

/// Key for the persisted `RewardParams` record.
pub(crate) const PARAMS_KEY: &[u8] = b"reward/params";

/// Key for the persisted `ReleaseState` record.
pub(crate) const STATE_KEY: &[u8] = b"reward/state";
