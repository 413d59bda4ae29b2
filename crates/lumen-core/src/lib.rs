// crates/lumen-core/src/lib.rs
//
// lumen-core: Core types, fixed-point rate arithmetic, and trait seams for
// the Lumen reward module.
//
// This is the leaf crate the other workspace crates depend on. It defines
// the parameter and release-state types persisted by the chain, the error
// taxonomy shared across the workspace, and the repository/ledger traits
// that the release engine consumes.

pub mod error;
pub mod params;
pub mod rate;
pub mod state;
pub mod time;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use lumen_core::RewardParams;`

pub use error::LumenError;
pub use params::RewardParams;
pub use rate::{halve_rate, release_amount, RATE_DECIMAL_PLACES};
pub use state::ReleaseState;
pub use time::{format_duration, parse_duration, SECONDS_PER_YEAR};
pub use traits::{Ledger, ParamsRepository, StateRepository};

/// Base-unit token amount. All accounting is integer base units to avoid
/// floating-point drift across replicas.
pub type Amount = u64;
