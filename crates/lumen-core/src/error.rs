use thiserror::Error;

/// Workspace-wide error types for the Lumen reward module.
///
/// Two classes matter to callers: `Validation` is the only recoverable
/// class, rejected synchronously with state unchanged. Everything else is
/// fatal inside block processing — a replica that cannot reproduce the same
/// deterministic transition as its peers must halt rather than diverge.
#[derive(Debug, Error)]
pub enum LumenError {
    /// Bad parameter values, rejected before any write.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Broken determinism invariant (clock went backward, over-draw, ...).
    #[error("Consistency fault: {0}")]
    Consistency(String),

    /// Required persisted state is missing (params/state not initialized).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage layer error (RocksDB).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Ledger collaborator rejected a transfer for lack of funds.
    #[error("Insufficient funds: {requested} {denom} requested, {available} available")]
    InsufficientFunds {
        denom: String,
        requested: u64,
        available: u64,
    },

    /// Any other ledger collaborator failure.
    #[error("Ledger error: {0}")]
    Ledger(String),
}

impl LumenError {
    /// Whether this error must halt block processing.
    ///
    /// Only validation failures are recoverable; they never occur inside
    /// the per-block hook, only on the administrative path.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LumenError::Validation(_))
    }
}

impl From<serde_json::Error> for LumenError {
    fn from(e: serde_json::Error) -> Self {
        LumenError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_not_fatal() {
        assert!(!LumenError::Validation("negative rate".into()).is_fatal());
    }

    #[test]
    fn test_block_path_errors_are_fatal() {
        assert!(LumenError::Consistency("clock went backward".into()).is_fatal());
        assert!(LumenError::NotFound("params".into()).is_fatal());
        assert!(LumenError::Storage("io".into()).is_fatal());
        assert!(LumenError::Ledger("unavailable".into()).is_fatal());
        assert!(LumenError::InsufficientFunds {
            denom: "ulum".into(),
            requested: 10,
            available: 1,
        }
        .is_fatal());
    }
}
