use std::sync::OnceLock;

/// Transaction policy that determines whether transactions should be committed or rolled back on success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnPolicy {
    /// Commit the transaction when the operation succeeds (default behavior)
    CommitOnOk,
    /// Rollback the transaction when the operation succeeds (for testing)
    RollbackOnOk,
}

impl TxnPolicy {
    /// Parse `MATCHPLAY_TXN_POLICY` values: `commit` or `rollback`.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "commit" | "commit_on_ok" => Some(Self::CommitOnOk),
            "rollback" | "rollback_on_ok" => Some(Self::RollbackOnOk),
            _ => None,
        }
    }
}

static POLICY: OnceLock<TxnPolicy> = OnceLock::new();

/// Get the current transaction policy.
///
/// Falls back to `MATCHPLAY_TXN_POLICY`, then `CommitOnOk`, when no policy
/// has been set explicitly.
pub fn current() -> TxnPolicy {
    *POLICY.get_or_init(|| {
        std::env::var("MATCHPLAY_TXN_POLICY")
            .ok()
            .and_then(|v| TxnPolicy::from_env_value(&v))
            .unwrap_or(TxnPolicy::CommitOnOk)
    })
}

/// Set the transaction policy for the process.
///
/// Only the first call has any effect.
pub fn set_txn_policy(policy: TxnPolicy) {
    let _ = POLICY.set(policy);
}
