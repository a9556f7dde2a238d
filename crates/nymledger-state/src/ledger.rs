//! # Ledger State Trait
//!
//! The collaborator interface the hosting platform supplies to each
//! invocation. Implementations must be `Send + Sync`; concurrent
//! invocations run in isolation and are reconciled only at commit time by
//! the platform's conflict detection, so this trait exposes no locking.

use thiserror::Error;

use nymledger_core::TxId;

/// A state access fault.
///
/// Distinct from "key absent": `get_state` reports absence as `Ok(None)`,
/// and callers decide whether that is an error in their context.
#[derive(Error, Debug)]
pub enum StateError {
    /// The backing store could not serve the access.
    #[error("state access fault: {0}")]
    Access(String),
}

/// Keyed persistent ledger state for one invocation.
pub trait LedgerState: Send + Sync {
    /// Read the value at `key`. `Ok(None)` means the key has never been
    /// written as of this invocation's snapshot.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Stage a write of `value` under `key`. The platform commits the
    /// invocation's whole write set atomically or not at all.
    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// The current invocation's transaction id — unique per invocation and
    /// identical across all nodes validating the same transaction.
    fn current_tx_id(&self) -> Result<TxId, StateError>;
}
