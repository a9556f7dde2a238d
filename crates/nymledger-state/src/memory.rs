//! # In-Memory Mock Ledger
//!
//! DashMap-backed [`LedgerState`] implementation for development and
//! tests. Stands in for the hosting platform: it allocates transaction
//! ids (monotonic by default, scriptable per test) and lets tests inject
//! per-key access faults to exercise the storage-error and commit-conflict
//! paths that a real platform would produce.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use nymledger_core::TxId;

use crate::ledger::{LedgerState, StateError};

struct Inner {
    state: DashMap<String, Vec<u8>>,
    get_faults: DashMap<String, String>,
    put_faults: DashMap<String, String>,
    scripted_tx_ids: Mutex<VecDeque<String>>,
    tx_counter: AtomicU64,
}

/// Shared in-memory ledger. Cheaply cloneable via `Arc` — all clones see
/// the same state, so a test can hold one clone as "the platform" while
/// handlers use another.
#[derive(Clone)]
pub struct InMemoryLedger {
    inner: Arc<Inner>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                state: DashMap::new(),
                get_faults: DashMap::new(),
                put_faults: DashMap::new(),
                scripted_tx_ids: Mutex::new(VecDeque::new()),
                tx_counter: AtomicU64::new(0),
            }),
        }
    }

    /// Queue a transaction id to be returned by the next `current_tx_id`
    /// call, ahead of the monotonic default.
    pub fn script_tx_id(&self, id: impl Into<String>) {
        if let Ok(mut queue) = self.inner.scripted_tx_ids.lock() {
            queue.push_back(id.into());
        }
    }

    /// Make every `get_state` on `key` fail with `message` until cleared.
    pub fn fail_get(&self, key: impl Into<String>, message: impl Into<String>) {
        self.inner.get_faults.insert(key.into(), message.into());
    }

    /// Make every `put_state` on `key` fail with `message` until cleared.
    ///
    /// Modeling note: the platform surfaces multi-version conflicts as
    /// failed commits, so a scripted tx id plus a put fault on that id is
    /// how tests simulate a losing writer.
    pub fn fail_put(&self, key: impl Into<String>, message: impl Into<String>) {
        self.inner.put_faults.insert(key.into(), message.into());
    }

    /// Remove all injected faults.
    pub fn clear_faults(&self) {
        self.inner.get_faults.clear();
        self.inner.put_faults.clear();
    }

    /// Number of keys currently stored. Test observability only.
    pub fn len(&self) -> usize {
        self.inner.state.len()
    }

    /// True when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.state.is_empty()
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerState for InMemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StateError> {
        if let Some(message) = self.inner.get_faults.get(key) {
            return Err(StateError::Access(message.clone()));
        }
        Ok(self.inner.state.get(key).map(|v| v.clone()))
    }

    fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StateError> {
        if let Some(message) = self.inner.put_faults.get(key) {
            return Err(StateError::Access(message.clone()));
        }
        self.inner.state.insert(key.to_string(), value);
        Ok(())
    }

    fn current_tx_id(&self) -> Result<TxId, StateError> {
        let scripted = self
            .inner
            .scripted_tx_ids
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front());
        let raw = match scripted {
            Some(id) => id,
            None => {
                let n = self.inner.tx_counter.fetch_add(1, Ordering::SeqCst);
                format!("tx-{n:016x}")
            }
        };
        TxId::new(raw).map_err(|e| StateError::Access(e.to_string()))
    }
}
