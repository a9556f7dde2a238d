//! # Public Recorder
//!
//! The non-gated write path: same keying scheme as the gated recorder —
//! content persisted verbatim under the invocation's transaction id — with
//! the verification steps removed.

use nymledger_core::ContractError;
use nymledger_cred::CredentialVerifier;
use nymledger_state::LedgerState;

use crate::{storage_error, NymLedgerContract, Payload};

impl<L: LedgerState, V: CredentialVerifier> NymLedgerContract<L, V> {
    /// Persist `content` verbatim under the current transaction id.
    ///
    /// Returns the transaction id as the success payload so the caller can
    /// retrieve the content later via `queryContent`.
    pub fn record_content(&self, content: &[u8]) -> Result<Payload, ContractError> {
        if content.is_empty() {
            return Err(ContractError::Argument(
                "expected non-empty content".to_string(),
            ));
        }
        let tx_id = self.ledger().current_tx_id().map_err(storage_error)?;
        self.ledger()
            .put_state(tx_id.as_str(), content.to_vec())
            .map_err(storage_error)?;
        tracing::info!(tx_id = %tx_id, len = content.len(), "public content committed");
        Ok(Some(tx_id.to_bytes()))
    }
}
