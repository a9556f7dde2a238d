//! # Query Service
//!
//! Plain lookups by record key. Both the gated and the public path share
//! one contract: the raw stored bytes come back undecoded — the caller
//! decides what they are. No side effects.

use nymledger_core::ContractError;
use nymledger_cred::CredentialVerifier;
use nymledger_state::LedgerState;

use crate::{storage_error, NymLedgerContract, Payload};

impl<L: LedgerState, V: CredentialVerifier> NymLedgerContract<L, V> {
    /// Fetch a credential-gated record by the transaction id that wrote it.
    pub fn query_idemix(&self, key: &str) -> Result<Payload, ContractError> {
        self.lookup(key)
    }

    /// Fetch public content by the transaction id that wrote it.
    pub fn query_content(&self, key: &str) -> Result<Payload, ContractError> {
        self.lookup(key)
    }

    fn lookup(&self, key: &str) -> Result<Payload, ContractError> {
        if key.is_empty() {
            return Err(ContractError::Argument(
                "expected a non-empty key".to_string(),
            ));
        }
        match self.ledger().get_state(key).map_err(storage_error)? {
            Some(bytes) => {
                tracing::debug!(key, len = bytes.len(), "lookup hit");
                Ok(Some(bytes))
            }
            None => Err(ContractError::NotFound(format!("no such key: {key}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nymledger_cred::MockCredentialVerifier;
    use nymledger_state::InMemoryLedger;

    fn contract() -> NymLedgerContract<InMemoryLedger, MockCredentialVerifier> {
        NymLedgerContract::new(InMemoryLedger::new(), MockCredentialVerifier)
    }

    #[test]
    fn lookup_of_never_written_key_is_not_found() {
        let c = contract();
        let err = c.query_idemix("tx-never-written").unwrap_err();
        assert_eq!(err.kind(), "NOT_FOUND");
    }

    #[test]
    fn lookup_of_empty_key_is_argument_error() {
        let c = contract();
        let err = c.query_content("").unwrap_err();
        assert_eq!(err.kind(), "ARGUMENT_ERROR");
    }

    #[test]
    fn lookup_surfaces_storage_fault() {
        let c = contract();
        c.ledger().fail_get("k", "backend down");
        let err = c.query_idemix("k").unwrap_err();
        assert_eq!(err.kind(), "STORAGE_ERROR");
    }

    #[test]
    fn lookup_returns_stored_bytes_undecoded() {
        let c = contract();
        c.ledger()
            .put_state("k", b"\x00raw opaque bytes\xff".to_vec())
            .unwrap();
        assert_eq!(
            c.query_content("k").unwrap().unwrap(),
            b"\x00raw opaque bytes\xff"
        );
    }
}
