//! # Issuer Key Singleton
//!
//! The trust root for credential verification lives at one fixed key in
//! ledger state. There is no lifecycle beyond exists-or-not: `set`
//! unconditionally overwrites, and no version number is surfaced to
//! callers. Rotating the key never touches previously committed records —
//! history stays immutable across trust-root rotation.

use nymledger_core::ContractError;

use crate::ledger::{LedgerState, StateError};

/// The fixed state key under which the issuer public key is stored.
pub const ISSUER_PUBLIC_KEY_KEY: &str = "IssuerPublicKey";

/// View over a [`LedgerState`] scoped to the issuer public key singleton.
pub struct IssuerKeyStore<'a, L: LedgerState> {
    ledger: &'a L,
}

impl<'a, L: LedgerState> IssuerKeyStore<'a, L> {
    pub fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Store issuer public key bytes, overwriting any previous value.
    ///
    /// No format validation happens at this layer — the bytes are opaque
    /// until a verifier decodes them.
    pub fn set(&self, key_bytes: &[u8]) -> Result<(), ContractError> {
        self.ledger
            .put_state(ISSUER_PUBLIC_KEY_KEY, key_bytes.to_vec())
            .map_err(storage_error)
    }

    /// Fetch the stored issuer public key bytes.
    ///
    /// A never-initialized key is reported as `NotFound`, distinct from a
    /// storage fault.
    pub fn get(&self) -> Result<Vec<u8>, ContractError> {
        self.ledger
            .get_state(ISSUER_PUBLIC_KEY_KEY)
            .map_err(storage_error)?
            .ok_or_else(|| {
                ContractError::NotFound("issuer public key has not been initialized".to_string())
            })
    }
}

fn storage_error(err: StateError) -> ContractError {
    ContractError::Storage(err.to_string())
}
