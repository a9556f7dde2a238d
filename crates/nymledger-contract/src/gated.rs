//! # Credential-Gated Recorder
//!
//! The core commit path: decode the submitted proof, load the issuer
//! public key, verify, and only then persist the content under the
//! invocation's transaction id. Binding verification to the write keeps
//! unverified content off the ledger entirely, and reusing the platform's
//! own transaction id as the storage key means any observer can
//! reconstruct a record's key from the committing transaction.

use nymledger_core::{ContentRecord, ContractError};
use nymledger_cred::{CredentialVerifier, ProofDecodeError, VerifyError};
use nymledger_state::{IssuerKeyStore, LedgerState};

use crate::{storage_error, NymLedgerContract, Payload};

impl<L: LedgerState, V: CredentialVerifier> NymLedgerContract<L, V> {
    /// Store or overwrite the issuer public key trust root.
    ///
    /// The bytes are opaque at this layer — no format validation happens
    /// until a gated commit decodes them. Rotation never touches committed
    /// records: their keys are transaction ids, and nothing rewrites them.
    pub fn ipkinit(&self, key_bytes: &[u8]) -> Result<Payload, ContractError> {
        IssuerKeyStore::new(self.ledger()).set(key_bytes)?;
        tracing::info!(len = key_bytes.len(), "issuer public key updated");
        Ok(None)
    }

    /// Verify an anonymous credential proof over `message` and, on
    /// acceptance, commit the content under the current transaction id.
    ///
    /// Failure order: malformed proof and non-text content fail before any
    /// state is read; a missing or malformed issuer key fails before
    /// verification; a rejected proof fails before anything is written.
    /// A malformed *stored* issuer key is a `Decode` error — verification
    /// never runs against a garbage key object.
    pub fn idemix(&self, proof_bytes: &[u8], message: &[u8]) -> Result<Payload, ContractError> {
        let proof = self
            .verifier()
            .decode_proof(proof_bytes)
            .map_err(decode_error)?;
        let content = std::str::from_utf8(message)
            .map_err(|_| ContractError::Argument("content must be valid UTF-8 text".to_string()))?;

        let issuer_key_bytes = IssuerKeyStore::new(self.ledger()).get()?;
        let issuer_key = self
            .verifier()
            .decode_issuer_key(&issuer_key_bytes)
            .map_err(decode_error)?;

        // Possession proof only: empty disclosed-attribute list, count 0.
        self.verifier()
            .verify(&issuer_key, &proof, message, &[], 0)
            .map_err(|e| {
                tracing::warn!(reason = %e, "credential proof rejected");
                verification_error(e)
            })?;

        let tx_id = self.ledger().current_tx_id().map_err(storage_error)?;
        let record = ContentRecord {
            nym_cred: proof_bytes.to_vec(),
            content: content.to_string(),
        };
        self.ledger()
            .put_state(tx_id.as_str(), record.to_bytes()?)
            .map_err(storage_error)?;

        tracing::info!(tx_id = %tx_id, "credential-gated record committed");
        Ok(Some(tx_id.to_bytes()))
    }
}

fn decode_error(err: ProofDecodeError) -> ContractError {
    ContractError::Decode(err.to_string())
}

fn verification_error(err: VerifyError) -> ContractError {
    ContractError::Verification(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nymledger_cred::MockCredentialVerifier;
    use nymledger_state::InMemoryLedger;

    const MATERIAL: &[u8] = b"issuer-material";

    fn contract() -> NymLedgerContract<InMemoryLedger, MockCredentialVerifier> {
        NymLedgerContract::new(InMemoryLedger::new(), MockCredentialVerifier)
    }

    fn initialized_contract() -> (
        NymLedgerContract<InMemoryLedger, MockCredentialVerifier>,
        Vec<u8>,
    ) {
        let c = contract();
        let key_bytes = MockCredentialVerifier::issuer_key_bytes(MATERIAL);
        c.ipkinit(&key_bytes).unwrap();
        (c, key_bytes)
    }

    #[test]
    fn idemix_commits_under_tx_id_and_returns_it() {
        let (c, key_bytes) = initialized_contract();
        let proof = MockCredentialVerifier::issue(&key_bytes, b"entry one").unwrap();
        let payload = c.idemix(&proof, b"entry one").unwrap().unwrap();
        let tx_id = String::from_utf8(payload).unwrap();

        let raw = c.query_idemix(&tx_id).unwrap().unwrap();
        let record = ContentRecord::from_bytes(&raw).unwrap();
        assert_eq!(record.content, "entry one");
        assert_eq!(record.nym_cred, proof);
    }

    #[test]
    fn idemix_with_malformed_proof_touches_no_state() {
        let (c, _) = initialized_contract();
        // A get fault on the issuer key would trip if the key were loaded.
        c.ledger().fail_get("IssuerPublicKey", "must not be read");
        let err = c.idemix(b"garbage", b"msg").unwrap_err();
        assert_eq!(err.kind(), "DECODE_ERROR");
    }

    #[test]
    fn idemix_before_ipkinit_is_not_found() {
        let c = contract();
        let other_key = MockCredentialVerifier::issuer_key_bytes(MATERIAL);
        let proof = MockCredentialVerifier::issue(&other_key, b"msg").unwrap();
        let err = c.idemix(&proof, b"msg").unwrap_err();
        assert_eq!(err.kind(), "NOT_FOUND");
    }

    #[test]
    fn idemix_with_corrupt_stored_issuer_key_is_decode_error() {
        let (c, key_bytes) = initialized_contract();
        // Overwrite the trust root with bytes the verifier cannot decode.
        c.ipkinit(b"\xff\xfe not a key").unwrap();
        let proof = MockCredentialVerifier::issue(&key_bytes, b"msg").unwrap();
        let err = c.idemix(&proof, b"msg").unwrap_err();
        assert_eq!(err.kind(), "DECODE_ERROR");
    }

    #[test]
    fn idemix_rejection_writes_nothing() {
        let (c, key_bytes) = initialized_contract();
        let proof = MockCredentialVerifier::issue(&key_bytes, b"signed message").unwrap();
        let err = c.idemix(&proof, b"different message").unwrap_err();
        assert_eq!(err.kind(), "VERIFICATION_ERROR");
        // Only the issuer key itself is stored.
        assert_eq!(c.ledger().len(), 1);
    }

    #[test]
    fn idemix_rejects_non_utf8_content() {
        let (c, key_bytes) = initialized_contract();
        let proof = MockCredentialVerifier::issue(&key_bytes, &[0xff, 0xfe]).unwrap();
        let err = c.idemix(&proof, &[0xff, 0xfe]).unwrap_err();
        assert_eq!(err.kind(), "ARGUMENT_ERROR");
    }

    #[test]
    fn idemix_put_fault_is_storage_error() {
        let (c, key_bytes) = initialized_contract();
        c.ledger().script_tx_id("doomed-tx");
        c.ledger().fail_put("doomed-tx", "commit conflict");
        let proof = MockCredentialVerifier::issue(&key_bytes, b"msg").unwrap();
        let err = c.idemix(&proof, b"msg").unwrap_err();
        assert_eq!(err.kind(), "STORAGE_ERROR");
    }

    #[test]
    fn ipkinit_overwrites_previous_trust_root() {
        let (c, _) = initialized_contract();
        let rotated = MockCredentialVerifier::issuer_key_bytes(b"rotated-material");
        c.ipkinit(&rotated).unwrap();
        // Proofs under the new root verify; the old root is gone.
        let proof = MockCredentialVerifier::issue(&rotated, b"post-rotation").unwrap();
        assert!(c.idemix(&proof, b"post-rotation").is_ok());
    }
}
