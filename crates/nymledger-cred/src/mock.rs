//! # Mock Credential Verifier
//!
//! A deterministic, transparent verifier for development and testing.
//! Produces SHA-256-based "proofs" that are verifiable but provide **no
//! zero-knowledge guarantees**.
//!
//! ## How It Works
//!
//! - An issuer key is `{ "material": "<hex bytes>" }`.
//! - A proof over message M is `{ "digest": hex(SHA256(material || M)) }`,
//!   produced by [`MockCredentialVerifier::issue`].
//! - `verify()` recomputes the digest from the stored key material and the
//!   message and checks equality.
//!
//! ## Security Warning
//!
//! **NOT PRIVATE and NOT UNFORGEABLE.** Anyone holding the key material can
//! mint proofs, and the proof reveals nothing because there is nothing to
//! hide. The mock exists solely so the gated commit path can be exercised
//! deterministically without a real proof system behind the trait.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::verifier::{CredentialVerifier, ProofDecodeError, VerifyError};

/// A mock anonymous credential proof — a transparent digest over the
/// issuer key material and the signed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockNymProof {
    /// Hex-encoded `SHA256(key material || message)`.
    pub digest: String,
}

/// A mock issuer public key. The "key material" is an arbitrary byte
/// string; verification is deterministic recomputation, so the key carries
/// no real secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockIssuerKey {
    /// Hex-encoded key material bytes.
    pub material: String,
}

/// Deterministic mock credential verifier.
///
/// Interchangeable with a real backend via the [`CredentialVerifier`]
/// trait. Selective disclosure is rejected outright — the mock models only
/// the possession-proof case the recorder uses (empty attribute list,
/// disclosure count zero).
pub struct MockCredentialVerifier;

impl MockCredentialVerifier {
    /// Encode issuer key bytes in the mock's wire format.
    ///
    /// This is what an operator would pass to `ipkinit` when running
    /// against the mock verifier.
    pub fn issuer_key_bytes(material: &[u8]) -> Vec<u8> {
        let key = MockIssuerKey {
            material: hex::encode(material),
        };
        // Serializing a two-string struct cannot fail.
        serde_json::to_vec(&key).unwrap_or_default()
    }

    /// Mint proof bytes over `message` under the given issuer key bytes.
    ///
    /// Holder-side counterpart to `verify` for tests and demos: the
    /// returned bytes decode and verify against the same key bytes.
    pub fn issue(issuer_key_bytes: &[u8], message: &[u8]) -> Result<Vec<u8>, ProofDecodeError> {
        let key: MockIssuerKey = serde_json::from_slice(issuer_key_bytes)
            .map_err(|e| ProofDecodeError::MalformedIssuerKey(e.to_string()))?;
        let material = hex::decode(&key.material)
            .map_err(|e| ProofDecodeError::MalformedIssuerKey(e.to_string()))?;
        let proof = MockNymProof {
            digest: digest_hex(&material, message),
        };
        serde_json::to_vec(&proof).map_err(|e| ProofDecodeError::MalformedProof(e.to_string()))
    }
}

/// `hex(SHA256(material || message))`.
fn digest_hex(material: &[u8], message: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(material);
    hasher.update(message);
    hex::encode(hasher.finalize())
}

impl CredentialVerifier for MockCredentialVerifier {
    type Proof = MockNymProof;
    type IssuerKey = MockIssuerKey;

    fn decode_proof(&self, bytes: &[u8]) -> Result<Self::Proof, ProofDecodeError> {
        let proof: MockNymProof = serde_json::from_slice(bytes)
            .map_err(|e| ProofDecodeError::MalformedProof(e.to_string()))?;
        if proof.digest.len() != 64 || !proof.digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ProofDecodeError::MalformedProof(format!(
                "expected 64 hex digest chars, got {}",
                proof.digest.len()
            )));
        }
        Ok(proof)
    }

    fn decode_issuer_key(&self, bytes: &[u8]) -> Result<Self::IssuerKey, ProofDecodeError> {
        let key: MockIssuerKey = serde_json::from_slice(bytes)
            .map_err(|e| ProofDecodeError::MalformedIssuerKey(e.to_string()))?;
        if hex::decode(&key.material).is_err() {
            return Err(ProofDecodeError::MalformedIssuerKey(
                "material is not valid hex".to_string(),
            ));
        }
        Ok(key)
    }

    fn verify(
        &self,
        issuer_key: &Self::IssuerKey,
        proof: &Self::Proof,
        message: &[u8],
        disclosed: &[Vec<u8>],
        disclosure_count: usize,
    ) -> Result<(), VerifyError> {
        if !disclosed.is_empty() || disclosure_count != 0 {
            return Err(VerifyError::Rejected(
                "mock verifier does not support selective disclosure".to_string(),
            ));
        }
        let material = hex::decode(&issuer_key.material)
            .map_err(|e| VerifyError::Internal(format!("issuer key material: {e}")))?;
        let expected = digest_hex(&material, message);
        if proof.digest != expected {
            return Err(VerifyError::Rejected(
                "digest does not match issuer key and message".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MATERIAL: &[u8] = b"mock-issuer-material";

    fn key_and_proof(message: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let key = MockCredentialVerifier::issuer_key_bytes(MATERIAL);
        let proof = MockCredentialVerifier::issue(&key, message).unwrap();
        (key, proof)
    }

    #[test]
    fn issued_proof_verifies() {
        let verifier = MockCredentialVerifier;
        let (key_bytes, proof_bytes) = key_and_proof(b"hello ledger");
        let key = verifier.decode_issuer_key(&key_bytes).unwrap();
        let proof = verifier.decode_proof(&proof_bytes).unwrap();
        verifier
            .verify(&key, &proof, b"hello ledger", &[], 0)
            .unwrap();
    }

    #[test]
    fn verify_rejects_wrong_message() {
        let verifier = MockCredentialVerifier;
        let (key_bytes, proof_bytes) = key_and_proof(b"original");
        let key = verifier.decode_issuer_key(&key_bytes).unwrap();
        let proof = verifier.decode_proof(&proof_bytes).unwrap();
        let err = verifier
            .verify(&key, &proof, b"tampered", &[], 0)
            .unwrap_err();
        assert!(matches!(err, VerifyError::Rejected(_)));
    }

    #[test]
    fn verify_rejects_wrong_issuer_key() {
        let verifier = MockCredentialVerifier;
        let (_, proof_bytes) = key_and_proof(b"msg");
        let other_key_bytes = MockCredentialVerifier::issuer_key_bytes(b"different-material");
        let other_key = verifier.decode_issuer_key(&other_key_bytes).unwrap();
        let proof = verifier.decode_proof(&proof_bytes).unwrap();
        let err = verifier.verify(&other_key, &proof, b"msg", &[], 0).unwrap_err();
        assert!(matches!(err, VerifyError::Rejected(_)));
    }

    #[test]
    fn verify_rejects_selective_disclosure() {
        let verifier = MockCredentialVerifier;
        let (key_bytes, proof_bytes) = key_and_proof(b"msg");
        let key = verifier.decode_issuer_key(&key_bytes).unwrap();
        let proof = verifier.decode_proof(&proof_bytes).unwrap();
        let err = verifier
            .verify(&key, &proof, b"msg", &[b"attr".to_vec()], 1)
            .unwrap_err();
        assert!(matches!(err, VerifyError::Rejected(_)));
    }

    #[test]
    fn decode_proof_rejects_garbage() {
        let err = MockCredentialVerifier.decode_proof(b"not json").unwrap_err();
        assert!(matches!(err, ProofDecodeError::MalformedProof(_)));
    }

    #[test]
    fn decode_proof_rejects_short_digest() {
        let err = MockCredentialVerifier
            .decode_proof(br#"{"digest":"abcd"}"#)
            .unwrap_err();
        assert!(matches!(err, ProofDecodeError::MalformedProof(_)));
    }

    #[test]
    fn decode_issuer_key_rejects_non_hex_material() {
        let err = MockCredentialVerifier
            .decode_issuer_key(br#"{"material":"zz"}"#)
            .unwrap_err();
        assert!(matches!(err, ProofDecodeError::MalformedIssuerKey(_)));
    }

    proptest! {
        #[test]
        fn issue_verify_holds_for_any_message(message in proptest::collection::vec(any::<u8>(), 0..512)) {
            let verifier = MockCredentialVerifier;
            let (key_bytes, proof_bytes) = key_and_proof(&message);
            let key = verifier.decode_issuer_key(&key_bytes).unwrap();
            let proof = verifier.decode_proof(&proof_bytes).unwrap();
            prop_assert!(verifier.verify(&key, &proof, &message, &[], 0).is_ok());
        }
    }
}
