//! # Credential Verifier Trait
//!
//! The abstract interface to the anonymous credential proof system. All
//! implementations (mock, real idemix-style backends) must satisfy this
//! trait.
//!
//! ## Security Invariant
//!
//! The trait requires `Send + Sync` bounds for safe concurrent access.
//! Decoding and verification are pure functions with no side effects — a
//! verifier never touches ledger state.

use thiserror::Error;

/// Error decoding caller-supplied proof or issuer key bytes.
#[derive(Error, Debug)]
pub enum ProofDecodeError {
    /// The proof bytes do not parse as this verifier's proof structure.
    #[error("malformed proof: {0}")]
    MalformedProof(String),
    /// The issuer key bytes do not parse as this verifier's key structure.
    #[error("malformed issuer key: {0}")]
    MalformedIssuerKey(String),
}

/// Error during proof verification.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// The verifier rejected the proof, with its reason.
    #[error("proof rejected: {0}")]
    Rejected(String),
    /// The verifier could not complete verification at all.
    #[error("verifier error: {0}")]
    Internal(String),
}

/// Abstract interface for an anonymous credential proof system.
///
/// Each implementation provides its own proof and issuer key types and owns
/// their wire encodings. The caller only ever holds the original bytes and
/// the opaque decoded values, so mock and real implementations are
/// interchangeable at compile time.
pub trait CredentialVerifier: Send + Sync {
    /// The decoded proof type.
    type Proof: Send + Sync;
    /// The decoded issuer public key type.
    type IssuerKey: Send + Sync;

    /// Decode caller-submitted proof bytes into this verifier's proof
    /// structure.
    fn decode_proof(&self, bytes: &[u8]) -> Result<Self::Proof, ProofDecodeError>;

    /// Decode stored issuer public key bytes into this verifier's key
    /// structure.
    fn decode_issuer_key(&self, bytes: &[u8]) -> Result<Self::IssuerKey, ProofDecodeError>;

    /// Verify a proof over `message` against the issuer key.
    ///
    /// `disclosed` carries the attribute values the holder chose to reveal
    /// and `disclosure_count` how many positions the bitmask covers. The
    /// gated recorder always passes an empty list and a count of zero —
    /// nothing beyond credential possession is disclosed.
    fn verify(
        &self,
        issuer_key: &Self::IssuerKey,
        proof: &Self::Proof,
        message: &[u8],
        disclosed: &[Vec<u8>],
        disclosure_count: usize,
    ) -> Result<(), VerifyError>;
}
