//! # nymledger-cred — Anonymous Credential Verification
//!
//! Defines the trait-based credential verifier abstraction and the
//! deterministic mock implementation used in development and tests.
//!
//! ## Architecture
//!
//! - **Traits** (`verifier.rs`): The [`CredentialVerifier`] trait is the
//!   opaque proof-system boundary. The recorder never looks inside a proof
//!   or an issuer key — it hands the verifier the raw bytes and acts on
//!   accept/reject. Real idemix-style backends slot in behind this trait.
//!
//! - **Mock** (`mock.rs`): [`MockCredentialVerifier`] produces transparent
//!   SHA-256-based "proofs" that are verifiable but provide **no
//!   zero-knowledge guarantees**. It exists so the gated commit path can be
//!   exercised end to end without a real proof system.
//!
//! ## Crate Policy
//!
//! - Depends only on `serde`/`serde_json`, `sha2`, `hex`, `thiserror`.
//! - No `unsafe` code.

pub mod mock;
pub mod verifier;

pub use mock::MockCredentialVerifier;
pub use verifier::{CredentialVerifier, ProofDecodeError, VerifyError};
