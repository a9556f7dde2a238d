//! # Contract Error Taxonomy
//!
//! The single error type surfaced by every entry point. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Every failure is terminal for its invocation: nothing is retried, and
//! the hosting platform discards the invocation's write set on error, so
//! no partial state survives. Each variant carries a human-readable
//! message, and [`ContractError::kind`] exposes a stable machine-readable
//! code so callers dispatch on the variant rather than matching message
//! strings.

use thiserror::Error;

/// Top-level error type for all ledger entry points.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Wrong argument count, an empty argument, or an unknown function name.
    #[error("argument error: {0}")]
    Argument(String),

    /// Malformed proof or issuer key bytes.
    #[error("decode error: {0}")]
    Decode(String),

    /// Ledger state access fault during get or put.
    #[error("storage error: {0}")]
    Storage(String),

    /// The requested key (or the issuer key singleton) has never been written.
    #[error("not found: {0}")]
    NotFound(String),

    /// The credential verifier rejected the proof.
    #[error("verification failed: {0}")]
    Verification(String),
}

impl ContractError {
    /// Stable machine-readable code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Argument(_) => "ARGUMENT_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Verification(_) => "VERIFICATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_stable_per_variant() {
        assert_eq!(ContractError::Argument("x".into()).kind(), "ARGUMENT_ERROR");
        assert_eq!(ContractError::Decode("x".into()).kind(), "DECODE_ERROR");
        assert_eq!(ContractError::Storage("x".into()).kind(), "STORAGE_ERROR");
        assert_eq!(ContractError::NotFound("x".into()).kind(), "NOT_FOUND");
        assert_eq!(
            ContractError::Verification("x".into()).kind(),
            "VERIFICATION_ERROR"
        );
    }

    #[test]
    fn display_includes_message() {
        let err = ContractError::Verification("pseudonym mismatch".into());
        assert_eq!(err.to_string(), "verification failed: pseudonym mismatch");
    }
}
