//! # Transaction Identifier Newtype
//!
//! The platform assigns every invocation a unique transaction id, identical
//! across all nodes validating the same transaction. The id is also the
//! storage key for whatever that invocation commits, so any observer can
//! reconstruct a record's key from the committing transaction alone.

use crate::error::ContractError;

/// A platform-assigned transaction identifier.
///
/// Non-empty by construction. Because the platform allocates these ids,
/// two concurrent invocations never share one — and therefore never target
/// the same storage key. Ids never appear on the wire themselves: records
/// are stored *under* them, and commit payloads carry the raw id bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxId(String);

impl TxId {
    /// Wrap a platform-assigned transaction id. Rejects empty strings.
    pub fn new(id: impl Into<String>) -> Result<Self, ContractError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ContractError::Argument(
                "transaction id must be non-empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// The id as a state key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as the success payload bytes of a commit.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone().into_bytes()
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TxId {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
