//! # Ledger Record Wire Types
//!
//! The envelope persisted by the credential-gated path. A record pairs the
//! original proof bytes with the content they authorized, serialized as
//! self-describing JSON under the committing transaction's id.
//!
//! ## Wire Format
//!
//! ```json
//! { "nymcred": "<hex proof bytes>", "content": "<text>" }
//! ```
//!
//! The proof is stored exactly as submitted — never in decoded form — so a
//! later reader can re-run verification against the issuer key that was in
//! effect at commit time. Records are immutable once committed; the keying
//! scheme (one platform tx id per invocation) makes overwrites impossible
//! through this interface.

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// A committed credential-gated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// The anonymous credential proof exactly as the caller submitted it.
    #[serde(rename = "nymcred", with = "hex_bytes")]
    pub nym_cred: Vec<u8>,

    /// The recorded content.
    pub content: String,
}

impl ContentRecord {
    /// Serialize to the JSON wire format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ContractError> {
        serde_json::to_vec(self)
            .map_err(|e| ContractError::Decode(format!("failed to serialize record: {e}")))
    }

    /// Deserialize from the JSON wire format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContractError> {
        serde_json::from_slice(bytes)
            .map_err(|e| ContractError::Decode(format!("failed to deserialize record: {e}")))
    }
}

/// Serde helper for hex-encoding byte fields in JSON.
mod hex_bytes {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        serializer.serialize_str(&hex)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.len() % 2 != 0 {
            return Err(serde::de::Error::custom("odd-length hex string"));
        }
        // Iterate over byte pairs rather than slicing the str, so non-ASCII
        // input is rejected as invalid hex instead of hitting a char
        // boundary.
        s.as_bytes()
            .chunks(2)
            .map(|pair| {
                std::str::from_utf8(pair)
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(|| serde::de::Error::custom("invalid hex byte"))
            })
            .collect()
    }
}
