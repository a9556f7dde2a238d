//! # nymledger-core — Foundational Types
//!
//! Leaf crate of the nymledger workspace. Defines the types every other
//! crate builds on:
//!
//! - **Errors** ([`error`]): the `ContractError` taxonomy shared by all
//!   entry points, with machine-readable error kinds instead of free-text
//!   matching.
//!
//! - **Transaction ids** ([`txid`]): the `TxId` newtype — the
//!   platform-assigned invocation identifier that doubles as the storage
//!   key for every committed record.
//!
//! - **Records** ([`record`]): the `ContentRecord` envelope persisted by
//!   the credential-gated path, with its self-describing JSON wire format.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nymledger-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod record;
pub mod txid;

pub use error::ContractError;
pub use record::ContentRecord;
pub use txid::TxId;
