//! # nymledger-state — Ledger State Abstraction
//!
//! The keyed persistent state the hosting platform supplies to every
//! invocation, expressed as a trait so contract code is independent of the
//! backing platform.
//!
//! - **Trait** ([`ledger`]): [`LedgerState`] — `get_state` / `put_state` /
//!   `current_tx_id`, the full collaborator surface the recorders consume.
//!
//! - **Issuer key view** ([`issuer_key`]): [`IssuerKeyStore`] — the
//!   process-wide issuer public key singleton, one fixed entry in whatever
//!   store backs the trait.
//!
//! - **Mock** ([`memory`]): [`InMemoryLedger`] — DashMap-backed store with
//!   scriptable transaction ids and per-key fault injection, standing in
//!   for the platform (and its commit-time conflict behavior) in tests.
//!
//! Atomic commit and multi-version conflict detection belong to the
//! platform, not this crate: a real backend applies an invocation's whole
//! write set or none of it, so contract code performs no rollback logic.

pub mod issuer_key;
pub mod ledger;
pub mod memory;

pub use issuer_key::{IssuerKeyStore, ISSUER_PUBLIC_KEY_KEY};
pub use ledger::{LedgerState, StateError};
pub use memory::InMemoryLedger;
