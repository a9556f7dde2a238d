//! # nymledger-contract — Entry-Point Surface
//!
//! The contract the hosting platform invokes: a named entry point with a
//! string argument list in, a success payload or typed error out.
//!
//! | Entry point     | Module       | Behavior                                  |
//! |-----------------|--------------|-------------------------------------------|
//! | `init`          | [`dispatch`] | Lifecycle no-op, always succeeds          |
//! | `ipkinit`       | [`gated`]    | Store/overwrite the issuer public key     |
//! | `idemix`        | [`gated`]    | Verify a credential proof, commit content |
//! | `queryIdemix`   | [`query`]    | Fetch a gated record by transaction id    |
//! | `recordContent` | [`public`]   | Commit content with no credential gate    |
//! | `queryContent`  | [`query`]    | Fetch public content by transaction id    |
//!
//! Each invocation is a single synchronous unit: validate → (gated path)
//! verify → read/write state → respond. Any failure is terminal; the
//! platform discards the invocation's write set, so there is no rollback
//! logic here.

pub mod dispatch;
pub mod gated;
pub mod public;
pub mod query;

use nymledger_core::ContractError;
use nymledger_cred::CredentialVerifier;
use nymledger_state::{LedgerState, StateError};

use crate::dispatch::ContractRouter;

/// Success payload of an entry point: optional bytes (e.g. the committed
/// record's key). Errors travel separately as [`ContractError`].
pub type Payload = Option<Vec<u8>>;

/// The ledger contract: recorders and queries over a platform-supplied
/// [`LedgerState`] and an opaque [`CredentialVerifier`].
pub struct NymLedgerContract<L, V> {
    ledger: L,
    verifier: V,
    router: ContractRouter<L, V>,
}

impl<L: LedgerState, V: CredentialVerifier> NymLedgerContract<L, V> {
    pub fn new(ledger: L, verifier: V) -> Self {
        Self {
            ledger,
            verifier,
            router: ContractRouter::new(),
        }
    }

    /// Dispatch a named entry point with its string argument list.
    ///
    /// Unknown names and wrong arities are rejected with
    /// [`ContractError::Argument`] before any handler runs.
    pub fn invoke(&self, function: &str, args: &[String]) -> Result<Payload, ContractError> {
        self.router.dispatch(self, function, args)
    }

    /// Lifecycle entry point invoked by the platform on instantiation.
    /// Takes no action; all state is created lazily by the recorders.
    pub fn init(&self) -> Result<Payload, ContractError> {
        Ok(None)
    }

    pub(crate) fn ledger(&self) -> &L {
        &self.ledger
    }

    pub(crate) fn verifier(&self) -> &V {
        &self.verifier
    }
}

/// Map a state access fault into the contract taxonomy.
pub(crate) fn storage_error(err: StateError) -> ContractError {
    ContractError::Storage(err.to_string())
}
