//! # Entry-Point Dispatch
//!
//! A registered mapping from operation name to typed handler. Unknown
//! names are rejected — there is no default-success path — and every
//! handler's arity is checked before it touches state.

use std::collections::HashMap;

use nymledger_core::ContractError;
use nymledger_cred::CredentialVerifier;
use nymledger_state::LedgerState;

use crate::{NymLedgerContract, Payload};

type Handler<L, V> = fn(&NymLedgerContract<L, V>, &[String]) -> Result<Payload, ContractError>;

/// Name → handler table for one contract type.
pub struct ContractRouter<L, V> {
    handlers: HashMap<&'static str, Handler<L, V>>,
}

impl<L: LedgerState, V: CredentialVerifier> ContractRouter<L, V> {
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Handler<L, V>> = HashMap::new();
        handlers.insert("init", |c, _args| c.init());
        handlers.insert("ipkinit", |c, args| {
            let [key] = expect_args::<1>("ipkinit", args)?;
            c.ipkinit(key.as_bytes())
        });
        handlers.insert("idemix", |c, args| {
            let [proof, message] = expect_args::<2>("idemix", args)?;
            c.idemix(proof.as_bytes(), message.as_bytes())
        });
        handlers.insert("queryIdemix", |c, args| {
            let [key] = expect_args::<1>("queryIdemix", args)?;
            c.query_idemix(key)
        });
        handlers.insert("recordContent", |c, args| {
            let [content] = expect_args::<1>("recordContent", args)?;
            c.record_content(content.as_bytes())
        });
        handlers.insert("queryContent", |c, args| {
            let [key] = expect_args::<1>("queryContent", args)?;
            c.query_content(key)
        });
        Self { handlers }
    }

    /// Look up and run the handler registered under `function`.
    pub fn dispatch(
        &self,
        contract: &NymLedgerContract<L, V>,
        function: &str,
        args: &[String],
    ) -> Result<Payload, ContractError> {
        let handler = self.handlers.get(function).ok_or_else(|| {
            tracing::warn!(function, "rejected unknown function");
            ContractError::Argument(format!("unknown function: {function}"))
        })?;
        handler(contract, args)
    }

    /// Registered operation names, for introspection in tests.
    #[cfg(test)]
    pub(crate) fn operations(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl<L: LedgerState, V: CredentialVerifier> Default for ContractRouter<L, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check arity and return the arguments as a fixed-size view.
fn expect_args<'a, const N: usize>(
    function: &str,
    args: &'a [String],
) -> Result<&'a [String; N], ContractError> {
    args.try_into().map_err(|_| {
        ContractError::Argument(format!(
            "{} expects {} argument(s), got {}",
            function,
            N,
            args.len()
        ))
    })
}
