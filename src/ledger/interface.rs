//! Static ledger interface description.
//!
//! The contract's interface is known at build time, so it is a hand-written
//! constant rather than a document loaded at runtime. Consumed, never
//! modified.

use crate::error::BindingError;

/// Signature of one contract method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSig {
    pub name: &'static str,
    pub inputs: &'static [&'static str],
    pub output: Option<&'static str>,
}

/// The set of contract methods this SDK consumes.
#[derive(Debug, Clone, Copy)]
pub struct LedgerInterface {
    pub methods: &'static [MethodSig],
}

/// Methods every ledger binding requires.
pub(crate) const REQUIRED_METHODS: [&str; 3] = ["getBalance", "deposit", "withdraw"];

/// Interface of the deployed teller ledger contract.
pub const LEDGER_INTERFACE: LedgerInterface = LedgerInterface {
    methods: &[
        MethodSig {
            name: "getBalance",
            inputs: &[],
            output: Some("uint256"),
        },
        MethodSig {
            name: "deposit",
            inputs: &["uint256"],
            output: None,
        },
        MethodSig {
            name: "withdraw",
            inputs: &["uint256"],
            output: None,
        },
    ],
};

impl LedgerInterface {
    pub fn method(&self, name: &str) -> Option<&MethodSig> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Verify the description carries every method the SDK calls.
    pub(crate) fn validate(&self) -> Result<(), BindingError> {
        for required in REQUIRED_METHODS {
            if self.method(required).is_none() {
                return Err(BindingError::MissingMethod { method: required });
            }
        }
        Ok(())
    }
}
