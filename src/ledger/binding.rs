//! Session-scoped contract binding.

use std::sync::Arc;

use crate::error::BindingError;
use crate::ledger::interface::LedgerInterface;
use crate::ledger::LedgerContract;
use crate::provider::WalletProvider;
use crate::shared::Address;

/// An immutable (contract address, interface, signer) tuple bound into a
/// callable handle. Constructed once per session, after an account is
/// available; lives for the rest of the session.
pub struct LedgerBinding {
    address: Address,
    signer: Address,
    contract: Arc<dyn LedgerContract>,
}

impl LedgerBinding {
    /// Bind the contract at `address` to the provider's signer.
    ///
    /// Validates the interface description and constructs the typed handle.
    /// Pure construction — no network call is made here.
    pub fn bind(
        provider: &Arc<dyn WalletProvider>,
        signer: Address,
        address: Address,
        interface: &LedgerInterface,
    ) -> Result<Self, BindingError> {
        interface.validate()?;
        let contract = provider.contract(&address, interface)?;

        tracing::debug!(contract = %address, signer = %signer, "ledger binding established");

        Ok(Self {
            address,
            signer,
            contract,
        })
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn signer(&self) -> &Address {
        &self.signer
    }

    pub fn contract(&self) -> &Arc<dyn LedgerContract> {
        &self.contract
    }
}

impl std::fmt::Debug for LedgerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerBinding")
            .field("address", &self.address)
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}
