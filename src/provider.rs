//! The account-provider seam.
//!
//! A [`WalletProvider`] models the environment-injected signing component:
//! it can list already-authorized accounts, prompt the user to authorize one,
//! and hand out typed contract handles scoped to an address. Absence of a
//! provider is represented by the client simply holding `None` — detectable
//! without an error, matching injected-provider semantics.
//!
//! Every provider call resolves to a determinate success or a typed failure;
//! there are no fire-and-forget callbacks at this seam.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{BindingError, ProviderError};
use crate::ledger::interface::LedgerInterface;
use crate::ledger::LedgerContract;
use crate::shared::Address;

/// Environment-injected account provider.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Accounts the user has already authorized, in provider order.
    /// Never prompts.
    async fn get_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Prompt the user to authorize account access.
    ///
    /// An empty list means the user declined without the provider raising
    /// a distinct rejection.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Construct a typed contract handle backed by this provider's signer.
    /// Pure construction — no network call.
    fn contract(
        &self,
        address: &Address,
        interface: &LedgerInterface,
    ) -> Result<Arc<dyn LedgerContract>, BindingError>;
}
