//! Accounts sub-client — detect the provider, observe or request the active
//! account, and establish the ledger binding.
//!
//! State machine: `Disconnected → (provider detected) → Detected →
//! (account authorized) → Connected`. Success is terminal; nothing here
//! transitions back to `Disconnected`.

use std::sync::Arc;

use crate::client::TellerClient;
use crate::domain::session::ConnectionState;
use crate::error::{ProviderError, TellerError};
use crate::ledger::LedgerBinding;
use crate::shared::Address;

/// Sub-client for account connection.
pub struct Accounts<'a> {
    pub(crate) client: &'a TellerClient,
}

impl<'a> Accounts<'a> {
    /// Record whether a provider is present in this environment.
    ///
    /// Returns `true` and moves a disconnected session to `Detected` when a
    /// provider handle exists. No prompt, no other side effect.
    pub async fn detect(&self) -> bool {
        if self.client.provider.is_none() {
            return false;
        }

        let mut session = self.client.session.write().await;
        if session.connection == ConnectionState::Disconnected {
            session.connection = ConnectionState::Detected;
        }
        true
    }

    /// Ask the provider for an already-authorized account without prompting.
    ///
    /// When one exists it becomes the session account and the ledger is
    /// bound; returns `None` (leaving state untouched) otherwise.
    pub async fn active(&self) -> Result<Option<Address>, TellerError> {
        let provider = self.provider()?;

        let accounts = provider.get_accounts().await?;
        match accounts.into_iter().next() {
            Some(account) => {
                self.adopt_account(provider, account.clone()).await?;
                Ok(Some(account))
            }
            None => Ok(None),
        }
    }

    /// Prompt the user to authorize an account.
    ///
    /// Fails with [`ProviderError::Missing`] when no provider handle exists
    /// and [`ProviderError::Rejected`] when the user declines. On success the
    /// session is `Connected` and the ledger binding is established.
    pub async fn connect(&self) -> Result<Address, TellerError> {
        let provider = self.provider()?;

        let accounts = provider.request_accounts().await?;
        let account = accounts
            .into_iter()
            .next()
            .ok_or(ProviderError::Rejected)?;

        self.adopt_account(provider, account.clone()).await?;
        tracing::debug!(account = %account, "account connected");
        Ok(account)
    }

    fn provider(&self) -> Result<&Arc<dyn crate::provider::WalletProvider>, TellerError> {
        self.client
            .provider
            .as_ref()
            .ok_or(TellerError::Provider(ProviderError::Missing))
    }

    /// Store the account, mark the session connected, and bind the ledger
    /// if this session has no binding yet.
    async fn adopt_account(
        &self,
        provider: &Arc<dyn crate::provider::WalletProvider>,
        account: Address,
    ) -> Result<(), TellerError> {
        let mut session = self.client.session.write().await;
        session.account = Some(account.clone());
        session.connection = ConnectionState::Connected;

        if session.binding.is_none() {
            let binding = LedgerBinding::bind(
                provider,
                account,
                self.client.contract_address.clone(),
                self.client.interface,
            )?;
            session.binding = Some(Arc::new(binding));
        }
        Ok(())
    }
}
