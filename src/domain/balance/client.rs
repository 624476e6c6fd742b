//! Balances sub-client — the only writer of the session balance.

use chrono::Utc;

use crate::client::TellerClient;
use crate::domain::balance::Balance;
use crate::error::{NotReadyReason, TellerError};
use crate::shared::{currency, scaling};

/// Sub-client for balance reads.
pub struct Balances<'a> {
    pub(crate) client: &'a TellerClient,
}

impl<'a> Balances<'a> {
    /// Read the on-chain balance and recompute the display record.
    ///
    /// The rate is fetched only after the balance read succeeds. A failed
    /// rate fetch degrades the result: the native amount is still returned
    /// with `fiat: None`, and the previous session rate is kept for later
    /// fiat-denominated submissions.
    pub async fn refresh(&self) -> Result<Balance, TellerError> {
        let binding = {
            let session = self.client.session.read().await;
            session
                .binding
                .clone()
                .ok_or(TellerError::NotReady(NotReadyReason::NoBinding))?
        };

        let base_units = binding.contract().get_balance().await?;
        let native = scaling::from_base_units(base_units).map_err(|e| {
            TellerError::Transaction(crate::error::TransactionError::Provider(e.to_string()))
        })?;

        let rate = match self.client.rate_source.fetch_rate().await {
            Ok(rate) => Some(rate),
            Err(e) => {
                tracing::warn!("rate fetch failed, fiat display unavailable: {}", e);
                None
            }
        };

        let fiat = match &rate {
            Some(r) if native > rust_decimal::Decimal::ZERO => {
                Some(currency::to_fiat(native, r.fiat_per_native)?)
            }
            Some(_) => Some(rust_decimal::Decimal::ZERO),
            None => None,
        };

        let balance = Balance {
            base_units,
            native,
            fiat,
            refreshed_at: Utc::now(),
        };

        let mut session = self.client.session.write().await;
        if let Some(rate) = rate {
            session.rate = Some(rate);
        }
        session.balance = Some(balance.clone());

        tracing::debug!(
            base_units,
            fiat_available = balance.fiat.is_some(),
            "balance refreshed"
        );
        Ok(balance)
    }

    /// The last refreshed balance, if any. Stale between refreshes.
    pub async fn current(&self) -> Option<Balance> {
        self.client.session.read().await.balance.clone()
    }
}
