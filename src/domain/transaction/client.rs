//! Transactions sub-client — validation, submission, confirmation.
//!
//! `submit` executes its steps in a strict order: parse, convert to native
//! units, check the limit, check readiness, scale, invoke, await
//! confirmation, refresh. A request that fails validation never reaches the
//! chain. Submissions for one session are serialized: the submit lock is
//! held from contract invocation through the post-confirmation refresh, so
//! a second submission cannot interleave with an unconfirmed first one.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::client::TellerClient;
use crate::domain::transaction::Receipt;
use crate::error::{AmountError, NotReadyReason, RateError, TellerError};
use crate::ledger::LedgerBinding;
use crate::shared::{currency, parse_amount, scaling, AmountUnit, Direction};

/// Sub-client for deposit/withdraw submissions.
pub struct Transactions<'a> {
    pub(crate) client: &'a TellerClient,
}

impl<'a> Transactions<'a> {
    /// Submit a deposit of `amount` denominated in `unit`.
    pub async fn deposit(&self, amount: &str, unit: AmountUnit) -> Result<Receipt, TellerError> {
        self.submit(Direction::Deposit, amount, unit).await
    }

    /// Submit a withdrawal of `amount` denominated in `unit`.
    pub async fn withdraw(&self, amount: &str, unit: AmountUnit) -> Result<Receipt, TellerError> {
        self.submit(Direction::Withdraw, amount, unit).await
    }

    /// Validate and submit a transfer, suspending until confirmation.
    pub async fn submit(
        &self,
        direction: Direction,
        amount_text: &str,
        unit: AmountUnit,
    ) -> Result<Receipt, TellerError> {
        // 1. Parse the user-entered amount.
        let entered = parse_amount(amount_text)?;

        // 2. Native-unit equivalent. Fiat amounts need a session rate.
        let native = match unit {
            AmountUnit::Native => entered,
            AmountUnit::Fiat => {
                let rate = self
                    .client
                    .session
                    .read()
                    .await
                    .rate
                    .as_ref()
                    .map(|r| r.fiat_per_native)
                    .ok_or(TellerError::Rate(RateError::Unavailable))?;
                currency::to_native(entered, rate)?
            }
        };

        // 3. Limit check, before anything touches the chain.
        let limit = {
            let session = self.client.session.read().await;
            session.limits.for_direction(direction)
        };
        if native > limit {
            return Err(TellerError::Amount(AmountError::LimitExceeded {
                direction,
                requested: native,
                limit,
            }));
        }

        // 4. Readiness.
        let binding = self.require_ready().await?;

        // 5. Scale to the contract's smallest denomination.
        let base_amount = scaling::to_base_units(native).map_err(|e| {
            TellerError::Amount(AmountError::Invalid {
                input: amount_text.to_string(),
                reason: e.to_string(),
            })
        })?;

        // 6. Invoke and await confirmation, serialized per session.
        let _guard = self.client.submit_lock.lock().await;

        tracing::debug!(%direction, base_amount, "submitting transaction");
        let pending = match direction {
            Direction::Deposit => binding.contract().deposit(base_amount).await?,
            Direction::Withdraw => binding.contract().withdraw(base_amount).await?,
        };
        let confirmation = pending.confirmed().await?;

        // 7. Confirmed: refresh the balance. The transaction already landed,
        // so a failed refresh is reported but does not fail the receipt.
        if let Err(e) = self.client.balances().refresh().await {
            tracing::warn!("post-confirmation balance refresh failed: {}", e);
        }

        Ok(Receipt {
            direction,
            native_amount: native,
            base_amount,
            tx_hash: confirmation.tx_hash,
            confirmed_at: confirmation.confirmed_at,
        })
    }

    /// A submission needs a connected account and a bound ledger.
    async fn require_ready(&self) -> Result<Arc<LedgerBinding>, TellerError> {
        let session = self.client.session.read().await;
        if session.account.is_none() {
            return Err(TellerError::NotReady(NotReadyReason::NoAccount));
        }
        session
            .binding
            .clone()
            .ok_or(TellerError::NotReady(NotReadyReason::NoBinding))
    }

    /// The limit applying to `direction`, in native whole units.
    pub async fn limit(&self, direction: Direction) -> Decimal {
        self.client
            .session
            .read()
            .await
            .limits
            .for_direction(direction)
    }
}
