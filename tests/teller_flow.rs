//! Integration tests for the full teller pipeline.
//!
//! These tests run entirely in-process against mock implementations of the
//! wallet provider, the ledger contract, and the rate source, and exercise
//! the connect → bind → refresh → submit → confirm lifecycle.

use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;

use teller_sdk::prelude::*;

const CONTRACT: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
const USER: &str = "0x00000000000000000000000000000000000000aa";

/// One native whole unit in base units.
const ONE: u128 = 1_000_000_000_000_000_000;

// ─── Mock ledger ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct MockLedgerState {
    balance: Mutex<u128>,
    submissions: AtomicU32,
    fail_confirmation: AtomicBool,
}

struct MockContract(Arc<MockLedgerState>);

#[async_trait]
impl LedgerContract for MockContract {
    async fn get_balance(&self) -> Result<u128, TransactionError> {
        Ok(*self.0.balance.lock().unwrap())
    }

    async fn deposit(
        &self,
        base_amount: u128,
    ) -> Result<Box<dyn PendingTransaction>, TransactionError> {
        self.0.submissions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockPending {
            state: self.0.clone(),
            delta: base_amount as i128,
        }))
    }

    async fn withdraw(
        &self,
        base_amount: u128,
    ) -> Result<Box<dyn PendingTransaction>, TransactionError> {
        self.0.submissions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MockPending {
            state: self.0.clone(),
            delta: -(base_amount as i128),
        }))
    }
}

struct MockPending {
    state: Arc<MockLedgerState>,
    delta: i128,
}

#[async_trait]
impl PendingTransaction for MockPending {
    async fn confirmed(self: Box<Self>) -> Result<TxConfirmation, TransactionError> {
        if self.state.fail_confirmation.load(Ordering::SeqCst) {
            return Err(TransactionError::Reverted {
                reason: "insufficient funds".to_string(),
            });
        }
        let mut balance = self.state.balance.lock().unwrap();
        *balance = if self.delta >= 0 {
            *balance + self.delta as u128
        } else {
            balance.saturating_sub(self.delta.unsigned_abs())
        };
        Ok(TxConfirmation::new(Some("0xfeedbeef".to_string())))
    }
}

// ─── Mock provider ───────────────────────────────────────────────────────────

struct MockProvider {
    authorized: Vec<Address>,
    reject: bool,
    ledger: Arc<MockLedgerState>,
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn get_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        Ok(self.authorized.clone())
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        if self.reject {
            return Err(ProviderError::Rejected);
        }
        Ok(vec![Address::parse(USER).unwrap()])
    }

    fn contract(
        &self,
        _address: &Address,
        _interface: &LedgerInterface,
    ) -> Result<Arc<dyn LedgerContract>, BindingError> {
        Ok(Arc::new(MockContract(self.ledger.clone())))
    }
}

// ─── Mock rate sources ───────────────────────────────────────────────────────

struct FixedRate(Decimal);

#[async_trait]
impl RateSource for FixedRate {
    async fn fetch_rate(&self) -> Result<ExchangeRate, RateError> {
        ExchangeRate::new(self.0)
    }
}

struct UnreachableFeed;

#[async_trait]
impl RateSource for UnreachableFeed {
    async fn fetch_rate(&self) -> Result<ExchangeRate, RateError> {
        Err(RateError::Malformed {
            detail: "connection refused".to_string(),
        })
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn ledger_with_balance(base_units: u128) -> Arc<MockLedgerState> {
    let state = Arc::new(MockLedgerState::default());
    *state.balance.lock().unwrap() = base_units;
    state
}

fn client(ledger: &Arc<MockLedgerState>, rate: Arc<dyn RateSource>) -> TellerClient {
    TellerClient::builder()
        .provider(Arc::new(MockProvider {
            authorized: Vec::new(),
            reject: false,
            ledger: ledger.clone(),
        }))
        .rate_source(rate)
        .contract_address(CONTRACT)
        .build()
        .unwrap()
}

async fn connected_client(ledger: &Arc<MockLedgerState>, rate: Arc<dyn RateSource>) -> TellerClient {
    let client = client(ledger, rate);
    client.accounts().connect().await.unwrap();
    client
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ─── Connection ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn connect_binds_ledger_and_reaches_connected() {
    let ledger = ledger_with_balance(0);
    let client = client(&ledger, Arc::new(FixedRate(dec("3000"))));

    assert!(client.accounts().detect().await);
    assert_eq!(client.snapshot().await.connection, ConnectionState::Detected);

    let account = client.accounts().connect().await.unwrap();
    assert_eq!(account.as_str(), USER);

    let snapshot = client.snapshot().await;
    assert_eq!(snapshot.connection, ConnectionState::Connected);
    assert_eq!(snapshot.account, Some(Address::parse(USER).unwrap()));
    assert_eq!(snapshot.contract, Some(Address::parse(CONTRACT).unwrap()));
}

#[tokio::test]
async fn active_account_adopted_without_prompting() {
    let ledger = ledger_with_balance(0);
    let client = TellerClient::builder()
        .provider(Arc::new(MockProvider {
            authorized: vec![Address::parse(USER).unwrap()],
            reject: true, // a prompt would fail; active() must not prompt
            ledger: ledger.clone(),
        }))
        .rate_source(Arc::new(FixedRate(dec("3000"))))
        .contract_address(CONTRACT)
        .build()
        .unwrap();

    let account = client.accounts().active().await.unwrap();
    assert_eq!(account, Some(Address::parse(USER).unwrap()));
    assert_eq!(client.snapshot().await.connection, ConnectionState::Connected);
}

#[tokio::test]
async fn missing_provider_fails_connect_then_submit_not_ready() {
    let client = TellerClient::builder()
        .rate_source(Arc::new(FixedRate(dec("3000"))))
        .contract_address(CONTRACT)
        .build()
        .unwrap();

    assert!(!client.accounts().detect().await);
    let err = client.accounts().connect().await.unwrap_err();
    assert!(matches!(
        err,
        TellerError::Provider(ProviderError::Missing)
    ));

    let err = client
        .transactions()
        .deposit("1", AmountUnit::Native)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TellerError::NotReady(NotReadyReason::NoAccount)
    ));
}

#[tokio::test]
async fn user_rejection_surfaces_as_rejected() {
    let ledger = ledger_with_balance(0);
    let client = TellerClient::builder()
        .provider(Arc::new(MockProvider {
            authorized: Vec::new(),
            reject: true,
            ledger,
        }))
        .rate_source(Arc::new(FixedRate(dec("3000"))))
        .contract_address(CONTRACT)
        .build()
        .unwrap();

    let err = client.accounts().connect().await.unwrap_err();
    assert!(matches!(
        err,
        TellerError::Provider(ProviderError::Rejected)
    ));
}

// ─── Balance refresh ─────────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_combines_balance_and_rate() {
    let ledger = ledger_with_balance(2 * ONE);
    let client = connected_client(&ledger, Arc::new(FixedRate(dec("3000")))).await;

    let balance = client.balances().refresh().await.unwrap();
    assert_eq!(balance.base_units, 2 * ONE);
    assert_eq!(balance.native, dec("2"));
    assert_eq!(balance.fiat, Some(dec("6000.00")));

    let snapshot = client.snapshot().await;
    assert_eq!(snapshot.rate.unwrap().fiat_per_native, dec("3000"));
}

#[tokio::test]
async fn refresh_with_unreachable_feed_degrades_fiat() {
    let ledger = ledger_with_balance(3 * ONE / 2);
    let client = connected_client(&ledger, Arc::new(UnreachableFeed)).await;

    let balance = client.balances().refresh().await.unwrap();
    assert_eq!(balance.native, dec("1.5"));
    assert_eq!(balance.fiat, None, "fiat must be unavailable, not stale or zero");

    // No rate ever landed in the session.
    assert!(client.snapshot().await.rate.is_none());
}

#[tokio::test]
async fn refresh_without_binding_is_not_ready() {
    let ledger = ledger_with_balance(0);
    let client = client(&ledger, Arc::new(FixedRate(dec("3000"))));

    let err = client.balances().refresh().await.unwrap_err();
    assert!(matches!(
        err,
        TellerError::NotReady(NotReadyReason::NoBinding)
    ));
}

// ─── Submission pipeline ─────────────────────────────────────────────────────

#[tokio::test]
async fn deposit_native_within_limit_confirms_and_refreshes() {
    // Scenario: rate 3000 fiat/native, prior balance 1 native, deposit 0.5.
    let ledger = ledger_with_balance(ONE);
    let client = connected_client(&ledger, Arc::new(FixedRate(dec("3000")))).await;

    let receipt = client
        .transactions()
        .deposit("0.5", AmountUnit::Native)
        .await
        .unwrap();

    assert_eq!(receipt.direction, Direction::Deposit);
    assert_eq!(receipt.native_amount, dec("0.5"));
    assert_eq!(receipt.base_amount, ONE / 2);
    assert_eq!(receipt.tx_hash.as_deref(), Some("0xfeedbeef"));

    let balance = client.snapshot().await.balance.unwrap();
    assert_eq!(balance.native, dec("1.5"));
    assert_eq!(balance.fiat, Some(dec("4500.00")));
    assert_eq!(ledger.submissions.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn deposit_never_reduces_fiat_at_unchanged_rate() {
    let ledger = ledger_with_balance(ONE);
    let client = connected_client(&ledger, Arc::new(FixedRate(dec("2500")))).await;

    let before = client.balances().refresh().await.unwrap().fiat.unwrap();
    client
        .transactions()
        .deposit("0.25", AmountUnit::Native)
        .await
        .unwrap();
    let after = client.snapshot().await.balance.unwrap().fiat.unwrap();

    assert!(after > before, "fiat display {} fell below {}", after, before);
}

#[tokio::test]
async fn deposit_over_limit_rejected_without_chain_call() {
    // depositLimit = 1000 native, request "2000".
    let ledger = ledger_with_balance(0);
    let client = connected_client(&ledger, Arc::new(FixedRate(dec("3000")))).await;

    let err = client
        .transactions()
        .deposit("2000", AmountUnit::Native)
        .await
        .unwrap_err();

    match err {
        TellerError::Amount(AmountError::LimitExceeded {
            direction,
            requested,
            limit,
        }) => {
            assert_eq!(direction, Direction::Deposit);
            assert_eq!(requested, dec("2000"));
            assert_eq!(limit, dec("1000"));
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
    assert_eq!(ledger.submissions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn invalid_amount_rejected_before_everything_else() {
    // Even with no connection and a dead rate feed, a non-numeric amount
    // must fail as invalid, not as a readiness or rate error.
    let ledger = ledger_with_balance(0);
    let client = client(&ledger, Arc::new(UnreachableFeed));

    for input in ["abc", "", "1.2.3", "NaN"] {
        let err = client
            .transactions()
            .deposit(input, AmountUnit::Native)
            .await
            .unwrap_err();
        assert!(
            matches!(err, TellerError::Amount(AmountError::Invalid { .. })),
            "input {input:?} produced {err:?}"
        );
    }
    assert_eq!(ledger.submissions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fiat_submission_without_rate_is_unavailable() {
    let ledger = ledger_with_balance(ONE);
    let client = connected_client(&ledger, Arc::new(UnreachableFeed)).await;

    let err = client
        .transactions()
        .deposit("100", AmountUnit::Fiat)
        .await
        .unwrap_err();
    assert!(matches!(err, TellerError::Rate(RateError::Unavailable)));
}

#[tokio::test]
async fn fiat_withdrawal_over_limit_rejected() {
    // withdrawLimit = 1000 native, rate = 2000: 2,500,000 fiat → 1250 native.
    let ledger = ledger_with_balance(2000 * ONE);
    let client = connected_client(&ledger, Arc::new(FixedRate(dec("2000")))).await;
    client.balances().refresh().await.unwrap(); // seed the session rate

    let err = client
        .transactions()
        .withdraw("2500000", AmountUnit::Fiat)
        .await
        .unwrap_err();

    match err {
        TellerError::Amount(AmountError::LimitExceeded { requested, .. }) => {
            assert_eq!(requested, dec("1250"));
        }
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
    // Only the refresh touched the chain; the withdrawal never did.
    assert_eq!(ledger.submissions.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fiat_deposit_converts_through_session_rate() {
    // 1500 fiat at rate 3000 = 0.5 native.
    let ledger = ledger_with_balance(0);
    let client = connected_client(&ledger, Arc::new(FixedRate(dec("3000")))).await;
    client.balances().refresh().await.unwrap();

    let receipt = client
        .transactions()
        .deposit("1500", AmountUnit::Fiat)
        .await
        .unwrap();
    assert_eq!(receipt.native_amount, dec("0.5"));
    assert_eq!(receipt.base_amount, ONE / 2);
}

#[tokio::test]
async fn failed_confirmation_leaves_balance_unchanged() {
    let ledger = ledger_with_balance(ONE);
    let client = connected_client(&ledger, Arc::new(FixedRate(dec("3000")))).await;
    let before = client.balances().refresh().await.unwrap();

    ledger.fail_confirmation.store(true, Ordering::SeqCst);
    let err = client
        .transactions()
        .withdraw("0.5", AmountUnit::Native)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TellerError::Transaction(TransactionError::Reverted { .. })
    ));

    // No refresh ran after the failure: the session still holds the prior view.
    let after = client.snapshot().await.balance.unwrap();
    assert_eq!(after.base_units, before.base_units);
    assert_eq!(after.refreshed_at, before.refreshed_at);
}

#[tokio::test]
async fn custom_limits_apply_per_direction() {
    let ledger = ledger_with_balance(1000 * ONE);
    let client = TellerClient::builder()
        .provider(Arc::new(MockProvider {
            authorized: Vec::new(),
            reject: false,
            ledger: ledger.clone(),
        }))
        .rate_source(Arc::new(FixedRate(dec("3000"))))
        .contract_address(CONTRACT)
        .limits(Limits {
            deposit: dec("10"),
            withdraw: dec("2"),
        })
        .build()
        .unwrap();
    client.accounts().connect().await.unwrap();

    // 5 native: fine to deposit, too much to withdraw.
    client
        .transactions()
        .deposit("5", AmountUnit::Native)
        .await
        .unwrap();
    let err = client
        .transactions()
        .withdraw("5", AmountUnit::Native)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TellerError::Amount(AmountError::LimitExceeded { .. })
    ));
}

#[tokio::test]
async fn malformed_contract_address_fails_build() {
    let err = TellerClient::builder()
        .rate_source(Arc::new(FixedRate(dec("3000"))))
        .contract_address("not-an-address")
        .build()
        .err()
        .expect("build must fail");
    assert!(matches!(
        err,
        TellerError::Binding(BindingError::BadAddress { .. })
    ));
}
