// SPDX-License-Identifier: MPL-2.0
//! In-process stand-in for the passkey wallet SDK.
//!
//! The simulated wallet keeps a tiny ledger in memory so the client can be
//! exercised end to end without a device authenticator or a node. Keys and
//! addresses are derived deterministically from a device seed with BLAKE3,
//! every operation waits for a configurable latency, and transaction hashes
//! are digests of the sender, its sequence number and the payload.

use crate::application::port::wallet::{Wallet, WalletError};
use crate::domain::wallet::{
    AccountAddress, Amount, Bio, EntryFunction, ModuleId, TxHash, REGISTER_FUNCTION,
    TRANSFER_FUNCTION,
};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Balance credited to an account the first time it connects (10 MOVE).
pub const FAUCET_AMOUNT: Amount = Amount::from_octas(1_000_000_000);

/// Default round-trip latency of every simulated call.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(350);

const ACCOUNT_CONTEXT: &str = "column_wallet simulated account v1";
const PRIVATE_KEY_CONTEXT: &str = "column_wallet simulated private key v1";

#[derive(Debug, Default)]
struct Ledger {
    session: Option<AccountAddress>,
    balances: HashMap<AccountAddress, Amount>,
    sequence_numbers: HashMap<AccountAddress, u64>,
    /// Bios keyed by account and publishing module (`0x…::module`).
    bios: HashMap<(AccountAddress, String), Bio>,
    pending_failure: Option<WalletError>,
}

impl Ledger {
    fn take_failure(&mut self) -> Result<(), WalletError> {
        match self.pending_failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn session(&self) -> Result<AccountAddress, WalletError> {
        self.session.clone().ok_or(WalletError::NotConnected)
    }

    fn balance_of(&self, address: &AccountAddress) -> Amount {
        self.balances.get(address).copied().unwrap_or(Amount::ZERO)
    }

    fn execute(
        &mut self,
        sender: &AccountAddress,
        payload: &EntryFunction,
    ) -> Result<(), WalletError> {
        if payload.function == TRANSFER_FUNCTION {
            return self.transfer(sender, payload);
        }

        let mut parts = payload.function.split("::");
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(address), Some(module), Some(REGISTER_FUNCTION), None) => {
                let [name, bio] = payload.arguments.as_slice() else {
                    return Err(WalletError::Aborted(
                        "register expects a name and a bio".to_string(),
                    ));
                };
                let module_address = AccountAddress::parse(address)
                    .map_err(|_| WalletError::InvalidAddress(address.to_string()))?;
                let key = (sender.clone(), format!("{module_address}::{module}"));
                self.bios.insert(
                    key,
                    Bio {
                        name: name.clone(),
                        bio: bio.clone(),
                    },
                );
                Ok(())
            }
            _ => Err(WalletError::Aborted(format!(
                "function {} not found",
                payload.function
            ))),
        }
    }

    fn transfer(
        &mut self,
        sender: &AccountAddress,
        payload: &EntryFunction,
    ) -> Result<(), WalletError> {
        let [recipient, octas] = payload.arguments.as_slice() else {
            return Err(WalletError::Aborted(
                "transfer expects a recipient and an amount".to_string(),
            ));
        };
        let recipient = AccountAddress::parse(recipient)
            .map_err(|_| WalletError::InvalidAddress(recipient.clone()))?;
        let requested = octas
            .parse::<u64>()
            .map(Amount::from_octas)
            .map_err(|_| WalletError::Aborted(format!("invalid amount {octas}")))?;

        let available = self.balance_of(sender);
        let remaining = available
            .checked_sub(requested)
            .ok_or(WalletError::InsufficientFunds {
                available,
                requested,
            })?;
        self.balances.insert(sender.clone(), remaining);
        let credited = self.balance_of(&recipient).saturating_add(requested);
        self.balances.insert(recipient, credited);
        Ok(())
    }
}

/// Simulated passkey wallet backed by an in-memory ledger.
#[derive(Debug, Clone)]
pub struct SimulatedWallet {
    seed: Arc<str>,
    latency: Duration,
    ledger: Arc<Mutex<Ledger>>,
}

impl SimulatedWallet {
    /// Creates a wallet whose account is derived from `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self {
            seed: Arc::from(seed),
            latency: DEFAULT_LATENCY,
            ledger: Arc::new(Mutex::new(Ledger::default())),
        }
    }

    /// Overrides the simulated round-trip latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes the next call fail with `error`.
    pub fn fail_next(&self, error: WalletError) {
        lock(&self.ledger).pending_failure = Some(error);
    }

    /// Address the passkey of this device resolves to.
    #[must_use]
    pub fn account_address(&self) -> AccountAddress {
        AccountAddress::from_bytes(&blake3::derive_key(ACCOUNT_CONTEXT, self.seed.as_bytes()))
    }

    fn private_key(&self) -> String {
        let key = blake3::derive_key(PRIVATE_KEY_CONTEXT, self.seed.as_bytes());
        format!("0x{}", blake3::Hash::from(key).to_hex())
    }

    /// Runs `operation` against the ledger after the simulated latency.
    fn call<T, F>(&self, operation: F) -> BoxFuture<'static, Result<T, WalletError>>
    where
        T: Send + 'static,
        F: FnOnce(&mut Ledger) -> Result<T, WalletError> + Send + 'static,
    {
        let ledger = Arc::clone(&self.ledger);
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;
            let mut ledger = lock(&ledger);
            ledger.take_failure()?;
            operation(&mut ledger)
        }
        .boxed()
    }
}

fn lock(ledger: &Mutex<Ledger>) -> MutexGuard<'_, Ledger> {
    ledger.lock().unwrap_or_else(PoisonError::into_inner)
}

fn transaction_hash(sender: &AccountAddress, sequence: u64, payload: &EntryFunction) -> TxHash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(sender.as_str().as_bytes());
    hasher.update(&sequence.to_le_bytes());
    hasher.update(payload.function.as_bytes());
    for argument in payload.type_arguments.iter().chain(&payload.arguments) {
        hasher.update(&(argument.len() as u64).to_le_bytes());
        hasher.update(argument.as_bytes());
    }
    TxHash::new(format!("0x{}", hasher.finalize().to_hex()))
}

impl Wallet for SimulatedWallet {
    fn connect(&self) -> BoxFuture<'static, Result<AccountAddress, WalletError>> {
        let address = self.account_address();
        self.call(move |ledger| {
            ledger
                .balances
                .entry(address.clone())
                .or_insert(FAUCET_AMOUNT);
            ledger.session = Some(address.clone());
            Ok(address)
        })
    }

    fn disconnect(&self) -> BoxFuture<'static, Result<(), WalletError>> {
        self.call(|ledger| {
            ledger.session = None;
            Ok(())
        })
    }

    fn balance(&self, address: AccountAddress) -> BoxFuture<'static, Result<Amount, WalletError>> {
        self.call(move |ledger| Ok(ledger.balance_of(&address)))
    }

    fn sign_and_send(
        &self,
        payload: EntryFunction,
    ) -> BoxFuture<'static, Result<TxHash, WalletError>> {
        self.call(move |ledger| {
            let sender = ledger.session()?;
            ledger.execute(&sender, &payload)?;
            let sequence = ledger.sequence_numbers.entry(sender.clone()).or_insert(0);
            let hash = transaction_hash(&sender, *sequence, &payload);
            *sequence += 1;
            Ok(hash)
        })
    }

    fn export_key(&self) -> BoxFuture<'static, Result<String, WalletError>> {
        let key = self.private_key();
        self.call(move |ledger| {
            ledger.session()?;
            Ok(key)
        })
    }

    fn bio(
        &self,
        address: AccountAddress,
        module: ModuleId,
    ) -> BoxFuture<'static, Result<Option<Bio>, WalletError>> {
        self.call(move |ledger| Ok(ledger.bios.get(&(address, module.to_string())).cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> SimulatedWallet {
        SimulatedWallet::new("test-device").with_latency(Duration::ZERO)
    }

    fn bio_module() -> ModuleId {
        ModuleId::new(AccountAddress::parse("0xb10").unwrap(), "onchain_bio")
    }

    #[tokio::test]
    async fn connect_funds_account_once() {
        let wallet = wallet();
        let address = wallet.connect().await.expect("connect");
        assert_eq!(address, wallet.account_address());
        assert_eq!(wallet.balance(address.clone()).await.unwrap(), FAUCET_AMOUNT);

        let recipient = AccountAddress::parse("0x2").unwrap();
        wallet
            .sign_and_send(EntryFunction::transfer(&recipient, Amount::from_octas(5)))
            .await
            .expect("transfer");

        // Reconnecting must not top the account up again.
        wallet.connect().await.unwrap();
        assert_eq!(
            wallet.balance(address).await.unwrap().octas(),
            FAUCET_AMOUNT.octas() - 5
        );
    }

    #[tokio::test]
    async fn transfer_moves_funds_between_accounts() {
        let wallet = wallet();
        let sender = wallet.connect().await.unwrap();
        let recipient = AccountAddress::parse("0xfeed").unwrap();

        let hash = wallet.sign_and_send(EntryFunction::transfer(
                &recipient,
                Amount::parse_move("1.5").unwrap(),
            ))
            .await
            .expect("transfer");

        assert!(hash.as_str().starts_with("0x"));
        assert_eq!(wallet.balance(recipient).await.unwrap().octas(), 150_000_000);
        assert_eq!(wallet.balance(sender).await.unwrap().octas(), 850_000_000);
    }

    #[tokio::test]
    async fn transfer_beyond_balance_is_rejected() {
        let wallet = wallet();
        wallet.connect().await.unwrap();
        let recipient = AccountAddress::parse("0x2").unwrap();

        let err = wallet.sign_and_send(EntryFunction::transfer(
                &recipient,
                Amount::parse_move("11").unwrap(),
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, WalletError::InsufficientFunds { .. }));
    }

    #[tokio::test]
    async fn hashes_differ_per_transaction() {
        let wallet = wallet();
        wallet.connect().await.unwrap();
        let payload = EntryFunction::transfer(&AccountAddress::parse("0x1").unwrap(), Amount::ZERO);

        let first = wallet.sign_and_send(payload.clone()).await.unwrap();
        let second = wallet.sign_and_send(payload).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn operations_require_a_session() {
        let wallet = wallet();
        let payload = EntryFunction::transfer(&AccountAddress::parse("0x1").unwrap(), Amount::ZERO);

        assert_eq!(
            wallet.sign_and_send(payload).await.unwrap_err(),
            WalletError::NotConnected
        );
        assert_eq!(wallet.export_key().await.unwrap_err(), WalletError::NotConnected);

        wallet.connect().await.unwrap();
        wallet.disconnect().await.unwrap();
        assert_eq!(wallet.export_key().await.unwrap_err(), WalletError::NotConnected);
    }

    #[tokio::test]
    async fn register_then_read_bio() {
        let wallet = wallet();
        let address = wallet.connect().await.unwrap();
        let module = bio_module();

        assert_eq!(wallet.bio(address.clone(), module.clone()).await.unwrap(), None);

        wallet
            .sign_and_send(EntryFunction::register_bio(&module, "Ada", "Builder"))
            .await
            .expect("register");

        let bio = wallet.bio(address, module).await.unwrap().expect("bio stored");
        assert_eq!(bio.name, "Ada");
        assert_eq!(bio.bio, "Builder");
    }

    #[tokio::test]
    async fn unknown_function_aborts() {
        let wallet = wallet();
        wallet.connect().await.unwrap();
        let payload = EntryFunction {
            function: "0x1::coin::mint".to_string(),
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        };

        assert!(matches!(
            wallet.sign_and_send(payload).await,
            Err(WalletError::Aborted(_))
        ));
    }

    #[tokio::test]
    async fn export_key_is_deterministic() {
        let wallet = wallet();
        wallet.connect().await.unwrap();

        let first = wallet.export_key().await.unwrap();
        let second = wallet.export_key().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 66);
        assert_ne!(first, wallet.account_address().to_string());
    }

    #[tokio::test]
    async fn fail_next_affects_a_single_call() {
        let wallet = wallet();
        wallet.fail_next(WalletError::Rejected);

        assert_eq!(wallet.connect().await.unwrap_err(), WalletError::Rejected);
        assert!(wallet.connect().await.is_ok());
    }
}
