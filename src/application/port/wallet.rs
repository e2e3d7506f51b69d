// SPDX-License-Identifier: MPL-2.0
//! Wallet port definition.
//!
//! This module defines the [`Wallet`] trait, the boundary to the external
//! wallet SDK that owns key management, passkey authentication, signing,
//! submission and chain reads.
//!
//! # Design Notes
//!
//! - Methods return `'static` boxed futures so callers can hand them
//!   straight to `Task::perform`
//! - Errors are `Clone` so results can travel inside Iced messages
//! - The trait is `Send + Sync`; the application shares one instance behind
//!   an `Arc`

use crate::domain::wallet::{AccountAddress, Amount, Bio, EntryFunction, ModuleId, TxHash};
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// WalletError
// =============================================================================

/// Errors reported by the wallet SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The user dismissed or failed the passkey prompt.
    Rejected,

    /// An operation that needs a session was called while disconnected.
    NotConnected,

    /// The account cannot cover the requested amount.
    InsufficientFunds {
        /// Current balance in octas.
        available: Amount,
        /// Requested amount in octas.
        requested: Amount,
    },

    /// A payload argument is not a valid account address.
    InvalidAddress(String),

    /// The transaction was rejected by the chain.
    Aborted(String),

    /// The node could not be reached.
    Network(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::Rejected => write!(f, "Passkey request was cancelled"),
            WalletError::NotConnected => write!(f, "Wallet is not connected"),
            WalletError::InsufficientFunds {
                available,
                requested,
            } => write!(
                f,
                "Insufficient balance: {available} available, {requested} requested"
            ),
            WalletError::InvalidAddress(address) => write!(f, "Invalid address: {address}"),
            WalletError::Aborted(reason) => write!(f, "Transaction aborted: {reason}"),
            WalletError::Network(reason) => write!(f, "Network error: {reason}"),
        }
    }
}

impl std::error::Error for WalletError {}

// =============================================================================
// Wallet Trait
// =============================================================================

/// Port to the passkey wallet SDK.
///
/// # Example
///
/// ```
/// use column_wallet::application::port::wallet::{Wallet, WalletError};
/// use column_wallet::domain::wallet::{AccountAddress, Amount, EntryFunction};
///
/// async fn pay(wallet: &dyn Wallet, to: &AccountAddress) -> Result<(), WalletError> {
///     let payload = EntryFunction::transfer(to, Amount::from_octas(1));
///     let hash = wallet.sign_and_send(payload).await?;
///     println!("submitted {hash}");
///     Ok(())
/// }
/// ```
pub trait Wallet: Send + Sync {
    /// Runs the passkey ceremony and opens a session.
    fn connect(&self) -> BoxFuture<'static, Result<AccountAddress, WalletError>>;

    /// Closes the current session.
    fn disconnect(&self) -> BoxFuture<'static, Result<(), WalletError>>;

    /// Reads the MOVE balance of `address`.
    fn balance(&self, address: AccountAddress) -> BoxFuture<'static, Result<Amount, WalletError>>;

    /// Signs `payload` with the session key and submits it.
    fn sign_and_send(
        &self,
        payload: EntryFunction,
    ) -> BoxFuture<'static, Result<TxHash, WalletError>>;

    /// Exports the session's private key as a hex string.
    fn export_key(&self) -> BoxFuture<'static, Result<String, WalletError>>;

    /// Reads the bio resource published by `module` under `address`.
    ///
    /// Returns `Ok(None)` when the account has not registered one yet.
    fn bio(
        &self,
        address: AccountAddress,
        module: ModuleId,
    ) -> BoxFuture<'static, Result<Option<Bio>, WalletError>>;
}

/// Shared handle to the wallet used across the UI.
pub type SharedWallet = Arc<dyn Wallet>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_error_display() {
        assert_eq!(
            format!("{}", WalletError::NotConnected),
            "Wallet is not connected"
        );

        let err = WalletError::InsufficientFunds {
            available: Amount::from_octas(10_000_000),
            requested: Amount::from_octas(200_000_000),
        };
        let display = format!("{err}");
        assert!(display.contains("0.10 MOVE"));
        assert!(display.contains("2.00 MOVE"));

        let err = WalletError::Aborted("EMODULE_NOT_FOUND".to_string());
        assert!(format!("{err}").contains("EMODULE_NOT_FOUND"));
    }
}
