// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::WalletError;
use crate::domain::wallet::{AccountAddress, Amount, Bio, TxHash};
use crate::ui::notifications;
use crate::ui::{bio, header, hero, ledger, security, transfer, wallet_card};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    WalletCard(wallet_card::Message),
    Bio(bio::Message),
    Transfer(transfer::Message),
    Ledger(ledger::Message),
    Security(security::Message),
    Notification(notifications::NotificationMessage),
    /// Footer "Copy diagnostics".
    CopyDiagnostics,
    /// The passkey flow finished.
    Connected(Result<AccountAddress, WalletError>),
    Disconnected(Result<(), WalletError>),
    /// Re-read the balance of the open session.
    RefreshBalance,
    BalanceLoaded(Result<Amount, WalletError>),
    /// Re-read the bio of the open session.
    SyncBio,
    BioLoaded(Result<Option<Bio>, WalletError>),
    TransferSubmitted(Result<TxHash, WalletError>),
    BioRegistered(Result<TxHash, WalletError>),
    ActionSubmitted(Result<TxHash, WalletError>),
    KeyExported(Result<String, WalletError>),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COLUMN_WALLET_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional network display name, overriding `[network] name`.
    pub network: Option<String>,
}
