// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler receives an [`UpdateContext`]. Its `notifications` field is
//! the only way to reach the notification center, so notifications can only
//! be raised while a message is being processed.

use super::Message;
use crate::application::port::{SharedWallet, WalletError};
use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, ErrorType, UserAction};
use crate::domain::wallet::{AccountAddress, Amount, Bio, EntryFunction, TxHash};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Effect as NotificationEffect};
use crate::ui::session::Session;
use crate::ui::theming::ThemeMode;
use crate::ui::{bio, header, hero, ledger, security, transfer, wallet_card};
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Duration;

/// Delay before re-reading chain state after a transaction, giving the
/// indexer time to catch up.
pub const REFRESH_DELAY: Duration = Duration::from_secs(2);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub wallet: &'a SharedWallet,
    pub session: &'a mut Session,
    pub theme_mode: &'a mut ThemeMode,
    pub bio: &'a mut bio::State,
    pub transfer: &'a mut transfer::State,
    pub ledger: &'a mut ledger::State,
    pub security: &'a mut security::State,
    pub notifications: &'a mut notifications::Center,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

impl UpdateContext<'_> {
    /// Shows a wallet failure as an error notification.
    fn wallet_error(&mut self, key: &str, error: &WalletError) {
        let message = self
            .i18n
            .tr_with_args(key, &[("error", error.to_string().as_str())]);
        self.notifications.notifier().error(ErrorType::Wallet, message);
    }

    fn platform_error(&mut self, key: &str, error: &str) {
        let message = self.i18n.tr_with_args(key, &[("error", error)]);
        self.notifications.notifier().error(ErrorType::Platform, message);
    }
}

fn after_delay(message: Message) -> Task<Message> {
    Task::perform(
        async { tokio::time::sleep(REFRESH_DELAY).await },
        move |()| message,
    )
}

// =============================================================================
// Header / Hero / Wallet card
// =============================================================================

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: &header::Message,
) -> Task<Message> {
    match header::update(message) {
        header::Event::Connect => start_connect(ctx),
        header::Event::CopyAddress => copy_address(ctx),
        header::Event::ToggleTheme => toggle_theme(ctx),
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: &hero::Message) -> Task<Message> {
    match hero::update(message) {
        hero::Event::Connect => start_connect(ctx),
    }
}

pub fn handle_wallet_card_message(
    ctx: &mut UpdateContext<'_>,
    message: &wallet_card::Message,
) -> Task<Message> {
    match wallet_card::update(message) {
        wallet_card::Event::CopyAddress => copy_address(ctx),
        wallet_card::Event::Disconnect => {
            ctx.diagnostics.log_action(UserAction::Disconnect);
            Task::perform(ctx.wallet.disconnect(), Message::Disconnected)
        }
    }
}

fn start_connect(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.session.begin_connect() {
        return Task::none();
    }
    ctx.diagnostics.log_action(UserAction::Connect);
    Task::perform(ctx.wallet.connect(), Message::Connected)
}

fn copy_address(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(address) = ctx.session.address() else {
        return Task::none();
    };
    let address = address.to_string();

    ctx.diagnostics.log_action(UserAction::CopyAddress);
    ctx.notifications
        .notifier()
        .info(ctx.i18n.tr("notification-address-copied"));
    iced::clipboard::write(address)
}

fn toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mode = ctx.theme_mode.toggled();
    *ctx.theme_mode = mode;
    ctx.config.general.theme_mode = mode;
    ctx.diagnostics.log_action(UserAction::ToggleTheme);

    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        ctx.platform_error("notification-config-save-error", &err.to_string());
    }
    Task::none()
}

// =============================================================================
// Session
// =============================================================================

pub fn handle_connected(
    ctx: &mut UpdateContext<'_>,
    result: Result<AccountAddress, WalletError>,
) -> Task<Message> {
    match result {
        Ok(address) => {
            ctx.session.connected(address);
            ctx.diagnostics.log_state(AppStateEvent::SessionOpened);
            Task::batch([refresh_balance(ctx), sync_bio(ctx)])
        }
        Err(err) => {
            ctx.session.connect_failed();
            ctx.wallet_error("notification-connect-failed", &err);
            Task::none()
        }
    }
}

pub fn handle_disconnected(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), WalletError>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            ctx.session.disconnect();
            ctx.bio.reset();
            ctx.transfer.reset();
            ctx.ledger.finish();
            ctx.security.reset();
            ctx.diagnostics.log_state(AppStateEvent::SessionClosed);
        }
        Err(err) => ctx.wallet_error("notification-disconnect-failed", &err),
    }
    Task::none()
}

pub fn refresh_balance(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.session.address() {
        Some(address) => Task::perform(ctx.wallet.balance(address.clone()), Message::BalanceLoaded),
        None => Task::none(),
    }
}

pub fn handle_balance_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Amount, WalletError>,
) -> Task<Message> {
    if !ctx.session.is_connected() {
        return Task::none();
    }
    match result {
        Ok(amount) => ctx.session.set_balance(amount),
        Err(err) => ctx.wallet_error("notification-balance-failed", &err),
    }
    Task::none()
}

// =============================================================================
// Bio
// =============================================================================

pub fn sync_bio(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(address) = ctx.session.address().cloned() else {
        return Task::none();
    };
    let module = match ctx.config.bio.module_id() {
        Ok(module) => module,
        Err(err) => {
            ctx.platform_error("notification-bio-module-invalid", &err.to_string());
            return Task::none();
        }
    };

    ctx.bio.begin_sync();
    Task::perform(ctx.wallet.bio(address, module), Message::BioLoaded)
}

pub fn handle_bio_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Option<Bio>, WalletError>,
) -> Task<Message> {
    if !ctx.session.is_connected() {
        return Task::none();
    }
    match result {
        Ok(bio) => ctx.bio.synced(bio),
        Err(err) => {
            ctx.bio.sync_failed();
            ctx.wallet_error("notification-bio-fetch-failed", &err);
        }
    }
    Task::none()
}

pub fn handle_bio_message(ctx: &mut UpdateContext<'_>, message: bio::Message) -> Task<Message> {
    let event = ctx
        .bio
        .handle_message(message, ctx.i18n, &mut ctx.notifications.notifier());

    match event {
        bio::Event::None => Task::none(),
        bio::Event::Register { name, bio } => {
            let module = match ctx.config.bio.module_id() {
                Ok(module) => module,
                Err(err) => {
                    ctx.bio.finish(false);
                    ctx.platform_error("notification-bio-module-invalid", &err.to_string());
                    return Task::none();
                }
            };
            ctx.diagnostics.log_action(UserAction::RegisterBio);
            let payload = EntryFunction::register_bio(&module, &name, &bio);
            Task::perform(ctx.wallet.sign_and_send(payload), Message::BioRegistered)
        }
    }
}

pub fn handle_bio_registered(
    ctx: &mut UpdateContext<'_>,
    result: Result<TxHash, WalletError>,
) -> Task<Message> {
    match result {
        Ok(hash) => {
            ctx.bio.finish(true);
            ctx.diagnostics.log_state(AppStateEvent::TransactionSubmitted);
            ctx.notifications
                .notifier()
                .success_with_link(ctx.i18n.tr("notification-bio-success"), hash);
            after_delay(Message::SyncBio)
        }
        Err(err) => {
            ctx.bio.finish(false);
            ctx.wallet_error("notification-bio-failed", &err);
            Task::none()
        }
    }
}

// =============================================================================
// Transfer
// =============================================================================

pub fn handle_transfer_message(
    ctx: &mut UpdateContext<'_>,
    message: transfer::Message,
) -> Task<Message> {
    let event = ctx
        .transfer
        .handle_message(message, ctx.i18n, &mut ctx.notifications.notifier());

    match event {
        transfer::Event::None => Task::none(),
        transfer::Event::Submit { recipient, amount } => {
            ctx.diagnostics.log_action(UserAction::SubmitTransfer);
            let payload = EntryFunction::transfer(&recipient, amount);
            Task::perform(ctx.wallet.sign_and_send(payload), Message::TransferSubmitted)
        }
    }
}

pub fn handle_transfer_submitted(
    ctx: &mut UpdateContext<'_>,
    result: Result<TxHash, WalletError>,
) -> Task<Message> {
    match result {
        Ok(hash) => {
            ctx.transfer.finish(true);
            ctx.diagnostics.log_state(AppStateEvent::TransactionSubmitted);
            ctx.notifications
                .notifier()
                .success_with_link(ctx.i18n.tr("notification-transfer-success"), hash);
            after_delay(Message::RefreshBalance)
        }
        Err(err) => {
            ctx.transfer.finish(false);
            ctx.wallet_error("notification-transfer-failed", &err);
            Task::none()
        }
    }
}

// =============================================================================
// Ledger action
// =============================================================================

pub fn handle_ledger_message(
    ctx: &mut UpdateContext<'_>,
    message: ledger::Message,
) -> Task<Message> {
    match ctx.ledger.handle_message(message) {
        ledger::Event::None => Task::none(),
        ledger::Event::Submit(payload) => {
            ctx.diagnostics.log_action(UserAction::SubmitAction);
            Task::perform(ctx.wallet.sign_and_send(payload), Message::ActionSubmitted)
        }
    }
}

pub fn handle_action_submitted(
    ctx: &mut UpdateContext<'_>,
    result: Result<TxHash, WalletError>,
) -> Task<Message> {
    ctx.ledger.finish();
    match result {
        Ok(hash) => {
            ctx.diagnostics.log_state(AppStateEvent::TransactionSubmitted);
            ctx.notifications
                .notifier()
                .success_with_link(ctx.i18n.tr("notification-action-success"), hash);
        }
        Err(err) => ctx.wallet_error("notification-action-failed", &err),
    }
    Task::none()
}

// =============================================================================
// Security
// =============================================================================

pub fn handle_security_message(
    ctx: &mut UpdateContext<'_>,
    message: security::Message,
) -> Task<Message> {
    match ctx.security.handle_message(message) {
        security::Event::None => Task::none(),
        security::Event::ExportKey => {
            ctx.diagnostics.log_action(UserAction::ExportKey);
            Task::perform(ctx.wallet.export_key(), Message::KeyExported)
        }
    }
}

pub fn handle_key_exported(
    ctx: &mut UpdateContext<'_>,
    result: Result<String, WalletError>,
) -> Task<Message> {
    ctx.security.finish();
    match result {
        Ok(key) => {
            ctx.notifications
                .notifier()
                .success(ctx.i18n.tr("notification-key-copied"));
            iced::clipboard::write(key)
        }
        Err(err) => {
            ctx.wallet_error("notification-key-export-failed", &err);
            Task::none()
        }
    }
}

// =============================================================================
// Notifications / Diagnostics / Window
// =============================================================================

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::NotificationMessage,
) -> Task<Message> {
    match ctx.notifications.handle_message(message) {
        NotificationEffect::None => {}
        NotificationEffect::OpenUrl(url) => {
            ctx.diagnostics.log_action(UserAction::OpenExplorer);
            if let Err(err) = webbrowser::open(&url) {
                ctx.platform_error("notification-explorer-open-failed", &err.to_string());
            }
        }
    }
    Task::none()
}

pub fn handle_copy_diagnostics(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::CopyDiagnostics);
    ctx.diagnostics.process_pending();

    match ctx.diagnostics.export_json() {
        Ok(json) => {
            ctx.notifications
                .notifier()
                .info(ctx.i18n.tr("notification-diagnostics-copied"));
            iced::clipboard::write(json)
        }
        Err(err) => {
            ctx.platform_error("notification-diagnostics-failed", &err.to_string());
            Task::none()
        }
    }
}

pub fn handle_window_close(ctx: &mut UpdateContext<'_>, _id: window::Id) -> Task<Message> {
    ctx.diagnostics.log_state(AppStateEvent::ShuttingDown);
    iced::exit()
}
