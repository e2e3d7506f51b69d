// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the wallet session, the
//! dashboard forms and the notification center.
//!
//! The `App` struct wires together the domains (wallet port, localization,
//! settings, diagnostics) and translates messages into side effects like
//! wallet calls, clipboard writes or config persistence.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SharedWallet;
use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, ErrorType, WarningType};
use crate::i18n::fluent::I18n;
use crate::infrastructure::SimulatedWallet;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications;
use crate::ui::session::Session;
use crate::ui::theming::ThemeMode;
use crate::ui::{bio, ledger, security, transfer};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Seed of the simulated wallet when no settings directory is known.
const FALLBACK_DEVICE_SEED: &str = "column-wallet-device";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Settings directory override; `None` uses [`paths::config_dir`].
    config_dir: Option<PathBuf>,
    /// Network label shown in the header (CLI override or config).
    network_name: String,
    wallet: SharedWallet,
    session: Session,
    theme_mode: ThemeMode,
    bio: bio::State,
    transfer: transfer::State,
    ledger: ledger::State,
    security: security::State,
    notifications: notifications::Center,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("session", &self.session)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::WINDOW_MIN_WIDTH,
            sizing::WINDOW_MIN_HEIGHT,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn device_seed() -> String {
    paths::config_dir()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_DEVICE_SEED.to_string())
}

impl Default for App {
    fn default() -> Self {
        Self::with_wallet(
            Config::default(),
            None,
            I18n::default(),
            Arc::new(SimulatedWallet::new(FALLBACK_DEVICE_SEED)),
        )
    }
}

impl App {
    /// Assembles the application around an already-configured wallet.
    pub fn with_wallet(
        config: Config,
        config_dir: Option<PathBuf>,
        i18n: I18n,
        wallet: SharedWallet,
    ) -> Self {
        let network_name = config.network.name.clone();
        let diagnostics =
            DiagnosticsCollector::new(config.diagnostics.capacity(), network_name.clone());
        let mut notifications = notifications::Center::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            network_name,
            wallet,
            session: Session::default(),
            bio: bio::State::default(),
            transfer: transfer::State::default(),
            ledger: ledger::State::default(),
            security: security::State::default(),
            notifications,
            diagnostics,
        }
    }

    /// Initializes application state from the CLI flags and `settings.toml`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let wallet: SharedWallet = Arc::new(SimulatedWallet::new(&device_seed()));

        let mut app = App::with_wallet(config, None, i18n, wallet);
        if let Some(network) = flags.network {
            app.network_name = network;
        }

        app.log_startup();

        if let Some(key) = config_warning {
            app.diagnostics
                .handle()
                .log_warning(WarningType::ConfigurationIssue, key.as_str());
            app.notifications
                .notifier()
                .error(ErrorType::Platform, app.i18n.tr(&key));
        }

        let task = app.notifications.scheduled().map(Message::Notification);
        (app, task)
    }

    fn log_startup(&mut self) {
        self.diagnostics.log_state(AppStateEvent::Started {
            version: env!("CARGO_PKG_VERSION").to_string(),
            network: self.network_name.clone(),
            rpc_url: self.config.network.rpc_url.clone(),
        });
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            config_dir: &self.config_dir,
            wallet: &self.wallet,
            session: &mut self.session,
            theme_mode: &mut self.theme_mode,
            bio: &mut self.bio,
            transfer: &mut self.transfer,
            ledger: &mut self.ledger,
            security: &mut self.security,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        };

        let task = match message {
            Message::Header(message) => update::handle_header_message(&mut ctx, &message),
            Message::Hero(message) => update::handle_hero_message(&mut ctx, &message),
            Message::WalletCard(message) => update::handle_wallet_card_message(&mut ctx, &message),
            Message::Bio(message) => update::handle_bio_message(&mut ctx, message),
            Message::Transfer(message) => update::handle_transfer_message(&mut ctx, message),
            Message::Ledger(message) => update::handle_ledger_message(&mut ctx, message),
            Message::Security(message) => update::handle_security_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, message)
            }
            Message::CopyDiagnostics => update::handle_copy_diagnostics(&mut ctx),
            Message::Connected(result) => update::handle_connected(&mut ctx, result),
            Message::Disconnected(result) => update::handle_disconnected(&mut ctx, result),
            Message::RefreshBalance => update::refresh_balance(&mut ctx),
            Message::BalanceLoaded(result) => update::handle_balance_loaded(&mut ctx, result),
            Message::SyncBio => update::sync_bio(&mut ctx),
            Message::BioLoaded(result) => update::handle_bio_loaded(&mut ctx, result),
            Message::TransferSubmitted(result) => {
                update::handle_transfer_submitted(&mut ctx, result)
            }
            Message::BioRegistered(result) => update::handle_bio_registered(&mut ctx, result),
            Message::ActionSubmitted(result) => update::handle_action_submitted(&mut ctx, result),
            Message::KeyExported(result) => update::handle_key_exported(&mut ctx, result),
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        };

        self.diagnostics.process_pending();

        // Every notification shown while handling the message gets its own
        // delayed expiry.
        let expiries = self.notifications.scheduled().map(Message::Notification);
        Task::batch([task, expiries])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            network: &self.config.network,
            network_name: &self.network_name,
            session: &self.session,
            dark: self.theme_mode.is_dark(),
            bio: &self.bio,
            transfer: &self.transfer,
            ledger: &self.ledger,
            security: &self.security,
            notifications: &self.notifications,
        })
    }
}
