// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: header, the hero (disconnected) or the dashboard (connected) in a
//! centered scrollable column, a footer, and the toast overlay on top.

use super::Message;
use crate::config::NetworkConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Center, Toast};
use crate::ui::session::Session;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{bio, components::section, header, hero, ledger, security, transfer, wallet_card};
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, text, Column, Container, Row, Space, Stack, Text},
    Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub network: &'a NetworkConfig,
    pub network_name: &'a str,
    pub session: &'a Session,
    pub dark: bool,
    pub bio: &'a bio::State,
    pub transfer: &'a transfer::State,
    pub ledger: &'a ledger::State,
    pub security: &'a security::State,
    pub notifications: &'a Center,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        session: ctx.session,
        network_name: ctx.network_name,
        dark: ctx.dark,
    })
    .map(Message::Header);

    let body = if ctx.session.is_connected() {
        dashboard(&ctx)
    } else {
        hero::view(hero::ViewContext {
            i18n: ctx.i18n,
            connecting: ctx.session.is_connecting(),
        })
        .map(Message::Hero)
    };

    let content = Container::new(body)
        .max_width(sizing::CONTENT_WIDTH)
        .padding([spacing::LG, spacing::MD]);

    let page = Column::new()
        .push(header)
        .push(divider())
        .push(scrollable(Container::new(content).center_x(Length::Fill)).height(Length::Fill))
        .push(divider())
        .push(footer(ctx.i18n))
        .width(Length::Fill)
        .height(Length::Fill);

    let page = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let toasts =
        Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.network).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn dashboard<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Session::Connected { address, balance } = ctx.session else {
        return Space::new().into();
    };

    let identity = Column::new()
        .spacing(spacing::SM)
        .push(section::caption(ctx.i18n.tr("section-wallet-identity")))
        .push(
            wallet_card::view(wallet_card::ViewContext {
                i18n: ctx.i18n,
                address,
                balance: *balance,
            })
            .map(Message::WalletCard),
        );

    let bio = ctx
        .bio
        .view(bio::ViewContext { i18n: ctx.i18n })
        .map(Message::Bio);

    let transfer = ctx
        .transfer
        .view(transfer::ViewContext {
            i18n: ctx.i18n,
            balance: *balance,
        })
        .map(Message::Transfer);

    let actions = Column::new()
        .spacing(spacing::SM)
        .push(section::caption(ctx.i18n.tr("section-onchain-actions")))
        .push(
            ctx.ledger
                .view(ledger::ViewContext { i18n: ctx.i18n })
                .map(Message::Ledger),
        );

    let security = ctx
        .security
        .view(security::ViewContext { i18n: ctx.i18n })
        .map(Message::Security);

    Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(identity)
        .push(bio)
        .push(transfer)
        .push(actions)
        .push(security)
        .into()
}

fn divider<'a>() -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::divider)
        .into()
}

fn footer(i18n: &I18n) -> Element<'_, Message> {
    let version = Text::new(i18n.tr_with_args("footer-version", &[("version", APP_VERSION)]))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        });

    let copy = button(Text::new(i18n.tr("footer-copy-diagnostics")).size(typography::CAPTION))
        .on_press(Message::CopyDiagnostics)
        .padding(0)
        .style(styles::button::muted_link);

    Row::new()
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(version)
        .push(Space::new().width(Length::Fill))
        .push(copy)
        .into()
}
