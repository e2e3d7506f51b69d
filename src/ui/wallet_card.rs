// SPDX-License-Identifier: MPL-2.0
//! Wallet identity card: connected address, balance and logout.

use crate::domain::wallet::{units, AccountAddress, Amount};
use crate::i18n::fluent::I18n;
use crate::ui::components::section;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::session::balance_label;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Row, Space, Text},
    Element, Length,
};

/// Characters kept on each side of the address in the card.
const ADDRESS_LEAD: usize = 6;
const ADDRESS_TAIL: usize = 4;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub address: &'a AccountAddress,
    pub balance: Option<Amount>,
}

#[derive(Debug, Clone)]
pub enum Message {
    CopyAddress,
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CopyAddress,
    Disconnect,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::CopyAddress => Event::CopyAddress,
        Message::Logout => Event::Disconnect,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let address = button(
        Text::new(ctx.address.short(ADDRESS_LEAD, ADDRESS_TAIL)).size(typography::BODY_LG),
    )
    .on_press(Message::CopyAddress)
    .padding(0)
    .style(styles::button::muted_link);

    let balance = Text::new(format!("{} {}", balance_label(ctx.balance), units::SYMBOL))
        .size(typography::TITLE_SM);

    let logout = button(Text::new(ctx.i18n.tr("wallet-logout")).size(typography::BODY_SM))
        .on_press(Message::Logout)
        .padding(0)
        .style(styles::button::danger_link);

    let identity = Column::new()
        .spacing(spacing::XXS)
        .push(section::caption(ctx.i18n.tr("wallet-connected-address")))
        .push(address);

    let row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(identity)
        .push(Space::new().width(Length::Fill))
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(iced::alignment::Horizontal::Right)
                .push(balance)
                .push(logout),
        );

    section::card(row)
}
