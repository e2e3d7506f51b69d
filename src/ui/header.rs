// SPDX-License-Identifier: MPL-2.0
//! Top bar: brand, network label, theme toggle and the connect button or
//! address pill.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::session::Session;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, tooltip, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Characters kept on each side of the address in the pill.
const PILL_LEAD: usize = 4;
const PILL_TAIL: usize = 4;

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub network_name: &'a str,
    /// Whether the dark theme is currently shown.
    pub dark: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    Connect,
    CopyAddress,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Connect,
    CopyAddress,
    ToggleTheme,
}

/// Process a header message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Connect => Event::Connect,
        Message::CopyAddress => Event::CopyAddress,
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the header.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(Space::new())
                .width(Length::Fixed(sizing::BRAND_MARK))
                .height(Length::Fixed(sizing::BRAND_MARK))
                .style(styles::container::brand_mark),
        )
        .push(Text::new(ctx.i18n.tr("brand-name")).size(typography::TITLE_SM));

    let network = Text::new(ctx.network_name.to_uppercase())
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        });

    Row::new()
        .spacing(spacing::SM)
        .padding([spacing::MD, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(network)
        .push(theme_toggle(&ctx))
        .push(session_control(&ctx))
        .into()
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (glyph, hint) = if ctx.dark {
        ("☀", ctx.i18n.tr("theme-switch-light"))
    } else {
        ("☾", ctx.i18n.tr("theme-switch-dark"))
    };

    let toggle = button(Text::new(glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XXS)
        .style(styles::button::muted_link);

    tooltip(
        toggle,
        Container::new(Text::new(hint).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::tooltip),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}

fn pill_label<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::BODY_SM)
}

fn session_control<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.session {
        Session::Connected { address, .. } => {
            let label = Text::new(address.short(PILL_LEAD, PILL_TAIL)).size(typography::BODY_SM);
            let pill = button(label)
                .on_press(Message::CopyAddress)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::address_pill);

            tooltip(
                pill,
                container(Text::new(ctx.i18n.tr("header-copy-address")).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::tooltip),
                tooltip::Position::Bottom,
            )
            .gap(spacing::XXS)
            .into()
        }
        Session::Connecting => button(pill_label(ctx.i18n.tr("header-connecting")))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::pill)
            .into(),
        Session::Disconnected => button(pill_label(ctx.i18n.tr("header-connect")))
            .on_press(Message::Connect)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::pill)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(&Message::Connect), Event::Connect);
        assert_eq!(update(&Message::CopyAddress), Event::CopyAddress);
        assert_eq!(update(&Message::ToggleTheme), Event::ToggleTheme);
    }

    #[test]
    fn pill_shortens_full_address() {
        let address = crate::domain::wallet::AccountAddress::parse(
            "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
        )
        .expect("valid address");
        assert_eq!(address.short(PILL_LEAD, PILL_TAIL), "0x12...cdef");
    }
}
