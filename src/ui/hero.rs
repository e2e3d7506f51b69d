// SPDX-License-Identifier: MPL-2.0
//! Landing section shown while no wallet is connected.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The passkey prompt is open; the call to action is disabled.
    pub connecting: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Connect,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::GetStarted => Event::Connect,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let muted = |theme: &Theme| text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    };

    let title = Text::new(i18n.tr("hero-title")).size(typography::DISPLAY);
    let subtitle = Text::new(i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .style(muted);

    let label = if ctx.connecting {
        i18n.tr("hero-opening-passkey")
    } else {
        i18n.tr("hero-get-started")
    };
    let mut cta = button(
        Container::new(Text::new(label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::CONTENT_WIDTH / 2.0))
    .padding([spacing::SM, spacing::LG])
    .style(styles::button::primary);
    if !ctx.connecting {
        cta = cta.on_press(Message::GetStarted);
    }

    let features = ["hero-feature-passkey", "hero-feature-gas", "hero-feature-native"]
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |column, key| {
            column.push(
                Text::new(i18n.tr(key)).size(typography::BODY_SM).style(muted),
            )
        })
        .align_x(Horizontal::Center);

    Column::new()
        .spacing(spacing::LG)
        .padding([spacing::XXL, 0.0])
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(title)
        .push(subtitle)
        .push(cta)
        .push(features)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_started_connects() {
        assert_eq!(update(&Message::GetStarted), Event::Connect);
    }
}
