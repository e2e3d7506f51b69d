// SPDX-License-Identifier: MPL-2.0
//! Building blocks of the dashboard cards: captions, labelled inputs and the
//! full-width submit button.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length, Theme};

/// Upper-case muted caption heading a section or a field.
pub fn caption<'a>(label: String) -> Text<'a> {
    Text::new(label)
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        })
}

/// Caption above a single-line input. The input is read-only when
/// `on_input` is `None`.
pub fn field<'a, M: Clone + 'a>(
    label: String,
    placeholder: &str,
    value: &str,
    on_input: Option<fn(String) -> M>,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input_maybe(on_input)
        .size(typography::BODY)
        .padding(spacing::SM);

    Column::new()
        .spacing(spacing::XS)
        .push(caption(label))
        .push(input)
        .into()
}

/// Primary full-width button; disabled when `on_press` is `None`.
pub fn submit<'a, M: Clone + 'a>(label: String, on_press: Option<M>) -> Element<'a, M> {
    button(
        Container::new(Text::new(label).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press_maybe(on_press)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .into()
}

/// Bordered card around one dashboard section.
pub fn card<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
