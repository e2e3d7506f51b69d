// SPDX-License-Identifier: MPL-2.0
//! Developer tools: private key export behind an inline confirmation.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{button, container, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Export flow step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Step {
    #[default]
    Idle,
    Confirming,
    Exporting,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    step: Step,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    RequestExport,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user accepted the risk; export and copy the key.
    ExportKey,
}

impl State {
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.step == Step::Confirming
    }

    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.step == Step::Exporting
    }

    pub fn handle_message(&mut self, message: Message) -> Event {
        match (self.step, message) {
            (Step::Idle, Message::RequestExport) => {
                self.step = Step::Confirming;
                Event::None
            }
            (Step::Confirming, Message::Confirm) => {
                self.step = Step::Exporting;
                Event::ExportKey
            }
            (Step::Confirming, Message::Cancel) => {
                self.step = Step::Idle;
                Event::None
            }
            _ => Event::None,
        }
    }

    pub fn finish(&mut self) {
        self.step = Step::Idle;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let divider = Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(1.0))
            .style(styles::container::divider);

        let content: Element<'a, Message> = match self.step {
            Step::Idle => button(Text::new(i18n.tr("security-export")).size(typography::CAPTION))
                .on_press(Message::RequestExport)
                .padding(0)
                .style(styles::button::muted_link)
                .into(),
            Step::Confirming => Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new(i18n.tr("security-warning"))
                        .size(typography::BODY_SM)
                        .style(|theme: &Theme| text::Style {
                            color: Some(ColorScheme::for_theme(theme).error),
                        }),
                )
                .push(
                    Row::new()
                        .spacing(spacing::MD)
                        .push(
                            button(Text::new(i18n.tr("security-confirm")).size(typography::BODY_SM))
                                .on_press(Message::Confirm)
                                .padding(0)
                                .style(styles::button::danger_link),
                        )
                        .push(
                            button(Text::new(i18n.tr("security-cancel")).size(typography::BODY_SM))
                                .on_press(Message::Cancel)
                                .padding(0)
                                .style(styles::button::muted_link),
                        ),
                )
                .into(),
            Step::Exporting => Text::new(i18n.tr("security-exporting"))
                .size(typography::CAPTION)
                .into(),
        };

        Column::new()
            .spacing(spacing::MD)
            .push(divider)
            .push(container(content).center_x(Length::Fill))
            .into()
    }
}
