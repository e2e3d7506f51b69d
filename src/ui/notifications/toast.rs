// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Each toast is a small card: the message in its severity color, a close
//! button, an optional explorer link and a thin accent bar at the bottom.

use super::center::{Center, Message};
use super::notification::Notification;
use crate::config::NetworkConfig;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &I18n,
        network: &NetworkConfig,
    ) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent = severity.accent();

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(severity.text_color(&ColorScheme::for_theme(theme))),
            });

        let dismiss = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XXS])
            .style(styles::button::muted_link);

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(Container::new(message).width(Length::Fill))
            .push(dismiss);

        let mut body = Column::new().spacing(spacing::XS).push(header);

        if let Some(url) = notification.link_target(network) {
            let link = button(
                Text::new(i18n.tr("notification-explorer-link")).size(typography::BODY_SM),
            )
            .on_press(Message::OpenExplorer(url))
            .padding(0)
            .style(styles::button::accent_link);
            body = body.push(link);
        }

        let accent_bar = Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TOAST_ACCENT_HEIGHT))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                border: Border {
                    radius: radius::SM.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        let content = Column::new()
            .spacing(spacing::SM)
            .push(Container::new(body).padding([spacing::SM, spacing::MD]))
            .push(accent_bar);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Renders every live notification, newest last, in the bottom-right
    /// corner.
    pub fn view_overlay<'a>(
        center: &'a Center,
        i18n: &I18n,
        network: &NetworkConfig,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = center
            .live()
            .map(|notification| Self::view(notification, i18n, network))
            .collect();

        if toasts.is_empty() {
            return Container::new(Space::new())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::LG)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: Color {
                a: opacity::TINT,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::TOAST,
        text_color: Some(colors.text_primary),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn container_border_is_tinted_accent() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500);

        assert_eq!(style.border.color.r, palette::SUCCESS_500.r);
        assert_eq!(style.border.color.a, opacity::TINT);
        assert!(style.background.is_some());
        assert_eq!(style.shadow, shadow::TOAST);
    }

    #[test]
    fn container_background_follows_theme() {
        let light = toast_container_style(&Theme::Light, palette::ERROR_500);
        let dark = toast_container_style(&Theme::Dark, palette::ERROR_500);

        assert_eq!(
            light.background,
            Some(Background::Color(ColorScheme::light().surface_primary))
        );
        assert_eq!(
            dark.background,
            Some(Background::Color(ColorScheme::dark().surface_primary))
        );
    }
}
