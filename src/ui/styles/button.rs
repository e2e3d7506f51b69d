// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn faded(color: Color) -> Color {
    Color {
        a: opacity::DISABLED,
        ..color
    }
}

/// Solid black (light theme) or white (dark theme) call to action.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let (background, text_color) = match status {
        button::Status::Active | button::Status::Pressed => (colors.action, colors.on_action),
        button::Status::Hovered => (colors.text_secondary, colors.on_action),
        button::Status::Disabled => (faded(colors.action), faded(colors.on_action)),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Rounded variant of [`primary`] used in the header.
pub fn pill(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..primary(theme, status)
    }
}

/// Muted pill showing the connected address.
pub fn address_pill(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered => colors.surface_border,
        _ => colors.surface_secondary,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: colors.text_secondary,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button tinted with `color`.
pub fn text_link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Disabled | button::Status::Pressed => faded(color),
            _ => color,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Accent-colored link ("View on Explorer").
pub fn accent_link(theme: &Theme, status: button::Status) -> button::Style {
    text_link(ColorScheme::for_theme(theme).accent)(theme, status)
}

/// Muted link (toast close, developer tools).
pub fn muted_link(theme: &Theme, status: button::Status) -> button::Style {
    text_link(ColorScheme::for_theme(theme).text_muted)(theme, status)
}

/// Red link for destructive actions (Logout).
pub fn danger_link(theme: &Theme, status: button::Status) -> button::Style {
    text_link(palette::DANGER_TEXT)(theme, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_inverts_with_theme() {
        let light = primary(&Theme::Light, button::Status::Active);
        let dark = primary(&Theme::Dark, button::Status::Active);

        assert_eq!(light.background, Some(Background::Color(palette::BLACK)));
        assert_eq!(dark.background, Some(Background::Color(palette::WHITE)));
    }

    #[test]
    fn disabled_primary_is_faded() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn links_have_no_background() {
        let style = danger_link(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
        assert_eq!(style.text_color, palette::DANGER_TEXT);
    }
}
