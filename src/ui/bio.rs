// SPDX-License-Identifier: MPL-2.0
//! On-chain bio card: shows the registered profile and edits it.

use crate::domain::wallet::Bio;
use crate::i18n::fluent::I18n;
use crate::ui::components::section;
use crate::ui::design_tokens::{border, radius, spacing, typography};
use crate::ui::notifications::Notifier;
use crate::ui::theming::ColorScheme;
use iced::{
    widget::{container, text, Column, Container, Row, Space, Text},
    Background, Border, Element, Length, Theme,
};

#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    bio: String,
    submitting: bool,
    /// A read of the current bio is in flight.
    syncing: bool,
    current: Option<Bio>,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    BioChanged(String),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Register { name: String, bio: String },
}

impl State {
    #[must_use]
    pub fn current(&self) -> Option<&Bio> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.name.trim().is_empty() && !self.bio.trim().is_empty()
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        i18n: &I18n,
        notifier: &mut Notifier<'_>,
    ) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::BioChanged(value) => {
                self.bio = value;
                Event::None
            }
            Message::Submit => {
                if self.submitting {
                    return Event::None;
                }
                let name = self.name.trim();
                let bio = self.bio.trim();
                if name.is_empty() || bio.is_empty() {
                    notifier.info(i18n.tr("notification-bio-missing-fields"));
                    return Event::None;
                }
                self.submitting = true;
                Event::Register {
                    name: name.to_string(),
                    bio: bio.to_string(),
                }
            }
        }
    }

    pub fn begin_sync(&mut self) {
        self.syncing = true;
    }

    /// Stores the result of a bio read; `None` means nothing is registered.
    pub fn synced(&mut self, bio: Option<Bio>) {
        self.syncing = false;
        self.current = bio;
    }

    /// A failed read keeps whatever was shown before.
    pub fn sync_failed(&mut self) {
        self.syncing = false;
    }

    pub fn finish(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.name.clear();
            self.bio.clear();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let mut heading = Row::new()
            .push(section::caption(i18n.tr("bio-title")))
            .push(Space::new().width(Length::Fill));
        if self.syncing {
            heading = heading.push(
                Text::new(i18n.tr("bio-syncing"))
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(ColorScheme::for_theme(theme).accent),
                    }),
            );
        }

        let mut content = Column::new().spacing(spacing::MD).push(heading);

        if let Some(current) = &self.current {
            content = content.push(current_bio(i18n, current));
        }

        let editable = !self.submitting;
        content = content.push(section::field(
                i18n.tr("bio-name-label"),
                &i18n.tr("bio-name-placeholder"),
                &self.name,
                editable.then_some(Message::NameChanged as fn(String) -> Message),
            ))
            .push(section::field(
                i18n.tr("bio-text-label"),
                &i18n.tr("bio-text-placeholder"),
                &self.bio,
                editable.then_some(Message::BioChanged as fn(String) -> Message),
            ));

        let label = if self.submitting {
            i18n.tr("action-processing")
        } else if self.current.is_some() {
            i18n.tr("bio-update")
        } else {
            i18n.tr("bio-register")
        };
        content = content.push(section::submit(
            label,
            self.can_submit().then_some(Message::Submit),
        ));

        section::card(content)
    }
}

fn current_bio<'a>(i18n: &I18n, bio: &'a Bio) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXS)
        .push(section::caption(i18n.tr("bio-current")))
        .push(Text::new(bio.name.as_str()).size(typography::BODY))
        .push(
            Text::new(format!("\u{201c}{}\u{201d}", bio.bio))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_secondary),
                }),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|theme: &Theme| {
            let colors = ColorScheme::for_theme(theme);
            container::Style {
                background: Some(Background::Color(colors.surface_primary)),
                border: Border {
                    color: colors.accent,
                    width: border::WIDTH_SM,
                    radius: radius::MD.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::notifications::{Center, Severity};

    fn send(state: &mut State, center: &mut Center, message: Message) -> Event {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        state.handle_message(message, &i18n, &mut center.notifier())
    }

    #[test]
    fn missing_fields_show_info() {
        let mut state = State::default();
        let mut center = Center::new();
        send(&mut state, &mut center, Message::NameChanged("Ada".into()));

        assert_eq!(send(&mut state, &mut center, Message::Submit), Event::None);
        let notification = center.live().next().expect("notification");
        assert_eq!(notification.severity(), Severity::Info);
        assert_eq!(notification.message(), "Please enter your name and bio");
    }

    #[test]
    fn register_trims_inputs() {
        let mut state = State::default();
        let mut center = Center::new();
        send(&mut state, &mut center, Message::NameChanged("  Ada ".into()));
        send(&mut state, &mut center, Message::BioChanged("Engines ".into()));

        assert_eq!(
            send(&mut state, &mut center, Message::Submit),
            Event::Register {
                name: "Ada".into(),
                bio: "Engines".into()
            }
        );
        assert!(state.is_submitting());
        assert_eq!(send(&mut state, &mut center, Message::Submit), Event::None);
    }

    #[test]
    fn sync_lifecycle() {
        let mut state = State::default();
        state.begin_sync();
        assert!(state.is_syncing());

        let bio = Bio {
            name: "Ada".into(),
            bio: "Engines".into(),
        };
        state.synced(Some(bio.clone()));
        assert!(!state.is_syncing());
        assert_eq!(state.current(), Some(&bio));

        state.begin_sync();
        state.sync_failed();
        assert_eq!(state.current(), Some(&bio));

        state.synced(None);
        assert!(state.current().is_none());
    }
}
