// SPDX-License-Identifier: MPL-2.0
//! MOVE transfer form.
//!
//! The form validates its inputs locally and hands a typed transfer to the
//! application, which submits it through the wallet port and reports back
//! with [`State::finish`].

use crate::domain::wallet::{units, AccountAddress, Amount};
use crate::i18n::fluent::I18n;
use crate::ui::components::section;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::Notifier;
use crate::ui::session::balance_label;
use iced::{
    widget::{Column, Row, Space},
    Element, Length,
};

/// Form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    recipient: String,
    amount: String,
    submitting: bool,
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub balance: Option<Amount>,
}

#[derive(Debug, Clone)]
pub enum Message {
    RecipientChanged(String),
    AmountChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Validated transfer ready to be signed.
    Submit {
        recipient: AccountAddress,
        amount: Amount,
    },
}

impl State {
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[must_use]
    pub fn amount(&self) -> &str {
        &self.amount
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit button accepts presses.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.recipient.trim().is_empty() && !self.amount.trim().is_empty()
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        i18n: &I18n,
        notifier: &mut Notifier<'_>,
    ) -> Event {
        match message {
            Message::RecipientChanged(value) => {
                self.recipient = value;
                Event::None
            }
            Message::AmountChanged(value) => {
                self.amount = value;
                Event::None
            }
            Message::Submit => self.validate(i18n, notifier),
        }
    }

    fn validate(&mut self, i18n: &I18n, notifier: &mut Notifier<'_>) -> Event {
        if self.submitting {
            return Event::None;
        }
        if self.recipient.trim().is_empty() || self.amount.trim().is_empty() {
            notifier.info(i18n.tr("notification-transfer-missing-fields"));
            return Event::None;
        }

        let recipient = match AccountAddress::parse(&self.recipient) {
            Ok(address) => address,
            Err(err) => {
                notifier.info(i18n.tr_with_args(
                    "notification-transfer-invalid-address",
                    &[("error", err.to_string().as_str())],
                ));
                return Event::None;
            }
        };

        let amount = match Amount::parse_move(&self.amount) {
            Ok(amount) => amount,
            Err(err) => {
                notifier.info(i18n.tr_with_args(
                    "notification-transfer-invalid-amount",
                    &[("error", err.to_string().as_str())],
                ));
                return Event::None;
            }
        };

        self.submitting = true;
        Event::Submit { recipient, amount }
    }

    /// Ends a submission; inputs are cleared only when it succeeded.
    pub fn finish(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.recipient.clear();
            self.amount.clear();
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    #[allow(clippy::needless_pass_by_value)]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let balance = format!("{} {}", balance_label(ctx.balance), units::SYMBOL);

        let heading = Row::new()
            .push(section::caption(i18n.tr("transfer-title")))
            .push(Space::new().width(Length::Fill))
            .push(section::caption(
                i18n.tr_with_args("transfer-balance", &[("amount", balance.as_str())]),
            ));

        let editable = !self.submitting;
        let recipient = section::field(
            i18n.tr("transfer-recipient-label"),
            &i18n.tr("transfer-recipient-placeholder"),
            &self.recipient,
            editable.then_some(Message::RecipientChanged as fn(String) -> Message),
        );
        let amount = section::field(
            i18n.tr("transfer-amount-label"),
            &i18n.tr("transfer-amount-placeholder"),
            &self.amount,
            editable.then_some(Message::AmountChanged as fn(String) -> Message),
        );

        let label = if self.submitting {
            i18n.tr("action-processing")
        } else {
            i18n.tr("transfer-submit")
        };
        let submit = section::submit(label, self.can_submit().then_some(Message::Submit));

        section::card(
            Column::new()
                .spacing(spacing::MD)
                .push(heading)
                .push(recipient)
                .push(amount)
                .push(submit),
        )
    }
}
