// SPDX-License-Identifier: MPL-2.0
//! "Submit On-Chain Action": a zero-value transfer to the framework account,
//! used to demonstrate a signed transaction without moving funds.

use crate::domain::wallet::{AccountAddress, Amount, EntryFunction};
use crate::i18n::fluent::I18n;
use crate::ui::components::section;

#[derive(Debug, Clone, Default)]
pub struct State {
    submitting: bool,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submit(EntryFunction),
}

/// Payload sent by the action.
#[must_use]
pub fn payload() -> EntryFunction {
    EntryFunction::transfer(&AccountAddress::framework(), Amount::ZERO)
}

impl State {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn handle_message(&mut self, message: Message) -> Event {
        match message {
            Message::Submit if !self.submitting => {
                self.submitting = true;
                Event::Submit(payload())
            }
            Message::Submit => Event::None,
        }
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> iced::Element<'a, Message> {
        let label = if self.submitting {
            ctx.i18n.tr("action-processing")
        } else {
            ctx.i18n.tr("ledger-submit")
        };
        section::submit(label, (!self.submitting).then_some(Message::Submit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallet::TRANSFER_FUNCTION;

    #[test]
    fn payload_is_zero_transfer_to_framework() {
        let payload = payload();
        assert_eq!(payload.function, TRANSFER_FUNCTION);
        assert_eq!(payload.arguments, vec!["0x1".to_string(), "0".to_string()]);
    }

    #[test]
    fn submit_is_single_flight() {
        let mut state = State::default();
        assert!(matches!(state.handle_message(Message::Submit), Event::Submit(_)));
        assert_eq!(state.handle_message(Message::Submit), Event::None);

        state.finish();
        assert!(!state.is_submitting());
        assert!(matches!(state.handle_message(Message::Submit), Event::Submit(_)));
    }
}
