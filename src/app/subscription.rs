// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Notification expiries are not polled; each one is a delayed task. The only
//! native event the application listens to is the window close request, so
//! shutdown can be recorded in diagnostics before exiting.

use super::Message;
use iced::{event, Subscription};

/// Routes window close requests to [`Message::WindowCloseRequested`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}
