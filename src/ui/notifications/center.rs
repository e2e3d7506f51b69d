// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle.
//!
//! The [`Center`] owns every live notification. Producers never touch it
//! directly: they receive a [`Notifier`], a short-lived borrow of the center
//! handed out while a message is being processed. Because the notifier
//! borrows the center, it cannot be stored in component state or sent to a
//! background task; such code is rejected by the compiler:
//!
//! ```compile_fail
//! use column_wallet::ui::notifications::{Center, Notifier};
//!
//! fn keep_for_later(center: &mut Center) -> Notifier<'static> {
//!     center.notifier()
//! }
//! ```
//!
//! Each `show` captures its own deadline, [`LIFETIME`] after the call. The
//! pending [`Expiry`] values are drained by the application after every
//! update and turned into delayed messages, so expiries of different
//! notifications never interfere and are never lost.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, ErrorType, UserAction};
use crate::domain::wallet::TxHash;
use iced::Task;
use std::time::Duration;
use tokio::time::Instant;

/// How long a notification stays visible.
pub const LIFETIME: Duration = Duration::from_millis(5000);

/// Messages handled by the center.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button was pressed.
    Dismiss(NotificationId),
    /// The notification's lifetime elapsed.
    Expired(NotificationId),
    /// "View on Explorer" was pressed.
    OpenExplorer(String),
}

/// Work the center asks the application to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenUrl(String),
}

/// Scheduled removal of one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    id: NotificationId,
    deadline: Instant,
}

impl Expiry {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Resolves to the notification id once the deadline is reached.
    pub async fn wait(self) -> NotificationId {
        tokio::time::sleep_until(self.deadline).await;
        self.id
    }
}

/// Owner of the live notification sequence (oldest first).
#[derive(Debug, Default)]
pub struct Center {
    live: Vec<Notification>,
    pending: Vec<Expiry>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Center {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Error notifications are also recorded through `handle`.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Opens the notification scope.
    pub fn notifier(&mut self) -> Notifier<'_> {
        Notifier { center: self }
    }

    fn push(&mut self, severity: Severity, message: String, link: Option<TxHash>, kind: ErrorType) {
        if severity == Severity::Error {
            if let Some(handle) = &self.diagnostics {
                handle.log_error(kind, message.as_str());
            }
        }

        let notification = Notification::new(severity, message, link);
        self.pending.push(Expiry {
            id: notification.id(),
            deadline: notification.created_at() + LIFETIME,
        });
        self.live.push(notification);
    }

    /// Removes `id` early. Returns `false` if it was not live.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    /// Removes `id` when its lifetime ends. Returns `false` if it was
    /// already dismissed.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.live.len();
        self.live.retain(|notification| notification.id() != id);
        self.live.len() != before
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Dismiss(id) => {
                if self.dismiss(id) {
                    if let Some(handle) = &self.diagnostics {
                        handle.log_action(UserAction::DismissNotification);
                    }
                }
                Effect::None
            }
            Message::Expired(id) => {
                self.expire(id);
                Effect::None
            }
            Message::OpenExplorer(url) => Effect::OpenUrl(url),
        }
    }

    /// Live notifications in creation order.
    pub fn live(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Expiries scheduled since the last call.
    pub fn take_expiries(&mut self) -> Vec<Expiry> {
        std::mem::take(&mut self.pending)
    }

    /// Turns pending expiries into one delayed [`Message::Expired`] each.
    pub fn scheduled(&mut self) -> Task<Message> {
        let tasks: Vec<_> = self
            .take_expiries()
            .into_iter()
            .map(|expiry| Task::perform(expiry.wait(), Message::Expired))
            .collect();
        Task::batch(tasks)
    }
}

/// Capability to add notifications, valid while the center is borrowed.
#[derive(Debug)]
pub struct Notifier<'a> {
    center: &'a mut Center,
}

impl Notifier<'_> {
    /// Appends a notification that disappears [`LIFETIME`] from now.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, link: Option<TxHash>) {
        self.center.push(severity, message.into(), link, ErrorType::Other);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Success, None);
    }

    /// Success tied to a submitted transaction.
    pub fn success_with_link(&mut self, message: impl Into<String>, hash: TxHash) {
        self.show(message, Severity::Success, Some(hash));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, Severity::Info, None);
    }

    /// Error notification, recorded in diagnostics under `kind`.
    pub fn error(&mut self, kind: ErrorType, message: impl Into<String>) {
        self.center.push(Severity::Error, message.into(), None, kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};

    fn ids(center: &Center) -> Vec<NotificationId> {
        center.live().map(Notification::id).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn show_appends_and_schedules() {
        let mut center = Center::new();
        center.notifier().info("Address copied to clipboard");

        assert_eq!(center.len(), 1);
        let notification = center.live().next().expect("one notification");
        assert_eq!(notification.severity(), Severity::Info);
        assert_eq!(notification.message(), "Address copied to clipboard");
        assert!(notification.link().is_none());
        let id = notification.id();

        let expiries = center.take_expiries();
        assert_eq!(expiries.len(), 1);
        assert_eq!(expiries[0].id(), id);
        assert!(center.take_expiries().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_fires_exactly_after_lifetime() {
        let mut center = Center::new();
        let start = Instant::now();
        center.notifier().info("Address copied to clipboard");
        let expiry = center.take_expiries().remove(0);

        let id = expiry.wait().await;
        assert_eq!(start.elapsed(), LIFETIME);

        assert!(center.expire(id));
        assert!(center.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn later_shows_do_not_reset_earlier_timers() {
        let mut center = Center::new();
        let start = Instant::now();

        center.notifier().success("first");
        tokio::time::advance(Duration::from_millis(1_000)).await;
        center
            .notifier()
            .error(ErrorType::Wallet, "Transfer failed: rejected");

        let expiries = center.take_expiries();
        assert_eq!(expiries[0].deadline() - start, LIFETIME);
        assert_eq!(
            expiries[1].deadline() - start,
            LIFETIME + Duration::from_millis(1_000)
        );

        let first = expiries[0].wait().await;
        assert_eq!(start.elapsed(), LIFETIME);
        center.expire(first);
        assert_eq!(center.len(), 1);
        assert_eq!(center.live().next().map(Notification::severity), Some(Severity::Error));

        let second = expiries[1].wait().await;
        assert_eq!(start.elapsed(), LIFETIME + Duration::from_millis(1_000));
        center.expire(second);
        assert!(center.is_empty());
    }

    #[test]
    fn dismiss_then_expire_is_a_no_op() {
        let mut center = Center::new();
        center
            .notifier()
            .success_with_link("Success! Transaction submitted.", TxHash::new("0xabc123"));
        let id = ids(&center)[0];

        assert_eq!(center.handle_message(Message::Dismiss(id)), Effect::None);
        assert!(center.is_empty());

        assert_eq!(center.handle_message(Message::Expired(id)), Effect::None);
        assert!(center.is_empty());
        assert!(!center.dismiss(id));
    }

    #[test]
    fn dismissing_unknown_id_changes_nothing() {
        let mut center = Center::new();
        center.notifier().info("one");
        center.notifier().info("two");
        let before = ids(&center);

        let stale = before[0];
        center.dismiss(stale);
        let after_first = ids(&center);

        assert!(!center.dismiss(stale));
        assert_eq!(ids(&center), after_first);
        assert_eq!(after_first, before[1..].to_vec());
    }

    #[test]
    fn live_sequence_keeps_creation_order() {
        let mut center = Center::new();
        {
            let mut notifier = center.notifier();
            notifier.info("a");
            notifier.success("b");
            notifier.error(ErrorType::Other, "c");
        }

        let messages: Vec<_> = center.live().map(|n| n.message().to_string()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);

        let middle = ids(&center)[1];
        center.dismiss(middle);
        let messages: Vec<_> = center.live().map(|n| n.message().to_string()).collect();
        assert_eq!(messages, vec!["a", "c"]);
    }

    #[test]
    fn open_explorer_becomes_effect() {
        let mut center = Center::new();
        let url = "https://explorer.movementnetwork.xyz/txn/0xabc123?network=testnet".to_string();
        assert_eq!(
            center.handle_message(Message::OpenExplorer(url.clone())),
            Effect::OpenUrl(url)
        );
    }

    #[test]
    fn errors_are_recorded_in_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut center = Center::new();
        center.set_diagnostics(collector.handle());

        center.notifier().info("not recorded");
        center.notifier().error(ErrorType::Wallet, "Transfer failed: rejected");
        collector.process_pending();

        let recorded: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            recorded,
            vec![DiagnosticEventKind::Error {
                error_type: ErrorType::Wallet,
                message: "Transfer failed: rejected".to_string(),
            }]
        );
    }
}
