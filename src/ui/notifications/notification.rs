// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::config::NetworkConfig;
use crate::domain::wallet::TxHash;
use crate::ui::design_tokens::palette;
use crate::ui::theming::ColorScheme;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::time::Instant;

/// Unique identifier for a notification. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level; determines the toast's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Accent used for the toast border and progress bar.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Message text color in the given scheme.
    #[must_use]
    pub fn text_color(self, colors: &ColorScheme) -> Color {
        match self {
            Severity::Success => colors.success,
            Severity::Error => colors.error,
            Severity::Info => colors.info,
        }
    }
}

/// A transient message owned by the notification center.
///
/// All fields are fixed at creation.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    link: Option<TxHash>,
    created_at: Instant,
}

impl Notification {
    pub(super) fn new(severity: Severity, message: String, link: Option<TxHash>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message,
            link,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Transaction the notification refers to, if any.
    #[must_use]
    pub fn link(&self) -> Option<&TxHash> {
        self.link.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Explorer page for the linked transaction.
    #[must_use]
    pub fn link_target(&self, network: &NetworkConfig) -> Option<String> {
        self.link.as_ref().map(|hash| network.explorer_link(hash))
    }
}
