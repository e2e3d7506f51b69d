// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Any handler that is processing a message can announce an outcome through a
//! [`Notifier`]; the [`Center`] keeps the live list and the [`Toast`] overlay
//! renders it in the bottom-right corner.
//!
//! # Components
//!
//! - [`notification`] - `Notification` data and severity levels
//! - [`center`] - lifecycle: show, dismiss, timed expiry
//! - [`toast`] - toast widget and overlay
//!
//! # Usage
//!
//! ```
//! use column_wallet::ui::notifications::{Center, Severity};
//!
//! let mut center = Center::new();
//! center.notifier().show("Address copied to clipboard", Severity::Info, None);
//! assert_eq!(center.len(), 1);
//! ```
//!
//! Every notification lives for five seconds unless it is closed first.
//! Removal is idempotent: a late expiry for a dismissed toast does nothing.

pub mod center;
pub mod notification;
mod toast;

pub use center::{Center, Effect, Expiry, Message as NotificationMessage, Notifier, LIFETIME};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
