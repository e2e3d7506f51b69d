// SPDX-License-Identifier: MPL-2.0
//! `column_wallet` is a passkey-backed wallet client built with the Iced GUI
//! framework.
//!
//! Wallet operations (connect, transfer, bio registration, key export) run
//! behind the [`application::port::Wallet`] port. Their outcomes are surfaced
//! through the notification center in [`ui::notifications`], which shows
//! auto-expiring toasts with an optional block-explorer link.

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
