// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: In-memory passkey wallet (implements [`Wallet`])
//!
//! [`Wallet`]: crate::application::port::Wallet

pub mod simulated;

pub use simulated::SimulatedWallet;
