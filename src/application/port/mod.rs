// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`wallet`]: Passkey wallet session, signing and chain reads
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no SDK types)
//! - Traits are `Send + Sync` for sharing across async tasks
//! - Methods return futures with domain error types; callers wrap them in
//!   Iced's `Task::perform`

pub mod wallet;

pub use wallet::{SharedWallet, Wallet, WalletError};
