// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`wallet`]: Addresses, amounts and transaction payloads
//!   ([`AccountAddress`](wallet::AccountAddress), [`Amount`](wallet::Amount),
//!   [`EntryFunction`](wallet::EntryFunction))

pub mod diagnostics;
pub mod wallet;
