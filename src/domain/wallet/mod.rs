// SPDX-License-Identifier: MPL-2.0
//! Wallet domain types.
//!
//! - [`AccountAddress`], [`TxHash`], [`Amount`]: validated identifiers and amounts
//! - [`EntryFunction`], [`ModuleId`], [`Bio`]: payloads and resources

mod newtypes;
mod payload;

pub use newtypes::{units, AccountAddress, AddressError, Amount, AmountError, TxHash};
pub use payload::{Bio, EntryFunction, ModuleId, BIO_STRUCT, REGISTER_FUNCTION, TRANSFER_FUNCTION};
