// SPDX-License-Identifier: MPL-2.0
//! Transaction payloads and on-chain resources understood by the client.

use super::newtypes::{AccountAddress, Amount};
use std::fmt;

/// Fully qualified coin transfer entry function.
pub const TRANSFER_FUNCTION: &str = "0x1::aptos_account::transfer";

/// Name of the entry function registering a bio.
pub const REGISTER_FUNCTION: &str = "register";

/// Name of the struct holding an account's bio.
pub const BIO_STRUCT: &str = "Bio";

/// A Move module, identified by its publisher address and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    pub address: AccountAddress,
    pub name: String,
}

impl ModuleId {
    #[must_use]
    pub fn new(address: AccountAddress, name: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
        }
    }

    /// Returns `<address>::<module>::<member>`.
    #[must_use]
    pub fn member(&self, member: &str) -> String {
        format!("{}::{}::{}", self.address, self.name, member)
    }

    /// Resource type tag for a struct published by this module.
    #[must_use]
    pub fn resource_type(&self, structure: &str) -> String {
        self.member(structure)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

/// An entry function call ready to be signed and submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFunction {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<String>,
}

impl EntryFunction {
    /// Coin transfer of `amount` to `recipient`.
    #[must_use]
    pub fn transfer(recipient: &AccountAddress, amount: Amount) -> Self {
        Self {
            function: TRANSFER_FUNCTION.to_string(),
            type_arguments: Vec::new(),
            arguments: vec![recipient.to_string(), amount.octas().to_string()],
        }
    }

    /// Registers (or replaces) the signer's bio.
    #[must_use]
    pub fn register_bio(module: &ModuleId, name: &str, bio: &str) -> Self {
        Self {
            function: module.member(REGISTER_FUNCTION),
            type_arguments: Vec::new(),
            arguments: vec![name.to_string(), bio.to_string()],
        }
    }
}

/// Profile stored on-chain under an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bio {
    pub name: String,
    pub bio: String,
}
