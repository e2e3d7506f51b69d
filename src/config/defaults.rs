// SPDX-License-Identifier: MPL-2.0
//! Default values for every setting.
//!
//! The Movement testnet values are what the client targets when no
//! `settings.toml` exists.

// ==========================================================================
// Network
// ==========================================================================

/// Display name of the default network.
pub const DEFAULT_NETWORK_NAME: &str = "testnet";

/// Full node REST endpoint of the default network.
pub const DEFAULT_RPC_URL: &str = "https://testnet.movementnetwork.xyz/v1";

/// Explorer transaction page; `{hash}` is replaced with the transaction hash.
pub const DEFAULT_EXPLORER_URL: &str =
    "https://explorer.movementnetwork.xyz/txn/{hash}?network=testnet";

/// Placeholder substituted in explorer templates.
pub const EXPLORER_HASH_PLACEHOLDER: &str = "{hash}";

// ==========================================================================
// Bio Module
// ==========================================================================

/// Account publishing the bio module on testnet.
pub const DEFAULT_BIO_MODULE_ADDRESS: &str =
    "0x6572d55bc0d8e3d026d54f0ed1c7cc75e2492515cfd803cb12adb84776f21036";

pub const DEFAULT_BIO_MODULE_NAME: &str = "onchain_bio";

// ==========================================================================
// Diagnostics
// ==========================================================================

pub use crate::domain::diagnostics::buffer_capacity_bounds::{
    DEFAULT as DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, MAX as MAX_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN as MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};
