// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer talks to the wallet only through the port
//!
//! # Example
//!
//! ```ignore
//! use column_wallet::application::port::{SharedWallet, Wallet};
//! use column_wallet::infrastructure::simulated::SimulatedWallet;
//! use std::sync::Arc;
//!
//! let wallet: SharedWallet = Arc::new(SimulatedWallet::new("device-seed"));
//! ```

pub mod port;
