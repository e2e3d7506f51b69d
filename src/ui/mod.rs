// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Sections
//!
//! - [`header`] - Brand, network, theme toggle and connect button
//! - [`hero`] - Landing call to action while disconnected
//! - [`wallet_card`] - Connected address, balance and logout
//! - [`bio`] - On-chain profile registration
//! - [`transfer`] - MOVE transfer form
//! - [`ledger`] - Demo on-chain action
//! - [`security`] - Private key export
//!
//! # Shared Infrastructure
//!
//! - [`session`] - Wallet connection state
//! - [`notifications`] - Toast notification system for user feedback
//! - [`components`] - Reusable card building blocks
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod bio;
pub mod components;
pub mod design_tokens;
pub mod header;
pub mod hero;
pub mod ledger;
pub mod notifications;
pub mod security;
pub mod session;
pub mod styles;
pub mod theming;
pub mod transfer;
pub mod wallet_card;
