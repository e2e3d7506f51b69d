// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across the dashboard cards.
//!
//! # Components
//!
//! - [`section`] - captions, labelled inputs, submit buttons and cards

pub mod section;
