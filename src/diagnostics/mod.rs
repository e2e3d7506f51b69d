// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events are captured during a session, stored in a memory-bounded circular
//! buffer, and exported as JSON on demand (the footer copies the report to
//! the clipboard).
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: owner and cheap sender
//! - [`DiagnosticReport`]: Serializable export
//!
//! # Privacy
//!
//! Messages pass through [`redact_secrets`] before they are stored, so key
//! material never reaches a report and addresses are abbreviated.

mod buffer;
mod collector;
mod events;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
pub use sanitizer::{redact_secrets, ErrorType, WarningType};
