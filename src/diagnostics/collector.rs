// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    redact_secrets, AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent,
    DiagnosticEventKind, DiagnosticReport, ErrorType, ReportMetadata, SerializableEvent,
    UserAction, WarningType,
};

/// Events sent by handles and not yet drained by the collector.
const CHANNEL_CAPACITY: usize = 100;

/// Sender side of the collector.
///
/// Cheap to clone. Every method is non-blocking and drops the event when the
/// channel is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_action_with_details(&self, action: UserAction, details: impl Into<String>) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: Some(redact_secrets(&details.into())),
        });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    /// Records a warning; the message is redacted first.
    pub fn log_warning(&self, warning_type: WarningType, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            warning_type,
            message: redact_secrets(&message.into()),
        });
    }

    /// Records an error; the message is redacted first.
    pub fn log_error(&self, error_type: ErrorType, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            error_type,
            message: redact_secrets(&message.into()),
        });
    }
}

/// Central collector for diagnostic events.
///
/// Receives events from [`DiagnosticsHandle`]s and keeps the most recent ones
/// in a [`CircularBuffer`].
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
    network: String,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity, network: impl Into<String>) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
            network: network.into(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Called once per update cycle.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an action directly, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
                action,
                details: None,
            }));
    }

    /// Logs a state change directly, bypassing the channel.
    pub fn log_state(&mut self, state: AppStateEvent) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::AppState { state }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the buffered events.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(event.timestamp, self.started_at, event.kind.clone())
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.started_at_utc,
            self.started_at.elapsed().as_millis() as u64,
            events.len(),
            &self.network,
        );

        DiagnosticReport { metadata, events }
    }

    /// Exports the buffered events as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.report().to_json()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default(), "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::Connect);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn handle_is_clone() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.log_action(UserAction::Connect);
        second.log_action(UserAction::Disconnect);
        collector.process_pending();

        let actions: Vec<_> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action, .. } => Some(*action),
                _ => None,
            })
            .collect();
        assert_eq!(actions, vec![UserAction::Connect, UserAction::Disconnect]);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..CHANNEL_CAPACITY + 25 {
            handle.log_action(UserAction::CopyAddress);
        }
        collector.process_pending();

        assert_eq!(collector.len(), CHANNEL_CAPACITY);
    }

    #[test]
    fn errors_are_redacted() {
        let mut collector = DiagnosticsCollector::default();
        let key = format!("0x{}", "7".repeat(64));

        collector
            .handle()
            .log_error(ErrorType::Wallet, format!("export failed for {key}"));
        collector.process_pending();

        let stored = collector.iter().next().expect("one event");
        match &stored.kind {
            DiagnosticEventKind::Error { message, .. } => {
                assert!(!message.contains(&key));
                assert!(message.starts_with("export failed for 0x7777"));
            }
            other => panic!("expected error event, got {other:?}"),
        }
    }

    #[test]
    fn export_json_lists_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default(), "testnet");
        collector.log_state(AppStateEvent::SessionOpened);
        collector.log_action(UserAction::SubmitTransfer);

        let json = collector.export_json().expect("export should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(parsed["metadata"]["event_count"], 2);
        assert_eq!(parsed["events"][0]["state"], "session_opened");
        assert_eq!(parsed["events"][1]["action"], "submit_transfer");
    }
}
