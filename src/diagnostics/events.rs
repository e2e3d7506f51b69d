// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::{ErrorType, WarningType};

/// User-initiated actions worth correlating with failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Connect,
    Disconnect,
    SubmitTransfer,
    RegisterBio,
    SubmitAction,
    ExportKey,
    CopyAddress,
    OpenExplorer,
    DismissNotification,
    ToggleTheme,
    CopyDiagnostics,
}

/// Application state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    Started {
        version: String,
        network: String,
        /// Node the wallet was configured against.
        rpc_url: String,
    },
    SessionOpened,
    SessionClosed,
    /// A transaction was accepted by the wallet.
    TransactionSubmitted,
    ShuttingDown,
}

/// A diagnostic event and the monotonic instant it was recorded at.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and payload of a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    AppState {
        #[serde(flatten)]
        state: AppStateEvent,
    },
    Warning {
        warning_type: WarningType,
        message: String,
    },
    Error {
        error_type: ErrorType,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_timestamp_keeps_instant() {
        let now = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::UserAction {
                action: UserAction::Connect,
                details: None,
            },
            now,
        );
        assert_eq!(event.timestamp, now);
    }

    #[test]
    fn error_serializes_with_tag() {
        let kind = DiagnosticEventKind::Error {
            error_type: ErrorType::Wallet,
            message: "Transfer failed".to_string(),
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");

        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("\"error_type\":\"wallet\""));
        assert!(json.contains("\"message\":\"Transfer failed\""));
    }

    #[test]
    fn app_state_is_flattened() {
        let kind = DiagnosticEventKind::AppState {
            state: AppStateEvent::Started {
                version: "0.3.0".to_string(),
                network: "testnet".to_string(),
                rpc_url: "https://testnet.movementnetwork.xyz/v1".to_string(),
            },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");

        assert!(json.contains("\"type\":\"app_state\""));
        assert!(json.contains("\"state\":\"started\""));
        assert!(json.contains("\"network\":\"testnet\""));
    }

    #[test]
    fn user_action_omits_empty_details() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::SubmitTransfer,
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");

        assert!(json.contains("\"action\":\"submit_transfer\""));
        assert!(!json.contains("details"));
    }
}
