// SPDX-License-Identifier: MPL-2.0
//! Warning/error categories and message redaction.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Categories of warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The settings file was unreadable or held invalid values.
    ConfigurationIssue,
    /// User input was rejected before reaching the wallet.
    Validation,
    Other,
}

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The wallet SDK reported a failure.
    Wallet,
    /// The system clipboard or browser could not be reached.
    Platform,
    Other,
}

/// `0x`-prefixed hex runs: private keys, addresses, transaction hashes.
static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0[xX]([0-9a-fA-F]{12,})").expect("hex regex should compile"));

/// 64 hex digits: a key, address or hash; longer runs are never legitimate.
const FULL_LENGTH: usize = 64;

/// Removes key material from a message and abbreviates long hex values.
///
/// Hex runs longer than a full account address are replaced with
/// `<redacted>`; other long runs keep their first and last four digits.
///
/// # Examples
///
/// ```
/// use column_wallet::diagnostics::redact_secrets;
///
/// let msg = "Transfer to 0x6572d55bc0d8e3d026d54f0ed1c7cc75 failed";
/// assert_eq!(redact_secrets(msg), "Transfer to 0x6572…cc75 failed");
/// assert_eq!(redact_secrets("Wallet is not connected"), "Wallet is not connected");
/// ```
#[must_use]
pub fn redact_secrets(message: &str) -> String {
    HEX_PATTERN
        .replace_all(message, |caps: &regex::Captures<'_>| {
            let digits = &caps[1];
            if digits.len() > FULL_LENGTH {
                "<redacted>".to_string()
            } else {
                format!("0x{}…{}", &digits[..4], &digits[digits.len() - 4..])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_values_are_untouched() {
        assert_eq!(redact_secrets("sent to 0x1"), "sent to 0x1");
        assert_eq!(redact_secrets("code 0xdeadbeef"), "code 0xdeadbeef");
    }

    #[test]
    fn full_hash_is_abbreviated() {
        let hash = format!("0x{}", "ab".repeat(32));
        assert_eq!(redact_secrets(&format!("tx {hash}")), "tx 0xabab…abab");
    }

    #[test]
    fn oversized_hex_is_removed() {
        let blob = format!("0x{}", "f".repeat(128));
        assert_eq!(redact_secrets(&blob), "<redacted>");
    }

    #[test]
    fn categories_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&WarningType::ConfigurationIssue).unwrap(),
            "\"configuration_issue\""
        );
        assert_eq!(serde_json::to_string(&ErrorType::Wallet).unwrap(), "\"wallet\"");
    }
}
