// SPDX-License-Identifier: MPL-2.0
//! Wallet newtypes.
//!
//! Type-safe wrappers for on-chain identifiers and token amounts. Parsing is
//! strict so invalid user input is rejected before it reaches the wallet.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Units
// =============================================================================

/// Token unit constants.
pub mod units {
    /// Number of octas in one MOVE.
    pub const OCTAS_PER_MOVE: u64 = 100_000_000;
    /// Number of fractional digits a MOVE amount may carry.
    pub const DECIMALS: usize = 8;
    /// Minimum number of fractional digits shown when formatting.
    pub const MIN_DISPLAY_DECIMALS: usize = 2;
    /// Ticker shown next to amounts.
    pub const SYMBOL: &str = "MOVE";
}

/// Maximum number of hex digits in an account address.
const MAX_ADDRESS_DIGITS: usize = 64;

// =============================================================================
// AccountAddress
// =============================================================================

/// Reasons an account address can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    Empty,
    MissingPrefix,
    TooLong,
    InvalidHex,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::Empty => write!(f, "address is empty"),
            AddressError::MissingPrefix => write!(f, "address must start with 0x"),
            AddressError::TooLong => {
                write!(f, "address has more than {MAX_ADDRESS_DIGITS} hex digits")
            }
            AddressError::InvalidHex => write!(f, "address contains non-hex characters"),
        }
    }
}

impl std::error::Error for AddressError {}

/// An on-chain account address (`0x` followed by 1–64 hex digits).
///
/// Stored lower-cased so two spellings of the same address compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Parses and normalizes an address typed by the user.
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;
        if digits.is_empty() {
            return Err(AddressError::Empty);
        }
        if digits.len() > MAX_ADDRESS_DIGITS {
            return Err(AddressError::TooLong);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidHex);
        }
        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    /// Builds an address from raw bytes (32 bytes for a full account).
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut hex = String::with_capacity(2 + bytes.len() * 2);
        hex.push_str("0x");
        for byte in bytes {
            hex.push_str(&format!("{byte:02x}"));
        }
        Self(hex)
    }

    /// The `0x1` framework account.
    #[must_use]
    pub fn framework() -> Self {
        Self("0x1".to_string())
    }

    /// Returns the full `0x…` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviates the address as `<first lead chars>...<last tail chars>`.
    ///
    /// The `0x` prefix counts towards `lead`. Short addresses are returned
    /// unchanged.
    #[must_use]
    pub fn short(&self, lead: usize, tail: usize) -> String {
        if self.0.len() <= lead + tail {
            return self.0.clone();
        }
        format!("{}...{}", &self.0[..lead], &self.0[self.0.len() - tail..])
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// TxHash
// =============================================================================

/// Identifier of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(String);

impl TxHash {
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Amount
// =============================================================================

/// Reasons a MOVE amount can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Empty,
    Negative,
    Invalid,
    TooManyDecimals,
    Overflow,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Empty => write!(f, "amount is empty"),
            AmountError::Negative => write!(f, "amount cannot be negative"),
            AmountError::Invalid => write!(f, "amount is not a number"),
            AmountError::TooManyDecimals => {
                write!(f, "amount has more than {} decimals", units::DECIMALS)
            }
            AmountError::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for AmountError {}

/// A token amount in octas (1 MOVE = 10^8 octas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    #[must_use]
    pub const fn from_octas(octas: u64) -> Self {
        Self(octas)
    }

    #[must_use]
    pub const fn octas(self) -> u64 {
        self.0
    }

    /// Parses a decimal MOVE amount such as `"0.1"` or `"12"` exactly.
    pub fn parse_move(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(AmountError::Negative);
        }
        let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(AmountError::Invalid);
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AmountError::Invalid);
        }
        if fraction.len() > units::DECIMALS {
            return Err(AmountError::TooManyDecimals);
        }

        let whole_octas = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<u64>()
                .map_err(|_| AmountError::Overflow)?
                .checked_mul(units::OCTAS_PER_MOVE)
                .ok_or(AmountError::Overflow)?
        };

        let fraction_octas = if fraction.is_empty() {
            0
        } else {
            let padded = format!("{fraction:0<width$}", width = units::DECIMALS);
            padded.parse::<u64>().map_err(|_| AmountError::Invalid)?
        };

        whole_octas
            .checked_add(fraction_octas)
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Formats the amount in MOVE with 2 to 8 decimals.
    #[must_use]
    pub fn format_move(self) -> String {
        let whole = self.0 / units::OCTAS_PER_MOVE;
        let fraction = self.0 % units::OCTAS_PER_MOVE;
        let digits = format!("{fraction:0width$}", width = units::DECIMALS);
        let significant = digits.trim_end_matches('0');
        let shown = if significant.len() < units::MIN_DISPLAY_DECIMALS {
            &digits[..units::MIN_DISPLAY_DECIMALS]
        } else {
            significant
        };
        format!("{whole}.{shown}")
    }

    #[must_use]
    pub fn checked_sub(self, other: Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Self)
    }

    #[must_use]
    pub fn saturating_add(self, other: Amount) -> Amount {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.format_move(), units::SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_normalized_to_lowercase() {
        let address = AccountAddress::parse("  0xABCdef12 ").expect("valid address");
        assert_eq!(address.as_str(), "0xabcdef12");
        assert_eq!(address, AccountAddress::parse("0xabcdef12").unwrap());
    }

    #[test]
    fn address_rejects_bad_input() {
        assert_eq!(AccountAddress::parse(""), Err(AddressError::Empty));
        assert_eq!(AccountAddress::parse("0x"), Err(AddressError::Empty));
        assert_eq!(AccountAddress::parse("abcd"), Err(AddressError::MissingPrefix));
        assert_eq!(AccountAddress::parse("0xzz"), Err(AddressError::InvalidHex));
        let long = format!("0x{}", "a".repeat(65));
        assert_eq!(AccountAddress::parse(&long), Err(AddressError::TooLong));
    }

    #[test]
    fn address_from_bytes_is_hex() {
        let address = AccountAddress::from_bytes(&[0x00, 0xab, 0x10]);
        assert_eq!(address.as_str(), "0x00ab10");
    }

    #[test]
    fn framework_address_is_short_form() {
        assert_eq!(AccountAddress::framework().as_str(), "0x1");
        assert_eq!(AccountAddress::framework(), AccountAddress::parse("0x1").unwrap());
    }

    #[test]
    fn short_address_keeps_prefix_and_tail() {
        let address = AccountAddress::parse(
            "0x6572d55bc0d8e3d026d54f0ed1c7cc75e2492515cfd803cb12adb84776f21036",
        )
        .unwrap();
        assert_eq!(address.short(6, 4), "0x6572...1036");
        assert_eq!(address.short(4, 4), "0x65...1036");
        assert_eq!(AccountAddress::parse("0x1").unwrap().short(6, 4), "0x1");
    }

    #[test]
    fn parse_move_is_exact() {
        assert_eq!(Amount::parse_move("1").unwrap().octas(), 100_000_000);
        assert_eq!(Amount::parse_move("0.1").unwrap().octas(), 10_000_000);
        assert_eq!(Amount::parse_move(".5").unwrap().octas(), 50_000_000);
        assert_eq!(Amount::parse_move("2.").unwrap().octas(), 200_000_000);
        assert_eq!(Amount::parse_move("0.00000001").unwrap().octas(), 1);
        assert_eq!(Amount::parse_move("0").unwrap(), Amount::ZERO);
    }

    #[test]
    fn parse_move_rejects_bad_input() {
        assert_eq!(Amount::parse_move(" "), Err(AmountError::Empty));
        assert_eq!(Amount::parse_move("-1"), Err(AmountError::Negative));
        assert_eq!(Amount::parse_move("."), Err(AmountError::Invalid));
        assert_eq!(Amount::parse_move("1e5"), Err(AmountError::Invalid));
        assert_eq!(Amount::parse_move("1.2.3"), Err(AmountError::Invalid));
        assert_eq!(
            Amount::parse_move("0.000000001"),
            Err(AmountError::TooManyDecimals)
        );
        assert_eq!(
            Amount::parse_move("999999999999999999999"),
            Err(AmountError::Overflow)
        );
    }

    #[test]
    fn format_move_trims_but_keeps_two_decimals() {
        assert_eq!(Amount::ZERO.format_move(), "0.00");
        assert_eq!(Amount::from_octas(150_000_000).format_move(), "1.50");
        assert_eq!(Amount::from_octas(12_345_678).format_move(), "0.12345678");
        assert_eq!(Amount::from_octas(1_000_000_000).format_move(), "10.00");
        assert_eq!(format!("{}", Amount::from_octas(10_000_000)), "0.10 MOVE");
    }

    #[test]
    fn checked_sub_refuses_underflow() {
        let one = Amount::from_octas(1);
        assert_eq!(Amount::ZERO.checked_sub(one), None);
        assert_eq!(one.checked_sub(one), Some(Amount::ZERO));
    }
}
