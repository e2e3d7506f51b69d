// SPDX-License-Identifier: MPL-2.0
//! Wallet session state shared by the header, hero and dashboard.

use crate::domain::wallet::{AccountAddress, Amount};

/// Connection state of the passkey wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Disconnected,
    /// The passkey prompt is open.
    Connecting,
    Connected {
        address: AccountAddress,
        /// `None` until the first balance read completes.
        balance: Option<Amount>,
    },
}

impl Session {
    /// Moves to `Connecting`. Returns `false` if a session already exists or
    /// is being opened.
    pub fn begin_connect(&mut self) -> bool {
        if matches!(self, Session::Disconnected) {
            *self = Session::Connecting;
            true
        } else {
            false
        }
    }

    /// The passkey flow succeeded.
    pub fn connected(&mut self, address: AccountAddress) {
        *self = Session::Connected {
            address,
            balance: None,
        };
    }

    /// The passkey flow failed or was cancelled.
    pub fn connect_failed(&mut self) {
        if matches!(self, Session::Connecting) {
            *self = Session::Disconnected;
        }
    }

    pub fn disconnect(&mut self) {
        *self = Session::Disconnected;
    }

    /// Stores a fresh balance. Ignored when no session is open.
    pub fn set_balance(&mut self, amount: Amount) {
        if let Session::Connected { balance, .. } = self {
            *balance = Some(amount);
        }
    }

    #[must_use]
    pub fn address(&self) -> Option<&AccountAddress> {
        match self {
            Session::Connected { address, .. } => Some(address),
            _ => None,
        }
    }

    #[must_use]
    pub fn balance(&self) -> Option<Amount> {
        match self {
            Session::Connected { balance, .. } => *balance,
            _ => None,
        }
    }

    #[must_use]
    pub fn is_connecting(&self) -> bool {
        matches!(self, Session::Connecting)
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Session::Connected { .. })
    }
}

/// Balance as shown in the wallet card and transfer header.
#[must_use]
pub fn balance_label(balance: Option<Amount>) -> String {
    balance.unwrap_or(Amount::ZERO).format_move()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> AccountAddress {
        AccountAddress::parse("0xa11ce").expect("valid address")
    }

    #[test]
    fn connect_flow() {
        let mut session = Session::default();
        assert!(session.begin_connect());
        assert!(session.is_connecting());
        assert!(!session.begin_connect());

        session.connected(address());
        assert!(session.is_connected());
        assert_eq!(session.address(), Some(&address()));
        assert_eq!(session.balance(), None);

        session.set_balance(Amount::from_octas(150_000_000));
        assert_eq!(session.balance(), Some(Amount::from_octas(150_000_000)));
    }

    #[test]
    fn failed_connect_returns_to_disconnected() {
        let mut session = Session::default();
        session.begin_connect();
        session.connect_failed();
        assert_eq!(session, Session::Disconnected);
    }

    #[test]
    fn connect_failed_does_not_drop_open_session() {
        let mut session = Session::default();
        session.connected(address());
        session.connect_failed();
        assert!(session.is_connected());
    }

    #[test]
    fn balance_ignored_while_disconnected() {
        let mut session = Session::default();
        session.set_balance(Amount::from_octas(1));
        assert_eq!(session.balance(), None);
    }

    #[test]
    fn balance_label_defaults_to_zero() {
        assert_eq!(balance_label(None), "0.00");
        assert_eq!(balance_label(Some(Amount::from_octas(1_000_000_000))), "10.00");
    }
}
