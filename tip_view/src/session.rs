//! Wallet session state.
//!
//! The connected account lives here as explicit state rather than in a
//! module-level cache. The provider's account-change and disconnect
//! notifications both funnel through [`Session::on_accounts_changed`], so a
//! stale binding cannot outlive the account it was made for.

use ink::primitives::AccountId;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    account: Option<AccountId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the session to a freshly connected account.
    pub fn connect(&mut self, account: AccountId) {
        self.account = Some(account);
    }

    pub fn account(&self) -> Option<AccountId> {
        self.account
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Provider notification: the account list changed. Rebinds to the
    /// first reported account; an empty list is a disconnect.
    pub fn on_accounts_changed(&mut self, accounts: &[AccountId]) {
        self.account = accounts.first().copied();
    }

    pub fn disconnect(&mut self) {
        self.account = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> AccountId {
        AccountId::from([byte; 32])
    }

    #[test]
    fn starts_disconnected() {
        let session = Session::new();
        assert!(!session.is_connected());
        assert_eq!(session.account(), None);
    }

    #[test]
    fn connect_and_disconnect() {
        let mut session = Session::new();
        session.connect(account(0x01));
        assert!(session.is_connected());
        assert_eq!(session.account(), Some(account(0x01)));

        session.disconnect();
        assert!(!session.is_connected());
    }

    #[test]
    fn account_change_rebinds() {
        let mut session = Session::new();
        session.connect(account(0x01));

        session.on_accounts_changed(&[account(0x02)]);
        assert_eq!(session.account(), Some(account(0x02)));
    }

    #[test]
    fn empty_account_list_is_a_disconnect() {
        let mut session = Session::new();
        session.connect(account(0x01));

        session.on_accounts_changed(&[]);
        assert!(!session.is_connected());
    }
}
