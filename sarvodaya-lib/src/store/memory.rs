use indexmap::IndexMap;

use crate::{store::Store, Account, Error};

/// A [`Store`] that keeps accounts in memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    accounts: IndexMap<String, Account>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_accounts(accounts: IndexMap<String, Account>) -> Self {
        Self { accounts }
    }

    pub(crate) fn as_map(&self) -> &IndexMap<String, Account> {
        &self.accounts
    }

    pub(crate) fn insert(&mut self, account: Account) -> Option<Account> {
        self.accounts
            .insert(account.account_no().to_string(), account)
    }
}

impl Store for MemoryStore {
    fn get(&self, account_no: &str) -> Option<&Account> {
        self.accounts.get(account_no)
    }

    fn put(&mut self, account: Account) -> Result<(), Error> {
        self.insert(account);
        Ok(())
    }

    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_> {
        Box::new(self.accounts.values())
    }
}
