//! Persistence of account records

use crate::{Account, Error};

mod memory;
pub use memory::MemoryStore;
mod yaml;
pub use yaml::YamlStore;

/// A durable home for [`Account`] records, keyed by account number
pub trait Store {
    /// Look up an account by number
    fn get(&self, account_no: &str) -> Option<&Account>;

    /// Whether an account with this number exists
    fn contains(&self, account_no: &str) -> bool {
        self.get(account_no).is_some()
    }

    /// Insert or replace an account.
    ///
    /// When this returns, the record must be durably stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the record could not be persisted. In that
    /// case the store must still hold the previous record.
    fn put(&mut self, account: Account) -> Result<(), Error>;

    /// All accounts, in the order they were opened
    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_>;
}
