use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{instrument, Level};

use crate::{
    interest,
    operation::{Accrue, Deposit, Operation, Withdraw},
    Account, Category, CreateAccount, Error, MemoryStore, Receipt, Store, Transaction,
};

/// When interest is posted as a side effect of other operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterestPolicy {
    /// Post interest once when a savings or NRI account is opened
    pub apply_on_create: bool,

    /// How many interest postings follow each deposit
    pub deposit_applications: u32,
}

impl Default for InterestPolicy {
    fn default() -> Self {
        Self {
            apply_on_create: true,
            deposit_applications: 1,
        }
    }
}

/// The set of accounts, and the rules for changing them
///
/// All state lives in the [`Store`]. An operation only changes an account once
/// the store has accepted the new record.
#[derive(Debug)]
pub struct Ledger<S = MemoryStore> {
    store: S,
    policy: InterestPolicy,
}

impl Default for Ledger<MemoryStore> {
    fn default() -> Self {
        Self::new(MemoryStore::default())
    }
}

impl<S: Store> Ledger<S> {
    /// Create a ledger over `store` with the default [`InterestPolicy`]
    pub fn new(store: S) -> Self {
        Self::with_policy(store, InterestPolicy::default())
    }

    /// Create a ledger over `store` with a custom [`InterestPolicy`]
    pub fn with_policy(store: S, policy: InterestPolicy) -> Self {
        Self { store, policy }
    }

    /// The interest policy in force
    pub fn policy(&self) -> &InterestPolicy {
        &self.policy
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All accounts, in the order they were opened
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.store.accounts()
    }

    /// Look up an account by number
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such account.
    pub fn account(&self, account_no: &str) -> Result<&Account, Error> {
        self.store
            .get(account_no)
            .ok_or_else(|| Error::NotFound(account_no.to_string()))
    }

    /// The current balance of an account
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such account.
    pub fn balance(&self, account_no: &str) -> Result<Decimal, Error> {
        self.account(account_no).map(Account::balance)
    }

    /// Open a new account
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if the name or account number is blank
    /// - [`Error::DuplicateAccount`] if the account number is already in use
    /// - [`Error::InvalidCategory`] if the category code is not recognised
    /// - [`Error::Store`] if the new account could not be persisted
    #[instrument(skip(self, request), fields(account_no = %request.account_no))]
    pub fn create(&mut self, request: CreateAccount) -> Result<Receipt, Error> {
        let result = self.try_create(request);
        if let Err(e) = &result {
            tracing::event!(Level::WARN, error = %e, "rejected account");
        }
        result
    }

    fn try_create(&mut self, request: CreateAccount) -> Result<Receipt, Error> {
        if request.name.trim().is_empty() {
            return Err(Error::InvalidInput("Name cannot be empty.".to_string()));
        }
        if request.account_no.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Invalid account number format.".to_string(),
            ));
        }
        if self.store.contains(&request.account_no) {
            return Err(Error::DuplicateAccount(request.account_no));
        }

        let category: Category = request.acc_type.parse()?;

        let balance = if self.policy.apply_on_create {
            interest::apply(category, request.balance)?
        } else {
            request.balance
        };

        let account = Account::new(request.name, request.account_no, category, balance);
        let message = format!(
            "Account created: {} | Acc No: {}",
            account.name(),
            account.account_no()
        );

        self.store.put(account)?;

        tracing::event!(Level::INFO, %category, %balance, "opened account");

        Ok(Receipt {
            message,
            new_balance: Some(balance),
        })
    }

    /// Pay money into an account, then post interest according to the
    /// [`InterestPolicy`]
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if there is no such account
    /// - [`Error::InvalidAmount`] if the amount is not strictly positive
    /// - [`Error::Store`] if the new balance could not be persisted
    pub fn deposit(&mut self, transaction: &Transaction) -> Result<Receipt, Error> {
        self.execute(&transaction.account_no, &Deposit::new(transaction.amount))
    }

    /// Take money out of an account
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if there is no such account
    /// - [`Error::InvalidAmount`] if the amount is not strictly positive
    /// - [`Error::InsufficientFunds`] or [`Error::BelowMinimum`] if the
    ///   withdrawal would cross the account's floor
    /// - [`Error::Store`] if the new balance could not be persisted
    pub fn withdraw(&mut self, transaction: &Transaction) -> Result<Receipt, Error> {
        self.execute(&transaction.account_no, &Withdraw::new(transaction.amount))
    }

    /// Post interest to an account `times` times in a row
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if there is no such account
    /// - [`Error::InvalidAmount`] if `times` is zero
    /// - [`Error::Store`] if the new balance could not be persisted
    pub fn accrue(&mut self, account_no: &str, times: u32) -> Result<Receipt, Error> {
        self.execute(account_no, &Accrue::new(times))
    }

    /// Apply an [`Operation`] to an account and persist the result
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if there is no such account, or whatever
    /// error the operation or the store produce. On error the account is left
    /// unchanged.
    #[instrument(skip(self, operation), fields(operation = O::NAME))]
    pub fn execute<O: Operation>(
        &mut self,
        account_no: &str,
        operation: &O,
    ) -> Result<Receipt, Error> {
        let result = self.try_execute(account_no, operation);
        if let Err(e) = &result {
            tracing::event!(Level::WARN, error = %e, "rejected operation");
        }
        result
    }

    fn try_execute<O: Operation>(
        &mut self,
        account_no: &str,
        operation: &O,
    ) -> Result<Receipt, Error> {
        let account = self.account(account_no)?;
        let balance = operation.apply(account.category(), account.balance(), &self.policy)?;
        let updated = account.with_balance(balance);

        self.store.put(updated)?;

        tracing::event!(Level::INFO, %balance, "balance updated");

        Ok(Receipt {
            message: operation.message(),
            new_balance: Some(balance),
        })
    }
}
