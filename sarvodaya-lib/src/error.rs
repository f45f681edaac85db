use rust_decimal::Decimal;

use crate::Category;

/// Errors that can occur when operating on the [`Ledger`](crate::Ledger)
///
/// None of these are fatal. The request layer turns each of them into a
/// failed [`Response`](crate::Response).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No account is registered under the given account number
    #[error("Account not found: {0}")]
    NotFound(String),

    /// Deposits, withdrawals and interest postings must be strictly positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// The withdrawal would take the account past its floor
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientFunds {
        /// The category of the account
        category: Category,
        /// The amount that was asked for
        requested: Decimal,
        /// The most that could have been withdrawn
        available: Decimal,
    },

    /// The withdrawal would take a savings account below its minimum balance
    #[error("Withdrawal would breach the minimum balance of {minimum}: requested {requested}, available {available}")]
    BelowMinimum {
        /// The minimum balance of the account
        minimum: Decimal,
        /// The amount that was asked for
        requested: Decimal,
        /// The most that could have been withdrawn
        available: Decimal,
    },

    /// An account with this number already exists
    #[error("Account number already exists: {0}")]
    DuplicateAccount(String),

    /// The category code was not recognised
    #[error("Invalid account type: {0}")]
    InvalidCategory(String),

    /// A required field was missing or malformed
    #[error("{0}")]
    InvalidInput(String),

    /// The resulting balance cannot be represented
    #[error("balance overflow")]
    Overflow,

    /// The persistence layer failed to load or store an account
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

/// Failures of a [`Store`](crate::Store) backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The backing file could not be (de)serialised
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        StoreError::from(e).into()
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        StoreError::from(e).into()
    }
}
