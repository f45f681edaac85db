//! Operations on account balances

use rust_decimal::Decimal;

use crate::{Category, Error, InterestPolicy};

mod accrue;
pub use accrue::Accrue;
mod deposit;
pub use deposit::Deposit;
mod withdraw;
pub use withdraw::Withdraw;

/// Represents an operation that may be applied to the balance of an account
///
/// An operation is a pure mapping from the account's [`Category`] and current
/// balance to its new balance. The [`Ledger`](crate::Ledger) takes care of
/// looking up the account and persisting the outcome.
pub trait Operation {
    /// The name of the operation. Used for logging and pretty-printing
    const NAME: &'static str;

    /// Given the category and balance of an account, compute the new balance.
    ///
    /// # Errors
    ///
    /// Fails if the operation is not permitted for this account. A failed
    /// operation must leave the account untouched.
    fn apply(
        &self,
        category: Category,
        balance: Decimal,
        policy: &InterestPolicy,
    ) -> Result<Decimal, Error>;

    /// A human readable confirmation of a successful operation
    fn message(&self) -> String;
}

fn ensure_positive(amount: Decimal) -> Result<Decimal, Error> {
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(Error::InvalidAmount(amount))
    }
}
