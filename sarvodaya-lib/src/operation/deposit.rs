use rust_decimal::Decimal;

use crate::{
    interest,
    operation::{ensure_positive, Operation},
    Category, Error, InterestPolicy,
};

/// Pay money into an account
///
/// Interest is posted straight after the deposit is credited, as many times
/// as the [`InterestPolicy`] asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deposit {
    amount: Decimal,
}

impl Deposit {
    /// Create a deposit of `amount`
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }
}

impl Operation for Deposit {
    const NAME: &'static str = "Deposit";

    fn apply(
        &self,
        category: Category,
        balance: Decimal,
        policy: &InterestPolicy,
    ) -> Result<Decimal, Error> {
        let amount = ensure_positive(self.amount)?;
        let credited = balance.checked_add(amount).ok_or(Error::Overflow)?;

        interest::apply_n(category, credited, policy.deposit_applications)
    }

    fn message(&self) -> String {
        format!("Deposited: {:.2}", self.amount)
    }
}
