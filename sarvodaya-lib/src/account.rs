use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Category;

/// A customer account, as held by the [`Ledger`](crate::Ledger)
///
/// This is also the record written to the [`Store`](crate::Store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    name: String,
    account_no: String,
    category: Category,
    balance: Decimal,
}

impl Account {
    pub(crate) fn new(
        name: impl Into<String>,
        account_no: impl Into<String>,
        category: Category,
        balance: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            account_no: account_no.into(),
            category,
            balance,
        }
    }

    /// The name of the account holder
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unique account number
    #[must_use]
    pub fn account_no(&self) -> &str {
        &self.account_no
    }

    /// The [`Category`] of the account
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The current balance. May be negative for NRI accounts.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The minimum-balance floor, which only savings accounts have
    #[must_use]
    pub fn minimum_balance(&self) -> Option<Decimal> {
        self.category.minimum_balance()
    }

    /// The interest rate credited to this account
    #[must_use]
    pub fn interest_rate(&self) -> Decimal {
        self.category.rate()
    }

    pub(crate) fn with_balance(&self, balance: Decimal) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn deserialise_yaml() {
        let raw = r#"
        name: Asha
        account_no: S1
        category: savings
        balance: "1040.00"
        "#;

        let account: Account = serde_yaml::from_str(raw).unwrap();

        assert_eq!(account.account_no(), "S1");
        assert_eq!(account.category(), Category::Savings);
        assert_eq!(account.balance(), dec!(1040));
        assert_eq!(account.minimum_balance(), Some(dec!(500)));
    }

    #[test]
    fn only_savings_has_a_floor() {
        let basic = Account::new("a", "1", Category::Basic, dec!(0));
        let nri = Account::new("b", "2", Category::Nri, dec!(0));

        assert_eq!(basic.minimum_balance(), None);
        assert_eq!(nri.minimum_balance(), None);
        assert_eq!(nri.interest_rate(), dec!(0.065));
    }
}
