use rust_decimal::Decimal;

use crate::{
    operation::{ensure_positive, Operation},
    Category, Error, InterestPolicy,
};

/// Take money out of an account
///
/// How far the balance may be drawn down depends on the [`Category`]:
/// basic accounts cannot go negative, savings accounts must keep their
/// minimum balance, and NRI accounts may run an overdraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdraw {
    amount: Decimal,
}

impl Withdraw {
    /// Create a withdrawal of `amount`
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }
}

impl Operation for Withdraw {
    const NAME: &'static str = "Withdraw";

    fn apply(
        &self,
        category: Category,
        balance: Decimal,
        _policy: &InterestPolicy,
    ) -> Result<Decimal, Error> {
        let requested = ensure_positive(self.amount)?;
        let remaining = balance.checked_sub(requested).ok_or(Error::Overflow)?;

        if remaining >= category.floor() {
            return Ok(remaining);
        }

        let available = category.available(balance).ok_or(Error::Overflow)?;

        Err(match category.minimum_balance() {
            Some(minimum) => Error::BelowMinimum {
                minimum,
                requested,
                available,
            },
            None => Error::InsufficientFunds {
                category,
                requested,
                available,
            },
        })
    }

    fn message(&self) -> String {
        format!("Withdrew: {:.2}", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use super::*;

    fn withdraw(category: Category, balance: Decimal, amount: Decimal) -> Result<Decimal, Error> {
        Withdraw::new(amount).apply(category, balance, &InterestPolicy::default())
    }

    #[test_case(Category::Basic, dec!(100), dec!(100) => dec!(0); "basic down to zero")]
    #[test_case(Category::Savings, dec!(1040), dec!(540) => dec!(500); "savings down to floor")]
    #[test_case(Category::Savings, dec!(1040), dec!(500) => dec!(540); "savings above floor")]
    #[test_case(Category::Nri, dec!(0), dec!(4000) => dec!(-4000); "nri into overdraft")]
    #[test_case(Category::Nri, dec!(0), dec!(5000) => dec!(-5000); "nri to overdraft limit")]
    fn permitted(category: Category, balance: Decimal, amount: Decimal) -> Decimal {
        withdraw(category, balance, amount).unwrap()
    }

    #[test]
    fn basic_cannot_go_negative() {
        let result = withdraw(Category::Basic, dec!(100), dec!(100.01));

        assert!(matches!(
            result,
            Err(Error::InsufficientFunds { category: Category::Basic, .. })
        ));
    }

    #[test]
    fn savings_keeps_minimum_balance() {
        let result = withdraw(Category::Savings, dec!(1040), dec!(600));

        match result {
            Err(Error::BelowMinimum {
                minimum,
                requested,
                available,
            }) => {
                assert_eq!(minimum, dec!(500));
                assert_eq!(requested, dec!(600));
                assert_eq!(available, dec!(540));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn nri_overdraft_is_limited() {
        let result = withdraw(Category::Nri, dec!(-4000), dec!(2000));

        assert!(matches!(
            result,
            Err(Error::InsufficientFunds { category: Category::Nri, .. })
        ));
    }

    #[test]
    fn extreme_balances_do_not_panic() {
        assert_eq!(
            withdraw(Category::Nri, Decimal::MAX, dec!(1)).unwrap(),
            Decimal::MAX - dec!(1)
        );
        assert!(matches!(
            withdraw(Category::Nri, Decimal::MIN, dec!(1)),
            Err(Error::Overflow)
        ));
        assert!(matches!(
            withdraw(Category::Savings, Decimal::MIN + dec!(1), dec!(1)),
            Err(Error::Overflow)
        ));
    }

    #[test_case(Category::Basic)]
    #[test_case(Category::Savings)]
    #[test_case(Category::Nri)]
    fn rejects_non_positive_amounts(category: Category) {
        assert!(matches!(
            withdraw(category, dec!(10000), dec!(0)),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            withdraw(category, dec!(10000), dec!(-5)),
            Err(Error::InvalidAmount(_))
        ));
    }
}
