use rust_decimal::Decimal;

use crate::{interest, operation::Operation, Category, Error, InterestPolicy};

/// Post interest to an account a number of times in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accrue {
    times: u32,
}

impl Accrue {
    /// Post interest `times` times
    #[must_use]
    pub fn new(times: u32) -> Self {
        Self { times }
    }
}

impl Default for Accrue {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Operation for Accrue {
    const NAME: &'static str = "Accrue";

    fn apply(
        &self,
        category: Category,
        balance: Decimal,
        _policy: &InterestPolicy,
    ) -> Result<Decimal, Error> {
        if self.times == 0 {
            return Err(Error::InvalidAmount(Decimal::ZERO));
        }

        interest::apply_n(category, balance, self.times)
    }

    fn message(&self) -> String {
        match self.times {
            1 => "Interest posted".to_string(),
            n => format!("Interest posted {} times", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn ten_postings() {
        let balance = Accrue::new(10)
            .apply(Category::Savings, dec!(100), &InterestPolicy::default())
            .unwrap();

        assert_eq!(balance, dec!(148.02));
    }

    #[test]
    fn basic_is_unchanged() {
        let balance = Accrue::default()
            .apply(Category::Basic, dec!(100), &InterestPolicy::default())
            .unwrap();

        assert_eq!(balance, dec!(100));
    }

    #[test]
    fn zero_postings_is_rejected() {
        assert!(Accrue::new(0)
            .apply(Category::Nri, dec!(100), &InterestPolicy::default())
            .is_err());
    }
}
