use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::Error;

const SAVINGS_MINIMUM_BALANCE: Decimal = dec!(500);
const NRI_OVERDRAFT_LIMIT: Decimal = dec!(5000);

/// The kind of an [`Account`](crate::Account)
///
/// The category fixes both the interest rate and the floor a withdrawal may
/// not cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// No interest, cannot be overdrawn
    Basic,

    /// 4% interest, must keep a minimum balance of 500
    Savings,

    /// 6.5% interest, may be overdrawn by up to 5000
    Nri,
}

impl Category {
    /// The interest rate credited on each interest posting
    #[must_use]
    pub fn rate(self) -> Decimal {
        match self {
            Self::Basic => Decimal::ZERO,
            Self::Savings => dec!(0.04),
            Self::Nri => dec!(0.065),
        }
    }

    /// The lowest balance a withdrawal may leave, if the category has one
    #[must_use]
    pub fn minimum_balance(self) -> Option<Decimal> {
        match self {
            Self::Savings => Some(SAVINGS_MINIMUM_BALANCE),
            Self::Basic | Self::Nri => None,
        }
    }

    /// How far below zero a withdrawal may take the balance, if at all
    #[must_use]
    pub fn overdraft_limit(self) -> Option<Decimal> {
        match self {
            Self::Nri => Some(NRI_OVERDRAFT_LIMIT),
            Self::Basic | Self::Savings => None,
        }
    }

    /// The lowest balance a withdrawal may leave behind
    #[must_use]
    pub fn floor(self) -> Decimal {
        match self {
            Self::Basic => Decimal::ZERO,
            Self::Savings => SAVINGS_MINIMUM_BALANCE,
            Self::Nri => -NRI_OVERDRAFT_LIMIT,
        }
    }

    /// The largest amount that may be withdrawn from the given balance
    ///
    /// This may be zero or negative, in which case no withdrawal succeeds.
    /// Returns `None` if the amount cannot be represented.
    #[must_use]
    pub fn available(self, balance: Decimal) -> Option<Decimal> {
        balance.checked_sub(self.floor())
    }

    /// The numeric code used by the request layer
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Basic => "1",
            Self::Savings => "2",
            Self::Nri => "3",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Basic => "Basic",
            Self::Savings => "Savings",
            Self::Nri => "NRI",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "basic" => Ok(Self::Basic),
            "2" | "savings" => Ok(Self::Savings),
            "3" | "nri" => Ok(Self::Nri),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use super::Category;

    #[test_case("1" => Some(Category::Basic); "basic code")]
    #[test_case("2" => Some(Category::Savings); "savings code")]
    #[test_case("3" => Some(Category::Nri); "nri code")]
    #[test_case(" NRI " => Some(Category::Nri); "name is case insensitive")]
    #[test_case("savings" => Some(Category::Savings); "savings name")]
    #[test_case("4" => None; "unknown code")]
    #[test_case("" => None; "empty")]
    fn parse(raw: &str) -> Option<Category> {
        raw.parse().ok()
    }

    #[test_case(Category::Basic, dec!(100) => Some(dec!(100)))]
    #[test_case(Category::Savings, dec!(1040) => Some(dec!(540)))]
    #[test_case(Category::Savings, dec!(200) => Some(dec!(-300)))]
    #[test_case(Category::Nri, dec!(0) => Some(dec!(5000)))]
    #[test_case(Category::Nri, dec!(-4000) => Some(dec!(1000)))]
    #[test_case(Category::Nri, Decimal::MAX => None; "nri beyond representable range")]
    #[test_case(Category::Savings, Decimal::MIN => None; "savings beyond representable range")]
    fn available(category: Category, balance: Decimal) -> Option<Decimal> {
        category.available(balance)
    }

    #[test]
    fn codes_round_trip() {
        for category in [Category::Basic, Category::Savings, Category::Nri] {
            assert_eq!(category.code().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn deserialise_yaml() {
        let category: Category = serde_yaml::from_str("nri").unwrap();
        assert_eq!(category, Category::Nri);
    }
}
