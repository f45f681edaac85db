//! Interest postings
//!
//! Interest is a pure function of the account [`Category`] and its current
//! balance. Every posting credits `balance * rate` and rounds the result to
//! two decimal places. Midpoints round half to even on the exact decimal
//! value, so `0.325` becomes `0.32`; this is a fixed rule of the ledger and
//! does not follow binary floating point rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::Level;

use crate::{Category, Error};

/// Apply a single interest posting to `balance`
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the new balance cannot be
/// represented.
pub fn apply(category: Category, balance: Decimal) -> Result<Decimal, Error> {
    let interest = balance.checked_mul(category.rate()).ok_or(Error::Overflow)?;
    let credited = balance.checked_add(interest).ok_or(Error::Overflow)?;

    let posted = credited.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);

    if category.rate() != Decimal::ZERO {
        let interest = posted.checked_sub(balance).ok_or(Error::Overflow)?;
        tracing::event!(Level::INFO, %category, %interest, "interest posted");
    }

    Ok(posted)
}

/// Apply `times` consecutive interest postings, rounding after each one
///
/// # Errors
///
/// Returns [`Error::Overflow`] if any intermediate balance cannot be
/// represented.
pub fn apply_n(category: Category, balance: Decimal, times: u32) -> Result<Decimal, Error> {
    (0..times).try_fold(balance, |balance, _| apply(category, balance))
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use crate::Category;

    #[test_case(Category::Basic, dec!(1000) => dec!(1000); "basic earns nothing")]
    #[test_case(Category::Savings, dec!(1000) => dec!(1040.00); "savings")]
    #[test_case(Category::Nri, dec!(1000) => dec!(1065.00); "nri")]
    #[test_case(Category::Savings, dec!(123.45) => dec!(128.39); "savings rounds")]
    #[test_case(Category::Nri, dec!(10.10) => dec!(10.76); "nri rounds")]
    #[test_case(Category::Nri, dec!(-4000) => dec!(-4260.00); "overdrawn nri accrues debit interest")]
    fn posting(category: Category, balance: Decimal) -> Decimal {
        crate::interest::apply(category, balance).unwrap()
    }

    #[test]
    fn rounding_is_half_even() {
        // 0.3125 * 1.04 = 0.325 exactly, which rounds down to the even digit
        assert_eq!(super::apply(Category::Savings, dec!(0.3125)).unwrap(), dec!(0.32));
    }

    #[test]
    fn repeated_postings_round_each_step() {
        let mut expected = dec!(100);
        for _ in 0..10 {
            expected = super::apply(Category::Savings, expected).unwrap();
        }

        assert_eq!(
            super::apply_n(Category::Savings, dec!(100), 10).unwrap(),
            expected
        );
        assert_eq!(expected, dec!(148.02));
    }

    #[test]
    fn zero_postings_is_identity() {
        assert_eq!(super::apply_n(Category::Nri, dec!(12.34), 0).unwrap(), dec!(12.34));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(super::apply(Category::Nri, Decimal::MAX).is_err());
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged(f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn posting_logs_the_interest_credited() {
        let output = logged(|| {
            super::apply(Category::Savings, dec!(1000)).unwrap();
        });

        assert!(output.contains("interest posted"), "{}", output);
        assert!(output.contains("category=Savings"), "{}", output);
        assert!(output.contains("interest=40.00"), "{}", output);
    }

    #[test]
    fn basic_posting_logs_nothing() {
        let output = logged(|| {
            super::apply(Category::Basic, dec!(1000)).unwrap();
        });

        assert!(!output.contains("interest posted"), "{}", output);
    }
}
