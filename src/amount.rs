//! Protect before using zero, negative or sub-cent amount for deposits and withdraws.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;
use thiserror::Error;

/// Represent strictly positive financial amount of money with at most two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount from integer `num` and `scale`.
    ///
    /// Returns [`InvalidAmountErr`] for zero or fractions of a cent.
    pub fn new(num: u64, scale: u32) -> Result<Amount, InvalidAmountErr> {
        Decimal::from_i128_with_scale(num.into(), scale).try_into()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the amount provided is not valid")]
/// represent error when transaction want to operate on zero, negative or sub-cent amount of money
pub struct InvalidAmountErr;

impl TryFrom<Decimal> for Amount {
    type Error = InvalidAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value <= Decimal::ZERO || value.round_dp(2) != value {
            Err(InvalidAmountErr)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

#[cfg(test)]
mod test {
    use super::{Amount, InvalidAmountErr};
    use rust_decimal::Decimal;

    #[test]
    fn zero_and_negative_are_rejected() {
        assert_eq!(Amount::try_from(Decimal::ZERO), Err(InvalidAmountErr));
        assert_eq!(Amount::try_from(Decimal::new(-1, 2)), Err(InvalidAmountErr));
        assert_eq!(Amount::new(0, 2), Err(InvalidAmountErr));
    }

    #[test]
    fn fractions_of_cent_are_rejected() {
        assert_eq!(Amount::new(4, 3), Err(InvalidAmountErr));
        assert_eq!(Amount::new(10001, 4), Err(InvalidAmountErr));
        // trailing zeros are still whole cents
        assert_eq!(*Amount::new(1500, 3).unwrap(), Decimal::new(15, 1));
    }

    #[test]
    fn positive_keeps_value() {
        let a = Amount::new(1050, 2).unwrap();
        assert_eq!(*a, Decimal::new(105, 1));
        assert_eq!(Decimal::from(a), Decimal::new(1050, 2));
    }
}
