use super::balance::Balance;
use super::history::History;
use super::Account;
use crate::{amount::Amount, errors::AccountErr, national_id::NationalId, AccountNumber, AGENCY};
use rust_decimal::Decimal;
use tracing::debug;

/// Account without withdrawal restrictions other than available balance
#[derive(Debug, Clone)]
pub struct BasicAcc {
    number: AccountNumber,
    holder: NationalId,
    balance: Balance,
    history: History,
}

impl BasicAcc {
    /// Create new empty account `number` owned by `holder`
    pub fn new(number: AccountNumber, holder: NationalId) -> Self {
        Self {
            number,
            holder,
            balance: Default::default(),
            history: History::default(),
        }
    }

    /// account number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// branch code, always [`AGENCY`]
    pub fn agency(&self) -> &str {
        AGENCY
    }

    /// national ID of the owner
    pub fn holder(&self) -> &NationalId {
        &self.holder
    }

    /// money available on account
    pub fn balance(&self) -> Decimal {
        self.balance.available()
    }

    /// accepted transactions
    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Increase balance. Fails for zero, negative or sub-cent `amount` and when the balance would
    /// overflow.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        let amount = Amount::try_from(amount)?;
        self.balance.deposit(&amount)?;
        debug!(account = self.number, %amount, "deposit accepted");
        Ok(())
    }

    /// Decrease balance. Fails for zero, negative or sub-cent `amount` or when `amount` exceeds
    /// balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        let amount = Amount::try_from(amount)?;
        self.balance.try_withdraw(&amount)?;
        debug!(account = self.number, %amount, "withdrawal accepted");
        Ok(())
    }
}

impl Account for BasicAcc {
    fn base(&self) -> &BasicAcc {
        self
    }

    fn base_mut(&mut self) -> &mut BasicAcc {
        self
    }
}
