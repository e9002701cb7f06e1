use super::{Account, BasicAcc, TransKind};
use crate::{errors::AccountErr, national_id::NationalId, AccountNumber};
use rust_decimal::Decimal;
use tracing::debug;

/// Withdrawal restrictions of a [`CurrentAcc`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalPolicy {
    /// maximum amount of a single withdrawal
    pub limit: Decimal,
    /// maximum number of withdrawals over whole account history
    pub max_withdrawals: usize,
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self {
            limit: Decimal::new(500, 0),
            max_withdrawals: 3,
        }
    }
}

/// Current account. Limits amount of a single withdrawal and number of withdrawals.
///
/// Withdrawals are counted over the whole history, there is no daily reset.
#[derive(Debug, Clone)]
pub struct CurrentAcc {
    base: BasicAcc,
    policy: WithdrawalPolicy,
}

impl CurrentAcc {
    /// Create new empty account with default [`WithdrawalPolicy`]
    pub fn new(number: AccountNumber, holder: NationalId) -> Self {
        Self::with_policy(number, holder, WithdrawalPolicy::default())
    }

    /// Create new empty account with custom withdrawal `policy`
    pub fn with_policy(number: AccountNumber, holder: NationalId, policy: WithdrawalPolicy) -> Self {
        Self {
            base: BasicAcc::new(number, holder),
            policy,
        }
    }

    /// withdrawal restrictions
    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }
}

impl Account for CurrentAcc {
    fn base(&self) -> &BasicAcc {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BasicAcc {
        &mut self.base
    }

    /// Limit is checked first, then number of withdrawals and at last balance.
    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountErr> {
        let withdrawals = self.history().count(TransKind::Withdrawal);

        if amount > self.policy.limit {
            debug!(account = self.number(), %amount, "withdrawal over limit");
            return Err(AccountErr::LimitExceeded {
                limit: self.policy.limit,
            });
        }

        if withdrawals >= self.policy.max_withdrawals {
            debug!(account = self.number(), withdrawals, "no withdrawals left");
            return Err(AccountErr::WithdrawalsExhausted {
                max: self.policy.max_withdrawals,
            });
        }

        self.base.withdraw(amount)
    }
}

#[cfg(test)]
mod test {
    use super::{Account, CurrentAcc, WithdrawalPolicy};
    use crate::account::Transaction;
    use crate::errors::{AccountErr, BalanceErr};
    use crate::national_id::NationalId;
    use rust_decimal::Decimal;

    fn holder() -> NationalId {
        "529.982.247-25".parse().unwrap()
    }

    fn funded(amount: i64) -> CurrentAcc {
        let mut a = CurrentAcc::new(1, holder());
        Transaction::Deposit(Decimal::new(amount, 0))
            .register(&mut a)
            .unwrap();
        a
    }

    #[test]
    fn default_policy() {
        let a = CurrentAcc::new(1, holder());
        assert_eq!(a.policy().limit, Decimal::new(500, 0));
        assert_eq!(a.policy().max_withdrawals, 3);
    }

    #[test]
    fn withdraw_over_limit_fails_regardless_of_balance() {
        let mut a = funded(10_000);

        let e = a.withdraw(Decimal::new(501, 0)).unwrap_err();
        assert_eq!(
            e,
            AccountErr::LimitExceeded {
                limit: Decimal::new(500, 0)
            }
        );
        assert_eq!(a.balance(), Decimal::new(10_000, 0));

        a.withdraw(Decimal::new(500, 0)).unwrap();
        assert_eq!(a.balance(), Decimal::new(9_500, 0));
    }

    #[test]
    fn withdrawals_are_counted_over_history() {
        let mut a = funded(10_000);
        for _ in 0..3 {
            Transaction::Withdrawal(Decimal::new(100, 0))
                .register(&mut a)
                .unwrap();
        }

        let e = Transaction::Withdrawal(Decimal::new(100, 0))
            .register(&mut a)
            .unwrap_err();
        assert_eq!(e, AccountErr::WithdrawalsExhausted { max: 3 });
        assert_eq!(a.balance(), Decimal::new(9_700, 0));
        assert_eq!(a.history().len(), 4);
    }

    #[test]
    fn limit_has_priority_over_count() {
        let mut a = funded(10_000);
        for _ in 0..3 {
            Transaction::Withdrawal(Decimal::ONE).register(&mut a).unwrap();
        }

        let e = a.withdraw(Decimal::new(600, 0)).unwrap_err();
        assert!(matches!(e, AccountErr::LimitExceeded { .. }));
    }

    #[test]
    fn count_has_priority_over_balance() {
        let mut a = funded(300);
        for _ in 0..3 {
            Transaction::Withdrawal(Decimal::new(100, 0))
                .register(&mut a)
                .unwrap();
        }
        assert_eq!(a.balance(), Decimal::ZERO);

        let e = a.withdraw(Decimal::new(100, 0)).unwrap_err();
        assert_eq!(e, AccountErr::WithdrawalsExhausted { max: 3 });
    }

    #[test]
    fn third_withdraw_fails_on_balance_not_count() {
        let mut a = funded(1000);
        assert_eq!(a.history().len(), 1);

        let w = Transaction::Withdrawal(Decimal::new(500, 0));
        w.register(&mut a).unwrap();
        w.register(&mut a).unwrap();
        let e = w.register(&mut a).unwrap_err();

        assert_eq!(e, BalanceErr::InsufficientFunds.into());
        assert_eq!(a.balance(), Decimal::ZERO);
        assert_eq!(a.history().len(), 3);
    }

    #[test]
    fn custom_policy() {
        let policy = WithdrawalPolicy {
            limit: Decimal::new(50, 0),
            max_withdrawals: 1,
        };
        let mut a = CurrentAcc::with_policy(2, holder(), policy);
        Transaction::Deposit(Decimal::new(200, 0))
            .register(&mut a)
            .unwrap();

        a.withdraw(Decimal::new(51, 0)).unwrap_err();
        Transaction::Withdrawal(Decimal::new(50, 0))
            .register(&mut a)
            .unwrap();
        let e = a.withdraw(Decimal::new(10, 0)).unwrap_err();
        assert_eq!(e, AccountErr::WithdrawalsExhausted { max: 1 });
    }
}
