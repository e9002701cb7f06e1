//! Registry of customers and their accounts
use crate::account::{Account, CurrentAcc, Transaction, WithdrawalPolicy};
use crate::customer::Customer;
use crate::errors::BankErr;
use crate::national_id::NationalId;
use crate::AccountNumber;
use std::collections::BTreeMap;
use tracing::info;

/// In-memory bank. Lives for whole process, nothing is ever removed.
#[derive(Debug, Default)]
pub struct Bank {
    customers: BTreeMap<NationalId, Customer>,
    // account number `n` is stored at index `n - 1`
    accounts: Vec<Box<dyn Account>>,
    policy: WithdrawalPolicy,
}

impl Bank {
    /// Create empty bank. Every opened current account gets `policy`.
    pub fn new(policy: WithdrawalPolicy) -> Self {
        Self {
            customers: BTreeMap::new(),
            accounts: Vec::new(),
            policy,
        }
    }

    /// Add new customer. National ID must not be registered yet.
    pub fn register_customer(&mut self, customer: Customer) -> Result<(), BankErr> {
        let id = customer.national_id().clone();
        if self.customers.contains_key(&id) {
            return Err(BankErr::DuplicateCustomer);
        }

        info!(national_id = %id, "customer registered");
        self.customers.insert(id, customer);
        Ok(())
    }

    /// Registered customer with national ID `id`
    pub fn customer(&self, id: &NationalId) -> Option<&Customer> {
        self.customers.get(id)
    }

    /// Open new [`CurrentAcc`] for customer `id` and return its number
    pub fn open_current_account(&mut self, id: &NationalId) -> Result<AccountNumber, BankErr> {
        let customer = self.customers.get_mut(id).ok_or(BankErr::CustomerNotFound)?;

        let number = self.accounts.len() as AccountNumber + 1;
        let account = CurrentAcc::with_policy(number, id.clone(), self.policy.clone());

        self.accounts.push(Box::new(account));
        customer.open_account(number);

        info!(national_id = %id, number, "account opened");
        Ok(number)
    }

    /// Account with given `number`
    pub fn account(&self, number: AccountNumber) -> Option<&dyn Account> {
        self.accounts
            .get(Self::index_of(number)?)
            .map(|a| a.as_ref())
    }

    /// First account opened by customer `id`
    pub fn primary_account(&self, id: &NationalId) -> Result<&dyn Account, BankErr> {
        let number = self.primary_account_number(id)?;
        self.account(number).ok_or(BankErr::NoAccount)
    }

    /// Apply `transaction` to first account of customer `id`
    pub fn apply(&mut self, id: &NationalId, transaction: &Transaction) -> Result<(), BankErr> {
        let number = self.primary_account_number(id)?;
        let customer = self.customers.get(id).ok_or(BankErr::CustomerNotFound)?;
        let account = self
            .accounts
            .get_mut(Self::index_of(number).ok_or(BankErr::NoAccount)?)
            .ok_or(BankErr::NoAccount)?;

        customer.apply(account.as_mut(), transaction)?;
        Ok(())
    }

    /// All accounts in opening order
    pub fn accounts(&self) -> impl Iterator<Item = &dyn Account> + '_ {
        self.accounts.iter().map(|a| a.as_ref())
    }

    /// Name of customer owning `account`
    pub fn holder_name(&self, account: &dyn Account) -> Option<&str> {
        self.customer(account.holder()).map(Customer::name)
    }

    fn index_of(number: AccountNumber) -> Option<usize> {
        usize::try_from(number).ok()?.checked_sub(1)
    }

    fn primary_account_number(&self, id: &NationalId) -> Result<AccountNumber, BankErr> {
        let customer = self.customer(id).ok_or(BankErr::CustomerNotFound)?;
        customer.accounts().first().copied().ok_or(BankErr::NoAccount)
    }
}

#[cfg(test)]
mod test {
    use super::Bank;
    use crate::account::{Account, Transaction, WithdrawalPolicy};
    use crate::customer::Customer;
    use crate::errors::{AccountErr, BalanceErr, BankErr};
    use crate::national_id::NationalId;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn id(s: &str) -> NationalId {
        s.parse().unwrap()
    }

    fn customer(name: &str, national_id: &str) -> Customer {
        Customer::new(
            name,
            NaiveDate::from_ymd_opt(1985, 1, 2).unwrap(),
            id(national_id),
            "Rua Um, S/N - Centro - Recife/PE",
        )
    }

    fn bank_with_customers() -> Bank {
        let mut bank = Bank::default();
        bank.register_customer(customer("Ana", "11144477735")).unwrap();
        bank.register_customer(customer("Bruno", "52998224725"))
            .unwrap();
        bank
    }

    #[test]
    fn duplicate_customer_is_rejected() {
        let mut bank = bank_with_customers();
        let e = bank
            .register_customer(customer("Other", "111.444.777-35"))
            .unwrap_err();
        assert_eq!(e, BankErr::DuplicateCustomer);
        assert_eq!(bank.customer(&id("11144477735")).unwrap().name(), "Ana");
    }

    #[test]
    fn account_numbers_are_sequential_across_customers() {
        let mut bank = bank_with_customers();
        assert_eq!(bank.open_current_account(&id("11144477735")), Ok(1));
        assert_eq!(bank.open_current_account(&id("52998224725")), Ok(2));
        assert_eq!(bank.open_current_account(&id("11144477735")), Ok(3));

        let numbers: Vec<_> = bank.accounts().map(|a| a.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(
            bank.customer(&id("11144477735")).unwrap().accounts(),
            &[1, 3]
        );
        assert_eq!(bank.holder_name(bank.account(2).unwrap()), Some("Bruno"));
        assert!(bank.account(0).is_none());
        assert!(bank.account(4).is_none());
    }

    #[test]
    fn unknown_customer() {
        let mut bank = bank_with_customers();
        let unknown = id("12345678909");
        assert_eq!(
            bank.open_current_account(&unknown),
            Err(BankErr::CustomerNotFound)
        );
        assert_eq!(
            bank.apply(&unknown, &Transaction::Deposit(Decimal::ONE)),
            Err(BankErr::CustomerNotFound)
        );
        assert!(bank.primary_account(&unknown).is_err());
    }

    #[test]
    fn customer_without_account() {
        let mut bank = bank_with_customers();
        let e = bank
            .apply(&id("11144477735"), &Transaction::Deposit(Decimal::ONE))
            .unwrap_err();
        assert_eq!(e, BankErr::NoAccount);
    }

    #[test]
    fn transactions_go_to_primary_account() {
        let mut bank = bank_with_customers();
        let ana = id("11144477735");
        bank.open_current_account(&ana).unwrap();
        bank.open_current_account(&ana).unwrap();

        bank.apply(&ana, &Transaction::Deposit(Decimal::new(1000, 0)))
            .unwrap();
        bank.apply(&ana, &Transaction::Withdrawal(Decimal::new(200, 0)))
            .unwrap();
        let e = bank
            .apply(&ana, &Transaction::Withdrawal(Decimal::new(900, 0)))
            .unwrap_err();
        assert!(matches!(
            e,
            BankErr::Account(AccountErr::LimitExceeded { .. })
        ));

        let primary = bank.primary_account(&ana).unwrap();
        assert_eq!(primary.number(), 1);
        assert_eq!(primary.balance(), Decimal::new(800, 0));
        assert_eq!(primary.history().len(), 2);
        assert!(bank.account(2).unwrap().history().is_empty());
    }

    #[test]
    fn bank_policy_applies_to_new_accounts() {
        let mut bank = Bank::new(WithdrawalPolicy {
            limit: Decimal::new(2000, 0),
            max_withdrawals: 5,
        });
        let ana = id("11144477735");
        bank.register_customer(customer("Ana", "11144477735")).unwrap();
        bank.open_current_account(&ana).unwrap();

        bank.apply(&ana, &Transaction::Deposit(Decimal::new(1500, 0)))
            .unwrap();
        bank.apply(&ana, &Transaction::Withdrawal(Decimal::new(1000, 0)))
            .unwrap();
        let e = bank
            .apply(&ana, &Transaction::Withdrawal(Decimal::new(1000, 0)))
            .unwrap_err();
        assert_eq!(e, BankErr::Account(BalanceErr::InsufficientFunds.into()));
    }
}
