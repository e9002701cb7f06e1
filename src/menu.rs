//! Interactive text menu driving the [`Bank`]

use std::fmt::Display;
use std::str::FromStr;

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::error;

use crate::account::{TransKind, Transaction};
use crate::address::AddressLookup;
use crate::bank::Bank;
use crate::customer::Customer;
use crate::errors::BankErr;
use crate::national_id::NationalId;
use crate::statement::{AccountSummary, Statement};

const MENU: &str = "
==================== MENU ====================
[1]\tDeposit
[2]\tWithdraw
[3]\tStatement
[4]\tNew account
[5]\tList accounts
[6]\tNew customer
[0]\tExit
=> ";

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewCustomer,
    Exit,
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let option = match s.trim() {
            "1" => MenuOption::Deposit,
            "2" => MenuOption::Withdraw,
            "3" => MenuOption::Statement,
            "4" => MenuOption::NewAccount,
            "5" => MenuOption::ListAccounts,
            "6" => MenuOption::NewCustomer,
            "0" => MenuOption::Exit,
            other => return Err(format!("invalid option `{other}`")),
        };
        Ok(option)
    }
}

/// Read money amount. Both `.` and `,` are accepted as decimal separator.
fn parse_amount(raw: &str) -> Option<Decimal> {
    raw.trim()
        .replace(',', ".")
        .parse::<Decimal>()
        .ok()
        .map(|d| d.round_dp(2))
}

fn capitalized(msg: impl Display) -> String {
    let msg = msg.to_string();
    let mut chars = msg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => msg,
    }
}

/// Menu session reading answers line by line from `R` and writing prompts to `W`.
///
/// End of input is handled like the exit option.
pub struct Menu<R, W, L> {
    bank: Bank,
    input: Lines<R>,
    output: W,
    lookup: L,
}

impl<R, W, L> Menu<R, W, L>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    L: AddressLookup,
{
    /// New session over `bank`
    pub fn new(bank: Bank, input: R, output: W, lookup: L) -> Self {
        Self {
            bank,
            input: input.lines(),
            output,
            lookup,
        }
    }

    /// Give back bank state and output
    pub fn into_parts(self) -> (Bank, W) {
        (self.bank, self.output)
    }

    /// Show menu until exit option or end of input.
    ///
    /// Only I/O errors are returned, every failed operation is reported to the output.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while let Some(choice) = self.prompt(MENU).await? {
            let option = match choice.parse::<MenuOption>() {
                Ok(option) => option,
                Err(e) => {
                    self.say(format!("\n{}, please select again.", capitalized(e)))
                        .await?;
                    continue;
                }
            };

            match option {
                MenuOption::Deposit => self.move_money(TransKind::Deposit).await?,
                MenuOption::Withdraw => self.move_money(TransKind::Withdrawal).await?,
                MenuOption::Statement => self.statement().await?,
                MenuOption::NewAccount => self.new_account().await?,
                MenuOption::ListAccounts => self.list_accounts().await?,
                MenuOption::NewCustomer => self.new_customer().await?,
                MenuOption::Exit => break,
            }
        }

        self.output.flush().await?;
        Ok(())
    }

    async fn move_money(&mut self, kind: TransKind) -> anyhow::Result<()> {
        let Some(id) = self.find_customer().await? else {
            return Ok(());
        };

        let question = match kind {
            TransKind::Deposit => "Amount to deposit: ",
            TransKind::Withdrawal => "Amount to withdraw: ",
        };
        let Some(raw) = self.prompt(question).await? else {
            return Ok(());
        };
        let Some(amount) = parse_amount(&raw) else {
            return self
                .say("\nOperation failed: the amount provided is not valid")
                .await;
        };

        let transaction = match kind {
            TransKind::Deposit => Transaction::Deposit(amount),
            TransKind::Withdrawal => Transaction::Withdrawal(amount),
        };

        match self.bank.apply(&id, &transaction) {
            Ok(()) => {
                self.say(format!("\n{kind} completed successfully!"))
                    .await
            }
            Err(BankErr::Account(e)) => self.say(format!("\nOperation failed: {e}")).await,
            Err(e) => self.say(format!("\n{}", capitalized(e))).await,
        }
    }

    async fn statement(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.find_customer().await? else {
            return Ok(());
        };

        let text = match self.bank.primary_account(&id) {
            Ok(account) => Statement::new(account).to_string(),
            Err(e) => capitalized(e),
        };
        self.say(text).await
    }

    async fn new_account(&mut self) -> anyhow::Result<()> {
        let Some(id) = self.find_customer().await? else {
            return Ok(());
        };

        match self.bank.open_current_account(&id) {
            Ok(number) => {
                self.say(format!("\nAccount {number} created successfully!"))
                    .await
            }
            Err(e) => self.say(format!("\n{}", capitalized(e))).await,
        }
    }

    async fn list_accounts(&mut self) -> anyhow::Result<()> {
        let listing: Vec<String> = self
            .bank
            .accounts()
            .map(|account| {
                let holder = self.bank.holder_name(account).unwrap_or_default();
                AccountSummary::new(account, holder).to_string()
            })
            .collect();

        if listing.is_empty() {
            return self.say("\nNo accounts registered.").await;
        }
        for summary in listing {
            self.say(summary).await?;
        }
        Ok(())
    }

    async fn new_customer(&mut self) -> anyhow::Result<()> {
        let Some(raw) = self.prompt("Customer national ID: ").await? else {
            return Ok(());
        };
        let id = match raw.parse::<NationalId>() {
            Ok(id) => id,
            Err(e) => return self.say(format!("\n{}", capitalized(e))).await,
        };
        if self.bank.customer(&id).is_some() {
            return self
                .say(format!("\n{}", capitalized(BankErr::DuplicateCustomer)))
                .await;
        }

        self.say("\nLet's register the new customer.").await?;

        let Some(name) = self.prompt("Full name: ").await? else {
            return Ok(());
        };
        if name.is_empty() {
            return self.say("\nThe name must not be empty").await;
        }

        let Some(raw) = self.prompt("Birth date (dd-mm-yyyy): ").await? else {
            return Ok(());
        };
        let Ok(birth_date) = NaiveDate::parse_from_str(&raw, BIRTH_DATE_FORMAT) else {
            return self.say("\nThe birth date is not valid").await;
        };

        let Some(postal_code) = self.prompt("Postal code: ").await? else {
            return Ok(());
        };
        let postal_address = match self.lookup.lookup(&postal_code).await {
            Ok(address) => address,
            Err(e) => {
                error!(error = %e, %postal_code, "address lookup failed");
                return self.say(format!("\nCould not fetch address: {e}")).await;
            }
        };

        let Some(house_number) = self.prompt("House number: ").await? else {
            return Ok(());
        };

        let address = postal_address.with_number(&house_number);
        let customer = Customer::new(name, birth_date, id, address);
        match self.bank.register_customer(customer) {
            Ok(()) => self.say("\nCustomer created successfully!").await,
            Err(e) => self.say(format!("\n{}", capitalized(e))).await,
        }
    }

    /// Ask for national ID of a registered customer.
    async fn find_customer(&mut self) -> anyhow::Result<Option<NationalId>> {
        let Some(raw) = self.prompt("Customer national ID: ").await? else {
            return Ok(None);
        };

        let id = match raw.parse::<NationalId>() {
            Ok(id) => id,
            Err(e) => {
                self.say(format!("\n{}", capitalized(e))).await?;
                return Ok(None);
            }
        };

        if self.bank.customer(&id).is_none() {
            self.say(format!("\n{}", capitalized(BankErr::CustomerNotFound)))
                .await?;
            return Ok(None);
        }

        Ok(Some(id))
    }

    /// Print `question` and wait for an answer. `None` when input ended.
    async fn prompt(&mut self, question: &str) -> anyhow::Result<Option<String>> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        let line = self.input.next_line().await.context("read answer")?;
        Ok(line.map(|l| l.trim().to_owned()))
    }

    async fn say(&mut self, msg: impl AsRef<str>) -> anyhow::Result<()> {
        self.output.write_all(msg.as_ref().as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        Ok(())
    }
}
