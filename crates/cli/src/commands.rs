//! Command handlers: open accounts from the given balances, run one
//! operation and print the resulting state.

use anyhow::{Context, Result};
use minibank_core::{Account, Bank, Money};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Serialize)]
struct TransferReport<'a> {
    bank: &'a str,
    amount: &'a Money,
    from: &'a Account,
    to: &'a Account,
}

pub fn debit(owner: &str, balance: Money, amount: Money, output: OutputFormat) -> Result<()> {
    let mut account = Account::new(owner, balance);
    account.debit(&amount)?;
    info!(owner, amount = %amount, "Debit applied");
    println!("{}", render_account(&account, output)?);
    Ok(())
}

pub fn credit(owner: &str, balance: Money, amount: Money, output: OutputFormat) -> Result<()> {
    let mut account = Account::new(owner, balance);
    account.credit(&amount);
    info!(owner, amount = %amount, "Credit applied");
    println!("{}", render_account(&account, output)?);
    Ok(())
}

pub fn transfer(
    bank_name: &str,
    (from_owner, from_balance): (&str, Money),
    (to_owner, to_balance): (&str, Money),
    amount: Money,
    output: OutputFormat,
) -> Result<()> {
    let bank = Bank::new(bank_name);
    let mut from = Account::new(from_owner, from_balance);
    let mut to = Account::new(to_owner, to_balance);

    bank.transfer(&mut from, &mut to, &amount)?;
    println!("{}", render_transfer(&bank, &from, &to, &amount, output)?);
    Ok(())
}

fn render_account(account: &Account, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(account.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(account).context("Failed to serialize account")
        }
    }
}

fn render_transfer(
    bank: &Bank,
    from: &Account,
    to: &Account,
    amount: &Money,
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(format!(
            "{} transferred {} from {} to {}\n  {}\n  {}",
            bank.name(),
            amount,
            from.owner(),
            to.owner(),
            from,
            to
        )),
        OutputFormat::Json => {
            let report = TransferReport {
                bank: bank.name(),
                amount,
                from,
                to,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize transfer")
        }
    }
}
