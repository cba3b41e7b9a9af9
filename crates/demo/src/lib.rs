//! Demo scenario: open two accounts, transfer between them, and print the
//! account summaries before and after.

use std::io::Write;

use anyhow::Context;
use ledgerbank_banking::Bank;
use ledgerbank_core::AccountId;

/// Runs the scenario, writing each summary line to `out`.
///
/// Any failure stops the scenario; nothing is recovered here.
pub fn run(out: &mut impl Write) -> anyhow::Result<Bank> {
    let mut bank = Bank::new();

    let first = bank
        .create_account("John Doe", 1000.0)
        .context("failed to open account for John Doe")?
        .id_typed();
    let second = bank
        .create_account("Jane Doe", 500.0)
        .context("failed to open account for Jane Doe")?
        .id_typed();

    print_summaries(&bank, &[first, second], out)?;

    tracing::info!(from = %first, to = %second, amount = 200.0, "transferring");
    bank.transfer_money(first, second, 200.0)
        .with_context(|| format!("transfer from account {first} to account {second} failed"))?;

    print_summaries(&bank, &[first, second], out)?;

    Ok(bank)
}

fn print_summaries(bank: &Bank, ids: &[AccountId], out: &mut impl Write) -> anyhow::Result<()> {
    for &id in ids {
        let account = bank
            .find_account(id)
            .with_context(|| format!("account {id} disappeared"))?;
        writeln!(out, "{}", account.summary()).context("failed to write account summary")?;
    }
    Ok(())
}
