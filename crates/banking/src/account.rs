use serde::Serialize;

use ledgerbank_core::{AccountId, DomainError, DomainResult, Entity};

/// A named ledger entry with a balance.
///
/// The balance is never negative after a successful operation. Failed
/// operations leave it untouched.
#[derive(Debug, PartialEq, Serialize)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: f64,
}

impl Account {
    /// Only the bank opens accounts; it validates the opening balance.
    pub(crate) fn new(id: AccountId, name: impl Into<String>, balance: f64) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> DomainResult<()> {
        if amount < 0.0 {
            return Err(DomainError::negative_amount(
                "deposit amount cannot be negative",
            ));
        }
        self.balance += amount;
        Ok(())
    }

    /// Negativity is checked before sufficiency.
    pub fn withdraw(&mut self, amount: f64) -> DomainResult<()> {
        if amount < 0.0 {
            return Err(DomainError::negative_amount(
                "withdrawal amount cannot be negative",
            ));
        }
        if self.balance < amount {
            return Err(DomainError::insufficient_funds("insufficient funds"));
        }
        self.balance -= amount;
        Ok(())
    }

    /// One-line description: number, name and current balance.
    pub fn summary(&self) -> String {
        format!(
            "Account Number: {}, Account Name: {}, Balance: {}",
            self.id,
            self.name,
            format_amount(self.balance)
        )
    }
}

/// Renders an amount with the shortest round-tripping digits.
///
/// Magnitudes in `[1e-3, 1e7)` and zero print as plain decimals that always
/// carry a fractional part (`1000.0`); anything else prints in scientific
/// form with an upper-case exponent (`1.0E7`, `5.0E-4`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug never switches to exponent notation inside this range.
        return format!("{amount:?}");
    }

    let scientific = format!("{amount:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.summary())
    }
}
