use ledgerbank_core::{AccountId, DomainError, DomainResult, Entity};

use crate::account::Account;

/// Registry owning every account.
///
/// Accounts are appended in creation order and never removed, so the Nth
/// account opened always carries number N.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an account with the next sequential number.
    pub fn create_account(
        &mut self,
        name: impl Into<String>,
        initial_deposit: f64,
    ) -> DomainResult<&Account> {
        let name = name.into();
        if initial_deposit < 0.0 {
            let err =
                DomainError::negative_amount("initial deposit amount cannot be negative");
            tracing::warn!(%name, initial_deposit, error = %err, "account creation rejected");
            return Err(err);
        }

        let id = AccountId::next_after(self.accounts.len());
        tracing::debug!(account = %id, %name, initial_deposit, "account created");
        let index = self.accounts.len();
        self.accounts.push(Account::new(id, name, initial_deposit));
        Ok(&self.accounts[index])
    }

    pub fn find_account(&self, id: AccountId) -> DomainResult<&Account> {
        self.position(id).map(|index| &self.accounts[index])
    }

    /// Mutable lookup; the account stays owned by the bank.
    pub fn find_account_mut(&mut self, id: AccountId) -> DomainResult<&mut Account> {
        self.position(id).map(|index| &mut self.accounts[index])
    }

    /// Deposits into the account with the given number.
    pub fn deposit(&mut self, id: AccountId, amount: f64) -> DomainResult<&Account> {
        let result = self
            .find_account_mut(id)
            .and_then(|account| account.deposit(amount).map(|()| account.balance()));
        match result {
            Ok(balance) => {
                tracing::debug!(account = %id, amount, balance, "deposit completed");
                self.find_account(id)
            }
            Err(err) => {
                tracing::warn!(account = %id, amount, error = %err, "deposit rejected");
                Err(err)
            }
        }
    }

    /// Withdraws from the account with the given number.
    pub fn withdraw(&mut self, id: AccountId, amount: f64) -> DomainResult<&Account> {
        let result = self
            .find_account_mut(id)
            .and_then(|account| account.withdraw(amount).map(|()| account.balance()));
        match result {
            Ok(balance) => {
                tracing::debug!(account = %id, amount, balance, "withdrawal completed");
                self.find_account(id)
            }
            Err(err) => {
                tracing::warn!(account = %id, amount, error = %err, "withdrawal rejected");
                Err(err)
            }
        }
    }

    /// Moves `amount` from one account to another.
    ///
    /// The source is resolved before the destination. The withdrawal runs
    /// first and is all-or-nothing; once it succeeds the deposit cannot fail,
    /// so a rejected transfer leaves every balance untouched.
    pub fn transfer_money(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: f64,
    ) -> DomainResult<()> {
        self.try_transfer(from, to, amount).inspect_err(|err| {
            tracing::warn!(from = %from, to = %to, amount, error = %err, "transfer rejected");
        })
    }

    /// Accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn try_transfer(&mut self, from: AccountId, to: AccountId, amount: f64) -> DomainResult<()> {
        let from_index = self.position(from)?;
        let to_index = self.position(to)?;

        self.accounts[from_index].withdraw(amount)?;
        self.accounts[to_index].deposit(amount)?;

        tracing::debug!(
            from = %from,
            to = %to,
            amount,
            from_balance = self.accounts[from_index].balance(),
            to_balance = self.accounts[to_index].balance(),
            "transfer completed"
        );
        Ok(())
    }

    // Linear scan in creation order; ids are unique so the first hit is the only one.
    fn position(&self, id: AccountId) -> DomainResult<usize> {
        self.accounts
            .iter()
            .position(|account| account.has_id(&id))
            .ok_or_else(|| DomainError::account_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn balances(bank: &Bank) -> Vec<f64> {
        bank.accounts().iter().map(Account::balance).collect()
    }

    fn two_account_bank() -> Bank {
        let mut bank = Bank::new();
        bank.create_account("A", 100.0).unwrap();
        bank.create_account("B", 50.0).unwrap();
        bank
    }

    #[test]
    fn accounts_are_numbered_sequentially() {
        let mut bank = Bank::new();
        assert!(bank.is_empty());

        let a = bank.create_account("A", 100.0).unwrap();
        assert_eq!(a.id_typed(), AccountId::new(1));
        assert_eq!(a.balance(), 100.0);

        let b = bank.create_account("B", 50.0).unwrap();
        assert_eq!(b.id_typed(), AccountId::new(2));
        assert_eq!(b.name(), "B");
        assert_eq!(b.balance(), 50.0);

        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn rejected_creation_does_not_consume_a_number() {
        let mut bank = two_account_bank();

        let err = bank.create_account("C", -5.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::negative_amount("initial deposit amount cannot be negative")
        );
        assert_eq!(bank.len(), 2);

        let c = bank.create_account("C", 0.0).unwrap();
        assert_eq!(c.id_typed(), AccountId::new(3));
    }

    #[test]
    fn find_account_returns_the_matching_account() {
        let bank = two_account_bank();
        let b = bank.find_account(AccountId::new(2)).unwrap();
        assert_eq!(b.name(), "B");
    }

    #[test]
    fn find_account_rejects_unassigned_numbers() {
        let bank = two_account_bank();
        for id in [0, 3, 99] {
            let err = bank.find_account(AccountId::new(id)).unwrap_err();
            assert_eq!(err, DomainError::account_not_found(AccountId::new(id)));
        }
    }

    #[test]
    fn deposit_reaches_the_owned_account() {
        let mut bank = two_account_bank();

        let account = bank.deposit(AccountId::new(1), 50.0).unwrap();
        assert_eq!(account.balance(), 150.0);
        assert_eq!(balances(&bank), vec![150.0, 50.0]);
    }

    #[test]
    fn withdraw_reaches_the_owned_account() {
        let mut bank = two_account_bank();

        let account = bank.withdraw(AccountId::new(2), 20.0).unwrap();
        assert_eq!(account.balance(), 30.0);
        assert_eq!(balances(&bank), vec![100.0, 30.0]);
    }

    #[test]
    fn rejected_bank_operations_change_nothing() {
        let mut bank = two_account_bank();

        let err = bank.deposit(AccountId::new(1), -1.0).unwrap_err();
        assert!(matches!(err, DomainError::NegativeAmount(_)));

        let err = bank.withdraw(AccountId::new(2), 50.01).unwrap_err();
        assert!(matches!(err, DomainError::InsufficientFunds(_)));

        let err = bank.deposit(AccountId::new(9), 1.0).unwrap_err();
        assert_eq!(err, DomainError::account_not_found(AccountId::new(9)));

        assert_eq!(balances(&bank), vec![100.0, 50.0]);
    }

    #[test]
    fn mutable_lookup_updates_the_owned_account() {
        let mut bank = two_account_bank();

        bank.find_account_mut(AccountId::new(1))
            .unwrap()
            .deposit(50.0)
            .unwrap();
        assert_eq!(bank.find_account(AccountId::new(1)).unwrap().balance(), 150.0);

        let err = bank.find_account_mut(AccountId::new(0)).unwrap_err();
        assert_eq!(err, DomainError::account_not_found(AccountId::new(0)));
    }

    #[test]
    fn transfer_moves_funds() {
        let mut bank = two_account_bank();
        bank.transfer_money(AccountId::new(1), AccountId::new(2), 30.0)
            .unwrap();
        assert_eq!(balances(&bank), vec![70.0, 80.0]);
    }

    #[test]
    fn transfer_exceeding_balance_changes_nothing() {
        let mut bank = two_account_bank();
        let err = bank
            .transfer_money(AccountId::new(1), AccountId::new(2), 200.0)
            .unwrap_err();
        assert!(matches!(err, DomainError::InsufficientFunds(_)));
        assert_eq!(balances(&bank), vec![100.0, 50.0]);
    }

    #[test]
    fn transfer_of_negative_amount_changes_nothing() {
        let mut bank = two_account_bank();
        let err = bank
            .transfer_money(AccountId::new(1), AccountId::new(2), -10.0)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::negative_amount("withdrawal amount cannot be negative")
        );
        assert_eq!(balances(&bank), vec![100.0, 50.0]);
    }

    #[test]
    fn transfer_from_unknown_account_changes_nothing() {
        let mut bank = two_account_bank();
        let err = bank
            .transfer_money(AccountId::new(99), AccountId::new(1), 10.0)
            .unwrap_err();
        assert_eq!(err, DomainError::account_not_found(AccountId::new(99)));
        assert_eq!(balances(&bank), vec![100.0, 50.0]);
    }

    #[test]
    fn transfer_to_unknown_account_fails_before_withdrawing() {
        let mut bank = two_account_bank();
        let err = bank
            .transfer_money(AccountId::new(1), AccountId::new(42), 10.0)
            .unwrap_err();
        assert_eq!(err, DomainError::account_not_found(AccountId::new(42)));
        assert_eq!(balances(&bank), vec![100.0, 50.0]);
    }

    #[test]
    fn source_is_resolved_before_destination() {
        let mut bank = two_account_bank();
        let err = bank
            .transfer_money(AccountId::new(7), AccountId::new(8), 10.0)
            .unwrap_err();
        assert_eq!(err, DomainError::account_not_found(AccountId::new(7)));
    }

    #[test]
    fn transfer_to_same_account_keeps_balance() {
        let mut bank = two_account_bank();
        bank.transfer_money(AccountId::new(1), AccountId::new(1), 40.0)
            .unwrap();
        assert_eq!(balances(&bank), vec![100.0, 50.0]);

        let err = bank
            .transfer_money(AccountId::new(1), AccountId::new(1), 150.0)
            .unwrap_err();
        assert!(matches!(err, DomainError::InsufficientFunds(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// The Nth successful creation yields number N, regardless of rejected
        /// attempts in between.
        #[test]
        fn nth_created_account_gets_number_n(
            deposits in prop::collection::vec(-1_000.0f64..1_000.0, 1..40)
        ) {
            let mut bank = Bank::new();
            let mut created = 0u64;

            for deposit in deposits {
                match bank.create_account("acct", deposit) {
                    Ok(account) => {
                        created += 1;
                        prop_assert_eq!(account.id_typed(), AccountId::new(created));
                    }
                    Err(err) => {
                        prop_assert!(deposit < 0.0);
                        prop_assert!(matches!(err, DomainError::NegativeAmount(_)));
                    }
                }
            }

            prop_assert_eq!(bank.len(), created as usize);
            for (index, account) in bank.accounts().iter().enumerate() {
                prop_assert_eq!(account.id_typed().value() as usize, index + 1);
            }
        }

        /// A transfer either moves exactly `amount` or changes nothing.
        #[test]
        fn transfer_is_all_or_nothing(
            from_balance in 0.0f64..10_000.0,
            to_balance in 0.0f64..10_000.0,
            amount in -100.0f64..20_000.0,
        ) {
            let mut bank = Bank::new();
            bank.create_account("from", from_balance).unwrap();
            bank.create_account("to", to_balance).unwrap();

            match bank.transfer_money(AccountId::new(1), AccountId::new(2), amount) {
                Ok(()) => {
                    prop_assert_eq!(
                        balances(&bank),
                        vec![from_balance - amount, to_balance + amount]
                    );
                }
                Err(_) => prop_assert_eq!(balances(&bank), vec![from_balance, to_balance]),
            }
            prop_assert!(bank.accounts().iter().all(|a| a.balance() >= 0.0));
        }
    }
}
