use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::types::{AccountId, Transaction, TransactionType, TxnId};

/// per-account transaction histories with derived balances
///
/// transaction ids are `yyyyMMdd-NN` where NN counts insertions on that
/// calendar date across all accounts; the counter map is explicit ledger
/// state, and histories maintain their `(date, id)` order on insert
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: BTreeMap<AccountId, Vec<Transaction>>,
    txn_counters: BTreeMap<NaiveDate, u32>,
    events: EventStore,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// append a deposit or withdrawal for `account`
    ///
    /// withdrawals are validated against the current balance (the sum over
    /// all existing transactions, regardless of date); a rejected withdrawal
    /// leaves the history and the id counter untouched
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        account: &str,
        txn_type: TransactionType,
        amount: Money,
    ) -> Result<Transaction> {
        if txn_type == TransactionType::Interest {
            return Err(LedgerError::InvalidCommand {
                message: "interest postings are made by statement generation".to_string(),
            });
        }

        let balance = self.balance(account);
        if txn_type == TransactionType::Withdrawal && amount > balance {
            return Err(LedgerError::InsufficientFunds {
                available: balance,
                requested: amount,
            });
        }

        let counter = self.txn_counters.entry(date).or_insert(0);
        *counter += 1;
        let txn_id: TxnId = format!("{}-{:02}", date.format("%Y%m%d"), counter);

        let txn = Transaction {
            date,
            account: account.to_string(),
            txn_type,
            amount,
            id: Some(txn_id.clone()),
        };
        self.insert_sorted(txn.clone());

        self.events.emit(Event::TransactionPosted {
            account: account.to_string(),
            txn_id,
            txn_type,
            amount,
            date,
            new_balance: balance + txn.signed_amount(),
        });

        Ok(txn)
    }

    /// append the interest credit synthesized for a statement month
    ///
    /// interest postings carry no ledger id, do not advance the date
    /// counter, and are exempt from the overdraft check
    pub(crate) fn post_interest(
        &mut self,
        account: &str,
        date: NaiveDate,
        amount: Money,
    ) -> Transaction {
        let txn = Transaction {
            date,
            account: account.to_string(),
            txn_type: TransactionType::Interest,
            amount,
            id: None,
        };
        self.insert_sorted(txn.clone());

        self.events.emit(Event::InterestPosted {
            account: account.to_string(),
            amount,
            date,
            new_balance: self.balance(account),
        });

        txn
    }

    /// full history for `account`, ordered by `(date, id)`; empty for an
    /// unknown account
    pub fn transactions(&self, account: &str) -> &[Transaction] {
        self.accounts.get(account).map(Vec::as_slice).unwrap_or(&[])
    }

    /// current balance: signed sum over the full history; zero for an
    /// unknown account
    pub fn balance(&self, account: &str) -> Money {
        self.transactions(account)
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }

    /// balance including only transactions dated `<= as_of`
    pub fn balance_as_of(&self, account: &str, as_of: NaiveDate) -> Money {
        self.transactions(account)
            .iter()
            .take_while(|t| t.date <= as_of)
            .map(Transaction::signed_amount)
            .sum()
    }

    /// drain events recorded since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    fn insert_sorted(&mut self, txn: Transaction) {
        let history = self.accounts.entry(txn.account.clone()).or_default();
        let idx = history.partition_point(|t| t.sort_key() <= txn.sort_key());
        history.insert(idx, txn);
    }
}
