use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// account identifier (opaque caller-supplied key)
pub type AccountId = String;

/// ledger-assigned transaction identifier, formatted `yyyyMMdd-NN`
pub type TxnId = String;

/// transaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// credits the account
    Deposit,
    /// debits the account
    Withdrawal,
    /// credit synthesized at the end of a statement month
    Interest,
}

impl TransactionType {
    /// single-letter code used by text commands and statement rows
    pub fn code(&self) -> char {
        match self {
            TransactionType::Deposit => 'D',
            TransactionType::Withdrawal => 'W',
            TransactionType::Interest => 'I',
        }
    }
}

/// one immutable ledger event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub account: AccountId,
    pub txn_type: TransactionType,
    pub amount: Money,
    /// absent on interest postings, which carry no ledger id
    pub id: Option<TxnId>,
}

impl Transaction {
    /// contribution to the account balance: deposits and interest credit,
    /// withdrawals debit
    pub fn signed_amount(&self) -> Money {
        match self.txn_type {
            TransactionType::Deposit | TransactionType::Interest => self.amount,
            TransactionType::Withdrawal => -self.amount,
        }
    }

    /// history ordering: date first, id-bearing rows before the end-of-day
    /// interest posting, then id order
    pub(crate) fn sort_key(&self) -> (NaiveDate, bool, &str) {
        (self.date, self.id.is_none(), self.id.as_deref().unwrap_or(""))
    }
}

/// an effective-dated annual interest rate, applying from `date` (inclusive)
/// until superseded by a later-dated rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRule {
    pub date: NaiveDate,
    pub rule_id: String,
    pub rate: Rate,
}

impl InterestRule {
    pub fn new(date: NaiveDate, rule_id: impl Into<String>, rate: Rate) -> Self {
        Self {
            date,
            rule_id: rule_id.into(),
            rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn txn(date: NaiveDate, txn_type: TransactionType, id: Option<&str>) -> Transaction {
        Transaction {
            date,
            account: "AC001".to_string(),
            txn_type,
            amount: Money::from_decimal(dec!(100)),
            id: id.map(str::to_string),
        }
    }

    #[test]
    fn test_signed_amount() {
        let d = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert_eq!(
            txn(d, TransactionType::Deposit, Some("20250501-01")).signed_amount(),
            Money::from_major(100)
        );
        assert_eq!(
            txn(d, TransactionType::Interest, None).signed_amount(),
            Money::from_major(100)
        );
        assert_eq!(
            txn(d, TransactionType::Withdrawal, Some("20250501-02")).signed_amount(),
            -Money::from_major(100)
        );
    }

    #[test]
    fn test_interest_sorts_after_same_day_transactions() {
        let d = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        let withdrawal = txn(d, TransactionType::Withdrawal, Some("20250531-01"));
        let interest = txn(d, TransactionType::Interest, None);
        assert!(withdrawal.sort_key() < interest.sort_key());
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(TransactionType::Deposit.code(), 'D');
        assert_eq!(TransactionType::Withdrawal.code(), 'W');
        assert_eq!(TransactionType::Interest.code(), 'I');
    }
}
