pub mod accrual;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::rules::RuleTable;
use crate::types::{AccountId, Transaction, TransactionType, TxnId};

pub use accrual::{AccrualEngine, AccrualResult, AccrualSegment, RoundingPolicy};

/// one statement line: a transaction plus the balance after applying it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub date: NaiveDate,
    /// absent on the synthesized interest row
    pub txn_id: Option<TxnId>,
    pub txn_type: TransactionType,
    pub amount: Money,
    pub balance: Money,
}

/// a generated monthly statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub account: AccountId,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    /// balance strictly before the first day of the period
    pub opening_balance: Money,
    pub rows: Vec<StatementRow>,
    /// the month's accrued interest, when positive
    pub interest: Option<Money>,
    pub closing_balance: Money,
}

impl Statement {
    /// pretty-printed JSON view for debugging and monitoring
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// derives monthly statements from a ledger and a rule schedule
pub struct StatementGenerator {
    engine: AccrualEngine,
}

impl StatementGenerator {
    pub fn new() -> Self {
        Self {
            engine: AccrualEngine::default(),
        }
    }

    pub fn with_rounding(rounding: RoundingPolicy) -> Self {
        Self {
            engine: AccrualEngine::new(rounding),
        }
    }

    /// generate the statement for `(account, year, month)`
    ///
    /// interleaves the month's transactions with running balances and one
    /// synthesized interest row dated the last day of the month. positive
    /// interest is posted back to the ledger, so later balance queries and
    /// statements include it.
    pub fn generate(
        &self,
        ledger: &mut Ledger,
        rules: &RuleTable,
        account: &str,
        year: i32,
        month: u32,
    ) -> Result<Statement> {
        let (start, end) = month_bounds(year, month)?;
        let (opening_balance, month_txns) = month_window(ledger, account, start, end);

        let accrual = self
            .engine
            .accrue(opening_balance, &month_txns, rules, start, end);

        let mut rows = Vec::with_capacity(month_txns.len() + 1);
        let mut balance = opening_balance;
        for txn in &month_txns {
            balance += txn.signed_amount();
            rows.push(StatementRow {
                date: txn.date,
                txn_id: txn.id.clone(),
                txn_type: txn.txn_type,
                amount: txn.amount,
                balance,
            });
        }

        let interest = accrual.interest.is_positive().then_some(accrual.interest);
        if let Some(amount) = interest {
            ledger.post_interest(account, end, amount);
            balance += amount;
            rows.push(StatementRow {
                date: end,
                txn_id: None,
                txn_type: TransactionType::Interest,
                amount,
                balance,
            });
        }

        Ok(Statement {
            account: account.to_string(),
            period_start: start,
            period_end: end,
            opening_balance,
            rows,
            interest,
            closing_balance: balance,
        })
    }

    /// per-segment accrual arithmetic for `(account, year, month)` without
    /// posting anything
    pub fn preview_accrual(
        &self,
        ledger: &Ledger,
        rules: &RuleTable,
        account: &str,
        year: i32,
        month: u32,
    ) -> Result<AccrualResult> {
        let (start, end) = month_bounds(year, month)?;
        let (opening_balance, month_txns) = month_window(ledger, account, start, end);

        Ok(self
            .engine
            .accrue(opening_balance, &month_txns, rules, start, end))
    }
}

impl Default for StatementGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// opening balance and in-period transactions for one statement month
fn month_window(
    ledger: &Ledger,
    account: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> (Money, Vec<Transaction>) {
    let month_txns = ledger
        .transactions(account)
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect();
    (ledger.balance_as_of(account, start - Days::new(1)), month_txns)
}

/// first and last day of `(year, month)`
fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| LedgerError::InvalidDate {
        message: format!("no such month: {year}-{month:02}"),
    })?;
    Ok((start, start + Months::new(1) - Days::new(1)))
}
