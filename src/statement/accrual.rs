use chrono::{Days, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::rules::RuleTable;
use crate::types::Transaction;

/// midpoint policy for the single terminal rounding of accrued interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoundingPolicy {
    /// round half to even (banker's rounding)
    #[default]
    HalfEven,
    /// round half away from zero
    HalfAwayFromZero,
}

impl RoundingPolicy {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingPolicy::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingPolicy::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

/// one maximal run of days sharing a balance and a rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccrualSegment {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: u32,
    pub balance: Money,
    pub rate: Rate,
}

/// accrual outcome for one statement period
#[derive(Debug, Clone, PartialEq)]
pub struct AccrualResult {
    pub segments: Vec<AccrualSegment>,
    pub interest: Money,
}

/// engine for accruing daily interest over a statement period
///
/// interest is computed day-by-day on a 365-day basis with no leap-year
/// adjustment, but days sharing a rate and a balance are merged into one
/// arithmetic step; segment boundaries are the union of rule-effective dates
/// and transaction dates
pub struct AccrualEngine {
    pub rounding: RoundingPolicy,
}

impl AccrualEngine {
    pub fn new(rounding: RoundingPolicy) -> Self {
        Self { rounding }
    }

    /// accrue over `[start, end]`
    ///
    /// `opening_balance` is the balance strictly before `start`;
    /// `transactions` are the period's transactions sorted by `(date, id)`.
    /// a transaction is balance-bearing from its own date, so the segment
    /// beginning on its date already accrues on the updated balance.
    /// the accumulated interest is rounded to 2 decimal places once, at the
    /// end, never per segment.
    pub fn accrue(
        &self,
        opening_balance: Money,
        transactions: &[Transaction],
        rules: &RuleTable,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AccrualResult {
        let mut segments = Vec::new();
        let mut accrued = Decimal::ZERO;
        let mut balance = opening_balance.as_decimal();
        let mut current = start;

        while current <= end {
            // transactions post at the start of their own date; segment
            // boundaries guarantee none fall strictly inside a segment
            balance += transactions
                .iter()
                .filter(|t| t.date == current)
                .map(|t| t.signed_amount().as_decimal())
                .sum::<Decimal>();

            let rate = rules.rate_as_of(current);
            let segment_end = self.segment_end(transactions, rules, current, end);
            let days = (segment_end - current).num_days() + 1;

            accrued += balance * rate.as_decimal() * Decimal::from(days) / Decimal::from(365);
            segments.push(AccrualSegment {
                start: current,
                end: segment_end,
                days: days as u32,
                balance: Money::from_decimal(balance),
                rate,
            });

            current = segment_end + Days::new(1);
        }

        AccrualResult {
            segments,
            interest: Money::from_decimal_with_strategy(accrued, self.rounding.strategy()),
        }
    }

    /// last day of the run beginning at `current`: the day before the next
    /// rule change or transaction date, clamped to the period
    fn segment_end(
        &self,
        transactions: &[Transaction],
        rules: &RuleTable,
        current: NaiveDate,
        end: NaiveDate,
    ) -> NaiveDate {
        let horizon = end + Days::new(1);
        let next_rule = rules
            .next_change_after(current)
            .filter(|d| *d <= end)
            .unwrap_or(horizon);
        let next_txn = transactions
            .iter()
            .map(|t| t.date)
            .find(|d| *d > current)
            .unwrap_or(next_rule);
        (next_rule.min(next_txn) - Days::new(1)).max(current)
    }
}

impl Default for AccrualEngine {
    fn default() -> Self {
        Self::new(RoundingPolicy::default())
    }
}
