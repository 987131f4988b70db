use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::{InterestRule, TransactionType};

/// a validated transaction instruction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionCommand {
    pub date: NaiveDate,
    pub account: String,
    pub txn_type: TransactionType,
    pub amount: Money,
}

/// a validated statement request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementCommand {
    pub account: String,
    pub year: i32,
    pub month: u32,
}

/// parse a `yyyyMMdd` calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| LedgerError::InvalidDate {
        message: format!("expected yyyyMMdd, got {s:?}"),
    })
}

/// parse a positive amount with at most 2 decimal places
pub fn parse_amount(s: &str) -> Result<Money> {
    let d = Decimal::from_str(s).map_err(|_| LedgerError::InvalidCommand {
        message: format!("not an amount: {s:?}"),
    })?;
    if d.is_sign_negative() || d.is_zero() || d.normalize().scale() > 2 {
        return Err(LedgerError::InvalidAmount { amount: d });
    }
    Ok(Money::from_decimal(d))
}

/// parse an annual rate, strictly between 0 and 100 percent
pub fn parse_rate(s: &str) -> Result<Rate> {
    let d = Decimal::from_str(s).map_err(|_| LedgerError::InvalidCommand {
        message: format!("not a rate: {s:?}"),
    })?;
    let rate = Rate::from_percentage(d);
    if d <= Decimal::ZERO || d >= Decimal::ONE_HUNDRED {
        return Err(LedgerError::InvalidInterestRate { rate });
    }
    Ok(rate)
}

/// parse `<Date> <Account> <Type> <Amount>`; the type is `D` or `W`,
/// case-insensitive
pub fn parse_transaction(line: &str) -> Result<TransactionCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (date, account, txn_type, amount) = match parts[..] {
        [d, a, t, m] => (d, a, t, m),
        _ => {
            return Err(LedgerError::InvalidCommand {
                message: "expected <Date> <Account> <Type> <Amount>".to_string(),
            })
        }
    };

    let txn_type = match txn_type.to_ascii_uppercase().as_str() {
        "D" => TransactionType::Deposit,
        "W" => TransactionType::Withdrawal,
        other => {
            return Err(LedgerError::InvalidCommand {
                message: format!("unknown transaction type: {other:?}"),
            })
        }
    };

    Ok(TransactionCommand {
        date: parse_date(date)?,
        account: account.to_string(),
        txn_type,
        amount: parse_amount(amount)?,
    })
}

/// parse `<Date> <RuleId> <Rate in %>`
pub fn parse_rule(line: &str) -> Result<InterestRule> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (date, rule_id, rate) = match parts[..] {
        [d, i, r] => (d, i, r),
        _ => {
            return Err(LedgerError::InvalidCommand {
                message: "expected <Date> <RuleId> <Rate in %>".to_string(),
            })
        }
    };

    Ok(InterestRule::new(
        parse_date(date)?,
        rule_id,
        parse_rate(rate)?,
    ))
}

/// parse `<Account> <Year><Month>` with a 6-digit `yyyyMM` period
pub fn parse_statement_request(line: &str) -> Result<StatementCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (account, period) = match parts[..] {
        [a, p] => (a, p),
        _ => {
            return Err(LedgerError::InvalidCommand {
                message: "expected <Account> <Year><Month>".to_string(),
            })
        }
    };

    if period.len() != 6 || !period.chars().all(|c| c.is_ascii_digit()) {
        return Err(LedgerError::InvalidDate {
            message: format!("expected yyyyMM, got {period:?}"),
        });
    }
    let year: i32 = period[..4].parse().map_err(|_| LedgerError::InvalidDate {
        message: format!("expected yyyyMM, got {period:?}"),
    })?;
    let month: u32 = period[4..].parse().map_err(|_| LedgerError::InvalidDate {
        message: format!("expected yyyyMM, got {period:?}"),
    })?;
    if !(1..=12).contains(&month) {
        return Err(LedgerError::InvalidDate {
            message: format!("no such month: {period}"),
        });
    }

    Ok(StatementCommand {
        account: account.to_string(),
        year,
        month,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_transaction_line() {
        let cmd = parse_transaction("20230626 AC001 D 100.00").unwrap();
        assert_eq!(cmd.date, NaiveDate::from_ymd_opt(2023, 6, 26).unwrap());
        assert_eq!(cmd.account, "AC001");
        assert_eq!(cmd.txn_type, TransactionType::Deposit);
        assert_eq!(cmd.amount, Money::from_decimal(dec!(100)));
    }

    #[test]
    fn test_parse_transaction_type_is_case_insensitive() {
        let cmd = parse_transaction("20230626 AC001 w 25.5").unwrap();
        assert_eq!(cmd.txn_type, TransactionType::Withdrawal);
        assert_eq!(cmd.amount, Money::from_decimal(dec!(25.50)));
    }

    #[test]
    fn test_parse_transaction_rejects_malformed_lines() {
        assert!(parse_transaction("20230626 AC001 D").is_err());
        assert!(parse_transaction("20230626 AC001 X 100").is_err());
        assert!(parse_transaction("2023-06-26 AC001 D 100").is_err());
        assert!(parse_transaction("20231301 AC001 D 100").is_err());
    }

    #[test]
    fn test_parse_amount_bounds() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("1.999").is_err());
        assert!(parse_amount("abc").is_err());
        // trailing zeros beyond 2 places are still an exact 2-place amount
        assert_eq!(parse_amount("1.100").unwrap(), Money::from_decimal(dec!(1.10)));
    }

    #[test]
    fn test_parse_rule_line() {
        let rule = parse_rule("20230615 RULE03 2.20").unwrap();
        assert_eq!(rule.date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert_eq!(rule.rule_id, "RULE03");
        assert_eq!(rule.rate, Rate::from_percentage(dec!(2.2)));
    }

    #[test]
    fn test_parse_rate_open_interval() {
        assert!(parse_rate("0").is_err());
        assert!(parse_rate("100").is_err());
        assert!(parse_rate("-1").is_err());
        assert!(parse_rate("99.99").is_ok());
        assert!(parse_rate("0.01").is_ok());
    }

    #[test]
    fn test_parse_statement_request_line() {
        let cmd = parse_statement_request("AC001 202306").unwrap();
        assert_eq!(cmd.account, "AC001");
        assert_eq!(cmd.year, 2023);
        assert_eq!(cmd.month, 6);
    }

    #[test]
    fn test_parse_statement_request_rejects_bad_periods() {
        assert!(parse_statement_request("AC001").is_err());
        assert!(parse_statement_request("AC001 2023").is_err());
        assert!(parse_statement_request("AC001 202313").is_err());
        assert!(parse_statement_request("AC001 202300").is_err());
        assert!(parse_statement_request("AC001 2023ab").is_err());
    }
}
