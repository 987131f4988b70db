//! fixed-width text tables in the reference statement layout
//!
//! dates render as `yyyyMMdd` and decimal amounts always carry 2 fraction
//! digits; callers print the returned strings verbatim

use crate::statement::Statement;
use crate::types::{InterestRule, Transaction};

/// account header plus transaction table, without balances
pub fn account_statement(account: &str, txns: &[Transaction]) -> String {
    let mut out = format!("Account: {account}\n");
    out.push_str("| Date     | Txn Id      | Type | Amount |\n");
    for t in txns {
        out.push_str(&format!(
            "| {} | {:<11} | {}    | {:>6} |\n",
            t.date.format("%Y%m%d"),
            t.id.as_deref().unwrap_or(""),
            t.txn_type.code(),
            t.amount.to_string(),
        ));
    }
    out
}

/// the full monthly statement with running balances
pub fn monthly_statement(statement: &Statement) -> String {
    let mut out = format!("Account: {}\n", statement.account);
    out.push_str("| Date     | Txn Id      | Type | Amount | Balance |\n");
    for row in &statement.rows {
        out.push_str(&format!(
            "| {} | {:<11} | {}    | {:>6} | {:>7} |\n",
            row.date.format("%Y%m%d"),
            row.txn_id.as_deref().unwrap_or(""),
            row.txn_type.code(),
            row.amount.to_string(),
            row.balance.to_string(),
        ));
    }
    out
}

/// the rule schedule listing
pub fn interest_rules(rules: &[InterestRule]) -> String {
    let mut out = String::from("Interest rules:\n");
    out.push_str("| Date     | RuleId | Rate (%) |\n");
    for r in rules {
        out.push_str(&format!(
            "| {} | {:<6} | {:>8} |\n",
            r.date.format("%Y%m%d"),
            r.rule_id,
            format!("{:.2}", r.rate.as_percentage()),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use crate::ledger::Ledger;
    use crate::rules::RuleTable;
    use crate::statement::StatementGenerator;
    use crate::types::TransactionType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_account_statement_layout() {
        let mut ledger = Ledger::new();
        ledger
            .add_transaction(date(2023, 6, 26), "AC001", TransactionType::Deposit, Money::from_major(100))
            .unwrap();
        ledger
            .add_transaction(date(2023, 6, 26), "AC001", TransactionType::Withdrawal, Money::from_decimal(dec!(25.50)))
            .unwrap();

        let rendered = account_statement("AC001", ledger.transactions("AC001"));
        assert_eq!(
            rendered,
            "Account: AC001\n\
             | Date     | Txn Id      | Type | Amount |\n\
             | 20230626 | 20230626-01 | D    | 100.00 |\n\
             | 20230626 | 20230626-02 | W    |  25.50 |\n"
        );
    }

    #[test]
    fn test_monthly_statement_layout_with_interest_row() {
        let mut ledger = Ledger::new();
        let mut rules = RuleTable::new();
        ledger
            .add_transaction(date(2025, 5, 1), "A1", TransactionType::Deposit, Money::from_major(1000))
            .unwrap();
        rules.upsert(crate::types::InterestRule::new(
            date(2025, 5, 1),
            "IR1",
            Rate::from_percentage(dec!(5)),
        ));

        let statement = StatementGenerator::new()
            .generate(&mut ledger, &rules, "A1", 2025, 5)
            .unwrap();

        let rendered = monthly_statement(&statement);
        assert_eq!(
            rendered,
            "Account: A1\n\
             | Date     | Txn Id      | Type | Amount | Balance |\n\
             | 20250501 | 20250501-01 | D    | 1000.00 | 1000.00 |\n\
             | 20250531 |             | I    |   4.25 | 1004.25 |\n"
        );
    }

    #[test]
    fn test_interest_rules_layout() {
        let mut rules = RuleTable::new();
        rules.upsert(crate::types::InterestRule::new(
            date(2023, 6, 15),
            "RULE03",
            Rate::from_percentage(dec!(2.2)),
        ));

        let rendered = interest_rules(rules.all_rules());
        assert_eq!(
            rendered,
            "Interest rules:\n\
             | Date     | RuleId | Rate (%) |\n\
             | 20230615 | RULE03 |     2.20 |\n"
        );
    }
}
