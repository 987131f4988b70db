/// quick start - deposits, withdrawals, rate rules, one monthly statement
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use savings_ledger_rs::{
    render, InterestRule, Ledger, Money, Rate, RuleTable, StatementGenerator, TransactionType,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();
    let mut rules = RuleTable::new();

    // a few months of account activity
    ledger.add_transaction(day(2023, 5, 5), "AC001", TransactionType::Deposit, Money::from_major(100))?;
    ledger.add_transaction(day(2023, 6, 1), "AC001", TransactionType::Deposit, Money::from_major(150))?;
    ledger.add_transaction(day(2023, 6, 26), "AC001", TransactionType::Withdrawal, Money::from_major(20))?;
    ledger.add_transaction(day(2023, 6, 26), "AC001", TransactionType::Withdrawal, Money::from_major(100))?;

    print!("{}", render::account_statement("AC001", ledger.transactions("AC001")));
    println!();

    // the rate schedule moves twice before the statement month ends
    rules.upsert(InterestRule::new(day(2023, 1, 1), "RULE01", Rate::from_percentage(dec!(1.95))));
    rules.upsert(InterestRule::new(day(2023, 5, 20), "RULE02", Rate::from_percentage(dec!(1.90))));
    rules.upsert(InterestRule::new(day(2023, 6, 15), "RULE03", Rate::from_percentage(dec!(2.20))));

    print!("{}", render::interest_rules(rules.all_rules()));
    println!();

    let statement = StatementGenerator::new().generate(&mut ledger, &rules, "AC001", 2023, 6)?;
    print!("{}", render::monthly_statement(&statement));

    println!();
    println!("closing balance: {}", statement.closing_balance);

    Ok(())
}
