/// rate changes - how a statement month splits into accrual segments
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use savings_ledger_rs::{
    InterestRule, Ledger, Money, Rate, RuleTable, StatementGenerator, TransactionType,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();
    let mut rules = RuleTable::new();

    ledger.add_transaction(day(2023, 5, 5), "AC001", TransactionType::Deposit, Money::from_major(100))?;
    ledger.add_transaction(day(2023, 6, 1), "AC001", TransactionType::Deposit, Money::from_major(150))?;
    ledger.add_transaction(day(2023, 6, 26), "AC001", TransactionType::Withdrawal, Money::from_major(120))?;

    rules.upsert(InterestRule::new(day(2023, 1, 1), "RULE01", Rate::from_percentage(dec!(1.95))));
    rules.upsert(InterestRule::new(day(2023, 6, 15), "RULE03", Rate::from_percentage(dec!(2.20))));

    // every balance or rate change opens a new segment; days in between
    // collapse into a single multiplication
    let accrual = StatementGenerator::new().preview_accrual(&ledger, &rules, "AC001", 2023, 6)?;

    println!("june 2023 accrual for AC001");
    println!("---------------------------");
    for segment in &accrual.segments {
        println!(
            "{} .. {}  {:>2} days  balance {:>8}  rate {}",
            segment.start, segment.end, segment.days, segment.balance.to_string(), segment.rate,
        );
    }
    println!();
    println!("interest for the month: {}", accrual.interest);

    Ok(())
}
