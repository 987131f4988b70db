/// json statement - serialization for debugging and monitoring
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use savings_ledger_rs::{
    InterestRule, Ledger, Money, Rate, RuleTable, StatementGenerator, TransactionType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();
    let mut rules = RuleTable::new();

    let first = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
    ledger.add_transaction(first, "A1", TransactionType::Deposit, Money::from_major(1000))?;
    rules.upsert(InterestRule::new(first, "IR1", Rate::from_percentage(dec!(5))));

    let statement = StatementGenerator::new().generate(&mut ledger, &rules, "A1", 2025, 5)?;

    println!("=== statement as json ===\n");
    println!("{}", statement.json());

    // ledger events from the same run
    println!("\n=== events ===\n");
    for event in ledger.take_events() {
        println!("{event:?}");
    }

    Ok(())
}
