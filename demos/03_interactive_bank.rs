/// interactive bank - the text-menu shell over the ledger library
use std::io::{self, BufRead, Write};

use savings_ledger_rs::{parse, render, Ledger, RuleTable, StatementGenerator};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut ledger = Ledger::new();
    let mut rules = RuleTable::new();
    let generator = StatementGenerator::new();

    loop {
        println!("Welcome to AwesomeGIC Bank! What would you like to do?");
        println!("[T] Input transactions");
        println!("[I] Define interest rules");
        println!("[P] Print statement");
        println!("[Q] Quit");
        prompt()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match line.trim().to_ascii_uppercase().as_str() {
            "T" => input_transactions(&mut lines, &mut ledger)?,
            "I" => define_rules(&mut lines, &mut rules)?,
            "P" => print_statement(&mut lines, &generator, &mut ledger, &rules)?,
            "Q" => {
                println!("Thank you for banking with AwesomeGIC Bank.\nHave a nice day!");
                break;
            }
            _ => {}
        }
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn input_transactions(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    ledger: &mut Ledger,
) -> io::Result<()> {
    println!("Please enter transaction details in <Date> <Account> <Type> <Amount> format");
    println!("(or enter blank to go back to main menu):");
    loop {
        prompt()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        if line.trim().is_empty() {
            return Ok(());
        }

        let cmd = match parse::parse_transaction(&line) {
            Ok(cmd) => cmd,
            Err(_) => {
                println!("Invalid input. Try again.");
                continue;
            }
        };
        match ledger.add_transaction(cmd.date, &cmd.account, cmd.txn_type, cmd.amount) {
            Ok(_) => print!(
                "{}",
                render::account_statement(&cmd.account, ledger.transactions(&cmd.account))
            ),
            Err(err) => println!("Error: {err}"),
        }
    }
}

fn define_rules(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    rules: &mut RuleTable,
) -> io::Result<()> {
    println!("Please enter interest rules details in <Date> <RuleId> <Rate in %> format");
    println!("(or enter blank to go back to main menu):");
    loop {
        prompt()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        if line.trim().is_empty() {
            return Ok(());
        }

        match parse::parse_rule(&line) {
            Ok(rule) => {
                rules.upsert(rule);
                print!("{}", render::interest_rules(rules.all_rules()));
            }
            Err(_) => println!("Invalid input. Try again."),
        }
    }
}

fn print_statement(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    generator: &StatementGenerator,
    ledger: &mut Ledger,
    rules: &RuleTable,
) -> io::Result<()> {
    println!("Please enter account and month to generate the statement <Account> <Year><Month>");
    println!("(or enter blank to go back to main menu):");
    prompt()?;
    let line = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };
    if line.trim().is_empty() {
        return Ok(());
    }

    let cmd = match parse::parse_statement_request(&line) {
        Ok(cmd) => cmd,
        Err(_) => {
            println!("Invalid input. Try again.");
            return Ok(());
        }
    };
    match generator.generate(ledger, rules, &cmd.account, cmd.year, cmd.month) {
        Ok(statement) => print!("{}", render::monthly_statement(&statement)),
        Err(err) => println!("Error: {err}"),
    }
    Ok(())
}
