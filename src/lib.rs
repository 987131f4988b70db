pub mod decimal;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod parse;
pub mod render;
pub mod rules;
pub mod statement;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use ledger::Ledger;
pub use rules::RuleTable;
pub use statement::{
    AccrualEngine, AccrualResult, AccrualSegment, RoundingPolicy, Statement, StatementGenerator,
    StatementRow,
};
pub use types::{AccountId, InterestRule, Transaction, TransactionType, TxnId};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
