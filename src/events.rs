use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{AccountId, TransactionType, TxnId};

/// all events that can be emitted by the ledger components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // ledger events
    TransactionPosted {
        account: AccountId,
        txn_id: TxnId,
        txn_type: TransactionType,
        amount: Money,
        date: NaiveDate,
        new_balance: Money,
    },
    InterestPosted {
        account: AccountId,
        amount: Money,
        date: NaiveDate,
        new_balance: Money,
    },

    // rule table events
    RuleUpserted {
        date: NaiveDate,
        rule_id: String,
        rate: Rate,
        replaced: bool,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_take_events_drains_store() {
        let mut store = EventStore::new();
        store.emit(Event::RuleUpserted {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            rule_id: "RULE01".to_string(),
            rate: Rate::from_percentage(dec!(2.2)),
            replaced: false,
        });

        assert_eq!(store.events().len(), 1);
        let drained = store.take_events();
        assert_eq!(drained.len(), 1);
        assert!(store.events().is_empty());
    }
}
