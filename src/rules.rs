use chrono::NaiveDate;

use crate::decimal::Rate;
use crate::events::{Event, EventStore};
use crate::types::InterestRule;

/// effective-dated interest rate schedule
///
/// rules are kept sorted ascending by effective date; each rule applies from
/// its date (inclusive) until the next rule's date, and no rate is defined
/// before the earliest rule
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<InterestRule>,
    events: EventStore,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// insert a rule, replacing any existing rule sharing its effective date
    pub fn upsert(&mut self, rule: InterestRule) {
        let replaced = match self.rules.binary_search_by(|r| r.date.cmp(&rule.date)) {
            Ok(idx) => {
                self.rules[idx] = rule.clone();
                true
            }
            Err(idx) => {
                self.rules.insert(idx, rule.clone());
                false
            }
        };
        self.events.emit(Event::RuleUpserted {
            date: rule.date,
            rule_id: rule.rule_id,
            rate: rule.rate,
            replaced,
        });
    }

    /// the rule in effect on `date`: the one with the greatest effective
    /// date `<= date`, if any
    pub fn rule_as_of(&self, date: NaiveDate) -> Option<&InterestRule> {
        let idx = self.rules.partition_point(|r| r.date <= date);
        idx.checked_sub(1).map(|i| &self.rules[i])
    }

    /// the annual rate in effect on `date`; zero when no rule applies
    pub fn rate_as_of(&self, date: NaiveDate) -> Rate {
        self.rule_as_of(date).map(|r| r.rate).unwrap_or(Rate::ZERO)
    }

    /// earliest effective date strictly after `date`, if any
    pub fn next_change_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        let idx = self.rules.partition_point(|r| r.date <= date);
        self.rules.get(idx).map(|r| r.date)
    }

    /// full schedule, ascending by effective date
    pub fn all_rules(&self) -> &[InterestRule] {
        &self.rules
    }

    /// drain events recorded since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
