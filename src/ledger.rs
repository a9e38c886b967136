use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{BudgetError, Result};
use crate::ids::IdGenerator;
use crate::insights::{self, Tip};
use crate::models::{Entry, NewEntry, Totals};

/// In-memory entry collection, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    /// Build a ledger from stored entries. Entries that `add` would have
    /// rejected, and repeats of an id already seen, are dropped.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|e| {
                if !valid_amount(e.amount) || e.title.trim().is_empty() {
                    tracing::warn!(id = %e.id, amount = e.amount, "dropping invalid stored entry");
                    return false;
                }
                if !seen.insert(e.id.clone()) {
                    tracing::warn!(id = %e.id, "dropping stored entry with duplicate id");
                    return false;
                }
                true
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Validate `new`, give it a fresh id and put it at the front.
    pub fn add(&mut self, new: NewEntry, ids: &mut dyn IdGenerator) -> Result<&Entry> {
        validate(&new)?;
        let mut id = ids.next_id();
        while self.find(&id).is_some() {
            id = ids.next_id();
        }
        tracing::debug!(%id, title = %new.title, amount = new.amount, "adding entry");
        self.entries.insert(0, new.with_id(id));
        Ok(&self.entries[0])
    }

    /// Returns whether an entry with `id` existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        tracing::debug!(%id, removed, "remove entry");
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn totals(&self) -> Totals {
        insights::compute_totals(&self.entries)
    }

    pub fn tip(&self) -> Tip {
        insights::select_tip(&self.totals())
    }

    /// Entries grouped by date, latest date first. Within a group the
    /// collection order (newest added first) is kept.
    pub fn grouped_by_date(&self) -> Vec<(NaiveDate, Vec<&Entry>)> {
        let mut groups: Vec<(NaiveDate, Vec<&Entry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(d, _)| *d == entry.date) {
                Some((_, items)) => items.push(entry),
                None => groups.push((entry.date, vec![entry])),
            }
        }
        groups.sort_by(|a, b| b.0.cmp(&a.0));
        groups
    }
}

fn validate(new: &NewEntry) -> Result<()> {
    if new.title.trim().is_empty() {
        return Err(BudgetError::InvalidEntry("title must not be empty".to_string()));
    }
    if !valid_amount(new.amount) {
        return Err(BudgetError::InvalidEntry(format!(
            "amount must be a non-negative number, got {}",
            new.amount
        )));
    }
    Ok(())
}

fn valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::models::{Category, EntryType};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn new_entry(title: &str, amount: f64, entry_type: EntryType, day: &str) -> NewEntry {
        NewEntry {
            title: title.to_string(),
            amount,
            entry_type,
            category: Category::Other,
            date: date(day),
        }
    }

    struct RepeatingIds(Vec<&'static str>);

    impl IdGenerator for RepeatingIds {
        fn next_id(&mut self) -> String {
            self.0.remove(0).to_string()
        }
    }

    #[test]
    fn test_add_prepends_with_generated_id() {
        let mut ledger = Ledger::default();
        let mut ids = SequentialIds::new("t");
        ledger
            .add(new_entry("Lunch", 12.0, EntryType::Expense, "2025-01-01"), &mut ids)
            .unwrap();
        let added = ledger
            .add(new_entry("Salary", 1500.0, EntryType::Income, "2025-01-02"), &mut ids)
            .unwrap();
        assert_eq!(added.id, "t2");
        let titles: Vec<&str> = ledger.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Salary", "Lunch"]);
    }

    #[test]
    fn test_add_skips_colliding_ids() {
        let mut ledger = Ledger::default();
        let mut ids = RepeatingIds(vec!["x", "x", "y"]);
        ledger
            .add(new_entry("A", 1.0, EntryType::Expense, "2025-01-01"), &mut ids)
            .unwrap();
        let second = ledger
            .add(new_entry("B", 1.0, EntryType::Expense, "2025-01-01"), &mut ids)
            .unwrap();
        assert_eq!(second.id, "y");
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut ledger = Ledger::default();
        let mut ids = SequentialIds::new("t");
        let err = ledger
            .add(new_entry("Refund", -5.0, EntryType::Income, "2025-01-01"), &mut ids)
            .unwrap_err();
        assert!(matches!(err, BudgetError::InvalidEntry(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_title_and_nan() {
        let mut ledger = Ledger::default();
        let mut ids = SequentialIds::new("t");
        assert!(ledger
            .add(new_entry("  ", 5.0, EntryType::Expense, "2025-01-01"), &mut ids)
            .is_err());
        assert!(ledger
            .add(new_entry("Bad", f64::NAN, EntryType::Expense, "2025-01-01"), &mut ids)
            .is_err());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_zero_amount_is_allowed() {
        let mut ledger = Ledger::default();
        let mut ids = SequentialIds::new("t");
        assert!(ledger
            .add(new_entry("Free sample", 0.0, EntryType::Expense, "2025-01-01"), &mut ids)
            .is_ok());
    }

    #[test]
    fn test_remove_and_clear_keep_totals_consistent() {
        let mut ledger = Ledger::default();
        let mut ids = SequentialIds::new("t");
        ledger
            .add(new_entry("Pay", 100.0, EntryType::Income, "2025-01-01"), &mut ids)
            .unwrap();
        ledger
            .add(new_entry("Bus", 5.0, EntryType::Expense, "2025-01-01"), &mut ids)
            .unwrap();
        assert_eq!(ledger.totals().balance, 95.0);

        assert!(ledger.remove("t2"));
        assert!(!ledger.remove("t2"));
        assert!(!ledger.remove("nope"));
        assert_eq!(ledger.totals().expense, 0.0);
        assert_eq!(ledger.totals().balance, 100.0);
        assert_eq!(ledger.tip(), Tip::SavingWell);

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.totals(), Totals::default());
        assert_eq!(ledger.tip(), Tip::AddItems);
    }

    #[test]
    fn test_from_entries_drops_invalid_and_duplicate_ids() {
        let stored = |id: &str, title: &str, amount: f64| Entry {
            id: id.to_string(),
            title: title.to_string(),
            amount,
            entry_type: EntryType::Expense,
            category: Category::Other,
            date: date("2025-01-01"),
        };
        let ledger = Ledger::from_entries(vec![
            stored("a", "Bus", 5.0),
            stored("b", "Broken", -3.0),
            stored("a", "Bus again", 7.0),
            stored("c", " ", 1.0),
            stored("d", "Odd", f64::INFINITY),
            stored("e", "Tea", 2.0),
        ]);
        let ids: Vec<&str> = ledger.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "e"]);
        assert_eq!(ledger.find("a").map(|e| e.amount), Some(5.0));
        assert_eq!(ledger.totals().expense, 7.0);
    }

    #[test]
    fn test_find() {
        let mut ledger = Ledger::default();
        let mut ids = SequentialIds::new("t");
        ledger
            .add(new_entry("Gym", 30.0, EntryType::Expense, "2025-01-01"), &mut ids)
            .unwrap();
        assert_eq!(ledger.find("t1").map(|e| e.title.as_str()), Some("Gym"));
        assert!(ledger.find("t9").is_none());
    }

    #[test]
    fn test_grouped_by_date_latest_first() {
        let mut ledger = Ledger::default();
        let mut ids = SequentialIds::new("t");
        for (title, day) in [
            ("Old", "2025-01-01"),
            ("Newer", "2025-02-01"),
            ("Old again", "2025-01-01"),
            ("Mid", "2025-01-15"),
        ] {
            ledger
                .add(new_entry(title, 1.0, EntryType::Expense, day), &mut ids)
                .unwrap();
        }
        let groups = ledger.grouped_by_date();
        let dates: Vec<NaiveDate> = groups.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, vec![date("2025-02-01"), date("2025-01-15"), date("2025-01-01")]);
        let jan_first: Vec<&str> = groups[2].1.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(jan_first, vec!["Old again", "Old"]);
    }
}
