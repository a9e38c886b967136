use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BudgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Expense,
    Income,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            other => Err(BudgetError::InvalidEntry(format!(
                "unknown type '{other}' (expected expense or income)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Income,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Transport,
        Self::Shopping,
        Self::Bills,
        Self::Entertainment,
        Self::Health,
        Self::Income,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Income => "Income",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| BudgetError::InvalidEntry(format!("unknown category '{wanted}'")))
    }
}

/// A stored income or expense record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub category: Category,
    pub date: NaiveDate,
}

/// An entry that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub amount: f64,
    pub entry_type: EntryType,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewEntry {
    pub fn with_id(self, id: String) -> Entry {
        Entry {
            id,
            title: self.title,
            amount: self.amount,
            entry_type: self.entry_type,
            category: self.category,
            date: self.date,
        }
    }
}

/// Best-effort parser output; any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialEntry {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub entry_type: Option<EntryType>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
}

impl PartialEntry {
    /// Names of the fields the parser could not fill in, in display order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.amount.is_none() {
            missing.push("amount");
        }
        if self.title.is_none() {
            missing.push("title");
        }
        if self.entry_type.is_none() {
            missing.push("type");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        missing
    }

    /// Commit policy for parsed text: every field must be present.
    pub fn into_new_entry(self) -> Result<NewEntry, BudgetError> {
        let missing = self.missing_fields();
        match self {
            PartialEntry {
                title: Some(title),
                amount: Some(amount),
                entry_type: Some(entry_type),
                category: Some(category),
                date: Some(date),
            } => Ok(NewEntry {
                title,
                amount,
                entry_type,
                category,
                date,
            }),
            _ => Err(BudgetError::Incomplete(missing.join(", "))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}
