use chrono::{Local, NaiveDate};
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{BudgetError, Result};
use crate::fmt::{money, CurrencyCode};
use crate::models::{Category, Entry, EntryType, NewEntry, PartialEntry};
use crate::parser::parse;
use crate::store::{load_ledger, save_ledger, KvStore};

use super::{id_source, open_db};

const QUICK_ENTRY_TITLE: &str = "Quick entry";

fn signed_amount(entry: &Entry, currency: CurrencyCode) -> String {
    match entry.entry_type {
        EntryType::Income => format!("+{}", money(entry.amount, currency)).green().to_string(),
        EntryType::Expense => format!("-{}", money(entry.amount, currency)).red().to_string(),
    }
}

fn describe(entry: &Entry, currency: CurrencyCode) -> String {
    format!(
        "{} {} ({}, {}) [{}]",
        entry.title,
        signed_amount(entry, currency),
        entry.category,
        entry.date,
        entry.id
    )
}

pub fn add(
    title: &str,
    amount: f64,
    entry_type: &str,
    category: &str,
    date: Option<&str>,
) -> Result<()> {
    let title = title.trim();
    if title.is_empty() || amount == 0.0 {
        return Err(BudgetError::InvalidEntry(
            "a title and a non-zero amount are required".to_string(),
        ));
    }
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| BudgetError::InvalidEntry(format!("invalid date '{raw}' (expected YYYY-MM-DD)")))?,
        None => Local::now().date_naive(),
    };
    let new = NewEntry {
        title: title.to_string(),
        amount: amount.abs(),
        entry_type: entry_type.parse()?,
        category: category.parse::<Category>()?,
        date,
    };

    let (settings, conn) = open_db()?;
    let store = KvStore::entries(&conn);
    let mut ledger = load_ledger(&store)?;
    let added = ledger.add(new, id_source().as_mut())?.clone();
    save_ledger(&store, &ledger)?;
    println!("Added: {}", describe(&added, settings.currency));
    Ok(())
}

pub fn quick(text: &str) -> Result<()> {
    let mut parsed = parse(text);
    if parsed.title.is_none() && !text.trim().is_empty() {
        parsed.title = Some(QUICK_ENTRY_TITLE.to_string());
    }
    let new = parsed.into_new_entry()?;

    let (settings, conn) = open_db()?;
    let store = KvStore::entries(&conn);
    let mut ledger = load_ledger(&store)?;
    let added = ledger.add(new, id_source().as_mut())?.clone();
    save_ledger(&store, &ledger)?;
    println!("Added: {}", describe(&added, settings.currency));
    Ok(())
}

fn show<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "(not found)".dimmed().to_string())
}

pub fn preview(text: &str) -> Result<()> {
    let parsed: PartialEntry = parse(text);
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![Cell::new("Title"), Cell::new(show(parsed.title.clone()))]);
    table.add_row(vec![Cell::new("Amount"), Cell::new(show(parsed.amount))]);
    table.add_row(vec![Cell::new("Type"), Cell::new(show(parsed.entry_type))]);
    table.add_row(vec![Cell::new("Category"), Cell::new(show(parsed.category))]);
    table.add_row(vec![Cell::new("Date"), Cell::new(show(parsed.date))]);
    println!("{table}");

    let missing = parsed.missing_fields();
    if !missing.is_empty() {
        println!("Would not be added: missing {}", missing.join(", "));
    }
    Ok(())
}

pub fn list() -> Result<()> {
    let (settings, conn) = open_db()?;
    let ledger = load_ledger(&KvStore::entries(&conn))?;
    if ledger.is_empty() {
        println!("No items yet.");
        return Ok(());
    }

    for (date, items) in ledger.grouped_by_date() {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Type", "Title", "Category", "Amount"]);
        for entry in items {
            let kind = match entry.entry_type {
                EntryType::Income => entry.entry_type.as_str().green(),
                EntryType::Expense => entry.entry_type.as_str().red(),
            };
            table.add_row(vec![
                Cell::new(&entry.id),
                Cell::new(kind),
                Cell::new(&entry.title),
                Cell::new(entry.category),
                Cell::new(signed_amount(entry, settings.currency)),
            ]);
        }
        println!("{}\n{table}", date.to_string().bold());
    }
    Ok(())
}

pub fn remove(id: &str) -> Result<()> {
    let (settings, conn) = open_db()?;
    let store = KvStore::entries(&conn);
    let mut ledger = load_ledger(&store)?;
    let entry = ledger
        .find(id)
        .cloned()
        .ok_or_else(|| BudgetError::UnknownEntry(id.to_string()))?;
    ledger.remove(id);
    save_ledger(&store, &ledger)?;
    println!("Removed: {}", describe(&entry, settings.currency));
    Ok(())
}

pub fn clear() -> Result<()> {
    let (_settings, conn) = open_db()?;
    let store = KvStore::entries(&conn);
    let mut ledger = load_ledger(&store)?;
    let count = ledger.len();
    ledger.clear();
    save_ledger(&store, &ledger)?;
    println!("Removed {count} entries");
    Ok(())
}
