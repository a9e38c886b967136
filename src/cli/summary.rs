use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::insights;
use crate::store::{load_ledger, KvStore};

use super::open_db;

pub fn totals() -> Result<()> {
    let (settings, conn) = open_db()?;
    let totals = load_ledger(&KvStore::entries(&conn))?.totals();
    let currency = settings.currency;

    let balance = if totals.balance < 0.0 {
        money(totals.balance, currency).red().bold()
    } else {
        money(totals.balance, currency).green().bold()
    };

    let mut table = Table::new();
    table.set_header(vec!["Income", "Expenses", "Balance"]);
    table.add_row(vec![
        Cell::new(money(totals.income, currency)),
        Cell::new(money(totals.expense, currency)),
        Cell::new(balance),
    ]);
    println!("{table}");
    Ok(())
}

pub fn tip() -> Result<()> {
    let (_settings, conn) = open_db()?;
    let ledger = load_ledger(&KvStore::entries(&conn))?;
    println!("{}", insights::tip(&ledger.totals()));
    Ok(())
}
