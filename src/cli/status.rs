use crate::error::Result;
use crate::fmt::money;
use crate::settings::{load_settings, settings_file_exists};
use crate::store::{load_ledger, KvStore};

use super::open_db;

pub fn run() -> Result<()> {
    if !settings_file_exists() {
        println!("No settings saved yet. Run `budgetbuddy init` to choose a data directory.");
        println!();
    }
    let settings = load_settings();
    let db_path = settings.db_path();

    println!("Data dir:   {}", settings.data_dir);
    println!("Database:   {}", db_path.display());
    println!("Currency:   {}", settings.currency);

    if db_path.exists() {
        let (_settings, conn) = open_db()?;
        let ledger = load_ledger(&KvStore::entries(&conn))?;
        let totals = ledger.totals();
        println!();
        println!("Entries:    {}", ledger.len());
        println!("Balance:    {}", money(totals.balance, settings.currency));
        println!("Tip:        {}", ledger.tip().message());
    } else {
        println!();
        println!("Database not found. Add an entry or run `budgetbuddy init` to create it.");
    }
    Ok(())
}
