pub mod currency;
pub mod entries;
pub mod init;
pub mod status;
pub mod summary;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::ids::{IdGenerator, RandomIds, SequentialIds};
use crate::settings::{load_settings, Settings};

/// When set, entries get ids `e1`, `e2`, ... instead of random ones.
pub const SEQUENTIAL_IDS_ENV: &str = "BUDGETBUDDY_SEQUENTIAL_IDS";

pub(crate) fn id_source() -> Box<dyn IdGenerator> {
    if std::env::var_os(SEQUENTIAL_IDS_ENV).is_some() {
        Box::new(SequentialIds::new("e"))
    } else {
        Box::new(RandomIds)
    }
}

/// Load settings and open the database, creating it on first use.
pub(crate) fn open_db() -> Result<(Settings, Connection)> {
    let settings = load_settings();
    std::fs::create_dir_all(PathBuf::from(&settings.data_dir))?;
    let conn = get_connection(&settings.db_path())?;
    init_db(&conn)?;
    Ok((settings, conn))
}

#[derive(Parser)]
#[command(name = "budgetbuddy", about = "Track income and expenses from the terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and currency, and create the database.
    Init {
        /// Path for budgetbuddy data
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Display currency code, e.g. EUR
        #[arg(long)]
        currency: Option<String>,
    },
    /// Add an entry by hand.
    Add {
        /// Short label, e.g. 'Groceries'
        title: String,
        /// Amount; the sign is ignored
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// expense or income
        #[arg(long = "type", default_value = "expense")]
        entry_type: String,
        /// Food, Transport, Shopping, Bills, Entertainment, Health, Income or Other
        #[arg(long, default_value = "Food")]
        category: String,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Read an entry from free text, e.g. 'Uber $23 yesterday', and add it.
    Quick {
        /// Text describing the entry
        text: String,
    },
    /// Show what would be read from free text without saving anything.
    Parse {
        /// Text describing the entry
        text: String,
    },
    /// List entries grouped by date, latest first.
    List,
    /// Remove one entry by ID.
    Remove {
        /// Entry ID (shown in `budgetbuddy list`)
        id: String,
    },
    /// Remove every entry.
    Clear,
    /// Show income, expense and balance.
    Totals,
    /// Show a savings tip based on the current totals.
    Tip,
    /// Show or change the display currency.
    Currency {
        /// New currency code
        code: Option<String>,
    },
    /// Show data location and entry count.
    Status,
}
