use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{get_value, set_value};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::Entry;

/// Key under which the entry collection is kept.
pub const ENTRIES_KEY: &str = "bb_items";

/// Somewhere a value can be loaded from and saved back to.
pub trait Store<T> {
    /// `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<T>>;
    fn save(&self, value: &T) -> Result<()>;
}

/// JSON value stored under one key of the `kv` table.
pub struct KvStore<'c> {
    conn: &'c Connection,
    key: &'static str,
}

impl<'c> KvStore<'c> {
    pub fn new(conn: &'c Connection, key: &'static str) -> Self {
        Self { conn, key }
    }

    pub fn entries(conn: &'c Connection) -> Self {
        Self::new(conn, ENTRIES_KEY)
    }
}

impl<T> Store<T> for KvStore<'_>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Option<T>> {
        match get_value(self.conn, self.key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        set_value(self.conn, self.key, &json)?;
        tracing::debug!(key = self.key, bytes = json.len(), "saved value");
        Ok(())
    }
}

/// Load the ledger, starting empty when nothing was saved.
pub fn load_ledger(store: &dyn Store<Vec<Entry>>) -> Result<Ledger> {
    let entries = store.load()?.unwrap_or_default();
    tracing::debug!(count = entries.len(), "loaded entries");
    Ok(Ledger::from_entries(entries))
}

pub fn save_ledger(store: &dyn Store<Vec<Entry>>, ledger: &Ledger) -> Result<()> {
    store.save(&ledger.entries().to_vec())
}

#[cfg(test)]
pub struct MemoryStore<T> {
    value: std::cell::RefCell<Option<T>>,
}

#[cfg(test)]
impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            value: std::cell::RefCell::new(None),
        }
    }
}

#[cfg(test)]
impl<T: Clone> Store<T> for MemoryStore<T> {
    fn load(&self) -> Result<Option<T>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, value: &T) -> Result<()> {
        *self.value.borrow_mut() = Some(value.clone());
        Ok(())
    }
}
