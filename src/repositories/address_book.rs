//! In-memory address book keyed by contact name.

use crate::error::{ContactError, ContactResult};
use crate::models::Record;
use std::collections::HashMap;
use tracing::debug;

/// A keyed collection of [`Record`]s.
///
/// Records are keyed by their (trimmed) name. Adding a record whose name is
/// already present replaces the old record but keeps its listing position.
/// Listing follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key.clone(), record);

        if replaced.is_some() {
            debug!(contact = %key, "Replaced existing record");
        } else {
            debug!(contact = %key, "Added record");
            self.order.push(key);
        }

        replaced
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record named `name`.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::ContactNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;

        self.order.retain(|key| key != name);
        debug!(contact = %name, "Deleted record");
        Ok(record)
    }

    /// Iterate over all records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
