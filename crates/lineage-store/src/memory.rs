//! In-memory record store

use lineage_domain::{split_records, Record, RecordStore, SourceLookup};
use std::collections::HashMap;
use std::convert::Infallible;
use tracing::debug;

/// HashMap-backed store, used for one-shot runs over a single file
///
/// # Examples
///
/// ```
/// use lineage_domain::SourceLookup;
/// use lineage_store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// store.import_gedcom("0 @S1@ SOUR\n1 TITL Parish Records");
/// assert!(store.lookup_source("S1").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, Record>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a whole file
    pub fn from_gedcom(text: &str) -> Self {
        let mut store = Self::new();
        store.import_gedcom(text);
        store
    }

    /// Split `text` into records and insert them, replacing existing xrefs
    ///
    /// Returns the number of records read.
    pub fn import_gedcom(&mut self, text: &str) -> usize {
        let records = split_records(text);
        let imported = records.len();
        for record in records {
            self.records.insert(record.xref.clone(), record);
        }
        debug!(imported, total = self.records.len(), "records imported");
        imported
    }

    /// Borrow a record without cloning
    pub fn get(&self, xref: &str) -> Option<&Record> {
        self.records.get(xref)
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    type Error = Infallible;

    fn get_record(&self, xref: &str) -> Result<Option<Record>, Self::Error> {
        Ok(self.records.get(xref).cloned())
    }

    fn put_record(&mut self, record: Record) -> Result<(), Self::Error> {
        self.records.insert(record.xref.clone(), record);
        Ok(())
    }

    fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.records.len())
    }
}

impl SourceLookup for MemoryStore {
    fn lookup_source(&self, xref: &str) -> Option<Record> {
        self.records.get(xref).cloned()
    }
}
