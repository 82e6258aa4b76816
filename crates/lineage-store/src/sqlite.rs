//! SQLite-backed record store

use crate::error::StoreError;
use lineage_domain::{split_records, Record, RecordStore, SourceLookup};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, warn};

/// SQLite-based implementation of [`RecordStore`]
///
/// Records are stored in their block form and re-split on read, so a record
/// comes back with the same facts in the same order.
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore` instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path`
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use lineage_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("family.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::new(":memory:")
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    /// Split `text` into records and store them in one transaction
    ///
    /// Existing xrefs are replaced. Returns the number of records read.
    pub fn import_gedcom(&mut self, text: &str) -> Result<usize, StoreError> {
        let records = split_records(text);

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO records (xref, tag, gedcom) VALUES (?1, ?2, ?3)",
            )?;
            for record in &records {
                stmt.execute(params![&record.xref, &record.tag, record.to_gedcom()])?;
            }
        }
        tx.commit()?;

        debug!(imported = records.len(), "records imported");
        Ok(records.len())
    }

    /// Identifiers of every record with the given tag, sorted
    pub fn xrefs_with_tag(&self, tag: &str) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT xref FROM records WHERE tag = ?1 ORDER BY xref")?;
        let xrefs = stmt
            .query_map(params![tag], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(xrefs)
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn get_record(&self, xref: &str) -> Result<Option<Record>, Self::Error> {
        let gedcom: Option<String> = self
            .conn
            .query_row(
                "SELECT gedcom FROM records WHERE xref = ?1",
                params![xref],
                |row| row.get(0),
            )
            .optional()?;

        match gedcom {
            None => Ok(None),
            Some(text) => Record::from_gedcom(&text)
                .map(Some)
                .ok_or_else(|| StoreError::InvalidData(format!("Unreadable record: {}", xref))),
        }
    }

    fn put_record(&mut self, record: Record) -> Result<(), Self::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO records (xref, tag, gedcom) VALUES (?1, ?2, ?3)",
            params![&record.xref, &record.tag, record.to_gedcom()],
        )?;
        Ok(())
    }

    fn count(&self) -> Result<usize, Self::Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl SourceLookup for SqliteStore {
    fn lookup_source(&self, xref: &str) -> Option<Record> {
        match self.get_record(xref) {
            Ok(record) => record,
            Err(e) => {
                warn!(xref, error = %e, "source lookup failed");
                None
            }
        }
    }
}
