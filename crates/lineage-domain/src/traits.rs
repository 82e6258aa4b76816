//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the report engine and record
//! storage. Storage implementations live in other crates.

use crate::Record;

/// Resolve a source identifier to its record
///
/// The identifier is the bare xref with `@` delimiters already stripped.
/// Lookups are synchronous and may be slow; callers needing caching wrap the
/// implementation themselves.
///
/// Any `Fn(&str) -> Option<Record>` closure is a lookup.
///
/// # Examples
///
/// ```
/// use lineage_domain::{Record, SourceLookup};
///
/// let lookup = |xref: &str| (xref == "S1").then(|| Record::new("S1", "SOUR"));
/// assert!(lookup.lookup_source("S1").is_some());
/// assert!(lookup.lookup_source("S2").is_none());
/// ```
pub trait SourceLookup {
    /// Find the record with the given identifier
    fn lookup_source(&self, xref: &str) -> Option<Record>;
}

impl<F> SourceLookup for F
where
    F: Fn(&str) -> Option<Record>,
{
    fn lookup_source(&self, xref: &str) -> Option<Record> {
        self(xref)
    }
}

/// Trait for storing and retrieving records
///
/// Implemented by the infrastructure layer (lineage-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Get a record by identifier
    fn get_record(&self, xref: &str) -> Result<Option<Record>, Self::Error>;

    /// Insert or replace a record
    fn put_record(&mut self, record: Record) -> Result<(), Self::Error>;

    /// Number of stored records
    fn count(&self) -> Result<usize, Self::Error>;
}
