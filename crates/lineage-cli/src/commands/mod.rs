//! Command implementations.

pub mod footnotes;
pub mod geometry;
pub mod inputs;
pub mod report;
pub mod sizes;

pub use self::footnotes::execute_footnotes;
pub use self::geometry::execute_geometry;
pub use self::inputs::execute_inputs;
pub use self::report::execute_report;
pub use self::sizes::execute_sizes;

use crate::error::Result;
use lineage_domain::SourceLookup;
use lineage_store::{MemoryStore, SqliteStore};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a GEDCOM file into a record store.
///
/// With `db`, records are imported into that SQLite database and read back
/// from it; otherwise they are held in memory.
pub fn open_records(file: &Path, db: Option<&Path>) -> Result<Box<dyn SourceLookup>> {
    let text = fs::read_to_string(file)?;

    match db {
        Some(db) => {
            let mut store = SqliteStore::new(db)?;
            let imported = store.import_gedcom(&text)?;
            info!(file = %file.display(), db = %db.display(), imported, "records imported");
            Ok(Box::new(store))
        }
        None => {
            let store = MemoryStore::from_gedcom(&text);
            info!(file = %file.display(), records = store.len(), "records loaded");
            Ok(Box::new(store))
        }
    }
}

/// Bare identifier from `@I1@` or `I1`.
pub fn bare_xref(xref: &str) -> &str {
    xref.trim().trim_matches('@')
}
