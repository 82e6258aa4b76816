//! Lineage Storage Layer
//!
//! Implements the `RecordStore` and `SourceLookup` traits over an in-memory
//! map and over SQLite.
//!
//! # Examples
//!
//! ```
//! use lineage_domain::RecordStore;
//! use lineage_store::SqliteStore;
//!
//! let mut store = SqliteStore::in_memory().unwrap();
//! store.import_gedcom("0 @S1@ SOUR\n1 TITL Parish Records").unwrap();
//! assert_eq!(store.count().unwrap(), 1);
//! ```

#![warn(missing_docs)]

mod error;
mod memory;
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
