//! Lineage Domain Layer
//!
//! This crate contains the record model and the pure text algorithms that every
//! other Lineage crate builds on. It has ZERO external dependencies and defines
//! the line tokenizer, leveled attribute extraction, and the trait interfaces
//! used to reach record storage.
//!
//! ## Key Concepts
//!
//! - **GedcomLine**: One `<level> [@xref@ ]<TAG>[ <value>]` line of the hierarchical format
//! - **RawFact**: An opaque block of lines belonging to one fact of a record
//! - **Record**: A level-0 record (individual, family, source...) and its facts
//! - **Leveled attribute**: A value addressed by depth + tag, with `CONT` continuation
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure functions over borrowed text, no I/O
//! - Storage implementations live in `lineage-store`
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attribute;
pub mod fact;
pub mod gedcom;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use attribute::extract;
pub use fact::RawFact;
pub use gedcom::GedcomLine;
pub use record::{split_records, Record};
pub use traits::{RecordStore, SourceLookup};
