//! Lineage Citation Engine
//!
//! Builds numbered, deduplicated footnotes from the source citations attached
//! to a record's facts.
//!
//! # Architecture
//!
//! ```text
//! RawFact → citations() → CitationFormatter → FootnoteRegistry → template
//!                               ↑
//!                         SourceLookup (store)
//! ```
//!
//! # Key Features
//!
//! - **Attribute Extraction**: Leveled tag values with `CONT` joining (re-exported from the domain)
//! - **Citation Formatting**: `Author, Title (Publisher): page text` strings
//! - **Footnote Registry**: Append-only, exact-string deduplication, stable 1-based indices
//! - **Configurable Markup**: Title markers and page placement from TOML
//!
//! # Example Usage
//!
//! ```
//! use lineage_citation::{CitationConfig, CitationFormatter, Footnotes};
//! use lineage_domain::{RawFact, Record};
//!
//! let source = Record::new("S1", "SOUR")
//!     .with_fact(RawFact::new("TITL", "1 TITL Parish Records", 1));
//! let lookup = move |xref: &str| (xref == "S1").then(|| source.clone());
//!
//! let mut footnotes = Footnotes::new(CitationFormatter::new(CitationConfig::plain()));
//! let birth = RawFact::from_block("1 BIRT\n2 SOUR @S1@\n3 PAGE 45").unwrap();
//!
//! assert_eq!(footnotes.cite_fact(&birth, &lookup), vec![1]);
//! assert_eq!(footnotes.registry().get(1), Some("Parish Records: 45"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod footnotes;
mod formatter;


pub use config::{CitationConfig, PagePlacement};
pub use error::CitationError;
pub use footnotes::{FootnoteEntry, FootnoteRegistry, Footnotes, SENTINEL};
pub use formatter::{source_pointer, CitationFormatter};
pub use lineage_domain::extract;
