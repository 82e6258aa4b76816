//! Lineage Report Engine
//!
//! Declares report inputs, computes page geometry once per run and walks a
//! record's facts to build numbered footnotes and fact rows for a template.
//!
//! # Architecture
//!
//! ```text
//! ReportDefinition::setup → InputSchema → ResolvedInputs
//!                                             ↓ page_size
//! ReportBuilder ─────────────────────→ PageGeometry
//!       ↓
//!    Report::run → FactCollector → Footnotes → ReportData (JSON)
//!                       ↘ relatives (uncited summaries)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use lineage_domain::split_records;
//! use lineage_report::{IndividualReport, ReportBody, ReportBuilder};
//! use std::collections::HashMap;
//!
//! let records: HashMap<_, _> = split_records("\
//! 0 @I1@ INDI
//! 1 NAME John /Smith/
//! 1 BIRT
//! 2 DATE 1851
//! 2 SOUR @S1@
//! 3 PAGE 45
//! 0 @S1@ SOUR
//! 1 TITL Parish Records")
//!     .into_iter()
//!     .map(|r| (r.xref.clone(), r))
//!     .collect();
//! let lookup = |xref: &str| records.get(xref).cloned();
//!
//! let data = ReportBuilder::new(&IndividualReport)
//!     .set("pid", "I1")
//!     .set("sources", "1")
//!     .build()
//!     .unwrap()
//!     .run(&lookup)
//!     .unwrap();
//!
//! assert_eq!(data.footnotes[0].text, "<u>Parish Records</u>: 45");
//! let ReportBody::Individual(person) = &data.body else { unreachable!() };
//! assert_eq!(person.name.as_deref(), Some("John Smith"));
//! ```

#![warn(missing_docs)]

mod builder;
mod context;
mod data;
mod definition;
mod error;
mod facts;
mod relatives;
mod schema;

pub use builder::{Report, ReportBuilder, PAGE_SIZE_INPUT};
pub use context::{OutputMode, ReportContext};
pub use data::{
    FamilyData, ImageSlot, IndividualData, MemberData, ReportBody, ReportData, Role,
};
pub use definition::{
    builtin_reports, find_report, FamilyGroupReport, IndividualReport, ReportDefinition,
};
pub use error::ReportError;
pub use facts::{
    display_name, pointer, sex, CollectedFacts, FactCollector, FactRow, BASIC_EVENTS,
    FAMILY_IGNORE, INDIVIDUAL_IGNORE, MEMBER_IGNORE, MEMBER_IGNORE_WITH_BLANKS,
};
pub use relatives::{
    child_family, linked, parents, spouse_family, ChildFamily, RelativeSummary, SpouseFamily,
    BIRTH_EVENTS, DEATH_EVENTS,
};
pub use schema::{InputKind, InputSchema, InputSpec, Lookup, Preset, ResolvedInputs};
