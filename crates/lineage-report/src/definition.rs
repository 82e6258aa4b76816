//! Report definitions
//!
//! A definition declares its inputs and turns a record into report data.
//! Page geometry and footnotes are owned by the [`Report`](crate::Report)
//! that runs it.

use crate::data::{FamilyData, ImageSlot, IndividualData, MemberData, ReportBody, Role};
use crate::error::ReportError;
use crate::facts::{
    display_name, pointer, sex, FactCollector, FactRow, BASIC_EVENTS, FAMILY_IGNORE,
    INDIVIDUAL_IGNORE, MEMBER_IGNORE, MEMBER_IGNORE_WITH_BLANKS,
};
use crate::relatives::{child_family, parents, spouse_family};
use crate::schema::{InputKind, InputSchema, Lookup, Preset, ResolvedInputs};
use lineage_citation::Footnotes;
use lineage_domain::{Record, SourceLookup};
use lineage_layout::PageGeometry;
use tracing::{debug, warn};

/// A report type
pub trait ReportDefinition {
    /// Stable identifier
    fn name(&self) -> &'static str;

    /// Human-readable title
    fn title(&self) -> &'static str;

    /// One-line description
    fn description(&self) -> &'static str;

    /// Declare the report's inputs
    fn setup(&self, schema: &mut InputSchema);

    /// Produce the report body
    ///
    /// Citations are interned into `footnotes` in the order facts are
    /// visited.
    fn collect(
        &self,
        inputs: &ResolvedInputs,
        geometry: &PageGeometry,
        footnotes: &mut Footnotes,
        lookup: &dyn SourceLookup,
    ) -> Result<ReportBody, ReportError>;
}

/// Every built-in report
pub fn builtin_reports() -> Vec<Box<dyn ReportDefinition>> {
    vec![Box::new(IndividualReport), Box::new(FamilyGroupReport)]
}

/// Find a built-in report by name
pub fn find_report(name: &str) -> Result<Box<dyn ReportDefinition>, ReportError> {
    builtin_reports()
        .into_iter()
        .find(|r| r.name() == name)
        .ok_or_else(|| ReportError::UnknownReport(name.to_string()))
}

/// A report of one individual's details
#[derive(Debug, Clone, Copy, Default)]
pub struct IndividualReport;

impl ReportDefinition for IndividualReport {
    fn name(&self) -> &'static str {
        "individual_report"
    }

    fn title(&self) -> &'static str {
        "Individual"
    }

    fn description(&self) -> &'static str {
        "A report of an individual's details."
    }

    fn setup(&self, schema: &mut InputSchema) {
        schema
            .add_input("pid", InputKind::Text, "Individual", Some(Lookup::Individual), "")
            .add_input("sources", InputKind::Checkbox, "Show sources?", None, "1")
            .add_input("notes", InputKind::Checkbox, "Show notes?", None, "1")
            .add_input("photos", InputKind::Select, "Show photos?", None, "highlighted")
            .add_option("photos", "none", "None")
            .add_option("photos", "all", "All")
            .add_option("photos", "highlighted", "Highlighted image")
            .add_preset(Preset::PageSize)
            .add_preset(Preset::Font);
    }

    fn collect(
        &self,
        inputs: &ResolvedInputs,
        geometry: &PageGeometry,
        footnotes: &mut Footnotes,
        lookup: &dyn SourceLookup,
    ) -> Result<ReportBody, ReportError> {
        let record = subject(lookup, inputs, "pid", "INDI")?;

        let facts = FactCollector::new(INDIVIDUAL_IGNORE)
            .with_sources(inputs.flag("sources"))
            .with_notes(inputs.flag("notes"))
            .collect(&record, footnotes, lookup);

        let photos = match inputs.get("photos") {
            "all" => media(&record),
            "highlighted" => media(&record).into_iter().take(1).collect(),
            _ => Vec::new(),
        };

        let child_families = facts
            .families_as_child
            .iter()
            .filter_map(|xref| child_family(xref, &record.xref, lookup))
            .collect();
        let spouse_families = facts
            .families_as_spouse
            .iter()
            .filter_map(|xref| spouse_family(xref, &record.xref, lookup))
            .collect();

        Ok(ReportBody::Individual(IndividualData {
            name: display_name(&record),
            sex: sex(&record),
            facts,
            child_families,
            spouse_families,
            images: image_slots(photos, geometry),
            xref: record.xref,
        }))
    }
}

/// A report of a family and its members
#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyGroupReport;

impl ReportDefinition for FamilyGroupReport {
    fn name(&self) -> &'static str {
        "family_group_report"
    }

    fn title(&self) -> &'static str {
        "Family"
    }

    fn description(&self) -> &'static str {
        "A report of family members and their details."
    }

    fn setup(&self, schema: &mut InputSchema) {
        schema
            .add_input("famid", InputKind::Text, "Family", Some(Lookup::Family), "")
            .add_input("sources", InputKind::Checkbox, "Show sources?", None, "1")
            .add_input("notes", InputKind::Checkbox, "Show notes?", None, "1")
            .add_input("photos", InputKind::Checkbox, "Show photos?", None, "1")
            .add_input("blanks", InputKind::Checkbox, "Print basic events when blank?", None, "0")
            .add_preset(Preset::PageSize)
            .add_preset(Preset::Font)
            .add_preset(Preset::UseColors);
    }

    fn collect(
        &self,
        inputs: &ResolvedInputs,
        geometry: &PageGeometry,
        footnotes: &mut Footnotes,
        lookup: &dyn SourceLookup,
    ) -> Result<ReportBody, ReportError> {
        let family = subject(lookup, inputs, "famid", "FAM")?;
        let sources = inputs.flag("sources");
        let notes = inputs.flag("notes");
        let blanks = inputs.flag("blanks");

        let facts = FactCollector::new(FAMILY_IGNORE)
            .with_sources(sources)
            .with_notes(notes)
            .collect(&family, footnotes, lookup);

        let ignore = if blanks {
            MEMBER_IGNORE_WITH_BLANKS
        } else {
            MEMBER_IGNORE
        };
        let collector = FactCollector::new(ignore)
            .with_sources(sources)
            .with_record_sources(false)
            .with_notes(notes);

        let mut members = Vec::new();
        for fact in &family.facts {
            let role = match fact.tag.as_str() {
                "HUSB" => Role::Husband,
                "WIFE" => Role::Wife,
                "CHIL" => Role::Child,
                _ => continue,
            };
            let Some(xref) = pointer(fact) else {
                debug!(family = %family.xref, tag = %fact.tag, "member link without pointer");
                continue;
            };
            let Some(person) = lookup.lookup_source(&xref) else {
                warn!(family = %family.xref, %xref, "family member not found");
                continue;
            };

            let basic_events = if blanks {
                BASIC_EVENTS
                    .iter()
                    .map(|tag| match person.first_fact(tag) {
                        Some(event) => collector.row(event, footnotes, lookup),
                        None => FactRow::placeholder(*tag),
                    })
                    .collect()
            } else {
                Vec::new()
            };

            let (father, mother) = match role {
                Role::Husband | Role::Wife => parents(&person, lookup),
                Role::Child => (None, None),
            };

            members.push(MemberData {
                role,
                name: display_name(&person),
                sex: sex(&person),
                basic_events,
                facts: collector.collect(&person, footnotes, lookup),
                father,
                mother,
                xref,
            });
        }

        let photos = if inputs.flag("photos") {
            media(&family)
        } else {
            Vec::new()
        };

        Ok(ReportBody::Family(FamilyData {
            facts,
            members,
            images: image_slots(photos, geometry),
            xref: family.xref,
        }))
    }
}

/// Fetch the record named by the `input` value and check its type
fn subject(
    lookup: &dyn SourceLookup,
    inputs: &ResolvedInputs,
    input: &str,
    expected: &'static str,
) -> Result<Record, ReportError> {
    let xref = inputs.get(input).trim().trim_matches('@');
    if xref.is_empty() {
        return Err(ReportError::MissingInput(input.to_string()));
    }

    let record = lookup
        .lookup_source(xref)
        .ok_or_else(|| ReportError::RecordNotFound(xref.to_string()))?;

    if record.tag != expected {
        return Err(ReportError::WrongRecordType {
            xref: record.xref,
            expected,
            found: record.tag,
        });
    }
    Ok(record)
}

/// Media pointers of a record, in storage order
fn media(record: &Record) -> Vec<String> {
    record.facts_with_tag("OBJE").filter_map(pointer).collect()
}

fn image_slots(media: Vec<String>, geometry: &PageGeometry) -> Vec<ImageSlot> {
    media
        .into_iter()
        .zip(1u32..)
        .map(|(xref, n)| ImageSlot {
            style: geometry.image_style(n),
            xref,
        })
        .collect()
}
