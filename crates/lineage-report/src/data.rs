//! Serializable report output handed to the template layer

use crate::context::ReportContext;
use crate::error::ReportError;
use crate::facts::{CollectedFacts, FactRow};
use crate::relatives::{ChildFamily, RelativeSummary, SpouseFamily};
use crate::schema::ResolvedInputs;
use lineage_citation::FootnoteEntry;
use lineage_layout::{BoxKind, PageGeometry};
use serde::Serialize;
use std::collections::BTreeMap;

/// A photo placed in the image column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSlot {
    /// Media record identifier
    pub xref: String,

    /// Box descriptor for this slot, stacked below earlier slots
    pub style: String,
}

/// Individual report body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndividualData {
    /// Subject identifier
    pub xref: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `SEX` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,

    /// Rows, notes, sources and family links
    #[serde(flatten)]
    pub facts: CollectedFacts,

    /// Parents and siblings, one entry per `FAMC` family that resolves
    pub child_families: Vec<ChildFamily>,

    /// Spouse and children, one entry per `FAMS` family that resolves
    pub spouse_families: Vec<SpouseFamily>,

    /// Photos to print
    pub images: Vec<ImageSlot>,
}

/// Role of a person within a family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// `HUSB`
    Husband,
    /// `WIFE`
    Wife,
    /// `CHIL`
    Child,
}

/// One person of a family group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberData {
    /// Role in the family
    pub role: Role,

    /// Person identifier
    pub xref: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `SEX` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,

    /// Basic event rows (present or placeholder), printed first when blanks are on
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub basic_events: Vec<FactRow>,

    /// Remaining rows, notes and family links
    #[serde(flatten)]
    pub facts: CollectedFacts,

    /// Husband's or wife's father
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father: Option<RelativeSummary>,

    /// Husband's or wife's mother
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother: Option<RelativeSummary>,
}

/// Family group report body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyData {
    /// Family identifier
    pub xref: String,

    /// The family's own rows, notes and sources
    #[serde(flatten)]
    pub facts: CollectedFacts,

    /// Husband, wife and children in storage order
    pub members: Vec<MemberData>,

    /// Photos to print
    pub images: Vec<ImageSlot>,
}

impl FamilyData {
    /// Members with the given role
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &MemberData> {
        self.members.iter().filter(move |m| m.role == role)
    }
}

/// Report-specific part of the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    /// Individual report
    Individual(IndividualData),
    /// Family group report
    Family(FamilyData),
}

/// Everything a template needs to render one report
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    /// Report name
    pub report: String,

    /// Caller context (title already filled in)
    pub context: ReportContext,

    /// Validated inputs
    pub inputs: ResolvedInputs,

    /// Page and box geometry
    pub geometry: PageGeometry,

    /// Box descriptors keyed by region name
    pub styles: BTreeMap<&'static str, String>,

    /// Report-specific content
    pub body: ReportBody,

    /// Numbered footnotes, from 1
    pub footnotes: Vec<FootnoteEntry>,
}

impl ReportData {
    /// Descriptors for every box of `geometry`
    pub fn styles_for(geometry: &PageGeometry) -> BTreeMap<&'static str, String> {
        BoxKind::ALL
            .into_iter()
            .map(|kind| (kind.as_str(), geometry.style(kind)))
            .collect()
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
