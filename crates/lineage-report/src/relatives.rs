//! Short summaries of the people a record reaches through its families
//!
//! Relatives are listed with name, sex, birth and death only. Their
//! citations are never numbered.

use crate::facts::{display_name, pointer, sex, FactRow};
use lineage_domain::{Record, SourceLookup};
use serde::Serialize;
use tracing::warn;

/// Events tried in order for a relative's birth
pub const BIRTH_EVENTS: &[&str] = &["BIRT", "CHR", "BAPM"];

/// Events tried in order for a relative's death
pub const DEATH_EVENTS: &[&str] = &["DEAT", "BURI", "CREM"];

/// Name, sex, birth and death of a related person
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeSummary {
    /// Person identifier
    pub xref: String,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `SEX` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,

    /// First of [`BIRTH_EVENTS`], or a `BIRT` placeholder
    pub birth: FactRow,

    /// First of [`DEATH_EVENTS`], or a `DEAT` placeholder
    pub death: FactRow,
}

impl RelativeSummary {
    /// Summarize one person
    pub fn of(person: &Record) -> Self {
        Self {
            xref: person.xref.clone(),
            name: display_name(person),
            sex: sex(person),
            birth: first_event(person, BIRTH_EVENTS, "BIRT"),
            death: first_event(person, DEATH_EVENTS, "DEAT"),
        }
    }
}

/// A family the subject is a child in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildFamily {
    /// Family identifier
    pub xref: String,

    /// First `HUSB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father: Option<RelativeSummary>,

    /// First `WIFE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother: Option<RelativeSummary>,

    /// Every other child, in storage order
    pub siblings: Vec<RelativeSummary>,
}

/// A family the subject is a spouse in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpouseFamily {
    /// Family identifier
    pub xref: String,

    /// First partner who is not the subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse: Option<RelativeSummary>,

    /// Children in storage order
    pub children: Vec<RelativeSummary>,
}

/// People `family` links to with `tag` (`HUSB`, `WIFE` or `CHIL`)
///
/// Links without a pointer and people the lookup cannot find are skipped.
pub fn linked<L>(family: &Record, tag: &str, lookup: &L) -> Vec<Record>
where
    L: SourceLookup + ?Sized,
{
    family
        .facts_with_tag(tag)
        .filter_map(pointer)
        .filter_map(|xref| {
            let person = lookup.lookup_source(&xref);
            if person.is_none() {
                warn!(family = %family.xref, %xref, "linked person not found");
            }
            person
        })
        .collect()
}

/// Parents and siblings of `subject` in family `xref`
pub fn child_family<L>(xref: &str, subject: &str, lookup: &L) -> Option<ChildFamily>
where
    L: SourceLookup + ?Sized,
{
    let family = find_family(xref, lookup)?;
    Some(ChildFamily {
        father: first_linked(&family, "HUSB", lookup),
        mother: first_linked(&family, "WIFE", lookup),
        siblings: linked(&family, "CHIL", lookup)
            .iter()
            .filter(|child| child.xref != subject)
            .map(RelativeSummary::of)
            .collect(),
        xref: family.xref,
    })
}

/// Spouse and children of `subject` in family `xref`
pub fn spouse_family<L>(xref: &str, subject: &str, lookup: &L) -> Option<SpouseFamily>
where
    L: SourceLookup + ?Sized,
{
    let family = find_family(xref, lookup)?;
    let spouse = ["HUSB", "WIFE"]
        .into_iter()
        .flat_map(|tag| linked(&family, tag, lookup))
        .find(|partner| partner.xref != subject);

    Some(SpouseFamily {
        spouse: spouse.as_ref().map(RelativeSummary::of),
        children: linked(&family, "CHIL", lookup)
            .iter()
            .map(RelativeSummary::of)
            .collect(),
        xref: family.xref,
    })
}

/// Father and mother from the first `FAMC` family of `person` that resolves
pub fn parents<L>(person: &Record, lookup: &L) -> (Option<RelativeSummary>, Option<RelativeSummary>)
where
    L: SourceLookup + ?Sized,
{
    person
        .facts_with_tag("FAMC")
        .filter_map(pointer)
        .find_map(|xref| find_family(&xref, lookup))
        .map(|family| {
            (
                first_linked(&family, "HUSB", lookup),
                first_linked(&family, "WIFE", lookup),
            )
        })
        .unwrap_or((None, None))
}

fn find_family<L>(xref: &str, lookup: &L) -> Option<Record>
where
    L: SourceLookup + ?Sized,
{
    let family = lookup.lookup_source(xref);
    if family.is_none() {
        warn!(%xref, "family not found");
    }
    family
}

fn first_linked<L>(family: &Record, tag: &str, lookup: &L) -> Option<RelativeSummary>
where
    L: SourceLookup + ?Sized,
{
    linked(family, tag, lookup).first().map(RelativeSummary::of)
}

fn first_event(person: &Record, tags: &[&str], placeholder: &str) -> FactRow {
    tags.iter()
        .find_map(|tag| person.first_fact(tag))
        .map(FactRow::uncited)
        .unwrap_or_else(|| FactRow::placeholder(placeholder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_domain::split_records;
    use std::collections::HashMap;

    const FILE: &str = "\
0 @I1@ INDI
1 NAME John /Smith/
1 SEX M
1 BIRT
2 DATE 1851
2 SOUR @S1@
1 FAMC @F1@
1 FAMS @F2@
0 @I2@ INDI
1 NAME William /Smith/
1 CHR
2 DATE 3 FEB 1820
2 PLAC Bradford
1 BURI
2 DATE 1890
0 @I3@ INDI
1 NAME Thomas /Smith/
0 @I4@ INDI
1 NAME Mary /Jones/
1 SEX F
1 CHR
2 DATE 1856
1 BIRT
2 DATE 1855
0 @F1@ FAM
1 HUSB @I2@
1 WIFE @I9@
1 CHIL @I3@
1 CHIL @I1@
0 @F2@ FAM
1 HUSB @I1@
1 WIFE @I4@
";

    fn records() -> HashMap<String, Record> {
        split_records(FILE)
            .into_iter()
            .map(|r| (r.xref.clone(), r))
            .collect()
    }

    #[test]
    fn test_summary_falls_back_to_later_events() {
        let records = records();
        let william = RelativeSummary::of(&records["I2"]);

        assert_eq!(william.name.as_deref(), Some("William Smith"));
        assert_eq!(william.sex, None);
        assert_eq!(william.birth.tag, "CHR");
        assert_eq!(william.birth.date.as_deref(), Some("3 FEB 1820"));
        assert_eq!(william.birth.place.as_deref(), Some("Bradford"));
        assert_eq!(william.death.tag, "BURI");
        assert_eq!(william.death.date.as_deref(), Some("1890"));
    }

    #[test]
    fn test_summary_prefers_birth_and_never_cites() {
        let records = records();
        let john = RelativeSummary::of(&records["I1"]);
        assert_eq!(john.birth.tag, "BIRT");
        assert!(john.birth.footnotes.is_empty());
        assert_eq!(john.death, FactRow::placeholder("DEAT"));

        // BIRT wins even when CHR is listed first
        let mary = RelativeSummary::of(&records["I4"]);
        assert_eq!(mary.birth.date.as_deref(), Some("1855"));
    }

    #[test]
    fn test_child_family() {
        let records = records();
        let lookup = |xref: &str| records.get(xref).cloned();

        let family = child_family("F1", "I1", &lookup).unwrap();
        assert_eq!(family.xref, "F1");
        assert_eq!(family.father.unwrap().xref, "I2");
        // I9 does not exist
        assert!(family.mother.is_none());
        let siblings: Vec<&str> = family.siblings.iter().map(|s| s.xref.as_str()).collect();
        assert_eq!(siblings, vec!["I3"]);

        assert!(child_family("F404", "I1", &lookup).is_none());
    }

    #[test]
    fn test_spouse_family() {
        let records = records();
        let lookup = |xref: &str| records.get(xref).cloned();

        let family = spouse_family("F2", "I1", &lookup).unwrap();
        assert_eq!(family.spouse.unwrap().name.as_deref(), Some("Mary Jones"));
        assert!(family.children.is_empty());

        // Seen from the wife's side the husband is the spouse
        let family = spouse_family("F2", "I4", &lookup).unwrap();
        assert_eq!(family.spouse.unwrap().xref, "I1");
    }

    #[test]
    fn test_parents() {
        let records = records();
        let lookup = |xref: &str| records.get(xref).cloned();

        let (father, mother) = parents(&records["I1"], &lookup);
        assert_eq!(father.unwrap().xref, "I2");
        assert!(mother.is_none());

        let (father, mother) = parents(&records["I4"], &lookup);
        assert!(father.is_none() && mother.is_none());
    }

    #[test]
    fn test_linked_skips_missing_people() {
        let records = records();
        let lookup = |xref: &str| records.get(xref).cloned();

        assert_eq!(linked(&records["F1"], "CHIL", &lookup).len(), 2);
        assert!(linked(&records["F1"], "WIFE", &lookup).is_empty());
    }
}
