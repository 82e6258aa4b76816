//! Fact rows and footnote collection for one record

use lineage_citation::Footnotes;
use lineage_domain::{RawFact, Record, SourceLookup};
use serde::Serialize;

/// Tags never listed as rows of an individual report
pub const INDIVIDUAL_IGNORE: &[&str] = &[
    "CHAN", "CHIL", "FAMC", "FAMS", "HUSB", "NAME", "NOTE", "OBJE", "RESN", "SEX", "SOUR", "TITL",
    "WIFE", "_UID", "_WT_OBJE_SORT",
];

/// Tags never listed as rows of a family's own facts
pub const FAMILY_IGNORE: &[&str] = &[
    "CHAN", "CHIL", "HUSB", "NOTE", "OBJE", "RESN", "SOUR", "WIFE", "_UID", "_WT_OBJE_SORT",
];

/// Tags never listed as rows of a family member
pub const MEMBER_IGNORE: &[&str] = &[
    "CHAN", "CHIL", "FAMC", "FAMS", "HUSB", "MARR", "NAME", "NOTE", "OBJE", "RESN", "SEX", "SOUR",
    "TITL", "WIFE", "_UID", "_WT_OBJE_SORT",
];

/// Events printed for every family member when blanks are requested
pub const BASIC_EVENTS: &[&str] = &["BIRT", "CHR", "BAPM", "DEAT", "CREM", "BURI"];

/// [`MEMBER_IGNORE`] plus [`BASIC_EVENTS`], which are listed up front instead
pub const MEMBER_IGNORE_WITH_BLANKS: &[&str] = &[
    "BAPM", "BIRT", "BURI", "CHAN", "CHIL", "CHR", "CREM", "DEAT", "FAMC", "FAMS", "HUSB", "MARR",
    "NAME", "NOTE", "OBJE", "RESN", "SEX", "SOUR", "TITL", "WIFE", "_UID", "_WT_OBJE_SORT",
];

/// One listed fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactRow {
    /// Fact tag
    pub tag: String,

    /// `DATE` child value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// `PLAC` child value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,

    /// Footnote indices, in citation order
    pub footnotes: Vec<usize>,
}

impl FactRow {
    /// Row for a fact whose citations are not numbered
    pub fn uncited(fact: &RawFact) -> Self {
        Self {
            tag: fact.tag.clone(),
            date: fact.attribute("DATE"),
            place: fact.attribute("PLAC"),
            footnotes: Vec::new(),
        }
    }

    /// Row for an event the record does not have
    pub fn placeholder(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            date: None,
            place: None,
            footnotes: Vec::new(),
        }
    }
}

/// Everything a report lists about one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectedFacts {
    /// Listed facts in storage order
    pub rows: Vec<FactRow>,

    /// `NOTE` values
    pub notes: Vec<String>,

    /// Footnotes of record-level and name citations
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<usize>,

    /// Families the record is a child in
    pub families_as_child: Vec<String>,

    /// Families the record is a spouse in
    pub families_as_spouse: Vec<String>,
}

/// Walks a record's facts and interns their citations
///
/// Facts are visited in storage order, so footnote numbers follow the
/// record.
///
/// # Examples
///
/// ```
/// use lineage_citation::Footnotes;
/// use lineage_domain::split_records;
/// use lineage_report::{FactCollector, INDIVIDUAL_IGNORE};
///
/// let records = split_records("\
/// 0 @I1@ INDI
/// 1 BIRT
/// 2 DATE 1851
/// 2 SOUR @S1@
/// 0 @S1@ SOUR
/// 1 TITL Parish Records");
/// let source = records[1].clone();
/// let lookup = move |xref: &str| (xref == "S1").then(|| source.clone());
///
/// let mut footnotes = Footnotes::default();
/// let facts = FactCollector::new(INDIVIDUAL_IGNORE).collect(&records[0], &mut footnotes, &lookup);
/// assert_eq!(facts.rows[0].date.as_deref(), Some("1851"));
/// assert_eq!(facts.rows[0].footnotes, vec![1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FactCollector<'a> {
    ignore: &'a [&'a str],
    sources: bool,
    record_sources: bool,
    notes: bool,
}

impl<'a> FactCollector<'a> {
    /// Collector listing every fact whose tag is not in `ignore`
    pub fn new(ignore: &'a [&'a str]) -> Self {
        Self {
            ignore,
            sources: true,
            record_sources: true,
            notes: true,
        }
    }

    /// Whether citations are turned into footnotes
    pub fn with_sources(mut self, sources: bool) -> Self {
        self.sources = sources;
        self
    }

    /// Whether record-level `SOUR` facts and `NAME` citations are numbered
    ///
    /// Family members turn this off so that only their listed facts add
    /// footnotes.
    pub fn with_record_sources(mut self, record_sources: bool) -> Self {
        self.record_sources = record_sources;
        self
    }

    /// Whether `NOTE` values are collected
    pub fn with_notes(mut self, notes: bool) -> Self {
        self.notes = notes;
        self
    }

    /// Whether a fact with this tag becomes a row
    pub fn lists(&self, tag: &str) -> bool {
        !self.ignore.contains(&tag)
    }

    /// Build the row for one fact, interning its citations
    pub fn row<L>(&self, fact: &RawFact, footnotes: &mut Footnotes, lookup: &L) -> FactRow
    where
        L: SourceLookup + ?Sized,
    {
        FactRow {
            footnotes: self.cite(fact, footnotes, lookup),
            ..FactRow::uncited(fact)
        }
    }

    /// Collect rows, notes, record-level footnotes and family links
    pub fn collect<L>(&self, record: &Record, footnotes: &mut Footnotes, lookup: &L) -> CollectedFacts
    where
        L: SourceLookup + ?Sized,
    {
        let mut collected = CollectedFacts::default();

        for fact in &record.facts {
            match fact.tag.as_str() {
                "SOUR" | "NAME" if self.record_sources => {
                    let indices = self.cite(fact, footnotes, lookup);
                    collected.sources.extend(indices);
                }
                "NOTE" if self.notes => {
                    collected.notes.push(fact.value().unwrap_or_default());
                }
                "FAMC" => collected.families_as_child.extend(pointer(fact)),
                "FAMS" => collected.families_as_spouse.extend(pointer(fact)),
                _ => {}
            }

            if self.lists(&fact.tag) {
                collected.rows.push(self.row(fact, footnotes, lookup));
            }
        }

        collected
    }

    fn cite<L>(&self, fact: &RawFact, footnotes: &mut Footnotes, lookup: &L) -> Vec<usize>
    where
        L: SourceLookup + ?Sized,
    {
        if self.sources {
            footnotes.cite_fact(fact, lookup)
        } else {
            Vec::new()
        }
    }
}

/// Bare identifier a linking fact (`1 FAMC @F1@`) points to
pub fn pointer(fact: &RawFact) -> Option<String> {
    let value = fact.value()?;
    let xref = value.trim().strip_prefix('@')?.strip_suffix('@')?;
    (!xref.is_empty()).then(|| xref.to_string())
}

/// First `SEX` value of a record
pub fn sex(record: &Record) -> Option<String> {
    record.first_fact("SEX").and_then(|f| f.value())
}

/// First `NAME` of a record with the surname slashes removed
pub fn display_name(record: &Record) -> Option<String> {
    let name = record.first_fact("NAME")?.value()?;
    let words: Vec<&str> = name
        .split(|c: char| c == '/' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();
    Some(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_citation::{CitationConfig, CitationFormatter};
    use lineage_domain::split_records;
    use std::collections::HashMap;

    const FILE: &str = "\
0 @I1@ INDI
1 NAME John /Smith/
2 SOUR @S1@
3 PAGE 45
1 SEX M
1 BIRT
2 DATE 12 MAR 1851
2 PLAC Leeds
2 SOUR @S1@
3 PAGE 45
2 SOUR @S2@
1 NOTE Emigrated
2 CONT in 1880
1 OCCU Weaver
2 SOUR @S2@
1 FAMC @F1@
1 FAMS @F2@
1 SOUR @S2@
1 CHAN
2 DATE 1 JAN 2015
0 @S1@ SOUR
1 TITL Parish Records
0 @S2@ SOUR
1 TITL Census
";

    fn setup() -> (Record, HashMap<String, Record>) {
        let records: HashMap<String, Record> = split_records(FILE)
            .into_iter()
            .map(|r| (r.xref.clone(), r))
            .collect();
        (records["I1"].clone(), records)
    }

    fn footnotes() -> Footnotes {
        Footnotes::new(CitationFormatter::new(CitationConfig::plain()))
    }

    #[test]
    fn test_collect_individual() {
        let (person, records) = setup();
        let lookup = |xref: &str| records.get(xref).cloned();
        let mut footnotes = footnotes();

        let facts = FactCollector::new(INDIVIDUAL_IGNORE).collect(&person, &mut footnotes, &lookup);

        let tags: Vec<&str> = facts.rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["BIRT", "OCCU"]);

        let birth = &facts.rows[0];
        assert_eq!(birth.date.as_deref(), Some("12 MAR 1851"));
        assert_eq!(birth.place.as_deref(), Some("Leeds"));
        // Same page of S1 as the name citation
        assert_eq!(birth.footnotes, vec![1, 2]);
        assert_eq!(facts.rows[1].footnotes, vec![2]);
        assert_eq!(facts.rows[1].date, None);

        assert_eq!(facts.sources, vec![1, 2]);
        assert_eq!(facts.notes, vec!["Emigrated\nin 1880"]);
        assert_eq!(facts.families_as_child, vec!["F1"]);
        assert_eq!(facts.families_as_spouse, vec!["F2"]);

        let registry = footnotes.registry();
        assert_eq!(registry.get(1), Some("Parish Records: 45"));
        assert_eq!(registry.get(2), Some("Census"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_sources_off_interns_nothing() {
        let (person, records) = setup();
        let lookup = |xref: &str| records.get(xref).cloned();
        let mut footnotes = footnotes();

        let facts = FactCollector::new(INDIVIDUAL_IGNORE)
            .with_sources(false)
            .collect(&person, &mut footnotes, &lookup);

        assert!(facts.rows.iter().all(|r| r.footnotes.is_empty()));
        assert!(facts.sources.is_empty());
        assert!(!footnotes.registry().has_entries());
    }

    #[test]
    fn test_record_sources_off_numbers_listed_facts_only() {
        let (_, records) = setup();
        let lookup = |xref: &str| records.get(xref).cloned();
        let person = Record::from_gedcom(
            "0 @I7@ INDI\n1 NAME Ann /Smith/\n2 SOUR @S2@\n1 BIRT\n2 SOUR @S1@\n3 PAGE 45\n1 SOUR @S2@\n2 PAGE 9",
        )
        .unwrap();

        let mut all = footnotes();
        let facts = FactCollector::new(INDIVIDUAL_IGNORE).collect(&person, &mut all, &lookup);
        assert_eq!(facts.sources, vec![1, 3]);
        assert_eq!(facts.rows[0].footnotes, vec![2]);

        let mut listed = footnotes();
        let facts = FactCollector::new(INDIVIDUAL_IGNORE)
            .with_record_sources(false)
            .collect(&person, &mut listed, &lookup);
        assert!(facts.sources.is_empty());
        assert_eq!(facts.rows[0].footnotes, vec![1]);
        assert_eq!(listed.registry().get(1), Some("Parish Records: 45"));
        assert_eq!(listed.registry().len(), 1);
    }

    #[test]
    fn test_uncited_row() {
        let fact = RawFact::from_block("1 DEAT\n2 DATE 1920\n2 PLAC York\n2 SOUR @S1@").unwrap();
        let row = FactRow::uncited(&fact);
        assert_eq!(row.tag, "DEAT");
        assert_eq!(row.date.as_deref(), Some("1920"));
        assert_eq!(row.place.as_deref(), Some("York"));
        assert!(row.footnotes.is_empty());
    }

    #[test]
    fn test_sex() {
        let (person, _) = setup();
        assert_eq!(sex(&person).as_deref(), Some("M"));
        assert_eq!(sex(&Record::new("I2", "INDI")), None);
    }

    #[test]
    fn test_notes_off() {
        let (person, records) = setup();
        let lookup = |xref: &str| records.get(xref).cloned();
        let mut footnotes = footnotes();

        let facts = FactCollector::new(INDIVIDUAL_IGNORE)
            .with_notes(false)
            .collect(&person, &mut footnotes, &lookup);
        assert!(facts.notes.is_empty());
    }

    #[test]
    fn test_pointer() {
        assert_eq!(pointer(&RawFact::new("FAMC", "1 FAMC @F1@", 1)).as_deref(), Some("F1"));
        assert_eq!(pointer(&RawFact::new("FAMC", "1 FAMC F1", 1)), None);
        assert_eq!(pointer(&RawFact::new("FAMC", "1 FAMC @@", 1)), None);
        assert_eq!(pointer(&RawFact::new("FAMC", "1 FAMC", 1)), None);
    }

    #[test]
    fn test_display_name() {
        let (person, _) = setup();
        assert_eq!(display_name(&person).as_deref(), Some("John Smith"));
        assert_eq!(display_name(&Record::new("I2", "INDI")), None);
    }

    #[test]
    fn test_placeholder_row() {
        let row = FactRow::placeholder("BURI");
        assert_eq!(row.tag, "BURI");
        assert!(row.date.is_none() && row.place.is_none() && row.footnotes.is_empty());
    }

    #[test]
    fn test_blank_ignore_list_covers_basic_events() {
        for tag in MEMBER_IGNORE.iter().chain(BASIC_EVENTS) {
            assert!(MEMBER_IGNORE_WITH_BLANKS.contains(tag), "{} missing", tag);
        }
        assert_eq!(
            MEMBER_IGNORE_WITH_BLANKS.len(),
            MEMBER_IGNORE.len() + BASIC_EVENTS.len()
        );
    }
}
