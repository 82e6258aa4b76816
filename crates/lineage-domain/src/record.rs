//! Record module - level-0 records and record splitting

use crate::fact::RawFact;
use crate::gedcom::GedcomLine;

/// Tag of a source record
pub const SOURCE_TAG: &str = "SOUR";

/// A level-0 record with its facts in storage order
///
/// Source records are records tagged `SOUR`; the citation formatter only reads
/// their `AUTH`, `TITL` and `PUBL` facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifier without `@` delimiters
    pub xref: String,

    /// Record type (`INDI`, `FAM`, `SOUR`, `NOTE`...)
    pub tag: String,

    /// Value on the header line, if any (shared notes carry text here)
    pub value: Option<String>,

    /// Level-1 facts in storage order
    pub facts: Vec<RawFact>,
}

impl Record {
    /// Create an empty record
    pub fn new(xref: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            xref: xref.into(),
            tag: tag.into(),
            value: None,
            facts: Vec::new(),
        }
    }

    /// Append a fact, keeping storage order
    pub fn with_fact(mut self, fact: RawFact) -> Self {
        self.facts.push(fact);
        self
    }

    /// Whether this is a source record
    pub fn is_source(&self) -> bool {
        self.tag == SOURCE_TAG
    }

    /// Facts with the given tag, in storage order
    pub fn facts_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a RawFact> + 'a {
        self.facts.iter().filter(move |f| f.tag == tag)
    }

    /// First fact with the given tag
    pub fn first_fact(&self, tag: &str) -> Option<&RawFact> {
        self.facts.iter().find(|f| f.tag == tag)
    }

    /// Parse a single record block (header line followed by its facts)
    ///
    /// Returns `None` if the block does not start with a `0 @xref@ TAG` line.
    pub fn from_gedcom(text: &str) -> Option<Self> {
        let mut records = split_records(text);
        if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        }
    }

    /// Serialize the record back to its block form
    pub fn to_gedcom(&self) -> String {
        let header = GedcomLine {
            level: 0,
            xref: Some(self.xref.clone()),
            tag: self.tag.clone(),
            value: self.value.clone(),
        };

        let mut out = header.to_string();
        for fact in &self.facts {
            out.push('\n');
            out.push_str(&fact.raw_text);
        }
        out
    }
}

/// Split a whole file into records
///
/// Each `0 @xref@ TAG` line opens a record and each level-1 line opens a fact
/// holding every deeper line until the next line at level 1 or 0. Level-0
/// lines without xref (`HEAD`, `TRLR`) and everything under them are skipped,
/// as are blank and malformed lines.
pub fn split_records(text: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;
    let mut fact_lines: Vec<&str> = Vec::new();

    for raw in text.lines() {
        let Some(line) = GedcomLine::parse(raw) else {
            continue;
        };

        if line.level <= 1 {
            flush_fact(&mut current, &mut fact_lines);
        }

        match line.level {
            0 => {
                if let Some(record) = current.take() {
                    records.push(record);
                }
                if let Some(xref) = line.xref {
                    current = Some(Record {
                        xref,
                        tag: line.tag,
                        value: line.value,
                        facts: Vec::new(),
                    });
                }
            }
            1 => {
                if current.is_some() {
                    fact_lines.push(raw.strip_suffix('\r').unwrap_or(raw));
                }
            }
            _ => {
                // Nested lines only belong to an open fact
                if !fact_lines.is_empty() {
                    fact_lines.push(raw.strip_suffix('\r').unwrap_or(raw));
                }
            }
        }
    }

    flush_fact(&mut current, &mut fact_lines);
    if let Some(record) = current {
        records.push(record);
    }

    records
}

fn flush_fact(current: &mut Option<Record>, fact_lines: &mut Vec<&str>) {
    if fact_lines.is_empty() {
        return;
    }
    if let Some(record) = current.as_mut() {
        if let Some(fact) = RawFact::from_block(fact_lines.join("\n")) {
            record.facts.push(fact);
        }
    }
    fact_lines.clear();
}
