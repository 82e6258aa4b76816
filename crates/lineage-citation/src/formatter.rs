//! Format a fact's citation into a short bibliographic string

use crate::config::{CitationConfig, PagePlacement};
use lineage_domain::gedcom::{self, GedcomLine};
use lineage_domain::{extract, SourceLookup};
use tracing::debug;

const CHAN: &str = "CHAN";
const AUTH: &str = "AUTH";
const TITL: &str = "TITL";
const PUBL: &str = "PUBL";

/// Turns citation sub-blocks into `Author, Title (Publisher): page text`
///
/// A citation that points nowhere, or at a record the lookup cannot find,
/// formats to the empty string. Citations are best-effort annotations.
///
/// # Examples
///
/// ```
/// use lineage_citation::{CitationConfig, CitationFormatter};
/// use lineage_domain::{RawFact, Record};
///
/// let source = Record::new("S1", "SOUR")
///     .with_fact(RawFact::new("AUTH", "1 AUTH Smith, J.", 1))
///     .with_fact(RawFact::new("TITL", "1 TITL Parish Records", 1));
/// let lookup = move |xref: &str| (xref == "S1").then(|| source.clone());
///
/// let formatter = CitationFormatter::new(CitationConfig::plain());
/// let text = formatter.format("1 SOUR @S1@\n2 PAGE 45", &lookup);
/// assert_eq!(text, "Smith, J., Parish Records: 45");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CitationFormatter {
    config: CitationConfig,
}

impl CitationFormatter {
    /// Create a formatter with the given configuration
    pub fn new(config: CitationConfig) -> Self {
        Self { config }
    }

    /// Get the formatter configuration
    pub fn config(&self) -> &CitationConfig {
        &self.config
    }

    /// Format a citation whose `SOUR` line sits at level 1
    pub fn format<L>(&self, citation: &str, lookup: &L) -> String
    where
        L: SourceLookup + ?Sized,
    {
        self.format_at(citation, lookup, 1)
    }

    /// Format a citation whose `SOUR` line sits at `level`
    ///
    /// `PAGE` is read at `level + 1` and `TEXT` at `level + 2`.
    pub fn format_at<L>(&self, citation: &str, lookup: &L, level: u32) -> String
    where
        L: SourceLookup + ?Sized,
    {
        let Some(xref) = source_pointer(citation, level) else {
            debug!(level, "citation has no source pointer");
            return String::new();
        };

        let Some(source) = lookup.lookup_source(&xref) else {
            debug!(%xref, "citation references an unknown source");
            return String::new();
        };

        // No detail can sit below the deepest representable level
        let mut page = level
            .checked_add(1)
            .and_then(|l| extract(citation, "PAGE", l))
            .filter(|p| !p.is_empty());
        let mut text = level
            .checked_add(2)
            .and_then(|l| extract(citation, "TEXT", l))
            .filter(|t| !t.is_empty());
        let mut out = String::new();

        for fact in source.facts.iter().filter(|f| f.tag != CHAN) {
            let value = fact.value().unwrap_or_default();
            let contributed = match fact.tag.as_str() {
                AUTH => {
                    out.push_str(&value);
                    out.push_str(", ");
                    true
                }
                TITL => {
                    out.push_str(&self.config.title_open);
                    out.push_str(&value);
                    out.push_str(&self.config.title_close);
                    true
                }
                PUBL => {
                    out.push_str(" (");
                    out.push_str(&value);
                    out.push(')');
                    true
                }
                _ => false,
            };

            if contributed && self.config.page_placement == PagePlacement::AfterFirstFact {
                append_detail(&mut out, &mut page, &mut text);
            }
        }

        // Trailing placement, or no recognized fact to attach to
        append_detail(&mut out, &mut page, &mut text);
        out
    }
}

/// Identifier of the first `level SOUR @xref@` line of a citation
pub fn source_pointer(citation: &str, level: u32) -> Option<String> {
    gedcom::lines(citation)
        .flatten()
        .find(|line: &GedcomLine| line.level == level && line.tag == "SOUR" && line.pointer().is_some())
        .and_then(|line| line.pointer().map(str::to_string))
}

/// Emit page and text once each; later calls are no-ops
fn append_detail(out: &mut String, page: &mut Option<String>, text: &mut Option<String>) {
    if let Some(page) = page.take() {
        out.push_str(": ");
        out.push_str(&page);
    }
    if let Some(text) = text.take() {
        out.push(' ');
        out.push_str(&text);
    }
}
