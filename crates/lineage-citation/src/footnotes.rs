//! Footnote numbering and deduplication

use crate::formatter::CitationFormatter;
use lineage_domain::{RawFact, SourceLookup};
use serde::Serialize;
use tracing::trace;

/// Index reserved for "no footnote"
pub const SENTINEL: usize = 0;

/// One numbered footnote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FootnoteEntry {
    /// 1-based position in the registry
    pub index: usize,

    /// Formatted citation text
    pub text: String,
}

/// Append-only list of distinct citation strings
///
/// Index 0 is the sentinel and is never handed out; real entries start at 1.
/// Two citations that format to the same string share one entry. Indices are
/// stable for the lifetime of the registry.
///
/// # Examples
///
/// ```
/// use lineage_citation::FootnoteRegistry;
///
/// let mut registry = FootnoteRegistry::new();
/// assert_eq!(registry.intern("X"), 1);
/// assert_eq!(registry.intern("Y"), 2);
/// assert_eq!(registry.intern("X"), 1);
/// assert!(registry.has_entries());
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct FootnoteRegistry {
    entries: Vec<String>,
}

impl FootnoteRegistry {
    /// Create a registry holding only the sentinel
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `text`, appending it if it is new
    pub fn intern(&mut self, text: impl Into<String>) -> usize {
        let text = text.into();
        if let Some(pos) = self.entries.iter().position(|e| *e == text) {
            return pos + 1;
        }

        self.entries.push(text);
        let index = self.entries.len();
        trace!(index, "footnote added");
        index
    }

    /// Whether anything beyond the sentinel has been interned
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of real entries (the sentinel is not counted)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds only the sentinel
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text of the entry at `index`; `None` for the sentinel or out of range
    pub fn get(&self, index: usize) -> Option<&str> {
        if index == SENTINEL {
            return None;
        }
        self.entries.get(index - 1).map(String::as_str)
    }

    /// Real entries in index order
    pub fn entries(&self) -> impl Iterator<Item = FootnoteEntry> + '_ {
        self.entries.iter().enumerate().map(|(pos, text)| FootnoteEntry {
            index: pos + 1,
            text: text.clone(),
        })
    }
}

/// A formatter and a registry working together for one report run
///
/// Empty citation strings (broken or unresolvable citations) are not
/// interned, so they never produce a blank numbered footnote.
#[derive(Debug, Clone, Default)]
pub struct Footnotes {
    formatter: CitationFormatter,
    registry: FootnoteRegistry,
}

impl Footnotes {
    /// Create an empty footnote list using `formatter`
    pub fn new(formatter: CitationFormatter) -> Self {
        Self {
            formatter,
            registry: FootnoteRegistry::new(),
        }
    }

    /// Format one citation at `level` and intern it
    pub fn cite<L>(&mut self, citation: &str, lookup: &L, level: u32) -> Option<usize>
    where
        L: SourceLookup + ?Sized,
    {
        let text = self.formatter.format_at(citation, lookup, level);
        if text.is_empty() {
            None
        } else {
            Some(self.registry.intern(text))
        }
    }

    /// Intern every citation attached to `fact`
    ///
    /// A `SOUR` fact is itself a citation at its own level; any other fact
    /// contributes its `SOUR` sub-blocks one level down. Indices come back in
    /// citation order and may repeat.
    pub fn cite_fact<L>(&mut self, fact: &RawFact, lookup: &L) -> Vec<usize>
    where
        L: SourceLookup + ?Sized,
    {
        if fact.is_citation() {
            return self.cite(&fact.raw_text, lookup, fact.level).into_iter().collect();
        }

        let Some(level) = fact.level.checked_add(1) else {
            return Vec::new();
        };
        fact.citations()
            .iter()
            .filter_map(|citation| self.cite(citation, lookup, level))
            .collect()
    }

    /// The registry built so far
    pub fn registry(&self) -> &FootnoteRegistry {
        &self.registry
    }

    /// Consume the list and keep only the registry
    pub fn into_registry(self) -> FootnoteRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_stability() {
        let mut registry = FootnoteRegistry::new();
        let first = registry.intern("A, Title (P): 12");
        let second = registry.intern("A, Title (P): 12");
        assert_eq!(first, second);

        let other = registry.intern("B, Other");
        assert!(other > first);
        assert_ne!(first, SENTINEL);
        assert_ne!(other, SENTINEL);
    }

    #[test]
    fn test_order_independence_of_dedup() {
        let mut registry = FootnoteRegistry::new();
        let indices: Vec<usize> = ["X", "Y", "X"].iter().map(|s| registry.intern(*s)).collect();
        assert_eq!(indices, vec![1, 2, 1]);
    }

    #[test]
    fn test_new_registry_has_only_sentinel() {
        let registry = FootnoteRegistry::new();
        assert!(!registry.has_entries());
        assert!(registry.is_empty());
        assert_eq!(registry.get(SENTINEL), None);
    }

    #[test]
    fn test_empty_string_is_a_valid_entry() {
        let mut registry = FootnoteRegistry::new();
        assert_eq!(registry.intern(""), 1);
        assert!(registry.has_entries());
        assert_eq!(registry.get(1), Some(""));
    }

    #[test]
    fn test_get_and_entries() {
        let mut registry = FootnoteRegistry::new();
        registry.intern("first");
        registry.intern("second");

        assert_eq!(registry.get(2), Some("second"));
        assert_eq!(registry.get(3), None);

        let entries: Vec<FootnoteEntry> = registry.entries().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], FootnoteEntry { index: 1, text: "first".into() });
        assert_eq!(entries[1].index, 2);
    }

    #[test]
    fn test_exact_equality_only() {
        let mut registry = FootnoteRegistry::new();
        assert_eq!(registry.intern("Smith"), 1);
        assert_eq!(registry.intern("smith"), 2);
        assert_eq!(registry.intern("Smith "), 3);
    }
}
