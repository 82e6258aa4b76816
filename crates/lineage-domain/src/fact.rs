//! Fact module - one event or attribute block of a record

use crate::attribute::extract;
use crate::gedcom::{self, GedcomLine};

/// Tag of a citation line
pub const SOUR: &str = "SOUR";

/// An opaque block of hierarchical lines belonging to one fact
///
/// The first line of `raw_text` is the fact line itself (normally at level 1);
/// every following line is nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFact {
    /// Tag of the fact line (`BIRT`, `NOTE`, `SOUR`...)
    pub tag: String,

    /// The complete block, newline-separated
    pub raw_text: String,

    /// Nesting depth of the fact line
    pub level: u32,
}

impl RawFact {
    /// Create a fact from its parts
    pub fn new(tag: impl Into<String>, raw_text: impl Into<String>, level: u32) -> Self {
        Self {
            tag: tag.into(),
            raw_text: raw_text.into(),
            level,
        }
    }

    /// Build a fact from a block whose first line is the fact line
    ///
    /// Returns `None` if the first line cannot be tokenized.
    pub fn from_block(raw_text: impl Into<String>) -> Option<Self> {
        let raw_text = raw_text.into();
        let head = GedcomLine::parse(raw_text.lines().next()?)?;
        Some(Self {
            tag: head.tag,
            raw_text,
            level: head.level,
        })
    }

    /// Value of the fact line, joined with its continuation lines
    pub fn value(&self) -> Option<String> {
        extract(&self.raw_text, &self.tag, self.level)
    }

    /// Value of a direct child attribute (`DATE`, `PLAC`...)
    pub fn attribute(&self, tag: &str) -> Option<String> {
        extract(&self.raw_text, tag, self.level.checked_add(1)?)
    }

    /// Whether the fact is itself a citation (`1 SOUR @S1@`)
    pub fn is_citation(&self) -> bool {
        self.tag == SOUR
    }

    /// Citation sub-blocks attached directly to this fact
    ///
    /// Each returned block starts with a `SOUR` line at `level + 1` and holds
    /// every deeper line below it, in order of appearance.
    pub fn citations(&self) -> Vec<String> {
        let Some(child_level) = self.level.checked_add(1) else {
            return Vec::new();
        };
        let mut citations = Vec::new();
        let mut current: Option<Vec<&str>> = None;

        for text in self.raw_text.lines().skip(1) {
            let line = GedcomLine::parse(text);
            let depth = line.as_ref().map(|l| l.level);

            match depth {
                Some(level) if level <= child_level => {
                    if let Some(block) = current.take() {
                        citations.push(block.join("\n"));
                    }
                    if level == child_level && line.is_some_and(|l| l.tag == SOUR) {
                        current = Some(vec![text]);
                    }
                }
                _ => {
                    if let Some(block) = current.as_mut() {
                        block.push(text);
                    }
                }
            }
        }

        if let Some(block) = current {
            citations.push(block.join("\n"));
        }

        citations
    }

    /// Tokenized lines of the block, malformed lines skipped
    pub fn lines(&self) -> Vec<GedcomLine> {
        gedcom::lines(&self.raw_text).flatten().collect()
    }
}
