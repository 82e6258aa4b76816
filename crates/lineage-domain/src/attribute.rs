//! Leveled attribute extraction
//!
//! Pulls the value of one `<level> <TAG>` line out of a raw block and joins the
//! `CONT` lines that directly follow it. Absence is `None`, never an error.

use crate::gedcom::{self, GedcomLine};

/// Extract the value of the first `tag` line at `level` in `raw_text`
///
/// `tag` may be an alternation of literal tags separated by `|`
/// (`"AUTH|TITL"`). Matching is case-sensitive. Every `level + 1 CONT` line
/// directly after the match appends a newline and its value; the run stops at
/// the first line that is not such a continuation.
///
/// # Examples
///
/// ```
/// use lineage_domain::extract;
///
/// let raw = "1 NOTE Hello\n2 CONT World\n2 CONT !";
/// assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("Hello\nWorld\n!"));
/// assert_eq!(extract("1 DATE 1900", "PLAC", 1), None);
/// ```
pub fn extract(raw_text: &str, tag: &str, level: u32) -> Option<String> {
    let wanted: Vec<&str> = tag.split('|').filter(|t| !t.is_empty()).collect();
    if wanted.is_empty() {
        return None;
    }

    let mut lines = gedcom::lines(raw_text);
    while let Some(line) = lines.next() {
        let Some(line) = line else { continue };
        if !matches(&line, &wanted, level) {
            continue;
        }

        let mut value = line.value.unwrap_or_default();
        for next in lines.by_ref() {
            match next {
                Some(cont) if cont.continues(level) => {
                    value.push('\n');
                    if let Some(more) = cont.value {
                        value.push_str(&more);
                    }
                }
                _ => break,
            }
        }
        return Some(value);
    }

    None
}

fn matches(line: &GedcomLine, wanted: &[&str], level: u32) -> bool {
    line.level == level && wanted.contains(&line.tag.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuation_joining() {
        let raw = "1 NOTE Hello\n2 CONT World\n2 CONT !";
        assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("Hello\nWorld\n!"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract("1 DATE 1900", "PLAC", 1), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(extract("1 BIRT\n2 DATE 1900", "BIRT", 1).as_deref(), Some(""));
    }

    #[test]
    fn test_level_must_match() {
        let raw = "1 BIRT\n2 DATE 1 JAN 1900\n2 PLAC Leeds";
        assert_eq!(extract(raw, "DATE", 1), None);
        assert_eq!(extract(raw, "DATE", 2).as_deref(), Some("1 JAN 1900"));
    }

    #[test]
    fn test_level_zero() {
        let raw = "0 NOTE top\n1 CONT second";
        assert_eq!(extract(raw, "NOTE", 0).as_deref(), Some("top\nsecond"));
    }

    #[test]
    fn test_alternation() {
        let raw = "1 SOUR @S1@\n2 TITL Registers";
        assert_eq!(extract(raw, "AUTH|TITL", 2).as_deref(), Some("Registers"));
        assert_eq!(extract(raw, "AUTH|PUBL", 2), None);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(extract("1 NOTE x", "note", 1), None);
    }

    #[test]
    fn test_tag_prefix_does_not_match() {
        assert_eq!(extract("1 NOTES x", "NOTE", 1), None);
    }

    #[test]
    fn test_empty_cont_line_adds_newline() {
        let raw = "1 NOTE first\n2 CONT\n2 CONT third";
        assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("first\n\nthird"));
    }

    #[test]
    fn test_continuation_stops_at_other_line() {
        let raw = "1 NOTE a\n2 CONT b\n2 SOUR @S1@\n2 CONT c";
        assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_continuation_requires_next_level() {
        let raw = "1 NOTE a\n3 CONT b";
        assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("a"));
    }

    #[test]
    fn test_first_match_wins() {
        let raw = "1 NOTE first\n1 NOTE second";
        assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("first"));
    }

    #[test]
    fn test_conc_is_not_a_continuation() {
        let raw = "1 NOTE a\n2 CONC b";
        assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("a"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let raw = "garbage\n\n1 NOTE kept";
        assert_eq!(extract(raw, "NOTE", 1).as_deref(), Some("kept"));
    }
}
