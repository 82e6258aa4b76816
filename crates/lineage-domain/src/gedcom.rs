//! Line tokenizer for the hierarchical record format
//!
//! Every line has the shape `<level> [@xref@ ]<TAG>[ <value>]`. The tokenizer
//! only splits lines into their parts; it does not validate tags against any
//! grammar.

use std::fmt;

/// Tag of a continuation line
pub const CONT: &str = "CONT";

/// One tokenized line of a hierarchical text block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomLine {
    /// Nesting depth (0 for record headers)
    pub level: u32,

    /// Record identifier without `@` delimiters (record headers only)
    pub xref: Option<String>,

    /// Tag, alphanumeric or underscore
    pub tag: String,

    /// Remainder of the line after the tag and one space
    ///
    /// `None` when the line ends right after the tag.
    pub value: Option<String>,
}

impl GedcomLine {
    /// Create a line without xref
    pub fn new(level: u32, tag: impl Into<String>, value: Option<String>) -> Self {
        Self {
            level,
            xref: None,
            tag: tag.into(),
            value,
        }
    }

    /// Tokenize a single line
    ///
    /// Returns `None` for blank or malformed lines. Only the first space after
    /// the tag is a separator: `"1 NOTE  x"` has the value `" x"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineage_domain::GedcomLine;
    ///
    /// let line = GedcomLine::parse("2 PAGE 45").unwrap();
    /// assert_eq!(line.level, 2);
    /// assert_eq!(line.tag, "PAGE");
    /// assert_eq!(line.value.as_deref(), Some("45"));
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        let (level_str, rest) = line.split_once(' ')?;
        if level_str.is_empty() || !level_str.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let level: u32 = level_str.parse().ok()?;

        // Optional @xref@ between level and tag
        let (xref, rest) = if rest.starts_with('@') {
            let (token, after) = rest.split_once(' ')?;
            (Some(strip_pointer(token)?.to_string()), after)
        } else {
            (None, rest)
        };

        let (tag, value) = match rest.split_once(' ') {
            Some((tag, value)) => (tag, Some(value.to_string())),
            None => (rest, None),
        };
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }

        Some(Self {
            level,
            xref,
            tag: tag.to_string(),
            value,
        })
    }

    /// Identifier referenced by the value, if the value is an `@xref@` pointer
    pub fn pointer(&self) -> Option<&str> {
        self.value.as_deref().and_then(strip_pointer)
    }

    /// Whether this line continues the attribute opened at `level`
    pub fn continues(&self, level: u32) -> bool {
        self.xref.is_none() && self.tag == CONT && Some(self.level) == level.checked_add(1)
    }
}

impl fmt::Display for GedcomLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(xref) = &self.xref {
            write!(f, " @{}@", xref)?;
        }
        write!(f, " {}", self.tag)?;
        if let Some(value) = &self.value {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// Tokenize every line of a block, keeping malformed lines as `None`
pub fn lines(text: &str) -> impl Iterator<Item = Option<GedcomLine>> + '_ {
    text.lines().map(GedcomLine::parse)
}

/// Strip the `@` delimiters from a pointer token
fn strip_pointer(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('@')?.strip_suffix('@')?;
    if inner.is_empty() || inner.contains('@') {
        None
    } else {
        Some(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_value() {
        let line = GedcomLine::parse("1 NOTE Hello world").unwrap();
        assert_eq!(line.level, 1);
        assert_eq!(line.xref, None);
        assert_eq!(line.tag, "NOTE");
        assert_eq!(line.value.as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_parse_line_without_value() {
        let line = GedcomLine::parse("2 CONT").unwrap();
        assert_eq!(line.tag, "CONT");
        assert_eq!(line.value, None);
    }

    #[test]
    fn test_parse_keeps_extra_spaces_in_value() {
        let line = GedcomLine::parse("1 NOTE  indented").unwrap();
        assert_eq!(line.value.as_deref(), Some(" indented"));
    }

    #[test]
    fn test_parse_record_header() {
        let line = GedcomLine::parse("0 @S1@ SOUR").unwrap();
        assert_eq!(line.level, 0);
        assert_eq!(line.xref.as_deref(), Some("S1"));
        assert_eq!(line.tag, "SOUR");
        assert_eq!(line.value, None);
    }

    #[test]
    fn test_parse_crlf() {
        let line = GedcomLine::parse("1 TITL Parish\r").unwrap();
        assert_eq!(line.value.as_deref(), Some("Parish"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(GedcomLine::parse("").is_none());
        assert!(GedcomLine::parse("NOTE hello").is_none());
        assert!(GedcomLine::parse("x1 NOTE").is_none());
        assert!(GedcomLine::parse("1 NO-TE x").is_none());
        assert!(GedcomLine::parse("1").is_none());
        assert!(GedcomLine::parse("0 @S1 SOUR").is_none());
    }

    #[test]
    fn test_pointer() {
        let line = GedcomLine::parse("1 SOUR @S12@").unwrap();
        assert_eq!(line.pointer(), Some("S12"));

        let line = GedcomLine::parse("1 SOUR inline source text").unwrap();
        assert_eq!(line.pointer(), None);
    }

    #[test]
    fn test_continues() {
        let cont = GedcomLine::parse("2 CONT more").unwrap();
        assert!(cont.continues(1));
        assert!(!cont.continues(0));
        assert!(!cont.continues(2));
    }

    #[test]
    fn test_display() {
        let text = "0 @I1@ INDI";
        assert_eq!(GedcomLine::parse(text).unwrap().to_string(), text);

        let text = "2 PAGE vol. 3, p. 45";
        assert_eq!(GedcomLine::parse(text).unwrap().to_string(), text);
    }
}
