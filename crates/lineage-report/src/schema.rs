//! Report input schema
//!
//! A report declares its parameters once during setup. At submission time
//! the schema turns a flat map of submitted strings into validated values.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Kind of form control an input is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Free text
    Text,
    /// Boolean; only presence of the submitted value counts
    Checkbox,
    /// One key out of a fixed option list
    Select,
}

impl InputKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Checkbox => "checkbox",
            InputKind::Select => "select",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picker hint attached to an input
///
/// Never interpreted by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lookup {
    /// Individual identifier
    Individual,
    /// Family identifier
    Family,
    /// Source identifier
    Source,
    /// Place name
    Place,
    /// Date
    Date,
}

impl Lookup {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Lookup::Individual => "individual",
            Lookup::Family => "family",
            Lookup::Source => "source",
            Lookup::Place => "place",
            Lookup::Date => "date",
        }
    }
}

/// Named input groups shared by several reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// `page_size` select: letter, A3, A4, legal (default A4)
    PageSize,
    /// `font` select: Unicode Arial, DejaVu, Helvetica (default DejaVu)
    Font,
    /// `use_colors` checkbox, enabled by default
    UseColors,
}

impl Preset {
    /// Name of the input the preset declares
    pub fn name(&self) -> &'static str {
        match self {
            Preset::PageSize => "page_size",
            Preset::Font => "font",
            Preset::UseColors => "use_colors",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page_size" => Ok(Preset::PageSize),
            "font" => Ok(Preset::Font),
            "use_colors" => Ok(Preset::UseColors),
            _ => Err(format!("Unknown preset: {}", s)),
        }
    }
}

/// One configurable report parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSpec {
    /// Unique key, also the submitted field name
    pub name: String,

    /// Control kind
    pub kind: InputKind,

    /// Human-readable label
    pub label: String,

    /// Picker hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<Lookup>,

    /// Value used when nothing valid is submitted
    pub default: String,

    /// Ordered `(key, label)` pairs, only meaningful for selects
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<(String, String)>,
}

impl InputSpec {
    /// Whether `key` is one of the select options
    pub fn has_option(&self, key: &str) -> bool {
        self.options.iter().any(|(k, _)| k == key)
    }

    /// Validated value for one submitted field
    fn resolve(&self, submitted: Option<&str>) -> String {
        match self.kind {
            InputKind::Checkbox => {
                let checked = if submitted.is_some() { "1" } else { "0" };
                checked.to_string()
            }
            InputKind::Select => match submitted {
                Some(value) if self.has_option(value) => value.to_string(),
                Some(value) => {
                    debug!(input = %self.name, value, "rejected select value, using default");
                    self.default.clone()
                }
                None => self.default.clone(),
            },
            InputKind::Text => submitted
                .map(str::to_string)
                .unwrap_or_else(|| self.default.clone()),
        }
    }
}

/// Ordered collection of [`InputSpec`]s
///
/// # Examples
///
/// ```
/// use lineage_report::{InputKind, InputSchema, Preset};
/// use std::collections::HashMap;
///
/// let mut schema = InputSchema::new();
/// schema.add_input("sources", InputKind::Checkbox, "Show sources?", None, "1");
/// schema.add_preset(Preset::PageSize);
///
/// let submitted = HashMap::from([("page_size".to_string(), "Z9".to_string())]);
/// let inputs = schema.resolve(&submitted);
/// assert_eq!(inputs.get("page_size"), "A4");
/// assert_eq!(inputs.get("sources"), "0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InputSchema {
    specs: Vec<InputSpec>,
}

impl InputSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input; re-declaring a name replaces it in place
    pub fn add_input(
        &mut self,
        name: impl Into<String>,
        kind: InputKind,
        label: impl Into<String>,
        lookup: Option<Lookup>,
        default: impl Into<String>,
    ) -> &mut Self {
        let spec = InputSpec {
            name: name.into(),
            kind,
            label: label.into(),
            lookup,
            default: default.into(),
            options: Vec::new(),
        };

        match self.specs.iter_mut().find(|s| s.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.specs.push(spec),
        }
        self
    }

    /// Append an option to a declared input; unknown names are ignored
    pub fn add_option(
        &mut self,
        name: &str,
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Self {
        match self.specs.iter_mut().find(|s| s.name == name) {
            Some(spec) => spec.options.push((key.into(), label.into())),
            None => debug!(input = name, "option for undeclared input ignored"),
        }
        self
    }

    /// Declare one of the shared input groups
    pub fn add_preset(&mut self, preset: Preset) -> &mut Self {
        let name = preset.name();
        match preset {
            Preset::PageSize => {
                self.add_input(name, InputKind::Select, "Page size", None, "A4")
                    .add_option(name, "letter", "Letter")
                    .add_option(name, "A3", "A3")
                    .add_option(name, "A4", "A4")
                    .add_option(name, "legal", "Legal")
            }
            Preset::Font => {
                self.add_input(name, InputKind::Select, "Font", None, "dejavusans")
                    .add_option(name, "arialunicid0", "Arial")
                    .add_option(name, "dejavusans", "DejaVu")
                    .add_option(name, "helvetica", "Helvetica")
            }
            Preset::UseColors => {
                self.add_input(name, InputKind::Checkbox, "Use colors", None, "1")
            }
        }
    }

    /// Look up a declared input
    pub fn get(&self, name: &str) -> Option<&InputSpec> {
        self.specs.iter().find(|s| s.name == name)
    }

    /// Declared inputs in declaration order
    pub fn specs(&self) -> &[InputSpec] {
        &self.specs
    }

    /// Number of declared inputs
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no input is declared
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Values a freshly rendered form would submit untouched
    ///
    /// Checkboxes whose default is on are present with value `"1"`, checkboxes
    /// whose default is off are left out, every other input carries its
    /// default.
    pub fn form_defaults(&self) -> HashMap<String, String> {
        self.specs
            .iter()
            .filter(|s| s.kind != InputKind::Checkbox || is_truthy(&s.default))
            .map(|s| (s.name.clone(), s.default.clone()))
            .collect()
    }

    /// Validate a submission against every declared input
    ///
    /// Submitted names that are not declared are ignored.
    pub fn resolve(&self, submitted: &HashMap<String, String>) -> ResolvedInputs {
        let values = self
            .specs
            .iter()
            .map(|spec| {
                let value = spec.resolve(submitted.get(&spec.name).map(String::as_str));
                (spec.name.clone(), value)
            })
            .collect();
        ResolvedInputs { values }
    }
}

/// Validated input values, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedInputs {
    values: Vec<(String, String)>,
}

impl ResolvedInputs {
    /// Value of `name`, or `"0"` when no such input was declared
    pub fn get(&self, name: &str) -> &str {
        self.try_get(name).unwrap_or("0")
    }

    /// Value of `name`, `None` when no such input was declared
    pub fn try_get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Boolean reading of `name`: non-empty and not `"0"`
    pub fn flag(&self, name: &str) -> bool {
        is_truthy(self.get(name))
    }

    /// `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for ResolvedInputs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}
