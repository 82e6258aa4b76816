//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use lineage_citation::FootnoteEntry;
use lineage_layout::{BoxKind, PageGeometry, PageSize};
use lineage_report::{InputSchema, ReportBody, ReportData, ReportDefinition};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Footnote indices of one fact, as listed by the footnotes command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactFootnotes {
    /// Fact tag
    pub tag: String,

    /// Footnote indices in citation order
    pub footnotes: Vec<usize>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the paper size table.
    pub fn format_sizes(&self, sizes: &[(&str, PageSize)]) -> Result<String> {
        if self.format == OutputFormat::Json {
            let json: Vec<serde_json::Value> = sizes
                .iter()
                .map(|(name, size)| {
                    serde_json::json!({
                        "name": name,
                        "width_pt": size.width_pt,
                        "height_pt": size.height_pt,
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&json)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Width (pt)", "Height (pt)"]);
        for (name, size) in sizes {
            builder.push_record([
                name.to_string(),
                format!("{:.2}", size.width_pt),
                format!("{:.2}", size.height_pt),
            ]);
        }
        Ok(self.finish(builder))
    }

    /// Format page geometry.
    pub fn format_geometry(&self, geometry: &PageGeometry) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(geometry)?);
        }

        let page = geometry.page();
        let mut builder = Builder::default();
        builder.push_record(["Box", "Style"]);
        for kind in BoxKind::ALL {
            builder.push_record([kind.as_str().to_string(), geometry.style(kind)]);
        }

        let summary = format!(
            "Page {:.2} x {:.2} pt, content width {} pt",
            page.width_pt,
            page.height_pt,
            geometry.content_width()
        );
        Ok(format!("{}\n{}", self.info(&summary), self.finish(builder)))
    }

    /// Format the inputs a report declares.
    pub fn format_inputs(
        &self,
        definition: &dyn ReportDefinition,
        schema: &InputSchema,
    ) -> Result<String> {
        if self.format == OutputFormat::Json {
            let json = serde_json::json!({
                "name": definition.name(),
                "title": definition.title(),
                "description": definition.description(),
                "inputs": schema,
            });
            return Ok(serde_json::to_string_pretty(&json)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Kind", "Label", "Default", "Options"]);
        for spec in schema.specs() {
            let options: Vec<&str> = spec.options.iter().map(|(k, _)| k.as_str()).collect();
            builder.push_record([
                spec.name.clone(),
                spec.kind.to_string(),
                spec.label.clone(),
                spec.default.clone(),
                options.join(", "),
            ]);
        }

        let heading = format!("{} - {}", definition.title(), definition.description());
        Ok(format!("{}\n{}", self.info(&heading), self.finish(builder)))
    }

    /// Format per-fact footnote indices and the numbered footnote list.
    pub fn format_footnotes(
        &self,
        xref: &str,
        facts: &[FactFootnotes],
        footnotes: &[FootnoteEntry],
    ) -> Result<String> {
        if self.format == OutputFormat::Json {
            let json = serde_json::json!({
                "xref": xref,
                "facts": facts,
                "footnotes": footnotes,
            });
            return Ok(serde_json::to_string_pretty(&json)?);
        }

        if footnotes.is_empty() {
            return Ok(self.warning(&format!("No citations found for {}", xref)));
        }

        let mut builder = Builder::default();
        builder.push_record(["Fact", "Footnotes"]);
        for fact in facts.iter().filter(|f| !f.footnotes.is_empty()) {
            builder.push_record([fact.tag.clone(), join_indices(&fact.footnotes)]);
        }

        Ok(format!(
            "{}\n{}",
            self.finish(builder),
            self.footnote_table(footnotes)
        ))
    }

    /// Format collected report data.
    pub fn format_report(&self, data: &ReportData) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(data.to_json()?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Who", "Fact", "Date", "Place", "Footnotes"]);
        match &data.body {
            ReportBody::Individual(person) => {
                let who = person.name.clone().unwrap_or_else(|| person.xref.clone());
                for row in &person.facts.rows {
                    push_row(&mut builder, &who, row);
                }
            }
            ReportBody::Family(family) => {
                for row in &family.facts.rows {
                    push_row(&mut builder, &family.xref, row);
                }
                for member in &family.members {
                    let who = member.name.clone().unwrap_or_else(|| member.xref.clone());
                    for row in member.basic_events.iter().chain(&member.facts.rows) {
                        push_row(&mut builder, &who, row);
                    }
                }
            }
        }

        let mut out = format!("{}\n{}", self.info(&data.context.title), self.finish(builder));
        if !data.footnotes.is_empty() {
            out.push('\n');
            out.push_str(&self.footnote_table(&data.footnotes));
        }
        Ok(out)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn footnote_table(&self, footnotes: &[FootnoteEntry]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Citation"]);
        for entry in footnotes {
            builder.push_record([entry.index.to_string(), entry.text.clone()]);
        }
        self.finish(builder)
    }

    fn finish(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn push_row(builder: &mut Builder, who: &str, row: &lineage_report::FactRow) {
    builder.push_record([
        who.to_string(),
        row.tag.clone(),
        row.date.clone().unwrap_or_default(),
        row.place.clone().unwrap_or_default(),
        join_indices(&row.footnotes),
    ]);
}

fn join_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_report::{IndividualReport, ReportBuilder};

    fn entries() -> Vec<FootnoteEntry> {
        vec![
            FootnoteEntry {
                index: 1,
                text: "Parish Records: 45".to_string(),
            },
            FootnoteEntry {
                index: 2,
                text: "Census 1881".to_string(),
            },
        ]
    }

    #[test]
    fn test_sizes_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_sizes(&[("A4", PageSize::A4), ("LETTER", PageSize::new(612.0, 792.0))])
            .unwrap();
        assert!(output.contains("595.28"));
        assert!(output.contains("LETTER"));
    }

    #[test]
    fn test_sizes_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_sizes(&[("A4", PageSize::A4)]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["name"], "A4");
        assert_eq!(json[0]["height_pt"], 841.89);
    }

    #[test]
    fn test_geometry_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let geometry = PageGeometry::builder().build().unwrap();
        let output = formatter.format_geometry(&geometry).unwrap();
        assert!(output.contains("content width 516 pt"));
        assert!(output.contains("position:relative;top:35pt;height:28pt;width:516pt;"));
    }

    #[test]
    fn test_inputs_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let mut schema = InputSchema::new();
        IndividualReport.setup(&mut schema);

        let output = formatter.format_inputs(&IndividualReport, &schema).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["name"], "individual_report");
        assert_eq!(json["inputs"][0]["name"], "pid");
        assert_eq!(json["inputs"][0]["lookup"], "individual");
        assert_eq!(json["inputs"][3]["options"][0][0], "none");
    }

    #[test]
    fn test_footnotes_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let facts = vec![
            FactFootnotes {
                tag: "BIRT".to_string(),
                footnotes: vec![1, 2],
            },
            FactFootnotes {
                tag: "SEX".to_string(),
                footnotes: vec![],
            },
        ];

        let output = formatter.format_footnotes("I1", &facts, &entries()).unwrap();
        assert!(output.contains("1, 2"));
        assert!(output.contains("Census 1881"));
        assert!(!output.contains("SEX"));
    }

    #[test]
    fn test_no_footnotes_warning() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_footnotes("I1", &[], &[]).unwrap();
        assert_eq!(output, "⚠ No citations found for I1");
    }

    #[test]
    fn test_report_json_passthrough() {
        let lookup = |xref: &str| {
            (xref == "I1").then(|| lineage_domain::Record::new("I1", "INDI"))
        };
        let data = ReportBuilder::new(&IndividualReport)
            .set("pid", "I1")
            .build()
            .unwrap()
            .run(&lookup)
            .unwrap();

        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&data).unwrap();
        assert_eq!(output, data.to_json().unwrap());
    }

    #[test]
    fn test_no_color() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}
