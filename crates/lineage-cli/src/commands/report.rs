//! Report command implementation.

use crate::cli::{parse_assignment, ReportArgs};
use crate::commands::geometry::orientation;
use crate::commands::{bare_xref, open_records};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lineage_report::{
    find_report, InputKind, InputSchema, OutputMode, ReportBuilder, ReportContext, PAGE_SIZE_INPUT,
};
use std::collections::HashMap;
use std::fs;

/// Values that uncheck a checkbox on the command line
const UNCHECKED: &[&str] = &["0", "off", "false", "no"];

/// Execute the report command.
pub fn execute_report(args: ReportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let definition = find_report(&args.report)?;
    let records = open_records(&args.file, args.db.as_deref())?;

    let mut schema = InputSchema::new();
    definition.setup(&mut schema);
    let mut assignments = vec![format!("{}={}", PAGE_SIZE_INPUT, config.settings.page_size)];
    assignments.extend(args.set.iter().cloned());
    let mut submitted = submission(&schema, &assignments)?;
    if args.page.custom_size().is_none() {
        if let Some(size) = rejected_page_size(&schema, &submitted) {
            eprintln!(
                "{}",
                formatter.warning(&format!(
                    "Paper size '{}' is not offered by {}, using A4",
                    size,
                    definition.name()
                ))
            );
        }
    }

    // The subject argument fills the record input
    if let Some(subject) = schema.specs().iter().find(|s| s.lookup.is_some()) {
        submitted.insert(subject.name.clone(), bare_xref(&args.xref).to_string());
    }

    let context = ReportContext {
        title: args.title.clone().unwrap_or_default(),
        output: if args.pdf {
            OutputMode::Pdf
        } else {
            OutputMode::Html
        },
    };

    let mut builder = ReportBuilder::new(definition.as_ref())
        .submit(submitted)
        .context(context)
        .margins(config.margins)
        .orientation(orientation(&args.page))
        .citation(config.citation.clone());
    if let Some((width, height)) = args.page.custom_size() {
        builder = builder.custom_size(width, height);
    }

    let data = builder.build()?.run(records.as_ref())?;

    match &args.out {
        Some(path) => {
            fs::write(path, data.to_json()?)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "{} written to {} ({} footnotes)",
                    definition.title(),
                    path.display(),
                    data.footnotes.len()
                ))
            );
        }
        None => println!("{}", formatter.format_report(&data)?),
    }
    Ok(())
}

/// Form defaults overlaid with `name=value` assignments.
///
/// Assigning an unchecked value to a checkbox removes it from the
/// submission, since only presence counts.
pub fn submission(schema: &InputSchema, assignments: &[String]) -> Result<HashMap<String, String>> {
    let mut submitted = schema.form_defaults();

    for arg in assignments {
        let (name, value) = parse_assignment(arg)
            .ok_or_else(|| CliError::InvalidInput(format!("Expected NAME=VALUE, got '{}'", arg)))?;

        let spec = schema
            .get(name)
            .ok_or_else(|| CliError::InvalidInput(format!("Unknown input '{}'", name)))?;

        if spec.kind == InputKind::Checkbox && UNCHECKED.contains(&value.to_lowercase().as_str()) {
            submitted.remove(name);
        } else {
            submitted.insert(name.to_string(), value.to_string());
        }
    }

    Ok(submitted)
}

/// Submitted paper size the report's `page_size` select would replace
/// with its default.
///
/// Reports offer a short list of sizes (letter, A3, A4, legal) while the
/// `geometry` command accepts every known paper name.
pub fn rejected_page_size<'a>(
    schema: &InputSchema,
    submitted: &'a HashMap<String, String>,
) -> Option<&'a str> {
    let spec = schema.get(PAGE_SIZE_INPUT)?;
    let size = submitted.get(PAGE_SIZE_INPUT)?;
    (!spec.has_option(size)).then_some(size.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_report::{FamilyGroupReport, IndividualReport, ReportDefinition};

    fn schema(definition: &dyn ReportDefinition) -> InputSchema {
        let mut schema = InputSchema::new();
        definition.setup(&mut schema);
        schema
    }

    fn set(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_check_default_on_boxes() {
        let schema = schema(&IndividualReport);
        let submitted = submission(&schema, &[]).unwrap();
        let inputs = schema.resolve(&submitted);

        assert!(inputs.flag("sources"));
        assert!(inputs.flag("notes"));
        assert_eq!(inputs.get("photos"), "highlighted");
    }

    #[test]
    fn test_uncheck_and_override() {
        let schema = schema(&FamilyGroupReport);
        let submitted =
            submission(&schema, &set(&["sources=off", "blanks=1", "page_size=legal"])).unwrap();
        let inputs = schema.resolve(&submitted);

        assert!(!inputs.flag("sources"));
        assert!(inputs.flag("blanks"));
        assert!(inputs.flag("use_colors"));
        assert_eq!(inputs.get("page_size"), "legal");
    }

    #[test]
    fn test_rejected_page_size() {
        let schema = schema(&IndividualReport);

        let submitted = submission(&schema, &set(&["page_size=B5"])).unwrap();
        assert_eq!(rejected_page_size(&schema, &submitted), Some("B5"));
        assert_eq!(schema.resolve(&submitted).get("page_size"), "A4");

        let submitted = submission(&schema, &set(&["page_size=legal"])).unwrap();
        assert_eq!(rejected_page_size(&schema, &submitted), None);

        // Defaults are always offered
        let submitted = submission(&schema, &[]).unwrap();
        assert_eq!(rejected_page_size(&schema, &submitted), None);
    }

    #[test]
    fn test_bad_assignments() {
        let schema = schema(&IndividualReport);
        assert!(matches!(
            submission(&schema, &set(&["photos"])),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            submission(&schema, &set(&["colour=1"])),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_execute_report_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("tree.ged");
        let out = dir.path().join("report.json");
        fs::write(
            &file,
            "0 @I1@ INDI\n1 NAME John /Smith/\n1 BIRT\n2 DATE 1851\n2 SOUR @S1@\n3 PAGE 45\n0 @S1@ SOUR\n1 TITL Parish Records\n",
        )
        .unwrap();

        let args = ReportArgs {
            report: "individual_report".to_string(),
            file,
            xref: "@I1@".to_string(),
            set: set(&["photos=none"]),
            page: crate::cli::PageArgs {
                width: None,
                height: None,
                landscape: true,
            },
            title: None,
            pdf: true,
            out: Some(out.clone()),
            db: None,
        };
        let mut config = Config::default();
        config.settings.page_size = "letter".to_string();
        let formatter = Formatter::new(crate::config::OutputFormat::Table, false);

        execute_report(args, &config, &formatter).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["inputs"]["pid"], "I1");
        assert_eq!(json["inputs"]["page_size"], "letter");
        assert_eq!(json["context"]["title"], "Individual");
        assert_eq!(json["context"]["output"], "pdf");
        assert_eq!(json["footnotes"][0]["text"], "<u>Parish Records</u>: 45");
    }
}
