//! Report construction
//!
//! The builder runs a definition's setup, validates the submission and
//! computes page geometry exactly once. The resulting [`Report`] owns an
//! empty footnote registry that fills up while the report runs.

use crate::context::ReportContext;
use crate::data::ReportData;
use crate::definition::ReportDefinition;
use crate::error::ReportError;
use crate::schema::{InputSchema, ResolvedInputs};
use lineage_citation::{CitationConfig, CitationFormatter, Footnotes};
use lineage_domain::SourceLookup;
use lineage_layout::{Margins, Orientation, PageGeometry, PageSpec};
use std::collections::HashMap;
use tracing::info;

/// Name of the input that selects the paper size
pub const PAGE_SIZE_INPUT: &str = "page_size";

/// Builder for [`Report`]
///
/// # Examples
///
/// ```
/// use lineage_report::{IndividualReport, ReportBuilder};
///
/// let report = ReportBuilder::new(&IndividualReport)
///     .set("pid", "I1")
///     .set("page_size", "Z9")
///     .build()
///     .unwrap();
///
/// assert_eq!(report.inputs().get("page_size"), "A4");
/// assert_eq!(report.geometry().content_width(), 516);
/// ```
pub struct ReportBuilder<'a> {
    definition: &'a dyn ReportDefinition,
    submitted: HashMap<String, String>,
    context: ReportContext,
    margins: Margins,
    orientation: Orientation,
    custom_size: Option<(f64, f64)>,
    citation: CitationConfig,
}

impl<'a> ReportBuilder<'a> {
    /// Start building a run of `definition`
    pub fn new(definition: &'a dyn ReportDefinition) -> Self {
        Self {
            definition,
            submitted: HashMap::new(),
            context: ReportContext::default(),
            margins: Margins::default(),
            orientation: Orientation::default(),
            custom_size: None,
            citation: CitationConfig::default(),
        }
    }

    /// Replace the submitted values
    pub fn submit(mut self, submitted: HashMap<String, String>) -> Self {
        self.submitted = submitted;
        self
    }

    /// Submit one value
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.submitted.insert(name.into(), value.into());
        self
    }

    /// Set the caller context
    pub fn context(mut self, context: ReportContext) -> Self {
        self.context = context;
        self
    }

    /// Set the page margins
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the page orientation
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Use explicit page dimensions instead of the `page_size` input
    pub fn custom_size(mut self, width: f64, height: f64) -> Self {
        self.custom_size = Some((width, height));
        self
    }

    /// Set the citation markup
    pub fn citation(mut self, citation: CitationConfig) -> Self {
        self.citation = citation;
        self
    }

    /// Resolve inputs and compute geometry
    ///
    /// # Errors
    ///
    /// Fails on custom dimensions below 10 points, invalid margins or an
    /// invalid citation config.
    pub fn build(self) -> Result<Report<'a>, ReportError> {
        self.citation.validate()?;

        let mut schema = InputSchema::new();
        self.definition.setup(&mut schema);
        let inputs = schema.resolve(&self.submitted);

        let spec = match self.custom_size {
            Some((width, height)) => PageSpec::Custom { width, height },
            None => PageSpec::Named(inputs.try_get(PAGE_SIZE_INPUT).unwrap_or("A4").to_string()),
        };
        let geometry = PageGeometry::builder()
            .spec(spec)
            .orientation(self.orientation)
            .margins(self.margins)
            .build()?;

        let mut context = self.context;
        if context.title.is_empty() {
            context.title = self.definition.title().to_string();
        }

        info!(
            report = self.definition.name(),
            content_width = geometry.content_width(),
            "report built"
        );

        Ok(Report {
            definition: self.definition,
            context,
            schema,
            inputs,
            geometry,
            footnotes: Footnotes::new(CitationFormatter::new(self.citation)),
        })
    }
}

/// A report ready to run
///
/// Geometry and inputs are fixed; only the footnote registry grows.
pub struct Report<'a> {
    definition: &'a dyn ReportDefinition,
    context: ReportContext,
    schema: InputSchema,
    inputs: ResolvedInputs,
    geometry: PageGeometry,
    footnotes: Footnotes,
}

impl Report<'_> {
    /// Report name
    pub fn name(&self) -> &'static str {
        self.definition.name()
    }

    /// Caller context
    pub fn context(&self) -> &ReportContext {
        &self.context
    }

    /// Declared inputs
    pub fn schema(&self) -> &InputSchema {
        &self.schema
    }

    /// Validated inputs
    pub fn inputs(&self) -> &ResolvedInputs {
        &self.inputs
    }

    /// Page geometry
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Footnotes collected so far
    pub fn footnotes(&self) -> &Footnotes {
        &self.footnotes
    }

    /// Collect the report body and bundle it for rendering
    pub fn run(mut self, lookup: &dyn SourceLookup) -> Result<ReportData, ReportError> {
        let body = self
            .definition
            .collect(&self.inputs, &self.geometry, &mut self.footnotes, lookup)?;

        let registry = self.footnotes.into_registry();
        info!(report = self.definition.name(), footnotes = registry.len(), "report collected");

        Ok(ReportData {
            report: self.definition.name().to_string(),
            context: self.context,
            inputs: self.inputs,
            styles: ReportData::styles_for(&self.geometry),
            geometry: self.geometry,
            body,
            footnotes: registry.entries().collect(),
        })
    }
}
