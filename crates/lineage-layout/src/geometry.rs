//! Derived layout boxes for one report
//!
//! Geometry is computed once by [`GeometryBuilder::build`] and is immutable
//! afterwards. All values are in points.

use crate::error::LayoutError;
use crate::margins::Margins;
use crate::paper::{self, PageSize};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;
use tracing::debug;

/// Gap between the header div and the body
const HEADER_GAP: f64 = 6.0;
/// Offset of the footer margin below the footer div's relative origin
const FOOTER_MARGIN_TOP: f64 = 35.0;
/// Gap between the content column and the image column
const IMAGE_GAP: f64 = 8.0;
/// Image top, and vertical step between stacked images
const IMAGE_TOP: f64 = 110.0;
const IMAGE_WIDTH: f64 = 80.0;
const IMAGE_HEIGHT: f64 = 110.0;

/// CSS-like positioning mode of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Positioned against the page
    Absolute,
    /// Positioned against its normal flow origin
    Relative,
}

impl Position {
    /// CSS keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Absolute => "absolute",
            Position::Relative => "relative",
        }
    }
}

/// A named layout region
///
/// Absent fields mean "not positioned on that axis".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageBox {
    /// Positioning mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Top offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,

    /// Left offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,

    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl PageBox {
    /// Render as a CSS-like declaration list (`height:14pt;width:516pt;`)
    pub fn to_style(&self) -> String {
        self.style_with_top(self.top)
    }

    fn style_with_top(&self, top: Option<f64>) -> String {
        let mut css = String::new();
        if let Some(position) = self.position {
            let _ = write!(css, "position:{};", position.as_str());
        }
        let lengths = [
            ("top", top),
            ("left", self.left),
            ("height", self.height),
            ("width", self.width),
        ];
        for (key, value) in lengths {
            if let Some(value) = value {
                let _ = write!(css, "{}:{}pt;", key, value);
            }
        }
        css
    }
}

/// The named regions of a report page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxKind {
    /// Blank band above the header
    HeaderMargin,
    /// Report header
    HeaderDiv,
    /// Report body, grows with content
    BodyDiv,
    /// Blank band above the footer
    BottomMargin,
    /// Report footer
    FooterDiv,
    /// Blank band below the footer
    FooterMargin,
    /// Inserted photo column
    Image,
}

impl BoxKind {
    /// Every region in page order
    pub const ALL: [BoxKind; 7] = [
        BoxKind::HeaderMargin,
        BoxKind::HeaderDiv,
        BoxKind::BodyDiv,
        BoxKind::BottomMargin,
        BoxKind::FooterDiv,
        BoxKind::FooterMargin,
        BoxKind::Image,
    ];

    /// Region name as used by templates
    pub fn as_str(&self) -> &'static str {
        match self {
            BoxKind::HeaderMargin => "headermargin",
            BoxKind::HeaderDiv => "headerdiv",
            BoxKind::BodyDiv => "bodydiv",
            BoxKind::BottomMargin => "bottommargin",
            BoxKind::FooterDiv => "footerdiv",
            BoxKind::FooterMargin => "footermargin",
            BoxKind::Image => "image",
        }
    }

    /// Parse a region name
    pub fn parse(s: &str) -> Option<Self> {
        BoxKind::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tall sheet (table dimensions as-is)
    #[default]
    Portrait,
    /// Wide sheet (width and height swapped)
    Landscape,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(format!("Invalid orientation: {}", s)),
        }
    }
}

/// How the page size is chosen
#[derive(Debug, Clone, PartialEq)]
pub enum PageSpec {
    /// A named format, unknown names fall back to A4
    Named(String),
    /// Explicit dimensions in points, both at least 10
    Custom {
        /// Page width
        width: f64,
        /// Page height
        height: f64,
    },
}

impl Default for PageSpec {
    fn default() -> Self {
        PageSpec::Named("A4".to_string())
    }
}

/// All derived boxes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageBoxes {
    /// `headermargin`
    #[serde(rename = "headermargin")]
    pub header_margin: PageBox,
    /// `headerdiv`
    #[serde(rename = "headerdiv")]
    pub header_div: PageBox,
    /// `bodydiv`
    #[serde(rename = "bodydiv")]
    pub body_div: PageBox,
    /// `bottommargin`
    #[serde(rename = "bottommargin")]
    pub bottom_margin: PageBox,
    /// `footerdiv`
    #[serde(rename = "footerdiv")]
    pub footer_div: PageBox,
    /// `footermargin`
    #[serde(rename = "footermargin")]
    pub footer_margin: PageBox,
    /// `image`
    pub image: PageBox,
}

/// Page size, margins and the boxes derived from them
///
/// # Examples
///
/// ```
/// use lineage_layout::{BoxKind, PageGeometry};
///
/// let geometry = PageGeometry::builder().page_size("A4").build().unwrap();
/// assert_eq!(geometry.content_width(), 516);
/// assert_eq!(geometry.style(BoxKind::HeaderMargin), "height:14pt;width:516pt;");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageGeometry {
    page: PageSize,
    orientation: Orientation,
    margins: Margins,
    content_width: i64,
    boxes: PageBoxes,
}

impl PageGeometry {
    /// Start building a geometry (A4 portrait, default margins)
    pub fn builder() -> GeometryBuilder {
        GeometryBuilder::default()
    }

    fn derive(page: PageSize, orientation: Orientation, margins: Margins) -> Self {
        let content_width = (page.width_pt - margins.left - margins.right).trunc() as i64;
        let width = content_width as f64;

        let boxes = PageBoxes {
            header_margin: PageBox {
                height: Some(margins.header),
                width: Some(width),
                ..PageBox::default()
            },
            header_div: PageBox {
                height: Some(margins.top - margins.header - HEADER_GAP),
                width: Some(width),
                ..PageBox::default()
            },
            body_div: PageBox {
                width: Some(width),
                ..PageBox::default()
            },
            bottom_margin: PageBox {
                height: Some(margins.bottom - margins.footer),
                width: Some(width),
                ..PageBox::default()
            },
            footer_div: PageBox {
                position: Some(Position::Relative),
                width: Some(width),
                ..PageBox::default()
            },
            footer_margin: PageBox {
                position: Some(Position::Relative),
                top: Some(FOOTER_MARGIN_TOP),
                height: Some(margins.footer),
                width: Some(width),
                ..PageBox::default()
            },
            image: PageBox {
                position: Some(Position::Absolute),
                top: Some(IMAGE_TOP),
                left: Some(width + IMAGE_GAP),
                height: Some(IMAGE_HEIGHT),
                width: Some(IMAGE_WIDTH),
            },
        };

        Self {
            page,
            orientation,
            margins,
            content_width,
            boxes,
        }
    }

    /// Resolved page dimensions (after orientation)
    pub fn page(&self) -> PageSize {
        self.page
    }

    /// Page orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Margins the boxes were derived from
    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    /// Page width minus left and right margins, truncated to whole points
    pub fn content_width(&self) -> i64 {
        self.content_width
    }

    /// All boxes
    pub fn boxes(&self) -> &PageBoxes {
        &self.boxes
    }

    /// One box by kind
    pub fn get(&self, kind: BoxKind) -> &PageBox {
        match kind {
            BoxKind::HeaderMargin => &self.boxes.header_margin,
            BoxKind::HeaderDiv => &self.boxes.header_div,
            BoxKind::BodyDiv => &self.boxes.body_div,
            BoxKind::BottomMargin => &self.boxes.bottom_margin,
            BoxKind::FooterDiv => &self.boxes.footer_div,
            BoxKind::FooterMargin => &self.boxes.footer_margin,
            BoxKind::Image => &self.boxes.image,
        }
    }

    /// CSS-like descriptor of one box
    pub fn style(&self, kind: BoxKind) -> String {
        self.get(kind).to_style()
    }

    /// Top offset of the n-th stacked image (1-based)
    pub fn image_top(&self, image_index: u32) -> f64 {
        IMAGE_TOP * f64::from(image_index)
    }

    /// CSS-like descriptor of the n-th stacked image (1-based)
    pub fn image_style(&self, image_index: u32) -> String {
        self.boxes
            .image
            .style_with_top(Some(self.image_top(image_index)))
    }
}

/// Builder for [`PageGeometry`]
#[derive(Debug, Clone, Default)]
pub struct GeometryBuilder {
    spec: PageSpec,
    orientation: Orientation,
    margins: Margins,
}

impl GeometryBuilder {
    /// Use a named paper format
    pub fn page_size(mut self, name: impl Into<String>) -> Self {
        self.spec = PageSpec::Named(name.into());
        self
    }

    /// Use explicit dimensions in points
    pub fn custom_size(mut self, width: f64, height: f64) -> Self {
        self.spec = PageSpec::Custom { width, height };
        self
    }

    /// Use a prepared page spec
    pub fn spec(mut self, spec: PageSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Set the orientation
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the margins
    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Resolve the page and derive every box
    ///
    /// # Errors
    ///
    /// Fails on custom dimensions below 10 points, invalid margins, or a
    /// page too narrow to leave any content width between its margins.
    pub fn build(self) -> Result<PageGeometry, LayoutError> {
        self.margins.validate()?;

        let page = match &self.spec {
            PageSpec::Named(name) => paper::resolve(name),
            PageSpec::Custom { width, height } => paper::resolve_custom(*width, *height)?,
        };
        let page = match self.orientation {
            Orientation::Portrait => page,
            Orientation::Landscape => page.landscape(),
        };
        if page.width_pt <= self.margins.left + self.margins.right {
            return Err(LayoutError::Config(format!(
                "page width {}pt leaves no room between margins of {}pt and {}pt",
                page.width_pt, self.margins.left, self.margins.right
            )));
        }

        let geometry = PageGeometry::derive(page, self.orientation, self.margins);
        debug!(
            width = page.width_pt,
            height = page.height_pt,
            content_width = geometry.content_width,
            "page geometry computed"
        );
        Ok(geometry)
    }
}
