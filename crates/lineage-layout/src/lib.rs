//! Lineage Page Layout
//!
//! Resolves paper sizes and derives the named boxes a report template
//! positions its header, body, footer and photos with.
//!
//! # Key Features
//!
//! - **Paper Sizes**: ISO A/B/C/RA/SRA, JIS B and US formats, case-insensitive, A4 fallback
//! - **Custom Sizes**: Explicit dimensions with a 10pt floor
//! - **Margins**: Configurable from TOML, validated before use
//! - **Boxes**: `headermargin`, `headerdiv`, `bodydiv`, `bottommargin`,
//!   `footerdiv`, `footermargin` and `image`, rendered as CSS-like descriptors
//!
//! # Example Usage
//!
//! ```
//! use lineage_layout::{BoxKind, Orientation, PageGeometry};
//!
//! let geometry = PageGeometry::builder()
//!     .page_size("letter")
//!     .orientation(Orientation::Portrait)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(geometry.content_width(), 533);
//! assert_eq!(geometry.style(BoxKind::BodyDiv), "width:533pt;");
//! ```

#![warn(missing_docs)]

mod error;
mod geometry;
mod margins;
mod paper;

pub use error::LayoutError;
pub use geometry::{
    BoxKind, GeometryBuilder, Orientation, PageBox, PageBoxes, PageGeometry, PageSpec, Position,
};
pub use margins::Margins;
pub use paper::{known_sizes, lookup, resolve, resolve_custom, PageSize, MIN_CUSTOM_DIMENSION};
