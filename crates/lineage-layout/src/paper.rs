//! Named paper formats
//!
//! All dimensions are portrait `(width, height)` in points:
//! 1 inch = 72 points, 1 mm = 2.8346457 points.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Smallest accepted custom page dimension, in points
pub const MIN_CUSTOM_DIMENSION: f64 = 10.0;

/// Physical page dimensions in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width in points
    pub width_pt: f64,

    /// Page height in points
    pub height_pt: f64,
}

impl PageSize {
    /// ISO A4, the fallback for unknown names
    pub const A4: PageSize = PageSize {
        width_pt: 595.28,
        height_pt: 841.89,
    };

    /// Create a page size
    pub const fn new(width_pt: f64, height_pt: f64) -> Self {
        Self { width_pt, height_pt }
    }

    /// The same sheet turned sideways
    pub fn landscape(self) -> Self {
        Self::new(self.height_pt, self.width_pt)
    }
}

/// Standard formats, looked up case-insensitively
const PAPER_SIZES: &[(&str, f64, f64)] = &[
    // ISO 216 A series
    ("4A0", 4767.86, 6740.79),
    ("2A0", 3370.39, 4767.86),
    ("A0", 2383.94, 3370.39),
    ("A1", 1683.78, 2383.94),
    ("A2", 1190.55, 1683.78),
    ("A3", 841.89, 1190.55),
    ("A4", 595.28, 841.89),
    ("A5", 419.53, 595.28),
    ("A6", 297.64, 419.53),
    ("A7", 209.76, 297.64),
    ("A8", 147.40, 209.76),
    ("A9", 104.88, 147.40),
    ("A10", 73.70, 104.88),
    // ISO 216 B series
    ("B0", 2834.65, 4008.19),
    ("B1", 2004.09, 2834.65),
    ("B2", 1417.32, 2004.09),
    ("B3", 1000.63, 1417.32),
    ("B4", 708.66, 1000.63),
    ("B5", 498.90, 708.66),
    ("B6", 354.33, 498.90),
    ("B7", 249.45, 354.33),
    ("B8", 175.75, 249.45),
    ("B9", 124.72, 175.75),
    ("B10", 87.87, 124.72),
    // ISO 269 C series envelopes
    ("C0", 2599.37, 3676.54),
    ("C1", 1836.85, 2599.37),
    ("C2", 1298.27, 1836.85),
    ("C3", 918.43, 1298.27),
    ("C4", 649.13, 918.43),
    ("C5", 459.21, 649.13),
    ("C6/5", 323.15, 649.13),
    ("C6", 323.15, 459.21),
    ("C7/6", 229.61, 459.21),
    ("C7", 229.61, 323.15),
    ("C8", 161.57, 229.61),
    ("C9", 113.39, 161.57),
    ("C10", 79.37, 113.39),
    ("DL", 311.81, 623.62),
    // ISO 478 untrimmed RA stock
    ("RA0", 2437.80, 3458.27),
    ("RA1", 1729.13, 2437.80),
    ("RA2", 1218.90, 1729.13),
    ("RA3", 864.57, 1218.90),
    ("RA4", 609.45, 864.57),
    // ISO 593 untrimmed SRA stock
    ("SRA0", 2551.18, 3628.35),
    ("SRA1", 1814.17, 2551.18),
    ("SRA2", 1275.59, 1814.17),
    ("SRA3", 907.09, 1275.59),
    ("SRA4", 637.80, 907.09),
    // ISO size variations
    ("A2EXTRA", 1261.42, 1754.65),
    ("A2SUPER", 864.57, 1440.00),
    ("A3EXTRA", 912.76, 1261.42),
    ("SUPERA3", 864.57, 1380.47),
    ("A4EXTRA", 666.14, 912.76),
    ("A4LONG", 595.28, 986.46),
    ("A4SUPER", 649.13, 912.76),
    ("SUPERA4", 643.46, 1009.13),
    ("A5EXTRA", 490.39, 666.14),
    ("SOB5EXTRA", 572.60, 782.36),
    // JIS P 0138-61 B series
    ("JB0", 2919.69, 4127.24),
    ("JB1", 2063.62, 2919.69),
    ("JB2", 1459.84, 2063.62),
    ("JB3", 1031.81, 1459.84),
    ("JB4", 728.50, 1031.81),
    ("JB5", 515.91, 728.50),
    ("JB6", 362.83, 515.91),
    ("JB7", 257.95, 362.83),
    ("JB8", 181.42, 257.95),
    ("JB9", 127.56, 181.42),
    ("JB10", 90.71, 127.56),
    // US formats
    ("EXECUTIVE", 522.00, 756.00),
    ("FOLIO", 612.00, 936.00),
    ("FOOLSCAP", 972.00, 1224.00),
    ("LEDGER", 792.00, 1224.00),
    ("LEGAL", 612.00, 1008.00),
    ("LETTER", 612.00, 792.00),
    ("QUARTO", 609.12, 777.50),
    ("STATEMENT", 396.00, 612.00),
    ("USGOVT", 576.00, 792.00),
];

/// Look up a named format, `None` if the name is unknown
pub fn lookup(name: &str) -> Option<PageSize> {
    let name = name.trim();
    PAPER_SIZES
        .iter()
        .find(|(known, _, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, width, height)| PageSize::new(width, height))
}

/// Resolve a named format, falling back to A4 for unknown names
///
/// # Examples
///
/// ```
/// use lineage_layout::{resolve, PageSize};
///
/// assert_eq!(resolve("a4"), PageSize::A4);
/// assert_eq!(resolve("letter"), PageSize::new(612.0, 792.0));
/// assert_eq!(resolve("NOT_A_SIZE"), PageSize::A4);
/// ```
pub fn resolve(name: &str) -> PageSize {
    lookup(name).unwrap_or_else(|| {
        debug!(name, "unknown paper size, using A4");
        PageSize::A4
    })
}

/// Use explicit dimensions, bypassing the named table
///
/// # Errors
///
/// Returns [`LayoutError::PageTooSmall`] if either dimension is below
/// [`MIN_CUSTOM_DIMENSION`].
pub fn resolve_custom(width_pt: f64, height_pt: f64) -> Result<PageSize, LayoutError> {
    check_dimension("width", width_pt)?;
    check_dimension("height", height_pt)?;
    Ok(PageSize::new(width_pt, height_pt))
}

fn check_dimension(dimension: &'static str, value: f64) -> Result<(), LayoutError> {
    // NaN fails the comparison and is rejected too
    if value >= MIN_CUSTOM_DIMENSION {
        Ok(())
    } else {
        Err(LayoutError::PageTooSmall {
            dimension,
            value,
            minimum: MIN_CUSTOM_DIMENSION,
        })
    }
}

/// Every known format name with its portrait size, in table order
pub fn known_sizes() -> impl Iterator<Item = (&'static str, PageSize)> {
    PAPER_SIZES
        .iter()
        .map(|&(name, width, height)| (name, PageSize::new(width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_a4() {
        assert_eq!(resolve("A4"), PageSize::new(595.28, 841.89));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("a4"), resolve("A4"));
        assert_eq!(resolve("Letter"), PageSize::new(612.0, 792.0));
        assert_eq!(resolve("c6/5"), PageSize::new(323.15, 649.13));
        assert_eq!(resolve("superA3"), PageSize::new(864.57, 1380.47));
    }

    #[test]
    fn test_unknown_falls_back_to_a4() {
        assert_eq!(resolve("NOT_A_SIZE"), resolve("A4"));
        assert_eq!(resolve(""), PageSize::A4);
        assert!(lookup("NOT_A_SIZE").is_none());
    }

    #[test]
    fn test_us_formats() {
        assert_eq!(resolve("legal"), PageSize::new(612.0, 1008.0));
        assert_eq!(resolve("LEDGER"), PageSize::new(792.0, 1224.0));
        assert_eq!(resolve("executive"), PageSize::new(522.0, 756.0));
        assert_eq!(resolve("quarto"), PageSize::new(609.12, 777.50));
    }

    #[test]
    fn test_table_is_complete_and_unique() {
        let names: Vec<&str> = known_sizes().map(|(n, _)| n).collect();
        assert_eq!(names.len(), 78);

        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }

    #[test]
    fn test_table_is_portrait() {
        for (name, size) in known_sizes() {
            assert!(size.width_pt <= size.height_pt, "{} is not portrait", name);
        }
    }

    #[test]
    fn test_custom_size_floor() {
        assert!(matches!(
            resolve_custom(9.0, 500.0),
            Err(LayoutError::PageTooSmall { dimension: "width", .. })
        ));
        assert!(matches!(
            resolve_custom(500.0, 9.99),
            Err(LayoutError::PageTooSmall { dimension: "height", .. })
        ));
        assert_eq!(resolve_custom(10.0, 500.0), Ok(PageSize::new(10.0, 500.0)));
    }

    #[test]
    fn test_custom_size_rejects_nan() {
        assert!(resolve_custom(f64::NAN, 500.0).is_err());
    }

    #[test]
    fn test_landscape() {
        assert_eq!(PageSize::A4.landscape(), PageSize::new(841.89, 595.28));
    }
}
