//! Geometry command implementation.

use crate::cli::{GeometryArgs, PageArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use lineage_layout::{lookup, Orientation, PageGeometry, PageSpec};

/// Execute the geometry command.
pub fn execute_geometry(args: GeometryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let name = args.size.unwrap_or_else(|| config.settings.page_size.clone());
    if args.page.custom_size().is_none() && lookup(&name).is_none() {
        eprintln!(
            "{}",
            formatter.warning(&format!("Unknown paper size '{}', using A4", name))
        );
    }

    let geometry = build_geometry(&name, &args.page, config)?;
    println!("{}", formatter.format_geometry(&geometry)?);
    Ok(())
}

/// Geometry for a named size, or the custom size if one was given.
pub fn build_geometry(name: &str, page: &PageArgs, config: &Config) -> Result<PageGeometry> {
    let spec = match page.custom_size() {
        Some((width, height)) => PageSpec::Custom { width, height },
        None => PageSpec::Named(name.to_string()),
    };

    let geometry = PageGeometry::builder()
        .spec(spec)
        .orientation(orientation(page))
        .margins(config.margins)
        .build()?;
    Ok(geometry)
}

/// Orientation selected by the page flags.
pub fn orientation(page: &PageArgs) -> Orientation {
    if page.landscape {
        Orientation::Landscape
    } else {
        Orientation::Portrait
    }
}
