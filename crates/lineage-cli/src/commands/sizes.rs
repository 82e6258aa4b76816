//! Sizes command implementation.

use crate::error::Result;
use crate::output::Formatter;
use lineage_layout::{known_sizes, PageSize};

/// Execute the sizes command.
pub fn execute_sizes(formatter: &Formatter) -> Result<()> {
    let sizes: Vec<(&str, PageSize)> = known_sizes().collect();
    println!("{}", formatter.format_sizes(&sizes)?);
    Ok(())
}
