//! Inputs command implementation.

use crate::cli::InputsArgs;
use crate::error::Result;
use crate::output::Formatter;
use lineage_report::{find_report, InputSchema};

/// Execute the inputs command.
pub fn execute_inputs(args: InputsArgs, formatter: &Formatter) -> Result<()> {
    let definition = find_report(&args.report)?;

    let mut schema = InputSchema::new();
    definition.setup(&mut schema);

    println!("{}", formatter.format_inputs(definition.as_ref(), &schema)?);
    Ok(())
}
