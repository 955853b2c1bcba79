//! Sweep command implementation.

use super::person_arg;
use crate::cli::SweepArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use kinship_resolver::KinshipResolver;

/// Execute the sweep command.
pub fn execute_sweep(
    args: SweepArgs,
    resolver: &KinshipResolver<'_>,
    formatter: &Formatter,
) -> Result<()> {
    let origin = person_arg(&args.origin, resolver.graph(), formatter)?;

    let results = if args.all {
        resolver.sweep(&origin)
    } else {
        resolver.relatives(&origin)
    };

    println!("{}", formatter.format_sweep(&origin, &results, resolver)?);

    if formatter.format() == OutputFormat::Table && !results.is_empty() {
        println!("{}", formatter.info(&format!("{} people", results.len())));
    }

    Ok(())
}
