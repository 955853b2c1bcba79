//! Inspect command implementation.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use kinship_resolver::KinshipResolver;

/// Execute the inspect command.
pub fn execute_inspect(resolver: &KinshipResolver<'_>, formatter: &Formatter) -> Result<()> {
    let report = resolver.graph().report();
    println!("{}", formatter.format_report(report)?);

    if formatter.format() == OutputFormat::Table {
        if report.skipped() > 0 {
            let message = format!("{} relationship row(s) were not indexed", report.skipped());
            println!("{}", formatter.warning(&message));
        } else {
            println!("{}", formatter.success("Every relationship row was indexed"));
        }
    }

    Ok(())
}
