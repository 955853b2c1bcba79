//! Relate command implementation.

use super::person_arg;
use crate::cli::RelateArgs;
use crate::error::Result;
use crate::output::Formatter;
use kinship_resolver::KinshipResolver;

/// Execute the relate command.
pub fn execute_relate(
    args: RelateArgs,
    resolver: &KinshipResolver<'_>,
    formatter: &Formatter,
) -> Result<()> {
    let graph = resolver.graph();
    let a = person_arg(&args.person_a, graph, formatter)?;
    let b = person_arg(&args.person_b, graph, formatter)?;

    let mut results = vec![resolver.resolve(&a, &b)];
    if args.both {
        results.push(resolver.resolve(&b, &a));
    }

    println!("{}", formatter.format_relationships(&results, resolver)?);
    Ok(())
}
