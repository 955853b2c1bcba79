//! Ancestors command implementation.

use super::person_arg;
use crate::cli::AncestorsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kinship_resolver::KinshipResolver;

/// Execute the ancestors command.
///
/// `--generations` overrides the configured generation limit for this listing only.
pub fn execute_ancestors(
    args: AncestorsArgs,
    resolver: &KinshipResolver<'_>,
    formatter: &Formatter,
) -> Result<()> {
    if args.generations == Some(0) {
        return Err(CliError::InvalidInput("Generations must be at least 1".to_string()));
    }

    let person = person_arg(&args.person, resolver.graph(), formatter)?;

    let ancestors = match args.generations {
        Some(limit) => {
            let mut config = resolver.config().clone();
            config.max_generations = Some(limit);
            KinshipResolver::new(resolver.graph(), config).ancestors_of(&person)
        }
        None => resolver.ancestors_of(&person),
    };

    println!("{}", formatter.format_ancestors(&person, &ancestors, resolver)?);
    Ok(())
}
