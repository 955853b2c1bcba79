//! Command implementations.

pub mod ancestors;
pub mod init;
pub mod inspect;
pub mod relate;
pub mod sweep;

pub use self::ancestors::execute_ancestors;
pub use self::init::execute_init;
pub use self::inspect::execute_inspect;
pub use self::relate::execute_relate;
pub use self::sweep::execute_sweep;

use crate::error::Result;
use crate::output::Formatter;
use kinship_domain::PersonId;
use kinship_resolver::FamilyGraph;

/// Parse a person identifier argument, warning when the graph does not know it.
pub(crate) fn person_arg(
    raw: &str,
    graph: &FamilyGraph,
    formatter: &Formatter,
) -> Result<PersonId> {
    let id = PersonId::parse(raw)?;
    if !graph.contains(&id) {
        eprintln!("{}", formatter.warning(&format!("'{}' is not in the family snapshot", id)));
    }
    Ok(id)
}
