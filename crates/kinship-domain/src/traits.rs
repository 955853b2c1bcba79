//! Trait definitions for external interactions
//!
//! Storage, import pipelines and UI layers implement these; the resolver
//! only consumes them.

use crate::{Person, RelationshipEdge};

/// A snapshot of one family tree
///
/// Implemented by whatever owns the people and relationship rows (a
/// database export, a JSON file, an in-memory fixture). The resolver reads
/// the snapshot once and never writes back.
pub trait FamilySource {
    /// Every person in the tree, in any order
    fn people(&self) -> Vec<Person>;

    /// Every relationship edge in the tree, in any order
    ///
    /// Edges of kinds the resolver does not recognize may be included.
    fn edges(&self) -> Vec<RelationshipEdge>;
}

impl FamilySource for (Vec<Person>, Vec<RelationshipEdge>) {
    fn people(&self) -> Vec<Person> {
        self.0.clone()
    }

    fn edges(&self) -> Vec<RelationshipEdge> {
        self.1.clone()
    }
}
