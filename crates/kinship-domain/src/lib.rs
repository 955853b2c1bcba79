//! Kinship Domain Layer
//!
//! This crate contains the value types shared by every other kinship crate.
//! It carries no graph logic and no I/O: it only describes people, the typed
//! edges between them, and the relationship descriptors the resolver
//! produces.
//!
//! ## Key Concepts
//!
//! - **Person**: an opaque identifier plus a display name
//! - **Relationship edge**: a parent-child, spouse or sibling link between two people
//! - **Kinship**: a resolved relationship ("first cousin once removed", "great-aunt/uncle")
//! - **Relationship result**: a kinship plus the path of people that justified it
//!
//! ## Architecture
//!
//! - Minimal external dependencies (identifier minting and error derives)
//! - Pure data and label rendering only
//! - Graph building and resolution live in `kinship-resolver`
//! - Trait definitions for supplying snapshots from outside

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kinship;
pub mod label;
pub mod person;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use kinship::{Direction, Kinship, KinshipKind, RelationshipResult};
pub use person::{IdError, Person, PersonId};
pub use relationship::{RelationshipEdge, RelationshipKind};
pub use traits::FamilySource;
