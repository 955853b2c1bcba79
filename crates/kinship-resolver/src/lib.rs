//! Kinship Resolver
//!
//! Computes the kinship label between any two people of a family graph.
//!
//! # Overview
//!
//! - **Graph Builder** ([`FamilyGraph`]): flat people/edge lists to four adjacency indices
//! - **Ancestor Search** ([`ancestry`]): cycle-safe breadth-first walk up the parent index
//! - **Relationship Resolver** ([`KinshipResolver::resolve`]): direct edges, lineal lines,
//!   nearest common ancestor, then one spousal hop for in-laws
//! - **Sweep** ([`KinshipResolver::sweep`]): one origin against everyone else
//!
//! Resolution is synchronous and infallible. Unknown people, unrecognized
//! edge kinds and cyclic ancestry degrade to "no relationship found" or a
//! best-effort label; the only fallible operations load configuration.
//!
//! # Usage
//!
//! ```
//! use kinship_domain::{Person, RelationshipEdge};
//! use kinship_resolver::{FamilyGraph, KinshipResolver};
//!
//! let people = vec![
//!     Person::new("ada", "Ada"),
//!     Person::new("ben", "Ben"),
//!     Person::new("cy", "Cy"),
//! ];
//! let edges = vec![
//!     RelationshipEdge::spouse("ada", "ben"),
//!     RelationshipEdge::sibling("ben", "cy"),
//! ];
//!
//! let graph = FamilyGraph::build(&people, &edges);
//! let resolver = KinshipResolver::with_defaults(&graph);
//!
//! let result = resolver.resolve(&"cy".into(), &"ada".into());
//! assert_eq!(resolver.describe(&result), "Cy is the sibling-in-law of Ada");
//! ```

#![warn(missing_docs)]

pub mod ancestry;
pub mod config;
pub mod error;
pub mod graph;
pub mod resolver;
pub mod sweep;

pub use ancestry::{AncestorEntry, AncestorMap};
pub use config::ResolverConfig;
pub use error::{ResolverError, Result};
pub use graph::{BuildReport, FamilyGraph, PersonIndex};
pub use resolver::KinshipResolver;
