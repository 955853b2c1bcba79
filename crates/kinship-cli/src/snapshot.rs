//! JSON family snapshots.
//!
//! A snapshot is the hand-off format between whatever stores the tree and
//! this tool:
//!
//! ```json
//! {
//!   "people": [{ "id": "p1", "name": "Ada" }],
//!   "relationships": [{ "person_a": "p1", "person_b": "p2", "kind": "parent" }]
//! }
//! ```

use crate::error::{CliError, Result};
use kinship_domain::{FamilySource, Person, PersonId, RelationshipEdge, RelationshipKind};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};

/// One tree as exported by the owning system.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    /// People in the tree
    #[serde(default)]
    pub people: Vec<PersonRecord>,

    /// Relationship rows, any kind
    #[serde(default, alias = "edges")]
    pub relationships: Vec<RelationshipRecord>,
}

/// A person row.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    /// Identifier
    pub id: String,

    /// Preferred display name
    #[serde(default, alias = "display_name")]
    pub name: Option<String>,
}

/// A relationship row.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipRecord {
    /// First person (the parent, for parent kinds)
    #[serde(alias = "person1_id")]
    pub person_a: String,

    /// Second person
    #[serde(alias = "person2_id")]
    pub person_b: String,

    /// Free-form relationship kind
    #[serde(alias = "relationship_type")]
    pub kind: String,
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a snapshot from a file, or from stdin when `source` is "-".
    pub fn load(source: &str) -> Result<Self> {
        let json = if source == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(source)
                .map_err(|e| CliError::Snapshot(format!("Cannot read '{}': {}", source, e)))?
        };

        Self::from_json(&json)
    }
}

impl FamilySource for Snapshot {
    fn people(&self) -> Vec<Person> {
        self.people
            .iter()
            .filter_map(|record| {
                let id = PersonId::parse(&record.id).ok()?;
                let name = record
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .unwrap_or(id.as_str())
                    .to_string();
                Some(Person::new(id, name))
            })
            .collect()
    }

    fn edges(&self) -> Vec<RelationshipEdge> {
        self.relationships
            .iter()
            .filter_map(|record| {
                let a = PersonId::parse(&record.person_a).ok()?;
                let b = PersonId::parse(&record.person_b).ok()?;
                Some(RelationshipEdge::new(a, b, RelationshipKind::parse(&record.kind)))
            })
            .collect()
    }
}
