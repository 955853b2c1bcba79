//! Relationship module - typed edges between people

use super::PersonId;

/// Kind of relationship edge, as far as kinship is concerned
///
/// The set is closed. Adoptive, step, foster and guardian links all count
/// as parent-child. Any kind outside the recognized vocabulary parses to
/// [`RelationshipKind::Unknown`] and is skipped when a graph is built, so
/// unrelated edge types sharing the same dataset never break resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// Parent to child (the first person of the edge is the parent)
    ParentChild,

    /// Spouse or partner (undirected)
    Spouse,

    /// Sibling (undirected)
    Sibling,

    /// Anything else
    Unknown,
}

impl RelationshipKind {
    /// Get the canonical kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::ParentChild => "parent",
            RelationshipKind::Spouse => "spouse",
            RelationshipKind::Sibling => "sibling",
            RelationshipKind::Unknown => "unknown",
        }
    }

    /// Parse a kind from free-form input
    ///
    /// Case-insensitive; `-`, `_` and spaces are interchangeable.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::RelationshipKind;
    ///
    /// assert_eq!(RelationshipKind::parse("Step-Parent"), RelationshipKind::ParentChild);
    /// assert_eq!(RelationshipKind::parse("partner"), RelationshipKind::Spouse);
    /// assert_eq!(RelationshipKind::parse("godparent"), RelationshipKind::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "parent" | "parent_child" | "biological_parent" | "adoptive_parent"
            | "step_parent" | "stepparent" | "foster_parent" | "guardian" | "adoptive"
            | "step" | "foster" | "mother" | "father" => RelationshipKind::ParentChild,
            "spouse" | "partner" | "husband" | "wife" | "married" | "domestic_partner" => {
                RelationshipKind::Spouse
            }
            "sibling" | "brother" | "sister" => RelationshipKind::Sibling,
            _ => RelationshipKind::Unknown,
        }
    }

    /// Whether the builder indexes edges of this kind
    pub fn is_recognized(&self) -> bool {
        !matches!(self, RelationshipKind::Unknown)
    }
}

impl std::str::FromStr for RelationshipKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A typed relationship edge between two people
///
/// Direction only matters for [`RelationshipKind::ParentChild`], where
/// `person_a` is always the parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipEdge {
    /// First person (the parent, for parent-child edges)
    pub person_a: PersonId,

    /// Second person (the child, for parent-child edges)
    pub person_b: PersonId,

    /// Kind of relationship
    pub kind: RelationshipKind,
}

impl RelationshipEdge {
    /// Create a new edge
    pub fn new(
        person_a: impl Into<PersonId>,
        person_b: impl Into<PersonId>,
        kind: RelationshipKind,
    ) -> Self {
        Self {
            person_a: person_a.into(),
            person_b: person_b.into(),
            kind,
        }
    }

    /// Parent-child edge
    pub fn parent_child(parent: impl Into<PersonId>, child: impl Into<PersonId>) -> Self {
        Self::new(parent, child, RelationshipKind::ParentChild)
    }

    /// Spouse/partner edge
    pub fn spouse(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, RelationshipKind::Spouse)
    }

    /// Sibling edge
    pub fn sibling(a: impl Into<PersonId>, b: impl Into<PersonId>) -> Self {
        Self::new(a, b, RelationshipKind::Sibling)
    }

    /// Whether both ends name the same person
    pub fn is_self_referential(&self) -> bool {
        self.person_a == self.person_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_variants_collapse() {
        for raw in [
            "parent",
            "adoptive_parent",
            "Step Parent",
            "foster-parent",
            "GUARDIAN",
            "biological_parent",
        ] {
            assert_eq!(RelationshipKind::parse(raw), RelationshipKind::ParentChild, "{raw}");
        }
    }

    #[test]
    fn test_spouse_and_sibling_variants() {
        assert_eq!(RelationshipKind::parse("spouse"), RelationshipKind::Spouse);
        assert_eq!(RelationshipKind::parse("Partner"), RelationshipKind::Spouse);
        assert_eq!(RelationshipKind::parse("sibling"), RelationshipKind::Sibling);
        assert_eq!(RelationshipKind::parse("sister"), RelationshipKind::Sibling);
    }

    #[test]
    fn test_unknown_kinds_absorbed() {
        assert_eq!(RelationshipKind::parse("friend"), RelationshipKind::Unknown);
        assert_eq!(RelationshipKind::parse(""), RelationshipKind::Unknown);
        assert!(!RelationshipKind::Unknown.is_recognized());
        assert_eq!("neighbour".parse::<RelationshipKind>(), Ok(RelationshipKind::Unknown));
    }

    #[test]
    fn test_self_referential_edge() {
        assert!(RelationshipEdge::spouse("a", "a").is_self_referential());
        assert!(!RelationshipEdge::parent_child("a", "b").is_self_referential());
    }
}
