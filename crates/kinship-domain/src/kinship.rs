//! Kinship descriptors produced by the resolver

use crate::label;
use crate::PersonId;
use std::fmt;

/// Generational direction of person 1 relative to person 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Person 1 belongs to an older generation
    Ascending,

    /// Person 1 belongs to a younger generation
    Descending,

    /// Same generation
    Lateral,
}

impl Direction {
    /// The direction seen from the other side
    pub fn reversed(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
            Direction::Lateral => Direction::Lateral,
        }
    }

    /// Get the direction name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
            Direction::Lateral => "lateral",
        }
    }
}

/// Flat tag for a [`Kinship`], without its numeric payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KinshipKind {
    /// Same person
    SelfRelation,
    /// Spouse or partner
    Spouse,
    /// Sibling
    Sibling,
    /// Parent
    Parent,
    /// Child
    Child,
    /// Grandparent or further up
    Ancestor,
    /// Grandchild or further down
    Descendant,
    /// Aunt/uncle line
    AuntUncle,
    /// Niece/nephew line
    NieceNephew,
    /// Cousin of some degree
    Cousin,
    /// Any of the above reached through one spouse
    InLaw,
    /// Nothing found
    Unrelated,
}

impl KinshipKind {
    /// Get the tag name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            KinshipKind::SelfRelation => "self",
            KinshipKind::Spouse => "spouse",
            KinshipKind::Sibling => "sibling",
            KinshipKind::Parent => "parent",
            KinshipKind::Child => "child",
            KinshipKind::Ancestor => "ancestor",
            KinshipKind::Descendant => "descendant",
            KinshipKind::AuntUncle => "aunt_uncle",
            KinshipKind::NieceNephew => "niece_nephew",
            KinshipKind::Cousin => "cousin",
            KinshipKind::InLaw => "in_law",
            KinshipKind::Unrelated => "unrelated",
        }
    }
}

/// A resolved relationship of person 1 to person 2
///
/// Read every variant as "person 1 is the `<kinship>` of person 2".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kinship {
    /// Both identifiers name the same person
    SelfRelation,

    /// Direct spouse/partner edge
    Spouse,

    /// Sibling, by edge or by a shared parent
    Sibling,

    /// Direct parent
    Parent,

    /// Direct child
    Child,

    /// Grandparent (2), great-grandparent (3), ...
    Ancestor {
        /// Parent-edge hops from person 2 up to person 1
        generations: u32,
    },

    /// Grandchild (2), great-grandchild (3), ...
    Descendant {
        /// Parent-edge hops from person 1 up to person 2
        generations: u32,
    },

    /// Aunt/uncle (1), great-aunt/uncle (2), ...
    AuntUncle {
        /// Generations between person 1 and person 2
        removal: u32,
    },

    /// Niece/nephew (1), great-niece/nephew (2), ...
    NieceNephew {
        /// Generations between person 1 and person 2
        removal: u32,
    },

    /// Nth cousin, M times removed
    Cousin {
        /// One less than the shallower distance to the common ancestor
        degree: u32,
        /// Difference of the two distances to the common ancestor
        removal: u32,
        /// Which side of the removal person 1 is on
        direction: Direction,
    },

    /// Relationship through exactly one spouse
    InLaw(Box<Kinship>),

    /// No relationship found
    Unrelated,
}

impl Kinship {
    /// Flat tag for this kinship
    pub fn kind(&self) -> KinshipKind {
        match self {
            Kinship::SelfRelation => KinshipKind::SelfRelation,
            Kinship::Spouse => KinshipKind::Spouse,
            Kinship::Sibling => KinshipKind::Sibling,
            Kinship::Parent => KinshipKind::Parent,
            Kinship::Child => KinshipKind::Child,
            Kinship::Ancestor { .. } => KinshipKind::Ancestor,
            Kinship::Descendant { .. } => KinshipKind::Descendant,
            Kinship::AuntUncle { .. } => KinshipKind::AuntUncle,
            Kinship::NieceNephew { .. } => KinshipKind::NieceNephew,
            Kinship::Cousin { .. } => KinshipKind::Cousin,
            Kinship::InLaw(_) => KinshipKind::InLaw,
            Kinship::Unrelated => KinshipKind::Unrelated,
        }
    }

    /// Cousin degree; siblings and the aunt/niece line count as degree 0
    pub fn degree(&self) -> Option<u32> {
        match self {
            Kinship::Cousin { degree, .. } => Some(*degree),
            Kinship::Sibling | Kinship::AuntUncle { .. } | Kinship::NieceNephew { .. } => Some(0),
            Kinship::InLaw(inner) => inner.degree(),
            _ => None,
        }
    }

    /// Removal across a collateral line
    pub fn removal(&self) -> Option<u32> {
        match self {
            Kinship::Cousin { removal, .. }
            | Kinship::AuntUncle { removal }
            | Kinship::NieceNephew { removal } => Some(*removal),
            Kinship::Sibling => Some(0),
            Kinship::InLaw(inner) => inner.removal(),
            _ => None,
        }
    }

    /// Generations along a direct line
    pub fn generations(&self) -> Option<u32> {
        match self {
            Kinship::Parent | Kinship::Child => Some(1),
            Kinship::Ancestor { generations } | Kinship::Descendant { generations } => {
                Some(*generations)
            }
            Kinship::InLaw(inner) => inner.generations(),
            _ => None,
        }
    }

    /// Generational direction, `None` for the self and unrelated sentinels
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Kinship::SelfRelation | Kinship::Unrelated => None,
            Kinship::Spouse | Kinship::Sibling => Some(Direction::Lateral),
            Kinship::Parent | Kinship::Ancestor { .. } | Kinship::AuntUncle { .. } => {
                Some(Direction::Ascending)
            }
            Kinship::Child | Kinship::Descendant { .. } | Kinship::NieceNephew { .. } => {
                Some(Direction::Descending)
            }
            Kinship::Cousin { direction, .. } => Some(*direction),
            Kinship::InLaw(inner) => inner.direction(),
        }
    }

    /// The same relationship seen from person 2
    ///
    /// In-law relationships are not symmetric in general, so they map to
    /// themselves with the inner kinship inverted.
    pub fn inverse(&self) -> Self {
        match self {
            Kinship::Parent => Kinship::Child,
            Kinship::Child => Kinship::Parent,
            Kinship::Ancestor { generations } => Kinship::Descendant {
                generations: *generations,
            },
            Kinship::Descendant { generations } => Kinship::Ancestor {
                generations: *generations,
            },
            Kinship::AuntUncle { removal } => Kinship::NieceNephew { removal: *removal },
            Kinship::NieceNephew { removal } => Kinship::AuntUncle { removal: *removal },
            Kinship::Cousin {
                degree,
                removal,
                direction,
            } => Kinship::Cousin {
                degree: *degree,
                removal: *removal,
                direction: direction.reversed(),
            },
            Kinship::InLaw(inner) => Kinship::InLaw(Box::new(inner.inverse())),
            other => other.clone(),
        }
    }

    /// Whether this relationship goes through a spouse
    pub fn is_in_law(&self) -> bool {
        matches!(self, Kinship::InLaw(_))
    }

    /// Whether any relationship (other than identity) was found
    pub fn is_related(&self) -> bool {
        !matches!(self, Kinship::Unrelated | Kinship::SelfRelation)
    }
}

impl fmt::Display for Kinship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&label::kinship_label(self))
    }
}

/// Outcome of one resolution query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipResult {
    /// Person 1
    pub from: PersonId,

    /// Person 2
    pub to: PersonId,

    /// How person 1 relates to person 2
    pub kinship: Kinship,

    /// People visited from person 1 to person 2, both ends included
    ///
    /// Empty when nothing was found.
    pub path: Vec<PersonId>,

    /// Nearest common ancestor, for collateral relationships
    pub common_ancestor: Option<PersonId>,
}

impl RelationshipResult {
    /// The self sentinel
    pub fn self_relation(id: PersonId) -> Self {
        Self {
            from: id.clone(),
            to: id.clone(),
            kinship: Kinship::SelfRelation,
            path: vec![id],
            common_ancestor: None,
        }
    }

    /// The "no relationship found" sentinel
    pub fn unrelated(from: PersonId, to: PersonId) -> Self {
        Self {
            from,
            to,
            kinship: Kinship::Unrelated,
            path: Vec::new(),
            common_ancestor: None,
        }
    }

    /// Canonical label for the kinship
    pub fn label(&self) -> String {
        self.kinship.to_string()
    }

    /// Whether a relationship (other than identity) was found
    pub fn is_related(&self) -> bool {
        self.kinship.is_related()
    }
}
