//! Person module - the nodes of a family graph

use std::fmt;
use thiserror::Error;

/// Errors raised when parsing identifiers from untrusted input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The identifier was empty or whitespace only
    #[error("Person identifier must not be empty")]
    Empty,
}

/// Opaque, stable identifier for a person
///
/// Identifiers are owned by whatever system stores the family tree; this
/// crate only compares and orders them. Lexical ordering is the tie-break
/// order used whenever the resolver has to choose between equally good
/// candidates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Parse an identifier from untrusted input, trimming whitespace
    ///
    /// # Examples
    ///
    /// ```
    /// use kinship_domain::PersonId;
    ///
    /// let id = PersonId::parse("  p-42 ").unwrap();
    /// assert_eq!(id.as_str(), "p-42");
    /// assert!(PersonId::parse("   ").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::str::FromStr for PersonId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A person in a family tree
///
/// Only identity and a preferred display name matter for kinship; every
/// other attribute stays with the system that owns the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Preferred display name
    pub display_name: String,
}

impl Person {
    /// Create a new person
    pub fn new(id: impl Into<PersonId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_ordering() {
        let a = PersonId::from("alice");
        let b = PersonId::from("bob");

        assert!(a < b);
        assert!(b > a);
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(PersonId::parse(""), Err(IdError::Empty));
        assert_eq!(PersonId::parse(" \t"), Err(IdError::Empty));
        assert!("grandma".parse::<PersonId>().is_ok());
    }

    #[test]
    fn test_person_new() {
        let person = Person::new("p1", "Ada Lovelace");
        assert_eq!(person.id.as_str(), "p1");
        assert_eq!(person.display_name, "Ada Lovelace");
    }
}
