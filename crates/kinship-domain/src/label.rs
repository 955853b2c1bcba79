//! Label rendering for kinship descriptors
//!
//! Every function here is pure. Labels read as the noun in
//! "person 1 is the `<label>` of person 2".

use crate::{Kinship, RelationshipResult};

const ORDINALS: [&str; 10] = [
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
];

/// Spelled ordinal for 1 through 10, `"{n}th"` beyond
///
/// # Examples
///
/// ```
/// use kinship_domain::label::ordinal;
///
/// assert_eq!(ordinal(2), "second");
/// assert_eq!(ordinal(12), "12th");
/// ```
pub fn ordinal(n: u32) -> String {
    match n {
        1..=10 => ORDINALS[(n - 1) as usize].to_string(),
        _ => format!("{}th", n),
    }
}

/// "once", "twice", then "N times"
pub fn removal_phrase(n: u32) -> String {
    match n {
        1 => "once".to_string(),
        2 => "twice".to_string(),
        _ => format!("{} times", n),
    }
}

/// `n` repetitions of "great-"
pub fn great_prefix(n: u32) -> String {
    "great-".repeat(n as usize)
}

/// Canonical label for a kinship
pub fn kinship_label(kinship: &Kinship) -> String {
    match kinship {
        Kinship::SelfRelation => "self".to_string(),
        Kinship::Spouse => "spouse".to_string(),
        Kinship::Sibling => "sibling".to_string(),
        Kinship::Parent => "parent".to_string(),
        Kinship::Child => "child".to_string(),
        Kinship::Ancestor { generations } => lineal(*generations, "parent", "grandparent"),
        Kinship::Descendant { generations } => lineal(*generations, "child", "grandchild"),
        Kinship::AuntUncle { removal } => collateral(*removal, "aunt/uncle"),
        Kinship::NieceNephew { removal } => collateral(*removal, "niece/nephew"),
        Kinship::Cousin {
            degree, removal, ..
        } => {
            if *removal == 0 {
                format!("{} cousin", ordinal(*degree))
            } else {
                format!("{} cousin {} removed", ordinal(*degree), removal_phrase(*removal))
            }
        }
        Kinship::InLaw(inner) => format!("{}-in-law", kinship_label(inner)),
        Kinship::Unrelated => "no relationship found".to_string(),
    }
}

fn lineal(generations: u32, direct: &str, grand: &str) -> String {
    match generations {
        0 | 1 => direct.to_string(),
        n => format!("{}{}", great_prefix(n - 2), grand),
    }
}

fn collateral(removal: u32, base: &str) -> String {
    format!("{}{}", great_prefix(removal.saturating_sub(1)), base)
}

/// Render a result as a sentence, looking names up through `name_of`
///
/// # Examples
///
/// ```
/// use kinship_domain::{Kinship, PersonId, RelationshipResult};
/// use kinship_domain::label::describe;
///
/// let result = RelationshipResult {
///     from: PersonId::from("a"),
///     to: PersonId::from("b"),
///     kinship: Kinship::Parent,
///     path: vec![PersonId::from("a"), PersonId::from("b")],
///     common_ancestor: None,
/// };
/// let sentence = describe(&result, |id| id.as_str().to_uppercase());
/// assert_eq!(sentence, "A is the parent of B");
/// ```
pub fn describe<F>(result: &RelationshipResult, name_of: F) -> String
where
    F: Fn(&crate::PersonId) -> String,
{
    let first = name_of(&result.from);
    let second = name_of(&result.to);

    match &result.kinship {
        Kinship::SelfRelation => format!("{} is the same person as {}", first, second),
        Kinship::Unrelated => format!("No relationship found between {} and {}", first, second),
        kinship => format!("{} is the {} of {}", first, kinship_label(kinship), second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, PersonId};

    fn cousin(degree: u32, removal: u32) -> Kinship {
        Kinship::Cousin {
            degree,
            removal,
            direction: Direction::Lateral,
        }
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(ordinal(1), "first");
        assert_eq!(ordinal(10), "tenth");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(21), "21th");
    }

    #[test]
    fn test_lineal_labels() {
        assert_eq!(kinship_label(&Kinship::Ancestor { generations: 2 }), "grandparent");
        assert_eq!(kinship_label(&Kinship::Ancestor { generations: 3 }), "great-grandparent");
        assert_eq!(
            kinship_label(&Kinship::Descendant { generations: 5 }),
            "great-great-great-grandchild"
        );
    }

    #[test]
    fn test_collateral_labels() {
        assert_eq!(kinship_label(&Kinship::AuntUncle { removal: 1 }), "aunt/uncle");
        assert_eq!(kinship_label(&Kinship::AuntUncle { removal: 2 }), "great-aunt/uncle");
        assert_eq!(
            kinship_label(&Kinship::NieceNephew { removal: 4 }),
            "great-great-great-niece/nephew"
        );
    }

    #[test]
    fn test_cousin_labels() {
        assert_eq!(kinship_label(&cousin(1, 0)), "first cousin");
        assert_eq!(kinship_label(&cousin(1, 1)), "first cousin once removed");
        assert_eq!(kinship_label(&cousin(2, 2)), "second cousin twice removed");
        assert_eq!(kinship_label(&cousin(3, 3)), "third cousin 3 times removed");
    }

    #[test]
    fn test_in_law_label() {
        let label = kinship_label(&Kinship::InLaw(Box::new(Kinship::Sibling)));
        assert_eq!(label, "sibling-in-law");
        let label = kinship_label(&Kinship::InLaw(Box::new(cousin(1, 0))));
        assert_eq!(label, "first cousin-in-law");
    }

    #[test]
    fn test_describe_sentinels() {
        let me = RelationshipResult::self_relation(PersonId::from("ann"));
        assert_eq!(describe(&me, |id| id.to_string()), "ann is the same person as ann");

        let none = RelationshipResult::unrelated("ann".into(), "bo".into());
        assert_eq!(
            describe(&none, |id| id.to_string()),
            "No relationship found between ann and bo"
        );
    }
}
