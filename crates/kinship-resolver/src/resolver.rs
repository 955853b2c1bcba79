//! Relationship Resolver and In-Law Resolver
//!
//! Resolution is a fixed decision tree, first match wins:
//!
//! 1. identical identifiers: self
//! 2. spouse edge
//! 3. sibling edge
//! 4. parent/child edge
//! 5. one person is a strict ancestor of the other
//! 6. nearest common ancestor: sibling line (aunt/uncle, niece/nephew) or cousins
//! 7. one spousal hop on either side, relabelled as an in-law
//!
//! For step 7 the spouses of both people are pooled and tried in identifier
//! order, so swapping the query swaps the result for its inverse. A spouse's
//! spouse is never an in-law.
//!
//! Steps 2 to 6 make up the blood search. The in-law step only ever calls
//! the blood search, never itself, so at most one spousal hop is taken and
//! the two sides can never recurse into each other.

use crate::ancestry::{self, AncestorMap};
use crate::config::ResolverConfig;
use crate::graph::{FamilyGraph, PersonIndex};
use kinship_domain::label;
use kinship_domain::{Direction, Kinship, PersonId, RelationshipResult};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// A relationship found inside the graph, still in index space
#[derive(Debug, Clone)]
struct Found {
    kinship: Kinship,
    path: Vec<PersonIndex>,
    common_ancestor: Option<PersonIndex>,
}

impl Found {
    fn direct(kinship: Kinship, a: PersonIndex, b: PersonIndex) -> Self {
        Self {
            kinship,
            path: vec![a, b],
            common_ancestor: None,
        }
    }

    fn into_result(
        self,
        graph: &FamilyGraph,
        a: PersonIndex,
        b: PersonIndex,
    ) -> RelationshipResult {
        RelationshipResult {
            from: graph.id_of(a).clone(),
            to: graph.id_of(b).clone(),
            kinship: self.kinship,
            path: self.path.into_iter().map(|i| graph.id_of(i).clone()).collect(),
            common_ancestor: self.common_ancestor.map(|i| graph.id_of(i).clone()),
        }
    }
}

/// Which side of the query a spousal hop leaves from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Hop {
    FromFirst,
    FromSecond,
}

/// Resolves kinship labels against one [`FamilyGraph`] snapshot
///
/// Holds only shared references, so one resolver can serve many threads.
///
/// # Examples
///
/// ```
/// use kinship_domain::RelationshipEdge;
/// use kinship_resolver::{FamilyGraph, KinshipResolver};
///
/// let graph = FamilyGraph::from_edges(&[
///     RelationshipEdge::parent_child("gran", "mum"),
///     RelationshipEdge::parent_child("gran", "aunt"),
///     RelationshipEdge::parent_child("mum", "me"),
///     RelationshipEdge::parent_child("aunt", "cousin"),
/// ]);
/// let resolver = KinshipResolver::with_defaults(&graph);
///
/// let result = resolver.resolve(&"me".into(), &"cousin".into());
/// assert_eq!(result.label(), "first cousin");
/// ```
#[derive(Debug, Clone)]
pub struct KinshipResolver<'g> {
    graph: &'g FamilyGraph,
    config: ResolverConfig,
}

impl<'g> KinshipResolver<'g> {
    /// Create a resolver with the given configuration
    pub fn new(graph: &'g FamilyGraph, config: ResolverConfig) -> Self {
        Self { graph, config }
    }

    /// Create a resolver with default configuration
    pub fn with_defaults(graph: &'g FamilyGraph) -> Self {
        Self::new(graph, ResolverConfig::default())
    }

    /// The graph being queried
    pub fn graph(&self) -> &'g FamilyGraph {
        self.graph
    }

    /// Active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// How `a` relates to `b` ("a is the <kinship> of b")
    ///
    /// Unknown identifiers resolve to [`Kinship::Unrelated`]; this never
    /// fails.
    pub fn resolve(&self, a: &PersonId, b: &PersonId) -> RelationshipResult {
        if a == b {
            return RelationshipResult::self_relation(a.clone());
        }

        let (Some(ia), Some(ib)) = (self.graph.index_of(a), self.graph.index_of(b)) else {
            trace!(from = %a, to = %b, "Unknown person in query");
            return RelationshipResult::unrelated(a.clone(), b.clone());
        };

        let ancestors_a = self.ancestors(ia);
        self.resolve_indexed(ia, &ancestors_a, ib)
    }

    /// Resolve with the ancestors of `a` already computed
    pub(crate) fn resolve_indexed(
        &self,
        a: PersonIndex,
        ancestors_a: &AncestorMap,
        b: PersonIndex,
    ) -> RelationshipResult {
        if a == b {
            return RelationshipResult::self_relation(self.graph.id_of(a).clone());
        }

        let found = self.blood(a, ancestors_a, b).or_else(|| {
            if self.config.resolve_in_laws {
                self.in_law(a, ancestors_a, b)
            } else {
                None
            }
        });

        match found {
            Some(found) => {
                trace!(
                    from = self.graph.name_at(a),
                    to = self.graph.name_at(b),
                    kinship = %found.kinship,
                    "Resolved relationship"
                );
                found.into_result(self.graph, a, b)
            }
            None => {
                trace!(
                    from = self.graph.name_at(a),
                    to = self.graph.name_at(b),
                    "No relationship found"
                );
                RelationshipResult::unrelated(
                    self.graph.id_of(a).clone(),
                    self.graph.id_of(b).clone(),
                )
            }
        }
    }

    /// Ancestor map for the person at `idx`, honoring the generation limit
    pub fn ancestors(&self, idx: PersonIndex) -> AncestorMap {
        ancestry::ancestors(self.graph, idx, self.config.max_generations)
    }

    /// Ancestors of `id` as `(ancestor, generation)`, nearest first
    ///
    /// Within a generation, entries are in identifier order. Unknown people
    /// have no ancestors.
    pub fn ancestors_of(&self, id: &PersonId) -> Vec<(PersonId, u32)> {
        let Some(idx) = self.graph.index_of(id) else {
            return Vec::new();
        };

        let mut list: Vec<(PersonId, u32)> = self
            .ancestors(idx)
            .to_ids(self.graph)
            .into_iter()
            .collect();
        list.sort_by(|(id_a, gen_a), (id_b, gen_b)| {
            gen_a.cmp(gen_b).then_with(|| id_a.cmp(id_b))
        });
        list
    }

    /// Render a result as a sentence using display names from the graph
    pub fn describe(&self, result: &RelationshipResult) -> String {
        label::describe(result, |id| self.graph.display_name(id))
    }

    /// Steps 2 to 6: direct edges, lineal lines, common ancestors
    fn blood(&self, a: PersonIndex, ancestors_a: &AncestorMap, b: PersonIndex) -> Option<Found> {
        let graph = self.graph;

        if graph.are_spouses(a, b) {
            return Some(Found::direct(Kinship::Spouse, a, b));
        }
        if graph.are_siblings(a, b) {
            return Some(Found::direct(Kinship::Sibling, a, b));
        }
        if graph.is_parent_of(a, b) {
            return Some(Found::direct(Kinship::Parent, a, b));
        }
        if graph.is_parent_of(b, a) {
            return Some(Found::direct(Kinship::Child, a, b));
        }

        if let Some(generations) = ancestors_a.generation(b) {
            return Some(Found {
                kinship: lineal_descendant(generations),
                path: ancestors_a.path_to(b)?,
                common_ancestor: None,
            });
        }

        let ancestors_b = self.ancestors(b);
        if let Some(generations) = ancestors_b.generation(a) {
            let mut path = ancestors_b.path_to(a)?;
            path.reverse();
            return Some(Found {
                kinship: lineal_descendant(generations).inverse(),
                path,
                common_ancestor: None,
            });
        }

        let (ancestor, g1, g2) = nearest_common_ancestor(ancestors_a, &ancestors_b)?;
        debug!(
            from = graph.name_at(a),
            to = graph.name_at(b),
            ancestor = graph.name_at(ancestor),
            g1,
            g2,
            "Found nearest common ancestor"
        );

        let mut path = ancestors_a.path_to(ancestor)?;
        let mut down = ancestors_b.path_to(ancestor)?;
        down.pop();
        path.extend(down.into_iter().rev());

        Some(Found {
            kinship: collateral(g1, g2),
            path,
            common_ancestor: Some(ancestor),
        })
    }

    /// Step 7: one spousal hop through the lowest-id spouse that yields a match
    ///
    /// Spouses of both people are tried together in index order, so
    /// `resolve(b, a)` takes the same hop as `resolve(a, b)`.
    fn in_law(&self, a: PersonIndex, ancestors_a: &AncestorMap, b: PersonIndex) -> Option<Found> {
        let graph = self.graph;

        let mut hops: Vec<(PersonIndex, Hop)> = graph
            .spouses(a)
            .iter()
            .map(|&spouse| (spouse, Hop::FromFirst))
            .chain(graph.spouses(b).iter().map(|&spouse| (spouse, Hop::FromSecond)))
            .filter(|&(spouse, _)| spouse != a && spouse != b)
            .collect();
        hops.sort_unstable();

        hops.into_iter().find_map(|(spouse, hop)| match hop {
            // a is married to s, and s is <kinship> of b
            Hop::FromFirst => {
                let ancestors_spouse = self.ancestors(spouse);
                let inner = self.blood(spouse, &ancestors_spouse, b)?;
                wrap_in_law(inner, |path| path.insert(0, a))
            }
            // a is <kinship> of s, and s is married to b
            Hop::FromSecond => {
                let inner = self.blood(a, ancestors_a, spouse)?;
                wrap_in_law(inner, |path| path.push(b))
            }
        })
    }
}

/// Relabel a blood relationship found across one spouse edge
///
/// A spouse of a spouse would be a second spousal hop, so it is skipped.
fn wrap_in_law<F>(inner: Found, extend: F) -> Option<Found>
where
    F: FnOnce(&mut Vec<PersonIndex>),
{
    if matches!(inner.kinship, Kinship::Spouse) {
        return None;
    }

    let mut path = inner.path;
    extend(&mut path);

    Some(Found {
        kinship: Kinship::InLaw(Box::new(inner.kinship)),
        path,
        common_ancestor: inner.common_ancestor,
    })
}

/// Kinship of someone `generations` below their ancestor
fn lineal_descendant(generations: u32) -> Kinship {
    match generations {
        0 | 1 => Kinship::Child,
        generations => Kinship::Descendant { generations },
    }
}

/// Common ancestor minimizing `g1 + g2`, lowest index on ties
fn nearest_common_ancestor(
    ancestors_a: &AncestorMap,
    ancestors_b: &AncestorMap,
) -> Option<(PersonIndex, u32, u32)> {
    let mut best: Option<(PersonIndex, u32, u32)> = None;

    for (ancestor, g1) in ancestors_a.iter() {
        let Some(g2) = ancestors_b.generation(ancestor) else {
            continue;
        };
        let better = match best {
            Some((_, b1, b2)) => g1 + g2 < b1 + b2,
            None => true,
        };
        if better {
            best = Some((ancestor, g1, g2));
        }
    }

    best
}

/// Label for two people `g1` and `g2` generations below a common ancestor
fn collateral(g1: u32, g2: u32) -> Kinship {
    let removal = g1.abs_diff(g2);
    let direction = match g1.cmp(&g2) {
        Ordering::Less => Direction::Ascending,
        Ordering::Greater => Direction::Descending,
        Ordering::Equal => Direction::Lateral,
    };

    if g1.min(g2) == 1 {
        return match direction {
            Direction::Lateral => Kinship::Sibling,
            Direction::Ascending => Kinship::AuntUncle { removal },
            Direction::Descending => Kinship::NieceNephew { removal },
        };
    }

    Kinship::Cousin {
        degree: g1.min(g2) - 1,
        removal,
        direction,
    }
}
