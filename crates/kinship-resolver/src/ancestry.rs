//! Ancestor Search
//!
//! Breadth-first walk strictly upward through the parent index. Each
//! ancestor is recorded at the first (minimum) generation it is reached,
//! together with the person it was reached from, so the upward path can be
//! rebuilt later. A visited set guarantees termination on cyclic data.

use crate::graph::{FamilyGraph, PersonIndex};
use kinship_domain::PersonId;
use std::collections::{BTreeMap, HashSet, VecDeque};
use tracing::warn;

/// One ancestor found by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorEntry {
    /// Parent-edge hops from the origin (1 = parent)
    pub generation: u32,

    /// The person one generation below on the first path found
    pub via: PersonIndex,
}

/// Minimum generation distance from an origin to each of its ancestors
///
/// Never contains the origin itself. Iterates in index order, which is
/// identifier order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorMap {
    origin: PersonIndex,
    entries: BTreeMap<PersonIndex, AncestorEntry>,
}

impl AncestorMap {
    /// Empty map for `origin`
    pub fn empty(origin: PersonIndex) -> Self {
        Self {
            origin,
            entries: BTreeMap::new(),
        }
    }

    /// The person the search started from
    pub fn origin(&self) -> PersonIndex {
        self.origin
    }

    /// Generation distance to `ancestor`, if it is one
    pub fn generation(&self, ancestor: PersonIndex) -> Option<u32> {
        self.entries.get(&ancestor).map(|entry| entry.generation)
    }

    /// Whether `idx` is an ancestor of the origin
    pub fn contains(&self, idx: PersonIndex) -> bool {
        self.entries.contains_key(&idx)
    }

    /// Number of ancestors found
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no ancestor was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(ancestor, generation)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (PersonIndex, u32)> + '_ {
        self.entries
            .iter()
            .map(|(&idx, entry)| (idx, entry.generation))
    }

    /// Upward path from the origin to `ancestor`, both ends included
    pub fn path_to(&self, ancestor: PersonIndex) -> Option<Vec<PersonIndex>> {
        let mut entry = self.entries.get(&ancestor)?;
        let mut path = vec![ancestor];

        loop {
            path.push(entry.via);
            if entry.via == self.origin {
                break;
            }
            entry = self.entries.get(&entry.via)?;
        }

        path.reverse();
        Some(path)
    }

    /// Resolve indices back to identifiers, keyed by identifier
    pub fn to_ids(&self, graph: &FamilyGraph) -> BTreeMap<PersonId, u32> {
        self.iter()
            .map(|(idx, generation)| (graph.id_of(idx).clone(), generation))
            .collect()
    }
}

/// Find every ancestor of `origin`
///
/// `max_generations` stops the walk after that many hops. An `origin`
/// outside the graph yields an empty map.
pub fn ancestors(
    graph: &FamilyGraph,
    origin: PersonIndex,
    max_generations: Option<u32>,
) -> AncestorMap {
    let mut map = AncestorMap::empty(origin);
    if origin >= graph.len() {
        return map;
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut cycle_detected = false;

    visited.insert(origin);
    queue.push_back((origin, 0u32));

    while let Some((current, generation)) = queue.pop_front() {
        if max_generations.is_some_and(|limit| generation >= limit) {
            continue;
        }

        for &parent in graph.parents(current) {
            if parent == origin {
                cycle_detected = true;
                continue;
            }
            if visited.insert(parent) {
                map.entries.insert(
                    parent,
                    AncestorEntry {
                        generation: generation + 1,
                        via: current,
                    },
                );
                queue.push_back((parent, generation + 1));
            }
        }
    }

    if cycle_detected {
        warn!(
            person = %graph.id_of(origin),
            "Parent links loop back to the person; ancestry data is cyclic"
        );
    }

    map
}
