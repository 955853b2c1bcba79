//! Graph Builder
//!
//! Turns a flat list of people and relationship edges into a read-only,
//! index-addressed snapshot with four adjacency indices: parent to
//! children, child to parents, spouse to spouses and sibling to siblings.
//!
//! Identifiers are assigned dense indices in sorted identifier order, and
//! every adjacency list is sorted and de-duplicated, so the same input in
//! any order produces an identical graph.

use kinship_domain::{FamilySource, Person, PersonId, RelationshipEdge, RelationshipKind};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Dense index of a person inside one [`FamilyGraph`]
pub type PersonIndex = usize;

/// Counters collected while building a graph
///
/// The builder never fails; edges it cannot use are counted here instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// People in the graph (listed or referenced by an indexed edge)
    pub people: usize,

    /// Edges that made it into the indices
    pub edges_indexed: usize,

    /// Edges skipped because their kind is not recognized
    pub unknown_kind: usize,

    /// Edges skipped because both ends name the same person
    pub self_referential: usize,

    /// Edges skipped because an end is missing from the people list
    pub dangling: usize,

    /// People listed more than once (the first display name wins)
    pub duplicate_people: usize,
}

impl BuildReport {
    /// Total edges skipped for any reason
    pub fn skipped(&self) -> usize {
        self.unknown_kind + self.self_referential + self.dangling
    }

    /// One-line summary for logs and the CLI
    pub fn summary(&self) -> String {
        format!(
            "{} people, {} edges indexed, {} skipped \
             ({} unknown kind, {} self-referential, {} dangling), {} duplicate people",
            self.people,
            self.edges_indexed,
            self.skipped(),
            self.unknown_kind,
            self.self_referential,
            self.dangling,
            self.duplicate_people,
        )
    }
}

/// Read-only family graph snapshot
///
/// Build once per snapshot and share freely between query threads; any
/// change to the underlying edges means building a new graph.
#[derive(Debug, Clone)]
pub struct FamilyGraph {
    /// Mapping from dense index back to identifier
    index_to_person: Vec<PersonId>,
    /// Mapping from identifier to dense index
    person_to_index: HashMap<PersonId, PersonIndex>,
    /// Display names, when the person was listed
    names: Vec<Option<String>>,

    parents: Vec<Vec<PersonIndex>>,
    children: Vec<Vec<PersonIndex>>,
    spouses: Vec<Vec<PersonIndex>>,
    siblings: Vec<Vec<PersonIndex>>,

    report: BuildReport,
}

impl FamilyGraph {
    /// Build a graph from edges alone
    ///
    /// Every identifier mentioned by an indexed edge becomes a person.
    pub fn from_edges(edges: &[RelationshipEdge]) -> Self {
        Self::assemble(None, edges)
    }

    /// Build a graph from people and edges
    ///
    /// Edges naming a person absent from `people` are skipped.
    pub fn build(people: &[Person], edges: &[RelationshipEdge]) -> Self {
        Self::assemble(Some(people), edges)
    }

    /// Build a graph from any [`FamilySource`]
    pub fn from_source<S: FamilySource + ?Sized>(source: &S) -> Self {
        Self::build(&source.people(), &source.edges())
    }

    fn assemble(people: Option<&[Person]>, edges: &[RelationshipEdge]) -> Self {
        let mut report = BuildReport::default();

        let mut names: BTreeMap<PersonId, String> = BTreeMap::new();
        if let Some(people) = people {
            for person in people {
                if names.contains_key(&person.id) {
                    report.duplicate_people += 1;
                    continue;
                }
                names.insert(person.id.clone(), person.display_name.clone());
            }
        }

        let mut accepted: Vec<&RelationshipEdge> = Vec::with_capacity(edges.len());
        for edge in edges {
            if !edge.kind.is_recognized() {
                report.unknown_kind += 1;
                continue;
            }
            if edge.is_self_referential() {
                report.self_referential += 1;
                continue;
            }
            if people.is_some()
                && (!names.contains_key(&edge.person_a) || !names.contains_key(&edge.person_b))
            {
                report.dangling += 1;
                continue;
            }
            accepted.push(edge);
        }

        let mut ids: BTreeSet<&PersonId> = names.keys().collect();
        for edge in &accepted {
            ids.insert(&edge.person_a);
            ids.insert(&edge.person_b);
        }

        let index_to_person: Vec<PersonId> = ids.into_iter().cloned().collect();
        let person_to_index: HashMap<PersonId, PersonIndex> = index_to_person
            .iter()
            .enumerate()
            .map(|(idx, id)| (id.clone(), idx))
            .collect();
        let node_count = index_to_person.len();

        let mut parents = vec![Vec::new(); node_count];
        let mut children = vec![Vec::new(); node_count];
        let mut spouses = vec![Vec::new(); node_count];
        let mut siblings = vec![Vec::new(); node_count];

        for edge in &accepted {
            let a = person_to_index[&edge.person_a];
            let b = person_to_index[&edge.person_b];
            match edge.kind {
                RelationshipKind::ParentChild => {
                    children[a].push(b);
                    parents[b].push(a);
                }
                RelationshipKind::Spouse => {
                    spouses[a].push(b);
                    spouses[b].push(a);
                }
                RelationshipKind::Sibling => {
                    siblings[a].push(b);
                    siblings[b].push(a);
                }
                RelationshipKind::Unknown => {}
            }
        }

        for list in parents
            .iter_mut()
            .chain(children.iter_mut())
            .chain(spouses.iter_mut())
            .chain(siblings.iter_mut())
        {
            list.sort_unstable();
            list.dedup();
        }

        let names: Vec<Option<String>> = index_to_person
            .iter()
            .map(|id| names.get(id).cloned())
            .collect();

        report.people = node_count;
        report.edges_indexed = accepted.len();

        debug!(
            people = report.people,
            edges_indexed = report.edges_indexed,
            skipped = report.skipped(),
            "Built family graph"
        );

        Self {
            index_to_person,
            person_to_index,
            names,
            parents,
            children,
            spouses,
            siblings,
            report,
        }
    }

    /// Number of people in the graph
    pub fn len(&self) -> usize {
        self.index_to_person.len()
    }

    /// Whether the graph has no people
    pub fn is_empty(&self) -> bool {
        self.index_to_person.is_empty()
    }

    /// Counters collected while building
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Look up the index of a person
    pub fn index_of(&self, id: &PersonId) -> Option<PersonIndex> {
        self.person_to_index.get(id).copied()
    }

    /// Whether the person appears in the graph
    pub fn contains(&self, id: &PersonId) -> bool {
        self.person_to_index.contains_key(id)
    }

    /// Identifier at `idx`
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    pub fn id_of(&self, idx: PersonIndex) -> &PersonId {
        &self.index_to_person[idx]
    }

    /// Identifiers in index (sorted) order
    pub fn people(&self) -> impl Iterator<Item = &PersonId> + '_ {
        self.index_to_person.iter()
    }

    /// Display name at `idx`, falling back to the identifier
    pub fn name_at(&self, idx: PersonIndex) -> &str {
        self.names[idx]
            .as_deref()
            .unwrap_or_else(|| self.index_to_person[idx].as_str())
    }

    /// Display name for `id`, falling back to the identifier
    pub fn display_name(&self, id: &PersonId) -> String {
        match self.index_of(id) {
            Some(idx) => self.name_at(idx).to_string(),
            None => id.to_string(),
        }
    }

    /// Parents of the person at `idx`, sorted
    pub fn parents(&self, idx: PersonIndex) -> &[PersonIndex] {
        &self.parents[idx]
    }

    /// Children of the person at `idx`, sorted
    pub fn children(&self, idx: PersonIndex) -> &[PersonIndex] {
        &self.children[idx]
    }

    /// Spouses of the person at `idx`, sorted
    pub fn spouses(&self, idx: PersonIndex) -> &[PersonIndex] {
        &self.spouses[idx]
    }

    /// Siblings (by explicit edge) of the person at `idx`, sorted
    pub fn siblings(&self, idx: PersonIndex) -> &[PersonIndex] {
        &self.siblings[idx]
    }

    /// Whether `parent` is recorded as a parent of `child`
    pub fn is_parent_of(&self, parent: PersonIndex, child: PersonIndex) -> bool {
        self.parents[child].binary_search(&parent).is_ok()
    }

    /// Whether `a` and `b` share a spouse edge
    pub fn are_spouses(&self, a: PersonIndex, b: PersonIndex) -> bool {
        self.spouses[a].binary_search(&b).is_ok()
    }

    /// Whether `a` and `b` share a sibling edge
    pub fn are_siblings(&self, a: PersonIndex, b: PersonIndex) -> bool {
        self.siblings[a].binary_search(&b).is_ok()
    }

    /// Identifiers of the parents of `id` (empty for unknown people)
    pub fn parents_of(&self, id: &PersonId) -> Vec<&PersonId> {
        self.map_ids(id, Self::parents)
    }

    /// Identifiers of the children of `id` (empty for unknown people)
    pub fn children_of(&self, id: &PersonId) -> Vec<&PersonId> {
        self.map_ids(id, Self::children)
    }

    /// Identifiers of the spouses of `id` (empty for unknown people)
    pub fn spouses_of(&self, id: &PersonId) -> Vec<&PersonId> {
        self.map_ids(id, Self::spouses)
    }

    /// Identifiers of the siblings of `id` (empty for unknown people)
    pub fn siblings_of(&self, id: &PersonId) -> Vec<&PersonId> {
        self.map_ids(id, Self::siblings)
    }

    fn map_ids<'a>(
        &'a self,
        id: &PersonId,
        index: fn(&'a Self, PersonIndex) -> &'a [PersonIndex],
    ) -> Vec<&'a PersonId> {
        match self.index_of(id) {
            Some(idx) => index(self, idx).iter().map(|&i| self.id_of(i)).collect(),
            None => Vec::new(),
        }
    }
}
