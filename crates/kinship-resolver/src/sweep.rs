//! All-pairs sweep from one origin person

use crate::graph::PersonIndex;
use crate::resolver::KinshipResolver;
use kinship_domain::{PersonId, RelationshipResult};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

impl KinshipResolver<'_> {
    /// Relationship of `origin` to every other person in the graph
    ///
    /// The origin's ancestors are computed once and shared by every target.
    /// Each target only reads the graph and fills its own slot, so targets
    /// run on the rayon pool when `parallel_sweep` is set. An unknown origin
    /// yields an empty map.
    pub fn sweep(&self, origin: &PersonId) -> BTreeMap<PersonId, RelationshipResult> {
        let graph = self.graph();
        let Some(origin_idx) = graph.index_of(origin) else {
            debug!(origin = %origin, "Sweep origin not in graph");
            return BTreeMap::new();
        };

        let ancestors = self.ancestors(origin_idx);
        let targets: Vec<PersonIndex> = (0..graph.len()).filter(|&idx| idx != origin_idx).collect();

        let results: Vec<RelationshipResult> = if self.config().parallel_sweep {
            targets
                .par_iter()
                .map(|&target| self.resolve_indexed(origin_idx, &ancestors, target))
                .collect()
        } else {
            targets
                .iter()
                .map(|&target| self.resolve_indexed(origin_idx, &ancestors, target))
                .collect()
        };

        debug!(
            origin = graph.name_at(origin_idx),
            targets = results.len(),
            related = results.iter().filter(|r| r.is_related()).count(),
            "Sweep finished"
        );

        results
            .into_iter()
            .map(|result| (result.to.clone(), result))
            .collect()
    }

    /// Like [`sweep`](Self::sweep), keeping only people actually related
    pub fn relatives(&self, origin: &PersonId) -> BTreeMap<PersonId, RelationshipResult> {
        self.sweep(origin)
            .into_iter()
            .filter(|(_, result)| result.is_related())
            .collect()
    }
}
