//! Property tests for kinship-resolver over randomly generated families

use kinship_domain::{Kinship, PersonId, RelationshipEdge, RelationshipKind};
use kinship_resolver::{ancestry, FamilyGraph, KinshipResolver, ResolverConfig};
use proptest::prelude::*;

fn person(i: usize) -> PersonId {
    PersonId::from(format!("p{}", i))
}

fn kind_for(tag: u8) -> RelationshipKind {
    match tag % 4 {
        0 | 1 => RelationshipKind::ParentChild,
        2 => RelationshipKind::Spouse,
        _ => RelationshipKind::Sibling,
    }
}

/// Arbitrary edges, cycles allowed
fn any_edges() -> impl Strategy<Value = Vec<RelationshipEdge>> {
    prop::collection::vec((0usize..10, 0usize..10, any::<u8>()), 0..25).prop_map(|raw| {
        raw.into_iter()
            .map(|(a, b, tag)| RelationshipEdge::new(person(a), person(b), kind_for(tag)))
            .collect()
    })
}

/// Edges whose parent links always point from a lower to a higher number
fn acyclic_edges() -> impl Strategy<Value = Vec<RelationshipEdge>> {
    prop::collection::vec((0usize..10, 0usize..10, any::<u8>()), 0..25).prop_map(|raw| {
        raw.into_iter()
            .map(|(a, b, tag)| {
                let (lo, hi) = (a.min(b), a.max(b));
                RelationshipEdge::new(person(lo), person(hi), kind_for(tag))
            })
            .collect()
    })
}

proptest! {
    /// Property: everyone is "self" to themselves, known or not
    #[test]
    fn test_self_property(edges in any_edges(), who in 0usize..12) {
        let graph = FamilyGraph::from_edges(&edges);
        let resolver = KinshipResolver::with_defaults(&graph);
        let result = resolver.resolve(&person(who), &person(who));
        prop_assert_eq!(result.kinship, Kinship::SelfRelation);
    }

    /// Property: blood relationships read as duals from the other side
    #[test]
    fn test_direction_duality(edges in acyclic_edges(), a in 0usize..10, b in 0usize..10) {
        prop_assume!(a != b);
        let graph = FamilyGraph::from_edges(&edges);
        let resolver = KinshipResolver::new(&graph, ResolverConfig::blood_only());

        let forward = resolver.resolve(&person(a), &person(b));
        let backward = resolver.resolve(&person(b), &person(a));

        prop_assert_eq!(forward.kinship.inverse(), backward.kinship.clone());
        prop_assert_eq!(forward.label().contains("cousin"), backward.label().contains("cousin"));
        if forward.kinship.degree().is_some() {
            prop_assert_eq!(forward.kinship.degree(), backward.kinship.degree());
            prop_assert_eq!(forward.kinship.removal(), backward.kinship.removal());
        }
    }

    /// Property: duality still holds once in-laws are resolved
    #[test]
    fn test_direction_duality_with_in_laws(
        edges in acyclic_edges(),
        a in 0usize..10,
        b in 0usize..10,
    ) {
        prop_assume!(a != b);
        let graph = FamilyGraph::from_edges(&edges);
        let resolver = KinshipResolver::with_defaults(&graph);

        let forward = resolver.resolve(&person(a), &person(b));
        let backward = resolver.resolve(&person(b), &person(a));

        prop_assert_eq!(forward.kinship.inverse(), backward.kinship.clone());
        prop_assert_eq!(forward.kinship.is_in_law(), backward.kinship.is_in_law());
        let mut reversed = backward.path.clone();
        reversed.reverse();
        prop_assert_eq!(forward.path, reversed);
    }

    /// Property: edge order never changes an answer
    #[test]
    fn test_permutation_idempotence(
        (edges, shuffled) in any_edges().prop_flat_map(|edges| {
            let shuffled = Just(edges.clone()).prop_shuffle();
            (Just(edges), shuffled)
        }),
        origin in 0usize..10,
    ) {
        let graph = FamilyGraph::from_edges(&edges);
        let rebuilt = FamilyGraph::from_edges(&shuffled);

        let first =
            KinshipResolver::new(&graph, ResolverConfig::sequential()).sweep(&person(origin));
        let second =
            KinshipResolver::new(&rebuilt, ResolverConfig::sequential()).sweep(&person(origin));
        prop_assert_eq!(first, second);
    }

    /// Property: ancestor search terminates and never reports the origin
    #[test]
    fn test_cyclic_ancestry_terminates(edges in any_edges()) {
        let graph = FamilyGraph::from_edges(&edges);
        for idx in 0..graph.len() {
            let map = ancestry::ancestors(&graph, idx, None);
            prop_assert!(!map.contains(idx));
            prop_assert!(map.len() < graph.len());
            for (ancestor, generation) in map.iter() {
                let path = map.path_to(ancestor).unwrap();
                prop_assert_eq!(path.len() as u32, generation + 1);
            }
        }
    }

    /// Property: every resolved path starts and ends at the queried people
    #[test]
    fn test_paths_connect_endpoints(edges in any_edges(), origin in 0usize..10) {
        let graph = FamilyGraph::from_edges(&edges);
        let resolver = KinshipResolver::with_defaults(&graph);

        for (target, result) in resolver.sweep(&person(origin)) {
            if result.is_related() {
                prop_assert_eq!(result.path.first(), Some(&person(origin)));
                prop_assert_eq!(result.path.last(), Some(&target));
            } else {
                prop_assert!(result.path.is_empty());
            }
        }
    }
}
