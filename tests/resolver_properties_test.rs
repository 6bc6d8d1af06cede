//! Path resolution properties over the Dijkstra finder.

mod common;

use common::fixtures::{diamond, graph_of, single_edge, two_islands, unit_chain};
use common::mock::RecordingFinder;
use multipath::adapters::shortest_path::dijkstra::DijkstraFinder;
use multipath::domain::error::ResolveError;
use multipath::domain::path::{PathOutcome, extract_all_edges};
use multipath::domain::resolver::PathResolver;

fn edge_ids(outcome: &PathOutcome) -> Vec<u64> {
    extract_all_edges(outcome.paths())
        .iter()
        .map(|e| e.id)
        .collect()
}

#[test]
fn test_edge_to_itself_is_empty_and_weightless() {
    let graph = single_edge();
    let outcome = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[1, 1])
        .unwrap();

    let paths = outcome.paths();
    assert_eq!(paths.len(), 1);
    assert!(paths[0].path.is_empty());
    assert_eq!(paths[0].weight, 0.0);
    assert_eq!(paths[0].from_edge.id, 1);
    assert_eq!(paths[0].to_edge.id, 1);
}

#[test]
fn test_flattening_does_not_repeat_shared_edge() {
    let graph = single_edge();
    let outcome = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[1, 1])
        .unwrap();
    assert_eq!(edge_ids(&outcome), vec![1]);
}

#[test]
fn test_disconnected_edges_have_no_path() {
    let graph = two_islands();
    let outcome = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[1, 9])
        .unwrap();
    assert_eq!(outcome, PathOutcome::NoPath);
    assert!(edge_ids(&outcome).is_empty());
}

#[test]
fn test_unit_chain_end_to_end() {
    let graph = unit_chain();
    let outcome = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[12, 34])
        .unwrap();

    let paths = outcome.paths();
    assert_eq!(paths.len(), 1);
    let leg = &paths[0];

    // one intermediate hop (B–C) separates A–B from C–D
    assert_eq!(leg.path.len(), 1);
    assert_eq!(leg.weight, 1.0);
    assert_eq!(leg.weight, leg.path.iter().map(|c| c.weight).sum::<f64>());
    assert!(leg.is_connected());
    assert_eq!((leg.path[0].start, leg.path[0].end), (2, 3));

    // flattened, the selection walks A -> B -> C -> D
    assert_eq!(edge_ids(&outcome), vec![12, 23, 34]);
}

#[test]
fn test_unit_chain_reverse_direction() {
    let graph = unit_chain();
    let outcome = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[34, 12])
        .unwrap();
    let leg = &outcome.paths()[0];
    assert_eq!((leg.path[0].start, leg.path[0].end), (3, 2));
    assert_eq!(edge_ids(&outcome), vec![34, 23, 12]);
}

#[test]
fn test_resolver_takes_short_branch() {
    let graph = diamond();
    let outcome = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[100, 200])
        .unwrap();
    assert_eq!(outcome.total_weight(), Some(2.0));
    assert_eq!(edge_ids(&outcome), vec![100, 12, 24, 200]);
    assert!(outcome.paths()[0].is_connected());
}

#[test]
fn test_step_counts_other_than_two_are_invalid() {
    let graph = unit_chain();
    let finder = RecordingFinder::returning(None);
    let resolver = PathResolver::new(&finder);

    assert_eq!(
        resolver.resolve(&graph, &[12]).unwrap_err(),
        ResolveError::InvalidStepCount { got: 1 }
    );
    assert_eq!(
        resolver.resolve(&graph, &[12, 23, 34]).unwrap_err(),
        ResolveError::InvalidStepCount { got: 3 }
    );
    assert_eq!(finder.call_count(), 0);
}

#[test]
fn test_unknown_edge_is_an_error_not_no_path() {
    let graph = unit_chain();
    let err = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[12, 999])
        .unwrap_err();
    assert_eq!(err, ResolveError::UnknownEdge(999));
}

#[test]
fn test_finder_gets_both_endpoint_pairs() {
    let graph = unit_chain();
    let finder = RecordingFinder::returning(None);
    let outcome = PathResolver::new(&finder)
        .resolve(&graph, &[12, 34])
        .unwrap();
    assert_eq!(outcome, PathOutcome::NoPath);
    let calls = finder.calls.lock().unwrap();
    assert_eq!(calls.as_slice(), &[(vec![1, 2], vec![3, 4])]);
}

#[test]
fn test_adjacent_edges_resolve_without_steps() {
    let graph = graph_of(&[(1, 1, 2, 3.0), (2, 2, 3, 3.0)]);
    let outcome = PathResolver::new(&DijkstraFinder)
        .resolve(&graph, &[1, 2])
        .unwrap();
    assert!(outcome.paths()[0].path.is_empty());
    assert_eq!(edge_ids(&outcome), vec![1, 2]);
}
