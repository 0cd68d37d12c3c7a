use rondo_core::Node;
use rondo_graph::{canonical_pair, Graph};

fn four_cycle() -> Graph {
    let mut graph = Graph::new();
    let nodes = graph.add_nodes(["a", "b", "c", "d"]);
    assert_eq!(nodes.len(), 4);
    graph.add_edge(&nodes[0], &nodes[1]).unwrap();
    graph.add_edge(&nodes[1], &nodes[2]).unwrap();
    graph.add_edge(&nodes[2], &nodes[3]).unwrap();
    graph.add_edge(&nodes[3], &nodes[0]).unwrap();
    graph
}

#[test]
fn add_node_is_idempotent() {
    let mut graph = Graph::new();
    let first = graph.add_node("a").unwrap();
    let again = graph.add_node("a").unwrap();
    assert_eq!(first, again);
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn add_node_rejects_blank_labels_silently() {
    let mut graph = Graph::new();
    assert!(graph.add_node("").is_none());
    assert!(graph.add_node("   ").is_none());
    assert_eq!(graph.node_count(), 0);
}

#[test]
fn add_nodes_drops_invalid_entries() {
    let mut graph = Graph::new();
    let kept = graph.add_nodes(["a", "", "b", "  ", "c"]);
    let labels: Vec<&str> = kept.iter().map(Node::as_str).collect();
    assert_eq!(labels, vec!["a", "b", "c"]);
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn add_edge_returns_canonical_pair() {
    let mut graph = Graph::new();
    let a = graph.add_node("a").unwrap();
    let d = graph.add_node("d").unwrap();
    let pair = graph.add_edge(&d, &a).unwrap();
    assert_eq!(pair, (a.clone(), d.clone()));
    assert_eq!(pair, canonical_pair(&d, &a));
}

#[test]
fn add_edge_is_symmetric() {
    let mut graph = Graph::new();
    let a = graph.add_node("a").unwrap();
    let b = graph.add_node("b").unwrap();
    graph.add_edge(&a, &b).unwrap();
    assert!(graph.neighbors(&a).contains(&b));
    assert!(graph.neighbors(&b).contains(&a));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn add_edge_rejects_self_loops_and_duplicates() {
    let mut graph = Graph::new();
    let a = graph.add_node("a").unwrap();
    let b = graph.add_node("b").unwrap();
    graph.add_edge(&a, &b).unwrap();

    assert!(graph.add_edge(&a, &a).is_none());
    assert!(graph.add_edge(&a, &b).is_none());
    assert!(graph.add_edge(&b, &a).is_none());

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges(), vec![(a, b)]);
}

#[test]
fn add_edge_requires_known_endpoints() {
    let mut graph = Graph::new();
    let a = graph.add_node("a").unwrap();
    let ghost = Node::new("ghost").unwrap();

    assert!(graph.add_edge(&a, &ghost).is_none());
    assert!(graph.add_edge(&ghost, &a).is_none());

    // A failed insertion must not create phantom nodes or half-edges.
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.neighbors(&a).is_empty());
}

#[test]
fn edges_enumerates_each_edge_once() {
    let graph = four_cycle();
    let edges = graph.edges();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges.len(), graph.edge_count());
    for (u, v) in &edges {
        assert!(u < v);
    }
    let mut deduped = edges.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), edges.len());
}

#[test]
fn neighbors_of_unknown_node_is_empty() {
    let graph = four_cycle();
    let ghost = Node::new("ghost").unwrap();
    assert!(graph.neighbors(&ghost).is_empty());
}

#[test]
fn format_matches_canonical_adjacency_listing() {
    let graph = four_cycle();
    assert_eq!(
        graph.format(),
        "a -> b,d\nb -> a,c\nc -> b,d\nd -> a,c"
    );
}

#[test]
fn format_sorts_neighbors_by_node_order() {
    let mut graph = Graph::new();
    let nodes = graph.add_nodes(["m", "z", "a"]);
    graph.add_edge(&nodes[0], &nodes[1]).unwrap();
    graph.add_edge(&nodes[0], &nodes[2]).unwrap();
    // Lines follow insertion order; neighbor lists are sorted.
    assert_eq!(graph.format(), "m -> a,z\nz -> m\na -> m");
}
