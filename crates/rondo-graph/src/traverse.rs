use std::collections::BTreeSet;

use rondo_core::Node;

use crate::graph::Graph;

/// Collects the connected component containing `start`.
///
/// Depth-first from `start`, following neighbor lists in their deterministic
/// edge-insertion order; every reachable node appears exactly once, in
/// first-visit order. An unknown start node yields an empty sequence.
pub fn connected_component(graph: &Graph, start: &Node) -> Vec<Node> {
    let mut component = Vec::new();
    connected_component_with(graph, start, |node| component.push(node.clone()));
    component
}

/// Streaming variant of [`connected_component`].
///
/// Invokes `visit` exactly once per newly discovered node, in discovery
/// order, without materializing the component first.
pub fn connected_component_with<F>(graph: &Graph, start: &Node, mut visit: F)
where
    F: FnMut(&Node),
{
    if !graph.contains(start) {
        return;
    }
    let mut seen: BTreeSet<Node> = BTreeSet::new();
    let mut stack: Vec<Node> = vec![start.clone()];
    while let Some(node) = stack.pop() {
        if !seen.insert(node.clone()) {
            continue;
        }
        visit(&node);
        // Reverse push so the first-listed neighbor is explored first,
        // matching recursive descent order.
        for neighbor in graph.neighbors(&node).iter().rev() {
            if !seen.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
    }
}
