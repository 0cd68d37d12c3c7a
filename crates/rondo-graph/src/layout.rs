use std::collections::BTreeMap;

use rondo_core::{Node, Point};

use crate::graph::Graph;

/// Parameters a circular layout was computed with.
///
/// Stored alongside the position cache so a repeated call with identical
/// parameters can skip recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularSpec {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
}

/// Places the graph's nodes evenly around a circle and caches the result.
///
/// The node at enumeration index `i` of `n` receives angle `i * 2π/n`, so
/// index 0 sits directly right of the center. A non-finite center or a
/// non-positive radius yields an empty result without mutating the graph, as
/// does an empty graph (which never gains a position map).
///
/// Calling again with the same center and radius returns the cached result;
/// different parameters recompute positions for all currently-known nodes
/// and overwrite the cache, so positions always reflect the most recent
/// request. Returns the nodes in layout (= enumeration) order.
pub fn circular_layout(graph: &mut Graph, center: Point, radius: f64) -> Vec<Node> {
    if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
        return Vec::new();
    }
    if graph.node_count() == 0 {
        return Vec::new();
    }

    let spec = CircularSpec { center, radius };
    let order: Vec<Node> = graph.nodes().to_vec();
    if graph.layout_spec() == Some(spec) {
        return order;
    }

    let step = std::f64::consts::TAU / order.len() as f64;
    let mut positions = BTreeMap::new();
    for (index, node) in order.iter().enumerate() {
        let theta = step * index as f64;
        positions.insert(
            node.clone(),
            Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin()),
        );
    }
    graph.store_layout(spec, positions);
    order
}
