use std::collections::BTreeMap;

use rondo_core::errors::{ErrorInfo, RondoError};
use rondo_core::{Node, Point};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Padding between the overlay bounding box and the canvas edge, in the same
/// units as node positions.
const CANVAS_PAD: f64 = 16.0;

/// Opaque style tokens forwarded to the renderer unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Outline style token for the graph's geometry.
    pub outline: String,
    /// Fill style token for the graph's geometry.
    pub fill: String,
}

/// One graph's share of an overlay: the positioned geometry a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayer {
    /// Positioned nodes of this graph, in enumeration order.
    pub nodes: Vec<Node>,
    /// Canonical edges whose both endpoints carry a position.
    pub edges: Vec<(Node, Node)>,
    /// Position of every node listed in `nodes`.
    pub positions: BTreeMap<Node, Point>,
    /// Style tokens for this graph.
    pub style: LayerStyle,
}

/// Geometry shared by every layer of a multi-graph overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Translation that moves all positions onto the canvas.
    pub offset: Point,
    /// Canvas width covering every positioned node plus padding.
    pub width: f64,
    /// Canvas height covering every positioned node plus padding.
    pub height: f64,
    /// Per-graph geometry, in input order.
    pub layers: Vec<OverlayLayer>,
}

/// Extracts the subgraph of `parent` induced by `subset`.
///
/// The new graph's nodes are exactly the deduplicated, valid entries of
/// `subset`; its edges are the parent edges with both endpoints in the
/// subset. Cached parent positions are copied by value for subset nodes that
/// have one, so the extraction aligns spatially with its parent while
/// remaining independently mutable; the position map is created only when at
/// least one position is inherited. The parent is never mutated.
pub fn extract_subgraph(parent: &Graph, subset: &[Node]) -> Graph {
    let mut sub = Graph::new();
    let kept = sub.add_nodes(subset.iter().map(Node::as_str));
    for (u, v) in parent.edges() {
        if sub.contains(&u) && sub.contains(&v) {
            let _ = sub.add_edge(&u, &v);
        }
    }
    for node in &kept {
        if let Some(position) = parent.position_of(node) {
            sub.inherit_position(node, position);
        }
    }
    sub
}

/// Computes the shared canvas geometry for rendering several graphs at once.
///
/// The bounding box spans every positioned node of every graph; unpositioned
/// nodes are skipped (and excluded from their layer's geometry) rather than
/// treated as errors. Fails with `nothing-to-draw` only when no graph
/// contributes a single positioned node.
pub fn overlay_bounds(graphs: &[(Graph, LayerStyle)]) -> Result<Overlay, RondoError> {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut positioned = false;

    let mut layers = Vec::with_capacity(graphs.len());
    for (graph, style) in graphs {
        let mut nodes = Vec::new();
        let mut positions = BTreeMap::new();
        for node in graph.nodes() {
            if let Some(position) = graph.position_of(node) {
                positioned = true;
                min_x = min_x.min(position.x);
                min_y = min_y.min(position.y);
                max_x = max_x.max(position.x);
                max_y = max_y.max(position.y);
                nodes.push(node.clone());
                positions.insert(node.clone(), position);
            }
        }
        let edges = graph
            .edges()
            .into_iter()
            .filter(|(u, v)| positions.contains_key(u) && positions.contains_key(v))
            .collect();
        layers.push(OverlayLayer {
            nodes,
            edges,
            positions,
            style: style.clone(),
        });
    }

    if !positioned {
        return Err(RondoError::Overlay(ErrorInfo::new(
            "nothing-to-draw",
            "no graph contributed a positioned node",
        )
        .with_hint("compute a layout before requesting an overlay")));
    }

    Ok(Overlay {
        offset: Point::new(CANVAS_PAD - min_x, CANVAS_PAD - min_y),
        width: (max_x - min_x) + 2.0 * CANVAS_PAD,
        height: (max_y - min_y) + 2.0 * CANVAS_PAD,
        layers,
    })
}
