use std::collections::BTreeMap;

use rondo_core::{Node, Point};

use crate::layout::CircularSpec;

/// In-memory undirected simple graph.
///
/// Node enumeration order is insertion order; each node's neighbor list is
/// kept in edge-insertion order from that node's perspective. Adjacency is
/// symmetric at all times and nodes come into existence only through
/// [`Graph::add_node`] and [`Graph::add_nodes`] — queries never create
/// phantom entries.
///
/// Invalid call-site data (unknown nodes, self-loops, duplicate edges) is
/// reported with an absent result and leaves the graph untouched; no graph
/// primitive panics or partially mutates.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: Vec<Node>,
    adjacency: BTreeMap<Node, Vec<Node>>,
    positions: Option<BTreeMap<Node, Point>>,
    layout: Option<CircularSpec>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with the given label.
    ///
    /// Idempotent: re-adding an existing label returns the node without
    /// mutating anything. Returns `None` for labels that are not valid
    /// identifiers (empty or all whitespace), again without mutation.
    pub fn add_node(&mut self, label: impl AsRef<str>) -> Option<Node> {
        let node = Node::new(label.as_ref())?;
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
            self.adjacency.insert(node.clone(), Vec::new());
        }
        Some(node)
    }

    /// Adds each label in order, dropping invalid entries.
    ///
    /// Returns the subsequence of nodes that were accepted; a bad element
    /// never fails the whole call.
    pub fn add_nodes<I, S>(&mut self, labels: I) -> Vec<Node>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .filter_map(|label| self.add_node(label))
            .collect()
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Succeeds only when both endpoints already exist, `u != v`, and the
    /// edge is not already present; on success both adjacency directions are
    /// inserted and the canonical `(lesser, greater)` pair is returned. Any
    /// violation returns `None` with zero mutation.
    pub fn add_edge(&mut self, u: &Node, v: &Node) -> Option<(Node, Node)> {
        if u == v {
            return None;
        }
        if !self.adjacency.contains_key(u) || !self.adjacency.contains_key(v) {
            return None;
        }
        if self.adjacency[u].contains(v) {
            return None;
        }
        self.adjacency.get_mut(u)?.push(v.clone());
        self.adjacency.get_mut(v)?.push(u.clone());
        Some(canonical_pair(u, v))
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // Each edge is stored from both endpoints.
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.order
    }

    /// Returns whether the node is present.
    pub fn contains(&self, node: &Node) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Enumerates each undirected edge exactly once in canonical form.
    pub fn edges(&self) -> Vec<(Node, Node)> {
        let mut out = Vec::new();
        for u in &self.order {
            if let Some(list) = self.adjacency.get(u) {
                for v in list {
                    if u < v {
                        out.push((u.clone(), v.clone()));
                    }
                }
            }
        }
        out
    }

    /// Returns the neighbors of `node` in edge-insertion order.
    ///
    /// Empty for unknown nodes.
    pub fn neighbors(&self, node: &Node) -> &[Node] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Renders the canonical adjacency-list form.
    ///
    /// One line per node in insertion order, neighbors sorted by node order:
    /// `"<node> -> <n1>,<n2>,..."`.
    pub fn format(&self) -> String {
        let mut lines = Vec::with_capacity(self.order.len());
        for node in &self.order {
            let mut names: Vec<&str> = self
                .neighbors(node)
                .iter()
                .map(Node::as_str)
                .collect();
            names.sort_unstable();
            lines.push(format!("{} -> {}", node, names.join(",")));
        }
        lines.join("\n")
    }

    /// Returns the cached position of `node`.
    ///
    /// `None` until a layout has been computed (or inherited) and for nodes
    /// the cache does not cover.
    pub fn position_of(&self, node: &Node) -> Option<Point> {
        self.positions.as_ref()?.get(node).copied()
    }

    /// Returns whether a position cache exists at all.
    pub fn has_positions(&self) -> bool {
        self.positions.is_some()
    }

    /// Parameters the cached positions were computed with, if any.
    pub(crate) fn layout_spec(&self) -> Option<CircularSpec> {
        self.layout
    }

    /// Replaces the position cache with a freshly computed layout.
    pub(crate) fn store_layout(&mut self, spec: CircularSpec, positions: BTreeMap<Node, Point>) {
        self.layout = Some(spec);
        self.positions = Some(positions);
    }

    /// Copies a single position value into the cache, creating it on first use.
    pub(crate) fn inherit_position(&mut self, node: &Node, position: Point) {
        self.positions
            .get_or_insert_with(BTreeMap::new)
            .insert(node.clone(), position);
    }
}

/// Orders an unordered node pair into its canonical `(lesser, greater)` form.
pub fn canonical_pair(u: &Node, v: &Node) -> (Node, Node) {
    if u <= v {
        (u.clone(), v.clone())
    } else {
        (v.clone(), u.clone())
    }
}
