use rand::Rng;
use rondo_core::errors::{ErrorInfo, RondoError};
use rondo_core::rng::RngHandle;
use rondo_core::Node;

use crate::graph::Graph;

/// Generates an Erdős–Rényi-style random graph with deterministic randomness.
///
/// Creates `n_nodes` nodes labelled `n0..n{n-1}` in index order, then walks
/// every unordered pair `(i, j)` with `i < j` in index order and includes the
/// edge independently with probability `edge_probability`. Exactly one
/// uniform draw is consumed per pair, so seeding the handle before the call
/// reproduces the same graph bit-for-bit. `edge_probability == 1.0` consults
/// no randomness at all and yields an exact complete graph.
///
/// Invalid parameters are a contract violation at the call site and abort
/// with a hard error rather than building a degenerate graph. No positions
/// are assigned.
pub fn gen_random(
    n_nodes: usize,
    edge_probability: f64,
    rng: &mut RngHandle,
) -> Result<Graph, RondoError> {
    if n_nodes == 0 {
        return Err(generate_error(
            "empty-graph",
            "random generator requires at least one node",
        ));
    }
    if !(0.0..=1.0).contains(&edge_probability) {
        return Err(generate_error(
            "invalid-probability",
            "edge probability must lie in [0, 1]",
        )
        .with_context("edge_probability", edge_probability));
    }

    let mut graph = Graph::new();
    let nodes: Vec<Node> = (0..n_nodes)
        .filter_map(|index| graph.add_node(format!("n{index}")))
        .collect();

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            // p == 1.0 must yield the complete graph without touching the
            // stream, regardless of its state.
            let include = if edge_probability == 1.0 {
                true
            } else {
                rng.gen::<f64>() < edge_probability
            };
            if include {
                let _ = graph.add_edge(&nodes[i], &nodes[j]);
            }
        }
    }

    Ok(graph)
}

fn generate_error(code: impl Into<String>, message: impl Into<String>) -> RondoError {
    RondoError::Generate(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> RondoError;
}

impl ContextExt for RondoError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> RondoError {
        match self {
            RondoError::Generate(info) => {
                RondoError::Generate(info.with_context(key, value.to_string()))
            }
            other => other,
        }
    }
}
