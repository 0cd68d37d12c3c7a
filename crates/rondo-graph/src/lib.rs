#![deny(missing_docs)]
//! Undirected simple-graph engine: adjacency with hard structural
//! invariants, Erdős–Rényi-style randomized synthesis, depth-first
//! reachability, cached circular layout, and layout-preserving subgraph
//! composition for multi-graph overlay rendering.
//!
//! The crate produces node lists, canonical edge lists, and node positions;
//! turning that geometry into a picture is the job of an external renderer.

mod compose;
mod generate;
mod graph;
mod layout;
mod traverse;

pub use compose::{extract_subgraph, overlay_bounds, LayerStyle, Overlay, OverlayLayer};
pub use generate::gen_random;
pub use graph::{canonical_pair, Graph};
pub use layout::{circular_layout, CircularSpec};
pub use traverse::{connected_component, connected_component_with};
