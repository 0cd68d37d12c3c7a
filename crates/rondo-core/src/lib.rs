#![deny(missing_docs)]
//! Core value types shared across the rondo crates: symbolic node
//! identifiers, 2D positions, structured errors, and the deterministic RNG
//! handle consumed by the graph generator.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, RondoError};
pub use rng::RngHandle;

/// Symbolic identifier for a node within a graph.
///
/// Nodes compare, hash, and order by their label; the lexicographic order is
/// what canonicalizes undirected edges and sorts neighbor lists for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Node(String);

impl Node {
    /// Creates a node identifier from a label.
    ///
    /// Returns `None` when the label is empty or all whitespace; such values
    /// are not valid identifiers and callers treat the absence as a silent
    /// rejection rather than an error.
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return None;
        }
        Some(Self(label))
    }

    /// Returns the label backing this identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 2D coordinate produced by layout and consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
