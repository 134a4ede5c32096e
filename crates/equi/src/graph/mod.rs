//! Combinatorial maps (rotation systems) and their embeddings.
//!
//! Purpose
//! - Hold the clockwise neighbour order of every vertex and derive the two
//!   structures everything downstream needs: the undirected edge list and the
//!   face cycles.
//!
//! Why this design (short)
//! - Validation happens once in the constructor; afterwards the graph is
//!   read-only and every directed edge ("dart") has a precomputed twin, so
//!   tracing and labelling never search neighbour lists.
//! - Seed coordinates live in a separate `EmbeddedGraph` wrapper; the solver
//!   only needs the map.
//!
//! Conventions
//! - Vertices are `0..n`. `neighbours[v]` is clockwise as seen from outside.
//! - A dart is `(v, i)`: the directed edge `v -> neighbours[v][i]`.
//! - Edges are `(v, w)` with `v < w`, listed in vertex order, then neighbour
//!   order.

mod embedded;
mod map;
pub mod special;

pub use embedded::EmbeddedGraph;
pub use map::PlanarGraph;

use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// Serializable graph description, as read by the CLI.
///
/// `coordinates` is optional; when present it must have one row per vertex,
/// all rows of the same length.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphData {
    pub neighbours: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Vec<f64>>>,
}

/// A validated graph with or without seed coordinates.
#[derive(Clone, Debug)]
pub enum InputGraph {
    Plain(PlanarGraph),
    Embedded(EmbeddedGraph),
}

impl InputGraph {
    pub fn graph(&self) -> &PlanarGraph {
        match self {
            Self::Plain(g) => g,
            Self::Embedded(e) => e.graph(),
        }
    }
}

impl GraphData {
    pub fn build(self) -> Result<InputGraph, GraphError> {
        match self.coordinates {
            None => Ok(InputGraph::Plain(PlanarGraph::new(self.neighbours)?)),
            Some(rows) => Ok(InputGraph::Embedded(EmbeddedGraph::new(
                self.neighbours,
                rows,
            )?)),
        }
    }
}

impl From<&PlanarGraph> for GraphData {
    fn from(g: &PlanarGraph) -> Self {
        Self {
            neighbours: (0..g.order()).map(|v| g.neighbours(v).to_vec()).collect(),
            coordinates: None,
        }
    }
}

#[cfg(test)]
mod tests;
