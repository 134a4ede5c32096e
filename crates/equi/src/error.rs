//! Error types for graph construction and group realization.

use thiserror::Error;

/// Failures while building a rotation system or an embedded graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// `from` lists `to` as a neighbour but `to` has no back-reference.
    #[error("inconsistent graph: vertex {from} lists {to}, but {to} does not list {from}")]
    Inconsistent { from: usize, to: usize },
    #[error("inconsistent graph: vertex {vertex} lists neighbour {neighbour}, order is {order}")]
    NeighbourOutOfRange {
        vertex: usize,
        neighbour: usize,
        order: usize,
    },
    #[error("inconsistent graph: vertex {vertex} lists {neighbour} more than once or itself")]
    RepeatedNeighbour { vertex: usize, neighbour: usize },
    #[error("invalid embedding: expected {expected} coordinate rows, got {got}")]
    CoordinateCount { expected: usize, got: usize },
    #[error("invalid embedding: vertex {vertex} has dimension {got}, expected {expected}")]
    CoordinateDimension {
        vertex: usize,
        expected: usize,
        got: usize,
    },
}

impl GraphError {
    /// True for the adjacency failures (as opposed to embedding failures).
    pub fn is_inconsistent_graph(&self) -> bool {
        matches!(
            self,
            Self::Inconsistent { .. }
                | Self::NeighbourOutOfRange { .. }
                | Self::RepeatedNeighbour { .. }
        )
    }

    pub fn is_invalid_embedding(&self) -> bool {
        !self.is_inconsistent_graph()
    }
}

/// Failures while turning an abstract group into a concrete point group.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GroupError {
    #[error("no point group named {caption:?} for {group}")]
    UnknownRealization { caption: String, group: String },
    #[error("permutation acts on {got} points, expected {expected}")]
    DegreeMismatch { expected: usize, got: usize },
    #[error("matrices of {caption} do not respect the permutation group (deviation {deviation:.3e})")]
    InconsistentRealization { caption: String, deviation: f64 },
    /// A proper rotation assigned to an automorphism that mirrors the
    /// rotation system, or a reflection assigned to one that keeps it.
    #[error("{caption} does not fit {group}: orientation of {word} disagrees with its matrix")]
    OrientationMismatch {
        caption: String,
        group: String,
        word: String,
    },
}
