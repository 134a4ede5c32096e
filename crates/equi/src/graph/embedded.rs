use super::PlanarGraph;
use crate::error::GraphError;

/// A rotation system together with per-vertex seed coordinates.
///
/// Every row has the same length (`dimension`). Only 3D embeddings seed the
/// solver; other dimensions are kept but ignored there.
#[derive(Clone, Debug)]
pub struct EmbeddedGraph {
    graph: PlanarGraph,
    coordinates: Vec<Vec<f64>>,
    dimension: usize,
}

impl EmbeddedGraph {
    pub fn new(neighbours: Vec<Vec<usize>>, coordinates: Vec<Vec<f64>>) -> Result<Self, GraphError> {
        let graph = PlanarGraph::new(neighbours)?;
        Self::from_graph(graph, coordinates)
    }

    pub fn from_graph(graph: PlanarGraph, coordinates: Vec<Vec<f64>>) -> Result<Self, GraphError> {
        if coordinates.len() != graph.order() {
            return Err(GraphError::CoordinateCount {
                expected: graph.order(),
                got: coordinates.len(),
            });
        }
        let dimension = coordinates.first().map_or(0, Vec::len);
        if let Some((vertex, row)) = coordinates
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != dimension)
        {
            return Err(GraphError::CoordinateDimension {
                vertex,
                expected: dimension,
                got: row.len(),
            });
        }
        Ok(Self {
            graph,
            coordinates,
            dimension,
        })
    }

    #[inline]
    pub fn graph(&self) -> &PlanarGraph {
        &self.graph
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn coordinates(&self, v: usize) -> &[f64] {
        &self.coordinates[v]
    }
}
