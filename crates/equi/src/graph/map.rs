use crate::error::GraphError;

/// Rotation system with derived edges and faces. Immutable after `new`.
///
/// Invariants:
/// - adjacency is symmetric, loop-free and without repeated neighbours;
/// - `twin[v][i]` is the index of `v` in `neighbours[neighbours[v][i]]`;
/// - every dart lies on exactly one face.
#[derive(Clone, Debug)]
pub struct PlanarGraph {
    neighbours: Vec<Vec<usize>>,
    twin: Vec<Vec<usize>>,
    edges: Vec<(usize, usize)>,
    faces: Vec<Vec<usize>>,
}

impl PlanarGraph {
    /// Validate the adjacency and derive edges and faces.
    ///
    /// Fails with `GraphError::Inconsistent` (or one of its siblings) when
    /// the neighbour relation is not symmetric; nothing is built in that case.
    pub fn new(neighbours: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let twin = twins(&neighbours)?;
        let edges = derive_edges(&neighbours);
        let faces = trace_faces(&neighbours, &twin);
        Ok(Self {
            neighbours,
            twin,
            edges,
            faces,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn order(&self) -> usize {
        self.neighbours.len()
    }

    /// Number of edges.
    #[inline]
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbours[v].len()
    }

    /// Clockwise neighbours of `v`.
    #[inline]
    pub fn neighbours(&self, v: usize) -> &[usize] {
        &self.neighbours[v]
    }

    /// Index of `v` in the neighbour list of `neighbours(v)[i]`.
    #[inline]
    pub fn twin(&self, v: usize, i: usize) -> usize {
        self.twin[v][i]
    }

    #[inline]
    pub fn edge(&self, i: usize) -> (usize, usize) {
        self.edges[i]
    }

    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn face(&self, i: usize) -> &[usize] {
        &self.faces[i]
    }

    #[inline]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// `V - E + F`; equals 2 for a connected planar map.
    pub fn euler_characteristic(&self) -> i64 {
        self.order() as i64 - self.size() as i64 + self.face_count() as i64
    }

    /// Position of `w` among the neighbours of `v`, if adjacent.
    pub fn position(&self, v: usize, w: usize) -> Option<usize> {
        self.neighbours[v].iter().position(|&x| x == w)
    }
}

fn twins(neighbours: &[Vec<usize>]) -> Result<Vec<Vec<usize>>, GraphError> {
    let order = neighbours.len();
    let mut twin = Vec::with_capacity(order);
    for (v, list) in neighbours.iter().enumerate() {
        let mut row = Vec::with_capacity(list.len());
        for (i, &w) in list.iter().enumerate() {
            if w >= order {
                return Err(GraphError::NeighbourOutOfRange {
                    vertex: v,
                    neighbour: w,
                    order,
                });
            }
            if w == v || list[..i].contains(&w) {
                return Err(GraphError::RepeatedNeighbour {
                    vertex: v,
                    neighbour: w,
                });
            }
            let back = neighbours[w]
                .iter()
                .position(|&x| x == v)
                .ok_or(GraphError::Inconsistent { from: v, to: w })?;
            row.push(back);
        }
        twin.push(row);
    }
    Ok(twin)
}

fn derive_edges(neighbours: &[Vec<usize>]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for (v, list) in neighbours.iter().enumerate() {
        for &w in list {
            if v < w {
                edges.push((v, w));
            }
        }
    }
    edges
}

/// Face tracing: from dart `a -> b`, continue with `b -> c` where `c` follows
/// `a` in the clockwise order around `b`. Each face lists its source vertices.
fn trace_faces(neighbours: &[Vec<usize>], twin: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut visited: Vec<Vec<bool>> = neighbours.iter().map(|l| vec![false; l.len()]).collect();
    let mut faces = Vec::new();
    for v in 0..neighbours.len() {
        for i in 0..neighbours[v].len() {
            if visited[v][i] {
                continue;
            }
            let mut face = Vec::new();
            let (mut a, mut ai) = (v, i);
            loop {
                visited[a][ai] = true;
                face.push(a);
                let b = neighbours[a][ai];
                let bi = (twin[a][ai] + 1) % neighbours[b].len();
                (a, ai) = (b, bi);
                if (a, ai) == (v, i) {
                    break;
                }
                debug_assert!(!visited[a][ai], "face tracing revisited a dart");
            }
            faces.push(face);
        }
    }
    faces
}
