use crate::cfg::FRAME_EQUATIONS;
use crate::coords::Coords;
use crate::graph::PlanarGraph;
use nalgebra::{DMatrix, DVector};

/// Fixed equation list of one rotation system.
#[derive(Clone, Debug)]
pub struct ConstraintSystem {
    order: usize,
    edges: Vec<(usize, usize)>,
    quads: Vec<[usize; 4]>,
}

/// `det` of the 3×3 matrix given row by row.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn det3(
    a11: f64,
    a12: f64,
    a13: f64,
    a21: f64,
    a22: f64,
    a23: f64,
    a31: f64,
    a32: f64,
    a33: f64,
) -> f64 {
    a11 * a22 * a33 + a12 * a23 * a31 + a13 * a21 * a32
        - a11 * a23 * a32
        - a12 * a21 * a33
        - a13 * a22 * a31
}

/// Every cyclic window of four consecutive face vertices, once.
///
/// A face of length `L` gives `L - 3` straight windows; for `L >= 5` the
/// three windows across the seam are added. Triangles give none.
fn face_quads(face: &[usize], out: &mut Vec<[usize; 4]>) {
    let l = face.len();
    for w in face.windows(4) {
        out.push([w[0], w[1], w[2], w[3]]);
    }
    if l >= 5 {
        out.push([face[l - 1], face[0], face[1], face[2]]);
        out.push([face[l - 2], face[l - 1], face[0], face[1]]);
        out.push([face[l - 3], face[l - 2], face[l - 1], face[0]]);
    }
}

impl ConstraintSystem {
    pub fn new(graph: &PlanarGraph) -> Self {
        let mut quads = Vec::new();
        for face in graph.faces() {
            face_quads(face, &mut quads);
        }
        Self {
            order: graph.order(),
            edges: graph.edges().to_vec(),
            quads,
        }
    }

    #[inline]
    pub fn equation_count(&self) -> usize {
        FRAME_EQUATIONS + self.edges.len() + self.quads.len()
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        3 * self.order
    }

    #[inline]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    #[inline]
    pub fn quads(&self) -> &[[usize; 4]] {
        &self.quads
    }

    fn edge_residual(x: &Coords, (u, v): (usize, usize)) -> f64 {
        (0..3).map(|k| (x[3 * u + k] - x[3 * v + k]).powi(2)).sum::<f64>() - 1.0
    }

    fn quad_residual(x: &Coords, q: &[usize; 4]) -> f64 {
        let l = q[3];
        let d = |i: usize, k: usize| x[3 * q[i] + k] - x[3 * l + k];
        det3(
            d(0, 0),
            d(0, 1),
            d(0, 2),
            d(1, 0),
            d(1, 1),
            d(1, 2),
            d(2, 0),
            d(2, 1),
            d(2, 2),
        )
    }

    /// Residual vector; the frame rows are identically zero.
    pub fn residuals(&self, x: &Coords) -> DVector<f64> {
        let mut r = DVector::zeros(self.equation_count());
        let mut row = FRAME_EQUATIONS;
        for &e in &self.edges {
            r[row] = Self::edge_residual(x, e);
            row += 1;
        }
        for q in &self.quads {
            r[row] = Self::quad_residual(x, q);
            row += 1;
        }
        r
    }

    /// Sum of squared residuals over edge and quad equations (frame rows
    /// excluded). This is the objective of the line search.
    pub fn accuracy(&self, x: &Coords) -> f64 {
        let edges = self
            .edges
            .iter()
            .map(|&e| Self::edge_residual(x, e).powi(2));
        let quads = self.quads.iter().map(|q| Self::quad_residual(x, q).powi(2));
        edges.chain(quads).sum()
    }

    /// Analytic Jacobian, `equation_count × variable_count`.
    pub fn jacobian(&self, x: &Coords) -> DMatrix<f64> {
        let mut j = DMatrix::zeros(self.equation_count(), self.variable_count());
        self.frame_rows(x, &mut j);
        let mut row = FRAME_EQUATIONS;
        for &(u, v) in &self.edges {
            for k in 0..3 {
                let g = 2.0 * (x[3 * u + k] - x[3 * v + k]);
                j[(row, 3 * u + k)] = g;
                j[(row, 3 * v + k)] = -g;
            }
            row += 1;
        }
        for q in &self.quads {
            // Cofactors of the 4×4 matrix with rows [x, y, z, 1].
            let m: [[f64; 4]; 4] = std::array::from_fn(|r| {
                let p = 3 * q[r];
                [x[p], x[p + 1], x[p + 2], 1.0]
            });
            for r in 0..4 {
                let (r1, r2, r3) = ((r + 1) % 4, (r + 2) % 4, (r + 3) % 4);
                for c in 0..3 {
                    let (c1, c2, c3) = ((c + 1) % 4, (c + 2) % 4, (c + 3) % 4);
                    let d = det3(
                        m[r1][c1], m[r1][c2], m[r1][c3], m[r2][c1], m[r2][c2], m[r2][c3],
                        m[r3][c1], m[r3][c2], m[r3][c3],
                    );
                    j[(row, 3 * q[r] + c)] = if (r + c) % 2 == 0 { d } else { -d };
                }
            }
            row += 1;
        }
        j
    }

    fn frame_rows(&self, x: &Coords, j: &mut DMatrix<f64>) {
        for k in 0..3.min(self.variable_count()) {
            j[(k, k)] = 1.0;
        }
        if self.order >= 2 {
            j[(3, 3)] = x[1] - x[4];
            j[(3, 4)] = x[3] - x[0];
            j[(4, 3)] = x[2] - x[5];
            j[(4, 5)] = x[3] - x[0];
        }
        if self.order >= 3 {
            j[(5, 6)] = det3(x[1], x[2], 1.0, x[4], x[5], 1.0, x[7], x[8], 1.0);
            j[(5, 7)] = det3(x[2], x[0], 1.0, x[5], x[3], 1.0, x[8], x[6], 1.0);
            j[(5, 8)] = det3(x[0], x[1], 1.0, x[3], x[4], 1.0, x[6], x[7], 1.0);
        }
    }
}
