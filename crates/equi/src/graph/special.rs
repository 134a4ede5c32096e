//! Built-in polyhedral families.
//!
//! All rotation systems list neighbours clockwise as seen from outside.
//! Families take the size of the base polygon `k` (`k >= 3`).

use super::{EmbeddedGraph, PlanarGraph};
use crate::error::GraphError;
use nalgebra::Vector3;
use std::f64::consts::TAU;

/// Tetrahedron (complete graph on 4 vertices).
pub fn tetrahedron() -> Result<PlanarGraph, GraphError> {
    PlanarGraph::new(vec![
        vec![3, 2, 1],
        vec![2, 3, 0],
        vec![3, 1, 0],
        vec![2, 0, 1],
    ])
}

/// Rotation system of the cube; vertex `i` sits at the `i`-th corner of
/// `cube()`.
pub fn cube_map() -> Result<PlanarGraph, GraphError> {
    PlanarGraph::new(vec![
        vec![1, 3, 4],
        vec![0, 5, 2],
        vec![1, 6, 3],
        vec![0, 2, 7],
        vec![0, 7, 5],
        vec![1, 4, 6],
        vec![2, 5, 7],
        vec![3, 6, 4],
    ])
}

/// Unit cube with vertex 0 at the origin and vertex 1 on the x-axis; an exact
/// equilateral, planar-faced realization.
pub fn cube() -> Result<EmbeddedGraph, GraphError> {
    let corners = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ];
    EmbeddedGraph::from_graph(cube_map()?, corners.iter().map(|c| c.to_vec()).collect())
}

/// Pyramid over a `k`-gon: base `0..k`, apex `k`.
pub fn pyramid(k: usize) -> Result<PlanarGraph, GraphError> {
    let mut nb: Vec<Vec<usize>> = (0..k)
        .map(|i| vec![(i + 1) % k, (i + k - 1) % k, k])
        .collect();
    nb.push((0..k).rev().collect());
    PlanarGraph::new(nb)
}

/// Prism over a `k`-gon: bottom `0..k`, top `k..2k`, `i` joined to `k + i`.
pub fn prism(k: usize) -> Result<PlanarGraph, GraphError> {
    let mut nb = Vec::with_capacity(2 * k);
    for i in 0..k {
        nb.push(vec![(i + 1) % k, (i + k - 1) % k, i + k]);
    }
    for i in 0..k {
        nb.push(vec![k + (i + k - 1) % k, k + (i + 1) % k, i]);
    }
    PlanarGraph::new(nb)
}

/// Antiprism over a `k`-gon: bottom `0..k`, top `k..2k`; bottom `i` meets
/// top `i - 1` and `i`.
pub fn antiprism(k: usize) -> Result<PlanarGraph, GraphError> {
    let mut nb = Vec::with_capacity(2 * k);
    for i in 0..k {
        nb.push(vec![(i + 1) % k, (i + k - 1) % k, k + (i + k - 1) % k, k + i]);
    }
    for i in 0..k {
        nb.push(vec![k + (i + k - 1) % k, k + (i + 1) % k, (i + 1) % k, i]);
    }
    PlanarGraph::new(nb)
}

/// Regular octahedron with vertices `±e_x, ±e_y, ±e_z` (edge length `√2`).
pub fn octahedron() -> Result<EmbeddedGraph, GraphError> {
    let mut points = Vec::with_capacity(6);
    for axis in 0..3 {
        for sign in [1.0, -1.0] {
            let mut p = Vector3::zeros();
            p[axis] = sign;
            points.push(p);
        }
    }
    equilateral_hull(&points)
}

/// Regular icosahedron on the cyclic permutations of `(0, ±1, ±φ)`.
pub fn icosahedron() -> Result<EmbeddedGraph, GraphError> {
    let phi = 0.5 * (1.0 + 5f64.sqrt());
    let mut points = Vec::with_capacity(12);
    for a in [1.0, -1.0] {
        for b in [phi, -phi] {
            points.extend(cyclic_shifts(Vector3::new(0.0, a, b)));
        }
    }
    equilateral_hull(&points)
}

/// Regular dodecahedron: the cube corners `(±1, ±1, ±1)` plus the cyclic
/// permutations of `(0, ±1/φ, ±φ)`.
pub fn dodecahedron() -> Result<EmbeddedGraph, GraphError> {
    let phi = 0.5 * (1.0 + 5f64.sqrt());
    let mut points = Vec::with_capacity(20);
    for x in [1.0, -1.0] {
        for y in [1.0, -1.0] {
            for z in [1.0, -1.0] {
                points.push(Vector3::new(x, y, z));
            }
        }
    }
    for a in [1.0 / phi, -1.0 / phi] {
        for b in [phi, -phi] {
            points.extend(cyclic_shifts(Vector3::new(0.0, a, b)));
        }
    }
    equilateral_hull(&points)
}

fn cyclic_shifts(p: Vector3<f64>) -> [Vector3<f64>; 3] {
    [p, Vector3::new(p.y, p.z, p.x), Vector3::new(p.z, p.x, p.y)]
}

/// Rotation system of a convex polyhedron with all edges of one length.
///
/// Vertices at the smallest pairwise distance are joined. Each neighbour
/// list starts anywhere and runs clockwise around the outward direction
/// (from the centroid through the vertex).
fn equilateral_hull(points: &[Vector3<f64>]) -> Result<EmbeddedGraph, GraphError> {
    let n = points.len();
    let centroid = points.iter().sum::<Vector3<f64>>() / n.max(1) as f64;
    let mut shortest = f64::INFINITY;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            shortest = shortest.min((p - q).norm());
        }
    }
    let tol = 1e-9 * shortest;
    let mut neighbours = Vec::with_capacity(n);
    for (v, p) in points.iter().enumerate() {
        let out = p - centroid;
        let tangent = |q: &Vector3<f64>| {
            let e = q - p;
            e - out * (e.dot(&out) / out.norm_squared())
        };
        let mut adjacent: Vec<usize> = (0..n)
            .filter(|&w| w != v && ((points[w] - p).norm() - shortest).abs() <= tol)
            .collect();
        if let Some(&first) = adjacent.first() {
            let reference = tangent(&points[first]);
            // clockwise seen from outside is clockwise about `-out`
            let angle = |w: usize| {
                let t = tangent(&points[w]);
                (-reference.cross(&t).dot(&out))
                    .atan2(reference.dot(&t))
                    .rem_euclid(TAU)
            };
            adjacent.sort_by(|&a, &b| angle(a).total_cmp(&angle(b)));
        }
        neighbours.push(adjacent);
    }
    let rows = points.iter().map(|p| vec![p.x, p.y, p.z]).collect();
    EmbeddedGraph::new(neighbours, rows)
}
