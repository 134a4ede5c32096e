//! Flat coordinate vectors `[x0, y0, z0, x1, y1, z1, ...]`.

use nalgebra::{DVector, Vector3};

/// The solver state: three entries per vertex.
pub type Coords = DVector<f64>;

#[inline]
pub fn point(coords: &Coords, v: usize) -> Vector3<f64> {
    Vector3::new(coords[3 * v], coords[3 * v + 1], coords[3 * v + 2])
}

#[inline]
pub fn set_point(coords: &mut Coords, v: usize, p: Vector3<f64>) {
    coords[3 * v] = p.x;
    coords[3 * v + 1] = p.y;
    coords[3 * v + 2] = p.z;
}

/// Split a coordinate vector into `[x, y, z]` rows.
pub fn to_rows(coords: &Coords) -> Vec<[f64; 3]> {
    (0..coords.len() / 3)
        .map(|v| [coords[3 * v], coords[3 * v + 1], coords[3 * v + 2]])
        .collect()
}
