//! Orthogonal 3×3 matrices used by point-group realizations.
//!
//! Column-vector convention: a matrix `M` moves `x` to `M x`. The main axis
//! of cyclic and dihedral families is `z`; horizontal mirrors are `z ↦ -z`.
//! Polyhedral generators satisfy the defining relations of their groups:
//! `ROT_3 · ROT_4` and `ROT_5 · ROT_3` (also with `ROT_5_STAR`) are half-turns.

use nalgebra::Matrix3;
use std::f64::consts::TAU;

/// Rotation about `z` by `angle` (radians, counterclockwise).
pub fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Rotation about `z` followed by the mirror `z ↦ -z`.
pub fn rotoreflection_z(angle: f64) -> Matrix3<f64> {
    rotation_z(angle) * mirror_h()
}

/// `rotation_z(2π · d / n)`.
#[inline]
pub fn rotation_frac(n: usize, d: usize) -> Matrix3<f64> {
    rotation_z(TAU * d as f64 / n as f64)
}

#[inline]
pub fn rotoreflection_frac(n: usize, d: usize) -> Matrix3<f64> {
    rotoreflection_z(TAU * d as f64 / n as f64)
}

#[inline]
pub fn inversion() -> Matrix3<f64> {
    -Matrix3::identity()
}

/// Mirror `z ↦ -z`.
#[inline]
pub fn mirror_h() -> Matrix3<f64> {
    Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, 1.0, -1.0))
}

/// Mirror `y ↦ -y` (contains the main axis).
#[inline]
pub fn mirror_v() -> Matrix3<f64> {
    Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, -1.0, 1.0))
}

/// Half-turn about `x`.
#[inline]
pub fn half_turn_x() -> Matrix3<f64> {
    Matrix3::from_diagonal(&nalgebra::Vector3::new(1.0, -1.0, -1.0))
}

/// Half-turn about `y`.
#[inline]
pub fn half_turn_y() -> Matrix3<f64> {
    Matrix3::from_diagonal(&nalgebra::Vector3::new(-1.0, 1.0, -1.0))
}

/// Half-turn about `z`.
#[inline]
pub fn half_turn_z() -> Matrix3<f64> {
    Matrix3::from_diagonal(&nalgebra::Vector3::new(-1.0, -1.0, 1.0))
}

/// 3-fold rotation about `(1,1,1)`: `(x, y, z) ↦ (y, z, x)`.
pub fn rot_3() -> Matrix3<f64> {
    Matrix3::new(
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0, //
        1.0, 0.0, 0.0,
    )
}

/// 4-fold rotation about `y`.
pub fn rot_4() -> Matrix3<f64> {
    Matrix3::new(
        0.0, 0.0, -1.0, //
        0.0, 1.0, 0.0, //
        1.0, 0.0, 0.0,
    )
}

fn golden_ratio() -> f64 {
    0.5 * (1.0 + 5f64.sqrt())
}

/// Rotation by `4π/5` of an icosahedral group containing `rot_3`.
pub fn rot_5() -> Matrix3<f64> {
    let p = golden_ratio();
    Matrix3::new(
        0.5, -0.5 / p, -0.5 * p, //
        0.5 / p, -0.5 * p, 0.5, //
        -0.5 * p, -0.5, -0.5 / p,
    )
}

/// Rotation by `2π/5`; with `rot_3` it generates the other icosahedral
/// realization (`I*`).
pub fn rot_5_star() -> Matrix3<f64> {
    let p = golden_ratio();
    Matrix3::new(
        0.5, 0.5 * p, 0.5 / p, //
        -0.5 * p, 0.5 / p, 0.5, //
        0.5 / p, -0.5, 0.5 * p,
    )
}
