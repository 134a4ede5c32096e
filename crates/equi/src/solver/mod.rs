//! Gauss–Newton realization of equilateral, planar-faced polyhedra.
//!
//! Purpose
//! - Turn a rotation system into a fixed list of scalar equations in the
//!   `3n` vertex coordinates and refine coordinates until they all vanish.
//!
//! Equations (in order)
//! - 6 frame equations pin vertex 0 to the origin, vertex 1 to a fixed ray
//!   and vertex 2 to a half-plane. Their residual is always 0; only their
//!   Jacobian rows matter, they remove the rigid-motion gauge.
//! - One per edge: `|p(u) - p(v)|^2 - 1`.
//! - One per quad (4 consecutive face vertices): `det[p(i) - p(l)]` for the
//!   first three vertices `i` against the fourth `l`.
//!
//! Step
//! - Solve `(J^T J) d = J^T r`, then golden-section search `λ` on
//!   `accuracy(x - λ d)` over `[0.2, 2.0]`. Singular systems leave `x`
//!   untouched. If the bracket holds no improvement we retry on `[0, 0.2]`
//!   and otherwise keep `x`, so a step never increases accuracy.

mod stepper;
mod system;

pub use stepper::{golden_section, GaussNewton, SolverCfg, StepOutcome, StepResult};
pub use system::{det3, ConstraintSystem};

#[cfg(test)]
mod tests;
