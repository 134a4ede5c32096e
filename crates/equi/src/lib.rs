//! Equilateral, planar-faced realizations of polyhedral graphs.
//!
//! Pipeline
//! - `graph`: rotation systems (clockwise neighbour lists), derived edges and
//!   faces, optional seed coordinates.
//! - `solver`: constraint equations (frame, unit edges, planar quads) and a
//!   Gauss–Newton stepper with golden-section line search.
//! - `groups`: automorphism discovery, classification into a small catalog of
//!   finite groups, and point-group realizations used for orbit averaging.
//! - `engine`: the loop that alternates solver steps with symmetrization.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes
//!   are fine when they improve quality.

pub mod api;
pub(crate) mod cfg;
pub mod coords;
pub mod engine;
pub mod error;
pub mod graph;
pub mod groups;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use coords::Coords;
pub use error::{GraphError, GroupError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::coords::{point, set_point, Coords};
    pub use crate::engine::{CancelToken, EngineCfg, RealizationEngine, RunSummary, StepListener};
    pub use crate::error::{GraphError, GroupError};
    pub use crate::graph::{EmbeddedGraph, GraphData, PlanarGraph};
    pub use crate::groups::{
        AbstractGroup, AbstractGroupKind, ConcreteGroup, GeneratorSlot, Perm, Symmetries,
    };
    pub use crate::solver::{ConstraintSystem, GaussNewton, SolverCfg};
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
