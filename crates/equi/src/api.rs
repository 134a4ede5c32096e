//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   code such as the CLI and benches. Breaking changes are allowed and expected.

// Graph model and built-in families
pub use crate::graph::special::{
    antiprism, cube, cube_map, dodecahedron, icosahedron, octahedron, prism, pyramid, tetrahedron,
};
pub use crate::graph::{EmbeddedGraph, GraphData, InputGraph, PlanarGraph};
// Solver
pub use crate::solver::{ConstraintSystem, GaussNewton, SolverCfg, StepOutcome, StepResult};
// Groups
pub use crate::groups::{
    classify, classify_oriented, AbstractGroup, AbstractGroupKind, ConcreteGroup, GeneratorSlot,
    OrderSignature, Orientation, Perm, Realization, Symmetries,
};
// Engine
pub use crate::engine::{CancelToken, EngineCfg, RealizationEngine, RunSummary, StepListener};
