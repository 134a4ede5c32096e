//! Combinatorial symmetry: automorphisms, classification and point-group
//! realizations.
//!
//! Purpose
//! - Find every orientation-compatible automorphism of a rotation system,
//!   name the abstract group they form, and map that group onto orthogonal
//!   3×3 matrices so coordinates can be averaged over orbits.
//!
//! Why this design (short)
//! - Automorphisms come from comparing canonical BFS labellings; no general
//!   graph-isomorphism machinery is needed for 3-connected planar maps.
//! - Classification is a decision list over the order signature. It covers a
//!   closed catalog of kinds and falls back to "unknown" instead of guessing.
//! - A realization names matrices for generator words; the concrete group is
//!   the closure of those pairs, checked for consistency while it is built.
//!
//! Conventions
//! - `a.compose(b)` applies `b` first. Matrices multiply in the same order.
//! - Point groups use a fixed axis convention: principal axis `z`, mirror
//!   planes through `x`, secondary half-turns about `x`.

mod classify;
mod concrete;
mod kind;
mod labelling;
mod perm;
pub mod point;

pub use classify::{classify, classify_oriented};
pub use concrete::{ConcreteGroup, PointGroupElement};
pub use kind::{
    catalog, divisors, AbstractGroup, AbstractGroupKind, GeneratorSlot, Realization, Word,
};
pub use labelling::{automorphisms, oriented_automorphisms, Orientation, Symmetries};
pub use perm::{closure, closure_order, OrderSignature, Perm};
