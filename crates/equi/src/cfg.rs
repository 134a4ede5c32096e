//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants to avoid tolerance juggling. Tunables that
//!   callers legitimately vary live in `SolverCfg` and `EngineCfg` instead.

/// Number of gauge-fixing equations at the head of every constraint system.
pub(crate) const FRAME_EQUATIONS: usize = 6;
/// Max-abs tolerance when two closure paths reach the same permutation and
/// their matrices are compared.
pub(crate) const MATRIX_EPS: f64 = 1e-6;
/// Edge lengths below this are treated as degenerate when rescaling.
pub(crate) const LENGTH_EPS: f64 = 1e-12;
