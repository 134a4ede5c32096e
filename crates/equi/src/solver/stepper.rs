use super::ConstraintSystem;
use crate::coords::Coords;
use crate::graph::PlanarGraph;

/// Line-search configuration.
///
/// The bracket `[lambda_min, lambda_max]` assumes near-quadratic behaviour of
/// the residuals along the Gauss–Newton direction; it is a tunable.
#[derive(Clone, Copy, Debug)]
pub struct SolverCfg {
    pub lambda_min: f64,
    pub lambda_max: f64,
    /// Golden-section search stops once the inner bracket is this narrow.
    pub tolerance: f64,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            lambda_min: 0.2,
            lambda_max: 2.0,
            tolerance: 1e-3,
        }
    }
}

/// What a step did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// Moved by `x - lambda d`.
    Moved { lambda: f64 },
    /// `J^T J` was singular; coordinates unchanged.
    Singular,
    /// No step length improved the accuracy; coordinates unchanged.
    Stalled,
}

#[derive(Clone, Debug)]
pub struct StepResult {
    pub coords: Coords,
    /// Accuracy at `coords`.
    pub accuracy: f64,
    pub outcome: StepOutcome,
}

/// Gauss–Newton stepper over a fixed constraint system. Stateless between
/// calls: every step consumes one coordinate vector and returns the next.
#[derive(Clone, Debug)]
pub struct GaussNewton {
    system: ConstraintSystem,
    cfg: SolverCfg,
}

const GOLDEN: f64 = 0.618_033_988_749_894_8; // (sqrt(5) - 1) / 2

/// Minimize `f` on `[lo, hi]`; returns the midpoint of the final inner
/// bracket `[l2, l3]`.
pub fn golden_section(f: impl Fn(f64) -> f64, lo: f64, hi: f64, tolerance: f64) -> f64 {
    let (mut l1, mut l4) = (lo, hi);
    let mut l2 = l4 - GOLDEN * (l4 - l1);
    let mut l3 = l1 + GOLDEN * (l4 - l1);
    let mut f2 = f(l2);
    let mut f3 = f(l3);
    while l3 - l2 > tolerance {
        if f2 < f3 {
            l4 = l3;
            l3 = l2;
            f3 = f2;
            l2 = l4 - GOLDEN * (l4 - l1);
            f2 = f(l2);
        } else {
            l1 = l2;
            l2 = l3;
            f2 = f3;
            l3 = l1 + GOLDEN * (l4 - l1);
            f3 = f(l3);
        }
    }
    0.5 * (l2 + l3)
}

impl GaussNewton {
    pub fn new(graph: &PlanarGraph) -> Self {
        Self::with_cfg(graph, SolverCfg::default())
    }

    pub fn with_cfg(graph: &PlanarGraph, cfg: SolverCfg) -> Self {
        Self {
            system: ConstraintSystem::new(graph),
            cfg,
        }
    }

    #[inline]
    pub fn system(&self) -> &ConstraintSystem {
        &self.system
    }

    #[inline]
    pub fn cfg(&self) -> SolverCfg {
        self.cfg
    }

    #[inline]
    pub fn accuracy(&self, x: &Coords) -> f64 {
        self.system.accuracy(x)
    }

    /// One iteration; see `step_report` for the outcome details.
    pub fn step(&self, x: Coords) -> Coords {
        self.step_report(x).coords
    }

    pub fn step_report(&self, x: Coords) -> StepResult {
        let before = self.system.accuracy(&x);
        let Some(d) = self.direction(&x) else {
            tracing::warn!(accuracy = before, "singular normal equations; step skipped");
            return StepResult {
                coords: x,
                accuracy: before,
                outcome: StepOutcome::Singular,
            };
        };
        let along = |lambda: f64| self.system.accuracy(&(&x - &d * lambda));
        let cfg = self.cfg;
        let mut lambda = golden_section(along, cfg.lambda_min, cfg.lambda_max, cfg.tolerance);
        let mut after = along(lambda);
        if after.is_nan() || after > before {
            lambda = golden_section(along, 0.0, cfg.lambda_min, cfg.tolerance);
            after = along(lambda);
        }
        if after.is_nan() || after > before {
            tracing::debug!(accuracy = before, "no descent along Gauss-Newton direction");
            return StepResult {
                coords: x,
                accuracy: before,
                outcome: StepOutcome::Stalled,
            };
        }
        tracing::debug!(lambda, before, after, "gauss-newton step");
        let coords = &x - &d * lambda;
        StepResult {
            coords,
            accuracy: after,
            outcome: StepOutcome::Moved { lambda },
        }
    }

    /// Solution `d` of `(J^T J) d = J^T r`, or `None` when singular.
    fn direction(&self, x: &Coords) -> Option<Coords> {
        let r = self.system.residuals(x);
        let j = self.system.jacobian(x);
        let jt = j.transpose();
        let normal = &jt * &j;
        let rhs = &jt * &r;
        let d = normal.lu().solve(&rhs)?;
        d.iter().all(|v| v.is_finite()).then_some(d)
    }
}
