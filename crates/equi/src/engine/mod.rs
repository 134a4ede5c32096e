//! Realization loop: Gauss–Newton steps interleaved with symmetrization.
//!
//! Purpose
//! - Own the coordinate vector of one realization and drive the stepper with
//!   a step budget (count or wall-clock), a per-step listener and a
//!   cooperative cancellation flag.
//!
//! Why this design (short)
//! - The stepper is a pure function of coordinates; all mutable state lives
//!   here, so a caller on another thread only shares the `CancelToken`.
//! - Symmetrization runs after every step. Accuracy is measured afterwards,
//!   so the listener sees the value of the coordinates actually kept.
//!
//! Conventions
//! - Runs end with `center()`; single steps center too.
//! - A cancel request stays set until `CancelToken::reset`.

use crate::cfg::LENGTH_EPS;
use crate::coords::{point, set_point, to_rows, Coords};
use crate::error::{GraphError, GroupError};
use crate::graph::{EmbeddedGraph, PlanarGraph};
use crate::groups::ConcreteGroup;
use crate::solver::GaussNewton;
use nalgebra::{DVector, Vector3};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Engine tunables.
#[derive(Clone, Copy, Debug)]
pub struct EngineCfg {
    /// `timed_step` stops once accuracy drops to `initial * convergence_ratio`.
    pub convergence_ratio: f64,
    /// Target radius of `on_sphere`.
    pub sphere_radius: f64,
    /// Random coordinates are uniform in `[-random_box, random_box)`.
    pub random_box: f64,
    /// Skew factors are uniform in `[skew_min, skew_min + skew_span)`.
    pub skew_min: f64,
    pub skew_span: f64,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            convergence_ratio: 1e-8,
            sphere_radius: 2.5,
            random_box: 1.5,
            skew_min: 0.5,
            skew_span: 1.5,
        }
    }
}

/// Called after every step with the 1-based step number and the accuracy
/// after symmetrization.
pub trait StepListener {
    fn on_step(&mut self, step: usize, accuracy: f64);
}

impl<F: FnMut(usize, f64)> StepListener for F {
    #[inline]
    fn on_step(&mut self, step: usize, accuracy: f64) {
        self(step, accuracy)
    }
}

/// Shared stop flag, checked between iterations.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Outcome of a multi-step run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps actually taken.
    pub steps: usize,
    /// Accuracy at the end of the run.
    pub accuracy: f64,
    /// True when the run stopped on the cancel token.
    pub cancelled: bool,
}

#[derive(Clone, Debug)]
pub struct RealizationEngine {
    solver: GaussNewton,
    coords: Coords,
    group: ConcreteGroup,
    cfg: EngineCfg,
    cancel: CancelToken,
}

impl RealizationEngine {
    /// Engine with random initial coordinates and the trivial group.
    pub fn new(graph: &PlanarGraph, rng: &mut impl Rng) -> Self {
        Self::with_cfg(graph, EngineCfg::default(), rng)
    }

    pub fn with_cfg(graph: &PlanarGraph, cfg: EngineCfg, rng: &mut impl Rng) -> Self {
        let n = graph.order();
        let mut engine = Self {
            solver: GaussNewton::new(graph),
            coords: DVector::zeros(3 * n),
            group: ConcreteGroup::trivial(n),
            cfg,
            cancel: CancelToken::new(),
        };
        engine.init_random_coordinates(rng);
        engine
    }

    /// Seed from the embedding when it is three-dimensional, otherwise start
    /// from random coordinates.
    pub fn from_embedded(embedded: &EmbeddedGraph, rng: &mut impl Rng) -> Self {
        let mut engine = Self::new(embedded.graph(), rng);
        if embedded.dimension() == 3 {
            for v in 0..embedded.graph().order() {
                let c = embedded.coordinates(v);
                set_point(&mut engine.coords, v, Vector3::new(c[0], c[1], c[2]));
            }
        } else {
            tracing::debug!(
                dimension = embedded.dimension(),
                "embedding is not 3-dimensional; using random coordinates"
            );
        }
        engine
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.coords.len() / 3
    }

    #[inline]
    pub fn solver(&self) -> &GaussNewton {
        &self.solver
    }

    #[inline]
    pub fn cfg(&self) -> EngineCfg {
        self.cfg
    }

    /// Flat coordinate vector.
    #[inline]
    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    /// Replace the coordinates; `coords` must hold three entries per vertex.
    pub fn set_coords(&mut self, coords: Coords) -> Result<(), GraphError> {
        if coords.len() != self.coords.len() {
            return Err(GraphError::CoordinateCount {
                expected: self.coords.len(),
                got: coords.len(),
            });
        }
        self.coords = coords;
        Ok(())
    }

    /// One `[x, y, z]` row per vertex.
    pub fn coordinates(&self) -> Vec<[f64; 3]> {
        to_rows(&self.coords)
    }

    /// Sum of squared shape residuals at the current coordinates.
    pub fn accuracy(&self) -> f64 {
        self.solver.accuracy(&self.coords)
    }

    pub fn group(&self) -> &ConcreteGroup {
        &self.group
    }

    /// Use `group` for every following step.
    pub fn set_group(&mut self, group: ConcreteGroup) -> Result<(), GroupError> {
        if group.degree() != self.order() {
            return Err(GroupError::DegreeMismatch {
                expected: self.order(),
                got: group.degree(),
            });
        }
        tracing::debug!(caption = group.caption(), order = group.order(), "group selected");
        self.group = group;
        Ok(())
    }

    pub fn clear_group(&mut self) {
        self.group = ConcreteGroup::trivial(self.order());
    }

    /// Handle for stopping a run from elsewhere.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn init_random_coordinates(&mut self, rng: &mut impl Rng) {
        let b = self.cfg.random_box;
        for c in self.coords.iter_mut() {
            *c = 2.0 * b * rng.gen::<f64>() - b;
        }
    }

    pub fn rescale(&mut self, factor: f64) {
        self.coords *= factor;
    }

    /// Jitter every coordinate by `(u - 0.5) * step`; NaN entries restart at 0.
    pub fn random_perturbation(&mut self, step: f64, rng: &mut impl Rng) {
        for c in self.coords.iter_mut() {
            if c.is_nan() {
                *c = 0.0;
            }
            *c += (rng.gen::<f64>() - 0.5) * step;
        }
    }

    /// Stretch each axis by an independent random factor.
    pub fn skew(&mut self, rng: &mut impl Rng) {
        let mut factor = || self.cfg.skew_min + self.cfg.skew_span * rng.gen::<f64>();
        let f = Vector3::new(factor(), factor(), factor());
        for v in 0..self.order() {
            let p = point(&self.coords, v);
            set_point(&mut self.coords, v, p.component_mul(&f));
        }
    }

    /// Push every vertex radially onto the sphere of radius `sphere_radius`.
    /// Vertices at the origin stay put.
    pub fn on_sphere(&mut self) {
        for v in 0..self.order() {
            let p = point(&self.coords, v);
            let norm = p.norm();
            if norm > LENGTH_EPS {
                set_point(&mut self.coords, v, p * (self.cfg.sphere_radius / norm));
            }
        }
    }

    /// Translate the centroid to the origin.
    pub fn center(&mut self) {
        let n = self.order();
        if n == 0 {
            return;
        }
        let centroid = (0..n).map(|v| point(&self.coords, v)).sum::<Vector3<f64>>() / n as f64;
        for v in 0..n {
            let p = point(&self.coords, v);
            set_point(&mut self.coords, v, p - centroid);
        }
    }

    /// Enforce the current group, then rescale to unit mean edge length.
    pub fn symmetrize(&mut self) {
        let coords = std::mem::replace(&mut self.coords, DVector::zeros(0));
        self.coords = self.group.symmetrize(coords);
        let edges = self.solver.system().edges();
        if edges.is_empty() {
            return;
        }
        let total: f64 = edges
            .iter()
            .map(|&(u, v)| (point(&self.coords, u) - point(&self.coords, v)).norm())
            .sum();
        let mean = total / edges.len() as f64;
        if mean > LENGTH_EPS {
            self.rescale(1.0 / mean);
        }
    }

    /// Gauss–Newton step followed by symmetrization; returns the accuracy.
    fn advance(&mut self) -> f64 {
        let coords = std::mem::replace(&mut self.coords, DVector::zeros(0));
        let stepped = self.solver.step(coords);
        self.coords = self.group.symmetrize(stepped);
        self.accuracy()
    }

    pub fn single_step(&mut self, mut listener: impl StepListener) -> f64 {
        let accuracy = self.advance();
        listener.on_step(1, accuracy);
        self.center();
        accuracy
    }

    /// Up to `count` steps; stops early when the cancel token is set.
    pub fn multiple_steps(&mut self, count: usize, mut listener: impl StepListener) -> RunSummary {
        let mut summary = RunSummary {
            steps: 0,
            accuracy: self.accuracy(),
            cancelled: false,
        };
        for i in 0..count {
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }
            summary.accuracy = self.advance();
            summary.steps = i + 1;
            listener.on_step(summary.steps, summary.accuracy);
        }
        self.center();
        tracing::info!(
            steps = summary.steps,
            accuracy = summary.accuracy,
            cancelled = summary.cancelled,
            "run finished"
        );
        summary
    }

    /// Step until `budget` has elapsed or accuracy has dropped by
    /// `convergence_ratio` relative to the start. At least one step is taken
    /// unless the token is already cancelled.
    pub fn timed_step(&mut self, budget: Duration, mut listener: impl StepListener) -> RunSummary {
        let deadline = Instant::now() + budget;
        let initial = self.accuracy();
        let target = initial * self.cfg.convergence_ratio;
        let mut summary = RunSummary {
            steps: 0,
            accuracy: initial,
            cancelled: false,
        };
        loop {
            if self.cancel.is_cancelled() {
                summary.cancelled = true;
                break;
            }
            summary.accuracy = self.advance();
            summary.steps += 1;
            listener.on_step(summary.steps, summary.accuracy);
            if summary.accuracy <= target || Instant::now() >= deadline {
                break;
            }
        }
        self.center();
        tracing::info!(
            steps = summary.steps,
            accuracy = summary.accuracy,
            cancelled = summary.cancelled,
            "timed run finished"
        );
        summary
    }
}

#[cfg(test)]
mod tests;
