use super::*;
use crate::coords::Coords;
use crate::graph::special::{cube, cube_map, prism, tetrahedron};
use nalgebra::DVector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_coords(n: usize, seed: u64) -> Coords {
    let mut rng = StdRng::seed_from_u64(seed);
    DVector::from_fn(3 * n, |_, _| 3.0 * rng.gen::<f64>() - 1.5)
}

fn cube_coords() -> Coords {
    let e = cube().unwrap();
    DVector::from_iterator(24, (0..8).flat_map(|v| e.coordinates(v).to_vec()))
}

#[test]
fn equation_counts() {
    let s = ConstraintSystem::new(&cube_map().unwrap());
    assert_eq!(s.quads().len(), 6);
    assert_eq!(s.equation_count(), 6 + 12 + 6);
    // Pentagonal prism: two pentagons with 2 + 3 windows each, five squares.
    let s = ConstraintSystem::new(&prism(5).unwrap());
    assert_eq!(s.quads().len(), 15);
    assert_eq!(s.equation_count(), 6 + 15 + 15);
    assert_eq!(s.variable_count(), 30);
    // Triangles contribute no quads.
    let s = ConstraintSystem::new(&tetrahedron().unwrap());
    assert!(s.quads().is_empty());
}

#[test]
fn pentagon_windows_cover_every_rotation_once() {
    let s = ConstraintSystem::new(&prism(5).unwrap());
    for q in s.quads() {
        // no window repeats a vertex
        let mut v = q.to_vec();
        v.sort_unstable();
        v.dedup();
        assert_eq!(v.len(), 4);
    }
    let mut seen: Vec<[usize; 4]> = s.quads().to_vec();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), s.quads().len());
}

#[test]
fn regular_tetrahedron_is_exact() {
    let s = ConstraintSystem::new(&tetrahedron().unwrap());
    let c = 1.0 / (2.0 * 2f64.sqrt());
    let x = DVector::from_vec(vec![
        c, c, c, c, -c, -c, -c, c, -c, -c, -c, c,
    ]);
    assert!(s.accuracy(&x) < 1e-10);
}

#[test]
fn unit_cube_is_exact() {
    let s = ConstraintSystem::new(&cube_map().unwrap());
    let x = cube_coords();
    assert!(s.accuracy(&x) < 1e-20);
    let r = s.residuals(&x);
    assert!(r.iter().take(6).all(|&v| v == 0.0));
}

#[test]
fn accuracy_ignores_frame_rows() {
    let s = ConstraintSystem::new(&prism(5).unwrap());
    let x = random_coords(10, 3);
    let r = s.residuals(&x);
    let manual: f64 = r.iter().skip(6).map(|v| v * v).sum();
    assert!((s.accuracy(&x) - manual).abs() <= 1e-12 * manual.max(1.0));
}

#[test]
fn jacobian_matches_finite_differences() {
    let g = prism(5).unwrap();
    let s = ConstraintSystem::new(&g);
    let x = random_coords(g.order(), 11);
    let j = s.jacobian(&x);
    let h = 1e-6;
    for col in 0..s.variable_count() {
        let mut xp = x.clone();
        let mut xm = x.clone();
        xp[col] += h;
        xm[col] -= h;
        let fd = (s.residuals(&xp) - s.residuals(&xm)) / (2.0 * h);
        for row in 6..s.equation_count() {
            let a = j[(row, col)];
            assert!(
                (a - fd[row]).abs() <= 1e-5 * (1.0 + a.abs()),
                "row {row} col {col}: analytic {a}, numeric {}",
                fd[row]
            );
        }
    }
}

#[test]
fn frame_rows_fix_the_gauge() {
    let s = ConstraintSystem::new(&cube_map().unwrap());
    let x = cube_coords();
    let j = s.jacobian(&x);
    for k in 0..3 {
        assert_eq!(j[(k, k)], 1.0);
    }
    // vertex 1 at (1,0,0), vertex 0 at origin
    assert_eq!(j[(3, 3)], 0.0);
    assert_eq!(j[(3, 4)], 1.0);
    assert_eq!(j[(4, 5)], 1.0);
    // vertex 2 at (1,1,0): only the z-derivative of the half-plane row survives
    assert_eq!(j[(5, 8)], det3(0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0));
}

#[test]
fn golden_section_finds_parabola_minimum() {
    let m = golden_section(|t| (t - 0.7).powi(2), 0.2, 2.0, 1e-6);
    assert!((m - 0.7).abs() < 1e-5);
    // Monotone objective ends up at the lower edge of the bracket.
    let m = golden_section(|t| t, 0.2, 2.0, 1e-3);
    assert!(m < 0.2 + 1e-3);
}

#[test]
fn singular_system_leaves_coordinates() {
    let solver = GaussNewton::new(&cube_map().unwrap());
    let x = DVector::zeros(24);
    let res = solver.step_report(x.clone());
    assert_eq!(res.outcome, StepOutcome::Singular);
    assert_eq!(res.coords, x);
}

#[test]
fn step_converges_on_a_rigid_solid() {
    let solver = GaussNewton::new(&tetrahedron().unwrap());
    let c = 1.0 / (2.0 * 2f64.sqrt());
    let exact = [c, c, c, c, -c, -c, -c, c, -c, -c, -c, c];
    let mut x = DVector::from_iterator(12, exact.iter().enumerate().map(|(i, v)| {
        v + 0.01 * ((i % 5) as f64 - 2.0)
    }));
    let mut acc = solver.accuracy(&x);
    assert!(acc > 1e-6);
    for _ in 0..6 {
        x = solver.step(x);
        let next = solver.accuracy(&x);
        assert!(next <= acc);
        acc = next;
    }
    assert!(acc < 1e-12, "accuracy {acc}");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn step_never_increases_accuracy(seed in any::<u64>(), k in 3usize..7) {
        let g = prism(k).unwrap();
        let solver = GaussNewton::new(&g);
        let x = random_coords(g.order(), seed);
        let before = solver.accuracy(&x);
        let res = solver.step_report(x);
        prop_assert!(res.accuracy <= before);
        prop_assert_eq!(res.accuracy, solver.accuracy(&res.coords));
    }
}
