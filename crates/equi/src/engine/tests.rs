use super::*;
use crate::coords::point;
use crate::graph::special::{
    antiprism, cube, cube_map, dodecahedron, icosahedron, octahedron, prism, pyramid, tetrahedron,
};
use crate::groups::Symmetries;
use rand::{rngs::StdRng, SeedableRng};

fn regular_tetrahedron() -> EmbeddedGraph {
    let c = 1.0 / (2.0 * 2f64.sqrt());
    let rows = vec![
        vec![c, c, c],
        vec![c, -c, -c],
        vec![-c, c, -c],
        vec![-c, -c, c],
    ];
    EmbeddedGraph::from_graph(tetrahedron().unwrap(), rows).unwrap()
}

fn centroid(e: &RealizationEngine) -> Vector3<f64> {
    let n = e.order();
    (0..n).map(|v| point(e.coords(), v)).sum::<Vector3<f64>>() / n as f64
}

#[test]
fn random_init_stays_in_box_and_is_seeded() {
    let g = prism(5).unwrap();
    let a = RealizationEngine::new(&g, &mut StdRng::seed_from_u64(9));
    let b = RealizationEngine::new(&g, &mut StdRng::seed_from_u64(9));
    assert_eq!(a.coords(), b.coords());
    assert_eq!(a.coords().len(), 30);
    assert!(a.coords().iter().all(|c| (-1.5..1.5).contains(c)));
}

#[test]
fn cube_seed_is_exact_and_recovers_from_perturbation() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut e = RealizationEngine::from_embedded(&cube().unwrap(), &mut rng);
    assert!(e.accuracy() < 1e-20);
    e.random_perturbation(0.2, &mut rng);
    assert!(e.accuracy() > 1e-6);
    let summary = e.multiple_steps(10, |_, _| {});
    assert_eq!(summary.steps, 10);
    assert!(!summary.cancelled);
    assert!(summary.accuracy < 1e-8, "accuracy {}", summary.accuracy);
    assert!((e.accuracy() - summary.accuracy).abs() < 1e-12);
}

#[test]
fn planar_embedding_falls_back_to_random() {
    let flat = EmbeddedGraph::from_graph(
        tetrahedron().unwrap(),
        vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0], vec![0.3, 0.3]],
    )
    .unwrap();
    let e = RealizationEngine::from_embedded(&flat, &mut StdRng::seed_from_u64(1));
    let r = RealizationEngine::new(flat.graph(), &mut StdRng::seed_from_u64(1));
    assert_eq!(e.coords(), r.coords());
}

#[test]
fn trivial_group_steps_never_lose_accuracy() {
    let mut e = RealizationEngine::new(&prism(5).unwrap(), &mut StdRng::seed_from_u64(2));
    let mut seen = vec![e.accuracy()];
    e.multiple_steps(6, |_, a| seen.push(a));
    assert_eq!(seen.len(), 7);
    for w in seen.windows(2) {
        assert!(w[1] <= w[0] * (1.0 + 1e-12), "{} -> {}", w[0], w[1]);
    }
}

#[test]
fn listener_sees_one_based_steps() {
    let mut e = RealizationEngine::new(&pyramid(4).unwrap(), &mut StdRng::seed_from_u64(4));
    let mut steps = Vec::new();
    e.multiple_steps(3, |s, _| steps.push(s));
    assert_eq!(steps, vec![1, 2, 3]);
    let mut single = Vec::new();
    e.single_step(|s, _| single.push(s));
    assert_eq!(single, vec![1]);
}

#[test]
fn symmetric_run_keeps_c4v_invariance() {
    let g = pyramid(4).unwrap();
    let sym = Symmetries::compute(&g);
    let c4v = sym.group().unwrap().realize("C4v").unwrap();
    let mut e = RealizationEngine::new(&g, &mut StdRng::seed_from_u64(8));
    e.set_group(c4v.clone()).unwrap();
    e.multiple_steps(4, |_, _| {});
    for el in c4v.elements() {
        for v in 0..5 {
            let lhs = point(e.coords(), el.perm.apply(v));
            let rhs = el.matrix * point(e.coords(), v);
            assert!((lhs - rhs).norm() < 1e-9);
        }
    }
}

fn min_edge(e: &RealizationEngine) -> f64 {
    e.solver()
        .system()
        .edges()
        .iter()
        .map(|&(u, v)| (point(e.coords(), u) - point(e.coords(), v)).norm())
        .fold(f64::INFINITY, f64::min)
}

/// Renames vertex `v` to `(v * step + shift) % n`; `step` must be coprime to `n`.
fn rotate_labels(g: &PlanarGraph, step: usize, shift: usize) -> PlanarGraph {
    let n = g.order();
    let sigma = |v: usize| (v * step + shift) % n;
    let mut nb = vec![Vec::new(); n];
    for v in 0..n {
        nb[sigma(v)] = g.neighbours(v).iter().map(|&w| sigma(w)).collect();
    }
    PlanarGraph::new(nb).unwrap()
}

#[test]
fn full_symmetry_solves_the_regular_solids() {
    let cases = [
        ("tetrahedron", tetrahedron().unwrap(), "Td"),
        ("cube", cube_map().unwrap(), "Oh"),
        ("cube relabelled", rotate_labels(&cube_map().unwrap(), 3, 1), "Oh"),
        ("antiprism3", antiprism(3).unwrap(), "Oh"),
        ("antiprism3 relabelled", rotate_labels(&antiprism(3).unwrap(), 5, 2), "Oh"),
        ("octahedron", octahedron().unwrap().graph().clone(), "Oh"),
        ("icosahedron", icosahedron().unwrap().graph().clone(), "Ih"),
        ("dodecahedron", dodecahedron().unwrap().graph().clone(), "Ih"),
        ("dodecahedron", dodecahedron().unwrap().graph().clone(), "Ih*"),
    ];
    for (name, g, caption) in cases {
        let sym = Symmetries::compute(&g);
        let group = sym.group().unwrap().realize(caption).unwrap();
        let mut e = RealizationEngine::new(&g, &mut StdRng::seed_from_u64(17));
        e.set_group(group).unwrap();
        e.symmetrize();
        assert!(e.accuracy() < 1e-10, "{name} {caption}: {}", e.accuracy());
        assert!(min_edge(&e) > 0.5, "{name} {caption}");
        let summary = e.multiple_steps(5, |_, _| {});
        assert!(summary.accuracy < 1e-10, "{name} {caption}: {}", summary.accuracy);
        assert!(min_edge(&e) > 0.5, "{name} {caption}");
    }
}

#[test]
fn symmetric_runs_keep_vertices_apart() {
    let cases = [
        ("pyramid4", pyramid(4).unwrap(), "C4v"),
        ("prism5", prism(5).unwrap(), "D5h"),
        ("prism6", prism(6).unwrap(), "D6h"),
    ];
    for (name, g, caption) in cases {
        let sym = Symmetries::compute(&g);
        let group = sym.group().unwrap().realize(caption).unwrap();
        let mut e = RealizationEngine::new(&g, &mut StdRng::seed_from_u64(23));
        e.set_group(group).unwrap();
        e.symmetrize();
        assert!(min_edge(&e) > 1e-6, "{name} {caption}");
        let summary = e.multiple_steps(8, |_, _| {});
        assert!(summary.accuracy.is_finite(), "{name} {caption}");
        assert!(min_edge(&e) > 1e-6, "{name} {caption}");
    }
}

#[test]
fn set_group_checks_degree() {
    let mut e = RealizationEngine::new(&tetrahedron().unwrap(), &mut StdRng::seed_from_u64(0));
    let err = e.set_group(ConcreteGroup::trivial(3)).unwrap_err();
    assert_eq!(
        err,
        GroupError::DegreeMismatch {
            expected: 4,
            got: 3
        }
    );
    e.clear_group();
    assert_eq!(e.group().order(), 1);
}

#[test]
fn cancel_before_run_takes_no_steps() {
    let mut e = RealizationEngine::new(&prism(4).unwrap(), &mut StdRng::seed_from_u64(3));
    let token = e.cancel_token();
    token.cancel();
    let before = e.accuracy();
    let summary = e.multiple_steps(5, |_, _| {});
    assert!(summary.cancelled);
    assert_eq!(summary.steps, 0);
    assert_eq!(summary.accuracy, before);
    let timed = e.timed_step(Duration::from_secs(1), |_, _| {});
    assert!(timed.cancelled);
    assert_eq!(timed.steps, 0);
    token.reset();
    assert_eq!(e.multiple_steps(1, |_, _| {}).steps, 1);
}

#[test]
fn cancel_from_listener_stops_after_current_step() {
    let mut e = RealizationEngine::new(&prism(4).unwrap(), &mut StdRng::seed_from_u64(3));
    let token = e.cancel_token();
    let summary = e.multiple_steps(10, |s: usize, _: f64| {
        if s == 2 {
            token.cancel();
        }
    });
    assert!(summary.cancelled);
    assert_eq!(summary.steps, 2);
}

#[test]
fn timed_step_stops_on_convergence() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut e = RealizationEngine::from_embedded(&regular_tetrahedron(), &mut rng);
    e.random_perturbation(0.05, &mut rng);
    let initial = e.accuracy();
    let summary = e.timed_step(Duration::from_secs(30), |_, _| {});
    assert!(!summary.cancelled);
    assert!(summary.accuracy <= initial * 1e-8);
    assert!(summary.steps < 50);
}

#[test]
fn timed_step_with_zero_budget_takes_one_step() {
    let mut e = RealizationEngine::new(&prism(6).unwrap(), &mut StdRng::seed_from_u64(12));
    let summary = e.timed_step(Duration::ZERO, |_, _| {});
    assert_eq!(summary.steps, 1);
}

#[test]
fn center_moves_centroid_to_origin() {
    let mut e = RealizationEngine::new(&prism(5).unwrap(), &mut StdRng::seed_from_u64(1));
    e.rescale(3.0);
    e.center();
    assert!(centroid(&e).norm() < 1e-12);
    // runs end centered as well
    let mut e = RealizationEngine::new(&prism(5).unwrap(), &mut StdRng::seed_from_u64(1));
    e.multiple_steps(2, |_, _| {});
    assert!(centroid(&e).norm() < 1e-12);
}

#[test]
fn on_sphere_projects_to_radius() {
    let mut e = RealizationEngine::new(&prism(5).unwrap(), &mut StdRng::seed_from_u64(7));
    e.on_sphere();
    for row in e.coordinates() {
        let r = Vector3::from(row).norm();
        assert!((r - 2.5).abs() < 1e-12);
    }
}

#[test]
fn skew_scales_axes_within_range() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut e = RealizationEngine::from_embedded(&cube().unwrap(), &mut rng);
    e.skew(&mut rng);
    // vertex 6 sits at (1, 1, 1), so its coordinates are the factors
    let f = point(e.coords(), 6);
    for c in f.iter() {
        assert!((0.5..2.0).contains(c), "factor {c}");
    }
    assert_eq!(point(e.coords(), 0), Vector3::zeros());
}

#[test]
fn perturbation_resets_nan() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut e = RealizationEngine::new(&tetrahedron().unwrap(), &mut rng);
    let mut x = e.coords().clone();
    x[4] = f64::NAN;
    e.set_coords(x).unwrap();
    e.random_perturbation(0.1, &mut rng);
    assert!(e.coords().iter().all(|c| c.is_finite()));
    assert!(e.coords()[4].abs() <= 0.05);
    assert!(e.set_coords(DVector::zeros(3)).is_err());
}

#[test]
fn user_symmetrize_normalizes_edge_length() {
    let g = prism(6).unwrap();
    let sym = Symmetries::compute(&g);
    let d6h = sym.group().unwrap().realize("D6h").unwrap();
    let mut e = RealizationEngine::new(&g, &mut StdRng::seed_from_u64(21));
    e.set_group(d6h).unwrap();
    e.symmetrize();
    let edges = e.solver().system().edges();
    let mean: f64 = edges
        .iter()
        .map(|&(u, v)| (point(e.coords(), u) - point(e.coords(), v)).norm())
        .sum::<f64>()
        / edges.len() as f64;
    assert!((mean - 1.0).abs() < 1e-12);
    // symmetrizing again only rescales by 1
    let before = e.coords().clone();
    e.symmetrize();
    assert!((e.coords() - &before).amax() < 1e-9);
}
