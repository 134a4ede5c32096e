use super::special::{
    antiprism, cube, cube_map, dodecahedron, icosahedron, octahedron, prism, pyramid, tetrahedron,
};
use super::*;
use proptest::prelude::*;

#[test]
fn cube_faces_are_traced_clockwise() {
    let g = cube_map().unwrap();
    assert_eq!(g.order(), 8);
    assert_eq!(g.size(), 12);
    assert_eq!(
        g.faces(),
        &[
            vec![0, 1, 5, 4],
            vec![0, 3, 2, 1],
            vec![0, 4, 7, 3],
            vec![1, 2, 6, 5],
            vec![2, 3, 7, 6],
            vec![4, 5, 6, 7],
        ]
    );
    assert_eq!(g.euler_characteristic(), 2);
}

#[test]
fn edges_are_canonical_and_in_vertex_order() {
    let g = cube_map().unwrap();
    assert_eq!(
        g.edges(),
        &[
            (0, 1),
            (0, 3),
            (0, 4),
            (1, 5),
            (1, 2),
            (2, 6),
            (2, 3),
            (3, 7),
            (4, 7),
            (4, 5),
            (5, 6),
            (6, 7),
        ]
    );
}

#[test]
fn tetrahedron_has_four_triangles() {
    let g = tetrahedron().unwrap();
    assert_eq!(g.face_count(), 4);
    assert!(g.faces().iter().all(|f| f.len() == 3));
    assert_eq!(g.face(0), &[0, 3, 1]);
}

#[test]
fn square_pyramid_has_one_square() {
    let g = pyramid(4).unwrap();
    assert_eq!(g.neighbours(4), &[3, 2, 1, 0]);
    let squares: Vec<_> = g.faces().iter().filter(|f| f.len() == 4).collect();
    assert_eq!(squares, vec![&vec![0, 3, 2, 1]]);
    assert_eq!(g.euler_characteristic(), 2);
}

#[test]
fn twin_points_back() {
    let g = antiprism(5).unwrap();
    for v in 0..g.order() {
        for (i, &w) in g.neighbours(v).iter().enumerate() {
            assert_eq!(g.neighbours(w)[g.twin(v, i)], v);
        }
    }
}

#[test]
fn asymmetric_adjacency_is_rejected() {
    let err = PlanarGraph::new(vec![vec![1, 2], vec![2], vec![0, 1]]).unwrap_err();
    assert_eq!(err, GraphError::Inconsistent { from: 0, to: 1 });
    assert!(err.is_inconsistent_graph());
}

#[test]
fn out_of_range_and_repeated_neighbours_are_rejected() {
    let err = PlanarGraph::new(vec![vec![1], vec![0, 5]]).unwrap_err();
    assert!(matches!(err, GraphError::NeighbourOutOfRange { vertex: 1, neighbour: 5, .. }));
    let err = PlanarGraph::new(vec![vec![1, 1], vec![0]]).unwrap_err();
    assert!(matches!(err, GraphError::RepeatedNeighbour { vertex: 0, .. }));
    let err = PlanarGraph::new(vec![vec![0]]).unwrap_err();
    assert!(matches!(err, GraphError::RepeatedNeighbour { vertex: 0, neighbour: 0 }));
}

#[test]
fn embedding_checks_rows() {
    let nb = vec![vec![1], vec![0]];
    let err = EmbeddedGraph::new(nb.clone(), vec![vec![0.0, 0.0, 0.0]]).unwrap_err();
    assert_eq!(err, GraphError::CoordinateCount { expected: 2, got: 1 });
    assert!(err.is_invalid_embedding());
    let err = EmbeddedGraph::new(nb.clone(), vec![vec![0.0; 3], vec![0.0; 2]]).unwrap_err();
    assert_eq!(
        err,
        GraphError::CoordinateDimension {
            vertex: 1,
            expected: 3,
            got: 2
        }
    );
    let planar = EmbeddedGraph::new(nb, vec![vec![0.0; 2], vec![1.0; 2]]).unwrap();
    assert_eq!(planar.dimension(), 2);
}

#[test]
fn cube_embedding_is_three_dimensional() {
    let e = cube().unwrap();
    assert_eq!(e.dimension(), 3);
    assert_eq!(e.coordinates(6), &[1.0, 1.0, 1.0]);
}

/// Sign of the winding of every face as seen from outside.
fn face_windings(e: &EmbeddedGraph) -> Vec<bool> {
    let p = |v: usize| {
        let c = e.coordinates(v);
        nalgebra::Vector3::new(c[0], c[1], c[2])
    };
    e.graph()
        .faces()
        .iter()
        .map(|f| {
            let normal = (p(f[1]) - p(f[0])).cross(&(p(f[2]) - p(f[1])));
            normal.dot(&p(f[1])) > 0.0
        })
        .collect()
}

#[test]
fn regular_solids_have_expected_counts() {
    let cases = [
        ("octahedron", octahedron().unwrap(), (6, 12, 8), 3),
        ("icosahedron", icosahedron().unwrap(), (12, 30, 20), 3),
        ("dodecahedron", dodecahedron().unwrap(), (20, 30, 12), 5),
    ];
    for (name, e, (v, edges, f), face_len) in cases {
        let g = e.graph();
        assert_eq!((g.order(), g.size(), g.face_count()), (v, edges, f), "{name}");
        assert_eq!(g.euler_characteristic(), 2, "{name}");
        assert!(g.faces().iter().all(|face| face.len() == face_len), "{name}");
        assert_eq!(e.dimension(), 3);
    }
}

#[test]
fn regular_solids_wind_like_the_cube() {
    let cube = cube().unwrap();
    // the cube is not centered, so shift its rows first
    let shifted: Vec<Vec<f64>> = (0..8)
        .map(|v| cube.coordinates(v).iter().map(|c| c - 0.5).collect())
        .collect();
    let cube = EmbeddedGraph::from_graph(cube.graph().clone(), shifted).unwrap();
    let reference = face_windings(&cube);
    assert!(reference.iter().all(|&w| w == reference[0]));
    for e in [octahedron().unwrap(), icosahedron().unwrap(), dodecahedron().unwrap()] {
        assert!(face_windings(&e).iter().all(|&w| w == reference[0]));
    }
}

#[test]
fn graph_data_reads_json() {
    let json = r#"{"neighbours": [[3,2,1],[2,3,0],[3,1,0],[2,0,1]]}"#;
    let data: GraphData = serde_json::from_str(json).unwrap();
    match data.build().unwrap() {
        InputGraph::Plain(g) => assert_eq!(g.size(), 6),
        InputGraph::Embedded(_) => panic!("no coordinates were given"),
    }
    let json = r#"{"neighbours": [[1],[0]], "coordinates": [[0,0,0],[1,0,0]]}"#;
    let data: GraphData = serde_json::from_str(json).unwrap();
    assert!(matches!(data.build().unwrap(), InputGraph::Embedded(_)));
}

proptest! {
    #[test]
    fn families_satisfy_euler(k in 3usize..16) {
        for g in [prism(k).unwrap(), antiprism(k).unwrap(), pyramid(k).unwrap()] {
            prop_assert_eq!(g.euler_characteristic(), 2);
            let degree_sum: usize = (0..g.order()).map(|v| g.degree(v)).sum();
            prop_assert_eq!(g.size() * 2, degree_sum);
            let dart_count: usize = g.faces().iter().map(Vec::len).sum();
            prop_assert_eq!(dart_count, degree_sum);
            prop_assert!(g.edges().iter().all(|&(v, w)| v < w));
        }
    }

    #[test]
    fn edge_derivation_is_stable(k in 3usize..12) {
        let a = prism(k).unwrap();
        let b = PlanarGraph::new(GraphData::from(&a).neighbours).unwrap();
        prop_assert_eq!(a.edges(), b.edges());
        prop_assert_eq!(a.faces(), b.faces());
    }
}
