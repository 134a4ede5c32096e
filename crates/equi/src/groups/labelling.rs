//! Automorphisms of a rotation system via canonical BFS labellings.

use super::classify::classify_oriented;
use super::{AbstractGroup, OrderSignature, Perm};
use crate::graph::PlanarGraph;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

const SEPARATOR: usize = usize::MAX;

/// One breadth-first labelling, started at a dart and walking neighbours
/// clockwise or counterclockwise.
struct Labelling {
    /// `labels[v]` for every reached vertex.
    labels: Vec<Option<usize>>,
    /// Labels met while scanning neighbour lists, with a separator after each
    /// vertex. Two labellings are related by an automorphism iff their codes
    /// are equal.
    code: Vec<usize>,
}

impl Labelling {
    fn new(graph: &PlanarGraph, begin: usize, index: usize, clockwise: bool) -> Self {
        let n = graph.order();
        let mut labels = vec![None; n];
        let mut code = Vec::with_capacity(2 * graph.size() + n);
        // Queue entries: (vertex, position of the vertex we came from).
        let mut queue = VecDeque::new();
        let mut next_label = 1;
        labels[begin] = Some(0);
        queue.push_back((begin, index));
        while let Some((b, p)) = queue.pop_front() {
            let nbrs = graph.neighbours(b);
            let d = nbrs.len();
            for i in 0..d {
                let pos = if clockwise { (p + i) % d } else { (d + p - i) % d };
                let dest = nbrs[pos];
                let label = match labels[dest] {
                    Some(l) => l,
                    None => {
                        let l = next_label;
                        next_label += 1;
                        labels[dest] = Some(l);
                        queue.push_back((dest, graph.twin(b, pos)));
                        l
                    }
                };
                code.push(label);
            }
            code.push(SEPARATOR);
        }
        Self { labels, code }
    }

    /// Vertex carrying each label, if every vertex was reached.
    fn vertex_of_label(&self) -> Option<Vec<usize>> {
        let mut inv = vec![0; self.labels.len()];
        for (v, l) in self.labels.iter().enumerate() {
            inv[(*l)?] = v;
        }
        Some(inv)
    }
}

/// Darts used as labelling starts: each edge in both directions.
fn starts(graph: &PlanarGraph) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(2 * graph.size());
    for &(a, b) in graph.edges() {
        for (u, v) in [(a, b), (b, a)] {
            if let Some(i) = graph.position(u, v) {
                out.push((u, i));
            }
        }
    }
    out
}

/// All automorphisms (orientation-preserving and reversing), identity first.
///
/// Returns just the identity for graphs without edges, and `None` when the
/// graph is disconnected.
pub fn automorphisms(graph: &PlanarGraph) -> Option<Vec<Perm>> {
    oriented_automorphisms(graph).map(|autos| autos.into_iter().map(|(p, _)| p).collect())
}

/// Like `automorphisms`, with a flag that is `true` when the automorphism
/// keeps every clockwise neighbour order (a rotation, on a convex
/// realization) and `false` when it mirrors them.
pub fn oriented_automorphisms(graph: &PlanarGraph) -> Option<Vec<(Perm, bool)>> {
    let n = graph.order();
    let starts = starts(graph);
    let Some(&(v0, i0)) = starts.first() else {
        return (n <= 1).then(|| vec![(Perm::identity(n), true)]);
    };
    let reference = Labelling::new(graph, v0, i0, true);
    let ref_vertex = reference.vertex_of_label()?;
    let mut out = Vec::new();
    for &(v, i) in &starts {
        for clockwise in [true, false] {
            let other = Labelling::new(graph, v, i, clockwise);
            if other.code != reference.code {
                continue;
            }
            // Equal codes imply every vertex got a label.
            let images = other
                .labels
                .iter()
                .map(|l| l.map(|l| ref_vertex[l]))
                .collect::<Option<Vec<_>>>()?;
            out.push((Perm::from_images(images)?, clockwise));
        }
    }
    Some(out)
}

/// The orientation-preserving part of an automorphism group.
///
/// Shared by a group and all subgroups derived from it. Catalog matrices
/// with positive determinant may only be assigned to members.
#[derive(Clone, Debug)]
pub struct Orientation(Arc<HashSet<Perm>>);

impl Orientation {
    pub fn new(preserving: impl IntoIterator<Item = Perm>) -> Self {
        Self(Arc::new(preserving.into_iter().collect()))
    }

    #[inline]
    pub fn preserves(&self, p: &Perm) -> bool {
        self.0.contains(p)
    }

    /// Number of orientation-preserving automorphisms.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The automorphism group of one rotation system and its classification.
#[derive(Clone, Debug)]
pub struct Symmetries {
    degree: usize,
    automorphisms: Vec<Perm>,
    orientation: Orientation,
    signature: OrderSignature,
    group: Option<AbstractGroup>,
}

impl Symmetries {
    /// Enumerate automorphisms and classify them. Never fails: unmatched or
    /// disconnected graphs yield `group() == None` ("unknown").
    pub fn compute(graph: &PlanarGraph) -> Self {
        let degree = graph.order();
        let Some(oriented) = oriented_automorphisms(graph) else {
            tracing::warn!(order = degree, "labelling did not reach every vertex; group unknown");
            let id = Perm::identity(degree);
            return Self {
                degree,
                automorphisms: vec![id.clone()],
                orientation: Orientation::new([id.clone()]),
                signature: OrderSignature::of(&[id]),
                group: None,
            };
        };
        let orientation = Orientation::new(
            oriented
                .iter()
                .filter(|(_, keeps)| *keeps)
                .map(|(p, _)| p.clone()),
        );
        let automorphisms: Vec<Perm> = oriented.into_iter().map(|(p, _)| p).collect();
        let signature = OrderSignature::of(&automorphisms);
        let group = classify_oriented(degree, &automorphisms, &orientation);
        match &group {
            Some(g) => tracing::debug!(group = %g.kind(), order = automorphisms.len(), "classified"),
            None => tracing::warn!(
                order = automorphisms.len(),
                signature = %signature,
                "automorphism group not in catalog; group unknown"
            ),
        }
        Self {
            degree,
            automorphisms,
            orientation,
            signature,
            group,
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Automorphisms, identity first.
    #[inline]
    pub fn automorphisms(&self) -> &[Perm] {
        &self.automorphisms
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.automorphisms.len()
    }

    #[inline]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    #[inline]
    pub fn signature(&self) -> &OrderSignature {
        &self.signature
    }

    #[inline]
    pub fn group(&self) -> Option<&AbstractGroup> {
        self.group.as_ref()
    }

    /// Display name of the group, or `"unknown"`.
    pub fn name(&self) -> String {
        self.group
            .as_ref()
            .map_or_else(|| "unknown".to_string(), |g| g.kind().to_string())
    }
}
