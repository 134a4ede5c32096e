use super::Perm;
use crate::cfg::MATRIX_EPS;
use crate::coords::{point, set_point, Coords};
use crate::error::GroupError;
use nalgebra::{Matrix3, Vector3};
use std::collections::{HashMap, VecDeque};

/// A group element acting on vertices and on space at once.
#[derive(Clone, Debug)]
pub struct PointGroupElement {
    pub perm: Perm,
    pub inverse: Perm,
    pub matrix: Matrix3<f64>,
}

/// Finite group of `(permutation, orthogonal matrix)` pairs plus the vertex
/// orbits it induces. Used only for symmetrization.
#[derive(Clone, Debug)]
pub struct ConcreteGroup {
    caption: String,
    degree: usize,
    elements: Vec<PointGroupElement>,
    orbit_representatives: Vec<usize>,
}

impl ConcreteGroup {
    /// Identity only; `symmetrize` is a no-op.
    pub fn trivial(degree: usize) -> Self {
        let id = Perm::identity(degree);
        Self {
            caption: "1".to_string(),
            degree,
            elements: vec![PointGroupElement {
                perm: id.clone(),
                inverse: id,
                matrix: Matrix3::identity(),
            }],
            orbit_representatives: (0..degree).collect(),
        }
    }

    /// Close `generators` under multiplication (BFS from the identity).
    ///
    /// Elements are deduplicated by permutation. When a product reaches a
    /// known permutation its matrix must agree with the stored one, otherwise
    /// the assignment is not a homomorphism and we fail with
    /// `GroupError::InconsistentRealization`.
    pub fn build(
        caption: String,
        degree: usize,
        generators: Vec<(Perm, Matrix3<f64>)>,
    ) -> Result<Self, GroupError> {
        if let Some((p, _)) = generators.iter().find(|(p, _)| p.degree() != degree) {
            return Err(GroupError::DegreeMismatch {
                expected: degree,
                got: p.degree(),
            });
        }
        let id = Perm::identity(degree);
        let mut elements = vec![PointGroupElement {
            perm: id.clone(),
            inverse: id.clone(),
            matrix: Matrix3::identity(),
        }];
        let mut index: HashMap<Perm, usize> = HashMap::from([(id, 0)]);
        let mut queue = VecDeque::from([0usize]);
        let mut deviation: f64 = 0.0;
        while let Some(i) = queue.pop_front() {
            for (gp, gm) in &generators {
                let perm = elements[i].perm.compose(gp);
                let matrix = elements[i].matrix * gm;
                match index.get(&perm) {
                    Some(&j) => {
                        deviation = deviation.max((elements[j].matrix - matrix).amax());
                    }
                    None => {
                        index.insert(perm.clone(), elements.len());
                        queue.push_back(elements.len());
                        elements.push(PointGroupElement {
                            inverse: perm.inverse(),
                            perm,
                            matrix,
                        });
                    }
                }
            }
        }
        if deviation > MATRIX_EPS {
            return Err(GroupError::InconsistentRealization {
                caption,
                deviation,
            });
        }
        let orbit_representatives = orbit_representatives(degree, &elements);
        tracing::debug!(%caption, order = elements.len(), orbits = orbit_representatives.len(), "point group built");
        Ok(Self {
            caption,
            degree,
            elements,
            orbit_representatives,
        })
    }

    #[inline]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn elements(&self) -> &[PointGroupElement] {
        &self.elements
    }

    /// One vertex per orbit, smallest index first.
    #[inline]
    pub fn orbit_representatives(&self) -> &[usize] {
        &self.orbit_representatives
    }

    /// Orbit averaging: for each representative `p`, average `M_g x[g⁻¹(p)]`
    /// over all `g`, then write `M_g · average` to `x[g(p)]`. The result is
    /// exactly invariant and a second call changes nothing.
    pub fn symmetrize(&self, mut coords: Coords) -> Coords {
        if self.elements.len() <= 1 {
            return coords;
        }
        let scale = 1.0 / self.elements.len() as f64;
        for &p in &self.orbit_representatives {
            let mut reference = Vector3::zeros();
            for g in &self.elements {
                reference += g.matrix * point(&coords, g.inverse.apply(p));
            }
            reference *= scale;
            for g in &self.elements {
                set_point(&mut coords, g.perm.apply(p), g.matrix * reference);
            }
        }
        coords
    }
}

fn orbit_representatives(degree: usize, elements: &[PointGroupElement]) -> Vec<usize> {
    let mut marked = vec![false; degree];
    let mut reps = Vec::new();
    for v in 0..degree {
        if marked[v] {
            continue;
        }
        reps.push(v);
        for g in elements {
            marked[g.perm.apply(v)] = true;
        }
    }
    reps
}
