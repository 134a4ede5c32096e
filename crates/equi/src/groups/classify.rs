//! Recognize an automorphism group from its order signature.
//!
//! The predicates below were matched against small known cases and are not
//! proven exhaustive; anything that fails them is reported as unknown
//! instead of being forced onto the nearest catalog entry.
//!
//! When the orientation of each automorphism is known, generators are picked
//! so their orientation matches the determinant the catalog assigns to their
//! slot. Otherwise the map to matrices can be an abstract isomorphism that no
//! rigid motion induces, and symmetrization then forces vertices together.

use super::kind::{AbstractGroup, AbstractGroupKind as K};
use super::labelling::Orientation;
use super::{OrderSignature, Perm};

/// Orientation wanted for a generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sense {
    Any,
    Preserving,
    Reversing,
}

struct Search<'a> {
    perms: &'a [Perm],
    orders: Vec<usize>,
    orientation: Option<&'a Orientation>,
}

impl<'a> Search<'a> {
    fn new(perms: &'a [Perm], orientation: Option<&'a Orientation>) -> Self {
        Self {
            perms,
            orders: perms.iter().map(Perm::order).collect(),
            orientation,
        }
    }

    fn of_order(&self, k: usize) -> impl Iterator<Item = &'a Perm> + '_ {
        self.perms
            .iter()
            .zip(&self.orders)
            .filter(move |&(_, &o)| o == k)
            .map(|(p, _)| p)
    }

    fn has_sense(&self, p: &Perm, sense: Sense) -> bool {
        match (sense, self.orientation) {
            (Sense::Any, _) | (_, None) => true,
            (Sense::Preserving, Some(o)) => o.preserves(p),
            (Sense::Reversing, Some(o)) => !o.preserves(p),
        }
    }

    /// First element of order `k` satisfying `accept`, preferring `sense`.
    fn find(&self, k: usize, sense: Sense, accept: impl Fn(&Perm) -> bool) -> Option<Perm> {
        let mut fallback = None;
        for p in self.of_order(k).filter(|p| accept(*p)) {
            if self.has_sense(p, sense) {
                return Some(p.clone());
            }
            if fallback.is_none() {
                fallback = Some(p);
            }
        }
        fallback.cloned()
    }

    /// Like `find`, but `sense` is mandatory when orientation is known.
    fn find_strict(&self, k: usize, sense: Sense, accept: impl Fn(&Perm) -> bool) -> Option<Perm> {
        self.of_order(k)
            .find(|p| accept(*p) && self.has_sense(p, sense))
            .cloned()
    }

    fn element_of_order(&self, k: usize, sense: Sense) -> Option<Perm> {
        self.find(k, sense, |_| true)
    }

    fn is_central(&self, p: &Perm) -> bool {
        self.perms.iter().all(|q| p.commutes_with(q))
    }
}

/// Classify `perms` (a complete automorphism group, identity first).
/// Returns `None` when no catalog entry matches.
///
/// Orientation is unknown here, so realizations are not filtered by it.
/// Prefer `classify_oriented` for groups coming from a rotation system.
pub fn classify(degree: usize, perms: &[Perm]) -> Option<AbstractGroup> {
    run(degree, perms, None)
}

/// Classify the automorphisms of a rotation system; `orientation` holds the
/// ones that keep the clockwise order.
pub fn classify_oriented(
    degree: usize,
    perms: &[Perm],
    orientation: &Orientation,
) -> Option<AbstractGroup> {
    run(degree, perms, Some(orientation))
}

fn run(degree: usize, perms: &[Perm], orientation: Option<&Orientation>) -> Option<AbstractGroup> {
    use Sense::{Any, Preserving, Reversing};
    let sig = OrderSignature::of(perms);
    let order = perms.len();
    let s = Search::new(perms, orientation);
    let max = sig.max_order();
    let involutions = sig.involutions();
    let group = |kind, gens| Some(AbstractGroup::new(kind, degree, gens, orientation.cloned()));

    if order <= 1 {
        return group(K::Trivial, Vec::new());
    }
    if max == order {
        return group(K::Cyclic(order), vec![s.element_of_order(order, Preserving)?]);
    }
    if order == 4 && involutions == 3 {
        return group(K::Klein, vec![perms[1].clone(), perms[2].clone()]);
    }
    let half = order / 2;
    if order % 2 == 0 && max == half && involutions == half + 1 - half % 2 {
        let g = s.element_of_order(half, Preserving)?;
        let mirror = s.find(2, Reversing, |p| g.compose(p).order() == 2)?;
        return group(K::Dihedral(half), vec![g, mirror]);
    }
    if order == 8 && involutions == 7 {
        let (a, b) = (&perms[1], &perms[2]);
        let ab = a.compose(b);
        let c = perms[3..]
            .iter()
            .find(|p| **p != ab && !p.is_identity() && *p != a && *p != b)?;
        return group(K::ElementaryAbelian8, vec![a.clone(), b.clone(), c.clone()]);
    }
    if order % 4 == 0 && max == half && involutions == 3 {
        let g = s.element_of_order(half, Preserving)?;
        let h = g.pow(half / 2);
        let central = s.find(2, Any, |p| h.compose(p).order() == 2)?;
        return group(K::DoubleCyclic(half), vec![g, central]);
    }
    let quarter = order / 4;
    if order % 8 == 0 && max == quarter && involutions == 2 * quarter + 1 + 2 * (1 - quarter % 2)
    {
        let g = s.element_of_order(quarter, Preserving)?;
        let h = g.pow(quarter / 2);
        let central = s.find(2, Any, |p| *p != h && s.is_central(p))?;
        let mirror = s.find(2, Reversing, |p| !s.is_central(p))?;
        return group(K::DoubleDihedral(quarter), vec![g, mirror, central]);
    }
    match order {
        120 => {
            let g5i = s.element_of_order(10, Any)?;
            let g5 = g5i.pow(6);
            let g3 = s.find(3, Any, |p| g5.compose(p).order() == 2)?;
            group(K::DoubleAlt5, vec![g5i, g3])
        }
        60 => {
            let g5 = s.element_of_order(5, Any)?;
            let g3 = s.find(3, Any, |p| g5.compose(p).order() == 2)?;
            group(K::Alt5, vec![g5, g3])
        }
        48 => {
            // The rotoreflections of order 4 satisfy the same relation as
            // the 4-fold rotations; only a rotation fits the catalog.
            let g3i = s.element_of_order(6, Any)?;
            let g3 = g3i.pow(4);
            let g4 = s.find_strict(4, Preserving, |p| g3.compose(p).order() == 2)?;
            group(K::DoubleSym4, vec![g3i, g4])
        }
        24 if involutions == 7 => {
            let g3i = s.element_of_order(6, Any)?;
            let g2 = s.find_strict(2, Preserving, |p| g3i.compose(p).order() == 6)?;
            group(K::DoubleAlt4, vec![g3i, g2])
        }
        24 if involutions == 9 => {
            let g3 = s.element_of_order(3, Any)?;
            let g4 = s.find(4, Any, |p| g3.compose(p).order() == 2)?;
            group(K::Sym4, vec![g3, g4])
        }
        12 if involutions == 3 && sig.count(3) == 8 => {
            let g3 = s.element_of_order(3, Any)?;
            let g2 = s.element_of_order(2, Any)?;
            group(K::Alt4, vec![g3, g2])
        }
        _ => None,
    }
}
