use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

/// Permutation of `0..degree`, stored as the image list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Perm(Vec<usize>);

impl Perm {
    #[inline]
    pub fn identity(degree: usize) -> Self {
        Self((0..degree).collect())
    }

    /// `images[v]` is the image of `v`. Returns `None` unless `images` is a
    /// bijection of `0..images.len()`.
    pub fn from_images(images: Vec<usize>) -> Option<Self> {
        let mut seen = vec![false; images.len()];
        for &i in &images {
            if i >= images.len() || std::mem::replace(&mut seen[i], true) {
                return None;
            }
        }
        Some(Self(images))
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn apply(&self, v: usize) -> usize {
        self.0[v]
    }

    #[inline]
    pub fn images(&self) -> &[usize] {
        &self.0
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// `self ∘ other`: apply `other` first.
    pub fn compose(&self, other: &Perm) -> Perm {
        Perm(other.0.iter().map(|&v| self.0[v]).collect())
    }

    pub fn inverse(&self) -> Perm {
        let mut inv = vec![0; self.0.len()];
        for (i, &v) in self.0.iter().enumerate() {
            inv[v] = i;
        }
        Perm(inv)
    }

    pub fn pow(&self, k: usize) -> Perm {
        let mut out = Perm::identity(self.degree());
        let mut base = self.clone();
        let mut k = k;
        while k > 0 {
            if k & 1 == 1 {
                out = out.compose(&base);
            }
            base = base.compose(&base);
            k >>= 1;
        }
        out
    }

    /// `by ∘ self ∘ by⁻¹`.
    pub fn conjugate_by(&self, by: &Perm) -> Perm {
        by.compose(self).compose(&by.inverse())
    }

    pub fn commutes_with(&self, other: &Perm) -> bool {
        self.compose(other) == other.compose(self)
    }

    /// Least common multiple of the cycle lengths.
    pub fn order(&self) -> usize {
        let mut seen = vec![false; self.0.len()];
        let mut order = 1;
        for start in 0..self.0.len() {
            if seen[start] {
                continue;
            }
            let mut len = 0;
            let mut v = start;
            while !seen[v] {
                seen[v] = true;
                v = self.0[v];
                len += 1;
            }
            order = lcm(order, len);
        }
        order
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[inline]
pub(crate) fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

#[inline]
pub(crate) fn coprime(a: usize, b: usize) -> bool {
    gcd(a, b) == 1
}

impl fmt::Display for Perm {
    /// Cycle notation, fixed points omitted; `()` for the identity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut seen = vec![false; self.0.len()];
        let mut any = false;
        for start in 0..self.0.len() {
            if seen[start] || self.0[start] == start {
                continue;
            }
            any = true;
            write!(f, "(")?;
            let mut v = start;
            let mut first = true;
            while !seen[v] {
                seen[v] = true;
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
                first = false;
                v = self.0[v];
            }
            write!(f, ")")?;
        }
        if !any {
            write!(f, "()")?;
        }
        Ok(())
    }
}

/// Multiset of element orders: order → number of elements of that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderSignature(BTreeMap<usize, usize>);

impl OrderSignature {
    pub fn of(perms: &[Perm]) -> Self {
        let mut map = BTreeMap::new();
        for p in perms {
            *map.entry(p.order()).or_insert(0) += 1;
        }
        Self(map)
    }

    /// Number of elements of exactly this order.
    #[inline]
    pub fn count(&self, order: usize) -> usize {
        self.0.get(&order).copied().unwrap_or(0)
    }

    #[inline]
    pub fn involutions(&self) -> usize {
        self.count(2)
    }

    pub fn max_order(&self) -> usize {
        self.0.keys().next_back().copied().unwrap_or(1)
    }

    /// Group order.
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }
}

impl fmt::Display for OrderSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (order, count) in self.iter() {
            write!(f, "({order},{count})")?;
        }
        Ok(())
    }
}

/// Elements of the group generated by `gens`, identity first (BFS over right
/// multiplication by generators).
pub fn closure(degree: usize, gens: &[&Perm]) -> Vec<Perm> {
    let id = Perm::identity(degree);
    let mut seen: HashSet<Perm> = HashSet::new();
    let mut out = vec![id.clone()];
    let mut queue = VecDeque::new();
    seen.insert(id.clone());
    queue.push_back(id);
    while let Some(p) = queue.pop_front() {
        for g in gens {
            let q = p.compose(g);
            if seen.insert(q.clone()) {
                out.push(q.clone());
                queue.push_back(q);
            }
        }
    }
    out
}

/// Size of the group generated by `gens`.
#[inline]
pub fn closure_order(degree: usize, gens: &[&Perm]) -> usize {
    closure(degree, gens).len()
}
