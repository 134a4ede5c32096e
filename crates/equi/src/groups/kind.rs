//! Catalog of abstract groups: kinds, generator slots, point-group
//! correspondences and subgroup rules.
//!
//! Each kind has a fixed list of named generator slots. A `Realization` sends
//! words in those slots to orthogonal matrices; any assignment listed here
//! respects the defining relations of its kind, so the closure in
//! `ConcreteGroup::build` is a homomorphism.

use super::concrete::ConcreteGroup;
use super::labelling::Orientation;
use super::perm::{closure, closure_order, coprime};
use super::point::{
    half_turn_x, half_turn_y, half_turn_z, inversion, mirror_h, mirror_v, rot_3, rot_4, rot_5,
    rot_5_star, rotation_frac, rotoreflection_frac,
};
use super::Perm;
use crate::error::GroupError;
use nalgebra::Matrix3;
use std::fmt;

/// Closed catalog of isomorphism types recognized by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbstractGroupKind {
    Trivial,
    /// `Z(n)`.
    Cyclic(usize),
    /// `Dih(n)`, order `2n`.
    Dihedral(usize),
    /// `Z(n) × Z(2)`, `n` even.
    DoubleCyclic(usize),
    /// `Dih(n) × Z(2)`, `n` even.
    DoubleDihedral(usize),
    /// `Z(2)^2`.
    Klein,
    /// `Z(2)^3`.
    ElementaryAbelian8,
    Alt4,
    Sym4,
    /// `Alt(4) × Z(2)`.
    DoubleAlt4,
    /// `Sym(4) × Z(2)`.
    DoubleSym4,
    Alt5,
    /// `Alt(5) × Z(2)`.
    DoubleAlt5,
}

/// Named generator positions of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneratorSlot {
    Rotation,
    Mirror,
    Central,
    InvolutionA,
    InvolutionB,
    InvolutionC,
    TwoFold,
    ThreeFold,
    FourFold,
    FiveFold,
    SixFoldInverted,
    TenFoldInverted,
}

impl fmt::Display for GeneratorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Rotation => "n-fold rotation",
            Self::Mirror => "mirror",
            Self::Central => "central involution",
            Self::InvolutionA => "involution a",
            Self::InvolutionB => "involution b",
            Self::InvolutionC => "involution c",
            Self::TwoFold => "2-fold rotation",
            Self::ThreeFold => "3-fold rotation",
            Self::FourFold => "4-fold rotation",
            Self::FiveFold => "5-fold rotation",
            Self::SixFoldInverted => "6-fold rotoinversion",
            Self::TenFoldInverted => "10-fold rotoinversion",
        };
        f.write_str(s)
    }
}

impl fmt::Display for AbstractGroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trivial => write!(f, "1"),
            Self::Cyclic(n) => write!(f, "Z({n})"),
            Self::Dihedral(n) => write!(f, "Dih({n})"),
            Self::DoubleCyclic(n) => write!(f, "2.Z({n})"),
            Self::DoubleDihedral(n) => write!(f, "2.Dih({n})"),
            Self::Klein => write!(f, "Z(2)^2"),
            Self::ElementaryAbelian8 => write!(f, "Z(2)^3"),
            Self::Alt4 => write!(f, "Alt(4)"),
            Self::Sym4 => write!(f, "Sym(4)"),
            Self::DoubleAlt4 => write!(f, "2.Alt(4)"),
            Self::DoubleSym4 => write!(f, "2.Sym(4)"),
            Self::Alt5 => write!(f, "Alt(5)"),
            Self::DoubleAlt5 => write!(f, "2.Alt(5)"),
        }
    }
}

impl AbstractGroupKind {
    pub fn order(&self) -> usize {
        match *self {
            Self::Trivial => 1,
            Self::Cyclic(n) => n,
            Self::Dihedral(n) | Self::DoubleCyclic(n) => 2 * n,
            Self::DoubleDihedral(n) => 4 * n,
            Self::Klein => 4,
            Self::ElementaryAbelian8 => 8,
            Self::Alt4 => 12,
            Self::Sym4 | Self::DoubleAlt4 => 24,
            Self::DoubleSym4 => 48,
            Self::Alt5 => 60,
            Self::DoubleAlt5 => 120,
        }
    }

    pub fn slots(&self) -> &'static [GeneratorSlot] {
        use GeneratorSlot::*;
        match self {
            Self::Trivial => &[],
            Self::Cyclic(_) => &[Rotation],
            Self::Dihedral(_) => &[Rotation, Mirror],
            Self::DoubleCyclic(_) => &[Rotation, Central],
            Self::DoubleDihedral(_) => &[Rotation, Mirror, Central],
            Self::Klein => &[InvolutionA, InvolutionB],
            Self::ElementaryAbelian8 => &[InvolutionA, InvolutionB, InvolutionC],
            Self::Alt4 => &[ThreeFold, TwoFold],
            Self::Sym4 => &[ThreeFold, FourFold],
            Self::DoubleAlt4 => &[SixFoldInverted, TwoFold],
            Self::DoubleSym4 => &[SixFoldInverted, FourFold],
            Self::Alt5 => &[FiveFold, ThreeFold],
            Self::DoubleAlt5 => &[TenFoldInverted, ThreeFold],
        }
    }
}

/// Product of generator powers, applied right to left like `Perm::compose`.
pub type Word = Vec<(GeneratorSlot, usize)>;

/// One point-group correspondence: a caption (Schoenflies-style) and the
/// matrix assigned to each word.
#[derive(Clone, Debug)]
pub struct Realization {
    pub caption: String,
    pub images: Vec<(Word, Matrix3<f64>)>,
}

impl Realization {
    fn new(caption: impl Into<String>, images: Vec<(Word, Matrix3<f64>)>) -> Self {
        Self {
            caption: caption.into(),
            images,
        }
    }
}

/// Step sizes `d` for rotations by `2π d / n`: coprime to `n`, at most `n/2`.
pub fn divisors(n: usize) -> Vec<usize> {
    let mut out: Vec<usize> = (1..=n / 2).filter(|&d| coprime(d, n)).collect();
    if out.is_empty() {
        out.push(1);
    }
    out
}

/// `n` or `n/d`.
fn num(n: usize, d: usize) -> String {
    if d == 1 {
        n.to_string()
    } else {
        format!("{n}/{d}")
    }
}

#[inline]
fn w(slot: GeneratorSlot) -> Word {
    vec![(slot, 1)]
}

fn w2(a: GeneratorSlot, b: GeneratorSlot) -> Word {
    vec![(a, 1), (b, 1)]
}

fn cyclic_catalog(n: usize) -> Vec<Realization> {
    use GeneratorSlot::Rotation;
    let mut out = Vec::new();
    for d in divisors(n) {
        out.push(Realization::new(
            format!("C{}", num(n, d)),
            vec![(w(Rotation), rotation_frac(n, d))],
        ));
    }
    if n % 2 == 0 {
        for d in divisors(n) {
            out.push(Realization::new(
                format!("S{}", num(n, d)),
                vec![(w(Rotation), rotoreflection_frac(n, d))],
            ));
        }
    }
    if n % 4 == 2 {
        for d in divisors(n / 2) {
            out.push(Realization::new(
                format!("C{}h", num(n / 2, d)),
                vec![(w(Rotation), rotoreflection_frac(n, 2 * d))],
            ));
        }
    }
    out
}

fn dihedral_catalog(n: usize) -> Vec<Realization> {
    use GeneratorSlot::{Mirror, Rotation};
    let mut out = Vec::new();
    for d in divisors(n) {
        out.push(Realization::new(
            format!("D{}", num(n, d)),
            vec![(w(Rotation), rotation_frac(n, d)), (w(Mirror), half_turn_x())],
        ));
    }
    for d in divisors(n) {
        out.push(Realization::new(
            format!("C{}v", num(n, d)),
            vec![(w(Rotation), rotation_frac(n, d)), (w(Mirror), mirror_v())],
        ));
    }
    if n % 2 == 0 {
        for d in divisors(n) {
            out.push(Realization::new(
                format!("D{}d", num(n / 2, d)),
                vec![(w(Rotation), rotoreflection_frac(n, d)), (w(Mirror), mirror_v())],
            ));
        }
    }
    if n % 4 == 2 {
        for d in divisors(n / 2) {
            out.push(Realization::new(
                format!("D{}h", num(n / 2, d)),
                vec![
                    (w(Rotation), rotoreflection_frac(n, 2 * d)),
                    (w(Mirror), mirror_v()),
                ],
            ));
        }
    }
    out
}

fn double_cyclic_catalog(n: usize) -> Vec<Realization> {
    use GeneratorSlot::{Central, Rotation};
    let mut out = Vec::new();
    for d in divisors(n) {
        out.push(Realization::new(
            format!("C{}h", num(n, d)),
            vec![(w(Rotation), rotation_frac(n, d)), (w(Central), mirror_h())],
        ));
        out.push(Realization::new(
            format!("C{}h'", num(n, d)),
            vec![(w(Rotation), rotation_frac(n, d)), (w(Central), inversion())],
        ));
    }
    out
}

fn double_dihedral_catalog(n: usize) -> Vec<Realization> {
    use GeneratorSlot::{Central, Mirror, Rotation};
    let mut out = Vec::new();
    for d in divisors(n) {
        out.push(Realization::new(
            format!("D{}h", num(n, d)),
            vec![
                (w(Rotation), rotation_frac(n, d)),
                (w(Mirror), mirror_v()),
                (w(Central), inversion()),
            ],
        ));
        out.push(Realization::new(
            format!("D{}h'", num(n, d)),
            vec![
                (w(Rotation), rotation_frac(n, d)),
                (w(Mirror), mirror_v()),
                (vec![(Rotation, n / 2), (Central, 1)], inversion()),
            ],
        ));
    }
    out
}

fn klein_catalog() -> Vec<Realization> {
    use GeneratorSlot::{InvolutionA as A, InvolutionB as B};
    let mut out = vec![Realization::new(
        "D2",
        vec![(w(A), half_turn_y()), (w(B), half_turn_x())],
    )];
    // C2v: one of a, b, ab is the rotation.
    let pairs = [(w(A), w(B)), (w(B), w(A)), (w2(A, B), w(A))];
    for (i, (rot, mir)) in pairs.into_iter().enumerate() {
        out.push(Realization::new(
            format!("C2v{}", "'".repeat(i)),
            vec![(rot, half_turn_z()), (mir, mirror_v())],
        ));
    }
    // C2h: a and b take two of {rotation, mirror, inversion}.
    let targets = [half_turn_z(), mirror_h(), inversion()];
    let mut k = 0;
    for (i, ma) in targets.iter().enumerate() {
        for (j, mb) in targets.iter().enumerate() {
            if i != j {
                out.push(Realization::new(
                    format!("C2h{}", "'".repeat(k)),
                    vec![(w(A), *ma), (w(B), *mb)],
                ));
                k += 1;
            }
        }
    }
    out
}

fn elementary_abelian8_catalog() -> Vec<Realization> {
    use GeneratorSlot::{InvolutionA as A, InvolutionB as B, InvolutionC as C};
    let a = || w(A);
    let b = || w(B);
    let c = || w(C);
    let ab = || w2(A, B);
    let bc = || w2(B, C);
    let ca = || w2(C, A);
    let abc = || vec![(A, 1), (B, 1), (C, 1)];
    let triples: Vec<(Word, Word, Word)> = vec![
        (a(), b(), c()),
        (b(), c(), a()),
        (c(), a(), b()),
        (a(), b(), ca()),
        (b(), c(), ab()),
        (c(), a(), bc()),
        (ca(), bc(), c()),
        (ab(), ca(), a()),
        (bc(), ab(), b()),
        (c(), abc(), ca()),
        (a(), abc(), ab()),
        (b(), abc(), bc()),
        (a(), bc(), c()),
        (b(), ca(), a()),
        (c(), ab(), b()),
        (c(), bc(), a()),
        (a(), ca(), b()),
        (b(), ab(), c()),
        (ca(), bc(), abc()),
    ];
    triples
        .into_iter()
        .enumerate()
        .map(|(i, (x, y, z))| {
            Realization::new(
                format!("D2h#{}", i + 1),
                vec![(x, half_turn_y()), (y, half_turn_x()), (z, inversion())],
            )
        })
        .collect()
}

/// Point-group correspondences of a kind; the trivial kind has only `"1"`.
pub fn catalog(kind: AbstractGroupKind) -> Vec<Realization> {
    use AbstractGroupKind as K;
    use GeneratorSlot::*;
    match kind {
        K::Trivial => vec![Realization::new("1", Vec::new())],
        K::Cyclic(n) => cyclic_catalog(n),
        K::Dihedral(n) => dihedral_catalog(n),
        K::DoubleCyclic(n) => double_cyclic_catalog(n),
        K::DoubleDihedral(n) => double_dihedral_catalog(n),
        K::Klein => klein_catalog(),
        K::ElementaryAbelian8 => elementary_abelian8_catalog(),
        K::Alt4 => vec![Realization::new(
            "T",
            vec![(w(ThreeFold), rot_3()), (w(TwoFold), half_turn_y())],
        )],
        K::Sym4 => vec![
            Realization::new("O", vec![(w(ThreeFold), rot_3()), (w(FourFold), rot_4())]),
            Realization::new("Td", vec![(w(ThreeFold), rot_3()), (w(FourFold), -rot_4())]),
        ],
        K::DoubleAlt4 => vec![Realization::new(
            "Th",
            vec![(w(SixFoldInverted), -rot_3()), (w(TwoFold), half_turn_y())],
        )],
        K::DoubleSym4 => vec![Realization::new(
            "Oh",
            vec![(w(SixFoldInverted), -rot_3()), (w(FourFold), rot_4())],
        )],
        K::Alt5 => vec![
            Realization::new("I", vec![(w(FiveFold), rot_5()), (w(ThreeFold), rot_3())]),
            Realization::new("I*", vec![(w(FiveFold), rot_5_star()), (w(ThreeFold), rot_3())]),
        ],
        K::DoubleAlt5 => vec![
            Realization::new(
                "Ih",
                vec![(w(TenFoldInverted), -rot_5()), (w(ThreeFold), rot_3())],
            ),
            Realization::new(
                "Ih*",
                vec![(w(TenFoldInverted), -rot_5_star()), (w(ThreeFold), rot_3())],
            ),
        ],
    }
}

/// An abstract group with concrete generator permutations for its slots.
///
/// When the orientation of the permutations is known, only realizations
/// whose matrix determinants agree with it are offered.
#[derive(Clone, Debug)]
pub struct AbstractGroup {
    kind: AbstractGroupKind,
    degree: usize,
    generators: Vec<Perm>,
    orientation: Option<Orientation>,
}

impl AbstractGroup {
    /// `generators` follow `kind.slots()`.
    pub(crate) fn new(
        kind: AbstractGroupKind,
        degree: usize,
        generators: Vec<Perm>,
        orientation: Option<Orientation>,
    ) -> Self {
        debug_assert_eq!(generators.len(), kind.slots().len());
        Self {
            kind,
            degree,
            generators,
            orientation,
        }
    }

    /// A group on the same points sharing this group's orientation.
    fn sibling(&self, kind: AbstractGroupKind, generators: Vec<Perm>) -> Self {
        Self::new(kind, self.degree, generators, self.orientation.clone())
    }

    #[inline]
    pub fn kind(&self) -> AbstractGroupKind {
        self.kind
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.kind.order()
    }

    /// Number of points the permutations act on.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// `(slot, permutation)` pairs.
    pub fn generators(&self) -> impl Iterator<Item = (GeneratorSlot, &Perm)> + '_ {
        self.kind.slots().iter().copied().zip(self.generators.iter())
    }

    pub fn generator(&self, slot: GeneratorSlot) -> Option<&Perm> {
        self.generators().find(|(s, _)| *s == slot).map(|(_, p)| p)
    }

    /// Evaluate a word in the generator slots.
    pub fn word(&self, word: &[(GeneratorSlot, usize)]) -> Option<Perm> {
        let mut out = Perm::identity(self.degree);
        for &(slot, power) in word {
            out = out.compose(&self.generator(slot)?.pow(power));
        }
        Some(out)
    }

    /// `Some(true)` when `p` keeps the clockwise order, `None` when unknown.
    pub fn preserves_orientation(&self, p: &Perm) -> Option<bool> {
        self.orientation.as_ref().map(|o| o.preserves(p))
    }

    /// First word of `r` whose matrix determinant disagrees with the
    /// orientation of its permutation.
    fn orientation_conflict<'r>(&self, r: &'r Realization) -> Option<&'r Word> {
        r.images.iter().find_map(|(word, m)| {
            let keeps = self.preserves_orientation(&self.word(word)?)?;
            (keeps != (m.determinant() > 0.0)).then_some(word)
        })
    }

    /// Catalog entries compatible with the known orientation.
    pub fn realizations(&self) -> Vec<Realization> {
        catalog(self.kind)
            .into_iter()
            .filter(|r| self.orientation_conflict(r).is_none())
            .collect()
    }

    pub fn captions(&self) -> Vec<String> {
        self.realizations().into_iter().map(|r| r.caption).collect()
    }

    /// Build the concrete point group named `caption`.
    pub fn realize(&self, caption: &str) -> Result<ConcreteGroup, GroupError> {
        let r = catalog(self.kind)
            .into_iter()
            .find(|r| r.caption == caption)
            .ok_or_else(|| GroupError::UnknownRealization {
                caption: caption.to_string(),
                group: self.kind.to_string(),
            })?;
        self.realize_with(&r)
    }

    /// Fails with `OrientationMismatch` when a rotation is assigned to a
    /// mirroring automorphism or the other way round, and with
    /// `InconsistentRealization` when the matrices are not a homomorphism.
    pub fn realize_with(&self, r: &Realization) -> Result<ConcreteGroup, GroupError> {
        if let Some(word) = self.orientation_conflict(r) {
            return Err(GroupError::OrientationMismatch {
                caption: r.caption.clone(),
                group: self.kind.to_string(),
                word: format_word(word),
            });
        }
        let mut gens = Vec::with_capacity(r.images.len());
        for (word, m) in &r.images {
            let p = self.word(word).ok_or_else(|| GroupError::UnknownRealization {
                caption: r.caption.clone(),
                group: self.kind.to_string(),
            })?;
            gens.push((p, *m));
        }
        ConcreteGroup::build(r.caption.clone(), self.degree, gens)
    }

    /// Subgroups offered as weaker symmetry constraints; the group itself
    /// comes first.
    pub fn subgroups(&self) -> Vec<AbstractGroup> {
        let mut out = vec![self.clone()];
        out.extend(derive_subgroups(self));
        out
    }
}

/// Render a word for error messages, leftmost factor applied last.
fn format_word(word: &[(GeneratorSlot, usize)]) -> String {
    word.iter()
        .map(|(slot, k)| match k {
            1 => format!("[{slot}]"),
            _ => format!("[{slot}]^{k}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First candidate reversing orientation, else the first candidate.
fn prefer_reversing<'p>(
    g: &AbstractGroup,
    mut candidates: impl Iterator<Item = &'p Perm> + Clone,
) -> Option<&'p Perm> {
    candidates
        .clone()
        .find(|p| g.preserves_orientation(p) == Some(false))
        .or_else(|| candidates.next())
}

fn derive_subgroups(g: &AbstractGroup) -> Vec<AbstractGroup> {
    use AbstractGroupKind as K;
    let n = g.degree;
    let gens = &g.generators;
    let sub = |kind: AbstractGroupKind, perms: Vec<Perm>| g.sibling(kind, perms);
    let cyclic = |p: Perm| {
        let k = p.order();
        sub(K::Cyclic(k), vec![p])
    };
    match g.kind {
        K::Trivial => Vec::new(),
        K::Cyclic(m) => (2..m)
            .filter(|k| m % k == 0)
            .map(|k| cyclic(gens[0].pow(k)))
            .collect(),
        K::Dihedral(_) | K::DoubleCyclic(_) => vec![cyclic(gens[0].clone())],
        K::DoubleDihedral(m) => vec![
            sub(K::Dihedral(m), vec![gens[0].clone(), gens[1].clone()]),
            sub(K::DoubleCyclic(m), vec![gens[0].clone(), gens[2].clone()]),
            cyclic(gens[0].clone()),
        ],
        K::Klein => vec![
            cyclic(gens[0].clone()),
            cyclic(gens[1].clone()),
            cyclic(gens[0].compose(&gens[1])),
        ],
        K::ElementaryAbelian8 => {
            let (a, b, c) = (&gens[0], &gens[1], &gens[2]);
            vec![
                sub(K::Klein, vec![a.clone(), b.clone()]),
                sub(K::Klein, vec![b.clone(), c.clone()]),
                sub(K::Klein, vec![c.clone(), a.clone()]),
            ]
        }
        K::Alt4 => {
            let (g3, g2) = (&gens[0], &gens[1]);
            vec![
                sub(K::Klein, vec![g2.clone(), g2.conjugate_by(g3)]),
                cyclic(g3.clone()),
            ]
        }
        K::Sym4 => {
            let (g3, g4) = (&gens[0], &gens[1]);
            let mut out = vec![sub(K::Alt4, vec![g3.clone(), g4.pow(2)])];
            let elements = closure(n, &[g3, g4]);
            let mirrors = elements
                .iter()
                .filter(|p| p.order() == 2 && g4.compose(p).order() == 2);
            if let Some(m) = prefer_reversing(g, mirrors) {
                out.push(sub(K::Dihedral(4), vec![g4.clone(), m.clone()]));
            }
            out.push(cyclic(g4.clone()));
            out.push(cyclic(g3.clone()));
            out
        }
        K::DoubleAlt4 => {
            let (g3i, g2) = (&gens[0], &gens[1]);
            let g3 = g3i.pow(4);
            let central = g3i.pow(3);
            vec![
                sub(K::Alt4, vec![g3.clone(), g2.clone()]),
                sub(
                    K::ElementaryAbelian8,
                    vec![g2.clone(), g2.conjugate_by(&g3), central],
                ),
                cyclic(g3i.clone()),
                cyclic(g3),
            ]
        }
        K::DoubleSym4 => {
            let (g3i, g4) = (&gens[0], &gens[1]);
            let g3 = g3i.pow(4);
            let g2 = g4.pow(2);
            vec![
                sub(K::Sym4, vec![g3.clone(), g4.clone()]),
                sub(K::DoubleAlt4, vec![g3i.clone(), g2.clone()]),
                sub(K::Alt4, vec![g3, g2]),
                cyclic(g4.clone()),
                cyclic(g3i.clone()),
            ]
        }
        K::Alt5 => {
            let (g5, g3) = (&gens[0], &gens[1]);
            let elements = closure(n, &[g5, g3]);
            icosahedral_subgroups(g, &elements, g5, g3, None)
        }
        K::DoubleAlt5 => {
            let (g5i, g3) = (&gens[0], &gens[1]);
            let central = g5i.pow(5);
            let g5 = g5i.pow(6);
            let elements = closure(n, &[g5i, g3]);
            let mut out = vec![sub(K::Alt5, vec![g5.clone(), g3.clone()])];
            let mirrors = elements
                .iter()
                .filter(|p| p.order() == 2 && g5i.compose(p).order() == 2);
            if let Some(m) = prefer_reversing(g, mirrors) {
                out.push(sub(K::Dihedral(10), vec![g5i.clone(), m.clone()]));
            }
            out.push(cyclic(g5i.clone()));
            out.extend(icosahedral_subgroups(g, &elements, &g5, g3, Some(&central)));
            out
        }
    }
}

/// Subgroups shared by `Alt(5)` and `Alt(5) × Z(2)`, located by search since
/// the generators fix them only up to conjugacy.
fn icosahedral_subgroups(
    parent: &AbstractGroup,
    elements: &[Perm],
    g5: &Perm,
    g3: &Perm,
    central: Option<&Perm>,
) -> Vec<AbstractGroup> {
    use AbstractGroupKind as K;
    let n = parent.degree;
    let sub = |kind: AbstractGroupKind, perms: Vec<Perm>| parent.sibling(kind, perms);
    let mut out = Vec::new();
    // An involution completing g3 to a tetrahedral subgroup.
    let g2 = elements
        .iter()
        .find(|p| p.order() == 2 && closure_order(n, &[g3, *p]) == 12);
    if let Some(g2) = g2 {
        if let Some(i) = central {
            out.push(sub(K::DoubleAlt4, vec![g3.compose(i), g2.clone()]));
        }
        out.push(sub(K::Alt4, vec![g3.clone(), g2.clone()]));
        if let Some(i) = central {
            out.push(sub(
                K::ElementaryAbelian8,
                vec![g2.clone(), g2.conjugate_by(g3), i.clone()],
            ));
        }
    }
    let mirror = elements
        .iter()
        .find(|p| p.order() == 2 && g5.compose(p).order() == 2);
    if let Some(m) = mirror {
        if closure_order(n, &[g5, m]) == 10 {
            out.push(sub(K::Dihedral(5), vec![g5.clone(), m.clone()]));
        }
    }
    out.push(sub(K::Cyclic(5), vec![g5.clone()]));
    out.push(sub(K::Cyclic(3), vec![g3.clone()]));
    out
}
