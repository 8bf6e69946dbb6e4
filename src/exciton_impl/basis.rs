//! Electron-hole pair basis
//!
//! The basis is the ordered list of `(v, c, k)` pair states. Its ordering is
//! the row/column ordering of every Hamiltonian and eigenvector built on top
//! of it, so it is fixed here once:
//!
//! ```text
//! for k in 0..nk
//!     for c in conduction
//!         for v in valence
//!             (v, c, k)
//! ```
//!
//! `BasisLayout` turns that loop nest into an explicit index function so
//! consumers never have to re-derive it.

extern crate nalgebra as na;

use na::DMatrix;
use rayon::prelude::*;

/// One electron-hole excitation at crystal momentum index `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairState {
    /// Absolute index of the band holding the hole
    pub valence: i64,
    /// Absolute index of the band holding the electron
    pub conduction: i64,
    pub k: usize,
}

impl PairState {
    pub fn new(valence: i64, conduction: i64, k: usize) -> Self {
        PairState {
            valence,
            conduction,
            k,
        }
    }
}

/// Shape of a pair basis and the mapping between positions and flat indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasisLayout {
    pub nk: usize,
    pub n_conduction: usize,
    pub n_valence: usize,
}

impl BasisLayout {
    pub fn new(nk: usize, n_conduction: usize, n_valence: usize) -> Self {
        BasisLayout {
            nk,
            n_conduction,
            n_valence,
        }
    }

    /// Number of pair states
    pub fn dimension(&self) -> usize {
        self.nk * self.n_conduction * self.n_valence
    }

    /// Flat index of the state at k-point `k`, conduction position `c` and
    /// valence position `v`
    #[inline]
    pub fn index(&self, k: usize, c: usize, v: usize) -> usize {
        debug_assert!(k < self.nk && c < self.n_conduction && v < self.n_valence);
        (k * self.n_conduction + c) * self.n_valence + v
    }

    /// Inverse of [`BasisLayout::index`], `None` past the end of the basis
    pub fn position(&self, index: usize) -> Option<(usize, usize, usize)> {
        if index >= self.dimension() {
            return None;
        }
        let v = index % self.n_valence;
        let c = (index / self.n_valence) % self.n_conduction;
        let k = index / (self.n_valence * self.n_conduction);
        Some((k, c, v))
    }
}

/// Ordered electron-hole pair basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    layout: BasisLayout,
    states: Vec<PairState>,
}

impl Basis {
    pub fn layout(&self) -> BasisLayout {
        self.layout
    }

    pub fn states(&self) -> &[PairState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PairState> {
        self.states.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PairState> {
        self.states.iter()
    }

    /// Basis as an `n x 3` integer table with rows `[v, c, k]`
    pub fn to_matrix(&self) -> DMatrix<i64> {
        DMatrix::from_fn(self.states.len(), 3, |row, col| {
            let state = &self.states[row];
            match col {
                0 => state.valence,
                1 => state.conduction,
                _ => state.k as i64,
            }
        })
    }
}

impl<'a> IntoIterator for &'a Basis {
    type Item = &'a PairState;
    type IntoIter = std::slice::Iter<'a, PairState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

/// Enumerate the pair states for the given bands over `nk` k-points
///
/// # Arguments
///
/// * `conduction` - Conduction bands that hold the electron, absolute indices
/// * `valence` - Valence bands that hold the hole, absolute indices
/// * `nk` - Number of k-points
///
/// # Returns
///
/// The basis in `(k, conduction, valence)` loop order; see the module docs.
pub fn build_basis(conduction: &[i64], valence: &[i64], nk: usize) -> Basis {
    let layout = BasisLayout::new(nk, conduction.len(), valence.len());

    // each k-point block is independent; collect keeps block order
    let states: Vec<PairState> = (0..nk)
        .into_par_iter()
        .flat_map_iter(|k| {
            conduction.iter().flat_map(move |&c| {
                valence.iter().map(move |&v| PairState::new(v, c, k))
            })
        })
        .collect();

    debug_assert_eq!(states.len(), layout.dimension());

    Basis { layout, states }
}
