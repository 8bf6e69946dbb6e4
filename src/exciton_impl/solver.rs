//! Hand-off to Hamiltonian assembly and diagonalization
//!
//! Building the interaction kernel and diagonalizing it is done elsewhere.
//! Those components receive an `ExcitonProblem`, a read-only view of the
//! configuration, the pair basis and the band index, and give back
//! eigenvalues with eigenvectors in basis order.

extern crate nalgebra as na;

use super::basis::{Basis, BasisLayout, PairState};
use super::config::ExcitonConfig;
use crate::bands::BandIndex;
use crate::error::ExcitonError;
use na::{DMatrix, DVector};
use num_complex::Complex64;

/// Everything a Hamiltonian builder needs to know about the exciton problem.
#[derive(Debug, Clone, Copy)]
pub struct ExcitonProblem<'a> {
    pub config: &'a ExcitonConfig,
    pub basis: &'a Basis,
    pub band_index: &'a BandIndex,
}

impl<'a> ExcitonProblem<'a> {
    pub fn dimension(&self) -> usize {
        self.basis.len()
    }

    pub fn layout(&self) -> BasisLayout {
        self.basis.layout()
    }

    /// Storage slots of the valence and conduction bands of `state`
    pub fn band_slots(&self, state: &PairState) -> Result<(usize, usize), ExcitonError> {
        let v = self.band_index.slot(state.valence)?;
        let c = self.band_index.slot(state.conduction)?;
        Ok((v, c))
    }
}

/// External Hamiltonian assembly plus eigensolver.
pub trait ExcitonSolver {
    /// Lowest `n_states` eigenpairs of the exciton Hamiltonian
    ///
    /// Eigenvectors are stored as columns with one row per basis state.
    fn solve(
        &self,
        problem: &ExcitonProblem<'_>,
        n_states: usize,
    ) -> Result<(DVector<f64>, DMatrix<Complex64>), ExcitonError>;
}

/// Eigenpairs with the global phase convention applied.
#[derive(Debug, Clone)]
pub struct ExcitonSolution {
    pub energies: DVector<f64>,
    pub states: DMatrix<Complex64>,
}
