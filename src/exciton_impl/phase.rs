//! Global phase convention for exciton eigenvectors
//!
//! Diagonalization determines each eigenvector only up to a global phase
//! `e^{iθ}`. The convention used here rotates every column so that the sum
//! of its coefficients is real and non-negative.

extern crate nalgebra as na;

use na::DMatrix;
use num_complex::Complex64;
use rayon::prelude::*;
use tracing::debug;

/// Columns that were left untouched because their coefficient sum vanished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseReport {
    pub degenerate_columns: Vec<usize>,
}

impl PhaseReport {
    pub fn is_clean(&self) -> bool {
        self.degenerate_columns.is_empty()
    }
}

/// Fix the global phase of every eigenvector (column) in place
///
/// Each column `j` is multiplied by `exp(-i arg(Σ_n C_nj))`. A column whose
/// coefficient sum is exactly zero has no defined phase and is left as it
/// is; its index is recorded in the returned report.
pub fn fix_global_phase_in_place(coefs: &mut DMatrix<Complex64>) -> PhaseReport {
    let ncols = coefs.ncols();

    let sums: Vec<Complex64> = {
        let view = &*coefs;
        (0..ncols)
            .into_par_iter()
            .map(|j| view.column(j).iter().sum::<Complex64>())
            .collect()
    };

    let mut report = PhaseReport::default();
    for (j, sum) in sums.into_iter().enumerate() {
        if sum == Complex64::new(0.0, 0.0) {
            debug!("Eigenvector {} has zero coefficient sum, phase left unchanged", j);
            report.degenerate_columns.push(j);
            continue;
        }

        let rotation = Complex64::from_polar(1.0, -sum.arg());
        for z in coefs.column_mut(j).iter_mut() {
            *z *= rotation;
        }
    }

    report
}

/// Fix the global phase of every eigenvector and return the matrix
pub fn fix_global_phase(mut coefs: DMatrix<Complex64>) -> DMatrix<Complex64> {
    fix_global_phase_in_place(&mut coefs);
    coefs
}
