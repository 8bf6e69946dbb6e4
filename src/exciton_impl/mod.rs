//! Exciton basis construction
//!
//! This module sets up the electron-hole pair problem that a Bethe-Salpeter
//! Hamiltonian is built on. It covers the validated configuration, the
//! ordered pair basis, and the phase convention applied to the eigenvectors
//! that come back from diagonalization.
//!
//! # Usage
//!
//! ```rust,ignore
//! use exciton::{Exciton, ModelSystem};
//! use std::sync::Arc;
//!
//! let mut exciton = Exciton::new(Arc::new(ModelSystem::new(5, 2)));
//! exciton.set_bands(&[-1, 1, 2]);
//! exciton.set_cutoff(8.0);
//! exciton.initialize_basis()?;
//! exciton.generate_band_index()?;
//!
//! // hand the problem to a Hamiltonian builder and eigensolver
//! let solution = exciton.solve(&solver, 4)?;
//! ```

mod basis;
mod config;
mod exciton;
mod phase;
mod solver;

pub use basis::{build_basis, Basis, BasisLayout, PairState};
pub use config::{ExcitonConfig, DEFAULT_CELL_COUNT, DEFAULT_CUTOFF};
pub use exciton::Exciton;
pub use phase::{fix_global_phase, fix_global_phase_in_place, PhaseReport};
pub use solver::{ExcitonProblem, ExcitonSolution, ExcitonSolver};
