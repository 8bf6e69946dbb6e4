//! Exciton problem context
//!
//! `Exciton` ties a single-particle system to an exciton configuration and
//! owns the quantities derived from it: the pair basis and the band index.
//! Configuration happens through `&mut self`; once `problem()` lends the
//! derived data out, nothing can be changed until the borrow ends.

extern crate nalgebra as na;

use super::basis::{build_basis, Basis};
use super::config::ExcitonConfig;
use super::phase::fix_global_phase_in_place;
use super::solver::{ExcitonProblem, ExcitonSolution, ExcitonSolver};
use crate::bands::BandIndex;
use crate::error::{ExcitonError, Validation};
use crate::system::System;
use na::DMatrix;
use num_complex::Complex64;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Threshold below which the exciton momentum is treated as zero
const MOMENTUM_TOLERANCE: f64 = 1e-7;

pub struct Exciton<S: System> {
    system: Arc<S>,
    config: ExcitonConfig,
    basis: Option<Basis>,
    band_index: Option<BandIndex>,
}

impl<S: System> Exciton<S> {
    pub fn new(system: Arc<S>) -> Self {
        let config = ExcitonConfig::new(system.fermi_level());
        Self::with_config(system, config)
    }

    /// Wrap an already validated configuration
    ///
    /// The configuration should have been created for the Fermi level of
    /// `system`.
    pub fn with_config(system: Arc<S>, config: ExcitonConfig) -> Self {
        Exciton {
            system,
            config,
            basis: None,
            band_index: None,
        }
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn config(&self) -> &ExcitonConfig {
        &self.config
    }

    pub fn set_cell_count(&mut self, ncell: i64) -> Validation {
        self.config.set_cell_count(ncell)
    }

    /// Select bands by label; an accepted selection drops the basis and
    /// band index built from the previous one
    pub fn set_bands(&mut self, labels: &[i64]) -> Validation {
        let outcome = self.config.set_bands(labels);
        self.invalidate_if_accepted(&outcome);
        outcome
    }

    /// Select a band window; same invalidation rule as [`Exciton::set_bands`]
    pub fn set_band_window(&mut self, n_bands: i64, n_removed: i64) -> Validation {
        let outcome = self.config.set_band_window(n_bands, n_removed);
        self.invalidate_if_accepted(&outcome);
        outcome
    }

    pub fn set_momentum(&mut self, q: &[f64]) -> Validation {
        self.config.set_momentum(q)
    }

    pub fn set_cutoff(&mut self, cutoff: f64) -> Validation {
        self.config.set_cutoff(cutoff)
    }

    pub fn set_scissor(&mut self, shift: f64) -> Validation {
        self.config.set_scissor(shift)
    }

    pub fn set_exchange(&mut self, exchange: bool) -> Validation {
        self.config.set_exchange(exchange)
    }

    // basis and index depend on the band selection only
    fn invalidate_if_accepted(&mut self, outcome: &Validation) {
        if outcome.is_accepted() {
            self.basis = None;
            self.band_index = None;
        }
    }

    /// Dimension of the pair basis implied by the current configuration
    pub fn basis_dimension(&self) -> usize {
        self.system.nk() * self.config.conduction_bands().len() * self.config.valence_bands().len()
    }

    /// Build and store the basis for explicit band lists
    pub fn create_basis(&mut self, conduction: &[i64], valence: &[i64]) -> &Basis {
        let basis = build_basis(conduction, valence, self.system.nk());
        &*self.basis.insert(basis)
    }

    /// Build and store the basis from the configured bands
    pub fn initialize_basis(&mut self) -> Result<&Basis, ExcitonError> {
        let bands = self.config.bands().ok_or(ExcitonError::BandsNotConfigured)?;
        let basis = build_basis(bands.conduction(), bands.valence(), self.system.nk());
        info!("Exciton basis initialized with dimension {}", basis.len());
        Ok(&*self.basis.insert(basis))
    }

    /// Build and store the storage index of the configured bands
    pub fn generate_band_index(&mut self) -> Result<&BandIndex, ExcitonError> {
        let bands = self.config.bands().ok_or(ExcitonError::BandsNotConfigured)?;
        let index = BandIndex::from(bands);
        Ok(&*self.band_index.insert(index))
    }

    pub fn basis(&self) -> Option<&Basis> {
        self.basis.as_ref()
    }

    pub fn band_index(&self) -> Option<&BandIndex> {
        self.band_index.as_ref()
    }

    /// Read-only view handed to Hamiltonian assembly
    pub fn problem(&self) -> Result<ExcitonProblem<'_>, ExcitonError> {
        match (&self.basis, &self.band_index) {
            (Some(basis), Some(band_index)) => Ok(ExcitonProblem {
                config: &self.config,
                basis,
                band_index,
            }),
            _ => Err(ExcitonError::BasisNotInitialized),
        }
    }

    /// Apply the global phase convention to a set of eigenvectors
    pub fn fix_global_phase(&self, mut coefs: DMatrix<Complex64>) -> DMatrix<Complex64> {
        let report = fix_global_phase_in_place(&mut coefs);
        if !report.is_clean() {
            warn!(
                "Global phase undefined for eigenvectors {:?}, left unrotated",
                report.degenerate_columns
            );
        }
        coefs
    }

    /// Diagonalize with an external solver and fix the eigenvector phases
    pub fn solve<E: ExcitonSolver>(
        &self,
        solver: &E,
        n_states: usize,
    ) -> Result<ExcitonSolution, ExcitonError> {
        let problem = self.problem()?;
        let (energies, states) = solver.solve(&problem, n_states)?;

        if states.nrows() != problem.dimension() {
            return Err(ExcitonError::DimensionMismatch {
                expected: problem.dimension(),
                found: states.nrows(),
            });
        }

        Ok(ExcitonSolution {
            energies,
            states: self.fix_global_phase(states),
        })
    }

    /// Log the exciton summary
    pub fn print_information(&self) {
        for line in self.to_string().lines() {
            info!("{}", line);
        }
    }
}

impl<S: System> fmt::Display for Exciton<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.config;
        writeln!(f, "{:<30}{}", "Number of cells:", config.cell_count())?;

        write!(f, "{:<30}", "Valence bands:")?;
        for band in config.valence_bands() {
            write!(f, "{}\t", band)?;
        }
        writeln!(f)?;

        write!(f, "{:<30}", "Conduction bands:")?;
        for band in config.conduction_bands() {
            write!(f, "{}\t", band)?;
        }
        writeln!(f)?;

        if config.exchange() {
            writeln!(f, "{:<30}{}", "Exchange:", "True")?;
        }
        let q = config.momentum();
        if q.norm() > MOMENTUM_TOLERANCE {
            writeln!(f, "{:<30}{}  {}  {}", "Q:", q.x, q.y, q.z)?;
        }
        write!(f, "{:<30}{}", "Scissor cut:", config.scissor())
    }
}
