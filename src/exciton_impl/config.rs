//! Validated exciton parameters
//!
//! Every setter follows the same fail-soft policy: invalid input is logged
//! and reported through the returned `Validation`, and the previous value is
//! kept. Nothing here panics on bad input, so parameter sweeps can keep going.

extern crate nalgebra as na;

use crate::bands::BandSet;
use crate::error::{ConsistencyWarning, Validation, ValidationError};
use na::Vector3;
use tracing::{debug, warn};

pub const DEFAULT_CELL_COUNT: usize = 20;
pub const DEFAULT_CUTOFF: f64 = 20.0;

/// Parameters of an exciton calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcitonConfig {
    fermi_level: i64,
    cell_count: usize,
    momentum: Vector3<f64>,
    cutoff: f64,
    scissor: f64,
    exchange: bool,
    bands: Option<BandSet>,
}

impl ExcitonConfig {
    /// Default configuration for a system with the given Fermi level
    pub fn new(fermi_level: i64) -> Self {
        ExcitonConfig {
            fermi_level,
            cell_count: DEFAULT_CELL_COUNT,
            momentum: Vector3::zeros(),
            cutoff: DEFAULT_CUTOFF,
            scissor: 0.0,
            exchange: false,
            bands: None,
        }
    }

    /// Number of unit cells along each axis
    pub fn set_cell_count(&mut self, ncell: i64) -> Validation {
        if ncell > 0 {
            self.cell_count = ncell as usize;
            debug!("Number of unit cells set to {}", ncell);
            Validation::Accepted
        } else {
            reject(ValidationError::NonPositiveCellCount(ncell))
        }
    }

    /// Select bands from labels relative to the Fermi level
    pub fn set_bands(&mut self, labels: &[i64]) -> Validation {
        match BandSet::from_labels(labels, self.fermi_level) {
            Ok(bands) => {
                debug!(
                    "Bands set: valence {:?}, conduction {:?}",
                    bands.valence(),
                    bands.conduction()
                );
                self.bands = Some(bands);
                Validation::Accepted
            }
            Err(err) => reject(err),
        }
    }

    /// Select `n_bands - n_removed` bands on each side of the gap
    pub fn set_band_window(&mut self, n_bands: i64, n_removed: i64) -> Validation {
        match BandSet::window(n_bands, n_removed, self.fermi_level) {
            Ok(bands) => {
                debug!(
                    "Band window set: valence {:?}, conduction {:?}",
                    bands.valence(),
                    bands.conduction()
                );
                self.bands = Some(bands);
                Validation::Accepted
            }
            Err(err) => reject(err),
        }
    }

    /// Center-of-mass momentum of the exciton
    pub fn set_momentum(&mut self, q: &[f64]) -> Validation {
        if q.len() == 3 {
            self.momentum = Vector3::new(q[0], q[1], q[2]);
            Validation::Accepted
        } else {
            reject(ValidationError::MomentumDimension(q.len()))
        }
    }

    /// Cutoff (in unit cells) of the lattice sums of the interaction
    ///
    /// A cutoff larger than the cell count is accepted with a warning: the
    /// lattice sum is then truncated by the cell count instead.
    pub fn set_cutoff(&mut self, cutoff: f64) -> Validation {
        if cutoff.is_nan() || cutoff <= 0.0 {
            return reject(ValidationError::NonPositiveCutoff(cutoff));
        }

        self.cutoff = cutoff;
        if cutoff > self.cell_count as f64 {
            let warning = ConsistencyWarning::CutoffExceedsCells {
                cutoff,
                cell_count: self.cell_count,
            };
            warn!("Warning: {}", warning);
            return Validation::Warned(warning);
        }

        Validation::Accepted
    }

    /// Scissor cut (eV) applied to the conduction band energies
    pub fn set_scissor(&mut self, shift: f64) -> Validation {
        if shift.is_finite() {
            self.scissor = shift;
            Validation::Accepted
        } else {
            reject(ValidationError::NonFiniteScissor(shift))
        }
    }

    /// Toggle the exchange term of the interaction matrix elements
    pub fn set_exchange(&mut self, exchange: bool) -> Validation {
        self.exchange = exchange;
        Validation::Accepted
    }

    pub fn fermi_level(&self) -> i64 {
        self.fermi_level
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn momentum(&self) -> &Vector3<f64> {
        &self.momentum
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn scissor(&self) -> f64 {
        self.scissor
    }

    pub fn exchange(&self) -> bool {
        self.exchange
    }

    pub fn bands(&self) -> Option<&BandSet> {
        self.bands.as_ref()
    }

    /// Absolute valence bands, empty until bands are set
    pub fn valence_bands(&self) -> &[i64] {
        self.bands.as_ref().map(|b| b.valence()).unwrap_or(&[])
    }

    /// Absolute conduction bands, empty until bands are set
    pub fn conduction_bands(&self) -> &[i64] {
        self.bands.as_ref().map(|b| b.conduction()).unwrap_or(&[])
    }
}

fn reject(err: ValidationError) -> Validation {
    warn!("{}", err);
    Validation::Rejected(err)
}
