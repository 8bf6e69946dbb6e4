//! Configuration management for exciton calculations
//!
//! This module handles the YAML configuration structures, their defaults,
//! and how they are applied onto an `Exciton` through its validated setters.

mod args;

pub use args::Args;

use crate::error::Validation;
use crate::exciton_impl::ExcitonConfig;
use crate::system::ModelSystem;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub system: ModelSystem,
    pub exciton: ExcitonParams,
}

/// Band selection, either explicit labels or a window around the gap
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BandSelection {
    /// Labels relative to the Fermi level, e.g. `[-1, 0, 1, 2]`
    Labels(Vec<i64>),
    /// `nbands - nrmbands` bands on each side of the gap
    Window { nbands: i64, nrmbands: i64 },
}

/// Exciton-specific parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExcitonParams {
    pub ncell: Option<i64>,
    pub bands: Option<BandSelection>,
    pub q: Option<Vec<f64>>,
    pub cutoff: Option<f64>,
    pub scissor: Option<f64>,
    pub exchange: Option<bool>,
}

impl Default for ExcitonParams {
    fn default() -> Self {
        ExcitonParams {
            ncell: Some(20),
            bands: None,
            q: Some(vec![0.0, 0.0, 0.0]),
            cutoff: None,
            scissor: Some(0.0),
            exchange: Some(false),
        }
    }
}

impl ExcitonParams {
    /// Apply default values to any missing parameters
    ///
    /// The cutoff is left alone: its default depends on the final cell
    /// count, see [`Config::exciton_config`].
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.ncell.is_none() {
            self.ncell = defaults.ncell;
        }
        if self.q.is_none() {
            self.q = defaults.q;
        }
        if self.scissor.is_none() {
            self.scissor = defaults.scissor;
        }
        if self.exchange.is_none() {
            self.exchange = defaults.exchange;
        }
        self
    }

    /// Parameters given on the command line, everything else left unset
    pub fn from_args(args: &Args) -> Self {
        let bands = match (args.nbands, args.nrmbands) {
            (Some(nbands), Some(nrmbands)) => Some(BandSelection::Window { nbands, nrmbands }),
            _ => None,
        };
        ExcitonParams {
            ncell: args.ncell,
            bands,
            q: None,
            cutoff: args.cutoff,
            scissor: args.scissor,
            exchange: args.exchange.then_some(true),
        }
    }

    /// Push every present parameter through the validated setters
    ///
    /// The cell count goes first so that the cutoff is checked against it.
    /// Returns the outcome of each setter that was called.
    pub fn apply(&self, config: &mut ExcitonConfig) -> Vec<Validation> {
        let mut outcomes = Vec::new();

        if let Some(ncell) = self.ncell {
            outcomes.push(config.set_cell_count(ncell));
        }
        match &self.bands {
            Some(BandSelection::Labels(labels)) => outcomes.push(config.set_bands(labels)),
            Some(BandSelection::Window { nbands, nrmbands }) => {
                outcomes.push(config.set_band_window(*nbands, *nrmbands))
            }
            None => {}
        }
        if let Some(q) = &self.q {
            outcomes.push(config.set_momentum(q));
        }
        if let Some(cutoff) = self.cutoff {
            outcomes.push(config.set_cutoff(cutoff));
        }
        if let Some(scissor) = self.scissor {
            outcomes.push(config.set_scissor(scissor));
        }
        if let Some(exchange) = self.exchange {
            outcomes.push(config.set_exchange(exchange));
        }

        outcomes
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        self.exciton = self.exciton.with_defaults();
        self
    }

    /// Validated exciton configuration from file parameters and overrides
    ///
    /// File parameters are applied first and command-line overrides second,
    /// so a rejected override leaves the file value in place. When neither
    /// gives a cutoff it defaults to the resulting number of unit cells.
    pub fn exciton_config(&self, args: &Args) -> (ExcitonConfig, Vec<Validation>) {
        let overrides = ExcitonParams::from_args(args);
        let mut config = ExcitonConfig::new(self.system.fermi_level);

        let mut outcomes = self.exciton.apply(&mut config);
        outcomes.extend(overrides.apply(&mut config));

        if self.exciton.cutoff.is_none() && overrides.cutoff.is_none() {
            outcomes.push(config.set_cutoff(config.cell_count() as f64));
        }

        (config, outcomes)
    }
}

/// Number of setter calls that were rejected
pub fn count_rejected(outcomes: &[Validation]) -> usize {
    outcomes.iter().filter(|o| o.is_rejected()).count()
}
