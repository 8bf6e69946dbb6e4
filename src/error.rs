//! Error and validation types for exciton calculations
//!
//! Two families live here. `ValidationError` and `ConsistencyWarning` are
//! fail-soft: setters report them and keep going. `ExcitonError` is returned
//! through `Result` and must be handled by the caller.

use thiserror::Error;

/// Rejected setter input. The previous configuration value is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("ncell must be a positive number, got {0}")]
    NonPositiveCellCount(i64),

    #[error("cutoff must be a positive number, got {0}")]
    NonPositiveCutoff(f64),

    #[error("scissor shift must be finite, got {0}")]
    NonFiniteScissor(f64),

    #[error("included bands ({n_bands}) and removed bands ({n_removed}) must be positive with removed < included")]
    InvalidBandWindow { n_bands: i64, n_removed: i64 },

    #[error("band selection must contain at least one valence and one conduction band (got {n_valence} valence, {n_conduction} conduction)")]
    EmptyBandPartition {
        n_valence: usize,
        n_conduction: usize,
    },

    #[error("band label {0} is out of range for the Fermi level")]
    BandOutOfRange(i64),

    #[error("Q vector must be 3d, got {0} components")]
    MomentumDimension(usize),
}

/// Accepted input that is inconsistent with another configuration field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyWarning {
    #[error("cutoff ({cutoff}) is higher than number of unit cells ({cell_count})")]
    CutoffExceedsCells { cutoff: f64, cell_count: usize },
}

/// Outcome of a validated setter.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Accepted,
    Warned(ConsistencyWarning),
    Rejected(ValidationError),
}

impl Validation {
    /// True unless the input was rejected
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Validation::Rejected(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Validation::Rejected(_))
    }
}

/// Errors surfaced to the caller of exciton operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExcitonError {
    #[error("band {0} is not registered in the band index")]
    MissingBand(i64),

    #[error("bands have not been configured")]
    BandsNotConfigured,

    #[error("basis and band index must be initialized before building the problem")]
    BasisNotInitialized,

    #[error("eigenvector matrix has {found} rows but the basis dimension is {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("solver failed: {0}")]
    Solver(String),
}
