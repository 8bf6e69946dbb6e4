// Main library file for exciton basis calculations

pub mod app;
pub mod bands;
pub mod config;
pub mod error;
mod exciton_impl;
pub mod io;
pub mod system;
#[cfg(test)]
mod bands_test;

pub use bands::{BandIndex, BandSet, MAX_BAND_WINDOW};
pub use error::{ConsistencyWarning, ExcitonError, Validation, ValidationError};
pub use exciton_impl::*;
pub use system::{ModelSystem, System};
