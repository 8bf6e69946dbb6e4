//! Single-particle system interface
//!
//! The exciton code only needs two numbers from the underlying
//! electronic-structure model: where the Fermi level sits and how many
//! k-points the Brillouin zone mesh has.

use serde::{Deserialize, Serialize};

pub trait System {
    /// Index of the highest occupied band
    fn fermi_level(&self) -> i64;

    /// Number of k-points in the mesh
    fn nk(&self) -> usize;
}

/// Minimal system described only by its Fermi level and k-point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelSystem {
    pub fermi_level: i64,
    pub nk: usize,
}

impl ModelSystem {
    pub fn new(fermi_level: i64, nk: usize) -> Self {
        ModelSystem { fermi_level, nk }
    }
}

impl System for ModelSystem {
    fn fermi_level(&self) -> i64 {
        self.fermi_level
    }

    fn nk(&self) -> usize {
        self.nk
    }
}
