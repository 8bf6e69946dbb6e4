//! Input/Output operations for exciton calculations
//!
//! This module handles logging setup and writing the pair basis table.

mod output;

pub use output::{setup_output, write_basis, write_basis_file};
