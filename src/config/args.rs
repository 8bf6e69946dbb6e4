//! Command-line argument parsing for exciton basis setup

use clap::Parser;

/// Exciton basis setup with YAML configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the electron-hole pair basis table to this file
    #[arg(long)]
    pub basis_output: Option<String>,

    /// Override number of unit cells per axis
    #[arg(long, allow_negative_numbers = true)]
    pub ncell: Option<i64>,

    /// Override interaction cutoff (in unit cells)
    #[arg(long, allow_negative_numbers = true)]
    pub cutoff: Option<f64>,

    /// Override scissor cut (eV)
    #[arg(long, allow_negative_numbers = true)]
    pub scissor: Option<f64>,

    /// Include the exchange term
    #[arg(long)]
    pub exchange: bool,

    /// Number of valence (conduction) bands, replaces the configured bands
    #[arg(long, requires = "nrmbands", allow_negative_numbers = true)]
    pub nbands: Option<i64>,

    /// Number of valence (conduction) bands removed next to the gap
    #[arg(long, requires = "nbands", allow_negative_numbers = true)]
    pub nrmbands: Option<i64>,
}
