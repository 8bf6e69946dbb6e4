use crate::exciton_impl::Exciton;
use crate::system::System;
use color_eyre::eyre::Result;
use tracing::info;

pub fn report_summary<S: System>(exciton: &Exciton<S>) -> Result<()> {
    info!("\nExciton configuration:");
    exciton.print_information();

    let problem = exciton.problem()?;
    let layout = problem.layout();
    info!("\nBasis dimension: {}", problem.dimension());
    info!(
        "  {} k-points x {} conduction x {} valence bands",
        layout.nk, layout.n_conduction, layout.n_valence
    );
    info!("Band index slots: {}", problem.band_index.len());

    Ok(())
}
