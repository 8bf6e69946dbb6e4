use crate::config::{count_rejected, Args, Config};
use crate::exciton_impl::Exciton;
use crate::system::ModelSystem;
use color_eyre::eyre::{eyre, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Configure an exciton from file parameters and CLI overrides, then build
/// its pair basis and band index
pub fn build_exciton(config: &Config, args: &Args) -> Result<Exciton<ModelSystem>> {
    let system = Arc::new(config.system);
    info!(
        "System: Fermi level {}, {} k-points",
        system.fermi_level, system.nk
    );

    let (exciton_config, outcomes) = config.exciton_config(args);
    let rejected = count_rejected(&outcomes);
    if rejected > 0 {
        warn!("{} parameter(s) rejected, previous values kept", rejected);
    }

    let mut exciton = Exciton::with_config(system, exciton_config);
    if exciton.config().bands().is_none() {
        return Err(eyre!(
            "No valid band selection: give `bands` as a label list or as nbands/nrmbands"
        ));
    }

    exciton.initialize_basis()?;
    exciton.generate_band_index()?;

    Ok(exciton)
}
