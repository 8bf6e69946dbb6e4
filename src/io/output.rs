//! Output formatting and logging utilities

use crate::exciton_impl::Basis;
use color_eyre::eyre::{Result, WrapErr};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, fmt::format::Writer, fmt::layer, fmt::time::FormatTime,
    layer::SubscriberExt, util::SubscriberInitExt, Registry,
};

/// Wall-clock timer with second precision (HH:MM:SS, UTC)
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let total_seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup output logging to file or stdout
pub fn setup_output(output_path: Option<&String>) {
    match output_path {
        Some(path) => match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(Mutex::new(log))
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false);
                Registry::default()
                    .with(file_layer)
                    .with(LevelFilter::INFO)
                    .init();
                info!("Output will be written to: {}", path);
            }
            Err(err) => eprintln!("Could not create output file {}: {}", path, err),
        },
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default()
                .with(stdout_layer)
                .with(LevelFilter::INFO)
                .init();
        }
    }
}

/// Write the pair basis as a `v c k` table, one state per line
pub fn write_basis<W: Write>(writer: &mut W, basis: &Basis) -> Result<()> {
    writeln!(writer, "# {:>6} {:>6} {:>6}", "v", "c", "k")?;
    for state in basis {
        writeln!(
            writer,
            "  {:>6} {:>6} {:>6}",
            state.valence, state.conduction, state.k
        )?;
    }
    Ok(())
}

/// Write the pair basis table to `path`
pub fn write_basis_file<P: AsRef<Path>>(path: P, basis: &Basis) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .wrap_err_with(|| format!("Unable to create basis file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_basis(&mut writer, basis)?;
    writer.flush()?;
    info!("Basis with {} states written to {}", basis.len(), path.display());
    Ok(())
}
