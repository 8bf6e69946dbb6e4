//! Exciton basis setup command-line interface
//!
//! Reads a YAML configuration, builds the electron-hole pair basis and
//! reports its layout.

use color_eyre::eyre::Result;
use exciton::app::ExcitonApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    ExcitonApplication::from_cli()?.run()
}
