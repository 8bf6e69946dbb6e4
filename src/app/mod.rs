mod report;
mod runner;

pub use runner::build_exciton;

use self::report::report_summary;
use crate::config::{Args, Config};
use crate::io::{setup_output, write_basis_file};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use tracing::info;

pub struct ExcitonApplication {
    args: Args,
    config: Config,
}

impl ExcitonApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());
        info!("Configuration loaded from {}", self.args.config_file);

        let exciton = build_exciton(&self.config, &self.args)?;
        report_summary(&exciton)?;

        if let Some(path) = &self.args.basis_output {
            let problem = exciton.problem()?;
            write_basis_file(path, problem.basis)?;
        }

        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}
