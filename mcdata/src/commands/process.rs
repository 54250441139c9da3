use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mcdata_core::Config;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ProcessCommand {
    /// The path to read the generated data from
    #[arg(short, long)]
    pub input: PathBuf,

    /// The path to write the processed output to (must not exist yet)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to an mcdata.toml with output options
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ProcessCommand {
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::open(path).unwrap_or_exit(),
            None => Config::default(),
        };

        let report = ops::process(ops::process::ProcessOptions {
            input: &self.input,
            output: &self.output,
            config,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
