mod completions;
mod process;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use process::ProcessCommand;

use crate::logging::LogLevel;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for mcdata_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "mcdata")]
#[command(version)]
#[command(about = "Process generated game data into minified, binary, YAML and summary files")]
pub(crate) struct Cli {
    /// The logging level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Process(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Process a tree of generated data
    Process(ProcessCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
