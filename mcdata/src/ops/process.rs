//! Process operation - runs the pipeline from one input root into a fresh
//! output root.

use std::path::Path;

use eyre::{Context, Result, bail};
use mcdata_core::Config;
use mcdata_pipeline::{Pipeline, ProcessContext};
use tracing::info;

use crate::reports::ProcessReport;

/// Options for the process operation.
pub struct ProcessOptions<'a> {
    /// Root of the generated data.
    pub input: &'a Path,
    /// Root of the processed output; must not exist.
    pub output: &'a Path,
    /// Configuration for this run.
    pub config: Config,
}

/// Execute the process operation.
///
/// Refuses to run when the input root is missing or the output root already
/// exists. On failure, whatever was written so far is left in place.
pub fn process(opts: ProcessOptions) -> Result<ProcessReport> {
    let input = std::path::absolute(opts.input)
        .wrap_err_with(|| format!("Failed to resolve '{}'", opts.input.display()))?;
    let output = std::path::absolute(opts.output)
        .wrap_err_with(|| format!("Failed to resolve '{}'", opts.output.display()))?;

    if !input.exists() {
        bail!(
            "The provided path for generated data does not exist: {}",
            input.display()
        );
    }
    if output.exists() {
        bail!(
            "The provided path for processed output already exists; \
             it should be deleted before proceeding: {}",
            output.display()
        );
    }

    info!(input = %input.display(), "using input path");
    info!(output = %output.display(), "using output path");

    let ctx = Pipeline::new()
        .run(ProcessContext::new(&input, &output, opts.config))
        .wrap_err("Processing failed")?;

    Ok(ProcessReport {
        files_written: ctx.files_written(),
        warnings: ctx.warnings().map(|d| d.to_string()).collect(),
        phases: ctx.stats,
        input,
        output,
    })
}
