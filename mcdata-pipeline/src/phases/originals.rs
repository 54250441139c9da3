//! Originals phase - re-emits every input document.

use std::path::Path;

use eyre::{Result, WrapErr};
use mcdata_core::{Emitter, FormatSet, ResourceWalker, Target, read_document};
use tracing::{debug, info};

use crate::pipeline::{Phase, PhaseStats, ProcessContext};

/// Phase that mirrors the input tree into the output tree, writing every
/// JSON document in the configured originals formats.
pub struct OriginalsPhase;

impl Phase for OriginalsPhase {
    fn name(&self) -> &'static str {
        "originals"
    }

    fn description(&self) -> &'static str {
        "Re-emit every input document"
    }

    fn run(&self, ctx: &mut ProcessContext) -> Result<()> {
        let walker = ctx.walker(&ctx.input);
        let stats = convert_all(
            &walker,
            &ctx.output,
            &ctx.emitter(),
            ctx.config.originals_formats(),
        )?;
        ctx.record(stats);
        Ok(())
    }
}

/// Decode every file the walker yields and write it under `output_root` at
/// the same relative location.
///
/// The walk root itself is not part of the mirrored path.
pub fn convert_all(
    walker: &ResourceWalker,
    output_root: &Path,
    emitter: &Emitter,
    formats: FormatSet,
) -> Result<PhaseStats> {
    let mut stats = PhaseStats::new("originals");
    let mut current_dir = None;

    for file in walker {
        let file = file.wrap_err("Failed to walk input tree")?;
        let out_dir = output_root.join(file.relative.dir());
        if current_dir.as_ref() != Some(&out_dir) {
            info!(dir = %out_dir.display(), "converting directory");
            current_dir = Some(out_dir.clone());
        }

        let document = read_document(&file.path)?;
        let target = Target::new(out_dir, file.relative.stem());
        let written = emitter.emit(&document, &target, formats)?;
        debug!(file = %file.relative, files = written.len(), "converted document");
        stats.add(&written);
    }

    Ok(stats)
}
