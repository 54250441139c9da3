//! Report summary phase - lists the identifiers found in namespaced report
//! folders such as `reports/biomes/<namespace>/...`.

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use mcdata_core::{REPORT_CATEGORIES, ResourceLocation, ResourceWalker, Target};
use tracing::debug;

use super::locations_document;
use crate::pipeline::{Diagnostic, Phase, PhaseStats, ProcessContext};

/// Identifiers collected from one report folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub locations: Vec<ResourceLocation>,
    /// Files directly in the folder, which have no namespace.
    pub skipped: Vec<PathBuf>,
}

/// Collect `namespace:path` for every file under a report folder.
///
/// The first directory below the walk root is the namespace. Files placed
/// directly in the root have no namespace and are returned as skipped.
pub fn summarize_report(
    walker: &ResourceWalker,
    sorted: bool,
) -> mcdata_core::Result<ReportSummary> {
    let mut summary = ReportSummary::default();
    for file in walker {
        let file = file?;
        match file.relative.split_first() {
            Some((namespace, path)) => summary.locations.push(path.to_location(namespace)),
            None => summary.skipped.push(file.path),
        }
    }
    if sorted {
        summary.locations.sort();
    }
    Ok(summary)
}

/// Phase that writes `reports/<category>.*` for every report category.
pub struct ReportSummaryPhase;

impl Phase for ReportSummaryPhase {
    fn name(&self) -> &'static str {
        "reports"
    }

    fn description(&self) -> &'static str {
        "Summarize namespaced report folders"
    }

    fn run(&self, ctx: &mut ProcessContext) -> Result<()> {
        let mut stats = PhaseStats::new(self.name());
        let emitter = ctx.emitter();
        let reports_in = ctx.input.join("reports");
        let reports_out = ctx.output.join("reports");

        for category in REPORT_CATEGORIES {
            let walker = ctx.walker(reports_in.join(category));
            let summary = summarize_report(&walker, ctx.config.sorting.reports)
                .wrap_err_with(|| format!("Failed to summarize report '{category}'"))?;
            for path in &summary.skipped {
                ctx.add_diagnostic(
                    Diagnostic::warning(self.name(), "skipped report file outside a namespace")
                        .at(path.display().to_string()),
                );
            }

            let target = Target::new(&reports_out, *category);
            let written = emitter.emit(
                &locations_document(&summary.locations),
                &target,
                ctx.config.formats.reports,
            )?;
            debug!(category = *category, count = summary.locations.len(), "summarized report");
            stats.add(&written);
        }

        ctx.record(stats);
        Ok(())
    }
}
