//! Pipeline phase trait.

use eyre::Result;

use super::ProcessContext;

/// Information about a pipeline phase.
#[derive(Debug, Clone)]
pub struct PhaseInfo {
    /// The phase name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A phase in the processing pipeline.
///
/// Phases are executed in order by the pipeline. Each phase reads from the
/// input tree, writes into its own part of the output tree and records
/// statistics and diagnostics on the context.
///
/// Built-in phases:
/// - `OriginalsPhase` - re-emits every input document
/// - `RegistriesPhase` - splits the registries report
/// - `BlocksPhase` - simplifies the blocks report
/// - `ReportSummaryPhase` - lists the identifiers of namespaced report folders
/// - `DataSummaryPhase` - lists the identifiers of every data category
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and statistics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the processing context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails. Every error is fatal; optional
    /// inputs that are missing should be recorded as diagnostics instead.
    fn run(&self, ctx: &mut ProcessContext) -> Result<()>;

    /// Get information about this phase.
    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
