//! Pipeline orchestrator.

use eyre::Result;
use tracing::{info, info_span};

use super::{Phase, PhaseInfo, ProcessContext};
use crate::phases::{
    BlocksPhase, DataSummaryPhase, OriginalsPhase, RegistriesPhase, ReportSummaryPhase,
};

/// The processing pipeline orchestrator.
///
/// The pipeline runs the built-in phases (originals, registries, blocks,
/// reports, data) followed by any user phases. The first failing phase
/// aborts the run; output written so far is left in place.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
/// let ctx = pipeline.run(ProcessContext::new(input, output, config))?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Describe every phase in execution order.
    pub fn describe(&self) -> Vec<PhaseInfo> {
        Self::builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.info())
            .collect()
    }

    /// Run the pipeline.
    ///
    /// Executes all phases in order:
    /// 1. OriginalsPhase - re-emits every input document
    /// 2. RegistriesPhase - splits `reports/registries.json`
    /// 3. BlocksPhase - simplifies `reports/blocks.json`
    /// 4. ReportSummaryPhase - summarizes namespaced report folders
    /// 5. DataSummaryPhase - summarizes data categories per namespace
    /// 6. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails.
    pub fn run(&self, mut ctx: ProcessContext) -> Result<ProcessContext> {
        let builtin_phases = Self::builtin_phases();

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            let span = info_span!("phase", name = phase.name());
            let _enter = span.enter();
            info!("{}", phase.description());
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }

    fn builtin_phases() -> Vec<Box<dyn Phase>> {
        vec![
            Box::new(OriginalsPhase),
            Box::new(RegistriesPhase),
            Box::new(BlocksPhase),
            Box::new(ReportSummaryPhase),
            Box::new(DataSummaryPhase),
        ]
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
