//! Processing context passed through pipeline phases.

use std::path::{Path, PathBuf};

use mcdata_core::{Config, EXCLUDE_DIRS, Emitter, JSON_SUFFIX, ResourceWalker};
use serde::Serialize;

use super::diagnostic::{Diagnostic, Severity};

/// What a single phase read and wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseStats {
    /// The phase these numbers belong to.
    pub phase: &'static str,
    /// Logical documents produced.
    pub documents: usize,
    /// Files written across all formats.
    pub files: usize,
}

impl PhaseStats {
    pub fn new(phase: &'static str) -> Self {
        Self {
            phase,
            documents: 0,
            files: 0,
        }
    }

    /// Count one document and the files it was written to.
    pub fn add(&mut self, written: &[PathBuf]) {
        self.documents += 1;
        self.files += written.len();
    }
}

/// Context passed through all pipeline phases.
///
/// This struct carries the resolved roots and the configuration of one run,
/// accumulating statistics and diagnostics along the way.
#[derive(Debug)]
pub struct ProcessContext {
    /// Root of the generated data.
    pub input: PathBuf,
    /// Root of the processed output.
    pub output: PathBuf,
    /// Configuration for this run.
    pub config: Config,
    /// Statistics recorded by each phase, in execution order.
    pub stats: Vec<PhaseStats>,
    /// Diagnostics collected during processing.
    pub diagnostics: Vec<Diagnostic>,
}

impl ProcessContext {
    /// Create a new processing context.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            config,
            stats: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// An emitter configured for this run.
    pub fn emitter(&self) -> Emitter {
        Emitter::new().sort_keys(self.config.output.sort_keys)
    }

    /// A walker over the JSON documents under `root`, skipping excluded
    /// directories.
    pub fn walker(&self, root: impl AsRef<Path>) -> ResourceWalker {
        json_walker(root.as_ref())
    }

    /// Record the statistics of a finished phase.
    pub fn record(&mut self, stats: PhaseStats) {
        self.stats.push(stats);
    }

    /// Total number of files written so far.
    pub fn files_written(&self) -> usize {
        self.stats.iter().map(|s| s.files).sum()
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}

/// A walker over the JSON documents under `root`, skipping excluded
/// directories.
pub(crate) fn json_walker(root: &Path) -> ResourceWalker {
    ResourceWalker::new(root)
        .exclude(EXCLUDE_DIRS.iter().copied())
        .suffix(JSON_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> ProcessContext {
        ProcessContext::new("in", "out", Config::default())
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();

        assert_eq!(ctx.input, PathBuf::from("in"));
        assert!(ctx.stats.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_info("test", "just info");
        assert!(!ctx.has_warnings());

        ctx.add_warning("test", "test warning");
        assert!(ctx.has_warnings());
        assert_eq!(ctx.warnings().count(), 1);
    }

    #[test]
    fn test_context_stats() {
        let mut ctx = make_context();

        let mut stats = PhaseStats::new("originals");
        stats.add(&[PathBuf::from("a.min.json"), PathBuf::from("a.yaml")]);
        stats.add(&[PathBuf::from("b.min.json")]);
        ctx.record(stats);
        ctx.record(PhaseStats::new("blocks"));

        assert_eq!(ctx.stats[0].documents, 2);
        assert_eq!(ctx.files_written(), 3);
    }
}
