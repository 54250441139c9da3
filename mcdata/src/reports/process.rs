//! Process command report data structures.

use std::path::PathBuf;

use mcdata_pipeline::pipeline::PhaseStats;

use super::output::{Output, Report};

/// Report data from a processing run.
#[derive(Debug)]
pub struct ProcessReport {
    /// Resolved input root.
    pub input: PathBuf,
    /// Resolved output root.
    pub output: PathBuf,
    /// Statistics per phase, in execution order.
    pub phases: Vec<PhaseStats>,
    /// Rendered warning diagnostics.
    pub warnings: Vec<String>,
    /// Total files written.
    pub files_written: usize,
}

impl Report for ProcessReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.key_value("Input", &self.input.display().to_string());
        out.key_value("Output", &self.output.display().to_string());
        out.newline();

        out.section(&format!("Phases ({})", self.phases.len()));
        for (i, stats) in self.phases.iter().enumerate() {
            out.numbered_item(
                i + 1,
                &format!(
                    "{}: {} documents, {} files",
                    stats.phase, stats.documents, stats.files
                ),
            );
        }
        out.newline();

        out.key_value("Files written", &self.files_written.to_string());
    }
}
