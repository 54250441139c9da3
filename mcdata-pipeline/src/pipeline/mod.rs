//! Processing pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that runs the processing
//! phases against one input tree and one output tree. The pipeline provides:
//!
//! - Explicit phase boundaries (originals → registries → blocks → reports → data)
//! - Unified diagnostics collection for skipped inputs
//! - Per-phase statistics via [`ProcessContext`]
//!
//! # Example
//!
//! ```ignore
//! use mcdata_pipeline::pipeline::{Pipeline, ProcessContext};
//!
//! let ctx = ProcessContext::new(input, output, Config::default());
//! let ctx = Pipeline::new().run(ctx)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
mod runner;

pub(crate) use context::json_walker;
pub use context::{PhaseStats, ProcessContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
