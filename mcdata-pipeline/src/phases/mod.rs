//! Built-in pipeline phases.
//!
//! - [`OriginalsPhase`] - re-emits every input document
//! - [`RegistriesPhase`] - splits the registries report into one group per registry
//! - [`BlocksPhase`] - reduces the blocks report to properties and default states
//! - [`ReportSummaryPhase`] - lists identifiers found in namespaced report folders
//! - [`DataSummaryPhase`] - lists identifiers per data category and namespace

mod blocks;
mod originals;
mod registries;
mod reports;
mod summary;

pub use blocks::{BlockDescriptor, BlocksPhase, simplify_blocks};
pub use originals::{OriginalsPhase, convert_all};
pub use registries::{RegistriesPhase, RegistryGroup, split_registries};
pub use reports::{ReportSummary, ReportSummaryPhase, summarize_report};
pub use summary::{
    DataSummaryPhase, NamespaceSummary, SummaryNode, aggregate, aggregate_namespace,
};

use mcdata_core::{Document, ResourceLocation};
use serde_json::Value;

/// A list of identifiers as a document.
pub(crate) fn locations_document(locations: &[ResourceLocation]) -> Document {
    Value::Array(
        locations
            .iter()
            .map(|l| Value::String(l.to_string()))
            .collect(),
    )
}
