//! Data summary phase - lists the identifiers of every data category, per
//! namespace and as one nested document per namespace.

use std::{path::Path, sync::Arc};

use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use mcdata_core::{Category, DATA_CATEGORIES, Document, ResourceLocation, Target};
use serde_json::Value;
use tracing::{debug, info};

use super::locations_document;
use crate::pipeline::{Diagnostic, Phase, PhaseStats, ProcessContext, json_walker};

/// A node of a namespace's nested summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryNode {
    /// Intermediate category segment, e.g. `tags`.
    Branch(IndexMap<String, SummaryNode>),
    /// The identifier list of a category, shared with the flat output.
    Leaf(Arc<[ResourceLocation]>),
}

impl SummaryNode {
    pub fn to_document(&self) -> Document {
        match self {
            SummaryNode::Branch(children) => tree_document(children),
            SummaryNode::Leaf(list) => locations_document(list),
        }
    }

    fn children_mut(&mut self) -> &mut IndexMap<String, SummaryNode> {
        if matches!(self, SummaryNode::Leaf(_)) {
            *self = SummaryNode::Branch(IndexMap::new());
        }
        match self {
            SummaryNode::Branch(children) => children,
            SummaryNode::Leaf(_) => unreachable!("leaf was replaced by a branch"),
        }
    }
}

/// The identifiers of one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSummary {
    pub namespace: String,
    /// One list per category, in category table order.
    pub categories: Vec<(Category, Arc<[ResourceLocation]>)>,
    /// The same lists nested by category segments.
    pub tree: IndexMap<String, SummaryNode>,
}

impl NamespaceSummary {
    /// The flat list of a category.
    pub fn list(&self, category: &Category) -> Option<&Arc<[ResourceLocation]>> {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, list)| list)
    }

    /// The nested summary as a document, e.g. `{"tags": {"blocks": [...]}}`.
    pub fn to_document(&self) -> Document {
        tree_document(&self.tree)
    }

    fn insert(&mut self, category: Category, list: Arc<[ResourceLocation]>) {
        if let Some((last, parents)) = category.segments().split_last() {
            let mut node = &mut self.tree;
            for segment in parents {
                node = node
                    .entry((*segment).to_string())
                    .or_insert_with(|| SummaryNode::Branch(IndexMap::new()))
                    .children_mut();
            }
            node.insert((*last).to_string(), SummaryNode::Leaf(list.clone()));
        }
        self.categories.push((category, list));
    }
}

fn tree_document(tree: &IndexMap<String, SummaryNode>) -> Document {
    Value::Object(
        tree.iter()
            .map(|(key, node)| (key.clone(), node.to_document()))
            .collect(),
    )
}

/// Summarize every category of the namespace rooted at `namespace_dir`.
///
/// A category folder that does not exist yields an empty list.
pub fn aggregate_namespace(
    namespace_dir: &Path,
    namespace: &str,
    categories: &[Category],
    sorted: bool,
) -> mcdata_core::Result<NamespaceSummary> {
    let mut summary = NamespaceSummary {
        namespace: namespace.to_string(),
        categories: Vec::with_capacity(categories.len()),
        tree: IndexMap::new(),
    };

    for category in categories {
        let walker = json_walker(&category.dir_in(namespace_dir));
        let mut locations = walker
            .files()
            .map(|file| file.map(|f| f.relative.to_location(namespace)))
            .collect::<mcdata_core::Result<Vec<_>>>()?;
        if sorted {
            locations.sort();
        }
        debug!(namespace, %category, count = locations.len(), "collected identifiers");
        summary.insert(*category, locations.into());
    }

    Ok(summary)
}

/// Summarize every namespace under `data_root`, in name order.
///
/// Namespaces are the directories directly under `data_root`, minus the
/// excluded names.
pub fn aggregate(
    data_root: &Path,
    categories: &[Category],
    sorted: bool,
) -> mcdata_core::Result<Vec<NamespaceSummary>> {
    json_walker(data_root)
        .child_dirs()?
        .into_iter()
        .map(|(namespace, dir)| aggregate_namespace(&dir, &namespace, categories, sorted))
        .collect()
}

/// Phase that writes `data/<namespace>/<category>.*` and `data/<namespace>.*`.
pub struct DataSummaryPhase;

impl Phase for DataSummaryPhase {
    fn name(&self) -> &'static str {
        "data"
    }

    fn description(&self) -> &'static str {
        "Summarize data categories per namespace"
    }

    fn run(&self, ctx: &mut ProcessContext) -> Result<()> {
        let mut stats = PhaseStats::new(self.name());
        let data_in = ctx.input.join("data");

        if !data_in.is_dir() {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "data folder not found")
                    .at(data_in.display().to_string()),
            );
            ctx.record(stats);
            return Ok(());
        }

        let summaries = aggregate(&data_in, DATA_CATEGORIES, ctx.config.sorting.summaries)
            .wrap_err("Failed to summarize data")?;

        let emitter = ctx.emitter();
        let formats = &ctx.config.formats;
        let data_out = ctx.output.join("data");

        for summary in &summaries {
            info!(namespace = %summary.namespace, "writing summaries");
            let namespace_out = data_out.join(&summary.namespace);

            for (category, list) in &summary.categories {
                let target = Target::new(category.parent_in(&namespace_out), category.name());
                let written =
                    emitter.emit(&locations_document(list), &target, formats.summaries)?;
                stats.add(&written);
            }

            let target = Target::new(&data_out, summary.namespace.as_str());
            let written = emitter.emit(&summary.to_document(), &target, formats.namespaces)?;
            stats.add(&written);
        }

        ctx.record(stats);
        Ok(())
    }
}
