//! Registries phase - splits the combined registries report.

use eyre::{Result, WrapErr};
use mcdata_core::{Document, Error, FormatSet, ResourceLocation, Target, read_document};
use serde_json::{Value, json};
use tracing::debug;

use crate::pipeline::{Diagnostic, Phase, PhaseStats, ProcessContext};

/// The members of one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryGroup {
    /// Fully qualified registry name, e.g. `minecraft:block`.
    pub registry: ResourceLocation,
    /// Keys of the registry's `entries`.
    pub values: Vec<String>,
}

impl RegistryGroup {
    /// The registry name without its namespace, e.g. `block`.
    pub fn short_name(&self) -> &str {
        self.registry.path()
    }

    /// `{"values": [...]}`
    pub fn to_document(&self) -> Document {
        json!({ "values": self.values })
    }

    /// The bare member list.
    pub fn values_document(&self) -> Document {
        Value::Array(self.values.iter().cloned().map(Value::String).collect())
    }
}

/// Split a registries report into one group per registry, in report order.
///
/// Members keep their declaration order unless `sorted` is set.
pub fn split_registries(
    document: &Document,
    sorted: bool,
) -> mcdata_core::Result<Vec<RegistryGroup>> {
    let registries = document
        .as_object()
        .ok_or_else(|| Error::unexpected_shape("registries", "expected an object of registries"))?;

    registries
        .iter()
        .map(|(name, registry)| -> mcdata_core::Result<RegistryGroup> {
            let registry_name = ResourceLocation::parse(name)?;
            let entries = registry
                .get("entries")
                .and_then(Value::as_object)
                .ok_or_else(|| {
                    Error::unexpected_shape(name.as_str(), "registry has no 'entries' object")
                })?;

            let mut values: Vec<String> = entries.keys().cloned().collect();
            if sorted {
                values.sort();
            }
            Ok(RegistryGroup {
                registry: registry_name,
                values,
            })
        })
        .collect()
}

/// Phase that writes `reports/registries/<name>/data.*` for every registry.
pub struct RegistriesPhase;

impl Phase for RegistriesPhase {
    fn name(&self) -> &'static str {
        "registries"
    }

    fn description(&self) -> &'static str {
        "Split the registries report"
    }

    fn run(&self, ctx: &mut ProcessContext) -> Result<()> {
        let mut stats = PhaseStats::new(self.name());
        let path = ctx.input.join("reports").join("registries.json");

        if !path.is_file() {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "registries report not found")
                    .at(path.display().to_string()),
            );
            ctx.record(stats);
            return Ok(());
        }

        let document = read_document(&path)?;
        let groups = split_registries(&document, ctx.config.sorting.registries)
            .wrap_err_with(|| format!("Invalid registries report '{}'", path.display()))?;

        let emitter = ctx.emitter();
        let formats = ctx.config.formats.registries;
        let out_dir = ctx.output.join("reports").join("registries");

        for group in &groups {
            let target = Target::new(out_dir.join(group.short_name()), "data");
            let mut written =
                emitter.emit(&group.to_document(), &target, formats - FormatSet::TEXT)?;
            if formats.contains(FormatSet::TEXT) {
                written.extend(emitter.emit(&group.values_document(), &target, FormatSet::TEXT)?);
            }
            debug!(registry = %group.registry, values = group.values.len(), "split registry");
            stats.add(&written);
        }

        ctx.record(stats);
        Ok(())
    }
}
