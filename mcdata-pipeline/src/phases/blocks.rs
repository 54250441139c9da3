//! Blocks phase - reduces the blocks report to declared properties and
//! default states.

use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use mcdata_core::{Document, Error, Target, read_document};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::pipeline::{Diagnostic, Phase, PhaseStats, ProcessContext};

/// A block reduced to what it declares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockDescriptor {
    /// Property name to allowed values; empty when the block has none.
    pub properties: Value,
    /// Property assignment of the default state.
    pub default: Value,
}

/// Simplify every block of a blocks report, in report order.
///
/// # Errors
///
/// Fails with [`Error::NoDefaultState`] if a block has no state whose
/// `default` field is truthy.
pub fn simplify_blocks(
    document: &Document,
) -> mcdata_core::Result<IndexMap<String, BlockDescriptor>> {
    let blocks = document
        .as_object()
        .ok_or_else(|| Error::unexpected_shape("blocks", "expected an object of blocks"))?;

    blocks
        .iter()
        .map(|(name, block)| -> mcdata_core::Result<(String, BlockDescriptor)> {
            Ok((name.clone(), simplify_block(name, block)?))
        })
        .collect()
}

fn simplify_block(name: &str, block: &Value) -> mcdata_core::Result<BlockDescriptor> {
    let states = block
        .get("states")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let default_state = states
        .iter()
        .find(|state| is_truthy(state.get("default")))
        .ok_or_else(|| {
            Box::new(Error::NoDefaultState {
                block: name.to_string(),
            })
        })?;

    Ok(BlockDescriptor {
        properties: properties_of(block),
        default: properties_of(default_state),
    })
}

fn properties_of(value: &Value) -> Value {
    value
        .get("properties")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Phase that writes `reports/blocks/simplified.*`.
pub struct BlocksPhase;

impl Phase for BlocksPhase {
    fn name(&self) -> &'static str {
        "blocks"
    }

    fn description(&self) -> &'static str {
        "Simplify the blocks report"
    }

    fn run(&self, ctx: &mut ProcessContext) -> Result<()> {
        let mut stats = PhaseStats::new(self.name());
        let path = ctx.input.join("reports").join("blocks.json");

        if !path.is_file() {
            ctx.add_diagnostic(
                Diagnostic::warning(self.name(), "blocks report not found")
                    .at(path.display().to_string()),
            );
            ctx.record(stats);
            return Ok(());
        }

        let document = read_document(&path)?;
        let simplified = simplify_blocks(&document)
            .wrap_err_with(|| format!("Invalid blocks report '{}'", path.display()))?;
        let simplified = serde_json::to_value(&simplified)?;

        let target = Target::new(ctx.output.join("reports").join("blocks"), "simplified");
        let written = ctx
            .emitter()
            .emit(&simplified, &target, ctx.config.formats.blocks)?;
        stats.add(&written);

        ctx.record(stats);
        Ok(())
    }
}
