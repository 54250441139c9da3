//! End-to-end tests running the full pipeline on a small generated tree.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mcdata_core::{Config, Document, Format};
use mcdata_pipeline::{Pipeline, ProcessContext};
use serde_json::json;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

fn read_json(path: impl AsRef<Path>) -> Document {
    serde_json::from_str(&read(path)).unwrap()
}

/// A generated tree with two namespaces, reports and ignored folders.
fn fixture(root: &Path) {
    write(
        root,
        "reports/registries.json",
        r#"{
            "minecraft:block": {"entries": {"minecraft:stone": {"protocol_id": 1}, "minecraft:dirt": {"protocol_id": 2}}},
            "minecraft:sound_event": {"entries": {"minecraft:ambient.cave": {"protocol_id": 0}}}
        }"#,
    );
    write(
        root,
        "reports/blocks.json",
        r#"{
            "minecraft:furnace": {
                "properties": {"lit": ["true", "false"]},
                "states": [
                    {"id": 1, "properties": {"lit": "false"}},
                    {"id": 2, "properties": {"lit": "true"}, "default": true}
                ]
            },
            "minecraft:stone": {"states": [{"id": 3, "default": true}]}
        }"#,
    );
    write(root, "reports/biomes/minecraft/plains.json", r#"{"temperature": 0.8}"#);
    write(root, "reports/biomes/minecraft/desert.json", r#"{"temperature": 2.0}"#);
    write(root, "data/minecraft/tags/blocks/logs.json", r#"{"values": []}"#);
    write(root, "data/minecraft/tags/blocks/mineable/axe.json", r#"{"values": []}"#);
    write(root, "data/minecraft/recipes/torch.json", r#"{"type": "crafting_shaped"}"#);
    write(root, "data/foo/tags/blocks/example.json", r#"{"values": ["minecraft:stone"]}"#);
    write(root, "data/foo/tmp/scratch.json", "not even json");
    write(root, ".cache/hash.json", "also not json");
}

fn run(config: Config) -> (TempDir, PathBuf, ProcessContext) {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("generated");
    let output = temp.path().join("processed");
    fixture(&input);

    let ctx = Pipeline::new()
        .run(ProcessContext::new(&input, &output, config))
        .expect("pipeline should succeed");
    (temp, output, ctx)
}

#[test]
fn test_originals_are_mirrored() {
    let (_temp, out, ctx) = run(Config::default());

    assert_eq!(
        read(out.join("data/minecraft/recipes/torch.min.json")),
        r#"{"type":"crafting_shaped"}"#
    );
    assert!(out.join("data/minecraft/recipes/torch.yaml").is_file());
    assert!(out.join("data/minecraft/recipes/torch.msgpack").is_file());
    assert!(!out.join("data/minecraft/recipes/torch.json").exists());
    assert!(out.join("reports/registries.min.json").is_file());
    assert!(!out.join("data/foo/tmp").exists());
    assert!(!out.join(".cache").exists());
    assert!(!ctx.has_warnings());
}

#[test]
fn test_originals_pretty_when_configured() {
    let mut config = Config::default();
    config.originals.pretty = true;
    config.originals.binary = false;
    let (_temp, out, _ctx) = run(config);

    let pretty = read(out.join("data/minecraft/recipes/torch.json"));
    assert_eq!(pretty, "{\n  \"type\": \"crafting_shaped\"\n}");
    assert!(!out.join("data/minecraft/recipes/torch.msgpack").exists());
}

#[test]
fn test_registries_are_split() {
    let (_temp, out, _ctx) = run(Config::default());

    assert_eq!(
        read_json(out.join("reports/registries/block/data.json")),
        json!({"values": ["minecraft:dirt", "minecraft:stone"]})
    );
    assert_eq!(
        read(out.join("reports/registries/sound_event/data.txt")),
        "minecraft:ambient.cave"
    );
}

#[test]
fn test_registries_unsorted_when_configured() {
    let mut config = Config::default();
    config.sorting.registries = false;
    let (_temp, out, _ctx) = run(config);

    assert_eq!(
        read(out.join("reports/registries/block/data.txt")),
        "minecraft:stone\nminecraft:dirt"
    );
}

#[test]
fn test_blocks_are_simplified() {
    let (_temp, out, _ctx) = run(Config::default());

    assert_eq!(
        read_json(out.join("reports/blocks/simplified.json")),
        json!({
            "minecraft:furnace": {
                "properties": {"lit": ["true", "false"]},
                "default": {"lit": "true"}
            },
            "minecraft:stone": {"properties": {}, "default": {}}
        })
    );
}

#[test]
fn test_report_folders_are_summarized() {
    let (_temp, out, _ctx) = run(Config::default());

    assert_eq!(
        read(out.join("reports/biomes.txt")),
        "minecraft:desert\nminecraft:plains"
    );
}

#[test]
fn test_data_is_summarized() {
    let (_temp, out, _ctx) = run(Config::default());

    assert_eq!(
        read(out.join("data/minecraft/tags/blocks.txt")),
        "minecraft:logs\nminecraft:mineable/axe"
    );
    assert_eq!(
        read_json(out.join("data/foo/tags/blocks.json")),
        json!(["foo:example"])
    );
    assert_eq!(read(out.join("data/foo/recipes.txt")), "");

    let foo = read_json(out.join("data/foo.json"));
    assert_eq!(foo["tags"]["blocks"], json!(["foo:example"]));
    assert_eq!(foo["recipes"], json!([]));
    assert!(!out.join("data/foo.txt").exists());
    assert!(!out.join("data/tmp.json").exists());
}

#[test]
fn test_summaries_match_nested_documents() {
    let (_temp, out, _ctx) = run(Config::default());

    let nested = read_json(out.join("data/minecraft.json"));
    for category in mcdata_core::DATA_CATEGORIES {
        let mut leaf = &nested;
        for segment in category.segments() {
            leaf = &leaf[*segment];
        }
        let flat = read_json(
            category
                .parent_in(&out.join("data/minecraft"))
                .join(format!("{}.{}", category.name(), Format::Json.extension())),
        );
        assert_eq!(leaf, &flat, "mismatch for {category}");
    }
}

#[test]
fn test_runs_are_byte_identical() {
    let (_a, first, _) = run(Config::default());
    let (_b, second, _) = run(Config::default());

    for rel in [
        "data/minecraft/tags/blocks.min.json",
        "data/minecraft.yaml",
        "reports/registries/block/data.txt",
        "reports/blocks/simplified.min.json",
    ] {
        assert_eq!(
            fs::read(first.join(rel)).unwrap(),
            fs::read(second.join(rel)).unwrap(),
            "{rel} differs between runs"
        );
    }
}

#[test]
fn test_stats_cover_every_phase() {
    let (_temp, _out, ctx) = run(Config::default());

    let phases: Vec<_> = ctx.stats.iter().map(|s| s.phase).collect();
    assert_eq!(phases, ["originals", "registries", "blocks", "reports", "data"]);
    assert_eq!(ctx.stats[0].documents, 8);
    assert_eq!(ctx.stats[1].documents, 2);
    assert!(ctx.files_written() > 0);
}

#[test]
fn test_missing_default_state_aborts() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("generated");
    write(
        &input,
        "reports/blocks.json",
        r#"{"minecraft:furnace": {"states": [{"properties": {"lit": "false"}}]}}"#,
    );

    let err = Pipeline::new()
        .run(ProcessContext::new(
            &input,
            temp.path().join("processed"),
            Config::default(),
        ))
        .unwrap_err();

    let chain: Vec<_> = err.chain().map(|e| e.to_string()).collect();
    assert!(
        chain
            .iter()
            .any(|m| m.contains("has no state marked as default")),
        "unexpected error chain: {chain:?}"
    );
}
