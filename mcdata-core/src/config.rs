//! Processing configuration.
//!
//! The exclusion list and the category tables are fixed; everything else
//! can be tuned with an optional TOML file:
//!
//! ```toml
//! [output]
//! sort_keys = false
//!
//! [originals]
//! pretty = true
//! binary = true
//!
//! [sorting]
//! registries = true
//! summaries = true
//! reports = true
//!
//! [formats]
//! summaries = ["json", "min", "yaml", "text"]
//! namespaces = ["json", "min", "yaml"]
//! ```

use std::{path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Category, Error, FormatSet, Result};

/// Directory names that are never descended into.
pub const EXCLUDE_DIRS: &[&str] = &[".cache", "tmp"];

/// Suffix of input documents.
pub const JSON_SUFFIX: &str = ".json";

/// Data categories summarized for every namespace, in output order.
pub const DATA_CATEGORIES: &[Category] = &[
    Category::new(&["advancements"]),
    Category::new(&["loot_tables"]),
    Category::new(&["recipes"]),
    Category::new(&["structures"]),
    Category::new(&["tags", "blocks"]),
    Category::new(&["tags", "entity_types"]),
    Category::new(&["tags", "fluids"]),
    Category::new(&["tags", "functions"]),
    Category::new(&["tags", "game_events"]),
    Category::new(&["tags", "items"]),
    Category::new(&["dimension"]),
    Category::new(&["dimension_type"]),
    Category::new(&["worldgen", "biome"]),
    Category::new(&["worldgen", "configured_carver"]),
    Category::new(&["worldgen", "configured_feature"]),
    Category::new(&["worldgen", "configured_structure_feature"]),
    Category::new(&["worldgen", "configured_surface_builder"]),
    Category::new(&["worldgen", "noise_settings"]),
    Category::new(&["worldgen", "processor_list"]),
    Category::new(&["worldgen", "template_pool"]),
];

/// Namespaced report folders summarized into `reports/<name>.*`.
pub const REPORT_CATEGORIES: &[&str] = &["biomes"];

/// Configuration for one processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub originals: OriginalsConfig,
    pub sorting: SortingConfig,
    pub formats: FormatsConfig,
}

/// Options applied to every written document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Sort object keys before encoding.
    pub sort_keys: bool,
}

/// Which extra encodings originals are re-emitted in.
///
/// Compact JSON and YAML are always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OriginalsConfig {
    /// Also write pretty JSON next to the compact copy.
    pub pretty: bool,
    /// Also write the binary encoding.
    pub binary: bool,
}

impl Default for OriginalsConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            binary: true,
        }
    }
}

/// Whether identifier lists are sorted or keep discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortingConfig {
    pub registries: bool,
    pub summaries: bool,
    pub reports: bool,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            registries: true,
            summaries: true,
            reports: true,
        }
    }
}

/// Formats written for each kind of derived document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatsConfig {
    /// Per-category identifier lists.
    pub summaries: FormatSet,
    /// Per-namespace nested summaries.
    pub namespaces: FormatSet,
    /// Split registries.
    pub registries: FormatSet,
    /// Simplified block states.
    pub blocks: FormatSet,
    /// Report folder summaries.
    pub reports: FormatSet,
}

impl Default for FormatsConfig {
    fn default() -> Self {
        let lists = FormatSet::JSON | FormatSet::MIN | FormatSet::YAML | FormatSet::TEXT;
        let documents = lists - FormatSet::TEXT;
        Self {
            summaries: lists,
            namespaces: documents,
            registries: lists,
            blocks: documents,
            reports: lists,
        }
    }
}

impl Config {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a config with a filename used in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e, content, filename))
    }

    /// Formats originals are re-emitted in.
    pub fn originals_formats(&self) -> FormatSet {
        let mut formats = FormatSet::MIN | FormatSet::YAML;
        if self.originals.pretty {
            formats |= FormatSet::JSON;
        }
        if self.originals.binary {
            formats |= FormatSet::BINARY;
        }
        formats
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "mcdata.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert!(!config.output.sort_keys);
        assert!(config.sorting.registries);
        assert!(config.sorting.summaries);
        assert!(config.sorting.reports);
        assert!(config.formats.summaries.contains(FormatSet::TEXT));
        assert!(!config.formats.namespaces.contains(FormatSet::TEXT));
        assert_eq!(
            config.originals_formats(),
            FormatSet::MIN | FormatSet::BINARY | FormatSet::YAML
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_str(
            r#"
            [originals]
            pretty = true
            binary = false

            [sorting]
            registries = false

            [formats]
            blocks = ["min"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.originals_formats(),
            FormatSet::JSON | FormatSet::MIN | FormatSet::YAML
        );
        assert!(!config.sorting.registries);
        assert!(config.sorting.summaries);
        assert_eq!(config.formats.blocks, FormatSet::MIN);
        assert_eq!(config.formats.reports, FormatsConfig::default().reports);
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = Config::from_str("[output]\nsort = true\n").unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_unknown_format_is_config_error() {
        let err = Config::from_str("[formats]\nblocks = [\"xml\"]\n").unwrap_err();
        assert!(matches!(*err, Error::Config { .. }));
    }

    #[test]
    fn test_category_table_has_no_duplicates() {
        let mut names: Vec<_> = DATA_CATEGORIES.iter().map(|c| c.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DATA_CATEGORIES.len());
    }
}
