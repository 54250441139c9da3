//! Resource identifiers and the relative paths they are derived from.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
    str::FromStr,
};

use serde::{Serialize, Serializer};

use crate::{Error, Result};

/// Separator between a namespace and a path.
pub const NAMESPACE_SEPARATOR: char = ':';

/// A namespaced identifier such as `minecraft:stone`.
///
/// Ordering is byte-wise on the full `namespace:path` string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceLocation {
    full: String,
    separator: usize,
}

impl ResourceLocation {
    /// Join a namespace and a path.
    pub fn new(namespace: &str, path: &str) -> Self {
        Self {
            full: format!("{namespace}{NAMESPACE_SEPARATOR}{path}"),
            separator: namespace.len(),
        }
    }

    /// Parse a qualified name containing exactly one separator.
    pub fn parse(name: &str) -> Result<Self> {
        let mut positions = name.match_indices(NAMESPACE_SEPARATOR).map(|(i, _)| i);
        match (positions.next(), positions.next()) {
            (Some(separator), None) => Ok(Self {
                full: name.to_string(),
                separator,
            }),
            _ => Err(Error::malformed_name(name)),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.full[..self.separator]
    }

    pub fn path(&self) -> &str {
        &self.full[self.separator + NAMESPACE_SEPARATOR.len_utf8()..]
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl FromStr for ResourceLocation {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full)
    }
}

/// The location of a file relative to a walk root: the directories leading
/// to it plus its name without the extension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
    stem: String,
}

impl ResourcePath {
    pub fn new(segments: Vec<String>, stem: impl Into<String>) -> Self {
        Self {
            segments,
            stem: stem.into(),
        }
    }

    /// Compute the path of `file` relative to `root`, with `stem` as the
    /// final segment. Returns `None` when `file` is not under `root` or a
    /// directory name is not valid UTF-8.
    pub fn relative_to(root: &Path, file: &Path, stem: &str) -> Option<Self> {
        let parent = file.parent()?.strip_prefix(root).ok()?;
        let segments = parent
            .components()
            .map(|c| match c {
                Component::Normal(name) => name.to_str().map(str::to_owned),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(segments, stem))
    }

    /// Directory names from the root down to the file.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The directories as a relative filesystem path.
    pub fn dir(&self) -> PathBuf {
        self.segments.iter().collect()
    }

    /// Split off the first directory, e.g. a namespace folder.
    ///
    /// Returns `None` for files directly under the root.
    pub fn split_first(&self) -> Option<(&str, ResourcePath)> {
        let (first, rest) = self.segments.split_first()?;
        Some((first, ResourcePath::new(rest.to_vec(), self.stem.clone())))
    }

    /// Build the identifier `namespace:<segments>/<stem>`.
    pub fn to_location(&self, namespace: &str) -> ResourceLocation {
        ResourceLocation::new(namespace, &self.to_string())
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}/")?;
        }
        f.write_str(&self.stem)
    }
}

/// A data category: a fixed sub-directory path of a namespace such as
/// `tags/blocks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category(&'static [&'static str]);

impl Category {
    pub const fn new(segments: &'static [&'static str]) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &'static [&'static str] {
        self.0
    }

    /// The last segment, used as the file name of the category's summary.
    pub fn name(&self) -> &'static str {
        self.0.last().copied().unwrap_or_default()
    }

    /// The category directory under `namespace_dir`.
    pub fn dir_in(&self, namespace_dir: &Path) -> PathBuf {
        self.0.iter().fold(namespace_dir.to_path_buf(), |p, s| p.join(s))
    }

    /// The directory holding the category directory under `namespace_dir`.
    pub fn parent_in(&self, namespace_dir: &Path) -> PathBuf {
        let parents = self.0.split_last().map(|(_, p)| p).unwrap_or_default();
        parents
            .iter()
            .fold(namespace_dir.to_path_buf(), |p, s| p.join(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}
