//! Output encodings and sets of them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An encoding a document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed JSON with 2-space indentation.
    Json,
    /// Compact JSON without insignificant whitespace.
    Min,
    /// MessagePack.
    Binary,
    /// Block-style YAML.
    Yaml,
    /// One string per line; only valid for flat lists of strings.
    Text,
}

impl Format {
    /// Every format, in the order files are written.
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Min,
        Format::Binary,
        Format::Yaml,
        Format::Text,
    ];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Min => "min.json",
            Format::Binary => "msgpack",
            Format::Yaml => "yaml",
            Format::Text => "txt",
        }
    }

    /// The single-format set for this format.
    pub const fn as_set(self) -> FormatSet {
        match self {
            Format::Json => FormatSet::JSON,
            Format::Min => FormatSet::MIN,
            Format::Binary => FormatSet::BINARY,
            Format::Yaml => FormatSet::YAML,
            Format::Text => FormatSet::TEXT,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "json",
            Format::Min => "min",
            Format::Binary => "binary",
            Format::Yaml => "yaml",
            Format::Text => "text",
        };
        f.write_str(name)
    }
}

bitflags::bitflags! {
    /// A set of formats, iterated in [`Format::ALL`] order.
    ///
    /// Serialized as a list of format names, e.g. `["json", "min", "yaml"]`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatSet: u8 {
        const JSON = 1 << 0;
        const MIN = 1 << 1;
        const BINARY = 1 << 2;
        const YAML = 1 << 3;
        const TEXT = 1 << 4;
    }
}

impl FormatSet {
    /// Number of formats in the set.
    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// The formats in the set, in [`Format::ALL`] order.
    pub fn formats(self) -> impl Iterator<Item = Format> {
        Format::ALL
            .into_iter()
            .filter(move |f| self.contains(f.as_set()))
    }
}

impl From<Format> for FormatSet {
    fn from(format: Format) -> Self {
        format.as_set()
    }
}

impl FromIterator<Format> for FormatSet {
    fn from_iter<I: IntoIterator<Item = Format>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, format| set | format.as_set())
    }
}

impl Serialize for FormatSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.formats())
    }
}

impl<'de> Deserialize<'de> for FormatSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<Format>::deserialize(deserializer)?.into_iter().collect())
    }
}
