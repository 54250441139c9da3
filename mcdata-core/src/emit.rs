//! Writing one document in several encodings.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    Document, EncodeError, Error, Format, FormatSet, Result,
    document::{as_string_list, sort_keys},
};

/// Where a document's sibling files are written: `<dir>/<name>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    dir: PathBuf,
    name: String,
}

impl Target {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the file written for `format`.
    pub fn path(&self, format: Format) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.name, format.extension()))
    }
}

/// Writes documents to every requested format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    sort_keys: bool,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort object keys recursively before encoding.
    pub fn sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Write `document` once per format in `formats`, creating the target
    /// directory first. Existing files are overwritten.
    ///
    /// Returns the paths written, in format order.
    pub fn emit(
        &self,
        document: &Document,
        target: &Target,
        formats: FormatSet,
    ) -> Result<Vec<PathBuf>> {
        if formats.is_empty() {
            return Ok(Vec::new());
        }

        let sorted;
        let document = if self.sort_keys {
            sorted = sort_keys(document);
            &sorted
        } else {
            document
        };

        create_dir(target.dir())?;

        let mut written = Vec::with_capacity(formats.len());
        for format in formats.formats() {
            let path = target.path(format);
            let bytes = encode(document, format).map_err(|source| match source {
                EncodeError::Shape(reason) => {
                    Error::type_mismatch(path.display().to_string(), format, reason)
                }
                source => Box::new(Error::Encode {
                    path: path.clone(),
                    format,
                    source,
                }),
            })?;
            write_file(&path, &bytes)?;
            debug!(path = %path.display(), %format, "wrote file");
            written.push(path);
        }

        Ok(written)
    }
}

/// Encode a document in a single format.
pub fn encode(document: &Document, format: Format) -> std::result::Result<Vec<u8>, EncodeError> {
    let bytes = match format {
        Format::Json => serde_json::to_vec_pretty(document)?,
        Format::Min => serde_json::to_vec(document)?,
        Format::Binary => rmp_serde::to_vec(document)?,
        Format::Yaml => serde_yaml::to_string(document)?.into_bytes(),
        Format::Text => {
            let lines = as_string_list(document).ok_or_else(|| {
                EncodeError::Shape("text output requires a flat list of strings".into())
            })?;
            lines.join("\n").into_bytes()
        }
    };
    Ok(bytes)
}

fn create_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "creating missing output directory");
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
