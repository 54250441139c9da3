//! Decoded documents.
//!
//! Documents are opaque JSON trees. Object keys keep their source order
//! unless [`sort_keys`] is applied.

use std::{fs, path::Path};

use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// A decoded JSON document.
pub type Document = Value;

/// Read and decode a JSON document from disk.
pub fn read_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading document");
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|e| Error::decode(path, e))
}

/// Return a copy of `document` with every object's keys sorted, recursively.
pub fn sort_keys(document: &Document) -> Document {
    let mut sorted = document.clone();
    sort_keys_in_place(&mut sorted);
    sorted
}

fn sort_keys_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.sort_keys();
            map.values_mut().for_each(sort_keys_in_place);
        }
        Value::Array(items) => items.iter_mut().for_each(sort_keys_in_place),
        _ => {}
    }
}

/// View a document as a flat list of strings, if it is one.
pub fn as_string_list(document: &Document) -> Option<Vec<&str>> {
    document.as_array()?.iter().map(Value::as_str).collect()
}
