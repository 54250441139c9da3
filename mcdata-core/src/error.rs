use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Format;

/// Result type for mcdata operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to access '{path}'")]
    #[diagnostic(code(mcdata::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk '{root}'")]
    #[diagnostic(code(mcdata::walk))]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("'{path}' is not valid UTF-8")]
    #[diagnostic(
        code(mcdata::non_utf8_path),
        help("file and directory names become identifiers and must be valid UTF-8")
    )]
    NonUtf8Path { path: PathBuf },

    #[error("failed to decode '{path}'")]
    #[diagnostic(
        code(mcdata::decode),
        help("the input tree should only contain files generated by the data generator")
    )]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode '{path}' as {format}")]
    #[diagnostic(code(mcdata::encode))]
    Encode {
        path: PathBuf,
        format: Format,
        #[source]
        source: EncodeError,
    },

    #[error("cannot write {format} output for '{document}': {reason}")]
    #[diagnostic(code(mcdata::type_mismatch))]
    TypeMismatch {
        document: String,
        format: Format,
        reason: String,
    },

    #[error("unexpected structure in '{document}': {reason}")]
    #[diagnostic(code(mcdata::unexpected_shape))]
    UnexpectedShape { document: String, reason: String },

    #[error("malformed resource name '{name}'")]
    #[diagnostic(
        code(mcdata::malformed_name),
        help("qualified names have the form 'namespace:path' with exactly one ':'")
    )]
    MalformedName { name: String },

    #[error("block '{block}' has no state marked as default")]
    #[diagnostic(
        code(mcdata::no_default_state),
        help("every block in the blocks report must declare exactly one default state")
    )]
    NoDefaultState { block: String },

    #[error("failed to parse config")]
    #[diagnostic(code(mcdata::config))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure of a single encoder, before it is attached to an output path.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Binary(#[from] rmp_serde::encode::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// The document has the wrong shape for the format.
    #[error("{0}")]
    Shape(String),
}

impl Error {
    /// Create an I/O error for a path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Create an error for a file or directory name that is not UTF-8
    pub fn non_utf8_path(path: impl AsRef<Path>) -> Box<Self> {
        Box::new(Error::NonUtf8Path {
            path: path.as_ref().to_path_buf(),
        })
    }

    /// Create a decode error for a path
    pub fn decode(path: impl AsRef<Path>, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Decode {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        document: impl Into<String>,
        format: Format,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::TypeMismatch {
            document: document.into(),
            format,
            reason: reason.into(),
        })
    }

    /// Create an error for an input document with an unexpected structure
    pub fn unexpected_shape(document: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnexpectedShape {
            document: document.into(),
            reason: reason.into(),
        })
    }

    /// Create a malformed name error
    pub fn malformed_name(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedName { name: name.into() })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
