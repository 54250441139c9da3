//! Core types for the mcdata processor.
//!
//! This crate provides the document model, the encoders that write one
//! document in several formats, and the directory walker that turns data
//! files into namespaced identifiers.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod config;
mod document;
mod emit;
mod error;
mod format;
mod resource;
mod walk;

pub use config::{Config, DATA_CATEGORIES, EXCLUDE_DIRS, JSON_SUFFIX, REPORT_CATEGORIES};
pub use document::{Document, as_string_list, read_document, sort_keys};
pub use emit::{Emitter, Target, encode};
pub use error::{EncodeError, Error, Result};
pub use format::{Format, FormatSet};
pub use resource::{Category, NAMESPACE_SEPARATOR, ResourceLocation, ResourcePath};
pub use walk::{Files, ResourceFile, ResourceWalker};
